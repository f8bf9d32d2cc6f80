pub mod account;
pub mod logging;
pub mod store;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    ColorChoice, Command,
};

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("pordisto")
        .about("Local account registration and sessions")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles);

    let command = account::with_subcommands(command);
    let command = store::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::account::{ARG_CONFIRM_PASSWORD, ARG_EMAIL, ARG_NAME, ARG_PASSWORD};
    use super::*;

    const CLEAN_ENV: [(&str, Option<&str>); 8] = [
        ("PORDISTO_NAME", None),
        ("PORDISTO_EMAIL", None),
        ("PORDISTO_PASSWORD", None),
        ("PORDISTO_CONFIRM_PASSWORD", None),
        ("PORDISTO_STORE", None),
        ("PORDISTO_PASSWORD_STORAGE", None),
        ("PORDISTO_LOG_LEVEL", None),
        ("PORDISTO_LOG_JSON", None),
    ];

    fn env_with<'a>(
        overrides: &[(&'a str, Option<&'a str>)],
    ) -> Vec<(&'a str, Option<&'a str>)> {
        let mut vars: Vec<(&'a str, Option<&'a str>)> = CLEAN_ENV.to_vec();
        vars.retain(|(key, _)| !overrides.iter().any(|(k, _)| k == key));
        vars.extend_from_slice(overrides);
        vars
    }

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "pordisto");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("Local account registration and sessions".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_register_args() {
        temp_env::with_vars(CLEAN_ENV, || {
            let matches = new().get_matches_from(vec![
                "pordisto",
                "register",
                "--name",
                "Ana Silva",
                "--email",
                "ana@x.com",
                "--password",
                "secret1",
                "--confirm-password",
                "secret1",
            ]);

            let sub_m = matches.subcommand_matches("register");
            assert!(sub_m.is_some());
            if let Some(sub_m) = sub_m {
                assert_eq!(
                    sub_m.get_one::<String>(ARG_NAME).cloned(),
                    Some("Ana Silva".to_string())
                );
                assert_eq!(
                    sub_m.get_one::<String>(ARG_EMAIL).cloned(),
                    Some("ana@x.com".to_string())
                );
                assert_eq!(
                    sub_m.get_one::<String>(ARG_PASSWORD).cloned(),
                    Some("secret1".to_string())
                );
                assert_eq!(
                    sub_m.get_one::<String>(ARG_CONFIRM_PASSWORD).cloned(),
                    Some("secret1".to_string())
                );
            }
        });
    }

    #[test]
    fn test_login_from_env() {
        let vars = env_with(&[
            ("PORDISTO_EMAIL", Some("ana@x.com")),
            ("PORDISTO_PASSWORD", Some("secret1")),
        ]);
        temp_env::with_vars(vars, || {
            let matches = new().get_matches_from(vec!["pordisto", "login"]);
            let sub_m = matches.subcommand_matches("login");
            assert_eq!(
                sub_m.and_then(|m| m.get_one::<String>(ARG_EMAIL).cloned()),
                Some("ana@x.com".to_string())
            );
            assert_eq!(
                sub_m.and_then(|m| m.get_one::<String>(ARG_PASSWORD).cloned()),
                Some("secret1".to_string())
            );
        });
    }

    #[test]
    fn test_login_requires_password() {
        temp_env::with_vars(CLEAN_ENV, || {
            let result =
                new().try_get_matches_from(vec!["pordisto", "login", "--email", "a@b.com"]);
            assert!(result.is_err());
        });
    }

    #[test]
    fn test_subcommand_required() {
        temp_env::with_vars(CLEAN_ENV, || {
            let result = new().try_get_matches_from(vec!["pordisto"]);
            assert!(result.is_err());
        });
    }

    #[test]
    fn test_global_args_after_subcommand() {
        temp_env::with_vars(CLEAN_ENV, || {
            let matches = new().get_matches_from(vec![
                "pordisto",
                "whoami",
                "--store",
                "/tmp/pordisto.json",
                "--password-storage",
                "plain",
            ]);
            assert_eq!(matches.subcommand_name(), Some("whoami"));
            let options = store::Options::parse(&matches);
            assert!(options.is_ok());
            if let Ok(options) = options {
                assert_eq!(options.path, std::path::PathBuf::from("/tmp/pordisto.json"));
            }
        });
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars(env_with(&[("PORDISTO_LOG_LEVEL", Some(level))]), || {
                let matches = new().get_matches_from(vec!["pordisto", "logout"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(u8::try_from(index).unwrap_or(u8::MAX))
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        for index in 0..5_usize {
            temp_env::with_vars(CLEAN_ENV, || {
                let mut args = vec!["pordisto".to_string(), "logout".to_string()];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(u8::try_from(index).unwrap_or(u8::MAX))
                );
            });
        }
    }
}
