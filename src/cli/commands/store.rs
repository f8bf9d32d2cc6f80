use crate::accounts::PasswordScheme;
use clap::{builder::ValueParser, Arg, ArgMatches, Command};
use std::path::PathBuf;

pub const ARG_STORE: &str = "store";
pub const ARG_PASSWORD_STORAGE: &str = "password-storage";

#[derive(Debug, Clone)]
pub struct Options {
    pub path: PathBuf,
    pub scheme: PasswordScheme,
}

impl Options {
    /// Parse store options from CLI matches.
    ///
    /// # Errors
    /// Returns an error if the store path is empty.
    pub fn parse(matches: &ArgMatches) -> anyhow::Result<Self> {
        let path = match matches.get_one::<PathBuf>(ARG_STORE) {
            Some(path) if path.as_os_str().is_empty() => {
                anyhow::bail!("invalid argument: --{ARG_STORE} must not be empty")
            }
            Some(path) => path.clone(),
            None => default_store_path(),
        };

        let scheme = matches
            .get_one::<PasswordScheme>(ARG_PASSWORD_STORAGE)
            .copied()
            .unwrap_or_default();

        Ok(Self { path, scheme })
    }
}

/// `<data dir>/pordisto/storage.json`, or `./pordisto.json` without a data dir.
#[must_use]
pub fn default_store_path() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from("pordisto.json"),
        |dir| dir.join("pordisto").join("storage.json"),
    )
}

#[must_use]
pub fn validator_password_storage() -> ValueParser {
    ValueParser::from(move |scheme: &str| -> std::result::Result<PasswordScheme, String> {
        scheme.parse::<PasswordScheme>()
    })
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_STORE)
                .short('s')
                .long(ARG_STORE)
                .help("Path of the JSON store holding accounts and the session")
                .env("PORDISTO_STORE")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new(ARG_PASSWORD_STORAGE)
                .long(ARG_PASSWORD_STORAGE)
                .help("How new passwords are stored: argon2 or plain")
                .env("PORDISTO_PASSWORD_STORAGE")
                .global(true)
                .default_value("argon2")
                .value_parser(validator_password_storage()),
        )
}
