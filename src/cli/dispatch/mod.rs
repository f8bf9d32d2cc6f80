//! Map validated CLI matches to an action and the shared store settings.

use crate::cli::actions::{login, register, Action};
use crate::cli::commands::{
    account::{
        ARG_CONFIRM_PASSWORD, ARG_EMAIL, ARG_NAME, ARG_PASSWORD, CMD_LOGIN, CMD_LOGOUT,
        CMD_REGISTER, CMD_WHOAMI,
    },
    store,
};
use crate::cli::globals::GlobalArgs;
use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;
use secrecy::SecretString;

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if required arguments are missing or the subcommand is unknown.
pub fn handler(matches: &ArgMatches) -> Result<(Action, GlobalArgs)> {
    let store_opts = store::Options::parse(matches)?;
    let mut globals = GlobalArgs::new(store_opts.path);
    globals.set_password_scheme(store_opts.scheme);

    // Closure to read a required string argument from subcommand matches
    let required = |sub_m: &ArgMatches, id: &str| -> Result<String> {
        sub_m
            .get_one::<String>(id)
            .cloned()
            .context(format!("missing required argument: --{id}"))
    };

    let action = match matches.subcommand() {
        Some((CMD_REGISTER, sub_m)) => Action::Register(register::Args {
            name: required(sub_m, ARG_NAME)?,
            email: required(sub_m, ARG_EMAIL)?,
            password: SecretString::from(required(sub_m, ARG_PASSWORD)?),
            confirm_password: SecretString::from(required(sub_m, ARG_CONFIRM_PASSWORD)?),
        }),
        Some((CMD_LOGIN, sub_m)) => Action::Login(login::Args {
            email: required(sub_m, ARG_EMAIL)?,
            password: SecretString::from(required(sub_m, ARG_PASSWORD)?),
        }),
        Some((CMD_LOGOUT, _)) => Action::Logout,
        Some((CMD_WHOAMI, _)) => Action::WhoAmI,
        Some((other, _)) => return Err(anyhow!("unknown subcommand: {other}")),
        None => return Err(anyhow!("missing subcommand")),
    };

    Ok((action, globals))
}
