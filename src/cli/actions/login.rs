use crate::cli::globals::GlobalArgs;
use anyhow::Result;
use secrecy::SecretString;

#[derive(Debug)]
pub struct Args {
    pub email: String,
    pub password: SecretString,
}

/// Handle the login action
///
/// # Errors
/// Returns an error if the credentials are refused or the session cannot be saved.
pub fn handle(args: Args, globals: &GlobalArgs) -> Result<String> {
    let portal = globals.portal()?;
    let success = portal.login(&args.email, &args.password)?;

    Ok(format!("Welcome, {}!", success.name))
}
