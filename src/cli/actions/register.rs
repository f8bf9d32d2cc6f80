use crate::cli::globals::GlobalArgs;
use anyhow::Result;
use secrecy::SecretString;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

/// Handle the register action
///
/// # Errors
/// Returns an error if validation fails, the email is taken or the store cannot be written.
pub fn handle(args: Args, globals: &GlobalArgs) -> Result<String> {
    let portal = globals.portal()?;

    portal.register(
        &args.name,
        &args.email,
        &args.password,
        &args.confirm_password,
    )?;

    debug!(store = %globals.store_path.display(), "registration stored");

    let name = portal
        .current_user_view()
        .map_or_else(|| args.name.trim().to_string(), |view| view.name);

    Ok(format!("Registered! Welcome, {name}."))
}
