use crate::cli::globals::GlobalArgs;
use anyhow::Result;

/// Handle the logout action
///
/// # Errors
/// Returns an error if the session pointer cannot be removed from the store.
pub fn handle(globals: &GlobalArgs) -> Result<String> {
    globals.portal()?.logout()?;

    Ok("Logged out.".to_string())
}
