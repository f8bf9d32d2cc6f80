use crate::cli::globals::GlobalArgs;
use anyhow::Result;

/// Handle the whoami action
///
/// # Errors
/// Returns an error if the store cannot be opened.
pub fn handle(globals: &GlobalArgs) -> Result<String> {
    let message = match globals.portal()?.current_user_view() {
        Some(view) => format!("{} ({})", view.name, view.initials),
        None => "Not logged in.".to_string(),
    };

    Ok(message)
}
