pub mod login;
pub mod logout;
pub mod register;
pub mod whoami;

use crate::cli::globals::GlobalArgs;
use anyhow::Result;

#[derive(Debug)]
pub enum Action {
    Register(register::Args),
    Login(login::Args),
    Logout,
    WhoAmI,
}

impl Action {
    /// Run the action against the configured store and return the message
    /// to show the user.
    ///
    /// # Errors
    /// Returns an error if the store cannot be opened or the operation is refused.
    pub fn execute(self, globals: &GlobalArgs) -> Result<String> {
        match self {
            Self::Register(args) => register::handle(args, globals),
            Self::Login(args) => login::handle(args, globals),
            Self::Logout => logout::handle(globals),
            Self::WhoAmI => whoami::handle(globals),
        }
    }
}
