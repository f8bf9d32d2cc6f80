use crate::accounts::AccountError;
use crate::storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegisterError {
    #[error("name is required")]
    MissingName,
    #[error("invalid email address")]
    InvalidEmail,
    #[error("password must be at least {min} characters")]
    WeakPassword { min: usize },
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("an account with this email already exists")]
    DuplicateAccount,
    #[error("failed to hash password: {0}")]
    PasswordHash(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<AccountError> for RegisterError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::Duplicate(_) => Self::DuplicateAccount,
            AccountError::Storage(e) => Self::Storage(e),
        }
    }
}

/// Why a login was refused. Both reasons render the same message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialFailure {
    AccountNotFound,
    InvalidCredentials,
}

#[derive(Debug, Error)]
pub enum LoginError {
    #[error("invalid email or password")]
    InvalidLogin(CredentialFailure),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl LoginError {
    /// Internal reason for a refused login, for logs and tests only.
    #[must_use]
    pub const fn reason(&self) -> Option<CredentialFailure> {
        match self {
            Self::InvalidLogin(reason) => Some(*reason),
            Self::Storage(_) => None,
        }
    }
}
