//! String key-value stores shared by the account store and the session pointer.
//!
//! Reads never fail: a backend that cannot produce a value reports it as
//! absent. Writes surface `StorageError` so callers leave their own state
//! untouched when the backend refuses the update.

pub mod file;
pub mod memory;

pub use self::file::FileStore;
pub use self::memory::MemoryStore;

use thiserror::Error;

/// Key holding the serialized account mapping.
pub const USERS_KEY: &str = "users";

/// Key holding the normalized email of the active account.
pub const CURRENT_USER_KEY: &str = "currentUser";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize storage contents: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns an error if the backend fails to persist the value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    /// Returns an error if the backend fails to persist the removal.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
