//! # Pordisto (local accounts & sessions)
//!
//! `pordisto` keeps user accounts and the "current user" session pointer in a
//! single string key-value store, the same way a web page would keep them in
//! its local storage.
//!
//! ## Storage Layout
//!
//! Two keys are used in the shared store:
//!
//! - **`users`:** a JSON object mapping the normalized email to
//!   `{ name, email, password }`. A missing or unparsable value reads as `{}`.
//! - **`currentUser`:** the normalized email of the active account, or absent.
//!
//! ## Sessions
//!
//! The session is a single pointer with no expiry. Two processes sharing the
//! same store observe and overwrite the same pointer (last writer wins). A
//! pointer to an account that no longer exists is treated as logged out.
//!
//! ## Credentials
//!
//! New passwords are stored as salted `argon2id` PHC strings by default.
//! `PasswordScheme::Plain` keeps them verbatim for parity with stores written
//! by older clients; verification accepts both encodings.

pub mod accounts;
pub mod cli;
pub mod portal;
pub mod session;
pub mod storage;

pub use accounts::{Account, AccountStore, PasswordScheme};
pub use portal::{LoginError, LoginSuccess, Portal, RegisterError, SessionObserver, UserView};
pub use session::SessionManager;
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
