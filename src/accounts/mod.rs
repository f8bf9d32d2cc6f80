//! Account records keyed by normalized email.
//!
//! The whole mapping lives in one serialized blob under [`USERS_KEY`]. Reads
//! recover to an empty mapping when the blob is missing or malformed; writes
//! replace the blob in a single store call.

pub mod email;
pub mod password;

pub use self::email::{normalize_email, valid_email};
pub use self::password::PasswordScheme;

use crate::storage::{KeyValueStore, StorageError, USERS_KEY};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("an account with email {0} already exists")]
    Duplicate(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Clone)]
pub struct AccountStore {
    store: Arc<dyn KeyValueStore>,
}

impl AccountStore {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// All accounts, keyed by normalized email. Never fails.
    #[must_use]
    pub fn get_all(&self) -> HashMap<String, Account> {
        let Some(raw) = self.store.get(USERS_KEY) else {
            return HashMap::new();
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("malformed account data, treating as empty: {e}");
            HashMap::new()
        })
    }

    #[must_use]
    pub fn find(&self, email: &str) -> Option<Account> {
        self.get_all().remove(&normalize_email(email))
    }

    #[must_use]
    pub fn contains(&self, email: &str) -> bool {
        self.get_all().contains_key(&normalize_email(email))
    }

    /// Insert a new account. `password` is stored as given, already encoded.
    ///
    /// # Errors
    /// Returns `AccountError::Duplicate` if the normalized email is taken, or
    /// `AccountError::Storage` if the mapping could not be written back.
    pub fn create(&self, name: &str, email: &str, password: &str) -> Result<Account, AccountError> {
        let email = normalize_email(email);
        let mut accounts = self.get_all();

        if accounts.contains_key(&email) {
            return Err(AccountError::Duplicate(email));
        }

        let account = Account {
            name: name.trim().to_string(),
            email: email.clone(),
            password: password.to_string(),
        };

        accounts.insert(email, account.clone());
        self.save(&accounts)?;

        debug!(email = %account.email, "account created");

        Ok(account)
    }

    /// Replace the stored credential of an existing account.
    ///
    /// Returns `false` when no account matches `email`.
    ///
    /// # Errors
    /// Returns an error if the mapping could not be written back.
    pub fn set_password(&self, email: &str, password: &str) -> Result<bool, StorageError> {
        let email = normalize_email(email);
        let mut accounts = self.get_all();

        let Some(account) = accounts.get_mut(&email) else {
            return Ok(false);
        };
        password.clone_into(&mut account.password);

        self.save(&accounts)?;

        Ok(true)
    }

    /// Delete the account stored under `email`.
    ///
    /// Returns `false` when no account matches, without writing.
    ///
    /// # Errors
    /// Returns an error if the mapping could not be written back.
    pub fn remove(&self, email: &str) -> Result<bool, StorageError> {
        let mut accounts = self.get_all();

        if accounts.remove(&normalize_email(email)).is_none() {
            return Ok(false);
        }

        self.save(&accounts)?;

        Ok(true)
    }

    fn save(&self, accounts: &HashMap<String, Account>) -> Result<(), StorageError> {
        let raw = serde_json::to_string(accounts)?;
        self.store.set(USERS_KEY, &raw)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn store() -> (Arc<MemoryStore>, AccountStore) {
        let backing = Arc::new(MemoryStore::new());
        let accounts = AccountStore::new(backing.clone());
        (backing, accounts)
    }

    #[test]
    fn get_all_on_missing_blob_is_empty() {
        let (_, accounts) = store();
        assert!(accounts.get_all().is_empty());
    }

    #[test]
    fn get_all_on_corrupt_blob_is_empty() {
        let (backing, accounts) = store();
        backing.set(USERS_KEY, "[1, 2").unwrap();
        assert!(accounts.get_all().is_empty());

        backing.set(USERS_KEY, r#"{"a@b.com": "not a record"}"#).unwrap();
        assert!(accounts.get_all().is_empty());
    }

    #[test]
    fn create_normalizes_email_and_trims_name() {
        let (_, accounts) = store();
        let account = accounts
            .create("  Ana Silva ", " Ana@X.com ", "secret1")
            .unwrap();

        assert_eq!(account.email, "ana@x.com");
        assert_eq!(account.name, "Ana Silva");
        assert_eq!(accounts.find("ANA@x.COM"), Some(account));
        assert!(accounts.contains("ana@x.com"));
    }

    #[test]
    fn create_rejects_case_variant_duplicates() {
        let (_, accounts) = store();
        accounts.create("Ana", "ana@x.com", "first1").unwrap();

        let err = accounts.create("Other", "ANA@X.COM", "second").unwrap_err();
        assert!(matches!(err, AccountError::Duplicate(ref email) if email == "ana@x.com"));

        let kept = accounts.find("ana@x.com").unwrap();
        assert_eq!(kept.name, "Ana");
        assert_eq!(kept.password, "first1");
        assert_eq!(accounts.get_all().len(), 1);
    }

    #[test]
    fn persisted_layout_matches_key_value_contract() {
        let (backing, accounts) = store();
        accounts.create("Ana", "ana@x.com", "secret1").unwrap();

        let raw = backing.get(USERS_KEY).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "ana@x.com": { "name": "Ana", "email": "ana@x.com", "password": "secret1" }
            })
        );
    }

    #[test]
    fn reads_records_written_by_other_clients() {
        let (backing, accounts) = store();
        backing
            .set(
                USERS_KEY,
                r#"{"bia@x.com":{"name":"Bia","email":"bia@x.com","password":"hunter2"}}"#,
            )
            .unwrap();

        let account = accounts.find("Bia@X.com").unwrap();
        assert_eq!(account.name, "Bia");
    }

    #[test]
    fn set_password_updates_existing_only() {
        let (_, accounts) = store();
        accounts.create("Ana", "ana@x.com", "secret1").unwrap();

        assert!(accounts.set_password("ANA@x.com", "secret2").unwrap());
        assert_eq!(accounts.find("ana@x.com").unwrap().password, "secret2");
        assert!(!accounts.set_password("nobody@x.com", "secret3").unwrap());
        assert_eq!(accounts.get_all().len(), 1);
    }

    #[test]
    fn remove_deletes_only_the_matching_account() {
        let (backing, accounts) = store();
        accounts.create("Ana", "ana@x.com", "secret1").unwrap();
        accounts.create("Bia", "bia@x.com", "secret2").unwrap();

        assert!(accounts.remove("ANA@x.com").unwrap());
        assert!(!accounts.contains("ana@x.com"));
        assert!(accounts.contains("bia@x.com"));

        let before = backing.get(USERS_KEY);
        assert!(!accounts.remove("ana@x.com").unwrap());
        assert_eq!(backing.get(USERS_KEY), before);
    }

    #[test]
    fn debug_hides_password() {
        let account = Account {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            password: "secret1".to_string(),
        };
        let rendered = format!("{account:?}");
        assert!(!rendered.contains("secret1"));
        assert!(rendered.contains("***"));
    }
}
