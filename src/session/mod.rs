//! The single "current user" pointer.
//!
//! The pointer is a normalized email stored under [`CURRENT_USER_KEY`]. It is
//! not checked against the account store when read; callers that need a live
//! account go through [`SessionManager::current_account`], which treats an
//! orphaned pointer as logged out without touching it.

use crate::accounts::{normalize_email, Account, AccountStore};
use crate::storage::{KeyValueStore, StorageError, CURRENT_USER_KEY};
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct SessionManager {
    store: Arc<dyn KeyValueStore>,
}

impl SessionManager {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Point the session at `email`, replacing any previous session.
    ///
    /// # Errors
    /// Returns an error if the store rejects the write.
    pub fn set_current(&self, email: &str) -> Result<(), StorageError> {
        let email = normalize_email(email);
        self.store.set(CURRENT_USER_KEY, &email)?;
        debug!(email = %email, "session pointer set");
        Ok(())
    }

    /// The stored pointer, empty values read as absent.
    #[must_use]
    pub fn get_current(&self) -> Option<String> {
        self.store
            .get(CURRENT_USER_KEY)
            .filter(|email| !email.is_empty())
    }

    /// Remove the pointer. Clearing an absent pointer is a no-op.
    ///
    /// # Errors
    /// Returns an error if the store rejects the removal.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(CURRENT_USER_KEY)?;
        debug!("session pointer cleared");
        Ok(())
    }

    #[must_use]
    pub fn current_account(&self, accounts: &AccountStore) -> Option<Account> {
        let email = self.get_current()?;
        let account = accounts.find(&email);
        if account.is_none() {
            debug!(email = %email, "session points at a missing account");
        }
        account
    }

    #[must_use]
    pub fn is_logged_in(&self, accounts: &AccountStore) -> bool {
        self.current_account(accounts).is_some()
    }
}
