//! Registration, login and logout over the account store and session pointer.
//!
//! A [`Portal`] is the only state a host needs: it is built around a shared
//! [`KeyValueStore`] and dropped with the host. Every operation is a direct
//! read-modify-write against that store. A failed operation leaves no account
//! or session behind; a registration whose session write fails removes the
//! account it just created.

pub mod error;
pub mod observer;
pub mod view;

pub use self::error::{CredentialFailure, LoginError, RegisterError};
pub use self::observer::SessionObserver;
pub use self::view::{initials, UserView};

use crate::accounts::{
    normalize_email,
    password::{self, PasswordScheme, MIN_PASSWORD_LEN},
    valid_email, AccountStore,
};
use crate::session::SessionManager;
use crate::storage::{KeyValueStore, MemoryStore, StorageError};
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSuccess {
    pub name: String,
}

pub struct Portal {
    accounts: AccountStore,
    session: SessionManager,
    scheme: PasswordScheme,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl Portal {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, scheme: PasswordScheme) -> Self {
        Self {
            accounts: AccountStore::new(store.clone()),
            session: SessionManager::new(store),
            scheme,
            observers: Vec::new(),
        }
    }

    /// Portal over a fresh [`MemoryStore`].
    #[must_use]
    pub fn in_memory(scheme: PasswordScheme) -> Self {
        Self::new(Arc::new(MemoryStore::new()), scheme)
    }

    #[must_use]
    pub const fn accounts(&self) -> &AccountStore {
        &self.accounts
    }

    #[must_use]
    pub const fn session(&self) -> &SessionManager {
        &self.session
    }

    #[must_use]
    pub const fn scheme(&self) -> PasswordScheme {
        self.scheme
    }

    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: SessionObserver + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Create an account and sign it in.
    ///
    /// Checks run in order: name, email format, password length, confirmation,
    /// then uniqueness. The email check is stricter than a bare `@`: it needs
    /// a dotted domain, so `a@b` is refused before any password rule runs.
    ///
    /// # Errors
    /// Returns the first failed check, or a storage/hashing error. Nothing is
    /// written unless every check passes; if the session cannot be saved the
    /// new account is removed again before the error is returned.
    #[instrument(skip(self, password, confirm_password))]
    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &SecretString,
        confirm_password: &SecretString,
    ) -> Result<(), RegisterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegisterError::MissingName);
        }

        let email = normalize_email(email);
        if !valid_email(&email) {
            return Err(RegisterError::InvalidEmail);
        }

        let plain = password.expose_secret();
        if !password::long_enough(plain) {
            return Err(RegisterError::WeakPassword {
                min: MIN_PASSWORD_LEN,
            });
        }

        if plain != confirm_password.expose_secret() {
            return Err(RegisterError::PasswordMismatch);
        }

        // Duplicates are rejected before hashing.
        if self.accounts.contains(&email) {
            return Err(RegisterError::DuplicateAccount);
        }

        let stored = self
            .scheme
            .encode(plain)
            .map_err(RegisterError::PasswordHash)?;

        let account = self.accounts.create(name, &email, &stored)?;

        if let Err(e) = self.session.set_current(&account.email) {
            // Undo the insert so a failed registration leaves no account behind.
            if let Err(rollback) = self.accounts.remove(&account.email) {
                warn!(email = %account.email, "failed to roll back account: {rollback}");
            }
            return Err(e.into());
        }

        info!(email = %account.email, scheme = %self.scheme, "account registered");

        self.notify();

        Ok(())
    }

    /// Check credentials and point the session at the account.
    ///
    /// # Errors
    /// Returns `LoginError::InvalidLogin` for an unknown email or a wrong
    /// password alike, or a storage error if the session could not be saved.
    #[instrument(skip(self, password))]
    pub fn login(&self, email: &str, password: &SecretString) -> Result<LoginSuccess, LoginError> {
        let email = normalize_email(email);

        let Some(account) = self.accounts.find(&email) else {
            debug!("login refused: account not found");
            return Err(LoginError::InvalidLogin(CredentialFailure::AccountNotFound));
        };

        let candidate = password.expose_secret();
        if !password::verify(&account.password, candidate) {
            debug!("login refused: invalid credentials");
            return Err(LoginError::InvalidLogin(
                CredentialFailure::InvalidCredentials,
            ));
        }

        self.session.set_current(&account.email)?;
        info!(email = %account.email, "logged in");

        if self.scheme == PasswordScheme::Argon2 && !password::is_hashed(&account.password) {
            self.upgrade_credential(&account.email, candidate);
        }

        self.notify();

        Ok(LoginSuccess { name: account.name })
    }

    /// Clear the session. Logging out while logged out is a no-op.
    ///
    /// # Errors
    /// Returns an error if the store rejects the removal.
    #[instrument(skip(self))]
    pub fn logout(&self) -> Result<(), StorageError> {
        self.session.clear()?;
        info!("logged out");
        self.notify();
        Ok(())
    }

    /// The signed-in user, or `None` when logged out or the pointer is orphaned.
    #[must_use]
    pub fn current_user_view(&self) -> Option<UserView> {
        self.session
            .current_account(&self.accounts)
            .map(|account| UserView::from(&account))
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in(&self.accounts)
    }

    fn upgrade_credential(&self, email: &str, password: &str) {
        let stored = match PasswordScheme::Argon2.encode(password) {
            Ok(stored) => stored,
            Err(e) => {
                warn!(email = %email, "failed to hash plain-text credential: {e}");
                return;
            }
        };

        match self.accounts.set_password(email, &stored) {
            Ok(true) => debug!(email = %email, "plain-text credential upgraded"),
            Ok(false) => {}
            Err(e) => warn!(email = %email, "failed to upgrade plain-text credential: {e}"),
        }
    }

    fn notify(&self) {
        if self.observers.is_empty() {
            return;
        }
        let view = self.current_user_view();
        for observer in &self.observers {
            observer.session_changed(view.as_ref());
        }
    }
}
