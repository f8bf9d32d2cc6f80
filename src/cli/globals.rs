use crate::accounts::PasswordScheme;
use crate::portal::Portal;
use crate::storage::FileStore;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub store_path: PathBuf,
    pub password_scheme: PasswordScheme,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(store_path: PathBuf) -> Self {
        Self {
            store_path,
            password_scheme: PasswordScheme::default(),
        }
    }

    pub fn set_password_scheme(&mut self, scheme: PasswordScheme) {
        self.password_scheme = scheme;
    }

    /// Open the file store and build a portal over it.
    ///
    /// # Errors
    /// Returns an error if the store directory cannot be created.
    pub fn portal(&self) -> Result<Portal> {
        let store = FileStore::open(&self.store_path).with_context(|| {
            format!("failed to open store at {}", self.store_path.display())
        })?;

        Ok(Portal::new(Arc::new(store), self.password_scheme))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_global_args() {
        let args = GlobalArgs::new(PathBuf::from("/tmp/pordisto.json"));
        assert_eq!(args.store_path, PathBuf::from("/tmp/pordisto.json"));
        assert_eq!(args.password_scheme, PasswordScheme::Argon2);
    }

    #[test]
    fn test_portal_uses_configured_scheme() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = GlobalArgs::new(dir.path().join("store.json"));
        args.set_password_scheme(PasswordScheme::Plain);

        let portal = args.portal().unwrap();
        assert_eq!(portal.scheme(), PasswordScheme::Plain);
        assert_eq!(portal.current_user_view(), None);
    }
}
