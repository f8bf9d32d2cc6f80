//! JSON file backend.
//!
//! The file holds one JSON object whose values are strings, mirroring a
//! browser's local storage. Every read goes back to disk so a write made by
//! another process sharing the file is observed on the next call.

use crate::storage::{KeyValueStore, StorageError};
use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl FileStore {
    /// Open (or lazily create) the store at `path`, creating parent directories.
    ///
    /// # Errors
    /// Returns an error if the parent directory cannot be created.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        debug!(path = %path.display(), "opened file store");

        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> BTreeMap<String, String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                warn!(path = %self.path.display(), "unreadable store, treating as empty: {e}");
                return BTreeMap::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(path = %self.path.display(), "corrupt store, treating as empty: {e}");
            BTreeMap::new()
        })
    }

    /// Write `entries` to a fresh temp file beside the store, then rename it
    /// over the store. Each writer gets its own temp file, so concurrent
    /// writers may lose updates but never interleave bytes.
    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let body = serde_json::to_vec_pretty(entries)?;
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        // Created with mode 0600 on unix.
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&body)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.load().remove(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.load();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.load();
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.persist(&entries)
    }
}
