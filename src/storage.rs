//! Local key-value persistence.
//!
//! The tracker only ever talks to a [`KeyValueStore`]: a flat namespace of
//! string keys holding string values. The on-disk implementation keeps one
//! file per key under the storage root:
//!
//! ```text
//! <root>/
//!   gmi_applications_v1.json   # Full snapshot of every application
//! ```
//!
//! Writes go to a sibling temp file first and are renamed into place, so a
//! reader sees either the previous value or the new one, never a torn write.

mod snapshot;

#[cfg(test)]
mod memory;

use std::{fs, io, path::PathBuf};

pub use snapshot::{APPLICATIONS_KEY, Snapshot};

#[cfg(test)]
pub use memory::{FailingStore, MemoryStore};

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, StorageError>;

/// A string-keyed store of string values.
///
/// Reads and writes are synchronous and may fail, but never block
/// indefinitely.
pub trait KeyValueStore {
    /// Returns the value at `key`, or `None` if nothing has been written there.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not valid for this store or the
    /// underlying read fails.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` at `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not valid for this store or the
    /// underlying write fails (full disk, missing directory).
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// File-backed key-value store: one `<key>.json` file per key.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at the given directory.
    ///
    /// The directory is created if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the directory cannot be created.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Returns the default storage root: `~/.wagmi/data/`.
    #[must_use]
    pub fn default_root() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".wagmi").join("data"))
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}
