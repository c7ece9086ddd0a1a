//! Durable preference store: a small async key-value store persisted as a
//! single JSON object file.
//!
//! Used for user settings that must survive process restarts (currently just
//! the chosen locale). Callers decide what a failure means; the locale
//! resolver treats every error from this store as "value absent".

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised by the preference store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("preference store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file exists but does not contain a valid JSON object.
    #[error("preference store is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Async key-value persistence backed by a JSON file.
///
/// The whole store is read and rewritten on every operation; it holds a
/// handful of small strings, so the simplicity is worth more than the I/O.
/// Writes go through a temp file and rename so an interrupted write never
/// leaves a truncated store behind.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Create a store handle for the given file path.
    ///
    /// Does not touch the filesystem; the file is created lazily on the
    /// first `set`.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read a single value.
    ///
    /// # Returns
    /// * `Ok(Some(value))` if the key is present
    /// * `Ok(None)` if the key or the backing file is absent
    /// * `Err(StoreError)` on I/O failure or a corrupt file
    pub async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let map = match self.load().await? {
            Some(map) => map,
            None => return Ok(None),
        };
        Ok(map.get(key).cloned())
    }

    /// Write a single value, creating the backing file if needed.
    ///
    /// A corrupt existing file is replaced rather than failing the write:
    /// settings must stay writable even after the store was damaged.
    pub async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut map = match self.load().await {
            Ok(Some(map)) => map,
            Ok(None) => BTreeMap::new(),
            Err(StoreError::Corrupt(_)) => BTreeMap::new(),
            Err(e) => return Err(e),
        };
        map.insert(key.to_string(), value.to_string());
        self.persist(&map).await
    }

    /// Remove a key, returning its previous value if it was present.
    pub async fn remove(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut map = match self.load().await? {
            Some(map) => map,
            None => return Ok(None),
        };
        let previous = map.remove(key);
        if previous.is_some() {
            self.persist(&map).await?;
        }
        Ok(previous)
    }

    /// Load the full map, or `None` if the file does not exist yet.
    async fn load(&self) -> Result<Option<BTreeMap<String, String>>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let map = serde_json::from_slice(&bytes)?;
        Ok(Some(map))
    }

    /// Write the full map through a temp file + rename.
    async fn persist(&self, map: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(map)?;
        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}
