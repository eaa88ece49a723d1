//! # Key-Value Stores
//!
//! The registry persists through the [`PlatformStore`] trait: string keys to
//! string values, read and write only. Two implementations ship here:
//!
//! - [`MemoryStore`]: a shared in-process map. Used in tests and when no
//!   state file is configured.
//! - [`FileStore`]: a single JSON object on disk, rewritten atomically
//!   (temp file + rename) on every write.

use std::collections::{BTreeMap, HashMap};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use thiserror::Error;

/// Error reading from or writing to a [`PlatformStore`].
#[derive(Error, Debug)]
pub enum StoreError {
    /// The underlying medium failed.
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted data could not be decoded.
    #[error("store data is corrupt: {0}")]
    Corrupt(String),

    /// The store refused the operation.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Durable string key-value storage.
///
/// Calls are synchronous and may block briefly on I/O.
pub trait PlatformStore: Send + Sync {
    /// Read the value stored under `key`. A missing key is `Ok(None)`.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

// -- MemoryStore --------------------------------------------------------------

/// Thread-safe, cloneable in-memory store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one entry.
    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.data.write().insert(key.to_string(), value.to_string());
        store
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PlatformStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.data.read().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.data.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// -- FileStore ----------------------------------------------------------------

/// A store backed by one JSON object file, e.g.
///
/// ```json
/// { "current_platform": "merchant" }
/// ```
///
/// A missing file reads as empty. Parent directories are created on the
/// first write.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Create a store over `path`. Nothing is touched until first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&raw)
            .map_err(|e| StoreError::Corrupt(format!("{}: {e}", self.path.display())))
    }

    fn save(&self, data: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let body = serde_json::to_string_pretty(data)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        std::fs::write(&tmp, body)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl PlatformStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock();
        // A corrupt file would otherwise block every future write.
        let mut data = match self.load() {
            Ok(data) => data,
            Err(StoreError::Corrupt(msg)) => {
                tracing::warn!(path = %self.path.display(), "replacing corrupt store file: {msg}");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        data.insert(key.to_string(), value.to_string());
        self.save(&data)
    }
}
