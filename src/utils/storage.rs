// src/utils/storage.rs
// ============================================================================
// KEY-VALUE PERSISTENCE
// ============================================================================
// One serialized configuration under one well-known key. Saving is the only
// place the "percentages sum to 100" rule is enforced. Loading treats a
// missing or unreadable snapshot as "nothing saved".
// ============================================================================

use super::serialization::JsonSnapshot;
use crate::params::STORAGE_KEY;
use crate::{Result, TokenomicsConfig, TokenomicsError};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<StorageError> for TokenomicsError {
    fn from(err: StorageError) -> Self {
        TokenomicsError::Storage(err.to_string())
    }
}

/// Minimal string key-value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> std::result::Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), StorageError>;
}

/// In-process store, used by tests and dry runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> std::result::Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> std::result::Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> std::result::Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            path: self.dir.clone(),
            source,
        })?;

        // write-then-rename so a failed write never clobbers the previous snapshot
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value).map_err(|source| StorageError::Io {
            path: staging.clone(),
            source,
        })?;
        fs::rename(&staging, &path).map_err(|source| StorageError::Io { path, source })
    }
}

/// Persist `config` under `STORAGE_KEY`.
///
/// Refused with `Rejection::UnbalancedTotal` unless the percentages sum to
/// exactly 100; nothing is written in that case.
pub fn save_snapshot(store: &mut impl KeyValueStore, config: &TokenomicsConfig) -> Result<()> {
    if let Err(rejection) = config.ensure_balanced() {
        warn!(%rejection, "configuration not saved");
        return Err(rejection.into());
    }

    let raw = config.to_json()?;
    store.set(STORAGE_KEY, &raw)?;

    info!(
        allocations = config.allocations.len(),
        total_supply = %config.total_supply,
        "configuration saved"
    );
    Ok(())
}

/// Read the saved configuration, if any
pub fn load_snapshot(store: &impl KeyValueStore) -> Result<Option<TokenomicsConfig>> {
    let Some(raw) = store.get(STORAGE_KEY)? else {
        return Ok(None);
    };

    match TokenomicsConfig::from_json(&raw) {
        Ok(config) => {
            info!(allocations = config.allocations.len(), "configuration loaded");
            Ok(Some(config))
        }
        Err(e) => {
            warn!(error = %e, "ignoring malformed saved configuration");
            Ok(None)
        }
    }
}
