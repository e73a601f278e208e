use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::base::{Storage, StorageError};

/// Configuration for the file backend.
#[derive(Deserialize, Serialize, Debug, JsonSchema)]
pub struct FileStorageConfig {
    /// Path of the JSON file holding the key-value entries.
    pub path: PathBuf,
}

/// Durable backend: a single JSON object file on disk.
///
/// Every operation re-reads the file, so entries written by another process
/// against the same file are picked up on the next navigation, the same way
/// the reference storage behaved across tabs.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(config: &FileStorageConfig) -> Result<Self, StorageError> {
        if let Some(parent) = config.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(FileStorage {
            path: config.path.clone(),
        })
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let contents = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)?;
        debug!("Wrote storage key '{}'", key);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.flush(&entries)?;
            debug!("Removed storage key '{}'", key);
        }
        Ok(())
    }
}
