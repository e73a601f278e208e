use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use super::{file_storage::FileStorage, memory_storage::MemoryStorage};
use crate::config::{StorageBackend, StorageConfig};

/// Failure of the storage medium itself.
///
/// Malformed session *values* (an unparseable user profile, say) are not
/// medium failures and never surface through this type; the session store
/// treats those as an absent session. Medium failures always propagate.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage i/o failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage contents are not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// The Storage trait abstracts the durable key-value medium sessions are
/// mirrored into (string keys, string values, surviving restarts).
///
/// All operations are synchronous: reads and writes are local, and the
/// guard decides each navigation before the transition commits.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    fn is_durable(&self) -> bool {
        // Real backends survive a restart; MemoryStorage overrides this so
        // startup can log a clearer message.
        true
    }
}

/// Creates a concrete storage backend based on the StorageConfig.
pub fn create_storage(config: &StorageConfig) -> Result<Arc<dyn Storage>, StorageError> {
    match &config.backend {
        StorageBackend::File(file_config) => {
            let storage = FileStorage::new(file_config)?;
            info!("Using file storage at {}", file_config.path.display());
            Ok(Arc::new(storage))
        }
        StorageBackend::Memory => {
            info!("Using in-memory storage.");
            Ok(Arc::new(MemoryStorage::new()))
        }
    }
}
