//! Storage-specific error type.

use equiptrack_domain::error::EquipTrackError;

/// Errors originating from the in-memory storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A thread panicked while holding the lock on a collection.
    #[error("{0} collection lock poisoned")]
    Poisoned(&'static str),
}

impl From<StorageError> for EquipTrackError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
