//! Errors raised by the persistent key-value area.

use std::path::PathBuf;
use thiserror::Error;

/// Key-value storage failures.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Failed to read the backing file
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the backing file
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stored content is not valid JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Storage refused the operation (quota, disabled, test failure injection)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}
