//! Store error types.

use thiserror::Error;

/// Errors that can occur when talking to a key-value store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Storage is disabled or otherwise not reachable.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Writing the value would exceed the store's capacity.
    #[error("Quota exceeded writing {key}: {needed} bytes needed, {limit} allowed")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Backing file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
