//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Text that doesn't coerce to a product identifier.
    #[error("Invalid product id: {0:?}")]
    InvalidProductId(String),

    /// Category tag outside the closed set.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Persistent store error.
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl From<trendify_store::StoreError> for CommerceError {
    fn from(e: trendify_store::StoreError) -> Self {
        CommerceError::StorageError(e.to_string())
    }
}
