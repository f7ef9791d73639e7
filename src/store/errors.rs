//! Store error types.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// A persistence failure.
///
/// The message carries driver detail for the logs; HTTP responses must
/// never include it (they answer with a fixed generic body).
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying database driver failure
    #[error("database failure: {0}")]
    Database(#[from] sqlx::Error),

    /// Backend-independent failure (used by the in-memory backend)
    #[error("store failure: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        StoreError::Backend(msg.into())
    }
}
