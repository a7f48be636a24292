//! Todo store error types.

use thiserror::Error;

/// Errors that can occur during todo store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Task not found.
    #[error("task not found: {id}")]
    NotFound {
        /// Identifier that failed to resolve.
        id: i64,
    },

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Creates a not found error.
    pub fn not_found(id: i64) -> Self {
        Self::NotFound { id }
    }
}

/// Result type for todo store operations.
pub type StoreResult<T> = Result<T, StoreError>;
