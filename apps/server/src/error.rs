//! Server error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use todo_store::StoreError;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(StoreError),
}

impl From<StoreError> for ServerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => Self::NotFound(format!("task {id}")),
            other => Self::Database(other),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}

/// Result type alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
