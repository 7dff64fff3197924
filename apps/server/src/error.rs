//! Server error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use user_store::UserStoreError;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Structurally malformed request body.
    #[error("invalid input")]
    InvalidInput,

    /// Store operation failure.
    #[error(transparent)]
    Store(#[from] UserStoreError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServerError::InvalidInput => (StatusCode::BAD_REQUEST, "Invalid input"),
            ServerError::Store(UserStoreError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, "User not found")
            }
            // Duplicate create stays a 400 for compatibility with existing clients.
            ServerError::Store(UserStoreError::AlreadyExists { .. }) => {
                (StatusCode::BAD_REQUEST, "User already exists")
            }
            ServerError::Store(UserStoreError::EmptyField { .. }) => {
                (StatusCode::BAD_REQUEST, "Missing fields")
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
