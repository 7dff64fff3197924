//! User store error types.

use thiserror::Error;

/// Errors that can occur during user store operations.
#[derive(Debug, Error)]
pub enum UserStoreError {
    /// No record with the given id exists.
    #[error("user not found: {id}")]
    NotFound { id: String },

    /// A record with the given id already exists.
    #[error("user already exists: {id}")]
    AlreadyExists { id: String },

    /// A required field was empty.
    #[error("missing required field: {field}")]
    EmptyField { field: &'static str },
}

impl UserStoreError {
    /// Creates a not found error.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Creates an already exists error.
    pub fn already_exists(id: impl Into<String>) -> Self {
        Self::AlreadyExists { id: id.into() }
    }

    /// Creates an empty field error.
    pub fn empty_field(field: &'static str) -> Self {
        Self::EmptyField { field }
    }
}

/// Result type for user store operations.
pub type UserStoreResult<T> = Result<T, UserStoreError>;
