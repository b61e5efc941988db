//! Client error types

use shared::{AppError, FieldErrors};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rejected by server validation
    #[error("Validation error: {}", .0.message)]
    Validation(AppError),

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    /// Form field access with the wrong name or kind
    #[error("Invalid field: {0}")]
    InvalidField(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Field-level messages of a server validation failure
    pub fn field_errors(&self) -> Option<FieldErrors> {
        match self {
            ClientError::Validation(err) => err.field_errors(),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
