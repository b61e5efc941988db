//! Error types and API response structures

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

use crate::schema::FieldErrors;

/// Application error with structured error code and details
///
/// This is the primary error type of the admin service, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details (field-level errors, context)
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    /// Field-level errors carried under `details.errors`, if any
    pub fn field_errors(&self) -> Option<FieldErrors> {
        let errors = self.details.as_ref()?.get("errors")?;
        serde_json::from_value(errors.clone()).ok()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error carrying every failing field
    ///
    /// The message is the first field error, the full map lands in
    /// `details.errors`.
    pub fn invalid_fields(errors: FieldErrors) -> Self {
        let message = errors
            .iter()
            .next()
            .map(|(_, msg)| msg.clone())
            .unwrap_or_else(|| ErrorCode::ValidationFailed.message().to_string());
        let details = serde_json::to_value(&errors).unwrap_or(Value::Null);
        Self::with_message(ErrorCode::ValidationFailed, message).with_detail("errors", details)
    }

    /// Create a not found error for a path no route serves
    pub fn not_found(path: impl Into<String>) -> Self {
        let p = path.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", p)).with_detail("path", p)
    }

    /// Create an unknown resource error
    pub fn unknown_resource(name: impl Into<String>) -> Self {
        let r = name.into();
        Self::with_message(ErrorCode::UnknownResource, format!("Unknown resource {}", r))
            .with_detail("resource", r)
    }

    /// Create a method not allowed error (`Method PUT not allowed`)
    pub fn method_not_allowed(method: impl std::fmt::Display) -> Self {
        Self::with_message(
            ErrorCode::MethodNotAllowed,
            format!("Method {} not allowed", method),
        )
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    /// Create an invalid format error (malformed body)
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidFormat, msg)
    }

    /// Create a duplicate record error
    pub fn already_exists(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::AlreadyExists, msg)
    }

    /// Create a dangling reference error
    pub fn reference_not_found(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ReferenceNotFound, msg)
    }
}

/// Error body returned by every failing endpoint
///
/// - `code`: Error code
/// - `message`: Human-readable message
/// - `details`: Additional error details (field errors under `errors`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl ApiResponse {
    /// Create an error response from an AppError
    pub fn error(err: &AppError) -> Self {
        Self {
            code: Some(err.code.code()),
            message: err.message.clone(),
            details: err.details.clone(),
        }
    }

    /// Rebuild the AppError an error body was produced from
    ///
    /// Unknown or missing codes fall back to `fallback`.
    pub fn into_app_error(self, fallback: ErrorCode) -> AppError {
        let code = self
            .code
            .and_then(|c| ErrorCode::try_from(c).ok())
            .unwrap_or(fallback);
        AppError {
            code,
            message: self.message,
            details: self.details,
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        let body = ApiResponse::error(&self);

        // Log system errors
        if matches!(self.code.category(), super::category::ErrorCategory::System) {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        }

        (status, Json(body)).into_response()
    }
}
