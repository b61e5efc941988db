//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::NotFound | Self::UnknownResource => StatusCode::NOT_FOUND,

            Self::AlreadyExists => StatusCode::CONFLICT,

            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,

            Self::Unknown | Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (validation, malformed body, dangling reference)
            Self::ValidationFailed | Self::InvalidFormat | Self::ReferenceNotFound => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}
