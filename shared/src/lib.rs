//! Shared types for the restaurant admin service
//!
//! Used by both the server and the client: the error system, the resource
//! schema descriptors with their validator, the resource catalog, and the
//! record models.

pub mod error;
pub mod models;
pub mod schema;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use schema::catalog;
pub use schema::{FieldErrors, FieldKind, FieldSpec, FieldValue, NewRecord, ResourceSchema};
