//! Admin Client - HTTP client and create-form binding for the admin server
//!
//! - [`HttpClient`] talks to `/api/<resource>`
//! - [`CreateForm`] drives a generic "create" form for any catalog resource

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod http;

pub use api::ResourceApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use form::{
    Control, CreateForm, FormStatus, RelationOptions, SelectOption, SubmitOutcome, Widget,
};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::models::Record;
pub use shared::{ApiResponse, AppError, ResourceSchema};
