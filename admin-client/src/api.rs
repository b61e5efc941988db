//! Resource endpoint abstraction used by [`crate::CreateForm`]

use async_trait::async_trait;
use serde_json::Value;
use shared::ResourceSchema;

use crate::{ClientResult, Record};

/// List and create for any catalog resource
#[async_trait]
pub trait ResourceApi: Send + Sync {
    /// `GET /api/<resource>`
    async fn list(&self, schema: &ResourceSchema) -> ClientResult<Vec<Record>>;

    /// `POST /api/<resource>`
    async fn create(&self, schema: &ResourceSchema, body: &Value) -> ClientResult<Record>;
}
