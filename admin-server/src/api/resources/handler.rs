//! Resource API Handlers

use axum::{
    Json,
    extract::{Extension, State, rejection::JsonRejection},
    http::Method,
};
use serde_json::Value;
use shared::models::Record;
use shared::{AppError, AppResult, ResourceSchema};

use crate::core::ServerState;

/// GET /api/<resource> - 获取全部记录
pub async fn list(
    State(state): State<ServerState>,
    Extension(schema): Extension<&'static ResourceSchema>,
) -> AppResult<Json<Vec<Record>>> {
    let records = state.repository().find_all(schema).await?;
    Ok(Json(records))
}

/// POST /api/<resource> - 校验并创建一条记录
///
/// Nothing is written unless the whole body validates.
pub async fn create(
    State(state): State<ServerState>,
    Extension(schema): Extension<&'static ResourceSchema>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<Record>> {
    let Json(body) = payload.map_err(|e| AppError::invalid_format(e.body_text()))?;

    let data = schema.validate(&body).map_err(AppError::invalid_fields)?;
    let record = state.repository().create(schema, data).await?;

    tracing::info!(resource = schema.name, id = %record.id, "Record created");
    Ok(Json(record))
}

/// 其他方法 - 405
pub async fn method_not_allowed(method: Method) -> AppError {
    AppError::method_not_allowed(method)
}
