//! HTTP API
//!
//! - `/health` - 健康检查
//! - `/api/<resource>` - 通用资源端点 (每个目录资源一个)
//!
//! 未匹配的路径返回 JSON 404

pub mod health;
pub mod resources;

use axum::{Router, http::Uri, routing::get};
use shared::AppError;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(resources::router())
        .fallback(not_found)
}

/// `/api/<name>` for a name outside the catalog is an unknown resource
async fn not_found(uri: Uri) -> AppError {
    match uri.path().strip_prefix("/api/") {
        Some(rest) => AppError::unknown_resource(rest.split('/').next().unwrap_or(rest)),
        None => AppError::not_found(uri.path()),
    }
}
