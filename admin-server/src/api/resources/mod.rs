//! Resource API 模块
//!
//! One route per catalog entry, all served by the same handlers. The
//! route's [`ResourceSchema`] travels as a request extension.

mod handler;

use axum::{Extension, Router, routing::get};
use shared::catalog::RESOURCES;
use shared::ResourceSchema;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    RESOURCES
        .iter()
        .fold(Router::new(), |router, &schema| {
            router.route(&schema.api_path(), routes(schema))
        })
}

fn routes(schema: &'static ResourceSchema) -> axum::routing::MethodRouter<ServerState> {
    get(handler::list)
        .post(handler::create)
        .fallback(handler::method_not_allowed)
        .layer(Extension(schema))
}
