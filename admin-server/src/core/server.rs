//! Server Implementation
//!
//! HTTP 服务器启动和管理

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;

use crate::api;
use crate::core::{Config, Result, ServerState};
use crate::middleware::logging_middleware;

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// Full application router with its layers
    pub fn app(state: ServerState) -> Router {
        api::router()
            .layer(middleware::from_fn(logging_middleware))
            .layer(CorsLayer::permissive())
            .with_state(state)
    }

    /// Serve until Ctrl-C
    pub async fn run(self) -> Result<()> {
        let addr = self.config.socket_addr()?;
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(
            environment = %self.config.environment,
            "Admin server listening on {addr}"
        );

        axum::serve(listener, Self::app(self.state))
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

/// Resolves on Ctrl-C; never resolves if the handler cannot be installed
async fn shutdown_signal() {
    wait_for(tokio::signal::ctrl_c()).await
}

async fn wait_for(signal: impl Future<Output = std::io::Result<()>>) {
    match signal.await {
        Ok(()) => tracing::info!("Shutting down..."),
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C, graceful shutdown disabled");
            std::future::pending::<()>().await;
        }
    }
}
