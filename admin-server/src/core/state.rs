use std::sync::Arc;

use crate::core::Config;
use crate::db::{DbService, ResourceRepository};

/// 服务器状态 - 持有所有服务的共享引用
///
/// Cloned into every handler; all fields are cheap handles.
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub db: DbService,
}

impl ServerState {
    pub fn new(config: Config, db: DbService) -> Self {
        Self {
            config: Arc::new(config),
            db,
        }
    }

    /// Open the configured database and build the state
    pub async fn initialize(config: &Config) -> super::Result<Self> {
        let db = DbService::new(&config.database_url, config.db_max_connections).await?;
        Ok(Self::new(config.clone(), db))
    }

    pub fn repository(&self) -> ResourceRepository {
        self.db.repository()
    }
}
