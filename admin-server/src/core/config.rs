use std::net::SocketAddr;

use super::ServerError;

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (`.env` 由 dotenvy 预先加载)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DATABASE_URL | sqlite:admin.db | SQLite 数据库 |
/// | BIND_ADDR | 0.0.0.0 | 监听地址 |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | DB_MAX_CONNECTIONS | 5 | 连接池大小 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_JSON | false | JSON 日志输出 |
///
/// # 示例
///
/// ```ignore
/// DATABASE_URL=sqlite:/data/admin.db HTTP_PORT=8080 cargo run -p admin-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub http_port: u16,
    pub db_max_connections: u32,
    /// 运行环境: development | staging | production
    pub environment: String,
    pub log_json: bool,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:admin.db".into()),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let raw = format!("{}:{}", self.bind_addr, self.http_port);
        raw.parse().map_err(|_| ServerError::BindAddress(raw))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:admin.db".into(),
            bind_addr: "0.0.0.0".into(),
            http_port: 3000,
            db_max_connections: 5,
            environment: "development".into(),
            log_json: false,
        }
    }
}
