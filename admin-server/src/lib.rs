//! Admin Server - 餐厅后台管理服务
//!
//! 为目录中的每个资源提供通用的列表/创建端点。
//!
//! # 模块结构
//!
//! ```text
//! admin-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── middleware/    # 请求日志
//! ├── utils/         # 日志初始化
//! └── db/            # SQLite 连接池和通用仓储
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod utils;

pub use core::{Config, Server, ServerError, ServerState};
pub use db::DbService;
pub use utils::init_logger;
