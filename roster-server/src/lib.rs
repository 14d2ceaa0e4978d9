//! Roster Server - 员工登记 REST API
//!
//! # 模块结构
//!
//! ```text
//! roster-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (SQLite + sqlx)
//! └── utils/         # 错误、日志等工具
//! ```
//!
//! The server exposes two record operations (`/api/employees/add`,
//! `/api/employees/list`) plus a health probe. Field validation is a
//! client concern; the storage layer's unique indexes are the only
//! server-side gate.

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};
