//! 工具模块 - 错误、日志和结果类型
//!
//! - [`AppError`] - 应用错误类型
//! - [`AppResult`] - 统一 Result 别名

pub mod error;
pub mod logger;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
