//! 统一错误处理
//!
//! 错误分类很扁平：所有持久化失败 (唯一索引冲突、连接失败、畸形
//! 输入) 都归为一类，以 500 返回底层错误文本；客户端不区分失败
//! 种类。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use shared::client::ApiErrorBody;

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 数据库错误 (500)
    #[error("Database error: {0}")]
    Database(String),

    /// 内部错误 (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        // 响应体只携带错误文本: { "message": ... }
        (status, Json(ApiErrorBody { message })).into_response()
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
