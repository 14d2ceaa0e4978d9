use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// 服务器状态 - 持有配置与数据库连接池
///
/// Clone 是浅拷贝 (SqlitePool 内部是 Arc)，每个请求处理器都持有
/// 一份独立的句柄。没有其他进程内共享可变状态。
#[derive(Debug, Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// SQLite 连接池
    pub pool: SqlitePool,
}

impl ServerState {
    /// 初始化服务器状态：建数据目录、打开数据库、应用迁移
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        std::fs::create_dir_all(&config.data_dir)
            .map_err(|e| AppError::internal(format!("Failed to create data dir: {e}")))?;

        let db = DbService::new(&config.db_path()).await?;

        Ok(Self {
            config: config.clone(),
            pool: db.pool,
        })
    }
}
