use roster_server::{Config, Server, ServerState, init_logger_with_file};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 环境与配置
    dotenv::dotenv().ok();
    let config = Config::from_env();

    // 2. 日志 (可选文件输出)
    let log_level = std::env::var("LOG_LEVEL").ok();
    init_logger_with_file(log_level.as_deref(), config.log_dir.as_deref());

    tracing::info!("Roster server starting...");

    // 3. 初始化状态 (打开数据库, 应用迁移)
    let state = ServerState::initialize(&config).await?;

    // 4. 启动 HTTP 服务器
    Server::with_state(config, state).run().await
}
