use prompt_server::{Config, Server, ServerState, db, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 配置, 日志)
    dotenv::dotenv().ok();
    let config = Config::from_env();
    config.ensure_work_dir_structure()?;

    let level = if config.is_development() { "debug" } else { "info" };
    let logs_dir = config.logs_dir();
    prompt_server::init_logger_with_file(Some(level), logs_dir.to_str());

    print_banner();
    tracing::info!("Prompt server starting...");

    // 2. 初始化服务器状态 (数据库 + schema)
    let state = ServerState::initialize(&config).await?;

    // 3. 数据播种：`prompt-server seed` 强制重载后退出，
    //    否则仅在空库时加载一次 — 接受流量前的显式步骤
    let force_seed = std::env::args().nth(1).as_deref() == Some("seed");
    db::seed::load_initial_data(&state.db, force_seed).await?;
    if force_seed {
        tracing::info!("Seed completed, exiting");
        return Ok(());
    }

    // 4. 启动 HTTP 服务器
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {e}");
        return Err(e.into());
    }

    Ok(())
}
