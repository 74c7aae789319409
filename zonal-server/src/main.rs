use zonal_server::{Config, Server, ServerState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env) and logging
    dotenv::dotenv().ok();
    let config = Config::from_env();

    // Production also writes daily-rolling JSON logs under work_dir/logs
    let log_dir = config.log_dir();
    let file_logs = config.is_production().then(|| log_dir.to_string_lossy());
    zonal_server::init_logger_with_file(&config.log_level, file_logs.as_deref())?;

    tracing::info!("Zonal territory server starting...");

    // 2. Initialize server state (work dir, database, client directory)
    let state = ServerState::initialize(&config).await?;

    // 3. Run the HTTP server until ctrl-c
    let server = Server::with_state(config, state);
    server.run().await
}
