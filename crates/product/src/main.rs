use anyhow::{Context, Result};
use dotenv::dotenv;
use product::{config::myconfig::Config, handler::AppRouter, state::AppState};
use shared::utils::{init_logger, run_metrics_collector};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let _log_guard = init_logger("product-service", config.is_dev, config.enable_file_log);

    info!("🚀 Starting Product Service initialization...");

    let seed = config.load_seed().context("Failed to load product seed")?;

    let state = Arc::new(AppState::new(seed).context("Failed to create AppState")?);

    tokio::spawn(run_metrics_collector(state.system_metrics.clone()));

    info!("✅ Application setup completed successfully.");

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("👋 Product Service stopped");

    Ok(())
}
