use anyhow::{Context, Result};
use career_insights::{core::ConfigManager, start_web_server};
use std::fs::OpenOptions;
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ConfigManager::load()?;
    config.ensure_directories().await?;

    // Initialize logging
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true) // Clear file on startup
        .open(&config.environment.log_path)
        .with_context(|| {
            format!(
                "Failed to open log file: {}",
                config.environment.log_path.display()
            )
        })?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_writer(file)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("career_insights=info,rocket::server=off")),
        )
        .init();

    info!("Environment: {}", config.environment_name);
    info!("Log file: {}", config.environment.log_path.display());

    start_web_server(config).await
}
