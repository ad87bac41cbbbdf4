use anyhow::Result;
use std::sync::Arc;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;
use weatherboard::config::LoggingConfig;
use weatherboard::{ConsoleRenderer, ThemeStore, UnsupportedProvider, WeatherBoard, WeatherboardConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = WeatherboardConfig::load()?;
    init_tracing(&config.logging);

    let theme = ThemeStore::new().load();
    tracing::info!(
        "Starting weatherboard v{} (theme: {})",
        weatherboard::VERSION,
        theme.as_str()
    );

    // No OS geolocation capability is wired up; the board falls back to the
    // configured default location, same as a denied permission.
    let board = WeatherBoard::new(
        config,
        Arc::new(UnsupportedProvider),
        Arc::new(ConsoleRenderer),
    )?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let runner = tokio::spawn(board.run(shutdown_rx));

    tokio::signal::ctrl_c().await?;
    let _ = shutdown_tx.send(true);
    runner.await?;

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    if logging.format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
