use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use noisewindow::config::AppConfig;
use noisewindow::server::create_router;
use noisewindow::types::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config.json".to_string());
    let config = AppConfig::load_from_file(Path::new(&config_path))
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("failed to load config from {config_path}"))?;

    let bind_address = config.bind_address.clone();
    let state = Arc::new(AppState::new(config));

    let router = create_router(state);

    info!("NoiseWindow listening on {bind_address}");
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install ctrl-c handler: {e}");
        return;
    }
    info!("Shutdown signal received");
}
