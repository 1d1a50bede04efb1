//! Metagaming API server binary.
//!
//! Reads configuration from the environment (and an optional `.env`), sets up
//! logging, connects storage and serves the REST API until Ctrl-C.

use anyhow::{Context, Result};
use metagaming_server::bootstrap::AppBuilder;
use metagaming_server::config::ServerConfig;
use metagaming_server::logging;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let config = ServerConfig::from_env()?;

    // 2. Setup logging
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    tracing::info!("Starting metagaming API");
    tracing::info!("Storage backend: {}", config.storage);

    // 3. Build application state
    let setup = AppBuilder::new(config).build().await?;
    let app = metagaming_server::router(setup.state);

    // 4. Serve
    let listener = TcpListener::bind(setup.config.http_addr)
        .await
        .with_context(|| format!("failed to bind {}", setup.config.http_addr))?;
    tracing::info!("Listening on {}", setup.config.http_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // 5. Release storage
    if let Some(mongo) = setup.mongo {
        mongo.close().await;
    }

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {error}");
    }
    tracing::info!("Shutdown signal received");
}
