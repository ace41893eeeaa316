/**
 * inkpost Server Entry Point
 *
 * Loads `.env`, initializes tracing, builds the app from the environment and
 * serves it until Ctrl+C or SIGTERM.
 */

use inkpost::backend::server::{create_app, shutdown_signal, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    // Initialize tracing, INFO unless RUST_LOG says otherwise
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env().map_err(|e| {
        tracing::error!("Invalid configuration: {}", e);
        e
    })?;
    tracing::debug!(?config, "Configuration loaded");

    let (app, state) = create_app(&config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    state.store.close().await;
    tracing::info!("Server stopped");

    Ok(())
}
