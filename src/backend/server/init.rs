/**
 * Server Initialization
 *
 * This module builds the application state from `ServerConfig` and provides
 * the shutdown signal used by `axum::serve`.
 *
 * # Initialization Process
 *
 * 1. Connect to PostgreSQL when `DATABASE_URL` is set, otherwise fall back
 *    to the in-memory store
 * 2. Run pending migrations (failures are logged, startup continues)
 * 3. Build the token service from the signing secret
 * 4. Assemble `AppState` and the router
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::auth::sessions::TokenService;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{ConfigError, ServerConfig};
use crate::backend::server::state::AppState;
use crate::backend::store::{BlogStore, MemoryStore, PgStore};

/// Build the shared application state
///
/// # Error Handling
///
/// - Missing database URL: server runs on `MemoryStore` (data is lost on exit)
/// - Connection failure: returned as `ConfigError::Database`
/// - Migration failure: logged, startup continues
pub async fn build_state(config: &ServerConfig) -> Result<AppState, ConfigError> {
    let store: Arc<dyn BlogStore> = match &config.database_url {
        Some(url) => {
            tracing::info!("Connecting to PostgreSQL");
            let store = PgStore::connect(url, config.max_connections, config.store_timeout)
                .await
                .map_err(ConfigError::Database)?;
            tracing::info!("Database connection pool created");

            match store.migrate().await {
                Ok(()) => tracing::info!("Database migrations completed successfully"),
                Err(e) => tracing::error!("Failed to run migrations: {}", e),
            }

            Arc::new(store)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory store (data will not persist)");
            Arc::new(MemoryStore::new())
        }
    };

    let tokens = TokenService::new(&config.jwt_secret, config.token_ttl);

    Ok(AppState::new(
        store,
        tokens,
        config.bcrypt_cost,
        config.store_timeout,
    ))
}

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Result<(Router, AppState), ConfigError> {
    tracing::info!("Initializing inkpost backend server");

    let state = build_state(config).await?;
    let app = create_router(state.clone());

    tracing::info!("Router configured");
    Ok((app, state))
}

/// Resolves when the process receives Ctrl+C or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn memory_config() -> ServerConfig {
        ServerConfig {
            jwt_secret: "init-secret".to_string(),
            database_url: None,
            port: 0,
            token_ttl: Duration::from_secs(60),
            store_timeout: Duration::from_millis(500),
            max_connections: 1,
            bcrypt_cost: 4,
        }
    }

    #[tokio::test]
    async fn test_build_state_without_database() {
        let state = build_state(&memory_config()).await.unwrap();
        assert_eq!(state.password_cost, 4);
        assert_eq!(state.store_timeout, Duration::from_millis(500));
        assert_eq!(state.tokens.ttl(), Duration::from_secs(60));
        assert!(state.store.find_user_by_email("nobody@x.com").await.unwrap().is_none());
    }
}
