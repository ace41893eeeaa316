/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * Outermost first:
 * 1. `TraceLayer` - request/response spans
 * 2. `CorsLayer::permissive()` - any origin may call the API
 * 3. Per-route auth gate on the post routes (see `api_routes`)
 */

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Liveness message served at `/`
pub const ROOT_MESSAGE: &str = "Hi there! Backend is running.";

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state shared by every handler
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/", get(|| async { ROOT_MESSAGE }));

    let router = configure_api_routes(router, app_state.clone());

    router
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
