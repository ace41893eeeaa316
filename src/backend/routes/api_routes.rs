/**
 * API Route Handlers
 *
 * This module wires the `/api/v1` endpoints.
 *
 * # Routes
 *
 * ## Authentication (public)
 * - `POST /api/v1/signup` - User registration, returns a token
 * - `POST /api/v1/signin` - User login, returns a token
 *
 * ## Posts (bearer token required)
 * - `GET /api/v1/blog/{id}` - Fetch a post
 * - `POST /api/v1/blog` - Create a post
 * - `PUT /api/v1/blog` - Update a post (owner only)
 * - `DELETE /api/v1/blog/{id}` - Delete a post (owner only)
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{signin, signup};
use crate::backend::blog::{create_post, delete_post, get_post, update_post};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// Every `/api/v1/blog` route is behind `auth_middleware`, which pulls the
/// `TokenService` out of `app_state` through `FromRef`. The layer is a
/// `route_layer`, so an unknown path still falls through to a plain 404
/// instead of a 403.
pub fn configure_api_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    let blog_routes = Router::new()
        .route("/", post(create_post).put(update_post))
        .route("/{id}", get(get_post).delete(delete_post))
        .route_layer(from_fn_with_state(app_state, auth_middleware));

    router
        .route("/api/v1/signup", post(signup))
        .route("/api/v1/signin", post(signin))
        .nest("/api/v1/blog", blog_routes)
}
