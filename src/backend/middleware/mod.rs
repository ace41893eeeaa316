//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - Bearer-token gate for the post routes
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware::from_fn_with_state, routing::get, Router};
//! use inkpost::backend::auth::TokenService;
//! use inkpost::backend::middleware::auth_middleware;
//!
//! # fn example(tokens: TokenService) {
//! let protected: Router = Router::new()
//!     .route("/private", get(|| async { "ok" }))
//!     .route_layer(from_fn_with_state(tokens, auth_middleware));
//! # }
//! ```

pub mod auth;

pub use auth::{auth_middleware, bearer_token, AuthUser, AuthenticatedUser};
