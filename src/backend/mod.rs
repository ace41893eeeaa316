//! Backend Module
//!
//! This module contains all server-side code for inkpost: an Axum HTTP server
//! with token-based authentication and post CRUD.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Signup/signin handlers, password hashing, identity tokens
//! - **`middleware`** - The bearer-token gate
//! - **`blog`** - Post handlers and queries
//! - **`store`** - The `BlogStore` trait with PostgreSQL and in-memory backends
//! - **`error`** - Backend error type and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── blog/           - Blog posts
//! ├── store/          - Persistence
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! ```text
//! request -> TraceLayer -> CorsLayer -> [auth_middleware] -> handler
//!         -> AppState::store_call (deadline) -> BlogStore -> response
//! ```
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`; `BackendError` implements
//! `IntoResponse`. Store errors are logged where they are converted and the
//! client only sees a generic message.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Blog post handlers and queries
pub mod blog;

/// Persistence backends
pub mod store;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, AppState, ServerConfig};
