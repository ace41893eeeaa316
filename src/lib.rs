//! inkpost - Main Library
//!
//! inkpost is a minimal blogging backend: users sign up and sign in to
//! receive a signed identity token, and use it to create, read, update and
//! delete blog posts.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types (`Post` and its request bodies)
//! - **`backend`** - Axum server, auth, persistence
//!
//! # Usage
//!
//! ```rust,no_run
//! use inkpost::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let (app, _state) = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! The server runs on the multi-threaded tokio runtime. Shared state is the
//! store handle and the token service, both built at startup and immutable
//! afterwards.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
