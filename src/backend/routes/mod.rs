//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! - **`router`** - Main router creation, root route and global layers
//! - **`api_routes`** - `/api/v1` endpoints (auth, posts)
//!
//! # Example
//!
//! ```rust,no_run
//! use inkpost::backend::routes::create_router;
//! use inkpost::backend::server::{build_state, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let router = create_router(build_state(&config).await?);
//! # Ok(())
//! # }
//! ```

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
