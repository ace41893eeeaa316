//! Server Module
//!
//! Everything needed to turn a `ServerConfig` into a running Axum app.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Environment configuration
//! └── init.rs         - State construction, app creation, shutdown signal
//! ```
//!
//! # State Management
//!
//! `AppState` holds the store handle, the token service, the bcrypt cost and
//! the store-call deadline. It is built once and cloned per request; none of
//! it is mutated after startup.

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::{ConfigError, ServerConfig};
pub use init::{build_state, create_app, shutdown_signal};
pub use state::AppState;
