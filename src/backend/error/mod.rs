//! Backend Error Module
//!
//! This module defines the error type returned by every HTTP handler and by
//! the authentication middleware.
//!
//! # Architecture
//!
//! - **`types`** - `BackendError` definition, constructors and status mapping
//! - **`conversion`** - `IntoResponse` implementation
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Client-facing messages
//!
//! Internal details (database errors, hashing failures) are logged with
//! `tracing` where they happen and never reach the response body. Clients
//! only ever see the fixed message carried by the variant.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
