//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request types
//! ├── signup.rs   - User registration handler
//! └── signin.rs   - User authentication handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/v1/signup - User registration
//! - **`signin`** - POST /api/v1/signin - User authentication
//!
//! Both return the freshly issued token as plain text.

/// Request types
pub mod types;

/// Signup handler
pub mod signup;

/// Signin handler
pub mod signin;

// Re-export commonly used types
pub use types::{SigninRequest, SignupRequest};

// Re-export handlers
pub use signin::signin;
pub use signup::signup;
