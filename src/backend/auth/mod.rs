//! Authentication Module
//!
//! This module handles user registration, signin and identity tokens.
//!
//! # Architecture
//!
//! - **`users`** - User data model and database operations
//! - **`sessions`** - Token generation and validation (`TokenService`)
//! - **`passwords`** - bcrypt hashing on the blocking pool
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email and password → user created → token returned
//! 2. **Signin**: email and password → credentials verified → token returned
//! 3. **Protected routes**: `Authorization: Bearer <token>` → verified by
//!    `middleware::auth` → user id attached to the request
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are stateless and always carry an expiry
//! - Refused signup/signin return 403 without saying why

/// User data model and database operations
pub mod users;

/// Token generation and validation
pub mod sessions;

/// Password hashing
pub mod passwords;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{signin, signup, SigninRequest, SignupRequest};
pub use sessions::{Claims, TokenError, TokenService};
