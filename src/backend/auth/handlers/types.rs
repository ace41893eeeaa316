/**
 * Authentication Handler Types
 *
 * Request bodies for signup and signin. Both endpoints answer with the raw
 * token as `text/plain`, so there is no response type.
 */

use serde::{Deserialize, Serialize};

/// Sign up request
///
/// Contains the email and password for user registration.
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    /// User's email address
    pub email: String,
    /// User's password (will be hashed before storage)
    pub password: String,
}

/// Sign in request
///
/// Contains the email and password for user authentication.
#[derive(Deserialize, Serialize, Debug)]
pub struct SigninRequest {
    /// User's email address
    pub email: String,
    /// User's password (will be verified against stored hash)
    pub password: String,
}
