/**
 * Signin Handler
 *
 * This module implements the user authentication handler for POST /api/v1/signin.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Generate a token
 * 4. Return the token as plain text
 *
 * # Security
 *
 * - Unknown email and wrong password produce the same 403 response, and
 *   both run one bcrypt verification
 * - Passwords are never logged
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::SigninRequest;
use crate::backend::auth::passwords::verify_password;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

const INVALID_CREDENTIALS: &str = "invalid credentials";

/// Signin handler
///
/// # Errors
///
/// * `403 Forbidden` - If the user is not found or the password is incorrect
/// * `503 Service Unavailable` - If the store cannot be reached in time
/// * `500 Internal Server Error` - If the lookup, password check or token generation fails
pub async fn signin(
    State(state): State<AppState>,
    Json(request): Json<SigninRequest>,
) -> Result<String, BackendError> {
    let user = state
        .store_call(state.store.find_user_by_email(&request.email))
        .await
        .map_err(|e| BackendError::from_store(e, "Error signing in"))?;

    // An unknown email still costs one bcrypt verification
    let password_hash = match &user {
        Some(user) => user.password_hash.clone(),
        None => state
            .dummy_password_hash()
            .await
            .map_err(|e| {
                tracing::error!("Failed to prepare password check: {:?}", e);
                BackendError::Internal
            })?
            .to_string(),
    };

    let valid = verify_password(request.password, password_hash)
        .await
        .map_err(|e| {
            tracing::error!("Password verification error: {:?}", e);
            BackendError::Internal
        })?;

    let user = match user {
        Some(user) if valid => user,
        Some(user) => {
            tracing::warn!(user_id = %user.id, "Invalid password");
            return Err(BackendError::validation(INVALID_CREDENTIALS));
        }
        None => {
            tracing::warn!("Signin for unknown email");
            return Err(BackendError::validation(INVALID_CREDENTIALS));
        }
    };

    let token = state.tokens.issue(user.id).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        BackendError::Internal
    })?;

    tracing::info!(user_id = %user.id, "User signed in");

    Ok(token)
}
