/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /api/v1/signup.
 *
 * # Registration Process
 *
 * 1. Hash password using bcrypt
 * 2. Create user in the store (the store enforces email uniqueness)
 * 3. Generate a token for the new user
 * 4. Return the token as plain text
 *
 * # Security
 *
 * - Only the bcrypt hash is stored
 * - A refused registration returns 403 with a generic message; the client is
 *   not told whether the email was already taken
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::SignupRequest;
use crate::backend::auth::passwords::hash_password;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::backend::store::StoreError;

/// Sign up handler
///
/// # Errors
///
/// * `403 Forbidden` - If the store refuses the new user (e.g. duplicate email)
/// * `503 Service Unavailable` - If the store cannot be reached in time
/// * `500 Internal Server Error` - If hashing or token generation fails
///
/// # Example Request
///
/// ```http
/// POST /api/v1/signup HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "securepassword123"
/// }
/// ```
///
/// # Example Response
///
/// ```text
/// eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...
/// ```
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<String, BackendError> {
    let password_hash = hash_password(request.password, state.password_cost)
        .await
        .map_err(|e| {
            tracing::error!("Failed to hash password: {:?}", e);
            BackendError::Internal
        })?;

    let user = state
        .store_call(state.store.create_user(&request.email, &password_hash))
        .await
        .map_err(|e| match e {
            err @ StoreError::Unavailable(_) => BackendError::from_store(err, "error while signing up"),
            other => {
                tracing::warn!("Signup refused: {}", other);
                BackendError::validation("error while signing up")
            }
        })?;

    let token = state.tokens.issue(user.id).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        BackendError::Internal
    })?;

    tracing::info!(user_id = %user.id, "User created successfully");

    Ok(token)
}
