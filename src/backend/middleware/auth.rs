/**
 * Authentication Middleware
 *
 * This module provides the gate in front of every post route. It extracts
 * the bearer token from the Authorization header, verifies it with the
 * `TokenService` and attaches the user id to the request extensions.
 *
 * Every rejection produces the same response (403, `You are not logged in`)
 * so a client cannot tell a forged token from an expired one. The failure
 * kind is only logged server-side; the token itself never is.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::TokenService;
use crate::backend::error::BackendError;

/// Authenticated user data extracted from the identity token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Extract the token from an `Authorization: Bearer <token>` header
///
/// The scheme name is matched case-insensitively. Returns `None` for a
/// missing header, another scheme, or an empty token.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim_start().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies it
/// 3. Attaches `AuthenticatedUser` to request extensions for use in handlers
///
/// Returns `BackendError::AuthRejected` (403) if the token is missing or invalid.
/// The user is not looked up again; a token stays valid until it expires.
pub async fn auth_middleware(
    State(tokens): State<TokenService>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = bearer_token(request.headers()).ok_or_else(|| {
        tracing::warn!("Rejected request without bearer token");
        BackendError::AuthRejected
    })?;

    let claims = tokens.verify(token).map_err(|e| {
        tracing::warn!("Rejected request: {}", e);
        BackendError::AuthRejected
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: claims.user_id(),
    });

    Ok(next.run(request).await)
}

/// Axum extractor for authenticated user
///
/// Reads the `AuthenticatedUser` set by `auth_middleware`. On a route that is
/// not behind the middleware it rejects exactly like the middleware does.
#[derive(Clone, Copy, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::AuthRejected
            })
    }
}
