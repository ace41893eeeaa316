/**
 * Session Tokens
 *
 * This module issues and verifies the signed identity tokens handed out at
 * signup and signin. Tokens are HS256 JWTs carrying the user id, the issue
 * time and an expiry. They are stateless: nothing is persisted and there is
 * no revocation list, so a token is valid until `exp`.
 *
 * The signing secret is loaded once at startup (see `server::config`) and
 * lives inside `TokenService` for the rest of the process.
 */

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub id: Uuid,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// The user this token was issued to
    pub fn user_id(&self) -> Uuid {
        self.id
    }
}

/// Why a token could not be issued or verified
#[derive(Debug, Error)]
pub enum TokenError {
    /// The signature does not match the secret
    #[error("invalid token signature")]
    InvalidSignature,

    /// The token could not be parsed or does not carry the expected claims
    #[error("malformed token")]
    Malformed,

    /// The token is past its expiry
    #[error("token expired")]
    Expired,

    /// Signing failed
    #[error("failed to encode token: {0}")]
    Encoding(#[source] jsonwebtoken::errors::Error),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidSignature => Self::InvalidSignature,
            ErrorKind::ExpiredSignature => Self::Expired,
            _ => Self::Malformed,
        }
    }
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// Issues and verifies identity tokens with a shared secret
///
/// Cheap to clone; the key material is shared.
#[derive(Clone)]
pub struct TokenService {
    keys: Arc<Keys>,
    ttl: Duration,
}

impl TokenService {
    /// Create a token service
    ///
    /// # Arguments
    /// * `secret` - HMAC signing secret
    /// * `ttl` - Lifetime of issued tokens
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret.as_bytes()),
                decoding: DecodingKey::from_secret(secret.as_bytes()),
            }),
            ttl,
        }
    }

    /// Lifetime of issued tokens
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Create a token for a user
    ///
    /// # Arguments
    /// * `user_id` - User ID (UUID)
    ///
    /// # Returns
    /// Compact JWT string
    pub fn issue(&self, user_id: Uuid) -> Result<String, TokenError> {
        self.issue_at(user_id, Utc::now().timestamp())
    }

    fn issue_at(&self, user_id: Uuid, now: i64) -> Result<String, TokenError> {
        let ttl = i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX);
        let claims = Claims {
            id: user_id,
            iat: now,
            exp: now.saturating_add(ttl),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding)
            .map_err(TokenError::Encoding)
    }

    /// Verify and decode a token
    ///
    /// The signature is checked before any claim, so a forged token is
    /// reported as `InvalidSignature` even when it is also expired.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &self.keys.decoding, &validation)?;
        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("keys", &"<redacted>")
            .field("ttl", &self.ttl)
            .finish()
    }
}
