/**
 * Backend Error Types
 *
 * This module defines the errors produced while serving the blog API.
 *
 * # Error Categories
 *
 * ## Access errors
 *
 * - `AuthRejected` - missing, malformed, forged or expired bearer token
 * - `Forbidden` - authenticated, but not the owner of the post
 * - `ValidationFailure` - signup/signin refused (duplicate email, bad credentials)
 *
 * ## Resource errors
 *
 * - `NotFound` - the requested post does not exist
 *
 * ## Infrastructure errors
 *
 * - `StoreFailure` - the store rejected or failed the operation
 * - `StoreUnavailable` - the store could not be reached in time (retryable)
 * - `Internal` - anything else (hashing, token encoding)
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::store::StoreError;

/// Message returned by the auth gate for every rejection
pub const NOT_LOGGED_IN: &str = "You are not logged in";

/// Backend-specific error types
///
/// Each variant maps to one HTTP status code and one client-facing message.
///
/// # Usage
///
/// ```rust
/// use inkpost::backend::error::BackendError;
///
/// let err = BackendError::not_found("Blog not found");
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request did not carry a valid identity token
    ///
    /// The cause (missing header, bad signature, expiry) is deliberately not
    /// distinguished in the response.
    #[error("Authentication rejected")]
    AuthRejected,

    /// The caller is authenticated but may not perform the operation
    #[error("Forbidden: {message}")]
    Forbidden {
        /// Human-readable error message
        message: String,
    },

    /// Signup or signin was refused
    #[error("Validation failure: {message}")]
    ValidationFailure {
        /// Human-readable error message
        message: String,
    },

    /// The addressed entity does not exist
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// The store failed the operation
    #[error("Store failure: {message}")]
    StoreFailure {
        /// Human-readable error message
        message: String,
    },

    /// The store could not be reached before the deadline
    #[error("Store unavailable")]
    StoreUnavailable,

    /// Unexpected server-side failure
    #[error("Internal error")]
    Internal,
}

impl BackendError {
    /// Create a new forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Create a new validation failure
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailure {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new store failure
    pub fn store_failure(message: impl Into<String>) -> Self {
        Self::StoreFailure {
            message: message.into(),
        }
    }

    /// Map a store error at the handler boundary
    ///
    /// Unavailability stays distinguishable (503); every other store error
    /// becomes a `StoreFailure` carrying `message`. The underlying error is
    /// logged here and dropped.
    pub fn from_store(err: StoreError, message: &str) -> Self {
        match err {
            StoreError::Unavailable(detail) => {
                tracing::error!(%detail, "Store unavailable");
                Self::StoreUnavailable
            }
            other => {
                tracing::error!(error = %other, "{}", message);
                Self::store_failure(message)
            }
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `AuthRejected`, `Forbidden`, `ValidationFailure` - 403 Forbidden
    /// - `NotFound` - 404 Not Found
    /// - `StoreFailure`, `Internal` - 500 Internal Server Error
    /// - `StoreUnavailable` - 503 Service Unavailable
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::AuthRejected | Self::Forbidden { .. } | Self::ValidationFailure { .. } => {
                StatusCode::FORBIDDEN
            }
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::StoreFailure { .. } | Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            Self::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get the client-facing error message
    pub fn message(&self) -> String {
        match self {
            Self::AuthRejected => NOT_LOGGED_IN.to_string(),
            Self::Forbidden { message }
            | Self::ValidationFailure { message }
            | Self::NotFound { message }
            | Self::StoreFailure { message } => message.clone(),
            Self::StoreUnavailable => "Service temporarily unavailable".to_string(),
            Self::Internal => "Internal server error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(BackendError::AuthRejected.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(BackendError::forbidden("no").status_code(), StatusCode::FORBIDDEN);
        assert_eq!(BackendError::validation("no").status_code(), StatusCode::FORBIDDEN);
        assert_eq!(BackendError::not_found("gone").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            BackendError::store_failure("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            BackendError::StoreUnavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(BackendError::Internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_auth_rejected_message() {
        assert_eq!(BackendError::AuthRejected.message(), "You are not logged in");
    }

    #[test]
    fn test_from_store_unavailable() {
        let err = BackendError::from_store(
            StoreError::Unavailable("pool timed out".to_string()),
            "Error retrieving blog",
        );
        assert_matches!(err, BackendError::StoreUnavailable);
    }

    #[test]
    fn test_from_store_hides_detail() {
        let err = BackendError::from_store(
            StoreError::Conflict("duplicate key value violates unique constraint".to_string()),
            "Error creating blog",
        );
        assert_matches!(err, BackendError::StoreFailure { ref message } if message == "Error creating blog");
        assert!(!err.message().contains("duplicate"));
    }
}
