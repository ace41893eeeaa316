/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is built once at startup and cloned into every handler. It
 * holds:
 * - The store (`Arc<dyn BlogStore>`)
 * - The token service (signing keys, token lifetime)
 * - The bcrypt cost and the deadline applied to every store call
 *
 * Nothing in it is mutated after startup; all cross-request consistency is
 * left to the store.
 *
 * # Example
 *
 * ```rust,no_run
 * use inkpost::backend::server::state::AppState;
 * use axum::extract::State;
 *
 * async fn handler(State(state): State<AppState>) {
 *     let user = state
 *         .store_call(state.store.find_user_by_email("a@x.com"))
 *         .await;
 * }
 * ```
 */

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::FromRef;
use tokio::sync::OnceCell;

use crate::backend::auth::passwords::{hash_password, PasswordError};
use crate::backend::auth::sessions::TokenService;
use crate::backend::store::{BlogStore, StoreError};

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Persistence for users and posts
    pub store: Arc<dyn BlogStore>,

    /// Token issuance and verification
    pub tokens: TokenService,

    /// bcrypt work factor for new password hashes
    pub password_cost: u32,

    /// Upper bound on a single store call
    pub store_timeout: Duration,

    /// Hash checked against when signin finds no user, built on first use
    pub(crate) dummy_hash: Arc<OnceCell<String>>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn BlogStore>,
        tokens: TokenService,
        password_cost: u32,
        store_timeout: Duration,
    ) -> Self {
        Self {
            store,
            tokens,
            password_cost,
            store_timeout,
            dummy_hash: Arc::new(OnceCell::new()),
        }
    }

    /// A bcrypt hash at `password_cost` that no submitted password matches
    ///
    /// Signin verifies against it for unknown emails so both failure paths
    /// pay for one bcrypt verification.
    pub async fn dummy_password_hash(&self) -> Result<&str, PasswordError> {
        let hash = self
            .dummy_hash
            .get_or_try_init(|| hash_password("inkpost-no-such-user".to_string(), self.password_cost))
            .await?;
        Ok(hash.as_str())
    }

    /// Run a store operation under the configured deadline
    ///
    /// A call that does not finish in time is reported as
    /// `StoreError::Unavailable`, the same as a connection failure.
    pub async fn store_call<T, F>(&self, operation: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        match tokio::time::timeout(self.store_timeout, operation).await {
            Ok(result) => result,
            Err(_) => Err(StoreError::Unavailable(format!(
                "store call exceeded {:?}",
                self.store_timeout
            ))),
        }
    }
}

/// Implement FromRef for TokenService
///
/// This allows the auth middleware and handlers to extract the token service
/// directly from `AppState`.
impl FromRef<AppState> for TokenService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
