//! Common test utilities and helpers
//!
//! Shared by the integration test binaries:
//! - `TestServer` construction over `MemoryStore`
//! - Store wrappers for counting and stalling calls
//! - Signup/signin helpers

#![allow(dead_code)]

pub mod auth_helpers;
pub mod stores;

use std::sync::Arc;
use std::time::Duration;

use axum_test::TestServer;
use inkpost::backend::auth::TokenService;
use inkpost::backend::routes::create_router;
use inkpost::backend::server::AppState;
use inkpost::backend::store::{BlogStore, MemoryStore};

pub use auth_helpers::*;
pub use stores::*;

/// Signing secret used by every test server
pub const TEST_SECRET: &str = "integration-test-secret";

/// Token service matching the test servers' secret
pub fn test_tokens() -> TokenService {
    TokenService::new(TEST_SECRET, Duration::from_secs(3600))
}

/// Application state over an arbitrary store
pub fn state_with(store: Arc<dyn BlogStore>, store_timeout: Duration) -> AppState {
    AppState::new(store, test_tokens(), 4, store_timeout)
}

/// Test server over a fresh `MemoryStore`
pub fn test_server() -> TestServer {
    server_with(Arc::new(MemoryStore::new()), Duration::from_secs(5))
}

/// Test server over an arbitrary store
pub fn server_with(store: Arc<dyn BlogStore>, store_timeout: Duration) -> TestServer {
    TestServer::new(create_router(state_with(store, store_timeout)))
        .expect("Failed to create test server")
}
