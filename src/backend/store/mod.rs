//! Store Module
//!
//! The credential and post store behind the blog API. Handlers only see the
//! `BlogStore` trait; the concrete store is chosen once at startup and shared
//! through `AppState`.
//!
//! # Implementations
//!
//! - **`postgres`** - `PgStore`, PostgreSQL through a `sqlx` connection pool
//! - **`memory`** - `MemoryStore`, in-process maps for local runs and tests
//!
//! # Consistency
//!
//! Email uniqueness and post authorship are enforced by the store itself
//! (unique index and foreign key in PostgreSQL, explicit checks in memory).
//! Update and delete are guarded by the author id so the ownership check in
//! the handlers cannot be raced.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::shared::Post;

/// PostgreSQL store
pub mod postgres;

/// In-memory store
pub mod memory;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Errors raised by a `BlogStore`
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness or reference constraint rejected the write
    #[error("Constraint violation: {0}")]
    Conflict(String),

    /// The store could not be reached, or did not answer before the deadline
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Any other database failure
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        let constraint = match &err {
            sqlx::Error::Database(db) => db.is_unique_violation() || db.is_foreign_key_violation(),
            _ => false,
        };
        if constraint {
            return Self::Conflict(err.to_string());
        }

        if matches!(
            err,
            sqlx::Error::PoolTimedOut
                | sqlx::Error::PoolClosed
                | sqlx::Error::Io(_)
                | sqlx::Error::Tls(_)
                | sqlx::Error::WorkerCrashed
        ) {
            return Self::Unavailable(err.to_string());
        }

        Self::Database(err)
    }
}

/// Persistence operations used by the handlers
///
/// Every method performs exactly one store round-trip.
#[async_trait]
pub trait BlogStore: Send + Sync {
    /// Create a user; fails with `Conflict` if the email is taken
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, StoreError>;

    /// Look a user up by email
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Create a post; fails with `Conflict` if the author does not exist
    async fn create_post(
        &self,
        author_id: Uuid,
        title: &str,
        content: &str,
    ) -> Result<Post, StoreError>;

    /// Look a post up by id
    async fn find_post(&self, id: Uuid) -> Result<Option<Post>, StoreError>;

    /// Replace title and content of a post owned by `author_id`
    ///
    /// Returns `None` if no post with that id and author exists.
    async fn update_post(
        &self,
        id: Uuid,
        author_id: Uuid,
        title: &str,
        content: &str,
    ) -> Result<Option<Post>, StoreError>;

    /// Delete a post owned by `author_id`, returning the deleted row
    async fn delete_post(&self, id: Uuid, author_id: Uuid) -> Result<Option<Post>, StoreError>;

    /// Release store resources at shutdown
    async fn close(&self) {}
}
