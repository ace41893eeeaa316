/**
 * PostgreSQL Store
 *
 * `PgStore` owns the connection pool for the lifetime of the process. The
 * pool is created once at startup, handed to handlers through `AppState`,
 * and closed during graceful shutdown.
 *
 * Queries live next to their models (`auth::users`, `blog::db`); this type
 * only adapts them to the `BlogStore` trait and classifies `sqlx` errors.
 */

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use uuid::Uuid;

use crate::backend::auth::users::{self, User};
use crate::backend::blog::db;
use crate::backend::store::{BlogStore, StoreError};
use crate::shared::Post;

/// `BlogStore` backed by PostgreSQL
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Wrap an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a connection pool
    ///
    /// # Arguments
    /// * `database_url` - PostgreSQL connection string
    /// * `max_connections` - Pool size
    /// * `acquire_timeout` - How long a handler may wait for a free connection
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    /// Run the embedded migrations from `migrations/`
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!().run(&self.pool).await
    }

    /// Borrow the underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl BlogStore for PgStore {
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, StoreError> {
        Ok(users::create_user(&self.pool, email, password_hash).await?)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(users::get_user_by_email(&self.pool, email).await?)
    }

    async fn create_post(
        &self,
        author_id: Uuid,
        title: &str,
        content: &str,
    ) -> Result<Post, StoreError> {
        Ok(db::create_post(&self.pool, author_id, title, content).await?)
    }

    async fn find_post(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        Ok(db::get_post_by_id(&self.pool, id).await?)
    }

    async fn update_post(
        &self,
        id: Uuid,
        author_id: Uuid,
        title: &str,
        content: &str,
    ) -> Result<Option<Post>, StoreError> {
        Ok(db::update_post(&self.pool, id, author_id, title, content).await?)
    }

    async fn delete_post(&self, id: Uuid, author_id: Uuid) -> Result<Option<Post>, StoreError> {
        Ok(db::delete_post(&self.pool, id, author_id).await?)
    }

    async fn close(&self) {
        tracing::info!("Closing database connection pool");
        self.pool.close().await;
    }
}
