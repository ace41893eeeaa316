//! Store wrappers for observing the handlers' store traffic

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use inkpost::backend::auth::users::User;
use inkpost::backend::store::{BlogStore, MemoryStore, StoreError};
use inkpost::shared::Post;
use uuid::Uuid;

/// Counts every call before delegating to a `MemoryStore`
#[derive(Default)]
pub struct CountingStore {
    inner: MemoryStore,
    calls: AtomicUsize,
}

impl CountingStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl BlogStore for CountingStore {
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, StoreError> {
        self.hit();
        self.inner.create_user(email, password_hash).await
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        self.hit();
        self.inner.find_user_by_email(email).await
    }

    async fn create_post(
        &self,
        author_id: Uuid,
        title: &str,
        content: &str,
    ) -> Result<Post, StoreError> {
        self.hit();
        self.inner.create_post(author_id, title, content).await
    }

    async fn find_post(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        self.hit();
        self.inner.find_post(id).await
    }

    async fn update_post(
        &self,
        id: Uuid,
        author_id: Uuid,
        title: &str,
        content: &str,
    ) -> Result<Option<Post>, StoreError> {
        self.hit();
        self.inner.update_post(id, author_id, title, content).await
    }

    async fn delete_post(&self, id: Uuid, author_id: Uuid) -> Result<Option<Post>, StoreError> {
        self.hit();
        self.inner.delete_post(id, author_id).await
    }
}

/// Never answers within any reasonable deadline
pub struct StalledStore;

impl StalledStore {
    async fn stall<T>() -> Result<T, StoreError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Err(StoreError::Unavailable("stalled".to_string()))
    }
}

#[async_trait]
impl BlogStore for StalledStore {
    async fn create_user(&self, _email: &str, _password_hash: &str) -> Result<User, StoreError> {
        Self::stall().await
    }

    async fn find_user_by_email(&self, _email: &str) -> Result<Option<User>, StoreError> {
        Self::stall().await
    }

    async fn create_post(
        &self,
        _author_id: Uuid,
        _title: &str,
        _content: &str,
    ) -> Result<Post, StoreError> {
        Self::stall().await
    }

    async fn find_post(&self, _id: Uuid) -> Result<Option<Post>, StoreError> {
        Self::stall().await
    }

    async fn update_post(
        &self,
        _id: Uuid,
        _author_id: Uuid,
        _title: &str,
        _content: &str,
    ) -> Result<Option<Post>, StoreError> {
        Self::stall().await
    }

    async fn delete_post(&self, _id: Uuid, _author_id: Uuid) -> Result<Option<Post>, StoreError> {
        Self::stall().await
    }
}
