//! In-memory store
//!
//! Used when no `DATABASE_URL` is configured, and by the test suite. State is
//! lost on restart. Constraints mirror the PostgreSQL schema: unique email,
//! and posts must reference an existing user.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::backend::store::{BlogStore, StoreError};
use crate::shared::Post;

#[derive(Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    /// email -> user id
    emails: HashMap<String, Uuid>,
    posts: HashMap<Uuid, Post>,
}

/// `BlogStore` keeping everything in process memory
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored posts
    pub async fn post_count(&self) -> usize {
        self.tables.read().await.posts.len()
    }
}

#[async_trait]
impl BlogStore for MemoryStore {
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.emails.contains_key(email) {
            return Err(StoreError::Conflict(format!("email already registered: {email}")));
        }

        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        tables.emails.insert(user.email.clone(), user.id);
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .emails
            .get(email)
            .and_then(|id| tables.users.get(id))
            .cloned())
    }

    async fn create_post(
        &self,
        author_id: Uuid,
        title: &str,
        content: &str,
    ) -> Result<Post, StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&author_id) {
            return Err(StoreError::Conflict(format!("unknown author: {author_id}")));
        }

        let now = Utc::now();
        let post = Post {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: content.to_string(),
            author_id,
            created_at: now,
            updated_at: now,
        };
        tables.posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn find_post(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        Ok(self.tables.read().await.posts.get(&id).cloned())
    }

    async fn update_post(
        &self,
        id: Uuid,
        author_id: Uuid,
        title: &str,
        content: &str,
    ) -> Result<Option<Post>, StoreError> {
        let mut tables = self.tables.write().await;
        let Some(post) = tables.posts.get_mut(&id).filter(|p| p.is_owned_by(author_id)) else {
            return Ok(None);
        };

        post.title = title.to_string();
        post.content = content.to_string();
        post.updated_at = Utc::now();
        Ok(Some(post.clone()))
    }

    async fn delete_post(&self, id: Uuid, author_id: Uuid) -> Result<Option<Post>, StoreError> {
        let mut tables = self.tables.write().await;
        let owned = tables
            .posts
            .get(&id)
            .is_some_and(|post| post.is_owned_by(author_id));
        if !owned {
            return Ok(None);
        }
        Ok(tables.posts.remove(&id))
    }
}
