//! Blog Post Data Structures
//!
//! A post is owned by the user who created it. Field names are camelCase on
//! the wire (`authorId`, `createdAt`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A blog entry as stored and as returned by every `/api/v1/blog` endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique post ID (UUID v4)
    pub id: Uuid,
    /// Post title
    pub title: String,
    /// Post body
    pub content: String,
    /// ID of the user who created the post
    pub author_id: Uuid,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Whether `user_id` is allowed to modify this post
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.author_id == user_id
    }
}

/// Body of `POST /api/v1/blog`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
}

/// Body of `PUT /api/v1/blog`
///
/// The id travels as a string so that an unparsable id is reported as a
/// missing post rather than a body rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub id: String,
    pub title: String,
    pub content: String,
}
