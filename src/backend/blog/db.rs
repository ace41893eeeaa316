//! Database operations for blog posts
//!
//! PostgreSQL queries behind `PgStore`. Update and delete are scoped to the
//! author, so a row that belongs to someone else is reported as missing.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::shared::Post;

/// Create a new post
pub async fn create_post(
    pool: &PgPool,
    author_id: Uuid,
    title: &str,
    content: &str,
) -> Result<Post, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (id, title, content, author_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $5)
        RETURNING id, title, content, author_id, created_at, updated_at
        "#
    )
    .bind(id)
    .bind(title)
    .bind(content)
    .bind(author_id)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Get a post by id
pub async fn get_post_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, author_id, created_at, updated_at
        FROM posts
        WHERE id = $1
        "#
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Replace title and content of a post owned by `author_id`
pub async fn update_post(
    pool: &PgPool,
    id: Uuid,
    author_id: Uuid,
    title: &str,
    content: &str,
) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET title = $3, content = $4, updated_at = $5
        WHERE id = $1 AND author_id = $2
        RETURNING id, title, content, author_id, created_at, updated_at
        "#
    )
    .bind(id)
    .bind(author_id)
    .bind(title)
    .bind(content)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await
}

/// Delete a post owned by `author_id`, returning the deleted row
pub async fn delete_post(
    pool: &PgPool,
    id: Uuid,
    author_id: Uuid,
) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        DELETE FROM posts
        WHERE id = $1 AND author_id = $2
        RETURNING id, title, content, author_id, created_at, updated_at
        "#
    )
    .bind(id)
    .bind(author_id)
    .fetch_optional(pool)
    .await
}
