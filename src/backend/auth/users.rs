/**
 * User Model and Database Operations
 *
 * This module handles user data and the PostgreSQL queries behind signup
 * and signin. `PgStore` calls these; handlers go through `BlogStore`.
 */

use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// User struct representing a user in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: uuid::Uuid,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - User email
/// * `password_hash` - Hashed password
///
/// # Returns
/// Created user, or a unique-violation error if the email is taken
pub async fn create_user(
    pool: &PgPool,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let id = uuid::Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, email, password_hash, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, email, password_hash, created_at
        "#
    )
    .bind(id)
    .bind(email)
    .bind(password_hash)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - User email
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, created_at
        FROM users
        WHERE email = $1
        "#
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
