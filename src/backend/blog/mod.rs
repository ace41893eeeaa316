//! Blog posts
//!
//! - **`handlers`** - HTTP handlers for post CRUD
//! - **`db`** - PostgreSQL queries used by `PgStore`

pub mod db;
pub mod handlers;

pub use handlers::{create_post, delete_post, get_post, update_post};
