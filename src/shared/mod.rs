//! Shared Module
//!
//! This module contains the wire types exchanged between the blog API and
//! its clients. They are plain serde structures so that client code (and the
//! integration tests) can deserialize responses without pulling in any of the
//! server machinery.
//!
//! # Overview
//!
//! - **`post`** - The `Post` record and the request bodies used to create
//!   and update posts

/// Blog post record and request bodies
pub mod post;

/// Re-export commonly used types for convenience
pub use post::{CreatePostRequest, Post, UpdatePostRequest};
