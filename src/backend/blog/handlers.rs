/**
 * Blog Post Handlers
 *
 * HTTP handlers for the post routes under `/api/v1/blog`. All of them sit
 * behind the auth middleware and read the caller through `AuthUser`.
 *
 * Update and delete check ownership first: a post that exists but belongs to
 * someone else is a 403, a post that does not exist is a 404.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::{CreatePostRequest, Post, UpdatePostRequest};

const NOT_FOUND: &str = "Blog not found";
const NOT_OWNER: &str = "You are not allowed to modify this post";

/// Parse a post id from the path or body
///
/// An id that is not a UUID cannot name a stored post, so it is a 404.
fn parse_post_id(raw: &str) -> Result<Uuid, BackendError> {
    Uuid::parse_str(raw.trim()).map_err(|_| BackendError::not_found(NOT_FOUND))
}

/// Load a post and make sure `user_id` wrote it
async fn ensure_owner(
    state: &AppState,
    id: Uuid,
    user_id: Uuid,
    message: &str,
) -> Result<Post, BackendError> {
    let post = state
        .store_call(state.store.find_post(id))
        .await
        .map_err(|e| BackendError::from_store(e, message))?
        .ok_or_else(|| BackendError::not_found(NOT_FOUND))?;

    if !post.is_owned_by(user_id) {
        tracing::warn!(post_id = %id, %user_id, "Rejected modification by non-owner");
        return Err(BackendError::forbidden(NOT_OWNER));
    }

    Ok(post)
}

/// GET /api/v1/blog/{id}
pub async fn get_post(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Post>, BackendError> {
    let id = parse_post_id(&id)?;

    let post = state
        .store_call(state.store.find_post(id))
        .await
        .map_err(|e| BackendError::from_store(e, "Error retrieving blog"))?
        .ok_or_else(|| BackendError::not_found(NOT_FOUND))?;

    Ok(Json(post))
}

/// POST /api/v1/blog
///
/// The author is always the authenticated caller.
pub async fn create_post(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(request): Json<CreatePostRequest>,
) -> Result<Json<Post>, BackendError> {
    let post = state
        .store_call(
            state
                .store
                .create_post(user.user_id, &request.title, &request.content),
        )
        .await
        .map_err(|e| BackendError::from_store(e, "Error creating blog"))?;

    tracing::info!(post_id = %post.id, author_id = %user.user_id, "Post created");
    Ok(Json(post))
}

/// PUT /api/v1/blog
pub async fn update_post(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(request): Json<UpdatePostRequest>,
) -> Result<Json<Post>, BackendError> {
    const FAILED: &str = "Error updating blog";

    let id = parse_post_id(&request.id)?;
    ensure_owner(&state, id, user.user_id, FAILED).await?;

    // The update is scoped to the author, so a post deleted in between is a 404
    let post = state
        .store_call(
            state
                .store
                .update_post(id, user.user_id, &request.title, &request.content),
        )
        .await
        .map_err(|e| BackendError::from_store(e, FAILED))?
        .ok_or_else(|| BackendError::not_found(NOT_FOUND))?;

    tracing::info!(post_id = %post.id, "Post updated");
    Ok(Json(post))
}

/// DELETE /api/v1/blog/{id}
///
/// Returns the deleted post.
pub async fn delete_post(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Post>, BackendError> {
    const FAILED: &str = "Error deleting blog";

    let id = parse_post_id(&id)?;
    ensure_owner(&state, id, user.user_id, FAILED).await?;

    let post = state
        .store_call(state.store.delete_post(id, user.user_id))
        .await
        .map_err(|e| BackendError::from_store(e, FAILED))?
        .ok_or_else(|| BackendError::not_found(NOT_FOUND))?;

    tracing::info!(post_id = %post.id, "Post deleted");
    Ok(Json(post))
}
