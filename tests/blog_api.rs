//! Blog API integration tests
//!
//! Post CRUD behind the auth gate, against the real router on `MemoryStore`.

mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use inkpost::backend::auth::{Claims, TokenService};
use inkpost::shared::Post;

use common::{
    server_with, signup, test_server, test_tokens, with_authorization, with_bearer,
    CountingStore, StalledStore, TEST_SECRET,
};

const NOT_LOGGED_IN: &str = r#"{"message":"You are not logged in"}"#;

async fn create(server: &axum_test::TestServer, token: &str, title: &str) -> Post {
    let response = with_bearer(server.post("/api/v1/blog"), token)
        .json(&json!({ "title": title, "content": "Lorem ipsum" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response.json::<Post>()
}

#[tokio::test]
async fn test_create_without_token_is_rejected_before_store() {
    let store = Arc::new(CountingStore::default());
    let server = server_with(store.clone(), Duration::from_secs(5));

    let response = server
        .post("/api/v1/blog")
        .json(&json!({ "title": "t", "content": "c" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    assert_eq!(response.text(), NOT_LOGGED_IN);
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn test_bad_credentials_share_one_rejection() {
    let server = test_server();
    let user_id = Uuid::new_v4();

    let forged = TokenService::new("some-other-secret", Duration::from_secs(3600))
        .issue(user_id)
        .unwrap();

    let now = Utc::now().timestamp();
    let expired = encode(
        &Header::default(),
        &Claims {
            id: user_id,
            iat: now - 120,
            exp: now - 60,
        },
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let headers = [
        "Basic dXNlcjpwYXNz".to_string(),
        "Bearer ".to_string(),
        "Bearer not.a.token".to_string(),
        format!("Bearer {}", forged),
        format!("Bearer {}", expired),
    ];

    for value in headers {
        let path = format!("/api/v1/blog/{}", Uuid::new_v4());
        let response = with_authorization(server.get(&path), &value).await;
        assert_eq!(response.status_code(), StatusCode::FORBIDDEN, "header {:?}", value);
        assert_eq!(response.text(), NOT_LOGGED_IN);
    }
}

#[tokio::test]
async fn test_scheme_name_is_case_insensitive() {
    let server = test_server();
    let token = signup(&server, "reader@x.com", "p1").await;

    let path = format!("/api/v1/blog/{}", Uuid::new_v4());
    let response = with_authorization(server.get(&path), &format!("bearer {}", token)).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_post_uses_bearer_identity() {
    let server = test_server();
    let token = signup(&server, "author@x.com", "p1").await;
    let user_id = test_tokens().verify(&token).unwrap().user_id();

    let post = create(&server, &token, "First").await;
    assert_eq!(post.author_id, user_id);
    assert_eq!(post.title, "First");

    let fetched = with_bearer(server.get(&format!("/api/v1/blog/{}", post.id)), &token).await;
    assert_eq!(fetched.status_code(), StatusCode::OK);
    assert_eq!(fetched.json::<Post>(), post);
}

#[tokio::test]
async fn test_post_json_uses_camel_case() {
    let server = test_server();
    let token = signup(&server, "author@x.com", "p1").await;
    let post = create(&server, &token, "Shape").await;

    let body: Value = with_bearer(server.get(&format!("/api/v1/blog/{}", post.id)), &token)
        .await
        .json();
    assert!(body.get("authorId").is_some());
    assert!(body.get("createdAt").is_some());
    assert!(body.get("author_id").is_none());
}

#[tokio::test]
async fn test_get_missing_post_is_not_found() {
    let server = test_server();
    let token = signup(&server, "reader@x.com", "p1").await;

    let response = with_bearer(server.get(&format!("/api/v1/blog/{}", Uuid::new_v4())), &token).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = with_bearer(server.get("/api/v1/blog/not-a-uuid"), &token).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_post() {
    let server = test_server();
    let token = signup(&server, "author@x.com", "p1").await;
    let post = create(&server, &token, "Draft").await;

    let response = with_bearer(server.put("/api/v1/blog"), &token)
        .json(&json!({ "id": post.id, "title": "Final", "content": "Done" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let updated = response.json::<Post>();
    assert_eq!(updated.id, post.id);
    assert_eq!(updated.title, "Final");
    assert_eq!(updated.content, "Done");
    assert_eq!(updated.author_id, post.author_id);
}

#[tokio::test]
async fn test_update_missing_post_is_not_found() {
    let server = test_server();
    let token = signup(&server, "author@x.com", "p1").await;

    let response = with_bearer(server.put("/api/v1/blog"), &token)
        .json(&json!({ "id": Uuid::new_v4(), "title": "t", "content": "c" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_owner_cannot_modify() {
    let server = test_server();
    let owner = signup(&server, "owner@x.com", "p1").await;
    let intruder = signup(&server, "intruder@x.com", "p2").await;
    let post = create(&server, &owner, "Mine").await;

    let response = with_bearer(server.put("/api/v1/blog"), &intruder)
        .json(&json!({ "id": post.id, "title": "Hijacked", "content": "x" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body: Value = response.json();
    assert_eq!(body["error"], "You are not allowed to modify this post");

    let response = with_bearer(server.delete(&format!("/api/v1/blog/{}", post.id)), &intruder).await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    let unchanged = with_bearer(server.get(&format!("/api/v1/blog/{}", post.id)), &owner)
        .await
        .json::<Post>();
    assert_eq!(unchanged, post);
}

#[tokio::test]
async fn test_delete_twice_is_not_found() {
    let server = test_server();
    let token = signup(&server, "author@x.com", "p1").await;
    let post = create(&server, &token, "Ephemeral").await;
    let path = format!("/api/v1/blog/{}", post.id);

    let response = with_bearer(server.delete(&path), &token).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Post>().id, post.id);

    let response = with_bearer(server.delete(&path), &token).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = with_bearer(server.get(&path), &token).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_stalled_store_is_unavailable() {
    let server = server_with(Arc::new(StalledStore), Duration::from_millis(50));
    let token = test_tokens().issue(Uuid::new_v4()).unwrap();

    let response = with_bearer(server.get(&format!("/api/v1/blog/{}", Uuid::new_v4())), &token).await;
    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.header("retry-after"), "1");
    let body: Value = response.json();
    assert_eq!(body["status"], 503);
}
