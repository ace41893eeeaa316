//! Authentication test helpers

use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use axum_test::{TestRequest, TestServer};
use serde_json::json;

/// Sign up through the API and return the token
pub async fn signup(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/api/v1/signup")
        .json(&json!({ "email": email, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK, "signup failed: {}", response.text());
    response.text()
}

/// Sign in through the API and return the token
pub async fn signin(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/api/v1/signin")
        .json(&json!({ "email": email, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK, "signin failed: {}", response.text());
    response.text()
}

/// Attach `Authorization: Bearer <token>`
pub fn with_bearer(request: TestRequest, token: &str) -> TestRequest {
    with_authorization(request, &format!("Bearer {}", token))
}

/// Attach a raw Authorization header
pub fn with_authorization(request: TestRequest, value: &str) -> TestRequest {
    request.add_header(
        AUTHORIZATION,
        HeaderValue::from_str(value).expect("invalid header value"),
    )
}
