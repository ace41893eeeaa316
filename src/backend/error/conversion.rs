/**
 * Error Conversion
 *
 * All backend errors implement `IntoResponse` from Axum, allowing them to be
 * returned directly from handlers and from the auth middleware.
 *
 * # Response Format
 *
 * Auth gate rejections keep the body clients already expect:
 * ```json
 * { "message": "You are not logged in" }
 * ```
 *
 * Every other error is returned as:
 * ```json
 * { "error": "Blog not found", "status": 404 }
 * ```
 */

use axum::{
    http::{header::RETRY_AFTER, HeaderValue},
    response::{IntoResponse, Json, Response},
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        let body = match self {
            BackendError::AuthRejected => serde_json::json!({ "message": message }),
            _ => serde_json::json!({
                "error": message,
                "status": status.as_u16(),
            }),
        };

        let mut response = (status, Json(body)).into_response();
        if status == axum::http::StatusCode::SERVICE_UNAVAILABLE {
            response
                .headers_mut()
                .insert(RETRY_AFTER, HeaderValue::from_static("1"));
        }
        response
    }
}
