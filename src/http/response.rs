//! JSON error envelope.
//!
//! Every router-detected failure is rendered the same way: an HTTP status
//! plus a body of the form `{"error": "<message>"}`. Backends' own error
//! responses pass through untouched; this envelope is only produced before
//! forwarding begins.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// A request-terminating error with a uniform JSON rendering.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Model identifier absent from the route table.
    pub fn model_not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: "model not found".to_string(),
        }
    }

    /// Transport failure while reading the request body.
    pub fn body_read(cause: impl std::fmt::Display) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: format!("failed to read request body: {}", cause),
        }
    }

    /// Body is not JSON of the expected shape.
    pub fn body_parse(cause: impl std::fmt::Display) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: format!("failed to find model parameter in request body: {}", cause),
        }
    }

    /// Upstream could not be reached or refused the connection.
    pub fn upstream(cause: impl std::fmt::Display) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: format!("failed to reach backend: {}", cause),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(status = %self.status, message = %self.message, "Request failed");
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
