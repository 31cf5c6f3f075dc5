//! Error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Fixed, client-safe message
    pub message: String,
    /// Mirrors the HTTP status
    pub status_code: u16,
}

/// A failed request, ready to be rendered.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
}

impl ApiError {
    /// Map a service error onto an HTTP status.
    ///
    /// Missing resources become 404; every upstream failure becomes 503.
    pub fn from_domain(err: &DomainError, message: &'static str) -> Self {
        let status = if err.is_not_found() {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        };
        Self { status, message }
    }

    /// Status the response will carry.
    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            message: self.message.to_string(),
            status_code: self.status.as_u16(),
        };
        (self.status, Json(body)).into_response()
    }
}
