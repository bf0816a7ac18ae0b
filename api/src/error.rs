//! Error kinds surfaced by the HTTP layer.
//!
//! | variant            | status | body                                      |
//! |--------------------|--------|-------------------------------------------|
//! | `InvalidInput`     | 400    | `{ "error": "No code submitted" }`        |
//! | `MethodNotAllowed` | 405    | `{ "error": "Method Not Allowed" }`       |
//! | `Internal`         | 500    | `{ "error": "INTERNAL", "detail": "..." }`|

use crate::response::ErrorResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mentor::MentorError;

#[derive(Debug, PartialEq, Eq)]
pub enum ApiError {
    InvalidInput,
    MethodNotAllowed,
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> ErrorResponse {
        match self {
            ApiError::InvalidInput => ErrorResponse::new("No code submitted"),
            ApiError::MethodNotAllowed => ErrorResponse::new("Method Not Allowed"),
            ApiError::Internal(detail) => ErrorResponse::with_detail("INTERNAL", detail.clone()),
        }
    }
}

impl From<MentorError> for ApiError {
    fn from(err: MentorError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            tracing::error!(detail = %detail, "Feedback request failed");
        }
        (self.status(), Json(self.body())).into_response()
    }
}
