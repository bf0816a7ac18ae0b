//! # Feedback Routes Module
//!
//! Wires up the `/ai-feedback` endpoint.
//!
//! ## Structure
//! - `post.rs`: POST handler that reviews a submission
//!
//! `OPTIONS` never reaches this router: the CORS layer answers it (see
//! [`crate::middleware::options_no_content`]). Every other method falls
//! through to `method_not_allowed`.

pub mod post;

use crate::error::ApiError;
use crate::state::AppState;
use axum::{Router, routing::post};

use post::submit_feedback;

/// Builds the `/ai-feedback` route.
///
/// - `POST /ai-feedback` → `submit_feedback`
/// - anything else → `405 { "error": "Method Not Allowed" }`
pub fn feedback_routes() -> Router<AppState> {
    Router::new().route(
        "/",
        post(submit_feedback).fallback(method_not_allowed),
    )
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
