//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → Health check endpoint
//! - `/ai-feedback` → Code submission feedback

use crate::middleware::{log_request, options_no_content};
use crate::routes::{feedback::feedback_routes, health::health_routes};
use crate::state::AppState;
use axum::{
    Router,
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    middleware::from_fn,
};
use tower_http::cors::{Any, CorsLayer};

pub mod feedback;
pub mod health;

/// Builds the router for every endpoint under `/api`.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/ai-feedback", feedback_routes())
        .with_state(app_state)
}

/// Builds the complete application: `/api` routes plus request logging and CORS.
///
/// CORS allows any origin with `Content-Type` and `Authorization` headers.
/// Every `OPTIONS` request, bare or a browser preflight, gets an empty `204`.
pub fn app(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    Router::new()
        .nest("/api", routes(app_state))
        .layer(from_fn(log_request))
        .layer(cors)
        .layer(from_fn(options_no_content))
}
