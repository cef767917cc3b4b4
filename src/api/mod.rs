//! API module
//!
//! HTTP endpoints, request validation and middleware.

use std::sync::Arc;

use axum::{middleware::from_fn, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::event_store::EventStore;

pub mod middleware;
pub mod routes;
pub mod validation;

pub use routes::create_router;

/// Shared handler state
pub type AppState = Arc<EventStore>;

/// Build the full application: API routes, health check, request logging
pub fn app(store: AppState) -> Router {
    Router::new()
        .merge(create_router())
        // Health check
        .route("/health", get(health_check))
        .layer(from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
