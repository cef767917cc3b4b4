//! API Middleware
//!
//! Request logging wrapped around the whole router.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

const CORRELATION_HEADER: &str = "x-correlation-id";

/// Correlation id from `X-Correlation-Id`, or a fresh one
pub fn correlation_id(headers: &HeaderMap) -> Uuid {
    headers
        .get(CORRELATION_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(Uuid::new_v4)
}

/// Request logging middleware
///
/// Logs method, path, caller address and elapsed time once the inner
/// service has produced a response. The response passes through untouched.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let remote_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let correlation_id = correlation_id(request.headers());

    let start = Instant::now();

    let response = next.run(request).await;

    let duration = start.elapsed();

    tracing::info!(
        method = %method,
        path = %path,
        remote_addr = ?remote_addr,
        status = %response.status(),
        duration_us = %duration.as_micros(),
        correlation_id = %correlation_id,
        "Request completed"
    );

    response
}
