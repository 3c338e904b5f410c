//! HTTP route handlers.
//!
//! Two read-only JSON endpoints are served: the greeting at `/` and the
//! liveness probe at `/health`. Every other request gets a 404, including
//! unsupported methods on known paths, so clients never see a 405.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod home;

use axum::{http::StatusCode, middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_HEALTH;
use crate::middleware::request_id_layer;

/// Fallback for unmatched paths and methods.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Creates the Axum router with all routes.
pub fn create_router() -> Router {
    let home_routes = Router::new().route("/", get(home::index).fallback(not_found));

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new()
        .route("/health", get(health::health).fallback(not_found))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ));

    Router::new()
        .merge(home_routes)
        .merge(health_routes)
        .fallback(not_found)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
