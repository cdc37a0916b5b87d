//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`              - Dashboard (status checker + rule list)
//! - `GET  /health`        - Health check
//! - `GET  /status`        - Single-hop probe of one URL (CORS allow-all)
//! - `GET  /status/check`  - Full domain check
//! - `*    /rules`         - Rule collection (GET/POST/PUT/DELETE)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket, optional
//! - **Admin gate** - Bearer token on rule mutations when `ADMIN_TOKEN` is set
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_limited` - enables per-IP rate limiting; this needs peer addresses,
///   so serve with `into_make_service_with_connect_info::<SocketAddr>()`
pub fn app_router(state: AppState, rate_limited: bool) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, rate_limited))
}

/// All routes with state applied, without path normalization.
pub fn router(state: AppState, rate_limited: bool) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(web::routes::public_routes())
        .merge(api::routes::status_routes(rate_limited))
        .merge(api::routes::rule_routes(state.clone(), rate_limited))
        .with_state(state)
        .layer(tracing::layer())
}
