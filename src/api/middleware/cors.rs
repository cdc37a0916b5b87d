//! CORS policy for the probe endpoints.

use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// Allow-all CORS for `/status`, so the checker can be called from any page.
///
/// Every response, including `400` errors, carries
/// `Access-Control-Allow-Origin: *`.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
}
