//! Dashboard route configuration.

use crate::state::AppState;
use crate::web::handlers::dashboard_handler;
use axum::{Router, routing::get};

/// Public dashboard routes.
///
/// # Endpoints
///
/// - `GET /` - Status checker (`?domain=`) and rule list (`?q=`)
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/", get(dashboard_handler))
}
