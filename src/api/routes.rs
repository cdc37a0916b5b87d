//! API route configuration.

use crate::api::handlers::{
    create_rule_handler, delete_rule_handler, domain_check_handler, list_rules_handler,
    status_handler, update_rule_handler,
};
use crate::api::middleware::{auth, cors, rate_limit};
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// Probe routes, open to any origin.
///
/// # Endpoints
///
/// - `GET /status?url=...`      - Single-hop probe of one URL
/// - `GET /status/check?domain=` - Probe and classify all four variants of a domain
pub fn status_routes(rate_limited: bool) -> Router<AppState> {
    let router = Router::new()
        .route("/status", get(status_handler))
        .route("/status/check", get(domain_check_handler));

    let router = if rate_limited {
        router.layer(rate_limit::probe_layer())
    } else {
        router
    };

    router.layer(cors::layer())
}

/// Rule collection routes.
///
/// # Endpoints
///
/// - `GET    /rules` - List all rules
/// - `POST   /rules` - Create a rule, body `{title, code, description?}`
/// - `PUT    /rules` - Replace a rule, body `{id, title, code, description?}`
/// - `DELETE /rules` - Delete a rule, body `{id}`
///
/// Any other verb answers `405 Method Not Allowed`. Mutations pass through
/// [`auth::layer`], which only enforces anything when `ADMIN_TOKEN` is set.
pub fn rule_routes(state: AppState, rate_limited: bool) -> Router<AppState> {
    let mutations = post(create_rule_handler)
        .put(update_rule_handler)
        .delete(delete_rule_handler)
        .route_layer(middleware::from_fn_with_state(state, auth::layer));

    let router = Router::new().route("/rules", get(list_rules_handler).merge(mutations));

    if rate_limited {
        router.layer(rate_limit::layer())
    } else {
        router
    }
}
