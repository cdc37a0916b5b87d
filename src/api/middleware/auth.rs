//! Bearer token gate for rule mutations.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Requires `Authorization: Bearer <ADMIN_TOKEN>` when a token is configured.
///
/// When no `ADMIN_TOKEN` is set the request passes through untouched.
///
/// # Errors
///
/// Returns `401 Unauthorized` (with `WWW-Authenticate: Bearer`) if the gate
/// is enabled and the header is missing or carries the wrong token.
///
/// # Example
///
/// ```rust,ignore
/// let mutations = post(create_rule_handler)
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !st.auth_service.is_enabled() {
        return Ok(next.run(req).await);
    }

    let (mut parts, body) = req.into_parts();

    let token = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .ok()
        .map(|AuthBearer(token)| token);

    if let Err(e) = st.auth_service.authorize(token.as_deref()) {
        tracing::warn!(method = %parts.method, uri = %parts.uri, "Rejected rule mutation");
        return Err(e);
    }

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}
