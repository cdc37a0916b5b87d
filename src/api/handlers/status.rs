//! Handlers for the status probe endpoints.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::json;

use crate::api::dto::status::{
    DomainCheckQuery, DomainCheckResponse, ProbeResponse, StatusQuery,
};
use crate::error::AppError;
use crate::state::AppState;

/// Probes one URL without following redirects.
///
/// # Endpoint
///
/// `GET /status?url=<percent-encoded absolute URL>`
///
/// # Response
///
/// Always `200` once a URL is given; unreachable targets are reported in the body.
///
/// ```json
/// { "url": "https://example.com", "status": 301, "redirect": "https://www.example.com/" }
/// { "url": "https://down.example", "error": true }
/// ```
///
/// # Errors
///
/// Returns 400 if the `url` parameter is missing or empty.
pub async fn status_handler(
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<ProbeResponse>, AppError> {
    let url = query
        .url
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| AppError::bad_request("Missing url", json!({"param": "url"})))?;

    let result = state.status_service.probe(&url).await;

    Ok(Json(ProbeResponse::from(result)))
}

/// Runs the full domain check: normalize, expand to four variants, probe, classify.
///
/// # Endpoint
///
/// `GET /status/check?domain=<free text>`
///
/// An absent or blank `domain` checks the placeholder host `domain.com`.
pub async fn domain_check_handler(
    State(state): State<AppState>,
    Query(query): Query<DomainCheckQuery>,
) -> Json<DomainCheckResponse> {
    let input = query.domain.unwrap_or_default();
    let check = state.status_service.check_domain(&input).await;

    Json(DomainCheckResponse::from(check))
}
