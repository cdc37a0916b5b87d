//! Handlers for the rule collection endpoint.
//!
//! All four verbs share the `/rules` path; ids travel in the JSON body.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::rule::{
    CreateRuleRequest, CreateRuleResponse, DeleteRuleRequest, OkResponse, RuleItem,
    UpdateRuleRequest,
};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every rule, ascending by id.
///
/// # Endpoint
///
/// `GET /rules`
pub async fn list_rules_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<RuleItem>>, AppError> {
    let rules = state.rule_service.list_rules().await?;

    Ok(Json(rules.into_iter().map(RuleItem::from).collect()))
}

/// Creates a rule.
///
/// # Endpoint
///
/// `POST /rules`
///
/// # Request Body
///
/// ```json
/// { "title": "Force HTTPS", "code": "RewriteEngine On", "description": "optional" }
/// ```
///
/// # Response
///
/// ```json
/// { "id": 12 }
/// ```
///
/// # Errors
///
/// Returns 400 if `title` or `code` is missing or blank.
pub async fn create_rule_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateRuleRequest>,
) -> Result<Json<CreateRuleResponse>, AppError> {
    payload.validate()?;

    let rule = state
        .rule_service
        .create_rule(&payload.title, &payload.code, payload.description.as_deref())
        .await?;

    Ok(Json(CreateRuleResponse { id: rule.id }))
}

/// Replaces title, code and description of a rule.
///
/// # Endpoint
///
/// `PUT /rules`
///
/// # Errors
///
/// Returns 400 if `title` or `code` is missing or blank.
/// Returns 404 if no rule has this id.
pub async fn update_rule_handler(
    State(state): State<AppState>,
    Json(payload): Json<UpdateRuleRequest>,
) -> Result<Json<OkResponse>, AppError> {
    payload.validate()?;

    state
        .rule_service
        .update_rule(
            payload.id,
            &payload.title,
            &payload.code,
            payload.description.as_deref(),
        )
        .await?;

    Ok(Json(OkResponse::ok()))
}

/// Deletes a rule. Unknown ids are not an error.
///
/// # Endpoint
///
/// `DELETE /rules`
pub async fn delete_rule_handler(
    State(state): State<AppState>,
    Json(payload): Json<DeleteRuleRequest>,
) -> Result<Json<OkResponse>, AppError> {
    state.rule_service.delete_rule(payload.id).await?;

    Ok(Json(OkResponse::ok()))
}
