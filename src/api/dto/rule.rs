//! DTOs for the rule collection endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};
use validator::Validate;

use crate::domain::entities::Rule;

/// A rule as returned by `GET /rules`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleItem {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Rule> for RuleItem {
    fn from(r: Rule) -> Self {
        Self {
            id: r.id,
            title: r.title,
            description: r.description,
            code: r.code,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

impl From<RuleItem> for Rule {
    fn from(r: RuleItem) -> Self {
        Rule::new(
            r.id,
            r.title,
            r.description,
            r.code,
            r.created_at,
            r.updated_at,
        )
    }
}

/// Body of `POST /rules`.
///
/// Missing `title`/`code` deserialize as empty strings so the service can
/// answer `400` with the list of missing fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateRuleRequest {
    #[serde(default)]
    #[validate(length(max = 200, message = "Title is too long"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 65536, message = "Code is too long"))]
    pub code: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 1000))]
    pub description: Option<String>,
}

/// Body of `PUT /rules`. Full replace of the mutable fields.
///
/// `id` may be sent as a number or as a numeric string.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateRuleRequest {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub id: i64,

    #[serde(default)]
    #[validate(length(max = 200, message = "Title is too long"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 65536, message = "Code is too long"))]
    pub code: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 1000))]
    pub description: Option<String>,
}

/// Body of `DELETE /rules`.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteRuleRequest {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub id: i64,
}

/// Response of `POST /rules`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRuleResponse {
    pub id: i64,
}

/// Response of `PUT /rules` and `DELETE /rules`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}
