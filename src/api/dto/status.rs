//! DTOs for the status probe endpoints.

use serde::{Deserialize, Serialize};

use crate::application::services::{DomainCheck, StatusRow};
use crate::domain::classify::{BadgeKind, SecondaryBadge};
use crate::domain::entities::ProbeResult;

/// Query of `GET /status`.
#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub url: Option<String>,
}

/// Query of `GET /status/check`.
#[derive(Debug, Deserialize)]
pub struct DomainCheckQuery {
    pub domain: Option<String>,
}

/// Wire form of a single probe.
///
/// ```json
/// { "url": "https://a.example", "status": 301, "redirect": "https://b.example" }
/// { "url": "https://down.example", "error": true }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProbeResponse {
    Reached {
        url: String,
        status: u16,
        redirect: Option<String>,
    },
    Failed {
        url: String,
        error: bool,
    },
}

impl From<ProbeResult> for ProbeResponse {
    fn from(r: ProbeResult) -> Self {
        match r.status {
            Some(status) if !r.failed => ProbeResponse::Reached {
                url: r.url,
                status,
                redirect: r.redirect_target,
            },
            _ => ProbeResponse::Failed {
                url: r.url,
                error: true,
            },
        }
    }
}

impl ProbeResponse {
    /// Converts the wire form back into a probe result.
    pub fn into_probe_result(self) -> ProbeResult {
        match self {
            ProbeResponse::Reached {
                url,
                status,
                redirect,
            } => ProbeResult::responded(url, status, redirect),
            ProbeResponse::Failed { url, .. } => ProbeResult::failed(url),
        }
    }
}

/// One classified row of `GET /status/check`.
#[derive(Debug, Clone, Serialize)]
pub struct StatusRowItem {
    pub url: String,
    pub status: Option<u16>,
    pub redirect: Option<String>,
    pub error: bool,
    pub badge_kind: BadgeKind,
    pub primary_label: String,
    pub primary_tooltip: Option<String>,
    pub secondary_badge: Option<SecondaryBadge>,
}

impl From<StatusRow> for StatusRowItem {
    fn from(row: StatusRow) -> Self {
        Self {
            url: row.result.url,
            status: row.result.status,
            redirect: row.result.redirect_target,
            error: row.result.failed,
            badge_kind: row.classification.badge_kind,
            primary_label: row.classification.primary_label,
            primary_tooltip: row.classification.primary_tooltip,
            secondary_badge: row.classification.secondary_badge,
        }
    }
}

/// Response of `GET /status/check`.
#[derive(Debug, Clone, Serialize)]
pub struct DomainCheckResponse {
    pub host: String,
    pub variants: Vec<String>,
    pub rows: Vec<StatusRowItem>,
}

impl From<DomainCheck> for DomainCheckResponse {
    fn from(check: DomainCheck) -> Self {
        Self {
            host: check.host,
            variants: check.variants,
            rows: check.rows.into_iter().map(StatusRowItem::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reached_serializes_null_redirect() {
        let body = serde_json::to_value(ProbeResponse::from(ProbeResult::responded(
            "https://a.example",
            200,
            None,
        )))
        .unwrap();

        assert_eq!(
            body,
            json!({"url": "https://a.example", "status": 200, "redirect": null})
        );
    }

    #[test]
    fn test_failed_serializes_error_flag() {
        let body =
            serde_json::to_value(ProbeResponse::from(ProbeResult::failed("https://x.example")))
                .unwrap();

        assert_eq!(body, json!({"url": "https://x.example", "error": true}));
    }

    #[test]
    fn test_deserialize_both_shapes() {
        let reached: ProbeResponse = serde_json::from_value(
            json!({"url": "u", "status": 301, "redirect": "https://t"}),
        )
        .unwrap();
        assert_eq!(
            reached.into_probe_result(),
            ProbeResult::responded("u", 301, Some("https://t".to_string()))
        );

        let failed: ProbeResponse =
            serde_json::from_value(json!({"url": "u", "error": true})).unwrap();
        assert_eq!(failed.into_probe_result(), ProbeResult::failed("u"));
    }
}
