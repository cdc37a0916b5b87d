//! Display classification of probe outcomes.

use serde::Serialize;

use crate::domain::entities::ProbeResult;

/// Colour family of the primary badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeKind {
    Ok,
    Redirect,
    Error,
}

impl BadgeKind {
    /// Stylesheet class used by the dashboard.
    pub fn css_class(self) -> &'static str {
        match self {
            BadgeKind::Ok => "ok",
            BadgeKind::Redirect => "redirect",
            BadgeKind::Error => "err",
        }
    }
}

/// Badge shown next to a redirect, asserting where it leads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecondaryBadge {
    pub label: String,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub badge_kind: BadgeKind,
    pub primary_label: String,
    /// Redirect target shown on hover over a `301` badge.
    pub primary_tooltip: Option<String>,
    pub secondary_badge: Option<SecondaryBadge>,
}

/// Label of the badge shown for probes that never got a response.
pub const ERROR_LABEL: &str = "ERR";

/// Maps a probe outcome to its badges.
///
/// Only `200` is `ok` and only `301` is `redirect`; every other status,
/// including `302`, `307` and `308`, is classified as an error. Whenever a
/// `Location` was returned a secondary `"200"` badge is added with the target
/// as tooltip. That badge is asserted, the target is never probed.
pub fn classify(result: &ProbeResult) -> Classification {
    let Some(status) = result.status.filter(|_| !result.failed) else {
        return Classification {
            badge_kind: BadgeKind::Error,
            primary_label: ERROR_LABEL.to_string(),
            primary_tooltip: None,
            secondary_badge: None,
        };
    };

    let badge_kind = match status {
        200 => BadgeKind::Ok,
        301 => BadgeKind::Redirect,
        _ => BadgeKind::Error,
    };

    let primary_tooltip = match badge_kind {
        BadgeKind::Redirect => result.redirect_target.clone(),
        _ => None,
    };

    let secondary_badge = result.redirect_target.as_ref().map(|target| SecondaryBadge {
        label: "200".to_string(),
        tooltip: target.clone(),
    });

    Classification {
        badge_kind,
        primary_label: status.to_string(),
        primary_tooltip,
        secondary_badge,
    }
}
