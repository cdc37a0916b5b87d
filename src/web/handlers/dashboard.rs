//! Dashboard page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;

use crate::application::services::{DomainCheck, StatusRow};
use crate::domain::entities::Rule;
use crate::state::AppState;

/// Query of `GET /`.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// Domain to check; the table is only rendered when present.
    pub domain: Option<String>,
    /// Case-insensitive filter over rule titles and descriptions.
    pub q: Option<String>,
}

/// One row of the status table, ready for the template.
#[derive(Debug, Clone, Default)]
pub struct StatusRowView {
    pub url: String,
    pub primary_class: &'static str,
    pub primary_label: String,
    pub primary_tooltip: String,
    pub has_secondary: bool,
    pub secondary_label: String,
    pub secondary_tooltip: String,
}

impl From<&StatusRow> for StatusRowView {
    fn from(row: &StatusRow) -> Self {
        let c = &row.classification;
        let secondary = c.secondary_badge.as_ref();

        Self {
            url: row.result.url.clone(),
            primary_class: c.badge_kind.css_class(),
            primary_label: c.primary_label.clone(),
            primary_tooltip: c.primary_tooltip.clone().unwrap_or_default(),
            has_secondary: secondary.is_some(),
            secondary_label: secondary.map(|b| b.label.clone()).unwrap_or_default(),
            secondary_tooltip: secondary.map(|b| b.tooltip.clone()).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RuleView {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub code: String,
}

impl From<Rule> for RuleView {
    fn from(r: Rule) -> Self {
        Self {
            id: r.id,
            title: r.title,
            description: r.description.unwrap_or_default(),
            code: r.code,
        }
    }
}

/// Template for the dashboard.
///
/// Renders `templates/dashboard.html`. Rows of one check are rendered
/// together, never partially.
#[derive(Template, WebTemplate, Default)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub domain_input: String,
    pub has_check: bool,
    pub host: String,
    pub variants_text: String,
    pub rows: Vec<StatusRowView>,
    pub query: String,
    pub rules: Vec<RuleView>,
    pub rules_unavailable: bool,
}

impl DashboardTemplate {
    fn with_check(mut self, check: &DomainCheck) -> Self {
        self.has_check = true;
        self.host = check.host.clone();
        self.variants_text = check.variants.join("\n");
        self.rows = check.rows.iter().map(StatusRowView::from).collect();
        self
    }
}

/// Renders the dashboard.
///
/// # Endpoint
///
/// `GET /?domain=example.com&q=https`
///
/// A failing rule store degrades to an empty list with a notice instead of
/// failing the page.
pub async fn dashboard_handler(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> DashboardTemplate {
    let filter = query.q.unwrap_or_default();

    let mut page = DashboardTemplate {
        query: filter.clone(),
        ..Default::default()
    };

    match state.rule_service.search_rules(&filter).await {
        Ok(rules) => page.rules = rules.into_iter().map(RuleView::from).collect(),
        Err(e) => {
            tracing::warn!(error = %e, "Rule list unavailable, rendering empty list");
            page.rules_unavailable = true;
        }
    }

    if let Some(domain) = query.domain {
        let check = state.status_service.check_domain(&domain).await;
        page.domain_input = domain;
        page = page.with_check(&check);
    }

    page
}
