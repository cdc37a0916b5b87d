//! Rule collection service.

use crate::domain::entities::{NewRule, Rule, RuleUpdate};
use crate::domain::repositories::RuleRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for the snippet collection.
///
/// Enforces the input contract before any storage call:
/// - `title` and `code` must be non-empty after trimming
/// - a blank `description` is stored as absent
///
/// There is no optimistic locking; the last write wins.
pub struct RuleService<R: RuleRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: RuleRepository + ?Sized> RuleService<R> {
    /// Creates a new rule service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists every rule in ascending id order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_rules(&self) -> Result<Vec<Rule>, AppError> {
        self.repository.list().await
    }

    /// Lists rules whose title or description contains `query`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn search_rules(&self, query: &str) -> Result<Vec<Rule>, AppError> {
        let rules = self.repository.list().await?;
        Ok(rules.into_iter().filter(|r| r.matches(query)).collect())
    }

    /// Creates a rule and returns it with its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if title or code is blank.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_rule(
        &self,
        title: &str,
        code: &str,
        description: Option<&str>,
    ) -> Result<Rule, AppError> {
        let (title, code) = validate_fields(title, code)?;

        let new_rule = NewRule {
            title,
            description: clean_description(description),
            code,
        };

        let rule = self.repository.create(new_rule).await?;
        tracing::info!(id = rule.id, title = %rule.title, "Rule created");

        Ok(rule)
    }

    /// Replaces title, code and description of rule `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if title or code is blank.
    /// Returns [`AppError::NotFound`] if the rule does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn update_rule(
        &self,
        id: i64,
        title: &str,
        code: &str,
        description: Option<&str>,
    ) -> Result<Rule, AppError> {
        let (title, code) = validate_fields(title, code)?;

        let update = RuleUpdate {
            title,
            description: clean_description(description),
            code,
        };

        let rule = self
            .repository
            .update(id, update)
            .await?
            .ok_or_else(|| AppError::not_found("Rule not found", json!({"id": id})))?;

        tracing::info!(id, "Rule updated");
        Ok(rule)
    }

    /// Deletes rule `id`. Deleting an unknown id succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete_rule(&self, id: i64) -> Result<(), AppError> {
        if self.repository.delete(id).await? {
            tracing::info!(id, "Rule deleted");
        } else {
            tracing::debug!(id, "Delete of unknown rule ignored");
        }
        Ok(())
    }

    /// Checks that the backing store answers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store is unreachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

fn validate_fields(title: &str, code: &str) -> Result<(String, String), AppError> {
    let title = title.trim();
    let code = code.trim();

    let mut missing = Vec::new();
    if title.is_empty() {
        missing.push("title");
    }
    if code.is_empty() {
        missing.push("code");
    }

    if !missing.is_empty() {
        return Err(AppError::bad_request(
            "Missing fields",
            json!({ "fields": missing }),
        ));
    }

    Ok((title.to_string(), code.to_string()))
}

fn clean_description(description: Option<&str>) -> Option<String> {
    description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockRuleRepository;
    use chrono::Utc;

    fn create_test_rule(id: i64, title: &str, code: &str) -> Rule {
        Rule::new(
            id,
            title.to_string(),
            None,
            code.to_string(),
            Utc::now(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_create_rule_success() {
        let mut mock_repo = MockRuleRepository::new();

        mock_repo
            .expect_create()
            .withf(|r| r.title == "Force HTTPS" && r.code == "RewriteEngine On")
            .times(1)
            .returning(|r| Ok(create_test_rule(7, &r.title, &r.code)));

        let service = RuleService::new(Arc::new(mock_repo));

        let rule = service
            .create_rule("  Force HTTPS ", "RewriteEngine On\n", None)
            .await
            .unwrap();

        assert_eq!(rule.id, 7);
        assert_eq!(rule.title, "Force HTTPS");
    }

    #[tokio::test]
    async fn test_create_rule_blank_title_skips_repository() {
        let mut mock_repo = MockRuleRepository::new();
        mock_repo.expect_create().times(0);

        let service = RuleService::new(Arc::new(mock_repo));

        let result = service.create_rule("   ", "x", None).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_rule_blank_code() {
        let mock_repo = MockRuleRepository::new();
        let service = RuleService::new(Arc::new(mock_repo));

        let result = service.create_rule("Title", "", None).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_rule_blank_description_is_dropped() {
        let mut mock_repo = MockRuleRepository::new();

        mock_repo
            .expect_create()
            .withf(|r| r.description.is_none())
            .times(1)
            .returning(|r| Ok(create_test_rule(1, &r.title, &r.code)));

        let service = RuleService::new(Arc::new(mock_repo));

        assert!(service.create_rule("T", "C", Some("  ")).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_rule_not_found() {
        let mut mock_repo = MockRuleRepository::new();

        mock_repo
            .expect_update()
            .times(1)
            .returning(|_, _| Ok(None));

        let service = RuleService::new(Arc::new(mock_repo));

        let result = service.update_rule(42, "T2", "C2", None).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_rule_success() {
        let mut mock_repo = MockRuleRepository::new();

        mock_repo
            .expect_update()
            .withf(|id, u| *id == 3 && u.title == "T2" && u.description.as_deref() == Some("d"))
            .times(1)
            .returning(|id, u| Ok(Some(create_test_rule(id, &u.title, &u.code))));

        let service = RuleService::new(Arc::new(mock_repo));

        let rule = service.update_rule(3, "T2", "C2", Some("d")).await.unwrap();

        assert_eq!(rule.id, 3);
        assert_eq!(rule.code, "C2");
    }

    #[tokio::test]
    async fn test_delete_unknown_rule_is_ok() {
        let mut mock_repo = MockRuleRepository::new();

        mock_repo.expect_delete().times(1).returning(|_| Ok(false));

        let service = RuleService::new(Arc::new(mock_repo));

        assert!(service.delete_rule(99).await.is_ok());
    }

    #[tokio::test]
    async fn test_search_rules_filters() {
        let mut mock_repo = MockRuleRepository::new();

        mock_repo.expect_list().times(1).returning(|| {
            Ok(vec![
                create_test_rule(1, "Force HTTPS", "a"),
                create_test_rule(2, "Gzip compression", "b"),
                create_test_rule(3, "Strip www", "c"),
            ])
        });

        let service = RuleService::new(Arc::new(mock_repo));

        let found = service.search_rules("HTTPS").await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }
}
