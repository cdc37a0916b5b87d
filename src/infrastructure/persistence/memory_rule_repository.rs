//! In-process implementation of the rule repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::entities::{NewRule, Rule, RuleUpdate};
use crate::domain::repositories::RuleRepository;
use crate::error::AppError;

/// Rule store kept in memory, selected with `RULE_STORE=memory`.
///
/// Ids start at 1 and are never reused, even after deletes. Contents are
/// lost on restart.
#[derive(Default)]
pub struct MemoryRuleRepository {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    last_id: i64,
    rules: BTreeMap<i64, Rule>,
}

impl MemoryRuleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RuleRepository for MemoryRuleRepository {
    async fn list(&self) -> Result<Vec<Rule>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.rules.values().cloned().collect())
    }

    async fn create(&self, new_rule: NewRule) -> Result<Rule, AppError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;

        let now = Utc::now();
        let rule = Rule::new(
            inner.last_id,
            new_rule.title,
            new_rule.description,
            new_rule.code,
            now,
            now,
        );
        inner.rules.insert(rule.id, rule.clone());

        Ok(rule)
    }

    async fn update(&self, id: i64, update: RuleUpdate) -> Result<Option<Rule>, AppError> {
        let mut inner = self.inner.write().await;

        Ok(inner.rules.get_mut(&id).map(|rule| {
            rule.title = update.title;
            rule.description = update.description;
            rule.code = update.code;
            rule.updated_at = Utc::now();
            rule.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;
        Ok(inner.rules.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
