//! Owned front-end state: the cached rule list and the status board.
//!
//! The two are independent: a front end keeps one [`Console`] for rules and
//! one [`StatusBoard`] for domain checks.

use chrono::Utc;
use std::sync::Arc;

use super::{ClientError, RuleStoreClient, RuleTransport};
use crate::application::services::DomainCheck;
use crate::domain::entities::Rule;

/// Identifies one probe batch issued by a [`StatusBoard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchToken(u64);

/// Holds the latest completed domain check.
///
/// Every batch takes a token from [`begin`](Self::begin). When a newer batch
/// has started in the meantime, [`complete`](Self::complete) drops the older
/// result, so a slow check can never overwrite a newer one.
#[derive(Debug, Default)]
pub struct StatusBoard {
    latest: u64,
    current: Option<DomainCheck>,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new batch; any batch still in flight becomes stale.
    pub fn begin(&mut self) -> BatchToken {
        self.latest += 1;
        BatchToken(self.latest)
    }

    /// Publishes `check` if `token` is still the latest batch.
    ///
    /// Returns `false` and discards `check` otherwise.
    pub fn complete(&mut self, token: BatchToken, check: DomainCheck) -> bool {
        if token.0 != self.latest {
            tracing::debug!(
                token = token.0,
                latest = self.latest,
                "Discarding stale status batch"
            );
            return false;
        }

        self.current = Some(check);
        true
    }

    pub fn current(&self) -> Option<&DomainCheck> {
        self.current.as_ref()
    }
}

/// Front-end state around a rule store.
///
/// The rule cache is kept in ascending id order and patched locally after
/// each successful mutation.
pub struct Console<T: RuleTransport + ?Sized> {
    store: RuleStoreClient<T>,
    rules: Vec<Rule>,
    store_available: bool,
}

impl<T: RuleTransport + ?Sized> Console<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self {
            store: RuleStoreClient::new(transport),
            rules: Vec::new(),
            store_available: true,
        }
    }

    /// Refreshes the rule cache.
    ///
    /// When the store cannot be reached the cache is emptied and the console
    /// keeps working; [`store_available`](Self::store_available) reports it.
    pub async fn load_rules(&mut self) -> &[Rule] {
        match self.store.list().await {
            Ok(rules) => {
                self.rules = rules;
                self.store_available = true;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Rules load failed");
                self.rules.clear();
                self.store_available = false;
            }
        }
        &self.rules
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn store_available(&self) -> bool {
        self.store_available
    }

    /// Cached rules whose title or description contains `query`, ignoring case.
    pub fn filter(&self, query: &str) -> Vec<&Rule> {
        self.rules.iter().filter(|r| r.matches(query)).collect()
    }

    pub async fn create_rule(
        &mut self,
        title: &str,
        code: &str,
        description: Option<&str>,
    ) -> Result<i64, ClientError> {
        let id = self.store.create(title, code, description).await?;

        let now = Utc::now();
        self.rules.push(Rule::new(
            id,
            title.trim().to_string(),
            clean(description),
            code.trim().to_string(),
            now,
            now,
        ));
        self.rules.sort_by_key(|r| r.id);

        Ok(id)
    }

    pub async fn update_rule(
        &mut self,
        id: i64,
        title: &str,
        code: &str,
        description: Option<&str>,
    ) -> Result<(), ClientError> {
        self.store.update(id, title, code, description).await?;

        if let Some(rule) = self.rules.iter_mut().find(|r| r.id == id) {
            rule.title = title.trim().to_string();
            rule.code = code.trim().to_string();
            rule.description = clean(description);
            rule.updated_at = Utc::now();
        }

        Ok(())
    }

    pub async fn delete_rule(&mut self, id: i64) -> Result<(), ClientError> {
        self.store.delete(id).await?;
        self.rules.retain(|r| r.id != id);
        Ok(())
    }
}

fn clean(description: Option<&str>) -> Option<String> {
    description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}
