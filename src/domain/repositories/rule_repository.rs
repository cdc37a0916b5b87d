//! Repository trait for rule storage.

use crate::domain::entities::{NewRule, Rule, RuleUpdate};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the rule collection.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRuleRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryRuleRepository`] - In-process store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_rule.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RuleRepository: Send + Sync {
    /// Lists every rule ordered by ascending id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self) -> Result<Vec<Rule>, AppError>;

    /// Inserts a rule; the store assigns its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_rule: NewRule) -> Result<Rule, AppError>;

    /// Replaces title, description and code of an existing rule.
    ///
    /// Returns `Ok(None)` when no rule has this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn update(&self, id: i64, update: RuleUpdate) -> Result<Option<Rule>, AppError>;

    /// Removes a rule. Returns whether a row was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Cheap connectivity check used by the health endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
