//! PostgreSQL implementation of the rule repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewRule, Rule, RuleUpdate};
use crate::domain::repositories::RuleRepository;
use crate::error::AppError;

/// PostgreSQL repository for the `rules` table.
///
/// Ids come from a `BIGSERIAL`, so they are unique and increasing.
pub struct PgRuleRepository {
    pool: Arc<PgPool>,
}

impl PgRuleRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct RuleRow {
    id: i64,
    title: String,
    description: Option<String>,
    code: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<RuleRow> for Rule {
    fn from(r: RuleRow) -> Self {
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

#[async_trait]
impl RuleRepository for PgRuleRepository {
    async fn list(&self) -> Result<Vec<Rule>, AppError> {
        let rows = sqlx::query_as::<_, RuleRow>(
            r#"
            SELECT id, title, description, code, created_at, updated_at
            FROM rules
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Rule::from).collect())
    }

    async fn create(&self, new_rule: NewRule) -> Result<Rule, AppError> {
        let row = sqlx::query_as::<_, RuleRow>(
            r#"
            INSERT INTO rules (title, description, code)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, code, created_at, updated_at
            "#,
        )
        .bind(new_rule.title)
        .bind(new_rule.description)
        .bind(new_rule.code)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: i64, update: RuleUpdate) -> Result<Option<Rule>, AppError> {
        let row = sqlx::query_as::<_, RuleRow>(
            r#"
            UPDATE rules SET
                title       = $2,
                description = $3,
                code        = $4,
                updated_at  = NOW()
            WHERE id = $1
            RETURNING id, title, description, code, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(update.title)
        .bind(update.description)
        .bind(update.code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Rule::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM rules WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }
}
