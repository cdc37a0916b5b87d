//! Rule CRUD with the input contract checked client-side.

use std::sync::Arc;

use super::{ClientError, RuleTransport};
use crate::domain::entities::{NewRule, Rule, RuleUpdate};

/// Front-end access to the rule store.
///
/// `create` and `update` reject a blank title or code locally; the transport
/// is not touched in that case.
pub struct RuleStoreClient<T: RuleTransport + ?Sized> {
    transport: Arc<T>,
}

impl<T: RuleTransport + ?Sized> RuleStoreClient<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// All rules, ascending by id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::StoreUnavailable`] when the list cannot be fetched.
    pub async fn list(&self) -> Result<Vec<Rule>, ClientError> {
        self.transport.list().await
    }

    /// Creates a rule and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] if title or code is blank, and the
    /// transport error otherwise.
    pub async fn create(
        &self,
        title: &str,
        code: &str,
        description: Option<&str>,
    ) -> Result<i64, ClientError> {
        let (title, code) = required_fields(title, code)?;

        let rule = NewRule {
            title,
            description: optional(description),
            code,
        };

        self.transport.create(&rule).await
    }

    /// Replaces the title, code and description of rule `id`.
    ///
    /// An unknown id comes back as [`ClientError::Rejected`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] if title or code is blank, and the
    /// transport error otherwise.
    pub async fn update(
        &self,
        id: i64,
        title: &str,
        code: &str,
        description: Option<&str>,
    ) -> Result<(), ClientError> {
        let (title, code) = required_fields(title, code)?;

        let update = RuleUpdate {
            title,
            description: optional(description),
            code,
        };

        self.transport.update(id, &update).await
    }

    /// Deletes rule `id`; deleting a missing id succeeds.
    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        self.transport.delete(id).await
    }
}

fn required_fields(title: &str, code: &str) -> Result<(String, String), ClientError> {
    let title = title.trim();
    let code = code.trim();

    match (title.is_empty(), code.is_empty()) {
        (false, false) => Ok((title.to_string(), code.to_string())),
        (true, true) => Err(ClientError::Validation(
            "Title and code are required".to_string(),
        )),
        (true, false) => Err(ClientError::Validation("Title is required".to_string())),
        (false, true) => Err(ClientError::Validation("Code is required".to_string())),
    }
}

fn optional(description: Option<&str>) -> Option<String> {
    description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockRuleTransport;
    use chrono::Utc;

    #[tokio::test]
    async fn test_create_blank_title_makes_no_call() {
        let mut transport = MockRuleTransport::new();
        transport.expect_create().times(0);

        let client = RuleStoreClient::new(Arc::new(transport));
        let result = client.create("", "x", None).await;

        assert!(matches!(result, Err(ClientError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_whitespace_code_makes_no_call() {
        let mut transport = MockRuleTransport::new();
        transport.expect_create().times(0);

        let client = RuleStoreClient::new(Arc::new(transport));
        let result = client.create("Force HTTPS", "  \n ", None).await;

        match result {
            Err(ClientError::Validation(msg)) => assert_eq!(msg, "Code is required"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_trims_and_forwards() {
        let mut transport = MockRuleTransport::new();
        transport
            .expect_create()
            .withf(|rule| {
                rule.title == "Force HTTPS"
                    && rule.code == "RewriteEngine On"
                    && rule.description.is_none()
            })
            .times(1)
            .returning(|_| Ok(7));

        let client = RuleStoreClient::new(Arc::new(transport));
        let id = client
            .create("  Force HTTPS ", "RewriteEngine On\n", Some("   "))
            .await
            .unwrap();

        assert_eq!(id, 7);
    }

    #[tokio::test]
    async fn test_update_blank_fields_makes_no_call() {
        let mut transport = MockRuleTransport::new();
        transport.expect_update().times(0);

        let client = RuleStoreClient::new(Arc::new(transport));
        let result = client.update(3, " ", "", None).await;

        assert!(matches!(result, Err(ClientError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_surfaces_rejection() {
        let mut transport = MockRuleTransport::new();
        transport.expect_update().times(1).returning(|_, _| {
            Err(ClientError::Rejected {
                status: 404,
                message: "Rule not found".to_string(),
            })
        });

        let client = RuleStoreClient::new(Arc::new(transport));
        let result = client.update(99, "t", "c", None).await;

        assert!(matches!(
            result,
            Err(ClientError::Rejected { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_list_passes_through() {
        let mut transport = MockRuleTransport::new();
        transport.expect_list().times(1).returning(|| {
            let now = Utc::now();
            Ok(vec![Rule::new(
                1,
                "Gzip".to_string(),
                None,
                "AddOutputFilterByType DEFLATE text/html".to_string(),
                now,
                now,
            )])
        });

        let client = RuleStoreClient::new(Arc::new(transport));
        let rules = client.list().await.unwrap();

        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].title, "Gzip");
    }
}
