//! Wire access to the `/rules` endpoint.

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde::Deserialize;
use url::Url;

use super::{ClientError, build_http_client, endpoint};
use crate::api::dto::rule::{
    CreateRuleRequest, CreateRuleResponse, DeleteRuleRequest, RuleItem, UpdateRuleRequest,
};
use crate::domain::entities::{NewRule, Rule, RuleUpdate};

/// Raw rule operations against a rule store, without local validation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RuleTransport: Send + Sync {
    /// All rules, ascending by id.
    ///
    /// Any transport or parse failure is reported as
    /// [`ClientError::StoreUnavailable`].
    async fn list(&self) -> Result<Vec<Rule>, ClientError>;

    /// Stores a new rule and returns its id.
    async fn create(&self, rule: &NewRule) -> Result<i64, ClientError>;

    /// Replaces the mutable fields of rule `id`.
    async fn update(&self, id: i64, rule: &RuleUpdate) -> Result<(), ClientError>;

    /// Removes rule `id`. Removing a missing id succeeds.
    async fn delete(&self, id: i64) -> Result<(), ClientError>;
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorMessage,
}

#[derive(Deserialize)]
struct ErrorMessage {
    message: String,
}

/// [`RuleTransport`] speaking JSON to a running service.
pub struct HttpRuleTransport {
    client: reqwest::Client,
    rules_url: Url,
    token: Option<String>,
}

impl HttpRuleTransport {
    /// Targets `{base_url}/rules`. `token` is sent as a bearer token on
    /// every request when present.
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, ClientError> {
        Self::with_client(build_http_client()?, base_url, token)
    }

    pub fn with_client(
        client: reqwest::Client,
        base_url: &str,
        token: Option<String>,
    ) -> Result<Self, ClientError> {
        Ok(Self {
            client,
            rules_url: endpoint(base_url, "rules")?,
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl RuleTransport for HttpRuleTransport {
    async fn list(&self) -> Result<Vec<Rule>, ClientError> {
        let response = self
            .authorized(self.client.get(self.rules_url.clone()))
            .send()
            .await
            .map_err(|e| ClientError::StoreUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ClientError::StoreUnavailable(format!(
                "unexpected status {}",
                response.status()
            )));
        }

        let items: Vec<RuleItem> = response
            .json()
            .await
            .map_err(|e| ClientError::StoreUnavailable(e.to_string()))?;

        Ok(items.into_iter().map(Rule::from).collect())
    }

    async fn create(&self, rule: &NewRule) -> Result<i64, ClientError> {
        let body = CreateRuleRequest {
            title: rule.title.clone(),
            code: rule.code.clone(),
            description: rule.description.clone(),
        };

        let response = self
            .authorized(self.client.post(self.rules_url.clone()).json(&body))
            .send()
            .await?;

        let created: CreateRuleResponse = ensure_success(response).await?.json().await?;
        Ok(created.id)
    }

    async fn update(&self, id: i64, rule: &RuleUpdate) -> Result<(), ClientError> {
        let body = UpdateRuleRequest {
            id,
            title: rule.title.clone(),
            code: rule.code.clone(),
            description: rule.description.clone(),
        };

        let response = self
            .authorized(self.client.put(self.rules_url.clone()).json(&body))
            .send()
            .await?;

        ensure_success(response).await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), ClientError> {
        let response = self
            .authorized(
                self.client
                    .delete(self.rules_url.clone())
                    .json(&DeleteRuleRequest { id }),
            )
            .send()
            .await?;

        ensure_success(response).await?;
        Ok(())
    }
}

/// Turns a non-2xx response into [`ClientError::Rejected`], preferring the
/// service's own error message.
async fn ensure_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<ErrorEnvelope>().await {
        Ok(envelope) => envelope.error.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string(),
    };

    Err(ClientError::Rejected {
        status: status.as_u16(),
        message,
    })
}
