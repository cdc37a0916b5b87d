//! Probes issued through a running service.

use async_trait::async_trait;
use url::Url;

use super::{ClientError, build_http_client, endpoint};
use crate::api::dto::status::ProbeResponse;
use crate::domain::entities::ProbeResult;
use crate::domain::prober::StatusProber;

/// [`StatusProber`] backed by the service's `GET /status` endpoint.
///
/// Plugs into [`crate::application::services::StatusService`] so a remote
/// check goes through the same fan-out, ordering and classification as a
/// local one.
pub struct StatusClient {
    client: reqwest::Client,
    status_url: Url,
}

impl StatusClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_client(build_http_client()?, base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            client,
            status_url: endpoint(base_url, "status")?,
        })
    }

    /// `GET /status?url=<encoded>`; the target URL is percent-encoded.
    fn request_url(&self, url: &str) -> Url {
        let mut request_url = self.status_url.clone();
        request_url.query_pairs_mut().append_pair("url", url);
        request_url
    }

    async fn fetch(&self, url: &str) -> Result<ProbeResult, ClientError> {
        let response = self
            .client
            .get(self.request_url(url))
            .send()
            .await?
            .error_for_status()?;

        let body: ProbeResponse = response.json().await?;
        Ok(body.into_probe_result())
    }
}

#[async_trait]
impl StatusProber for StatusClient {
    /// Any failure to reach the service, or an unexpected answer from it,
    /// yields a failed result for `url`.
    async fn probe(&self, url: &str) -> ProbeResult {
        match self.fetch(url).await {
            Ok(result) => result,
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "Status request failed");
                ProbeResult::failed(url)
            }
        }
    }
}
