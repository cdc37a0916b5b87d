//! Status prober backed by `reqwest`.

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, header::LOCATION, redirect::Policy};
use std::time::Duration;

use crate::domain::entities::ProbeResult;
use crate::domain::prober::StatusProber;

/// Default bound on a single probe.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Prober issuing one GET per URL with redirect following disabled.
///
/// Each probe is a single attempt with no retry. The client-wide timeout
/// bounds every probe so a batch always terminates.
#[derive(Clone)]
pub struct ReqwestProber {
    client: Client,
}

impl ReqwestProber {
    /// Builds a prober with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns a `reqwest::Error` if the TLS backend cannot be initialized.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = ClientBuilder::new()
            .redirect(Policy::none())
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Wraps an existing client. The client must not follow redirects.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StatusProber for ReqwestProber {
    async fn probe(&self, url: &str) -> ProbeResult {
        match self.client.get(url).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                let location = response
                    .headers()
                    .get(LOCATION)
                    .and_then(|v| v.to_str().ok())
                    .filter(|v| !v.is_empty())
                    .map(str::to_string);

                tracing::debug!(url, status, location = ?location, "Probe answered");
                ProbeResult::responded(url, status, location)
            }
            Err(e) => {
                tracing::debug!(url, error = %e, timeout = e.is_timeout(), "Probe failed");
                ProbeResult::failed(url)
            }
        }
    }
}
