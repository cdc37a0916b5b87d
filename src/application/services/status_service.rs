//! Domain status check orchestration.

use futures::future::join_all;
use serde::Serialize;
use std::sync::Arc;

use crate::domain::classify::{Classification, classify};
use crate::domain::entities::ProbeResult;
use crate::domain::host::{NormalizedHost, build_variants, normalize_host};
use crate::domain::prober::StatusProber;

/// One probed URL together with its display classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusRow {
    pub result: ProbeResult,
    pub classification: Classification,
}

/// Result of checking every variant of a domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainCheck {
    pub host: String,
    pub variants: Vec<String>,
    pub rows: Vec<StatusRow>,
}

/// Fans probes out over the tokio runtime and gathers them as one batch.
///
/// Every URL gets its own task. A task that panics is reported as a failed
/// probe for its URL; it never affects the other rows.
pub struct StatusService<P: StatusProber + ?Sized + 'static> {
    prober: Arc<P>,
}

impl<P: StatusProber + ?Sized + 'static> StatusService<P> {
    /// Creates a new status service.
    pub fn new(prober: Arc<P>) -> Self {
        Self { prober }
    }

    /// Probes a single URL.
    pub async fn probe(&self, url: &str) -> ProbeResult {
        let result = self.prober.probe(url).await;
        record_outcome(&result);
        result
    }

    /// Probes all URLs concurrently.
    ///
    /// The output has the same length as `urls` and `output[i].url == urls[i]`,
    /// whatever order the responses arrive in.
    pub async fn probe_all(&self, urls: &[String]) -> Vec<ProbeResult> {
        let handles: Vec<_> = urls
            .iter()
            .cloned()
            .map(|url| {
                let prober = Arc::clone(&self.prober);
                tokio::spawn(async move { prober.probe(&url).await })
            })
            .collect();

        join_all(handles)
            .await
            .into_iter()
            .zip(urls)
            .map(|(joined, url)| {
                let result = match joined {
                    Ok(result) => result,
                    Err(e) => {
                        tracing::warn!(url = %url, error = %e, "Probe task aborted");
                        ProbeResult::failed(url.clone())
                    }
                };
                record_outcome(&result);
                result
            })
            .collect()
    }

    /// Runs the whole workflow for raw user input.
    ///
    /// Normalizes the input, builds the four variants, probes them and
    /// classifies each outcome.
    pub async fn check_domain(&self, input: &str) -> DomainCheck {
        let host = normalize_host(input);
        self.check_host(&host).await
    }

    /// Probes and classifies the variants of an already normalized host.
    pub async fn check_host(&self, host: &NormalizedHost) -> DomainCheck {
        let variants = build_variants(host).to_vec();
        tracing::debug!(host = %host, "Checking domain variants");

        let rows = self
            .probe_all(&variants)
            .await
            .into_iter()
            .map(|result| StatusRow {
                classification: classify(&result),
                result,
            })
            .collect();

        DomainCheck {
            host: host.to_string(),
            variants,
            rows,
        }
    }
}

fn record_outcome(result: &ProbeResult) {
    let outcome = if result.failed { "failed" } else { "responded" };
    metrics::counter!("status_probes_total", "outcome" => outcome).increment(1);
}
