//! Single-hop HTTP status probe contract.

use async_trait::async_trait;

use crate::domain::entities::ProbeResult;

/// Issues one non-redirect-following GET for a URL.
///
/// Implementations never return an error: transport failures are reported
/// as [`ProbeResult::failed`] so sibling probes are unaffected.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::ReqwestProber`] - reqwest client with redirects disabled
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusProber: Send + Sync {
    /// Probes a single URL, stopping at the first response.
    async fn probe(&self, url: &str) -> ProbeResult;
}
