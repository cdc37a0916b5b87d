//! Outcome of a single-hop status probe.

use serde::{Deserialize, Serialize};

/// Result of probing one URL without following redirects.
///
/// Exactly one of `status.is_some()` and `failed` holds; use the
/// constructors to keep that invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResult {
    pub url: String,
    pub status: Option<u16>,
    /// Literal `Location` header value, neither followed nor made absolute.
    pub redirect_target: Option<String>,
    pub failed: bool,
}

impl ProbeResult {
    /// The origin answered with `status` (any code).
    pub fn responded(url: impl Into<String>, status: u16, location: Option<String>) -> Self {
        Self {
            url: url.into(),
            status: Some(status),
            redirect_target: location,
            failed: false,
        }
    }

    /// The request never produced a response.
    pub fn failed(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status: None,
            redirect_target: None,
            failed: true,
        }
    }
}
