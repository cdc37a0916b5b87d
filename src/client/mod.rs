//! HTTP client of the service and the state a front end keeps around it.
//!
//! - [`RuleStoreClient`] - rule CRUD with local validation, over a [`RuleTransport`]
//! - [`HttpRuleTransport`] - the `/rules` endpoint over reqwest
//! - [`StatusClient`] - single-hop probes through the service's `/status` endpoint
//! - [`Console`] - owned front-end state: rule cache and latest status batch

mod console;
mod error;
mod rule_store;
mod status;
mod transport;

pub use console::{BatchToken, Console, StatusBoard};
pub use error::ClientError;
pub use rule_store::RuleStoreClient;
pub use status::StatusClient;
pub use transport::{HttpRuleTransport, RuleTransport};

#[cfg(test)]
pub use transport::MockRuleTransport;

use std::time::Duration;
use url::Url;

/// Default service location used by `hubctl`.
pub const DEFAULT_HUB_URL: &str = "http://127.0.0.1:3000";

const CLIENT_TIMEOUT: Duration = Duration::from_secs(30);

fn build_http_client() -> Result<reqwest::Client, ClientError> {
    reqwest::Client::builder()
        .timeout(CLIENT_TIMEOUT)
        .user_agent(concat!("hubctl/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(ClientError::Transport)
}

/// Resolves `path` below `base`, treating `base` as a directory even
/// without a trailing slash.
fn endpoint(base: &str, path: &str) -> Result<Url, ClientError> {
    let mut base = Url::parse(base.trim())
        .map_err(|e| ClientError::Validation(format!("Invalid service URL '{base}': {e}")))?;

    if !base.path().ends_with('/') {
        let dir = format!("{}/", base.path());
        base.set_path(&dir);
    }

    base.join(path)
        .map_err(|e| ClientError::Validation(format!("Invalid endpoint '{path}': {e}")))
}
