//! Domain input normalization and URL variant construction.
//!
//! Free-text input is reduced to a bare host without validating its syntax.
//! Malformed hosts are passed through and surface later as probe failures.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Host used when the input is empty.
pub const PLACEHOLDER_HOST: &str = "domain.com";

static SCHEME_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^https?://").unwrap());
static WWW_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^www\.").unwrap());

/// A host with no scheme, no leading `www.` and no path.
///
/// Case is preserved from the input. Never empty and never contains `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedHost(String);

impl NormalizedHost {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedHost {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Reduces user input to a bare host.
///
/// # Rules
///
/// 1. Empty or whitespace-only input yields [`PLACEHOLDER_HOST`]
/// 2. One leading `http://` or `https://` is removed (case-insensitive)
/// 3. One leading `www.` is removed (case-insensitive)
/// 4. Everything from the first `/` on is dropped
/// 5. Surrounding whitespace is trimmed
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_host("https://www.Example.com/path").as_str(), "Example.com");
/// assert_eq!(normalize_host("").as_str(), "domain.com");
/// ```
pub fn normalize_host(input: &str) -> NormalizedHost {
    if input.trim().is_empty() {
        return NormalizedHost(PLACEHOLDER_HOST.to_string());
    }

    let without_scheme = SCHEME_PREFIX.replace(input, "");
    let without_www = WWW_PREFIX.replace(&without_scheme, "");
    let host = without_www.split('/').next().unwrap_or_default().trim();

    if host.is_empty() {
        return NormalizedHost(PLACEHOLDER_HOST.to_string());
    }

    NormalizedHost(host.to_string())
}

/// Expands a host into the four canonical URL variants.
///
/// The order is the display order: `https://www.`, `https://`, `http://www.`, `http://`.
pub fn build_variants(host: &NormalizedHost) -> [String; 4] {
    let h = host.as_str();
    [
        format!("https://www.{h}"),
        format!("https://{h}"),
        format!("http://www.{h}"),
        format!("http://{h}"),
    ]
}
