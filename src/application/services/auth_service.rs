//! Optional bearer-token gate for rule mutations.

use serde_json::json;
use sha2::{Digest, Sha256};

use crate::error::AppError;

/// Guards the mutating rule endpoints.
///
/// With no configured token the backend is open and any edit controls are a
/// front-end concern only. With `ADMIN_TOKEN` set, callers must present it as
/// a bearer token. Only the SHA-256 digest of the
/// configured token is kept in memory.
#[derive(Clone, Default)]
pub struct AuthService {
    token_digest: Option<[u8; 32]>,
}

impl AuthService {
    /// Creates a gate. `None` or a blank token disables it.
    pub fn new(admin_token: Option<&str>) -> Self {
        let token_digest = admin_token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(digest);
        Self { token_digest }
    }

    /// Whether mutations require a bearer token.
    pub fn is_enabled(&self) -> bool {
        self.token_digest.is_some()
    }

    /// Short hex fingerprint of the configured token, safe to log.
    pub fn fingerprint(&self) -> Option<String> {
        self.token_digest.map(|d| hex::encode(&d[..4]))
    }

    /// Checks a presented bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the gate is enabled and the token
    /// is missing or does not match.
    pub fn authorize(&self, presented: Option<&str>) -> Result<(), AppError> {
        let Some(expected) = self.token_digest else {
            return Ok(());
        };

        let Some(token) = presented else {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Authorization header is missing or invalid"}),
            ));
        };

        if digest(token.trim()) != expected {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Invalid token"}),
            ));
        }

        Ok(())
    }
}

fn digest(token: &str) -> [u8; 32] {
    Sha256::digest(token.as_bytes()).into()
}
