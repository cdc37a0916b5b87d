/// Errors surfaced by the service client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Input rejected locally, before any request was sent.
    #[error("{0}")]
    Validation(String),

    /// The rule list could not be fetched or parsed.
    #[error("Rule store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Rejected by service ({status}): {message}")]
    Rejected { status: u16, message: String },
}
