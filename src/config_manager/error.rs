use thiserror::Error;

/// Failure taxonomy of the profile resolution pipeline.
///
/// Every variant collapses to the same recovery action at the resolver
/// boundary (publish the built-in defaults); the distinction exists for
/// diagnostics and tests.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The relay request could not be completed at the transport level.
    #[error("relay request failed: {0}")]
    Network(String),

    /// The relay request exceeded the client timeout.
    #[error("relay request timed out after {0}s")]
    Timeout(u64),

    /// The relay answered with a non-success status code.
    #[error("relay responded with status {0}")]
    HttpStatus(u16),

    /// The relay response was not the expected `{"contents": ...}` envelope.
    #[error("malformed relay envelope: {0}")]
    Envelope(String),

    /// The unwrapped profile document is not valid JSON.
    #[error("profile document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The profile document parsed, but is not a JSON object.
    #[error("profile document is not a JSON object")]
    Shape,
}
