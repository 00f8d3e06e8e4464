//! Generation backend client error types.

/// Errors from generation backend calls.
///
/// Any variant means the caller should take its deterministic fallback
/// path; none of these is retried.
#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    /// Client construction or configuration failure.
    #[error("generation backend not configured: {reason}")]
    NotConfigured { reason: String },
    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The bounded request timeout elapsed.
    #[error("generation backend call to {endpoint} timed out")]
    Timeout { endpoint: String },
    /// Backend returned a non-2xx status.
    #[error("generation backend {endpoint} returned {status}: {body}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response body could not be deserialized.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Backend replied with no usable candidate text.
    #[error("generation backend {endpoint} returned no candidate text")]
    EmptyResponse { endpoint: String },
    /// Candidate text did not contain a parseable JSON object.
    #[error("malformed backend reply: {reason}")]
    MalformedResponse { reason: String },
}
