//! ALM client error types.

/// Errors from ALM REST calls. These surface as report `error` strings,
/// never as HTTP failures to the caller.
#[derive(Debug, thiserror::Error)]
pub enum AlmError {
    /// Client construction or configuration failure.
    #[error("ALM client not configured: {reason}")]
    NotConfigured { reason: String },
    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Remote API returned a non-2xx status.
    #[error("ALM endpoint {endpoint} returned {status}: {body}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
}
