//! Domain errors for the Pokédex service.

use thiserror::Error;

/// Failures reported by an upstream client (species lookup or translation).
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Upstream answered with a non-success status.
    #[error("unexpected status code: {status}")]
    FailedRequest {
        /// HTTP status returned by the upstream
        status: u16,
    },

    /// Upstream answered 429.
    #[error("rate limit exceeded")]
    RateLimitExceeded,

    /// No translator exists for the requested style.
    #[error("unsupported translation type: {0}")]
    UnsupportedStyle(String),

    /// Connection or transport failure.
    #[error("network error: {0}")]
    Network(String),

    /// Response body could not be parsed.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The request deadline elapsed first.
    #[error("request timed out")]
    Timeout,

    /// The request context was cancelled.
    #[error("request cancelled")]
    Cancelled,

    /// A request URL could not be built from the configured base.
    #[error("invalid upstream URL: {0}")]
    InvalidUrl(String),
}

impl UpstreamError {
    /// Map a non-success HTTP status to an upstream error.
    ///
    /// 429 is reported as [`UpstreamError::RateLimitExceeded`]; every other
    /// status becomes [`UpstreamError::FailedRequest`].
    pub const fn from_status(status: u16) -> Self {
        match status {
            429 => Self::RateLimitExceeded,
            _ => Self::FailedRequest { status },
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for UpstreamError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Errors surfaced by the Pokémon service.
#[derive(Debug, Error)]
pub enum DomainError {
    /// An upstream call failed.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(#[source] UpstreamError),

    /// The named resource does not exist.
    #[error("resource not found: {0}")]
    NotFound(String),
}

impl DomainError {
    /// True when the error means the requested resource does not exist.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result type of service operations.
pub type DomainResult<T> = Result<T, DomainError>;
