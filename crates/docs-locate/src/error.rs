//! Error types for documentation retrieval.

use std::fmt;
use std::time::Duration;

/// Server-supplied hint for when a rate-limited call may be retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RetryAfter {
    /// Retry after this many seconds.
    Seconds(u64),
    /// The response carried no usable hint.
    Unknown,
}

impl fmt::Display for RetryAfter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seconds(secs) => write!(f, "{secs}"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Errors that can occur while talking to the documentation API.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// No API key was passed and the environment variable is unset.
    #[error("API key required: set {var} or pass an API key explicitly")]
    MissingCredential {
        /// The environment variable that was consulted.
        var: &'static str,
    },

    /// A base or target URL could not be built.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP 429.
    #[error("rate limited, retry after {retry_after} seconds")]
    RateLimited {
        /// Retry hint taken from the response body.
        retry_after: RetryAfter,
    },

    /// HTTP 401.
    #[error("authentication failed, check API key")]
    AuthenticationFailed,

    /// HTTP 404.
    #[error("library not found")]
    NotFound,

    /// Any other non-2xx status.
    #[error("API error {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The body's `error` field, or the raw body when it has none.
        message: String,
    },

    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// A 2xx response whose body is not a JSON object.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl Error {
    /// Returns `true` for [`Error::RateLimited`].
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    /// Returns the server's retry hint, if this is a rate limit with a known delay.
    #[must_use]
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimited {
                retry_after: RetryAfter::Seconds(secs),
            } => Some(Duration::from_secs(*secs)),
            _ => None,
        }
    }
}

/// A specialized Result type for documentation retrieval.
pub type Result<T> = std::result::Result<T, Error>;
