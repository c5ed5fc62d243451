//! Error Types
//!
//! Failure taxonomy for the client:
//!
//! - `ApiError` - network transport failures, non-2xx responses and
//!   body parse failures from the REST backend. Surfaced to the
//!   triggering UI action; never retried.
//! - `VaultError` - token storage failures. Logged and swallowed by
//!   callers: losing the persisted token only forces a re-login on
//!   the next launch.
//!
//! All error types are `Send + Sync` and can cross worker-thread
//! channel boundaries.
use thiserror::Error;

/// Errors from the REST API client.
#[derive(Debug, Error, Clone)]
pub enum ApiError {
    /// Transport-level failure (connection refused, DNS, timeout)
    #[error("Network error: {message}")]
    Network {
        /// Human-readable error message
        message: String,
    },

    /// The server answered with a non-2xx status
    #[error("Server returned {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body text, if any
        body: String,
    },

    /// The response body could not be parsed
    #[error("Failed to parse response: {message}")]
    Decode {
        /// Human-readable error message
        message: String,
    },
}

impl ApiError {
    /// Create a new network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new status error
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Create a new decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Whether the server rejected the request with 401
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::decode(err.to_string())
        } else {
            Self::network(err.to_string())
        }
    }
}

/// Error from a token vault backend.
#[derive(Debug, Error, Clone)]
#[error("Vault error: {message}")]
pub struct VaultError {
    /// Human-readable error message
    pub message: String,
}

impl VaultError {
    /// Create a new vault error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
