use thiserror::Error;

/// Errors that can occur when talking to the remote API.
///
/// Display strings double as the user-facing error text stored on the
/// affected collection, so variants carry enough context to stand alone.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection-level failure (DNS, TLS, refused, reset).
    #[error("Request failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured overall timeout.
    #[error("Request timed out after {duration}s")]
    Timeout { duration: u64 },

    /// Server answered with a non-success status.
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected envelope.
    #[error("Malformed response: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },

    /// Client could not be constructed from the given configuration.
    #[error("Invalid API configuration: {message}")]
    InvalidConfig { message: String },
}

impl ApiError {
    /// Classify a reqwest failure, folding timeouts into their own variant.
    pub(crate) fn from_send(source: reqwest::Error, timeout_seconds: u64) -> Self {
        if source.is_timeout() {
            ApiError::Timeout {
                duration: timeout_seconds,
            }
        } else {
            ApiError::Transport { source }
        }
    }
}
