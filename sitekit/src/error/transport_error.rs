//! Transport-level errors.

use thiserror::Error;

/// Errors from the HTTP transport, kept distinct from service errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed due to a network or protocol error.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Request exceeded the configured timeout.
    #[error("Request timeout after {duration_ms}ms")]
    Timeout {
        /// The timeout duration in milliseconds.
        duration_ms: u64,
    },

    /// Failed to establish a connection to the server.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// The caller cancelled the request through its context.
    #[error("Request cancelled")]
    Cancelled,

    /// The deadline carried by the request context elapsed.
    #[error("Request deadline exceeded")]
    DeadlineExceeded,

    /// The request could not be converted into a native HTTP request.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl TransportError {
    /// Returns `true` if retrying the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Connection(_) | Self::DeadlineExceeded => true,
            Self::Request(e) => {
                e.is_timeout()
                    || e.is_connect()
                    || e
                        .status()
                        .is_some_and(|s| s.is_server_error() || s.as_u16() == 429)
            }
            Self::Cancelled | Self::InvalidRequest(_) => false,
        }
    }

    /// Returns the HTTP status code, when the transport saw one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_is_retryable() {
        let err = TransportError::Timeout { duration_ms: 5000 };
        assert!(err.is_retryable());
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn connection_is_retryable() {
        let err = TransportError::Connection("connection refused".to_string());
        assert!(err.is_retryable());
    }

    #[test]
    fn cancellation_is_not_retryable() {
        assert!(!TransportError::Cancelled.is_retryable());
        assert!(!TransportError::InvalidRequest("bad header".into()).is_retryable());
    }

    #[test]
    fn deadline_display() {
        assert_eq!(
            TransportError::DeadlineExceeded.to_string(),
            "Request deadline exceeded"
        );
    }
}
