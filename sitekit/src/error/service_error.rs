//! Errors returned by the remote service.

use bytes::Bytes;
use thiserror::Error;

use crate::HeaderBag;

/// One entry of a service error's `details` list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceErrorDetail {
    pub code: String,
    pub message: String,
    pub target: Option<String>,
}

/// A typed error produced by an error-mapping factory from a non-success
/// response.
///
/// Factories fill in the payload fields; the adapter stamps `status` and
/// `response_headers` from the response before returning it to the caller.
#[derive(Debug, Clone, Default, PartialEq, Error)]
#[error("Service error {status} ({code}): {message}")]
pub struct ServiceError {
    /// HTTP status code of the response.
    pub status: u16,
    /// Service-defined error code, e.g. `badRequest`.
    pub code: String,
    /// Human readable message.
    pub message: String,
    /// The target of the error, when the service reports one.
    pub target: Option<String>,
    /// Nested error details.
    pub details: Vec<ServiceErrorDetail>,
    /// Raw inner error object (request ids, dates, ...).
    pub inner: Option<serde_json::Value>,
    /// Headers of the failed response.
    pub response_headers: HeaderBag,
}

impl ServiceError {
    /// Creates an error from a code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            ..Self::default()
        }
    }

    /// Returns the error with the response status and headers attached.
    pub fn with_response(mut self, status: u16, headers: HeaderBag) -> Self {
        self.status = status;
        self.response_headers = headers;
        self
    }

    /// Returns `true` for 4xx statuses.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// Returns `true` for 5xx statuses.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }
}

/// A non-success response for which no error factory matched, or whose body
/// was empty.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct UnknownServiceError {
    /// HTTP status code of the response.
    pub status: u16,
    /// Description of why no typed error could be produced.
    pub message: String,
    /// Raw response payload.
    pub body: Bytes,
    /// Headers of the failed response.
    pub response_headers: HeaderBag,
}

impl UnknownServiceError {
    /// The response carried a status with no registered factory.
    pub fn unmapped(status: u16, body: Bytes, response_headers: HeaderBag) -> Self {
        Self {
            status,
            message: format!(
                "The server returned an unexpected status code and no error factory is registered for this code: {status}"
            ),
            body,
            response_headers,
        }
    }

    /// A factory matched but the response had no body to decode.
    pub fn empty_body(status: u16, response_headers: HeaderBag) -> Self {
        Self {
            status,
            message: format!(
                "The server returned an unexpected status code with no response body: {status}"
            ),
            body: Bytes::new(),
            response_headers,
        }
    }

    /// Returns the payload as text, replacing invalid UTF-8.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_response_stamps_status_and_headers() {
        let mut headers = HeaderBag::new();
        headers.add("request-id", "abc");
        let err = ServiceError::new("badRequest", "bad id").with_response(400, headers);

        assert_eq!(err.status, 400);
        assert!(err.is_client_error());
        assert!(!err.is_server_error());
        assert_eq!(err.response_headers.get_first("Request-Id"), Some("abc"));
        assert_eq!(err.to_string(), "Service error 400 (badRequest): bad id");
    }

    #[test]
    fn unmapped_message_mentions_status() {
        let err = UnknownServiceError::unmapped(418, Bytes::from_static(b"teapot"), HeaderBag::new());
        assert!(err.to_string().contains("418"));
        assert_eq!(err.body_text(), "teapot");
    }

    #[test]
    fn empty_body_has_no_payload() {
        let err = UnknownServiceError::empty_body(503, HeaderBag::new());
        assert!(err.body.is_empty());
        assert!(err.to_string().contains("no response body"));
    }
}
