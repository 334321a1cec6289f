//! Top-level SDK error type.

use super::{
    AuthError, SerializationError, ServiceError, TemplateError, TransportError,
    UnknownServiceError,
};
use thiserror::Error;

/// Top-level error type for every request-builder operation.
///
/// ## Examples
///
/// ```rust,ignore
/// use sitekit::SdkError;
///
/// fn handle_error(err: SdkError) {
///     match err {
///         SdkError::Service(e) => eprintln!("{}: {}", e.code, e.message),
///         SdkError::UnknownService(e) => eprintln!("HTTP {}", e.status),
///         SdkError::Transport(e) => eprintln!("Network error: {e}"),
///         other => eprintln!("{other}"),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum SdkError {
    /// Template expansion failed before dispatch.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Encoding the request or decoding the response failed.
    #[error(transparent)]
    Serialization(#[from] SerializationError),

    /// The transport failed or the request was cancelled.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Credentials could not be attached.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The service returned a mapped, typed error.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The service returned a non-success status with no matching factory.
    #[error(transparent)]
    UnknownService(#[from] UnknownServiceError),
}

impl SdkError {
    /// Returns the HTTP status code of the failed response, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Service(e) => Some(e.status),
            Self::UnknownService(e) => Some(e.status),
            Self::Transport(e) => e.status_code(),
            _ => None,
        }
    }

    /// Returns `true` if retrying the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_retryable(),
            Self::Service(_) | Self::UnknownService(_) => self
                .status_code()
                .is_some_and(|s| s >= 500 || s == 429),
            _ => false,
        }
    }

    /// Returns `true` if the caller cancelled the request.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Transport(TransportError::Cancelled))
    }

    /// Returns the typed service error, if this is one.
    pub fn as_service_error(&self) -> Option<&ServiceError> {
        match self {
            Self::Service(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HeaderBag;
    use bytes::Bytes;

    #[test]
    fn from_template_error() {
        let err: SdkError = TemplateError::MissingPathParameter {
            name: "path".into(),
            template: "{+baseurl}/x(path='{path}')".into(),
        }
        .into();
        assert!(matches!(err, SdkError::Template(_)));
        assert_eq!(err.status_code(), None);
        assert!(!err.is_retryable());
    }

    #[test]
    fn service_error_exposes_status() {
        let err: SdkError = ServiceError::new("tooMany", "slow down")
            .with_response(429, HeaderBag::new())
            .into();
        assert_eq!(err.status_code(), Some(429));
        assert!(err.is_retryable());
        assert_eq!(err.as_service_error().map(|e| e.code.as_str()), Some("tooMany"));
    }

    #[test]
    fn unknown_service_error_4xx_not_retryable() {
        let err: SdkError =
            UnknownServiceError::unmapped(404, Bytes::new(), HeaderBag::new()).into();
        assert_eq!(err.status_code(), Some(404));
        assert!(!err.is_retryable());
    }

    #[test]
    fn cancellation_is_detected() {
        let err: SdkError = TransportError::Cancelled.into();
        assert!(err.is_cancelled());
        assert!(!err.is_retryable());
    }
}
