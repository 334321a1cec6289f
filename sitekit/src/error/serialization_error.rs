//! Codec boundary errors.

use thiserror::Error;

/// Errors raised while encoding a request body or decoding a response body.
#[derive(Debug, Error)]
pub enum SerializationError {
    /// JSON encoding or decoding failed.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Form-urlencoded encoding or decoding failed.
    #[error("Form encoding error: {0}")]
    Form(String),

    /// No codec is registered for the content type.
    #[error("No codec registered for content type `{content_type}`")]
    UnsupportedContentType {
        /// The primary content type that was looked up.
        content_type: String,
    },

    /// The selected codec cannot represent this value.
    #[error("Codec for `{content_type}` cannot represent {kind} values")]
    UnsupportedValue {
        /// Codec content type.
        content_type: String,
        /// JSON kind of the rejected value (object, array, ...).
        kind: String,
    },

    /// A primitive response could not be converted to the requested type.
    #[error("Cannot read `{value}` as {expected}")]
    UnexpectedValue {
        /// The requested primitive type.
        expected: String,
        /// The raw value that failed to convert.
        value: String,
    },

    /// The body was not valid UTF-8 where text was required.
    #[error("Response body is not valid UTF-8")]
    InvalidUtf8,

    /// A polymorphic payload carried an unexpected discriminator.
    #[error("Unknown discriminator `{discriminator}` for {base_type}")]
    UnknownDiscriminator {
        /// The base type being decoded.
        base_type: String,
        /// The `@odata.type` value that was found.
        discriminator: String,
    },
}

impl SerializationError {
    /// Returns `true` if this is a parsing error.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::JsonParse(_) | Self::Form(_) | Self::InvalidUtf8 | Self::UnexpectedValue { .. }
        )
    }

    pub(crate) fn unexpected(expected: impl std::fmt::Display, value: impl Into<String>) -> Self {
        Self::UnexpectedValue {
            expected: expected.to_string(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_errors_are_parse_errors() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SerializationError = json_err.into();
        assert!(err.is_parse_error());
    }

    #[test]
    fn unsupported_content_type_is_not_parse_error() {
        let err = SerializationError::UnsupportedContentType {
            content_type: "application/xml".to_string(),
        };
        assert!(!err.is_parse_error());
        assert!(err.to_string().contains("application/xml"));
    }
}
