//! URL template expansion errors.

use thiserror::Error;

/// Errors raised while expanding a URL template.
///
/// These are always raised locally, before any I/O happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// The template contains an unterminated or unsupported placeholder.
    #[error("Malformed URL template `{template}` at byte {position}: {message}")]
    Malformed {
        /// The offending template.
        template: String,
        /// Byte offset of the placeholder that failed to parse.
        position: usize,
        /// What was wrong with it.
        message: String,
    },

    /// A path placeholder has no binding in the path parameter map.
    #[error("Missing path parameter `{name}` for template `{template}`")]
    MissingPathParameter {
        /// The placeholder name exactly as written in the template.
        name: String,
        /// The template being expanded.
        template: String,
    },

    /// The expanded URL could not be encoded as a valid absolute URL.
    #[error("Failed to encode URL `{url}`: {reason}")]
    Encoding {
        /// The expanded (or raw) URL.
        url: String,
        /// Parser diagnostic.
        reason: String,
    },
}

impl TemplateError {
    /// Returns the missing parameter name, if this is a missing-binding error.
    pub fn missing_parameter(&self) -> Option<&str> {
        match self {
            Self::MissingPathParameter { name, .. } => Some(name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameter_reports_name() {
        let err = TemplateError::MissingPathParameter {
            name: "site%2Did".to_string(),
            template: "{+baseurl}/sites/{site%2Did}".to_string(),
        };
        assert_eq!(err.missing_parameter(), Some("site%2Did"));
        assert!(err.to_string().contains("site%2Did"));
    }

    #[test]
    fn malformed_display_includes_position() {
        let err = TemplateError::Malformed {
            template: "{+baseurl".to_string(),
            position: 0,
            message: "unterminated placeholder".to_string(),
        };
        assert_eq!(err.missing_parameter(), None);
        assert!(err.to_string().contains("byte 0"));
    }
}
