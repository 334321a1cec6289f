//! Error types for the sitekit generator.

use thiserror::Error;

/// Errors that can occur while validating a description or generating code.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The service description is inconsistent.
    #[error("Invalid description for '{owner}': {reason}")]
    InvalidDescription {
        /// Resource, model or operation the problem was found on.
        owner: String,
        reason: String,
    },

    /// Two resources would generate the same builder type.
    #[error("Duplicate request builder '{name}'")]
    DuplicateBuilder { name: String },

    /// A URL template failed to parse.
    #[error("Malformed URL template on '{resource}': {source}")]
    Template {
        resource: String,
        #[source]
        source: sitekit::TemplateError,
    },

    /// Failed to generate code
    #[error("Code generation failed: {0}")]
    CodeGenError(String),

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Output directory does not exist
    #[error("Output directory does not exist: {0}")]
    OutputDirNotFound(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl GeneratorError {
    pub(crate) fn invalid(owner: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDescription {
            owner: owner.into(),
            reason: reason.into(),
        }
    }
}
