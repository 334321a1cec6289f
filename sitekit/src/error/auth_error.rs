//! Authentication errors.

use thiserror::Error;

/// Errors raised while attaching credentials to a request.
#[derive(Debug, Error)]
pub enum AuthError {
    /// None of the configured environment variables contained a credential.
    #[error("Missing credentials: none of the following environment variables are set: {env_vars:?}")]
    MissingCredential {
        /// The environment variable names that were checked.
        env_vars: Vec<String>,
    },

    /// Tokens are only ever sent over HTTPS.
    #[error("Refusing to send credentials over a non-HTTPS URL: {url}")]
    InsecureScheme {
        /// The rejected URL.
        url: String,
    },

    /// The token provider failed to produce a token.
    #[error("Token acquisition failed: {message}")]
    TokenAcquisition {
        /// Provider diagnostic.
        message: String,
    },

    /// The credential cannot be used as a header value.
    #[error("Invalid credential format")]
    InvalidKeyFormat,
}

impl AuthError {
    /// Returns `true` if acquiring a fresh token might resolve the error.
    pub fn is_refreshable(&self) -> bool {
        matches!(self, Self::TokenAcquisition { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_lists_env_vars() {
        let err = AuthError::MissingCredential {
            env_vars: vec!["SITES_ACCESS_TOKEN".to_string(), "GRAPH_ACCESS_TOKEN".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("SITES_ACCESS_TOKEN"));
        assert!(msg.contains("GRAPH_ACCESS_TOKEN"));
        assert!(!err.is_refreshable());
    }

    #[test]
    fn token_acquisition_is_refreshable() {
        let err = AuthError::TokenAcquisition {
            message: "expired".to_string(),
        };
        assert!(err.is_refreshable());
    }
}
