//! Authentication strategies a service expects.
//!
//! The generator documents the strategy on the generated client; the runtime
//! provider that implements it is chosen by the caller when building the
//! request adapter.

use serde::{Deserialize, Serialize};

/// Authentication strategy for a service.
///
/// ## Examples
///
/// ```
/// use sitekit_define::AuthStrategy;
///
/// let auth = AuthStrategy::BearerToken { scopes: vec!["Sites.Read.All".into()] };
/// assert!(auth.requires_credentials());
/// assert!(!AuthStrategy::None.requires_credentials());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthStrategy {
    /// No credentials are sent.
    #[default]
    None,

    /// OAuth bearer token in the `Authorization` header.
    BearerToken {
        /// Permission scopes the token must carry, for documentation.
        scopes: Vec<String>,
    },

    /// A static key sent in a custom header.
    ApiKey {
        /// Header name (e.g., "X-API-Key").
        header: String,
    },
}

impl AuthStrategy {
    pub fn requires_credentials(&self) -> bool {
        !matches!(self, Self::None)
    }
}
