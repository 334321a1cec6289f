//! Status-keyed error factories.
//!
//! An error map is a constant table from status keys to factories. Keys are an
//! exact status (`"404"`), a class (`"4XX"`, `"5XX"`) or the wildcard `"XXX"`.
//! Lookup always prefers the most specific key.

use std::fmt;

use crate::error::{SerializationError, ServiceError};
use crate::serialization::ParseNode;

/// Builds a typed service error from a decoded error payload.
///
/// The adapter stamps the HTTP status and response headers onto the result,
/// so factories only read the payload.
pub type ErrorFactory = fn(&ParseNode) -> Result<ServiceError, SerializationError>;

/// A constant, status-keyed table of error factories.
///
/// ## Examples
///
/// ```
/// use sitekit::{ErrorMappings, ParseNode, SerializationError, ServiceError};
///
/// fn not_found(_: &ParseNode) -> Result<ServiceError, SerializationError> {
///     Ok(ServiceError::new("notFound", "missing"))
/// }
/// fn any(_: &ParseNode) -> Result<ServiceError, SerializationError> {
///     Ok(ServiceError::new("other", "failed"))
/// }
///
/// static ERRORS: ErrorMappings = ErrorMappings::new(&[("404", not_found), ("XXX", any)]);
///
/// assert!(ERRORS.select(404).is_some());
/// assert!(ERRORS.select(500).is_some());
/// assert!(ERRORS.select(200).is_none());
/// ```
#[derive(Clone, Copy)]
pub struct ErrorMappings {
    entries: &'static [(&'static str, ErrorFactory)],
}

impl ErrorMappings {
    pub const fn new(entries: &'static [(&'static str, ErrorFactory)]) -> Self {
        Self { entries }
    }

    /// A table with no factories; every failure becomes an unknown service error.
    pub const fn empty() -> Self {
        Self { entries: &[] }
    }

    /// Selects the factory for a failed response status.
    ///
    /// Order: exact status, then `4XX`/`5XX`, then `XXX`. Successful (2xx)
    /// statuses never select a factory.
    pub fn select(&self, status: u16) -> Option<ErrorFactory> {
        if (200..300).contains(&status) {
            return None;
        }
        let exact = status.to_string();
        let class = match status {
            400..=499 => Some("4XX"),
            500..=599 => Some("5XX"),
            _ => None,
        };

        self.lookup(&exact)
            .or_else(|| class.and_then(|c| self.lookup(c)))
            .or_else(|| self.lookup("XXX"))
    }

    fn lookup(&self, key: &str) -> Option<ErrorFactory> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, factory)| *factory)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ErrorMappings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exact(_: &ParseNode) -> Result<ServiceError, SerializationError> {
        Ok(ServiceError::new("exact", ""))
    }
    fn client(_: &ParseNode) -> Result<ServiceError, SerializationError> {
        Ok(ServiceError::new("client", ""))
    }
    fn server(_: &ParseNode) -> Result<ServiceError, SerializationError> {
        Ok(ServiceError::new("server", ""))
    }
    fn wildcard(_: &ParseNode) -> Result<ServiceError, SerializationError> {
        Ok(ServiceError::new("wildcard", ""))
    }

    static FULL: ErrorMappings = ErrorMappings::new(&[
        ("404", exact),
        ("4XX", client),
        ("5XX", server),
        ("XXX", wildcard),
    ]);
    static WILDCARD_ONLY: ErrorMappings = ErrorMappings::new(&[("XXX", wildcard)]);
    static CLASS_ONLY: ErrorMappings = ErrorMappings::new(&[("4XX", client)]);

    fn code_for(map: &ErrorMappings, status: u16) -> Option<String> {
        let node = ParseNode::new(serde_json::Value::Null);
        map.select(status).map(|f| f(&node).unwrap().code)
    }

    #[test]
    fn most_specific_key_wins() {
        assert_eq!(code_for(&FULL, 404).as_deref(), Some("exact"));
        assert_eq!(code_for(&FULL, 400).as_deref(), Some("client"));
        assert_eq!(code_for(&FULL, 503).as_deref(), Some("server"));
        assert_eq!(code_for(&FULL, 302).as_deref(), Some("wildcard"));
    }

    #[test]
    fn every_failure_status_follows_lookup_order() {
        for status in (300..600).chain([100, 199]) {
            let expected = if status == 404 {
                "exact"
            } else if (400..500).contains(&status) {
                "client"
            } else if (500..600).contains(&status) {
                "server"
            } else {
                "wildcard"
            };
            assert_eq!(code_for(&FULL, status).as_deref(), Some(expected), "status {status}");
        }
    }

    #[test]
    fn wildcard_covers_client_and_server() {
        assert_eq!(code_for(&WILDCARD_ONLY, 400).as_deref(), Some("wildcard"));
        assert_eq!(code_for(&WILDCARD_ONLY, 502).as_deref(), Some("wildcard"));
    }

    #[test]
    fn no_match_yields_none() {
        assert_eq!(code_for(&CLASS_ONLY, 500), None);
        assert_eq!(code_for(&ErrorMappings::empty(), 404), None);
    }

    #[test]
    fn success_never_selects() {
        assert_eq!(code_for(&FULL, 200), None);
        assert_eq!(code_for(&FULL, 204), None);
    }

    #[test]
    fn keys_are_case_insensitive() {
        static LOWER: ErrorMappings = ErrorMappings::new(&[("4xx", client)]);
        assert_eq!(code_for(&LOWER, 418).as_deref(), Some("client"));
    }
}
