//! HTTP methods a request builder can dispatch.

use strum::{Display, EnumIter, EnumString};

/// The verbs an OData resource can expose.
///
/// ## Examples
///
/// ```rust
/// use sitekit::HttpMethod;
///
/// let parsed: HttpMethod = "PATCH".parse().unwrap();
/// assert_eq!(parsed, HttpMethod::Patch);
/// assert!(parsed.has_body());
/// assert!(!parsed.is_idempotent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Returns `true` for verbs that carry a request body.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }

    /// POST and PATCH are the only non-idempotent verbs.
    pub fn is_idempotent(&self) -> bool {
        !matches!(self, Self::Post | Self::Patch)
    }

    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn display_is_uppercase() {
        let names: Vec<_> = HttpMethod::iter().map(|m| m.to_string()).collect();
        assert_eq!(names, vec!["GET", "POST", "PUT", "PATCH", "DELETE"]);
    }

    #[test]
    fn maps_to_reqwest() {
        assert_eq!(HttpMethod::Patch.to_reqwest(), reqwest::Method::PATCH);
        assert_eq!(HttpMethod::Delete.to_reqwest().as_str(), "DELETE");
    }

    #[test]
    fn unknown_method_fails_to_parse() {
        assert!("HEAD".parse::<HttpMethod>().is_err());
    }
}
