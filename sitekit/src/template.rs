//! URL template expansion.
//!
//! Supports the subset of RFC 6570 used by OData request builders:
//!
//! | Form | Expansion |
//! |------|-----------|
//! | `{name}` | simple: every reserved character is percent-encoded |
//! | `{+name}` | reserved: reserved characters and existing `%XX` triplets pass through |
//! | `{?a,b}` | form-style query, `?` before the first emitted pair |
//! | `{&a,b}` | form-style query continuation |
//!
//! Placeholder names are looked up exactly as written, so `{site%2Did}` reads
//! the `site%2Did` key. Query names are emitted exactly as written too, which
//! is how `%24select` reaches the wire for `$select`.
//!
//! ## Examples
//!
//! ```
//! use sitekit::{PathParameters, QueryMap, template};
//!
//! let path = PathParameters::new()
//!     .with("baseurl", "https://svc.example/v1")
//!     .with("site%2Did", "abc-123");
//! let mut query = QueryMap::new();
//! query.set("%24select", vec!["id".to_string(), "displayName".to_string()]);
//!
//! let url = template::expand(
//!     "{+baseurl}/sites/{site%2Did}{?%24expand,%24select}",
//!     &path,
//!     &query,
//! )
//! .unwrap();
//! assert_eq!(url, "https://svc.example/v1/sites/abc-123?%24select=id%2CdisplayName");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, NON_ALPHANUMERIC, utf8_percent_encode};
use url::form_urlencoded;

use crate::error::TemplateError;
use crate::parameters::{PathParameters, QueryMap};

/// Characters left alone by simple expansion (RFC 3986 unreserved).
const SIMPLE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Characters never legal in a URL; everything else passes reserved expansion.
const RESERVED_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Simple,
    Reserved,
    Query,
    QueryContinuation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part<'a> {
    Literal(&'a str),
    Expression {
        operator: Operator,
        names: Vec<&'a str>,
    },
}

/// A parsed URL template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriTemplate<'a> {
    source: &'a str,
    parts: Vec<Part<'a>>,
}

impl<'a> UriTemplate<'a> {
    /// Parses `source`, rejecting unterminated, empty or unsupported
    /// placeholders.
    ///
    /// ## Errors
    ///
    /// Returns [`TemplateError::Malformed`] with the byte offset of the bad
    /// placeholder.
    pub fn parse(source: &'a str) -> Result<Self, TemplateError> {
        let malformed = |position: usize, message: &str| TemplateError::Malformed {
            template: source.to_string(),
            position,
            message: message.to_string(),
        };

        let mut parts = Vec::new();
        let mut rest = source;
        let mut offset = 0;

        while !rest.is_empty() {
            match rest.find(['{', '}']) {
                None => {
                    parts.push(Part::Literal(rest));
                    break;
                }
                Some(idx) if rest.as_bytes()[idx] == b'}' => {
                    return Err(malformed(offset + idx, "unmatched closing brace"));
                }
                Some(open) => {
                    if open > 0 {
                        parts.push(Part::Literal(&rest[..open]));
                    }
                    let after = &rest[open + 1..];
                    let close = after
                        .find('}')
                        .ok_or_else(|| malformed(offset + open, "unterminated placeholder"))?;
                    let body = &after[..close];
                    if body.contains('{') {
                        return Err(malformed(offset + open, "nested placeholder"));
                    }
                    parts.push(parse_expression(body).map_err(|m| malformed(offset + open, m))?);

                    let consumed = open + close + 2;
                    rest = &rest[consumed..];
                    offset += consumed;
                }
            }
        }

        Ok(Self { source, parts })
    }

    /// The template text.
    pub fn as_str(&self) -> &'a str {
        self.source
    }

    /// Names of path placeholders (`{name}` and `{+name}`), in order.
    pub fn path_variables(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.expressions()
            .filter(|(op, _)| matches!(op, Operator::Simple | Operator::Reserved))
            .flat_map(|(_, names)| names.iter().copied())
    }

    /// Names listed in query expressions, in order.
    pub fn query_variables(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.expressions()
            .filter(|(op, _)| matches!(op, Operator::Query | Operator::QueryContinuation))
            .flat_map(|(_, names)| names.iter().copied())
    }

    fn expressions(&self) -> impl Iterator<Item = (Operator, &Vec<&'a str>)> {
        self.parts.iter().filter_map(|part| match part {
            Part::Expression { operator, names } => Some((*operator, names)),
            Part::Literal(_) => None,
        })
    }

    /// Expands the template against the given bindings.
    ///
    /// Query values that are absent or empty are skipped; query keys that the
    /// template does not list are ignored.
    ///
    /// ## Errors
    ///
    /// Returns [`TemplateError::MissingPathParameter`] when a path placeholder
    /// has no binding.
    pub fn expand(&self, path: &PathParameters, query: &QueryMap) -> Result<String, TemplateError> {
        let mut out = String::with_capacity(self.source.len() + 32);

        for part in &self.parts {
            match part {
                Part::Literal(text) => out.push_str(text),
                Part::Expression { operator, names } => match operator {
                    Operator::Simple | Operator::Reserved => {
                        for (i, name) in names.iter().enumerate() {
                            let value = path.get(name).ok_or_else(|| {
                                TemplateError::MissingPathParameter {
                                    name: (*name).to_string(),
                                    template: self.source.to_string(),
                                }
                            })?;
                            if i > 0 {
                                out.push(',');
                            }
                            if *operator == Operator::Simple {
                                out.extend(utf8_percent_encode(value, SIMPLE_ENCODE_SET));
                            } else {
                                out.push_str(&encode_reserved(value));
                            }
                        }
                    }
                    Operator::Query | Operator::QueryContinuation => {
                        let mut first = *operator == Operator::Query;
                        for name in names {
                            let Some(rendered) = query.get(name).and_then(|v| v.render()) else {
                                continue;
                            };
                            out.push(if first { '?' } else { '&' });
                            first = false;
                            out.push_str(name);
                            out.push('=');
                            out.extend(form_urlencoded::byte_serialize(rendered.as_bytes()));
                        }
                    }
                },
            }
        }

        Ok(out)
    }
}

fn parse_expression(body: &str) -> Result<Part<'_>, &'static str> {
    let (operator, list) = match body.as_bytes().first() {
        None => return Err("empty placeholder"),
        Some(b'+') => (Operator::Reserved, &body[1..]),
        Some(b'?') => (Operator::Query, &body[1..]),
        Some(b'&') => (Operator::QueryContinuation, &body[1..]),
        Some(b'#' | b'.' | b'/' | b';' | b'=' | b',' | b'!' | b'@' | b'|') => {
            return Err("unsupported operator");
        }
        Some(_) => (Operator::Simple, body),
    };

    let mut names = Vec::new();
    for name in list.split(',') {
        if name.is_empty() {
            return Err("empty variable name");
        }
        if name.ends_with('*') || name.contains(':') {
            return Err("value modifiers are not supported");
        }
        if !is_varname(name) {
            return Err("invalid variable name");
        }
        names.push(name);
    }

    Ok(Part::Expression { operator, names })
}

fn is_varname(name: &str) -> bool {
    let bytes = name.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                if !is_pct_triplet(bytes, i) {
                    return false;
                }
                i += 3;
            }
            b if b.is_ascii_alphanumeric() || b == b'_' || b == b'.' || b == b'-' => i += 1,
            _ => return false,
        }
    }
    true
}

fn is_pct_triplet(bytes: &[u8], i: usize) -> bool {
    i + 2 < bytes.len() && bytes[i + 1].is_ascii_hexdigit() && bytes[i + 2].is_ascii_hexdigit()
}

/// Reserved expansion: keeps reserved characters and valid `%XX` triplets,
/// encodes a stray `%` as `%25`.
fn encode_reserved(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = String::with_capacity(value.len());
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            out.extend(utf8_percent_encode(&value[start..i], RESERVED_ENCODE_SET));
            if is_pct_triplet(bytes, i) {
                out.push_str(&value[i..i + 3]);
                i += 3;
            } else {
                out.push_str("%25");
                i += 1;
            }
            start = i;
        } else {
            i += 1;
        }
    }
    out.extend(utf8_percent_encode(&value[start..], RESERVED_ENCODE_SET));
    out
}

/// Resolves a template to a URL.
///
/// A bound `request-raw-url` wins: it is returned verbatim and the template is
/// not consulted at all.
///
/// ## Errors
///
/// Returns a [`TemplateError`] when the template is malformed or a path
/// placeholder is unbound.
pub fn expand(template: &str, path: &PathParameters, query: &QueryMap) -> Result<String, TemplateError> {
    if let Some(raw) = path.raw_url() {
        return Ok(raw.to_string());
    }
    UriTemplate::parse(template)?.expand(path, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::{QueryValue, RAW_URL_KEY};

    fn base() -> PathParameters {
        PathParameters::new().with("baseurl", "https://svc.example/v1")
    }

    // =========================================================================
    // Path expansion
    // =========================================================================

    #[test]
    fn reserved_expansion_keeps_slashes_and_colons() {
        let url = expand("{+baseurl}/sites", &base(), &QueryMap::new()).unwrap();
        assert_eq!(url, "https://svc.example/v1/sites");
    }

    #[test]
    fn simple_expansion_encodes_reserved_characters() {
        let path = base().with("path", "teams/a b:c");
        let url = expand("{+baseurl}/sites/root/getByPath(path='{path}')", &path, &QueryMap::new())
            .unwrap();
        assert_eq!(
            url,
            "https://svc.example/v1/sites/root/getByPath(path='teams%2Fa%20b%3Ac')"
        );
    }

    #[test]
    fn simple_expansion_keeps_unreserved() {
        let path = base().with("site%2Did", "contoso.sharepoint.com,abc-123_x~y");
        let url = expand("{+baseurl}/sites/{site%2Did}", &path, &QueryMap::new()).unwrap();
        assert_eq!(
            url,
            "https://svc.example/v1/sites/contoso.sharepoint.com%2Cabc-123_x~y"
        );
    }

    #[test]
    fn encoded_keys_are_matched_literally() {
        let path = base().with("site-id", "abc");
        let err = expand("{+baseurl}/sites/{site%2Did}", &path, &QueryMap::new()).unwrap_err();
        assert_eq!(err.missing_parameter(), Some("site%2Did"));
    }

    #[test]
    fn reserved_expansion_preserves_existing_triplets() {
        let path = PathParameters::new().with("baseurl", "https://svc.example/a%20b/100%");
        let url = expand("{+baseurl}/x", &path, &QueryMap::new()).unwrap();
        assert_eq!(url, "https://svc.example/a%20b/100%25/x");
    }

    #[test]
    fn literal_dollar_segments_pass_through() {
        let path = base().with("site%2Did", "s1");
        let url = expand(
            "{+baseurl}/sites/{site%2Did}/analytics/itemActivityStats/$count",
            &path,
            &QueryMap::new(),
        )
        .unwrap();
        assert!(url.ends_with("/itemActivityStats/$count"));
    }

    // =========================================================================
    // Query expansion
    // =========================================================================

    #[test]
    fn query_values_are_form_encoded_in_template_order() {
        let mut query = QueryMap::new();
        query.set("%24count", true);
        query.set("%24top", 10);
        let url = expand(
            "{+baseurl}/sites{?%24top,%24skip,%24count}",
            &base(),
            &query,
        )
        .unwrap();
        assert_eq!(url, "https://svc.example/v1/sites?%24top=10&%24count=true");
    }

    #[test]
    fn spaces_become_plus() {
        let mut query = QueryMap::new();
        query.set("%24filter", "access gt 0");
        let url = expand("{+baseurl}/x{?%24filter,%24search}", &base(), &query).unwrap();
        assert_eq!(url, "https://svc.example/v1/x?%24filter=access+gt+0");
    }

    #[test]
    fn empty_list_is_omitted() {
        let mut query = QueryMap::new();
        query.set("%24select", QueryValue::List(vec![]));
        let url = expand("{+baseurl}/x{?%24select}", &base(), &query).unwrap();
        assert_eq!(url, "https://svc.example/v1/x");
    }

    #[test]
    fn unlisted_query_keys_are_ignored() {
        let mut query = QueryMap::new();
        query.set("%24top", 5);
        let url = expand("{+baseurl}/x{?%24select}", &base(), &query).unwrap();
        assert_eq!(url, "https://svc.example/v1/x");
    }

    #[test]
    fn continuation_operator_always_uses_ampersand() {
        let mut query = QueryMap::new();
        query.set("b", "2");
        let url = expand("{+baseurl}/x?a=1{&b}", &base(), &query).unwrap();
        assert_eq!(url, "https://svc.example/v1/x?a=1&b=2");
    }

    #[test]
    fn adding_query_parameters_never_changes_the_path() {
        let template = "{+baseurl}/sites/{site%2Did}{?%24expand,%24select}";
        let path = base().with("site%2Did", "s1");
        let bare = expand(template, &path, &QueryMap::new()).unwrap();

        let mut query = QueryMap::new();
        query.set("%24expand", vec!["lists".to_string()]);
        let with_query = expand(template, &path, &query).unwrap();

        assert!(with_query.starts_with(&bare));
        assert_ne!(with_query, bare);
    }

    // =========================================================================
    // Raw URL and errors
    // =========================================================================

    #[test]
    fn raw_url_wins_over_template() {
        let path = PathParameters::new().with(RAW_URL_KEY, "https://svc.example/v1/sites?$skiptoken=abc");
        let mut query = QueryMap::new();
        query.set("%24top", 1);
        let url = expand("{+baseurl}/sites{?%24top}", &path, &query).unwrap();
        assert_eq!(url, "https://svc.example/v1/sites?$skiptoken=abc");
    }

    #[test]
    fn unterminated_placeholder_is_malformed() {
        let err = UriTemplate::parse("{+baseurl}/sites/{site%2Did").unwrap_err();
        assert!(matches!(err, TemplateError::Malformed { position: 17, .. }));
    }

    #[test]
    fn unsupported_operator_is_malformed() {
        assert!(matches!(
            UriTemplate::parse("{+baseurl}{/segments}"),
            Err(TemplateError::Malformed { .. })
        ));
        assert!(matches!(
            UriTemplate::parse("{+baseurl}{?list*}"),
            Err(TemplateError::Malformed { .. })
        ));
    }

    #[test]
    fn stray_closing_brace_is_malformed() {
        assert!(matches!(
            UriTemplate::parse("{+baseurl}/x}"),
            Err(TemplateError::Malformed { .. })
        ));
    }

    #[test]
    fn variables_are_reported_in_order() {
        let template =
            UriTemplate::parse("{+baseurl}/sites/{site%2Did}/lists/{list%2Did}{?%24expand,%24select}")
                .unwrap();
        let path: Vec<_> = template.path_variables().collect();
        let query: Vec<_> = template.query_variables().collect();
        assert_eq!(path, vec!["baseurl", "site%2Did", "list%2Did"]);
        assert_eq!(query, vec!["%24expand", "%24select"]);
    }
}
