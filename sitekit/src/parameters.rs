//! Path and query parameter maps.
//!
//! Path parameters are plain string bindings keyed exactly as the URL template
//! writes them (`site%2Did`, not `site-id`). Query parameters are typed values
//! rendered to text at expansion time, keyed by their wire name.

use std::collections::BTreeMap;

/// Path key that supplies the service root for `{+baseurl}`.
pub const BASE_URL_KEY: &str = "baseurl";

/// Path key that short-circuits template expansion with a complete URL.
pub const RAW_URL_KEY: &str = "request-raw-url";

/// Mapping from template placeholder names to bound values.
///
/// Keys are matched literally against the template; an encoded key such as
/// `site%2Did` is never decoded before lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParameters(BTreeMap<String, String>);

impl PathParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a map holding only [`RAW_URL_KEY`].
    pub fn for_raw_url(raw_url: impl Into<String>) -> Self {
        let mut map = Self::new();
        map.insert(RAW_URL_KEY, raw_url);
        map
    }

    /// Binds `key` to `value`, returning the previous binding.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Returns a copy of this map with `key` bound to `value`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// The raw URL override, if one is bound.
    pub fn raw_url(&self) -> Option<&str> {
        self.get(RAW_URL_KEY)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PathParameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// A typed query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    String(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Rendered comma-joined inside a single key.
    List(Vec<String>),
}

impl QueryValue {
    /// Renders the value in its canonical text form.
    ///
    /// Returns `None` for empty strings and empty lists, which never appear
    /// on the wire.
    pub fn render(&self) -> Option<String> {
        match self {
            Self::String(s) if s.is_empty() => None,
            Self::String(s) => Some(s.clone()),
            Self::Bool(b) => Some(b.to_string()),
            Self::Int(i) => Some(i.to_string()),
            Self::Float(f) => Some(f.to_string()),
            Self::List(items) if items.is_empty() => None,
            Self::List(items) => Some(items.join(",")),
        }
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// Conversion used by query parameter structs to feed a [`QueryMap`].
///
/// Absent values return `None` and are skipped.
pub trait ToQueryValue {
    fn to_query_value(&self) -> Option<QueryValue>;
}

impl<T: Clone + Into<QueryValue>> ToQueryValue for Option<T> {
    fn to_query_value(&self) -> Option<QueryValue> {
        self.clone().map(Into::into)
    }
}

impl ToQueryValue for Vec<String> {
    fn to_query_value(&self) -> Option<QueryValue> {
        if self.is_empty() {
            None
        } else {
            Some(QueryValue::List(self.clone()))
        }
    }
}

/// Query parameters keyed by wire name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryMap(BTreeMap<String, QueryValue>);

impl QueryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` under `key` when it is present.
    pub fn insert(&mut self, key: impl Into<String>, value: &impl ToQueryValue) {
        if let Some(value) = value.to_query_value() {
            self.0.insert(key.into(), value);
        }
    }

    /// Inserts an already-typed value, replacing any previous one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.0.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<QueryValue> {
        self.0.remove(key)
    }

    /// Merges `other` into this map; `other` wins on conflicts.
    pub fn extend(&mut self, other: QueryMap) {
        self.0.extend(other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// A flat query-parameter record that knows the wire name of each field.
///
/// Generated per verb; each field is written under its wire name (for example
/// `select` under `%24select`).
pub trait QueryParameters {
    fn to_query_map(&self) -> QueryMap;
}

/// Query parameters for verbs that accept none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoQueryParameters;

impl QueryParameters for NoQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        QueryMap::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_parameters_match_keys_literally() {
        let params = PathParameters::new().with("site%2Did", "abc");
        assert_eq!(params.get("site%2Did"), Some("abc"));
        assert_eq!(params.get("site-id"), None);
    }

    #[test]
    fn raw_url_map_holds_only_raw_key() {
        let params = PathParameters::for_raw_url("https://svc.example/next");
        assert_eq!(params.len(), 1);
        assert_eq!(params.raw_url(), Some("https://svc.example/next"));
    }

    #[test]
    fn render_canonical_forms() {
        assert_eq!(QueryValue::Bool(true).render().as_deref(), Some("true"));
        assert_eq!(QueryValue::Int(10).render().as_deref(), Some("10"));
        assert_eq!(QueryValue::Float(1.5).render().as_deref(), Some("1.5"));
        assert_eq!(
            QueryValue::List(vec!["id".into(), "displayName".into()])
                .render()
                .as_deref(),
            Some("id,displayName")
        );
    }

    #[test]
    fn empty_values_render_as_absent() {
        assert_eq!(QueryValue::List(vec![]).render(), None);
        assert_eq!(QueryValue::String(String::new()).render(), None);
    }

    #[test]
    fn query_map_skips_absent_values() {
        let top: Option<i32> = None;
        let select: Vec<String> = vec![];
        let filter = Some("access gt 0".to_string());

        let mut map = QueryMap::new();
        map.insert("%24top", &top);
        map.insert("%24select", &select);
        map.insert("%24filter", &filter);

        assert_eq!(map.len(), 1);
        assert_eq!(
            map.get("%24filter"),
            Some(&QueryValue::String("access gt 0".into()))
        );
    }

    #[test]
    fn zero_is_still_a_value() {
        let skip = Some(0);
        let mut map = QueryMap::new();
        map.insert("%24skip", &skip);
        assert_eq!(map.get("%24skip"), Some(&QueryValue::Int(0)));
    }

    #[test]
    fn no_query_parameters_is_empty() {
        assert!(NoQueryParameters.to_query_map().is_empty());
    }
}
