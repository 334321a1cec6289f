//! Case-insensitive, multi-valued header bag.
//!
//! Header names are normalised to lowercase on insertion, so `Accept` and
//! `accept` address the same entry. Each name maps to an ordered list of
//! values; duplicate values for the same name are ignored.

use std::collections::BTreeMap;

/// A case-insensitive mapping from header name to an ordered list of values.
///
/// Used both for request headers (folded into a [`RequestInformation`]) and for
/// response headers captured on errors.
///
/// ## Examples
///
/// ```
/// use sitekit::HeaderBag;
///
/// let mut headers = HeaderBag::new();
/// headers.add("Prefer", "odata.maxpagesize=10");
/// headers.add("prefer", "return=minimal");
/// assert!(!headers.try_add("PREFER", "ignored"));
/// assert_eq!(headers.get("Prefer").map(<[String]>::len), Some(2));
/// ```
///
/// [`RequestInformation`]: crate::RequestInformation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderBag {
    entries: BTreeMap<String, Vec<String>>,
}

fn normalize(name: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_ascii_lowercase())
    }
}

impl HeaderBag {
    /// Creates an empty header bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every value of `name` with `value`.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        if let Some(key) = normalize(name) {
            self.entries.insert(key, vec![value.into()]);
        }
    }

    /// Appends `value` to `name`, keeping existing values.
    pub fn add(&mut self, name: &str, value: impl Into<String>) {
        let Some(key) = normalize(name) else {
            return;
        };
        let value = value.into();
        let values = self.entries.entry(key).or_default();
        if !values.contains(&value) {
            values.push(value);
        }
    }

    /// Inserts `value` only if `name` has no values yet.
    ///
    /// Returns `true` when the value was inserted.
    pub fn try_add(&mut self, name: &str, value: impl Into<String>) -> bool {
        let Some(key) = normalize(name) else {
            return false;
        };
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, vec![value.into()]);
        true
    }

    /// Folds every value of `other` into this bag.
    pub fn add_all(&mut self, other: &HeaderBag) {
        for (name, values) in &other.entries {
            for value in values {
                self.add(name, value.clone());
            }
        }
    }

    /// Returns the values stored for `name`.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        let key = normalize(name)?;
        self.entries.get(&key).map(Vec::as_slice)
    }

    /// Returns the first value stored for `name`.
    pub fn get_first(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|v| v.first()).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Removes `name` entirely, returning its values.
    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        let key = normalize(name)?;
        self.entries.remove(&key)
    }

    /// Removes a single value from `name`, dropping the name once empty.
    pub fn remove_value(&mut self, name: &str, value: &str) -> bool {
        let Some(key) = normalize(name) else {
            return false;
        };
        let Some(values) = self.entries.get_mut(&key) else {
            return false;
        };
        let before = values.len();
        values.retain(|v| v != value);
        let removed = values.len() != before;
        if values.is_empty() {
            self.entries.remove(&key);
        }
        removed
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(lowercase name, values)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }
}

impl<N: AsRef<str>, V: Into<String>> FromIterator<(N, V)> for HeaderBag {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut bag = HeaderBag::new();
        for (name, value) in iter {
            bag.add(name.as_ref(), value);
        }
        bag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Case insensitivity
    // =========================================================================

    #[test]
    fn names_are_case_insensitive() {
        let mut headers = HeaderBag::new();
        headers.set("Content-Type", "application/json");
        assert_eq!(headers.get_first("content-type"), Some("application/json"));
        assert_eq!(headers.get_first("CONTENT-TYPE"), Some("application/json"));
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn iteration_yields_lowercase_names() {
        let headers: HeaderBag = [("X-Custom", "1"), ("Accept", "text/plain")]
            .into_iter()
            .collect();
        let names: Vec<_> = headers.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["accept", "x-custom"]);
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    #[test]
    fn set_replaces_all_values() {
        let mut headers = HeaderBag::new();
        headers.add("Accept", "a");
        headers.add("Accept", "b");
        headers.set("accept", "c");
        assert_eq!(headers.get("Accept"), Some(&["c".to_string()][..]));
    }

    #[test]
    fn add_appends_in_order_and_skips_duplicates() {
        let mut headers = HeaderBag::new();
        headers.add("Prefer", "one");
        headers.add("Prefer", "two");
        headers.add("PREFER", "one");
        assert_eq!(
            headers.get("prefer"),
            Some(&["one".to_string(), "two".to_string()][..])
        );
    }

    #[test]
    fn try_add_only_inserts_when_absent() {
        let mut headers = HeaderBag::new();
        assert!(headers.try_add("Accept", "application/json"));
        assert!(!headers.try_add("ACCEPT", "text/plain"));
        assert_eq!(headers.get_first("accept"), Some("application/json"));
    }

    #[test]
    fn add_all_merges_other_bag() {
        let mut base = HeaderBag::new();
        base.add("Accept", "application/json");
        let mut other = HeaderBag::new();
        other.add("accept", "text/plain");
        other.add("X-Trace", "abc");

        base.add_all(&other);

        assert_eq!(base.get("accept").map(<[String]>::len), Some(2));
        assert_eq!(base.get_first("x-trace"), Some("abc"));
    }

    #[test]
    fn remove_value_drops_empty_names() {
        let mut headers = HeaderBag::new();
        headers.add("Prefer", "one");
        assert!(headers.remove_value("prefer", "one"));
        assert!(!headers.contains("Prefer"));
        assert!(!headers.remove_value("prefer", "one"));
    }

    #[test]
    fn blank_names_are_ignored() {
        let mut headers = HeaderBag::new();
        headers.add("  ", "value");
        assert!(!headers.try_add("", "value"));
        assert!(headers.is_empty());
    }
}
