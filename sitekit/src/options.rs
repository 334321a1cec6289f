//! Per-call request options consumed by middleware.
//!
//! Options are opaque to the request builders; each middleware looks up its
//! own option type in the registry carried by the request.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Blanket downcasting support for [`RequestOption`] trait objects.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A middleware hint attached to a single request.
pub trait RequestOption: AsAny + Send + Sync + fmt::Debug {
    /// Key identifying the option kind; one option per key is kept.
    fn key(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Ordered registry of request options, at most one per key.
///
/// ## Examples
///
/// ```
/// use sitekit::{RequestOption, RequestOptions};
///
/// #[derive(Debug)]
/// struct RetryLimit(u32);
/// impl RequestOption for RetryLimit {}
///
/// let mut options = RequestOptions::new();
/// options.add(RetryLimit(3));
/// options.add(RetryLimit(5));
/// assert_eq!(options.len(), 1);
/// assert_eq!(options.get::<RetryLimit>().map(|r| r.0), Some(5));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    options: Vec<Arc<dyn RequestOption>>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `option`, replacing any option with the same key in place.
    pub fn add<O: RequestOption + 'static>(&mut self, option: O) {
        self.add_shared(Arc::new(option));
    }

    /// Adds an already shared option, replacing any option with the same key.
    pub fn add_shared(&mut self, option: Arc<dyn RequestOption>) {
        let key = option.key();
        match self.options.iter_mut().find(|o| o.key() == key) {
            Some(slot) => *slot = option,
            None => self.options.push(option),
        }
    }

    /// Appends every option of `other`, with `other` winning on key clashes.
    pub fn add_all(&mut self, other: &RequestOptions) {
        for option in &other.options {
            self.add_shared(Arc::clone(option));
        }
    }

    /// Finds the option of type `O`.
    pub fn get<O: RequestOption + 'static>(&self) -> Option<&O> {
        self.options
            .iter()
            .find_map(|o| AsAny::as_any(o.as_ref()).downcast_ref::<O>())
    }

    /// Removes the option registered under `key`.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.options.len();
        self.options.retain(|o| o.key() != key);
        before != self.options.len()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.options.iter().any(|o| o.key() == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn RequestOption>> {
        self.options.iter()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct MaxRetries(u32);
    impl RequestOption for MaxRetries {}

    #[derive(Debug)]
    struct Tagged;
    impl RequestOption for Tagged {
        fn key(&self) -> &'static str {
            "tagged"
        }
    }

    #[test]
    fn lookup_by_type() {
        let mut options = RequestOptions::new();
        options.add(MaxRetries(2));
        options.add(Tagged);
        assert_eq!(options.get::<MaxRetries>(), Some(&MaxRetries(2)));
        assert!(options.get::<Tagged>().is_some());
    }

    #[test]
    fn same_key_replaces_in_place() {
        let mut options = RequestOptions::new();
        options.add(MaxRetries(1));
        options.add(Tagged);
        options.add(MaxRetries(4));

        let keys: Vec<_> = options.iter().map(|o| o.key()).collect();
        assert_eq!(keys[1], "tagged");
        assert_eq!(options.len(), 2);
        assert_eq!(options.get::<MaxRetries>(), Some(&MaxRetries(4)));
    }

    #[test]
    fn add_all_and_remove() {
        let mut base = RequestOptions::new();
        base.add(MaxRetries(1));
        let mut other = RequestOptions::new();
        other.add(Tagged);

        base.add_all(&other);
        assert!(base.contains_key("tagged"));
        assert!(base.remove("tagged"));
        assert!(!base.remove("tagged"));
        assert_eq!(base.len(), 1);
    }
}
