//! OData query options.
//!
//! Each option has a Rust field name and a wire name. Wire names are the
//! percent-encoded form that appears in URL templates (`%24top` for `$top`).

/// Value type of a query option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    String,
    Int32,
    Bool,
    /// Comma-joined list of strings.
    StringList,
}

/// One query option on an operation.
///
/// ## Examples
///
/// ```
/// use sitekit_define::QueryOption;
///
/// let names: Vec<_> = QueryOption::collection().iter().map(|q| q.wire_name.clone()).collect();
/// assert_eq!(names.first().map(String::as_str), Some("%24top"));
/// assert_eq!(names.last().map(String::as_str), Some("%24expand"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOption {
    /// Rust field name.
    pub name: String,
    /// Name as it appears in the template.
    pub wire_name: String,
    pub kind: QueryKind,
    pub description: String,
}

impl QueryOption {
    pub fn new(
        name: impl Into<String>,
        wire_name: impl Into<String>,
        kind: QueryKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            wire_name: wire_name.into(),
            kind,
            description: description.into(),
        }
    }

    pub fn top() -> Self {
        Self::new("top", "%24top", QueryKind::Int32, "Show only the first n items")
    }

    pub fn skip() -> Self {
        Self::new("skip", "%24skip", QueryKind::Int32, "Skip the first n items")
    }

    pub fn search() -> Self {
        Self::new("search", "%24search", QueryKind::String, "Search items by search phrases")
    }

    pub fn filter() -> Self {
        Self::new("filter", "%24filter", QueryKind::String, "Filter items by property values")
    }

    pub fn count() -> Self {
        Self::new("count", "%24count", QueryKind::Bool, "Include count of items")
    }

    pub fn orderby() -> Self {
        Self::new("orderby", "%24orderby", QueryKind::StringList, "Order items by property values")
    }

    pub fn select() -> Self {
        Self::new("select", "%24select", QueryKind::StringList, "Select properties to be returned")
    }

    pub fn expand() -> Self {
        Self::new("expand", "%24expand", QueryKind::StringList, "Expand related entities")
    }

    pub fn format() -> Self {
        Self::new("format", "%24format", QueryKind::String, "Format of the content")
    }

    /// Options accepted by collection GETs, in template order.
    pub fn collection() -> Vec<Self> {
        vec![
            Self::top(),
            Self::skip(),
            Self::search(),
            Self::filter(),
            Self::count(),
            Self::orderby(),
            Self::select(),
            Self::expand(),
        ]
    }

    /// Options accepted by single-entity GETs.
    pub fn item() -> Vec<Self> {
        vec![Self::expand(), Self::select()]
    }

    /// Options accepted by `$count` segments.
    pub fn counting() -> Vec<Self> {
        vec![Self::search(), Self::filter()]
    }

    /// Template query expression for `options`, e.g. `{?%24top,%24skip}`.
    pub fn template_suffix(options: &[Self]) -> String {
        if options.is_empty() {
            return String::new();
        }
        let names: Vec<_> = options.iter().map(|o| o.wire_name.as_str()).collect();
        format!("{{?{}}}", names.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_suffix_order() {
        assert_eq!(
            QueryOption::template_suffix(&QueryOption::collection()),
            "{?%24top,%24skip,%24search,%24filter,%24count,%24orderby,%24select,%24expand}"
        );
        assert_eq!(QueryOption::template_suffix(&[]), "");
    }
}
