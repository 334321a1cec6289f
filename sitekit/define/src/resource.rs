//! Resource nodes of the request-builder tree.
//!
//! A [`Resource`] owns one URL template and becomes one generated request
//! builder. Edges between resources are [`Navigation`]s, which become
//! accessor methods on the parent builder.

use crate::request::Operation;

/// One addressable endpoint.
///
/// ## Examples
///
/// ```
/// use sitekit_define::{Navigation, Operation, QueryOption, Resource, ResponseKind, RestMethod};
///
/// let sites = Resource::new("Sites", "sites", "{+baseurl}/sites{?%24top,%24count}")
///     .describe("Provides operations to manage the collection of site entities.")
///     .operation(
///         Operation::new(RestMethod::Get, ResponseKind::model("SiteCollectionResponse"))
///             .query(QueryOption::top())
///             .query(QueryOption::count()),
///     )
///     .navigation(Navigation::indexer("by_site_id", "SiteItem", "site%2Did", "site_id"));
///
/// assert_eq!(sites.builder_name(), "SitesRequestBuilder");
/// assert!(sites.find_operation(RestMethod::Get).is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    /// Short name; the generated type is `{name}RequestBuilder`.
    pub name: String,
    /// Module the builder is emitted into (e.g., "sites", "term_store").
    pub module: String,
    /// RFC 6570 template, always rooted at `{+baseurl}`.
    pub url_template: String,
    pub description: String,
    pub operations: Vec<Operation>,
    pub navigations: Vec<Navigation>,
}

impl Resource {
    pub fn new(
        name: impl Into<String>,
        module: impl Into<String>,
        url_template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            module: module.into(),
            url_template: url_template.into(),
            description: String::new(),
            operations: Vec::new(),
            navigations: Vec::new(),
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    pub fn navigation(mut self, navigation: Navigation) -> Self {
        self.navigations.push(navigation);
        self
    }

    /// Name of the generated builder type.
    pub fn builder_name(&self) -> String {
        format!("{}RequestBuilder", self.name)
    }

    pub fn find_operation(&self, method: crate::RestMethod) -> Option<&Operation> {
        self.operations.iter().find(|o| o.method == method)
    }

    /// Path variables the template references, excluding `baseurl` and the
    /// query expression.
    ///
    /// ```
    /// use sitekit_define::Resource;
    ///
    /// let r = Resource::new("SiteItem", "sites", "{+baseurl}/sites/{site%2Did}{?%24select}");
    /// assert_eq!(r.path_variables(), vec!["site%2Did"]);
    /// ```
    pub fn path_variables(&self) -> Vec<&str> {
        let mut out = Vec::new();
        let mut rest = self.url_template.as_str();
        while let Some(start) = rest.find('{') {
            let Some(len) = rest[start..].find('}') else {
                break;
            };
            let expr = &rest[start + 1..start + len];
            rest = &rest[start + len + 1..];
            if expr.starts_with(['?', '&']) {
                continue;
            }
            let expr = expr.trim_start_matches('+');
            for var in expr.split(',') {
                if var != "baseurl" && !var.is_empty() {
                    out.push(var);
                }
            }
        }
        out
    }

    /// Names declared by the template's `{?...}` expression.
    pub fn query_variables(&self) -> Vec<&str> {
        let Some(start) = self.url_template.find("{?") else {
            return Vec::new();
        };
        let rest = &self.url_template[start + 2..];
        let end = rest.find('}').unwrap_or(rest.len());
        rest[..end].split(',').filter(|v| !v.is_empty()).collect()
    }
}

/// An edge from one resource to a child resource.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigation {
    /// Generated accessor name (snake_case).
    pub method_name: String,
    /// Name of the target [`Resource`].
    pub target: String,
    pub kind: NavigationKind,
    pub description: Option<String>,
}

/// How a navigation binds path parameters on the child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationKind {
    /// Plain child segment; bindings are copied unchanged.
    Property,
    /// Keyed item accessor such as `by_site_id(id)`.
    Indexer {
        /// Template variable the id is stored under (e.g., `site%2Did`).
        key: String,
        /// Rust parameter name on the accessor.
        param: String,
    },
    /// Function segment with one or more bound arguments.
    Function { arguments: Vec<FunctionArgument> },
}

/// One argument of a function-style navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionArgument {
    /// Rust parameter name.
    pub name: String,
    /// Template variable it binds.
    pub key: String,
}

impl FunctionArgument {
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
        }
    }
}

impl Navigation {
    pub fn property(method_name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            method_name: method_name.into(),
            target: target.into(),
            kind: NavigationKind::Property,
            description: None,
        }
    }

    pub fn indexer(
        method_name: impl Into<String>,
        target: impl Into<String>,
        key: impl Into<String>,
        param: impl Into<String>,
    ) -> Self {
        Self {
            method_name: method_name.into(),
            target: target.into(),
            kind: NavigationKind::Indexer {
                key: key.into(),
                param: param.into(),
            },
            description: None,
        }
    }

    pub fn function(
        method_name: impl Into<String>,
        target: impl Into<String>,
        arguments: Vec<FunctionArgument>,
    ) -> Self {
        Self {
            method_name: method_name.into(),
            target: target.into(),
            kind: NavigationKind::Function { arguments },
            description: None,
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Template variables this navigation binds on the child.
    pub fn bound_keys(&self) -> Vec<&str> {
        match &self.kind {
            NavigationKind::Property => Vec::new(),
            NavigationKind::Indexer { key, .. } => vec![key.as_str()],
            NavigationKind::Function { arguments } => {
                arguments.iter().map(|a| a.key.as_str()).collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_variables_skip_baseurl_and_query() {
        let r = Resource::new(
            "GetActivitiesByInterval",
            "lists",
            "{+baseurl}/sites/{site%2Did}/getActivitiesByInterval(startDateTime='{startDateTime}',interval='{interval}'){?%24top,%24count}",
        );
        assert_eq!(r.path_variables(), vec!["site%2Did", "startDateTime", "interval"]);
        assert_eq!(r.query_variables(), vec!["%24top", "%24count"]);
    }

    #[test]
    fn template_without_query_has_no_query_variables() {
        let r = Resource::new("Count", "sites", "{+baseurl}/sites/$count{?%24search}");
        assert_eq!(r.query_variables(), vec!["%24search"]);
        let r = Resource::new("Root", "drive", "{+baseurl}/sites/{site%2Did}/drive/root");
        assert!(r.query_variables().is_empty());
    }

    #[test]
    fn bound_keys_follow_kind() {
        let nav = Navigation::function(
            "get_by_path",
            "GetByPath",
            vec![FunctionArgument::new("path", "path")],
        );
        assert_eq!(nav.bound_keys(), vec!["path"]);
        assert!(Navigation::property("drive", "Drive").bound_keys().is_empty());
    }
}
