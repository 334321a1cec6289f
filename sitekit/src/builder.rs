//! Shared state and navigation for request builders.
//!
//! Every generated builder wraps a [`BaseRequestBuilder`]: the shared adapter,
//! its URL template and the path bindings accumulated while navigating down
//! from the client root. Navigation copies the bindings, so a child never
//! changes its parent.

use std::sync::Arc;

use crate::adapter::RequestAdapter;
use crate::method::HttpMethod;
use crate::parameters::{PathParameters, QueryParameters};
use crate::request_information::{RequestConfiguration, RequestInformation};

/// Where a builder's requests are sent.
#[derive(Debug, Clone)]
pub enum RequestTarget {
    /// Expand the builder's template with these bindings.
    Template(PathParameters),
    /// Send to this absolute URL verbatim.
    RawUrl(String),
}

/// State shared by every request builder.
#[derive(Debug, Clone)]
pub struct BaseRequestBuilder {
    adapter: Arc<dyn RequestAdapter>,
    url_template: &'static str,
    target: RequestTarget,
}

impl BaseRequestBuilder {
    pub fn new(
        adapter: Arc<dyn RequestAdapter>,
        url_template: &'static str,
        path_parameters: PathParameters,
    ) -> Self {
        Self {
            adapter,
            url_template,
            target: RequestTarget::Template(path_parameters),
        }
    }

    /// A builder whose requests go to `raw_url` regardless of the template.
    pub fn from_raw_url(
        adapter: Arc<dyn RequestAdapter>,
        url_template: &'static str,
        raw_url: impl Into<String>,
    ) -> Self {
        Self {
            adapter,
            url_template,
            target: RequestTarget::RawUrl(raw_url.into()),
        }
    }

    /// A sibling of this builder targeting `raw_url`, e.g. a `@odata.nextLink`.
    pub fn with_url(&self, raw_url: impl Into<String>) -> Self {
        Self::from_raw_url(Arc::clone(&self.adapter), self.url_template, raw_url)
    }

    pub fn adapter(&self) -> &Arc<dyn RequestAdapter> {
        &self.adapter
    }

    pub fn url_template(&self) -> &'static str {
        self.url_template
    }

    pub fn target(&self) -> &RequestTarget {
        &self.target
    }

    /// The bindings requests are built from; a raw URL becomes its single
    /// reserved binding.
    pub fn path_parameters(&self) -> PathParameters {
        match &self.target {
            RequestTarget::Template(parameters) => parameters.clone(),
            RequestTarget::RawUrl(url) => PathParameters::for_raw_url(url.clone()),
        }
    }

    /// Bindings inherited by children. A raw URL has nothing to pass down.
    fn inherited_parameters(&self) -> PathParameters {
        match &self.target {
            RequestTarget::Template(parameters) => parameters.clone(),
            RequestTarget::RawUrl(_) => PathParameters::new(),
        }
    }

    /// Navigates to a child that adds no bindings.
    pub fn navigate<B: RequestBuilder>(&self) -> B {
        B::from_path_parameters(self.inherited_parameters(), Arc::clone(&self.adapter))
    }

    /// Navigates to an indexed child, binding `key` to `id`.
    pub fn navigate_with_id<B: RequestBuilder>(&self, key: &str, id: impl Into<String>) -> B {
        let mut parameters = self.inherited_parameters();
        parameters.insert(key, id);
        B::from_path_parameters(parameters, Arc::clone(&self.adapter))
    }

    /// Navigates to a function-call child. `None` arguments stay unbound and
    /// fail template expansion when the child dispatches.
    pub fn navigate_with<B: RequestBuilder>(&self, arguments: &[(&str, Option<&str>)]) -> B {
        let mut parameters = self.inherited_parameters();
        for (key, value) in arguments {
            if let Some(value) = value {
                parameters.insert(*key, *value);
            }
        }
        B::from_path_parameters(parameters, Arc::clone(&self.adapter))
    }

    /// Starts a request for `method`: applies the caller's configuration, then
    /// adds `Accept` unless the caller already set one.
    pub fn request_information<Q: QueryParameters>(
        &self,
        method: HttpMethod,
        config: Option<RequestConfiguration<Q>>,
        accept: &str,
    ) -> RequestInformation {
        let mut info = match &self.target {
            RequestTarget::Template(parameters) => {
                RequestInformation::new(method, self.url_template, parameters.clone())
            }
            RequestTarget::RawUrl(url) => {
                let mut info = RequestInformation::new(method, self.url_template, PathParameters::new());
                info.set_raw_url(url.clone());
                info
            }
        };
        if let Some(config) = config {
            info.configure(config);
        }
        info.headers_mut().try_add("Accept", accept);
        info
    }
}

/// Implemented by every generated request builder.
pub trait RequestBuilder: Sized {
    /// The builder's RFC 6570 URL template.
    const URL_TEMPLATE: &'static str;

    fn from_base(base: BaseRequestBuilder) -> Self;

    fn base(&self) -> &BaseRequestBuilder;

    fn from_path_parameters(path_parameters: PathParameters, adapter: Arc<dyn RequestAdapter>) -> Self {
        Self::from_base(BaseRequestBuilder::new(adapter, Self::URL_TEMPLATE, path_parameters))
    }

    fn from_raw_url(raw_url: impl Into<String>, adapter: Arc<dyn RequestAdapter>) -> Self {
        Self::from_base(BaseRequestBuilder::from_raw_url(adapter, Self::URL_TEMPLATE, raw_url))
    }

    /// The same builder pointed at an absolute URL.
    fn with_url(&self, raw_url: impl Into<String>) -> Self {
        Self::from_base(self.base().with_url(raw_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::ReqwestAdapter;
    use crate::parameters::{BASE_URL_KEY, NoQueryParameters, QueryMap, RAW_URL_KEY};

    struct SitesBuilder {
        base: BaseRequestBuilder,
    }

    impl RequestBuilder for SitesBuilder {
        const URL_TEMPLATE: &'static str = "{+baseurl}/sites{?%24top}";

        fn from_base(base: BaseRequestBuilder) -> Self {
            Self { base }
        }

        fn base(&self) -> &BaseRequestBuilder {
            &self.base
        }
    }

    struct SiteItemBuilder {
        base: BaseRequestBuilder,
    }

    impl RequestBuilder for SiteItemBuilder {
        const URL_TEMPLATE: &'static str = "{+baseurl}/sites/{site%2Did}";

        fn from_base(base: BaseRequestBuilder) -> Self {
            Self { base }
        }

        fn base(&self) -> &BaseRequestBuilder {
            &self.base
        }
    }

    struct TopQuery(i32);

    impl QueryParameters for TopQuery {
        fn to_query_map(&self) -> QueryMap {
            let mut map = QueryMap::new();
            map.set("%24top", self.0);
            map
        }
    }

    fn root() -> SitesBuilder {
        let adapter: Arc<dyn RequestAdapter> = Arc::new(ReqwestAdapter::builder().build().unwrap());
        SitesBuilder::from_path_parameters(
            PathParameters::new().with(BASE_URL_KEY, "https://graph.microsoft.com/v1.0"),
            adapter,
        )
    }

    #[test]
    fn navigation_copies_bindings() {
        let sites = root();
        let a = sites.base().navigate_with_id::<SiteItemBuilder>("site%2Did", "a");
        let b = sites.base().navigate_with_id::<SiteItemBuilder>("site%2Did", "b");

        assert_eq!(a.base().path_parameters().get("site%2Did"), Some("a"));
        assert_eq!(b.base().path_parameters().get("site%2Did"), Some("b"));
        assert!(!sites.base().path_parameters().contains_key("site%2Did"));
    }

    #[test]
    fn request_information_adds_accept_after_config() {
        let sites = root();
        let mut config = RequestConfiguration::with_query(TopQuery(5));
        config.headers.set("Accept", "application/xml");

        let info = sites
            .base()
            .request_information(HttpMethod::Get, Some(config), "application/json");

        assert_eq!(info.headers().get("accept").map(<[String]>::len), Some(1));
        assert_eq!(info.headers().get_first("accept"), Some("application/xml"));
        assert_eq!(
            info.resolve_url().unwrap(),
            "https://graph.microsoft.com/v1.0/sites?%24top=5"
        );
    }

    #[test]
    fn with_url_dispatches_verbatim() {
        let next = "https://graph.microsoft.com/v1.0/sites?$skiptoken=abc";
        let sites = root().with_url(next);

        let info = sites
            .base()
            .request_information::<NoQueryParameters>(HttpMethod::Get, None, "application/json");

        assert!(info.has_raw_url());
        assert_eq!(info.resolve_url().unwrap(), next);
        assert_eq!(sites.base().path_parameters().get(RAW_URL_KEY), Some(next));
    }

    #[test]
    fn children_of_raw_url_builders_start_empty() {
        let sites = root().with_url("https://example.com/custom");
        let item = sites.base().navigate_with_id::<SiteItemBuilder>("site%2Did", "x");

        let params = item.base().path_parameters();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("site%2Did"), Some("x"));
    }

    #[test]
    fn unbound_function_arguments_stay_missing() {
        let sites = root();
        let item = sites
            .base()
            .navigate_with::<SiteItemBuilder>(&[("site%2Did", None)]);

        let info = item
            .base()
            .request_information::<NoQueryParameters>(HttpMethod::Get, None, "application/json");
        let err = info.resolve_url().unwrap_err();
        assert_eq!(err.missing_parameter(), Some("site%2Did"));
    }
}
