//! Description of one outbound call.

use std::borrow::Cow;

use bytes::Bytes;
use serde::Serialize;
use url::Url;

use crate::adapter::RequestAdapter;
use crate::error::{SerializationError, TemplateError};
use crate::headers::HeaderBag;
use crate::method::HttpMethod;
use crate::options::RequestOptions;
use crate::parameters::{NoQueryParameters, PathParameters, QueryMap, QueryParameters, RAW_URL_KEY};
use crate::template;

const CONTENT_TYPE: &str = "Content-Type";
const OCTET_STREAM: &str = "application/octet-stream";

/// Headers, options and query parameters a caller supplies for one verb.
///
/// Generated code aliases this per verb, e.g.
/// `SiteItemRequestBuilderGetRequestConfiguration`.
#[derive(Debug, Clone)]
pub struct RequestConfiguration<Q = NoQueryParameters> {
    pub headers: HeaderBag,
    pub options: RequestOptions,
    pub query_parameters: Option<Q>,
}

impl<Q> Default for RequestConfiguration<Q> {
    fn default() -> Self {
        Self {
            headers: HeaderBag::new(),
            options: RequestOptions::new(),
            query_parameters: None,
        }
    }
}

impl<Q> RequestConfiguration<Q> {
    /// A configuration carrying only query parameters.
    pub fn with_query(query_parameters: Q) -> Self {
        Self {
            query_parameters: Some(query_parameters),
            ..Self::default()
        }
    }
}

/// Everything needed to perform one HTTP call.
///
/// Built fresh by a verb helper, owned by the verb call, and handed to the
/// [`RequestAdapter`] by value.
#[derive(Debug, Clone)]
pub struct RequestInformation {
    method: HttpMethod,
    url_template: Cow<'static, str>,
    path_parameters: PathParameters,
    query_parameters: QueryMap,
    headers: HeaderBag,
    content: Option<Bytes>,
    options: RequestOptions,
}

impl RequestInformation {
    /// Creates a request with empty headers, body, options and query map.
    pub fn new(
        method: HttpMethod,
        url_template: impl Into<Cow<'static, str>>,
        path_parameters: PathParameters,
    ) -> Self {
        Self {
            method,
            url_template: url_template.into(),
            path_parameters,
            query_parameters: QueryMap::new(),
            headers: HeaderBag::new(),
            content: None,
            options: RequestOptions::new(),
        }
    }

    /// Creates a request that dispatches to `raw_url` verbatim.
    pub fn from_raw_url(method: HttpMethod, raw_url: impl Into<String>) -> Self {
        Self::new(method, "", PathParameters::for_raw_url(raw_url))
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn url_template(&self) -> &str {
        &self.url_template
    }

    pub fn path_parameters(&self) -> &PathParameters {
        &self.path_parameters
    }

    pub fn path_parameters_mut(&mut self) -> &mut PathParameters {
        &mut self.path_parameters
    }

    pub fn query_parameters(&self) -> &QueryMap {
        &self.query_parameters
    }

    pub fn query_parameters_mut(&mut self) -> &mut QueryMap {
        &mut self.query_parameters
    }

    pub fn headers(&self) -> &HeaderBag {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderBag {
        &mut self.headers
    }

    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    pub fn content(&self) -> Option<&Bytes> {
        self.content.as_ref()
    }

    /// Merges a flattened query-parameter struct into the query map.
    pub fn add_query_parameters<Q: QueryParameters + ?Sized>(&mut self, parameters: &Q) {
        self.query_parameters.extend(parameters.to_query_map());
    }

    /// Folds a header bag into the request headers.
    pub fn add_headers(&mut self, headers: &HeaderBag) {
        self.headers.add_all(headers);
    }

    /// Appends middleware options.
    pub fn add_options(&mut self, options: &RequestOptions) {
        self.options.add_all(options);
    }

    /// Applies a caller's configuration: headers, options, then query
    /// parameters.
    pub fn configure<Q: QueryParameters>(&mut self, config: RequestConfiguration<Q>) {
        self.add_headers(&config.headers);
        self.add_options(&config.options);
        if let Some(query) = &config.query_parameters {
            self.add_query_parameters(query);
        }
    }

    /// Serializes `model` with the adapter's codec for `content_type` and
    /// uses it as the body.
    ///
    /// ## Errors
    ///
    /// Returns a [`SerializationError`] when no codec is registered for
    /// `content_type` or the model cannot be encoded by it.
    pub fn set_content_from_parsable<T: Serialize + ?Sized>(
        &mut self,
        adapter: &dyn RequestAdapter,
        content_type: &str,
        model: &T,
    ) -> Result<(), SerializationError> {
        let body = adapter.codecs().serialize(content_type, model)?;
        self.set_content(body, content_type);
        Ok(())
    }

    /// Uses raw bytes as an `application/octet-stream` body.
    pub fn set_stream_content(&mut self, content: impl Into<Bytes>) {
        self.set_content(content, OCTET_STREAM);
    }

    /// Sets the body and its `Content-Type`.
    pub fn set_content(&mut self, content: impl Into<Bytes>, content_type: &str) {
        self.headers.set(CONTENT_TYPE, content_type);
        self.content = Some(content.into());
    }

    /// Points the request at a fully formed URL, discarding path bindings.
    pub fn set_raw_url(&mut self, raw_url: impl Into<String>) {
        self.path_parameters = PathParameters::for_raw_url(raw_url);
        self.query_parameters = QueryMap::new();
    }

    /// Expands the URL template, or returns the raw URL when one is bound.
    ///
    /// ## Errors
    ///
    /// Returns a [`TemplateError`] when the template is malformed or a path
    /// placeholder has no binding.
    pub fn resolve_url(&self) -> Result<String, TemplateError> {
        template::expand(&self.url_template, &self.path_parameters, &self.query_parameters)
    }

    /// Resolves and parses the URL.
    ///
    /// ## Errors
    ///
    /// Returns [`TemplateError::Encoding`] when the expanded text is not a
    /// valid absolute URL.
    pub fn uri(&self) -> Result<Url, TemplateError> {
        let resolved = self.resolve_url()?;
        Url::parse(&resolved).map_err(|e| TemplateError::Encoding {
            url: resolved.clone(),
            reason: e.to_string(),
        })
    }

    /// Returns `true` when a raw URL overrides the template.
    pub fn has_raw_url(&self) -> bool {
        self.path_parameters.contains_key(RAW_URL_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default)]
    struct SelectQuery {
        select: Vec<String>,
        top: Option<i32>,
    }

    impl QueryParameters for SelectQuery {
        fn to_query_map(&self) -> QueryMap {
            let mut map = QueryMap::new();
            map.insert("%24select", &self.select);
            map.insert("%24top", &self.top);
            map
        }
    }

    fn site_request() -> RequestInformation {
        RequestInformation::new(
            HttpMethod::Get,
            "{+baseurl}/sites/{site%2Did}{?%24select,%24top}",
            PathParameters::new()
                .with("baseurl", "https://svc.example/v1")
                .with("site%2Did", "abc-123"),
        )
    }

    #[test]
    fn starts_empty() {
        let info = site_request();
        assert!(info.headers().is_empty());
        assert!(info.options().is_empty());
        assert!(info.query_parameters().is_empty());
        assert!(info.content().is_none());
    }

    #[test]
    fn configure_folds_headers_and_query() {
        let mut config = RequestConfiguration::with_query(SelectQuery {
            select: vec!["id".into(), "displayName".into()],
            top: None,
        });
        config.headers.add("ConsistencyLevel", "eventual");

        let mut info = site_request();
        info.configure(config);

        assert_eq!(info.headers().get_first("consistencylevel"), Some("eventual"));
        assert_eq!(
            info.resolve_url().unwrap(),
            "https://svc.example/v1/sites/abc-123?%24select=id%2CdisplayName"
        );
    }

    #[test]
    fn raw_url_resolves_verbatim() {
        let mut info = site_request();
        info.add_query_parameters(&SelectQuery {
            select: vec!["id".into()],
            top: Some(1),
        });
        info.set_raw_url("https://svc.example/v1/sites?$skiptoken=X");
        assert!(info.has_raw_url());
        assert_eq!(info.resolve_url().unwrap(), "https://svc.example/v1/sites?$skiptoken=X");
    }

    #[test]
    fn stream_content_sets_octet_stream() {
        let mut info = RequestInformation::from_raw_url(HttpMethod::Put, "https://svc.example/x");
        info.set_stream_content(&b"hello"[..]);
        assert_eq!(info.headers().get_first("content-type"), Some(OCTET_STREAM));
        assert_eq!(info.content().map(|b| &b[..]), Some(&b"hello"[..]));
    }

    #[test]
    fn uri_rejects_relative_results() {
        let info = RequestInformation::new(
            HttpMethod::Get,
            "{+baseurl}/sites",
            PathParameters::new().with("baseurl", "not a url"),
        );
        assert!(matches!(info.uri(), Err(TemplateError::Encoding { .. })));
    }

    #[test]
    fn missing_binding_surfaces_template_error() {
        let info = RequestInformation::new(
            HttpMethod::Get,
            "{+baseurl}/sites/{site%2Did}",
            PathParameters::new().with("baseurl", "https://svc.example"),
        );
        assert_eq!(
            info.resolve_url().unwrap_err().missing_parameter(),
            Some("site%2Did")
        );
    }
}
