//! [`RequestAdapter`] backed by `reqwest`, with tracing instrumentation.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, WWW_AUTHENTICATE};
use tracing::field::Empty;
use tracing::{Span, debug, instrument, warn};

use super::auth::{AnonymousAuthenticationProvider, AuthenticationProvider};
use super::context::RequestContext;
use super::middleware::{HeadersInspectionHandler, Middleware, Next, UserAgentHandler, header_bag_from};
use super::RequestAdapter;
use crate::error::{SdkError, TransportError, UnknownServiceError};
use crate::error_mapping::ErrorMappings;
use crate::parameters::BASE_URL_KEY;
use crate::request_information::RequestInformation;
use crate::serialization::{Codec, CodecRegistry, ParseNode, PrimitiveType, PrimitiveValue, normalize_content_type};

/// Service root used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://graph.microsoft.com/v1.0";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Content type assumed for error payloads that do not declare one.
const DEFAULT_ERROR_CONTENT_TYPE: &str = "application/json";

/// Builder for configuring a [`ReqwestAdapter`].
#[derive(Debug)]
pub struct ReqwestAdapterBuilder {
    base_url: String,
    timeout: Duration,
    default_headers: HeaderMap,
    auth: Arc<dyn AuthenticationProvider>,
    codecs: CodecRegistry,
    middleware: Vec<Arc<dyn Middleware>>,
    client: Option<reqwest::Client>,
}

impl Default for ReqwestAdapterBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: HeaderMap::new(),
            auth: Arc::new(AnonymousAuthenticationProvider),
            codecs: CodecRegistry::default(),
            middleware: default_middleware(),
            client: None,
        }
    }
}

fn default_middleware() -> Vec<Arc<dyn Middleware>> {
    vec![
        Arc::new(UserAgentHandler::default()),
        Arc::new(HeadersInspectionHandler),
    ]
}

impl ReqwestAdapterBuilder {
    /// Sets the service root. A trailing slash is dropped.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Sets the request timeout.
    ///
    /// ## Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use sitekit::ReqwestAdapter;
    ///
    /// let adapter = ReqwestAdapter::builder()
    ///     .timeout(Duration::from_secs(60))
    ///     .build()
    ///     .unwrap();
    /// # let _ = adapter;
    /// ```
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a header sent with every request unless the request sets it.
    ///
    /// ## Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, SdkError> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| TransportError::InvalidRequest(format!("invalid header name: {e}")))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| TransportError::InvalidRequest(format!("invalid header value: {e}")))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Sets the authentication provider.
    ///
    /// ## Examples
    ///
    /// ```
    /// use sitekit::{BaseBearerTokenAuthenticationProvider, ReqwestAdapter, StaticTokenProvider};
    ///
    /// let adapter = ReqwestAdapter::builder()
    ///     .authentication_provider(BaseBearerTokenAuthenticationProvider::new(
    ///         StaticTokenProvider::new("token"),
    ///     ))
    ///     .build()
    ///     .unwrap();
    /// # let _ = adapter;
    /// ```
    pub fn authentication_provider(mut self, auth: impl AuthenticationProvider + 'static) -> Self {
        self.auth = Arc::new(auth);
        self
    }

    /// Replaces the codec registry.
    pub fn codecs(mut self, codecs: CodecRegistry) -> Self {
        self.codecs = codecs;
        self
    }

    /// Registers one more codec, replacing any codec for the same content type.
    pub fn register_codec(mut self, codec: impl Codec + 'static) -> Self {
        self.codecs.register(codec);
        self
    }

    /// Replaces the whole middleware chain.
    pub fn middleware(mut self, chain: Vec<Arc<dyn Middleware>>) -> Self {
        self.middleware = chain;
        self
    }

    /// Appends a handler to the end of the chain.
    pub fn with_middleware(mut self, handler: impl Middleware + 'static) -> Self {
        self.middleware.push(Arc::new(handler));
        self
    }

    /// Uses a preconfigured client. Timeout and default headers set on this
    /// builder are then ignored.
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Builds the [`ReqwestAdapter`].
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<ReqwestAdapter, SdkError> {
        let client = match self.client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .timeout(self.timeout)
                .default_headers(self.default_headers)
                .pool_max_idle_per_host(10)
                .build()
                .map_err(TransportError::Request)?,
        };

        Ok(ReqwestAdapter {
            client,
            base_url: self.base_url,
            auth: self.auth,
            codecs: self.codecs,
            middleware: self.middleware,
        })
    }
}

/// HTTP request adapter over a pooled `reqwest` client.
///
/// One adapter is shared by every builder rooted at a client; it is safe to
/// use from concurrent tasks.
///
/// ## Examples
///
/// ```no_run
/// use sitekit::{BaseBearerTokenAuthenticationProvider, EnvTokenProvider, ReqwestAdapter};
///
/// let adapter = ReqwestAdapter::builder()
///     .authentication_provider(BaseBearerTokenAuthenticationProvider::new(
///         EnvTokenProvider::default(),
///     ))
///     .build()?;
/// # Ok::<(), sitekit::SdkError>(())
/// ```
#[derive(Debug)]
pub struct ReqwestAdapter {
    client: reqwest::Client,
    base_url: String,
    auth: Arc<dyn AuthenticationProvider>,
    codecs: CodecRegistry,
    middleware: Vec<Arc<dyn Middleware>>,
}

impl ReqwestAdapter {
    pub fn builder() -> ReqwestAdapterBuilder {
        ReqwestAdapterBuilder::default()
    }

    /// Creates an adapter with default settings and the given provider.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(auth: impl AuthenticationProvider + 'static) -> Result<Self, SdkError> {
        Self::builder().authentication_provider(auth).build()
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        let base_url: String = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
    }

    /// Resolves, authenticates and sends one request through the chain.
    async fn get_http_response(
        &self,
        ctx: &RequestContext,
        info: &mut RequestInformation,
        claims: Option<&str>,
    ) -> Result<reqwest::Response, SdkError> {
        info.path_parameters_mut()
            .insert(BASE_URL_KEY, self.base_url.clone());
        let url = info.uri()?;
        self.auth.authenticate_request(info, &url, claims).await?;

        let request = to_native_request(info)?;
        Span::current().record("http.url", request.url().as_str());

        let next = Next::new(&self.client, &self.middleware);
        let response = ctx.run(next.run(request, info.options())).await?;
        Ok(response)
    }

    /// Sends the request, retrying once when the service issues a claims
    /// challenge.
    async fn dispatch(
        &self,
        ctx: &RequestContext,
        mut info: RequestInformation,
    ) -> Result<reqwest::Response, SdkError> {
        Span::current().record("http.method", info.method().to_string().as_str());

        let response = self.get_http_response(ctx, &mut info, None).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }
        let Some(claims) = claims_challenge(response.headers()) else {
            return Ok(response);
        };

        warn!("received claims challenge, retrying request once");
        drop(response);
        self.get_http_response(ctx, &mut info, Some(&claims)).await
    }

    /// Passes successful responses through and converts failures into errors
    /// using the supplied mappings.
    async fn throw_if_failed(
        &self,
        ctx: &RequestContext,
        response: reqwest::Response,
        errors: &ErrorMappings,
    ) -> Result<reqwest::Response, SdkError> {
        let status = response.status();
        let span = Span::current();
        span.record("http.status_code", status.as_u16());

        if status.is_success() {
            span.record("otel.status_code", "OK");
            return Ok(response);
        }
        if status.is_server_error() {
            span.record("otel.status_code", "ERROR");
        }

        let code = status.as_u16();
        let headers = header_bag_from(response.headers());
        let content_type = content_type_of(response.headers());

        let Some(factory) = errors.select(code) else {
            debug!(status = code, "no error factory registered for status");
            let body = match read_body(ctx, response).await {
                Ok(body) => body,
                Err(e @ (TransportError::Cancelled | TransportError::DeadlineExceeded)) => {
                    return Err(e.into());
                }
                Err(e) => {
                    debug!(status = code, error = %e, "unmapped error body could not be read");
                    Bytes::new()
                }
            };
            return Err(UnknownServiceError::unmapped(code, body, headers).into());
        };

        let body = read_body(ctx, response).await?;
        if body.is_empty() {
            return Err(UnknownServiceError::empty_body(code, headers).into());
        }

        let content_type = content_type.unwrap_or_else(|| DEFAULT_ERROR_CONTENT_TYPE.to_string());
        let node = self.codecs.get(&content_type)?.parse(&body)?;
        let error = factory(&node)?.with_response(code, headers);
        debug!(status = code, code = %error.code, "mapped service error");
        Err(error.into())
    }

    /// Reads a successful body, returning `None` when there is nothing to
    /// decode.
    async fn read_success_body(
        &self,
        ctx: &RequestContext,
        response: reqwest::Response,
    ) -> Result<Option<(Option<String>, Bytes)>, SdkError> {
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        let content_type = content_type_of(response.headers());
        let body = read_body(ctx, response).await?;
        if body.is_empty() {
            return Ok(None);
        }
        Ok(Some((content_type, body)))
    }
}

#[async_trait]
impl RequestAdapter for ReqwestAdapter {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn codecs(&self) -> &CodecRegistry {
        &self.codecs
    }

    #[instrument(
        name = "sitekit_request",
        skip_all,
        fields(
            http.method = Empty,
            http.url = Empty,
            http.status_code = Empty,
            otel.kind = "client",
            otel.status_code = Empty,
        )
    )]
    async fn send_for_node(
        &self,
        ctx: &RequestContext,
        info: RequestInformation,
        errors: &ErrorMappings,
    ) -> Result<Option<ParseNode>, SdkError> {
        let response = self.dispatch(ctx, info).await?;
        let response = self.throw_if_failed(ctx, response, errors).await?;
        let Some((content_type, body)) = self.read_success_body(ctx, response).await? else {
            return Ok(None);
        };
        let Some(content_type) = content_type else {
            debug!("response has a body but no content type; ignoring it");
            return Ok(None);
        };
        let node = self.codecs.get(&content_type)?.parse(&body)?;
        Ok(Some(node))
    }

    #[instrument(
        name = "sitekit_request",
        skip_all,
        fields(
            http.method = Empty,
            http.url = Empty,
            http.status_code = Empty,
            otel.kind = "client",
            otel.status_code = Empty,
        )
    )]
    async fn send_primitive_value(
        &self,
        ctx: &RequestContext,
        info: RequestInformation,
        ty: PrimitiveType,
        errors: &ErrorMappings,
    ) -> Result<Option<PrimitiveValue>, SdkError> {
        let response = self.dispatch(ctx, info).await?;
        let response = self.throw_if_failed(ctx, response, errors).await?;
        let Some((content_type, body)) = self.read_success_body(ctx, response).await? else {
            return Ok(None);
        };
        if ty == PrimitiveType::Bytes {
            return Ok(Some(PrimitiveValue::Bytes(body)));
        }
        let Some(content_type) = content_type else {
            return Ok(None);
        };
        let node = self.codecs.get(&content_type)?.parse(&body)?;
        Ok(Some(node.get_primitive_value(ty)?))
    }

    #[instrument(
        name = "sitekit_request",
        skip_all,
        fields(
            http.method = Empty,
            http.url = Empty,
            http.status_code = Empty,
            otel.kind = "client",
            otel.status_code = Empty,
        )
    )]
    async fn send_no_content(
        &self,
        ctx: &RequestContext,
        info: RequestInformation,
        errors: &ErrorMappings,
    ) -> Result<(), SdkError> {
        let response = self.dispatch(ctx, info).await?;
        self.throw_if_failed(ctx, response, errors).await?;
        Ok(())
    }
}

/// Converts request information into a native request.
fn to_native_request(info: &RequestInformation) -> Result<reqwest::Request, SdkError> {
    let url = info.uri()?;
    let mut request = reqwest::Request::new(info.method().to_reqwest(), url);

    for (name, values) in info.headers().iter() {
        let header = HeaderName::try_from(name).map_err(|e| {
            TransportError::InvalidRequest(format!("invalid header name `{name}`: {e}"))
        })?;
        for value in values {
            let value = HeaderValue::try_from(value.as_str()).map_err(|e| {
                TransportError::InvalidRequest(format!("invalid value for header `{name}`: {e}"))
            })?;
            request.headers_mut().append(header.clone(), value);
        }
    }

    if let Some(content) = info.content() {
        *request.body_mut() = Some(reqwest::Body::from(content.clone()));
    }
    Ok(request)
}

async fn read_body(ctx: &RequestContext, response: reqwest::Response) -> Result<Bytes, TransportError> {
    ctx.run(async { Ok(response.bytes().await?) }).await
}

fn content_type_of(headers: &HeaderMap) -> Option<String> {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(normalize_content_type)
        .filter(|ct| !ct.is_empty())
}

/// Extracts the `claims` parameter of a Bearer `WWW-Authenticate` challenge.
fn claims_challenge(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(WWW_AUTHENTICATE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(parse_claims)
}

fn parse_claims(challenge: &str) -> Option<String> {
    let (scheme, params) = challenge.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    params
        .split(',')
        .filter_map(|param| param.trim().split_once('='))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("claims"))
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
        .filter(|claims| !claims.is_empty())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::adapter::{
        BaseBearerTokenAuthenticationProvider, HeadersInspectionOption, RequestAdapterExt,
        StaticTokenProvider,
    };
    use crate::error::{AuthError, SerializationError, ServiceError};
    use crate::method::HttpMethod;
    use crate::parameters::PathParameters;
    use crate::request_information::RequestConfiguration;
    use tracing_test::traced_test;
    use url::Url;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
    struct TestSite {
        id: String,
        #[serde(rename = "displayName")]
        display_name: String,
    }

    fn odata_error(node: &ParseNode) -> Result<ServiceError, SerializationError> {
        let error = node.child("error").unwrap_or_else(|| node.clone());
        let text = |key: &str| {
            error
                .value()
                .get(key)
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string()
        };
        Ok(ServiceError::new(text("code"), text("message")))
    }

    static ERRORS: ErrorMappings = ErrorMappings::new(&[("XXX", odata_error)]);

    fn adapter_for(server: &MockServer) -> ReqwestAdapter {
        ReqwestAdapter::builder()
            .base_url(server.uri())
            .build()
            .unwrap()
    }

    fn site_request(site_id: &str) -> RequestInformation {
        RequestInformation::new(
            HttpMethod::Get,
            "{+baseurl}/sites/{site%2Did}",
            PathParameters::new().with("site%2Did", site_id),
        )
    }

    // ========================================================================
    // Successful responses
    // ========================================================================

    #[tokio::test]
    async fn test_send_decodes_json_model() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sites/contoso"))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestSite {
                id: "contoso".to_string(),
                display_name: "Contoso".to_string(),
            }))
            .mount(&mock_server)
            .await;

        let adapter = adapter_for(&mock_server);
        let site: Option<TestSite> = adapter
            .send(&RequestContext::new(), site_request("contoso"), &ERRORS)
            .await
            .unwrap();

        assert_eq!(site.unwrap().display_name, "Contoso");
    }

    #[tokio::test]
    async fn test_base_url_overrides_caller_binding() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sites/a"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let adapter = adapter_for(&mock_server);
        let mut info = site_request("a");
        info.path_parameters_mut()
            .insert(BASE_URL_KEY, "https://elsewhere.invalid");

        adapter
            .send_no_content(&RequestContext::new(), info, &ERRORS)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_no_content_yields_none() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sites/empty"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;

        let adapter = adapter_for(&mock_server);
        let site: Option<TestSite> = adapter
            .send(&RequestContext::new(), site_request("empty"), &ERRORS)
            .await
            .unwrap();

        assert!(site.is_none());
    }

    #[tokio::test]
    async fn test_send_primitive_from_text() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sites/$count"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("42", "text/plain"))
            .mount(&mock_server)
            .await;

        let adapter = adapter_for(&mock_server);
        let info = RequestInformation::new(
            HttpMethod::Get,
            "{+baseurl}/sites/$count",
            PathParameters::new(),
        );
        let count: Option<i32> = adapter
            .send_primitive(&RequestContext::new(), info, &ERRORS)
            .await
            .unwrap();

        assert_eq!(count, Some(42));
    }

    #[tokio::test]
    async fn test_send_bytes_reads_raw_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/content"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(vec![0u8, 1, 2, 3], "application/octet-stream"),
            )
            .mount(&mock_server)
            .await;

        let adapter = adapter_for(&mock_server);
        let info = RequestInformation::new(HttpMethod::Get, "{+baseurl}/content", PathParameters::new());
        let bytes: Option<Bytes> = adapter
            .send_primitive(&RequestContext::new(), info, &ERRORS)
            .await
            .unwrap();

        assert_eq!(bytes.unwrap().as_ref(), &[0u8, 1, 2, 3]);
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let mock_server = MockServer::start().await;
        let site = TestSite {
            id: "n".to_string(),
            display_name: "New".to_string(),
        };

        Mock::given(method("POST"))
            .and(path("/sites"))
            .and(header("content-type", "application/json"))
            .and(body_json(&site))
            .respond_with(ResponseTemplate::new(201).set_body_json(&site))
            .mount(&mock_server)
            .await;

        let adapter = adapter_for(&mock_server);
        let mut info = RequestInformation::new(HttpMethod::Post, "{+baseurl}/sites", PathParameters::new());
        info.set_content_from_parsable(&adapter, "application/json", &site)
            .unwrap();

        let created: Option<TestSite> = adapter
            .send(&RequestContext::new(), info, &ERRORS)
            .await
            .unwrap();
        assert_eq!(created, Some(site));
    }

    // ========================================================================
    // Error mapping
    // ========================================================================

    #[tokio::test]
    async fn test_mapped_error_carries_status_and_headers() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sites/missing"))
            .respond_with(
                ResponseTemplate::new(404)
                    .insert_header("request-id", "r-1")
                    .set_body_json(serde_json::json!({
                        "error": {"code": "itemNotFound", "message": "Item not found"}
                    })),
            )
            .mount(&mock_server)
            .await;

        let adapter = adapter_for(&mock_server);
        let err = adapter
            .send::<TestSite>(&RequestContext::new(), site_request("missing"), &ERRORS)
            .await
            .unwrap_err();

        let service = err.as_service_error().expect("mapped service error");
        assert_eq!(service.status, 404);
        assert_eq!(service.code, "itemNotFound");
        assert_eq!(service.message, "Item not found");
        assert_eq!(service.response_headers.get_first("request-id"), Some("r-1"));
    }

    #[tokio::test]
    async fn test_unmapped_status_is_unknown_service_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sites/boom"))
            .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
            .mount(&mock_server)
            .await;

        let adapter = adapter_for(&mock_server);
        let err = adapter
            .send::<TestSite>(&RequestContext::new(), site_request("boom"), &ErrorMappings::empty())
            .await
            .unwrap_err();

        match err {
            SdkError::UnknownService(unknown) => {
                assert_eq!(unknown.status, 500);
                assert_eq!(unknown.body_text(), "oops");
                assert!(unknown.message.contains("500"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_mapped_status_without_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/sites/locked"))
            .respond_with(ResponseTemplate::new(423))
            .mount(&mock_server)
            .await;

        let adapter = adapter_for(&mock_server);
        let info = RequestInformation::new(
            HttpMethod::Delete,
            "{+baseurl}/sites/{site%2Did}",
            PathParameters::new().with("site%2Did", "locked"),
        );
        let err = adapter
            .send_no_content(&RequestContext::new(), info, &ERRORS)
            .await
            .unwrap_err();

        assert!(matches!(err, SdkError::UnknownService(ref u) if u.status == 423));
        assert_eq!(err.status_code(), Some(423));
    }

    #[tokio::test]
    async fn test_missing_path_parameter_fails_before_dispatch() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let adapter = adapter_for(&mock_server);
        let info = RequestInformation::new(
            HttpMethod::Get,
            "{+baseurl}/sites/{site%2Did}",
            PathParameters::new(),
        );
        let err = adapter
            .send::<TestSite>(&RequestContext::new(), info, &ERRORS)
            .await
            .unwrap_err();

        assert!(matches!(err, SdkError::Template(_)));
    }

    // ========================================================================
    // Authentication
    // ========================================================================

    #[tokio::test]
    async fn test_bearer_token_auth() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sites/secure"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let adapter = ReqwestAdapter::builder()
            .base_url(mock_server.uri())
            .authentication_provider(BaseBearerTokenAuthenticationProvider::new(
                StaticTokenProvider::new("test-token"),
            ))
            .build()
            .unwrap();

        adapter
            .send_no_content(&RequestContext::new(), site_request("secure"), &ERRORS)
            .await
            .unwrap();
    }

    #[derive(Debug, Default)]
    struct RecordingAuth {
        seen_claims: Mutex<Vec<Option<String>>>,
    }

    #[async_trait]
    impl AuthenticationProvider for Arc<RecordingAuth> {
        async fn authenticate_request(
            &self,
            request: &mut RequestInformation,
            _url: &Url,
            claims: Option<&str>,
        ) -> Result<(), AuthError> {
            self.seen_claims
                .lock()
                .unwrap()
                .push(claims.map(str::to_string));
            let token = if claims.is_some() { "fresh" } else { "stale" };
            request
                .headers_mut()
                .set("Authorization", format!("Bearer {token}"));
            Ok(())
        }
    }

    #[tokio::test]
    #[traced_test]
    async fn test_claims_challenge_retries_once() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sites/cae"))
            .and(header("authorization", "Bearer stale"))
            .respond_with(ResponseTemplate::new(401).insert_header(
                "www-authenticate",
                r#"Bearer authorization_uri="https://login.example/authorize", error="insufficient_claims", claims="eyJhY2Nlc3MiOnt9fQ==""#,
            ))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/sites/cae"))
            .and(header("authorization", "Bearer fresh"))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestSite {
                id: "cae".to_string(),
                display_name: "Retried".to_string(),
            }))
            .expect(1)
            .mount(&mock_server)
            .await;

        let auth = Arc::new(RecordingAuth::default());
        let adapter = ReqwestAdapter::builder()
            .base_url(mock_server.uri())
            .authentication_provider(Arc::clone(&auth))
            .build()
            .unwrap();

        let site: Option<TestSite> = adapter
            .send(&RequestContext::new(), site_request("cae"), &ERRORS)
            .await
            .unwrap();

        assert_eq!(site.unwrap().display_name, "Retried");
        assert_eq!(
            *auth.seen_claims.lock().unwrap(),
            vec![None, Some("eyJhY2Nlc3MiOnt9fQ==".to_string())]
        );
        assert!(logs_contain("claims challenge"));
    }

    #[tokio::test]
    async fn test_plain_401_is_not_retried() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sites/denied"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": {"code": "InvalidAuthenticationToken", "message": "expired"}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let adapter = adapter_for(&mock_server);
        let err = adapter
            .send::<TestSite>(&RequestContext::new(), site_request("denied"), &ERRORS)
            .await
            .unwrap_err();

        assert_eq!(err.as_service_error().unwrap().code, "InvalidAuthenticationToken");
    }

    #[test]
    fn test_parse_claims() {
        assert_eq!(
            parse_claims(r#"Bearer realm="", claims="abc==""#).as_deref(),
            Some("abc==")
        );
        assert_eq!(parse_claims(r#"Basic realm="x""#), None);
        assert_eq!(parse_claims(r#"Bearer error="invalid_token""#), None);
    }

    // ========================================================================
    // Middleware and options
    // ========================================================================

    #[tokio::test]
    async fn test_headers_inspection_and_user_agent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sites/inspect"))
            .respond_with(ResponseTemplate::new(204).insert_header("x-ms-ags-diagnostic", "ok"))
            .mount(&mock_server)
            .await;

        let adapter = adapter_for(&mock_server);
        let inspection = HeadersInspectionOption::new(true, true);
        let mut config = RequestConfiguration::<crate::parameters::NoQueryParameters>::default();
        config.options.add(inspection.clone());
        config.headers.add("ConsistencyLevel", "eventual");

        let mut info = site_request("inspect");
        info.configure(config);
        adapter
            .send_no_content(&RequestContext::new(), info, &ERRORS)
            .await
            .unwrap();

        let sent = inspection.request_headers();
        assert_eq!(sent.get_first("consistencylevel"), Some("eventual"));
        assert!(sent.get_first("user-agent").unwrap().contains("sitekit/"));
        assert_eq!(
            inspection.response_headers().get_first("x-ms-ags-diagnostic"),
            Some("ok")
        );
    }

    #[tokio::test]
    async fn test_default_header_is_sent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sites/h"))
            .and(header("x-tenant", "contoso"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let adapter = ReqwestAdapter::builder()
            .base_url(mock_server.uri())
            .default_header("X-Tenant", "contoso")
            .unwrap()
            .build()
            .unwrap();

        adapter
            .send_no_content(&RequestContext::new(), site_request("h"), &ERRORS)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_query_parameters_reach_server() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sites"))
            .and(query_param("$top", "10"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let adapter = adapter_for(&mock_server);
        let mut info = RequestInformation::new(
            HttpMethod::Get,
            "{+baseurl}/sites{?%24top}",
            PathParameters::new(),
        );
        info.query_parameters_mut().set("%24top", 10);

        adapter
            .send_no_content(&RequestContext::new(), info, &ERRORS)
            .await
            .unwrap();
    }

    // ========================================================================
    // Cancellation
    // ========================================================================

    #[tokio::test]
    async fn test_cancelled_context_never_dispatches() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&mock_server)
            .await;

        let adapter = adapter_for(&mock_server);
        let ctx = RequestContext::new();
        ctx.cancel();

        let err = adapter
            .send_no_content(&ctx, site_request("x"), &ERRORS)
            .await
            .unwrap_err();
        assert!(err.is_cancelled());
    }

    #[tokio::test]
    async fn test_deadline_exceeded() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sites/slow"))
            .respond_with(ResponseTemplate::new(204).set_delay(Duration::from_secs(2)))
            .mount(&mock_server)
            .await;

        let adapter = adapter_for(&mock_server);
        let ctx = RequestContext::new().with_timeout(Duration::from_millis(50));

        let err = adapter
            .send_no_content(&ctx, site_request("slow"), &ERRORS)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SdkError::Transport(TransportError::DeadlineExceeded)
        ));
    }

    /// Cancels the caller's token once the response head has arrived.
    #[derive(Debug)]
    struct CancelAfterResponse(tokio_util::sync::CancellationToken);

    #[async_trait]
    impl Middleware for CancelAfterResponse {
        async fn handle(
            &self,
            request: reqwest::Request,
            options: &crate::options::RequestOptions,
            next: Next<'_>,
        ) -> Result<reqwest::Response, TransportError> {
            let response = next.run(request, options).await?;
            self.0.cancel();
            Ok(response)
        }
    }

    #[tokio::test]
    async fn test_cancelled_while_reading_unmapped_error_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sites/boom"))
            .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
            .mount(&mock_server)
            .await;

        let token = tokio_util::sync::CancellationToken::new();
        let adapter = ReqwestAdapter::builder()
            .base_url(mock_server.uri())
            .with_middleware(CancelAfterResponse(token.clone()))
            .build()
            .unwrap();

        let err = adapter
            .send::<TestSite>(
                &RequestContext::with_cancellation(token),
                site_request("boom"),
                &ErrorMappings::empty(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::Transport(TransportError::Cancelled)), "{err:?}");
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let adapter = ReqwestAdapter::builder()
            .base_url("https://graph.microsoft.com/beta/")
            .build()
            .unwrap();
        assert_eq!(adapter.base_url(), "https://graph.microsoft.com/beta");
    }

    #[test]
    fn test_default_header_rejects_invalid_name() {
        let result = ReqwestAdapter::builder().default_header("bad header", "v");
        assert!(result.is_err());
    }
}
