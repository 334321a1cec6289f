//! Authentication hooks run before every dispatch.

use std::collections::BTreeSet;
use std::fmt;

use async_trait::async_trait;
use reqwest::header::HeaderName;
use url::Url;

use crate::error::AuthError;
use crate::request_information::RequestInformation;

const AUTHORIZATION: &str = "Authorization";

/// Environment variables consulted by [`EnvTokenProvider::default`].
pub const DEFAULT_TOKEN_ENV_VARS: &[&str] = &["SITES_ACCESS_TOKEN", "GRAPH_ACCESS_TOKEN"];

/// Attaches credentials to a request before it is sent.
///
/// `url` is the resolved request URL. `claims` is set only when the adapter
/// retries after a claims challenge; providers must then discard any cached
/// credential.
#[async_trait]
pub trait AuthenticationProvider: Send + Sync + fmt::Debug {
    async fn authenticate_request(
        &self,
        request: &mut RequestInformation,
        url: &Url,
        claims: Option<&str>,
    ) -> Result<(), AuthError>;
}

/// Sends requests without credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnonymousAuthenticationProvider;

#[async_trait]
impl AuthenticationProvider for AnonymousAuthenticationProvider {
    async fn authenticate_request(
        &self,
        _request: &mut RequestInformation,
        _url: &Url,
        _claims: Option<&str>,
    ) -> Result<(), AuthError> {
        Ok(())
    }
}

/// Restricts which hosts receive credentials. An empty list allows every host.
#[derive(Debug, Clone, Default)]
pub struct AllowedHostsValidator {
    hosts: BTreeSet<String>,
}

impl AllowedHostsValidator {
    pub fn new<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            hosts: hosts
                .into_iter()
                .map(|h| h.as_ref().trim().to_ascii_lowercase())
                .filter(|h| !h.is_empty())
                .collect(),
        }
    }

    pub fn is_url_host_valid(&self, url: &Url) -> bool {
        if self.hosts.is_empty() {
            return true;
        }
        url.host_str()
            .is_some_and(|host| self.hosts.contains(&host.to_ascii_lowercase()))
    }

    pub fn hosts(&self) -> impl Iterator<Item = &str> {
        self.hosts.iter().map(String::as_str)
    }
}

fn is_localhost(url: &Url) -> bool {
    matches!(
        url.host_str(),
        Some("localhost" | "127.0.0.1" | "[::1]" | "::1")
    )
}

/// Credentials only travel over HTTPS, loopback excepted.
fn ensure_secure(url: &Url) -> Result<(), AuthError> {
    if url.scheme().eq_ignore_ascii_case("https") || is_localhost(url) {
        Ok(())
    } else {
        Err(AuthError::InsecureScheme {
            url: url.to_string(),
        })
    }
}

/// Produces bearer tokens for [`BaseBearerTokenAuthenticationProvider`].
#[async_trait]
pub trait AccessTokenProvider: Send + Sync + fmt::Debug {
    /// Returns a token for `url`, or an empty string to send no credential.
    async fn get_authorization_token(
        &self,
        url: &Url,
        claims: Option<&str>,
    ) -> Result<String, AuthError>;

    fn allowed_hosts(&self) -> &AllowedHostsValidator;
}

/// Adds `Authorization: Bearer <token>` using an [`AccessTokenProvider`].
///
/// An `Authorization` header already present on the request is left alone,
/// except on a claims retry where it is replaced.
#[derive(Debug, Clone)]
pub struct BaseBearerTokenAuthenticationProvider<P> {
    provider: P,
}

impl<P: AccessTokenProvider> BaseBearerTokenAuthenticationProvider<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn access_token_provider(&self) -> &P {
        &self.provider
    }
}

#[async_trait]
impl<P: AccessTokenProvider> AuthenticationProvider for BaseBearerTokenAuthenticationProvider<P> {
    async fn authenticate_request(
        &self,
        request: &mut RequestInformation,
        url: &Url,
        claims: Option<&str>,
    ) -> Result<(), AuthError> {
        if claims.is_some() {
            request.headers_mut().remove(AUTHORIZATION);
        }
        if request.headers().contains(AUTHORIZATION) {
            return Ok(());
        }

        let token = self.provider.get_authorization_token(url, claims).await?;
        if !token.is_empty() {
            request
                .headers_mut()
                .set(AUTHORIZATION, format!("Bearer {token}"));
        }
        Ok(())
    }
}

/// Hands out one fixed token.
#[derive(Clone)]
pub struct StaticTokenProvider {
    token: String,
    allowed_hosts: AllowedHostsValidator,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            allowed_hosts: AllowedHostsValidator::default(),
        }
    }

    pub fn with_allowed_hosts(mut self, allowed_hosts: AllowedHostsValidator) -> Self {
        self.allowed_hosts = allowed_hosts;
        self
    }
}

impl fmt::Debug for StaticTokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticTokenProvider")
            .field("token", &"<redacted>")
            .field("allowed_hosts", &self.allowed_hosts)
            .finish()
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn get_authorization_token(
        &self,
        url: &Url,
        _claims: Option<&str>,
    ) -> Result<String, AuthError> {
        if !self.allowed_hosts.is_url_host_valid(url) {
            return Ok(String::new());
        }
        ensure_secure(url)?;
        Ok(self.token.clone())
    }

    fn allowed_hosts(&self) -> &AllowedHostsValidator {
        &self.allowed_hosts
    }
}

/// Reads a token from the first non-empty environment variable in a list.
///
/// Variables are read on every call so rotated tokens are picked up.
#[derive(Debug, Clone)]
pub struct EnvTokenProvider {
    env_vars: Vec<String>,
    allowed_hosts: AllowedHostsValidator,
}

impl Default for EnvTokenProvider {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_ENV_VARS.iter().copied())
    }
}

impl EnvTokenProvider {
    pub fn new<I, S>(env_vars: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            env_vars: env_vars.into_iter().map(Into::into).collect(),
            allowed_hosts: AllowedHostsValidator::default(),
        }
    }

    pub fn with_allowed_hosts(mut self, allowed_hosts: AllowedHostsValidator) -> Self {
        self.allowed_hosts = allowed_hosts;
        self
    }

    pub fn env_vars(&self) -> &[String] {
        &self.env_vars
    }

    fn resolve(&self) -> Result<String, AuthError> {
        self.env_vars
            .iter()
            .find_map(|name| std::env::var(name).ok().filter(|v| !v.trim().is_empty()))
            .ok_or_else(|| AuthError::MissingCredential {
                env_vars: self.env_vars.clone(),
            })
    }
}

#[async_trait]
impl AccessTokenProvider for EnvTokenProvider {
    async fn get_authorization_token(
        &self,
        url: &Url,
        _claims: Option<&str>,
    ) -> Result<String, AuthError> {
        if !self.allowed_hosts.is_url_host_valid(url) {
            return Ok(String::new());
        }
        ensure_secure(url)?;
        self.resolve()
    }

    fn allowed_hosts(&self) -> &AllowedHostsValidator {
        &self.allowed_hosts
    }
}

/// Where an API key is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKeyLocation {
    /// Sent as the named header.
    Header(String),
    /// Appended to the URL as the named query parameter.
    QueryParameter(String),
}

/// Attaches a static API key as a header or query parameter.
#[derive(Clone)]
pub struct ApiKeyAuthenticationProvider {
    key: String,
    location: ApiKeyLocation,
    allowed_hosts: AllowedHostsValidator,
}

impl ApiKeyAuthenticationProvider {
    /// ## Errors
    ///
    /// Returns [`AuthError::InvalidKeyFormat`] when the key is empty or the
    /// header/parameter name is unusable.
    pub fn new(key: impl Into<String>, location: ApiKeyLocation) -> Result<Self, AuthError> {
        let key = key.into();
        if key.is_empty() || key.contains(['\r', '\n']) {
            return Err(AuthError::InvalidKeyFormat);
        }
        match &location {
            ApiKeyLocation::Header(name) => {
                HeaderName::try_from(name.as_str()).map_err(|_| AuthError::InvalidKeyFormat)?;
            }
            ApiKeyLocation::QueryParameter(name) if name.is_empty() => {
                return Err(AuthError::InvalidKeyFormat);
            }
            ApiKeyLocation::QueryParameter(_) => {}
        }
        Ok(Self {
            key,
            location,
            allowed_hosts: AllowedHostsValidator::default(),
        })
    }

    pub fn with_allowed_hosts(mut self, allowed_hosts: AllowedHostsValidator) -> Self {
        self.allowed_hosts = allowed_hosts;
        self
    }

    pub fn location(&self) -> &ApiKeyLocation {
        &self.location
    }
}

impl fmt::Debug for ApiKeyAuthenticationProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyAuthenticationProvider")
            .field("key", &"<redacted>")
            .field("location", &self.location)
            .finish()
    }
}

#[async_trait]
impl AuthenticationProvider for ApiKeyAuthenticationProvider {
    async fn authenticate_request(
        &self,
        request: &mut RequestInformation,
        url: &Url,
        _claims: Option<&str>,
    ) -> Result<(), AuthError> {
        if !self.allowed_hosts.is_url_host_valid(url) {
            return Ok(());
        }
        ensure_secure(url)?;

        match &self.location {
            ApiKeyLocation::Header(name) => {
                request.headers_mut().set(name, self.key.clone());
            }
            ApiKeyLocation::QueryParameter(name) => {
                if url.query_pairs().any(|(k, _)| k == name.as_str()) {
                    return Ok(());
                }
                let mut with_key = url.clone();
                with_key.query_pairs_mut().append_pair(name, &self.key);
                request.set_raw_url(with_key.to_string());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::HttpMethod;
    use crate::parameters::PathParameters;

    fn request(url: &str) -> (RequestInformation, Url) {
        let info = RequestInformation::from_raw_url(HttpMethod::Get, url);
        let parsed = Url::parse(url).unwrap();
        (info, parsed)
    }

    // ========================================================================
    // Bearer tokens
    // ========================================================================

    #[tokio::test]
    async fn bearer_provider_sets_authorization() {
        let auth = BaseBearerTokenAuthenticationProvider::new(StaticTokenProvider::new("abc"));
        let (mut info, url) = request("https://graph.microsoft.com/v1.0/sites");

        auth.authenticate_request(&mut info, &url, None).await.unwrap();

        assert_eq!(info.headers().get_first("authorization"), Some("Bearer abc"));
    }

    #[tokio::test]
    async fn bearer_provider_keeps_existing_header_unless_claims() {
        let auth = BaseBearerTokenAuthenticationProvider::new(StaticTokenProvider::new("fresh"));
        let (mut info, url) = request("https://graph.microsoft.com/v1.0/sites");
        info.headers_mut().set("Authorization", "Bearer stale");

        auth.authenticate_request(&mut info, &url, None).await.unwrap();
        assert_eq!(info.headers().get_first("authorization"), Some("Bearer stale"));

        auth.authenticate_request(&mut info, &url, Some("eyJjbGFpbXMiOnt9fQ=="))
            .await
            .unwrap();
        assert_eq!(info.headers().get_first("authorization"), Some("Bearer fresh"));
    }

    #[tokio::test]
    async fn bearer_provider_refuses_plain_http() {
        let auth = BaseBearerTokenAuthenticationProvider::new(StaticTokenProvider::new("abc"));
        let (mut info, url) = request("http://contoso.example/sites");

        let err = auth
            .authenticate_request(&mut info, &url, None)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InsecureScheme { .. }));
    }

    #[tokio::test]
    async fn bearer_provider_allows_loopback_http() {
        let auth = BaseBearerTokenAuthenticationProvider::new(StaticTokenProvider::new("abc"));
        let (mut info, url) = request("http://127.0.0.1:8080/sites");

        auth.authenticate_request(&mut info, &url, None).await.unwrap();
        assert!(info.headers().contains("authorization"));
    }

    #[tokio::test]
    async fn disallowed_host_gets_no_token() {
        let provider = StaticTokenProvider::new("abc")
            .with_allowed_hosts(AllowedHostsValidator::new(["graph.microsoft.com"]));
        let auth = BaseBearerTokenAuthenticationProvider::new(provider);
        let (mut info, url) = request("https://evil.example/sites");

        auth.authenticate_request(&mut info, &url, None).await.unwrap();
        assert!(!info.headers().contains("authorization"));
    }

    #[tokio::test]
    async fn env_provider_reports_checked_variables() {
        let provider = EnvTokenProvider::new(["SITEKIT_TEST_TOKEN_THAT_IS_NEVER_SET"]);
        let url = Url::parse("https://graph.microsoft.com/v1.0").unwrap();

        let err = provider.get_authorization_token(&url, None).await.unwrap_err();
        match err {
            AuthError::MissingCredential { env_vars } => {
                assert_eq!(env_vars, vec!["SITEKIT_TEST_TOKEN_THAT_IS_NEVER_SET"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn env_provider_defaults() {
        let provider = EnvTokenProvider::default();
        assert_eq!(provider.env_vars(), ["SITES_ACCESS_TOKEN", "GRAPH_ACCESS_TOKEN"]);
    }

    #[test]
    fn static_provider_debug_redacts_token() {
        let debug = format!("{:?}", StaticTokenProvider::new("super-secret"));
        assert!(!debug.contains("super-secret"));
    }

    // ========================================================================
    // API keys
    // ========================================================================

    #[tokio::test]
    async fn api_key_header() {
        let auth = ApiKeyAuthenticationProvider::new(
            "k-123",
            ApiKeyLocation::Header("X-Api-Key".into()),
        )
        .unwrap();
        let (mut info, url) = request("https://api.example.com/sites");

        auth.authenticate_request(&mut info, &url, None).await.unwrap();
        assert_eq!(info.headers().get_first("x-api-key"), Some("k-123"));
    }

    #[tokio::test]
    async fn api_key_query_parameter_rewrites_url_once() {
        let auth = ApiKeyAuthenticationProvider::new(
            "k 1",
            ApiKeyLocation::QueryParameter("code".into()),
        )
        .unwrap();
        let mut info = RequestInformation::new(
            HttpMethod::Get,
            "{+baseurl}/sites",
            PathParameters::new().with("baseurl", "https://api.example.com"),
        );
        let url = info.uri().unwrap();

        auth.authenticate_request(&mut info, &url, None).await.unwrap();
        let rewritten = info.uri().unwrap();
        assert_eq!(rewritten.as_str(), "https://api.example.com/sites?code=k+1");

        auth.authenticate_request(&mut info, &rewritten, None)
            .await
            .unwrap();
        assert_eq!(info.uri().unwrap(), rewritten);
    }

    #[test]
    fn api_key_rejects_bad_input() {
        assert!(matches!(
            ApiKeyAuthenticationProvider::new("", ApiKeyLocation::Header("X-Key".into())),
            Err(AuthError::InvalidKeyFormat)
        ));
        assert!(matches!(
            ApiKeyAuthenticationProvider::new("k", ApiKeyLocation::Header("bad header".into())),
            Err(AuthError::InvalidKeyFormat)
        ));
    }
}
