//! Middleware chain wrapped around the HTTP client.
//!
//! Handlers run in registration order; each one decides whether and how to
//! call the rest of the chain through [`Next::run`].

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::error::TransportError;
use crate::headers::HeaderBag;
use crate::options::{RequestOption, RequestOptions};

/// One link in the middleware chain.
#[async_trait]
pub trait Middleware: Send + Sync + fmt::Debug {
    async fn handle(
        &self,
        request: reqwest::Request,
        options: &RequestOptions,
        next: Next<'_>,
    ) -> Result<reqwest::Response, TransportError>;
}

/// The remainder of the chain, ending at the HTTP client.
#[derive(Clone, Copy)]
pub struct Next<'a> {
    client: &'a reqwest::Client,
    chain: &'a [Arc<dyn Middleware>],
}

impl<'a> Next<'a> {
    pub(crate) fn new(client: &'a reqwest::Client, chain: &'a [Arc<dyn Middleware>]) -> Self {
        Self { client, chain }
    }

    pub async fn run(
        self,
        request: reqwest::Request,
        options: &RequestOptions,
    ) -> Result<reqwest::Response, TransportError> {
        match self.chain.split_first() {
            Some((head, rest)) => {
                head.handle(
                    request,
                    options,
                    Next {
                        client: self.client,
                        chain: rest,
                    },
                )
                .await
            }
            None => Ok(self.client.execute(request).await?),
        }
    }
}

impl fmt::Debug for Next<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Next")
            .field("remaining", &self.chain.len())
            .finish()
    }
}

pub(crate) fn header_bag_from(map: &HeaderMap) -> HeaderBag {
    let mut bag = HeaderBag::new();
    for (name, value) in map {
        if let Ok(value) = value.to_str() {
            bag.add(name.as_str(), value);
        }
    }
    bag
}

// ============================================================================
// User agent
// ============================================================================

/// Product token appended to the `User-Agent` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAgentOption {
    pub product_name: String,
    pub product_version: String,
    pub enabled: bool,
}

impl Default for UserAgentOption {
    fn default() -> Self {
        Self {
            product_name: env!("CARGO_PKG_NAME").to_string(),
            product_version: env!("CARGO_PKG_VERSION").to_string(),
            enabled: true,
        }
    }
}

impl UserAgentOption {
    fn product(&self) -> String {
        format!("{}/{}", self.product_name, self.product_version)
    }
}

impl RequestOption for UserAgentOption {}

/// Appends the product token to `User-Agent` unless it is already there.
#[derive(Debug, Clone, Default)]
pub struct UserAgentHandler {
    defaults: UserAgentOption,
}

impl UserAgentHandler {
    pub fn new(defaults: UserAgentOption) -> Self {
        Self { defaults }
    }
}

#[async_trait]
impl Middleware for UserAgentHandler {
    async fn handle(
        &self,
        mut request: reqwest::Request,
        options: &RequestOptions,
        next: Next<'_>,
    ) -> Result<reqwest::Response, TransportError> {
        let option = options.get::<UserAgentOption>().unwrap_or(&self.defaults);
        if option.enabled {
            let product = option.product();
            let current = request
                .headers()
                .get(USER_AGENT)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default();
            if !current.contains(&product) {
                let combined = if current.is_empty() {
                    product
                } else {
                    format!("{current} {product}")
                };
                let value = HeaderValue::try_from(combined).map_err(|e| {
                    TransportError::InvalidRequest(format!("invalid user agent: {e}"))
                })?;
                request.headers_mut().insert(USER_AGENT, value);
            }
        }
        next.run(request, options).await
    }
}

// ============================================================================
// Header inspection
// ============================================================================

/// Captures the headers actually sent and received for one call.
///
/// Clones share their capture buffers: keep one clone, put another in the
/// request configuration, and read the captured headers after the call.
#[derive(Debug, Clone, Default)]
pub struct HeadersInspectionOption {
    inspect_request: bool,
    inspect_response: bool,
    request_headers: Arc<Mutex<HeaderBag>>,
    response_headers: Arc<Mutex<HeaderBag>>,
}

impl HeadersInspectionOption {
    pub fn new(inspect_request: bool, inspect_response: bool) -> Self {
        Self {
            inspect_request,
            inspect_response,
            ..Self::default()
        }
    }

    pub fn request_headers(&self) -> HeaderBag {
        self.request_headers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn response_headers(&self) -> HeaderBag {
        self.response_headers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn capture(slot: &Mutex<HeaderBag>, map: &HeaderMap) {
        let mut bag = slot.lock().unwrap_or_else(PoisonError::into_inner);
        *bag = header_bag_from(map);
    }
}

impl RequestOption for HeadersInspectionOption {}

/// Fills a [`HeadersInspectionOption`] when one is attached to the request.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadersInspectionHandler;

#[async_trait]
impl Middleware for HeadersInspectionHandler {
    async fn handle(
        &self,
        request: reqwest::Request,
        options: &RequestOptions,
        next: Next<'_>,
    ) -> Result<reqwest::Response, TransportError> {
        let Some(option) = options.get::<HeadersInspectionOption>() else {
            return next.run(request, options).await;
        };
        if option.inspect_request {
            HeadersInspectionOption::capture(&option.request_headers, request.headers());
        }
        let response = next.run(request, options).await?;
        if option.inspect_response {
            HeadersInspectionOption::capture(&option.response_headers, response.headers());
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_option_defaults_to_crate() {
        let option = UserAgentOption::default();
        assert!(option.enabled);
        assert!(option.product().starts_with("sitekit/"));
    }

    #[test]
    fn inspection_clones_share_buffers() {
        let option = HeadersInspectionOption::new(true, true);
        let shared = option.clone();

        let mut map = HeaderMap::new();
        map.insert("x-ms-ags-diagnostic", HeaderValue::from_static("{}"));
        HeadersInspectionOption::capture(&shared.response_headers, &map);

        assert_eq!(
            option.response_headers().get_first("x-ms-ags-diagnostic"),
            Some("{}")
        );
        assert!(option.request_headers().is_empty());
    }

    #[test]
    fn header_bag_from_keeps_repeated_values() {
        let mut map = HeaderMap::new();
        map.append("vary", HeaderValue::from_static("accept"));
        map.append("vary", HeaderValue::from_static("origin"));

        let bag = header_bag_from(&map);
        assert_eq!(bag.get("Vary").map(<[String]>::len), Some(2));
    }
}
