// This code was automatically generated by sitekit-gen. Do not edit manually.

//! The service client, root of every request-builder chain.

use std::sync::Arc;

use sitekit::{BASE_URL_KEY, BaseRequestBuilder, PathParameters, RequestAdapter};

use crate::sites::SitesRequestBuilder;

/// The main entry point of the SDK, exposes the configuration and the fluent API.
///
/// Credentials are read by the adapter's authentication provider; bearer tokens
/// are looked up in `SITES_ACCESS_TOKEN`, then `GRAPH_ACCESS_TOKEN`.
#[derive(Debug, Clone)]
pub struct SitesServiceClient {
    base: BaseRequestBuilder,
}

impl SitesServiceClient {
    /// URL template of the client root.
    pub const URL_TEMPLATE: &'static str = "{+baseurl}";

    /// Instantiates a new client rooted at the adapter's base URL.
    pub fn new(adapter: Arc<dyn RequestAdapter>) -> Self {
        let path_parameters = PathParameters::new().with(BASE_URL_KEY, adapter.base_url());
        Self {
            base: BaseRequestBuilder::new(adapter, Self::URL_TEMPLATE, path_parameters),
        }
    }

    /// The adapter every request is dispatched through.
    pub fn adapter(&self) -> &Arc<dyn RequestAdapter> {
        self.base.adapter()
    }

    /// Provides operations to manage the collection of site entities.
    pub fn sites(&self) -> SitesRequestBuilder {
        self.base.navigate()
    }
}
