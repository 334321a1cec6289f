// This code was automatically generated by sitekit-gen. Do not edit manually.

//! The default document library of a site and its root folder content.

use std::sync::Arc;

use bytes::Bytes;
use sitekit::{
    BaseRequestBuilder, HttpMethod, PathParameters, QueryMap, QueryParameters, RequestAdapter,
    RequestAdapterExt, RequestBuilder, RequestConfiguration, RequestContext, RequestInformation,
    SdkError,
};

use crate::models::{Drive, DriveItem};
use crate::odataerrors::ERROR_MAPPINGS;

/// Provides operations to manage the drive property of the site entity.
#[derive(Debug, Clone)]
pub struct DriveRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for DriveRequestBuilder {
    const URL_TEMPLATE: &'static str = "{+baseurl}/sites/{site%2Did}/drive{?%24expand,%24select}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl DriveRequestBuilder {
    /// Instantiates a new builder from path bindings.
    pub fn new(path_parameters: PathParameters, adapter: Arc<dyn RequestAdapter>) -> Self {
        Self::from_path_parameters(path_parameters, adapter)
    }

    /// Instantiates a new builder that sends every request to `raw_url`.
    pub fn new_with_url(raw_url: impl Into<String>, adapter: Arc<dyn RequestAdapter>) -> Self {
        Self::from_raw_url(raw_url, adapter)
    }

    /// Returns a builder for this resource bound to `raw_url`, such as an `@odata.nextLink`.
    pub fn with_url(&self, raw_url: impl Into<String>) -> Self {
        <Self as RequestBuilder>::with_url(self, raw_url)
    }

    /// Provides operations to manage the root property of the drive entity.
    pub fn root(&self) -> DriveRootRequestBuilder {
        self.base.navigate()
    }

    /// The default drive (document library) for this site.
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<DriveRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<Drive>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// The default drive (document library) for this site.
    pub fn to_get_request_information(
        &self,
        config: Option<DriveRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }
}

/// The default drive (document library) for this site.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriveRequestBuilderGetQueryParameters {
    /// Expand related entities
    pub expand: Vec<String>,
    /// Select properties to be returned
    pub select: Vec<String>,
}

impl QueryParameters for DriveRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24expand", &self.expand);
        map.insert("%24select", &self.select);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type DriveRequestBuilderGetRequestConfiguration =
    RequestConfiguration<DriveRequestBuilderGetQueryParameters>;

/// Provides operations to manage the root property of the drive entity.
#[derive(Debug, Clone)]
pub struct DriveRootRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for DriveRootRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/drive/root{?%24expand,%24select}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl DriveRootRequestBuilder {
    /// Instantiates a new builder from path bindings.
    pub fn new(path_parameters: PathParameters, adapter: Arc<dyn RequestAdapter>) -> Self {
        Self::from_path_parameters(path_parameters, adapter)
    }

    /// Instantiates a new builder that sends every request to `raw_url`.
    pub fn new_with_url(raw_url: impl Into<String>, adapter: Arc<dyn RequestAdapter>) -> Self {
        Self::from_raw_url(raw_url, adapter)
    }

    /// Returns a builder for this resource bound to `raw_url`, such as an `@odata.nextLink`.
    pub fn with_url(&self, raw_url: impl Into<String>) -> Self {
        <Self as RequestBuilder>::with_url(self, raw_url)
    }

    /// Provides operations to manage the media for the site entity.
    pub fn content(&self) -> DriveRootContentRequestBuilder {
        self.base.navigate()
    }

    /// The root folder of the drive.
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<DriveRootRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<DriveItem>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// The root folder of the drive.
    pub fn to_get_request_information(
        &self,
        config: Option<DriveRootRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }
}

/// The root folder of the drive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriveRootRequestBuilderGetQueryParameters {
    /// Expand related entities
    pub expand: Vec<String>,
    /// Select properties to be returned
    pub select: Vec<String>,
}

impl QueryParameters for DriveRootRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24expand", &self.expand);
        map.insert("%24select", &self.select);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type DriveRootRequestBuilderGetRequestConfiguration =
    RequestConfiguration<DriveRootRequestBuilderGetQueryParameters>;

/// Provides operations to manage the media for the site entity.
#[derive(Debug, Clone)]
pub struct DriveRootContentRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for DriveRootContentRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/drive/root/content{?%24format}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl DriveRootContentRequestBuilder {
    /// Instantiates a new builder from path bindings.
    pub fn new(path_parameters: PathParameters, adapter: Arc<dyn RequestAdapter>) -> Self {
        Self::from_path_parameters(path_parameters, adapter)
    }

    /// Instantiates a new builder that sends every request to `raw_url`.
    pub fn new_with_url(raw_url: impl Into<String>, adapter: Arc<dyn RequestAdapter>) -> Self {
        Self::from_raw_url(raw_url, adapter)
    }

    /// Returns a builder for this resource bound to `raw_url`, such as an `@odata.nextLink`.
    pub fn with_url(&self, raw_url: impl Into<String>) -> Self {
        <Self as RequestBuilder>::with_url(self, raw_url)
    }

    /// The content stream, if the item represents a file.
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<DriveRootContentRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<Bytes>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send_primitive(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// The content stream, if the item represents a file.
    pub fn to_get_request_information(
        &self,
        config: Option<DriveRootContentRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self
            .base
            .request_information(HttpMethod::Get, config, "application/octet-stream, application/json"))
    }

    /// The content stream, if the item represents a file.
    pub async fn put(
        &self,
        ctx: &RequestContext,
        body: impl Into<Bytes>,
        config: Option<DriveRootContentRequestBuilderPutRequestConfiguration>,
    ) -> Result<Option<DriveItem>, SdkError> {
        let info = self.to_put_request_information(body, config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// The content stream, if the item represents a file.
    pub fn to_put_request_information(
        &self,
        body: impl Into<Bytes>,
        config: Option<DriveRootContentRequestBuilderPutRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        let mut info = self.base.request_information(HttpMethod::Put, config, "application/json");
        info.set_stream_content(body);
        Ok(info)
    }
}

/// The content stream, if the item represents a file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriveRootContentRequestBuilderGetQueryParameters {
    /// Format of the content
    pub format: Option<String>,
}

impl QueryParameters for DriveRootContentRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24format", &self.format);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type DriveRootContentRequestBuilderGetRequestConfiguration =
    RequestConfiguration<DriveRootContentRequestBuilderGetQueryParameters>;

/// Configuration for the request such as headers and middleware options.
pub type DriveRootContentRequestBuilderPutRequestConfiguration = RequestConfiguration;
