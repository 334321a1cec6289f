// This code was automatically generated by sitekit-gen. Do not edit manually.

//! Content types of a site and compatible hub content types.

use std::sync::Arc;

use sitekit::{
    BaseRequestBuilder, HttpMethod, PathParameters, QueryMap, QueryParameters, RequestAdapter,
    RequestAdapterExt, RequestBuilder, RequestConfiguration, RequestContext, RequestInformation,
    SdkError,
};

use crate::models::{
    ContentType, ContentTypeCollectionResponse, GetCompatibleHubContentTypesGetResponse,
};
use crate::odataerrors::ERROR_MAPPINGS;

/// Provides operations to manage the contentTypes property of the site entity.
#[derive(Debug, Clone)]
pub struct ContentTypesRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for ContentTypesRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/contentTypes{?%24top,%24skip,%24search,%24filter,%24count,%24orderby,%24select,%24expand}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl ContentTypesRequestBuilder {
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

    /// Provides operations to manage the contentTypes property of the site entity.
    pub fn by_content_type_id(
        &self,
        content_type_id: impl Into<String>,
    ) -> ContentTypeItemRequestBuilder {
        self.base.navigate_with_id("contentType%2Did", content_type_id)
    }

    /// Provides operations to count the resources in the collection.
    pub fn count(&self) -> ContentTypesCountRequestBuilder {
        self.base.navigate()
    }

    /// Provides operations to call the getCompatibleHubContentTypes method.
    pub fn get_compatible_hub_content_types(&self) -> GetCompatibleHubContentTypesRequestBuilder {
        self.base.navigate()
    }

    /// Get the collection of contentType resources in a site.
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<ContentTypesRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<ContentTypeCollectionResponse>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Get the collection of contentType resources in a site.
    pub fn to_get_request_information(
        &self,
        config: Option<ContentTypesRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }

    /// Create new navigation property to contentTypes for sites
    pub async fn post(
        &self,
        ctx: &RequestContext,
        body: &ContentType,
        config: Option<ContentTypesRequestBuilderPostRequestConfiguration>,
    ) -> Result<Option<ContentType>, SdkError> {
        let info = self.to_post_request_information(body, config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Create new navigation property to contentTypes for sites
    pub fn to_post_request_information(
        &self,
        body: &ContentType,
        config: Option<ContentTypesRequestBuilderPostRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        let mut info = self.base.request_information(HttpMethod::Post, config, "application/json");
        info.set_content_from_parsable(self.base.adapter().as_ref(), "application/json", body)?;
        Ok(info)
    }
}

/// Get the collection of contentType resources in a site.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentTypesRequestBuilderGetQueryParameters {
    /// Show only the first n items
    pub top: Option<i32>,
    /// Skip the first n items
    pub skip: Option<i32>,
    /// Search items by search phrases
    pub search: Option<String>,
    /// Filter items by property values
    pub filter: Option<String>,
    /// Include count of items
    pub count: Option<bool>,
    /// Order items by property values
    pub orderby: Vec<String>,
    /// Select properties to be returned
    pub select: Vec<String>,
    /// Expand related entities
    pub expand: Vec<String>,
}

impl QueryParameters for ContentTypesRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24top", &self.top);
        map.insert("%24skip", &self.skip);
        map.insert("%24search", &self.search);
        map.insert("%24filter", &self.filter);
        map.insert("%24count", &self.count);
        map.insert("%24orderby", &self.orderby);
        map.insert("%24select", &self.select);
        map.insert("%24expand", &self.expand);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type ContentTypesRequestBuilderGetRequestConfiguration =
    RequestConfiguration<ContentTypesRequestBuilderGetQueryParameters>;

/// Configuration for the request such as headers and middleware options.
pub type ContentTypesRequestBuilderPostRequestConfiguration = RequestConfiguration;

/// Provides operations to count the resources in the collection.
#[derive(Debug, Clone)]
pub struct ContentTypesCountRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for ContentTypesCountRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/contentTypes/$count{?%24search,%24filter}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl ContentTypesCountRequestBuilder {
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

    /// Get the number of the resource
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<ContentTypesCountRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<i32>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send_primitive(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Get the number of the resource
    pub fn to_get_request_information(
        &self,
        config: Option<ContentTypesCountRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "text/plain;q=0.9"))
    }
}

/// Get the number of the resource
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentTypesCountRequestBuilderGetQueryParameters {
    /// Search items by search phrases
    pub search: Option<String>,
    /// Filter items by property values
    pub filter: Option<String>,
}

impl QueryParameters for ContentTypesCountRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24search", &self.search);
        map.insert("%24filter", &self.filter);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type ContentTypesCountRequestBuilderGetRequestConfiguration =
    RequestConfiguration<ContentTypesCountRequestBuilderGetQueryParameters>;

/// Provides operations to manage the contentTypes property of the site entity.
#[derive(Debug, Clone)]
pub struct ContentTypeItemRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for ContentTypeItemRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/contentTypes/{contentType%2Did}{?%24expand,%24select}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl ContentTypeItemRequestBuilder {
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

    /// Get contentTypes from sites
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<ContentTypeItemRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<ContentType>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Get contentTypes from sites
    pub fn to_get_request_information(
        &self,
        config: Option<ContentTypeItemRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }

    /// Update the navigation property contentTypes in sites
    pub async fn patch(
        &self,
        ctx: &RequestContext,
        body: &ContentType,
        config: Option<ContentTypeItemRequestBuilderPatchRequestConfiguration>,
    ) -> Result<Option<ContentType>, SdkError> {
        let info = self.to_patch_request_information(body, config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Update the navigation property contentTypes in sites
    pub fn to_patch_request_information(
        &self,
        body: &ContentType,
        config: Option<ContentTypeItemRequestBuilderPatchRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        let mut info = self.base.request_information(HttpMethod::Patch, config, "application/json");
        info.set_content_from_parsable(self.base.adapter().as_ref(), "application/json", body)?;
        Ok(info)
    }

    /// Delete navigation property contentTypes for sites
    pub async fn delete(
        &self,
        ctx: &RequestContext,
        config: Option<ContentTypeItemRequestBuilderDeleteRequestConfiguration>,
    ) -> Result<(), SdkError> {
        let info = self.to_delete_request_information(config)?;
        self.base
            .adapter()
            .send_no_content(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Delete navigation property contentTypes for sites
    pub fn to_delete_request_information(
        &self,
        config: Option<ContentTypeItemRequestBuilderDeleteRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Delete, config, "application/json"))
    }
}

/// Get contentTypes from sites
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentTypeItemRequestBuilderGetQueryParameters {
    /// Expand related entities
    pub expand: Vec<String>,
    /// Select properties to be returned
    pub select: Vec<String>,
}

impl QueryParameters for ContentTypeItemRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24expand", &self.expand);
        map.insert("%24select", &self.select);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type ContentTypeItemRequestBuilderGetRequestConfiguration =
    RequestConfiguration<ContentTypeItemRequestBuilderGetQueryParameters>;

/// Configuration for the request such as headers and middleware options.
pub type ContentTypeItemRequestBuilderPatchRequestConfiguration = RequestConfiguration;

/// Configuration for the request such as headers and middleware options.
pub type ContentTypeItemRequestBuilderDeleteRequestConfiguration = RequestConfiguration;

/// Provides operations to call the getCompatibleHubContentTypes method.
#[derive(Debug, Clone)]
pub struct GetCompatibleHubContentTypesRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for GetCompatibleHubContentTypesRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/contentTypes/getCompatibleHubContentTypes(){?%24top,%24skip,%24search,%24filter,%24count,%24select,%24orderby,%24expand}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl GetCompatibleHubContentTypesRequestBuilder {
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

    /// Get a list of compatible content types from the content type hub that can be added to a target site or a list.
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<GetCompatibleHubContentTypesRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<GetCompatibleHubContentTypesGetResponse>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Get a list of compatible content types from the content type hub that can be added to a target site or a list.
    pub fn to_get_request_information(
        &self,
        config: Option<GetCompatibleHubContentTypesRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }
}

/// Get a list of compatible content types from the content type hub that can be added to a target site or a list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetCompatibleHubContentTypesRequestBuilderGetQueryParameters {
    /// Show only the first n items
    pub top: Option<i32>,
    /// Skip the first n items
    pub skip: Option<i32>,
    /// Search items by search phrases
    pub search: Option<String>,
    /// Filter items by property values
    pub filter: Option<String>,
    /// Include count of items
    pub count: Option<bool>,
    /// Select properties to be returned
    pub select: Vec<String>,
    /// Order items by property values
    pub orderby: Vec<String>,
    /// Expand related entities
    pub expand: Vec<String>,
}

impl QueryParameters for GetCompatibleHubContentTypesRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24top", &self.top);
        map.insert("%24skip", &self.skip);
        map.insert("%24search", &self.search);
        map.insert("%24filter", &self.filter);
        map.insert("%24count", &self.count);
        map.insert("%24select", &self.select);
        map.insert("%24orderby", &self.orderby);
        map.insert("%24expand", &self.expand);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type GetCompatibleHubContentTypesRequestBuilderGetRequestConfiguration =
    RequestConfiguration<GetCompatibleHubContentTypesRequestBuilderGetQueryParameters>;
