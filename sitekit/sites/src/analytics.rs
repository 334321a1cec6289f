// This code was automatically generated by sitekit-gen. Do not edit manually.

//! Item analytics and activity statistics of a site.

use std::sync::Arc;

use sitekit::{
    BaseRequestBuilder, HttpMethod, PathParameters, QueryMap, QueryParameters, RequestAdapter,
    RequestAdapterExt, RequestBuilder, RequestConfiguration, RequestContext, RequestInformation,
    SdkError,
};

use crate::models::{ItemActivityStat, ItemActivityStatCollectionResponse, ItemAnalytics};
use crate::odataerrors::ERROR_MAPPINGS;

/// Provides operations to manage the analytics property of the site entity.
#[derive(Debug, Clone)]
pub struct AnalyticsRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for AnalyticsRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/analytics{?%24expand,%24select}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl AnalyticsRequestBuilder {
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

    /// Provides operations to manage the itemActivityStats property of the itemAnalytics entity.
    pub fn item_activity_stats(&self) -> ItemActivityStatsRequestBuilder {
        self.base.navigate()
    }

    /// Analytics about the view activities that took place on this site.
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<AnalyticsRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<ItemAnalytics>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Analytics about the view activities that took place on this site.
    pub fn to_get_request_information(
        &self,
        config: Option<AnalyticsRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }
}

/// Analytics about the view activities that took place on this site.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyticsRequestBuilderGetQueryParameters {
    /// Expand related entities
    pub expand: Vec<String>,
    /// Select properties to be returned
    pub select: Vec<String>,
}

impl QueryParameters for AnalyticsRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24expand", &self.expand);
        map.insert("%24select", &self.select);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type AnalyticsRequestBuilderGetRequestConfiguration =
    RequestConfiguration<AnalyticsRequestBuilderGetQueryParameters>;

/// Provides operations to manage the itemActivityStats property of the itemAnalytics entity.
#[derive(Debug, Clone)]
pub struct ItemActivityStatsRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for ItemActivityStatsRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/analytics/itemActivityStats{?%24top,%24skip,%24search,%24filter,%24count,%24orderby,%24select,%24expand}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl ItemActivityStatsRequestBuilder {
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

    /// Provides operations to manage the itemActivityStats property of the itemAnalytics entity.
    pub fn by_item_activity_stat_id(
        &self,
        item_activity_stat_id: impl Into<String>,
    ) -> ItemActivityStatItemRequestBuilder {
        self.base.navigate_with_id("itemActivityStat%2Did", item_activity_stat_id)
    }

    /// Provides operations to count the resources in the collection.
    pub fn count(&self) -> ItemActivityStatsCountRequestBuilder {
        self.base.navigate()
    }

    /// Get itemActivityStats from sites
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<ItemActivityStatsRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<ItemActivityStatCollectionResponse>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Get itemActivityStats from sites
    pub fn to_get_request_information(
        &self,
        config: Option<ItemActivityStatsRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }

    /// Create new navigation property to itemActivityStats for sites
    pub async fn post(
        &self,
        ctx: &RequestContext,
        body: &ItemActivityStat,
        config: Option<ItemActivityStatsRequestBuilderPostRequestConfiguration>,
    ) -> Result<Option<ItemActivityStat>, SdkError> {
        let info = self.to_post_request_information(body, config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Create new navigation property to itemActivityStats for sites
    pub fn to_post_request_information(
        &self,
        body: &ItemActivityStat,
        config: Option<ItemActivityStatsRequestBuilderPostRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        let mut info = self.base.request_information(HttpMethod::Post, config, "application/json");
        info.set_content_from_parsable(self.base.adapter().as_ref(), "application/json", body)?;
        Ok(info)
    }
}

/// Get itemActivityStats from sites
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemActivityStatsRequestBuilderGetQueryParameters {
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

impl QueryParameters for ItemActivityStatsRequestBuilderGetQueryParameters {
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
pub type ItemActivityStatsRequestBuilderGetRequestConfiguration =
    RequestConfiguration<ItemActivityStatsRequestBuilderGetQueryParameters>;

/// Configuration for the request such as headers and middleware options.
pub type ItemActivityStatsRequestBuilderPostRequestConfiguration = RequestConfiguration;

/// Provides operations to count the resources in the collection.
#[derive(Debug, Clone)]
pub struct ItemActivityStatsCountRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for ItemActivityStatsCountRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/analytics/itemActivityStats/$count{?%24search,%24filter}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl ItemActivityStatsCountRequestBuilder {
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
        config: Option<ItemActivityStatsCountRequestBuilderGetRequestConfiguration>,
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
        config: Option<ItemActivityStatsCountRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "text/plain;q=0.9"))
    }
}

/// Get the number of the resource
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemActivityStatsCountRequestBuilderGetQueryParameters {
    /// Search items by search phrases
    pub search: Option<String>,
    /// Filter items by property values
    pub filter: Option<String>,
}

impl QueryParameters for ItemActivityStatsCountRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24search", &self.search);
        map.insert("%24filter", &self.filter);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type ItemActivityStatsCountRequestBuilderGetRequestConfiguration =
    RequestConfiguration<ItemActivityStatsCountRequestBuilderGetQueryParameters>;

/// Provides operations to manage the itemActivityStats property of the itemAnalytics entity.
#[derive(Debug, Clone)]
pub struct ItemActivityStatItemRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for ItemActivityStatItemRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/analytics/itemActivityStats/{itemActivityStat%2Did}{?%24expand,%24select}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl ItemActivityStatItemRequestBuilder {
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

    /// Get itemActivityStats from sites
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<ItemActivityStatItemRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<ItemActivityStat>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Get itemActivityStats from sites
    pub fn to_get_request_information(
        &self,
        config: Option<ItemActivityStatItemRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }

    /// Update the navigation property itemActivityStats in sites
    pub async fn patch(
        &self,
        ctx: &RequestContext,
        body: &ItemActivityStat,
        config: Option<ItemActivityStatItemRequestBuilderPatchRequestConfiguration>,
    ) -> Result<Option<ItemActivityStat>, SdkError> {
        let info = self.to_patch_request_information(body, config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Update the navigation property itemActivityStats in sites
    pub fn to_patch_request_information(
        &self,
        body: &ItemActivityStat,
        config: Option<ItemActivityStatItemRequestBuilderPatchRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        let mut info = self.base.request_information(HttpMethod::Patch, config, "application/json");
        info.set_content_from_parsable(self.base.adapter().as_ref(), "application/json", body)?;
        Ok(info)
    }

    /// Delete navigation property itemActivityStats for sites
    pub async fn delete(
        &self,
        ctx: &RequestContext,
        config: Option<ItemActivityStatItemRequestBuilderDeleteRequestConfiguration>,
    ) -> Result<(), SdkError> {
        let info = self.to_delete_request_information(config)?;
        self.base
            .adapter()
            .send_no_content(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Delete navigation property itemActivityStats for sites
    pub fn to_delete_request_information(
        &self,
        config: Option<ItemActivityStatItemRequestBuilderDeleteRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Delete, config, "application/json"))
    }
}

/// Get itemActivityStats from sites
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemActivityStatItemRequestBuilderGetQueryParameters {
    /// Expand related entities
    pub expand: Vec<String>,
    /// Select properties to be returned
    pub select: Vec<String>,
}

impl QueryParameters for ItemActivityStatItemRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24expand", &self.expand);
        map.insert("%24select", &self.select);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type ItemActivityStatItemRequestBuilderGetRequestConfiguration =
    RequestConfiguration<ItemActivityStatItemRequestBuilderGetQueryParameters>;

/// Configuration for the request such as headers and middleware options.
pub type ItemActivityStatItemRequestBuilderPatchRequestConfiguration = RequestConfiguration;

/// Configuration for the request such as headers and middleware options.
pub type ItemActivityStatItemRequestBuilderDeleteRequestConfiguration = RequestConfiguration;
