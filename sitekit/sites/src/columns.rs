// This code was automatically generated by sitekit-gen. Do not edit manually.

//! Column definitions of a site.

use std::sync::Arc;

use sitekit::{
    BaseRequestBuilder, HttpMethod, PathParameters, QueryMap, QueryParameters, RequestAdapter,
    RequestAdapterExt, RequestBuilder, RequestConfiguration, RequestContext, RequestInformation,
    SdkError,
};

use crate::models::{ColumnDefinition, ColumnDefinitionCollectionResponse};
use crate::odataerrors::ERROR_MAPPINGS;

/// Provides operations to manage the columns property of the site entity.
#[derive(Debug, Clone)]
pub struct ColumnsRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for ColumnsRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/columns{?%24top,%24skip,%24search,%24filter,%24count,%24orderby,%24select,%24expand}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl ColumnsRequestBuilder {
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

    /// Provides operations to manage the columns property of the site entity.
    pub fn by_column_definition_id(
        &self,
        column_definition_id: impl Into<String>,
    ) -> ColumnItemRequestBuilder {
        self.base.navigate_with_id("columnDefinition%2Did", column_definition_id)
    }

    /// Provides operations to count the resources in the collection.
    pub fn count(&self) -> ColumnsCountRequestBuilder {
        self.base.navigate()
    }

    /// Get the collection of columns represented as columnDefinition resources in a site.
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<ColumnsRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<ColumnDefinitionCollectionResponse>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Get the collection of columns represented as columnDefinition resources in a site.
    pub fn to_get_request_information(
        &self,
        config: Option<ColumnsRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }

    /// Create new navigation property to columns for sites
    pub async fn post(
        &self,
        ctx: &RequestContext,
        body: &ColumnDefinition,
        config: Option<ColumnsRequestBuilderPostRequestConfiguration>,
    ) -> Result<Option<ColumnDefinition>, SdkError> {
        let info = self.to_post_request_information(body, config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Create new navigation property to columns for sites
    pub fn to_post_request_information(
        &self,
        body: &ColumnDefinition,
        config: Option<ColumnsRequestBuilderPostRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        let mut info = self.base.request_information(HttpMethod::Post, config, "application/json");
        info.set_content_from_parsable(self.base.adapter().as_ref(), "application/json", body)?;
        Ok(info)
    }
}

/// Get the collection of columns represented as columnDefinition resources in a site.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnsRequestBuilderGetQueryParameters {
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

impl QueryParameters for ColumnsRequestBuilderGetQueryParameters {
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
pub type ColumnsRequestBuilderGetRequestConfiguration =
    RequestConfiguration<ColumnsRequestBuilderGetQueryParameters>;

/// Configuration for the request such as headers and middleware options.
pub type ColumnsRequestBuilderPostRequestConfiguration = RequestConfiguration;

/// Provides operations to count the resources in the collection.
#[derive(Debug, Clone)]
pub struct ColumnsCountRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for ColumnsCountRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/columns/$count{?%24search,%24filter}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl ColumnsCountRequestBuilder {
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
        config: Option<ColumnsCountRequestBuilderGetRequestConfiguration>,
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
        config: Option<ColumnsCountRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "text/plain;q=0.9"))
    }
}

/// Get the number of the resource
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnsCountRequestBuilderGetQueryParameters {
    /// Search items by search phrases
    pub search: Option<String>,
    /// Filter items by property values
    pub filter: Option<String>,
}

impl QueryParameters for ColumnsCountRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24search", &self.search);
        map.insert("%24filter", &self.filter);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type ColumnsCountRequestBuilderGetRequestConfiguration =
    RequestConfiguration<ColumnsCountRequestBuilderGetQueryParameters>;

/// Provides operations to manage the columns property of the site entity.
#[derive(Debug, Clone)]
pub struct ColumnItemRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for ColumnItemRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/columns/{columnDefinition%2Did}{?%24expand,%24select}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl ColumnItemRequestBuilder {
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

    /// Get columns from sites
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<ColumnItemRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<ColumnDefinition>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Get columns from sites
    pub fn to_get_request_information(
        &self,
        config: Option<ColumnItemRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }

    /// Update the navigation property columns in sites
    pub async fn patch(
        &self,
        ctx: &RequestContext,
        body: &ColumnDefinition,
        config: Option<ColumnItemRequestBuilderPatchRequestConfiguration>,
    ) -> Result<Option<ColumnDefinition>, SdkError> {
        let info = self.to_patch_request_information(body, config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Update the navigation property columns in sites
    pub fn to_patch_request_information(
        &self,
        body: &ColumnDefinition,
        config: Option<ColumnItemRequestBuilderPatchRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        let mut info = self.base.request_information(HttpMethod::Patch, config, "application/json");
        info.set_content_from_parsable(self.base.adapter().as_ref(), "application/json", body)?;
        Ok(info)
    }

    /// Delete navigation property columns for sites
    pub async fn delete(
        &self,
        ctx: &RequestContext,
        config: Option<ColumnItemRequestBuilderDeleteRequestConfiguration>,
    ) -> Result<(), SdkError> {
        let info = self.to_delete_request_information(config)?;
        self.base
            .adapter()
            .send_no_content(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Delete navigation property columns for sites
    pub fn to_delete_request_information(
        &self,
        config: Option<ColumnItemRequestBuilderDeleteRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Delete, config, "application/json"))
    }
}

/// Get columns from sites
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnItemRequestBuilderGetQueryParameters {
    /// Expand related entities
    pub expand: Vec<String>,
    /// Select properties to be returned
    pub select: Vec<String>,
}

impl QueryParameters for ColumnItemRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24expand", &self.expand);
        map.insert("%24select", &self.select);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type ColumnItemRequestBuilderGetRequestConfiguration =
    RequestConfiguration<ColumnItemRequestBuilderGetQueryParameters>;

/// Configuration for the request such as headers and middleware options.
pub type ColumnItemRequestBuilderPatchRequestConfiguration = RequestConfiguration;

/// Configuration for the request such as headers and middleware options.
pub type ColumnItemRequestBuilderDeleteRequestConfiguration = RequestConfiguration;
