// This code was automatically generated by sitekit-gen. Do not edit manually.

//! Site pages and their canvas layout, sections and web parts.

use std::sync::Arc;

use sitekit::{
    BaseRequestBuilder, HttpMethod, PathParameters, QueryMap, QueryParameters, RequestAdapter,
    RequestAdapterExt, RequestBuilder, RequestConfiguration, RequestContext, RequestInformation,
    SdkError,
};

use crate::models::{
    AnyBaseSitePage, AnyWebPart, BaseSitePageCollectionResponse, CanvasLayout, HorizontalSection,
    HorizontalSectionCollectionResponse, HorizontalSectionColumn,
    HorizontalSectionColumnCollectionResponse, SitePage, VerticalSection, WebPartCollectionResponse,
};
use crate::odataerrors::ERROR_MAPPINGS;

/// Provides operations to manage the pages property of the site entity.
#[derive(Debug, Clone)]
pub struct PagesRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for PagesRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/pages{?%24top,%24skip,%24search,%24filter,%24count,%24orderby,%24select,%24expand}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl PagesRequestBuilder {
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

    /// Provides operations to manage the pages property of the site entity.
    pub fn by_base_site_page_id(
        &self,
        base_site_page_id: impl Into<String>,
    ) -> BaseSitePageItemRequestBuilder {
        self.base.navigate_with_id("baseSitePage%2Did", base_site_page_id)
    }

    /// Provides operations to count the resources in the collection.
    pub fn count(&self) -> PagesCountRequestBuilder {
        self.base.navigate()
    }

    /// Get the collection of baseSitePage objects from the site pages list in a site.
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<PagesRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<BaseSitePageCollectionResponse>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Get the collection of baseSitePage objects from the site pages list in a site.
    pub fn to_get_request_information(
        &self,
        config: Option<PagesRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }

    /// Create new navigation property to pages for sites
    pub async fn post(
        &self,
        ctx: &RequestContext,
        body: &AnyBaseSitePage,
        config: Option<PagesRequestBuilderPostRequestConfiguration>,
    ) -> Result<Option<AnyBaseSitePage>, SdkError> {
        let info = self.to_post_request_information(body, config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Create new navigation property to pages for sites
    pub fn to_post_request_information(
        &self,
        body: &AnyBaseSitePage,
        config: Option<PagesRequestBuilderPostRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        let mut info = self.base.request_information(HttpMethod::Post, config, "application/json");
        info.set_content_from_parsable(self.base.adapter().as_ref(), "application/json", body)?;
        Ok(info)
    }
}

/// Get the collection of baseSitePage objects from the site pages list in a site.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PagesRequestBuilderGetQueryParameters {
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

impl QueryParameters for PagesRequestBuilderGetQueryParameters {
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
pub type PagesRequestBuilderGetRequestConfiguration =
    RequestConfiguration<PagesRequestBuilderGetQueryParameters>;

/// Configuration for the request such as headers and middleware options.
pub type PagesRequestBuilderPostRequestConfiguration = RequestConfiguration;

/// Provides operations to count the resources in the collection.
#[derive(Debug, Clone)]
pub struct PagesCountRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for PagesCountRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/pages/$count{?%24search,%24filter}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl PagesCountRequestBuilder {
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
        config: Option<PagesCountRequestBuilderGetRequestConfiguration>,
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
        config: Option<PagesCountRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "text/plain;q=0.9"))
    }
}

/// Get the number of the resource
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PagesCountRequestBuilderGetQueryParameters {
    /// Search items by search phrases
    pub search: Option<String>,
    /// Filter items by property values
    pub filter: Option<String>,
}

impl QueryParameters for PagesCountRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24search", &self.search);
        map.insert("%24filter", &self.filter);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type PagesCountRequestBuilderGetRequestConfiguration =
    RequestConfiguration<PagesCountRequestBuilderGetQueryParameters>;

/// Provides operations to manage the pages property of the site entity.
#[derive(Debug, Clone)]
pub struct BaseSitePageItemRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for BaseSitePageItemRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/pages/{baseSitePage%2Did}{?%24expand,%24select}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl BaseSitePageItemRequestBuilder {
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

    /// Casts the previous resource to sitePage.
    pub fn graph_site_page(&self) -> GraphSitePageRequestBuilder {
        self.base.navigate()
    }

    /// Get pages from sites
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<BaseSitePageItemRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<AnyBaseSitePage>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Get pages from sites
    pub fn to_get_request_information(
        &self,
        config: Option<BaseSitePageItemRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }

    /// Update the navigation property pages in sites
    pub async fn patch(
        &self,
        ctx: &RequestContext,
        body: &AnyBaseSitePage,
        config: Option<BaseSitePageItemRequestBuilderPatchRequestConfiguration>,
    ) -> Result<Option<AnyBaseSitePage>, SdkError> {
        let info = self.to_patch_request_information(body, config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Update the navigation property pages in sites
    pub fn to_patch_request_information(
        &self,
        body: &AnyBaseSitePage,
        config: Option<BaseSitePageItemRequestBuilderPatchRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        let mut info = self.base.request_information(HttpMethod::Patch, config, "application/json");
        info.set_content_from_parsable(self.base.adapter().as_ref(), "application/json", body)?;
        Ok(info)
    }

    /// Delete navigation property pages for sites
    pub async fn delete(
        &self,
        ctx: &RequestContext,
        config: Option<BaseSitePageItemRequestBuilderDeleteRequestConfiguration>,
    ) -> Result<(), SdkError> {
        let info = self.to_delete_request_information(config)?;
        self.base
            .adapter()
            .send_no_content(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Delete navigation property pages for sites
    pub fn to_delete_request_information(
        &self,
        config: Option<BaseSitePageItemRequestBuilderDeleteRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Delete, config, "application/json"))
    }
}

/// Get pages from sites
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseSitePageItemRequestBuilderGetQueryParameters {
    /// Expand related entities
    pub expand: Vec<String>,
    /// Select properties to be returned
    pub select: Vec<String>,
}

impl QueryParameters for BaseSitePageItemRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24expand", &self.expand);
        map.insert("%24select", &self.select);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type BaseSitePageItemRequestBuilderGetRequestConfiguration =
    RequestConfiguration<BaseSitePageItemRequestBuilderGetQueryParameters>;

/// Configuration for the request such as headers and middleware options.
pub type BaseSitePageItemRequestBuilderPatchRequestConfiguration = RequestConfiguration;

/// Configuration for the request such as headers and middleware options.
pub type BaseSitePageItemRequestBuilderDeleteRequestConfiguration = RequestConfiguration;

/// Casts the previous resource to sitePage.
#[derive(Debug, Clone)]
pub struct GraphSitePageRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for GraphSitePageRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/pages/{baseSitePage%2Did}/graph.sitePage{?%24expand,%24select}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl GraphSitePageRequestBuilder {
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

    /// Provides operations to manage the canvasLayout property of the sitePage entity.
    pub fn canvas_layout(&self) -> CanvasLayoutRequestBuilder {
        self.base.navigate()
    }

    /// Get the item of type microsoft.graph.baseSitePage as microsoft.graph.sitePage
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<GraphSitePageRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<SitePage>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Get the item of type microsoft.graph.baseSitePage as microsoft.graph.sitePage
    pub fn to_get_request_information(
        &self,
        config: Option<GraphSitePageRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }
}

/// Get the item of type microsoft.graph.baseSitePage as microsoft.graph.sitePage
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphSitePageRequestBuilderGetQueryParameters {
    /// Expand related entities
    pub expand: Vec<String>,
    /// Select properties to be returned
    pub select: Vec<String>,
}

impl QueryParameters for GraphSitePageRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24expand", &self.expand);
        map.insert("%24select", &self.select);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type GraphSitePageRequestBuilderGetRequestConfiguration =
    RequestConfiguration<GraphSitePageRequestBuilderGetQueryParameters>;

/// Provides operations to manage the canvasLayout property of the sitePage entity.
#[derive(Debug, Clone)]
pub struct CanvasLayoutRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for CanvasLayoutRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/pages/{baseSitePage%2Did}/graph.sitePage/canvasLayout{?%24expand,%24select}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl CanvasLayoutRequestBuilder {
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

    /// Provides operations to manage the horizontalSections property of the canvasLayout entity.
    pub fn horizontal_sections(&self) -> HorizontalSectionsRequestBuilder {
        self.base.navigate()
    }

    /// Provides operations to manage the verticalSection property of the canvasLayout entity.
    pub fn vertical_section(&self) -> VerticalSectionRequestBuilder {
        self.base.navigate()
    }

    /// Get canvasLayout from sites
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<CanvasLayoutRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<CanvasLayout>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Get canvasLayout from sites
    pub fn to_get_request_information(
        &self,
        config: Option<CanvasLayoutRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }

    /// Update the navigation property canvasLayout in sites
    pub async fn patch(
        &self,
        ctx: &RequestContext,
        body: &CanvasLayout,
        config: Option<CanvasLayoutRequestBuilderPatchRequestConfiguration>,
    ) -> Result<Option<CanvasLayout>, SdkError> {
        let info = self.to_patch_request_information(body, config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Update the navigation property canvasLayout in sites
    pub fn to_patch_request_information(
        &self,
        body: &CanvasLayout,
        config: Option<CanvasLayoutRequestBuilderPatchRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        let mut info = self.base.request_information(HttpMethod::Patch, config, "application/json");
        info.set_content_from_parsable(self.base.adapter().as_ref(), "application/json", body)?;
        Ok(info)
    }

    /// Delete navigation property canvasLayout for sites
    pub async fn delete(
        &self,
        ctx: &RequestContext,
        config: Option<CanvasLayoutRequestBuilderDeleteRequestConfiguration>,
    ) -> Result<(), SdkError> {
        let info = self.to_delete_request_information(config)?;
        self.base
            .adapter()
            .send_no_content(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Delete navigation property canvasLayout for sites
    pub fn to_delete_request_information(
        &self,
        config: Option<CanvasLayoutRequestBuilderDeleteRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Delete, config, "application/json"))
    }
}

/// Get canvasLayout from sites
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanvasLayoutRequestBuilderGetQueryParameters {
    /// Expand related entities
    pub expand: Vec<String>,
    /// Select properties to be returned
    pub select: Vec<String>,
}

impl QueryParameters for CanvasLayoutRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24expand", &self.expand);
        map.insert("%24select", &self.select);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type CanvasLayoutRequestBuilderGetRequestConfiguration =
    RequestConfiguration<CanvasLayoutRequestBuilderGetQueryParameters>;

/// Configuration for the request such as headers and middleware options.
pub type CanvasLayoutRequestBuilderPatchRequestConfiguration = RequestConfiguration;

/// Configuration for the request such as headers and middleware options.
pub type CanvasLayoutRequestBuilderDeleteRequestConfiguration = RequestConfiguration;

/// Provides operations to manage the horizontalSections property of the canvasLayout entity.
#[derive(Debug, Clone)]
pub struct HorizontalSectionsRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for HorizontalSectionsRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/pages/{baseSitePage%2Did}/graph.sitePage/canvasLayout/horizontalSections{?%24top,%24skip,%24search,%24filter,%24count,%24orderby,%24select,%24expand}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl HorizontalSectionsRequestBuilder {
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

    /// Provides operations to manage the horizontalSections property of the canvasLayout entity.
    pub fn by_horizontal_section_id(
        &self,
        horizontal_section_id: impl Into<String>,
    ) -> HorizontalSectionItemRequestBuilder {
        self.base.navigate_with_id("horizontalSection%2Did", horizontal_section_id)
    }

    /// Provides operations to count the resources in the collection.
    pub fn count(&self) -> HorizontalSectionsCountRequestBuilder {
        self.base.navigate()
    }

    /// Get horizontalSections from sites
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<HorizontalSectionsRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<HorizontalSectionCollectionResponse>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Get horizontalSections from sites
    pub fn to_get_request_information(
        &self,
        config: Option<HorizontalSectionsRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }

    /// Create new navigation property to horizontalSections for sites
    pub async fn post(
        &self,
        ctx: &RequestContext,
        body: &HorizontalSection,
        config: Option<HorizontalSectionsRequestBuilderPostRequestConfiguration>,
    ) -> Result<Option<HorizontalSection>, SdkError> {
        let info = self.to_post_request_information(body, config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Create new navigation property to horizontalSections for sites
    pub fn to_post_request_information(
        &self,
        body: &HorizontalSection,
        config: Option<HorizontalSectionsRequestBuilderPostRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        let mut info = self.base.request_information(HttpMethod::Post, config, "application/json");
        info.set_content_from_parsable(self.base.adapter().as_ref(), "application/json", body)?;
        Ok(info)
    }
}

/// Get horizontalSections from sites
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HorizontalSectionsRequestBuilderGetQueryParameters {
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

impl QueryParameters for HorizontalSectionsRequestBuilderGetQueryParameters {
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
pub type HorizontalSectionsRequestBuilderGetRequestConfiguration =
    RequestConfiguration<HorizontalSectionsRequestBuilderGetQueryParameters>;

/// Configuration for the request such as headers and middleware options.
pub type HorizontalSectionsRequestBuilderPostRequestConfiguration = RequestConfiguration;

/// Provides operations to count the resources in the collection.
#[derive(Debug, Clone)]
pub struct HorizontalSectionsCountRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for HorizontalSectionsCountRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/pages/{baseSitePage%2Did}/graph.sitePage/canvasLayout/horizontalSections/$count{?%24search,%24filter}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl HorizontalSectionsCountRequestBuilder {
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
        config: Option<HorizontalSectionsCountRequestBuilderGetRequestConfiguration>,
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
        config: Option<HorizontalSectionsCountRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "text/plain;q=0.9"))
    }
}

/// Get the number of the resource
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HorizontalSectionsCountRequestBuilderGetQueryParameters {
    /// Search items by search phrases
    pub search: Option<String>,
    /// Filter items by property values
    pub filter: Option<String>,
}

impl QueryParameters for HorizontalSectionsCountRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24search", &self.search);
        map.insert("%24filter", &self.filter);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type HorizontalSectionsCountRequestBuilderGetRequestConfiguration =
    RequestConfiguration<HorizontalSectionsCountRequestBuilderGetQueryParameters>;

/// Provides operations to manage the horizontalSections property of the canvasLayout entity.
#[derive(Debug, Clone)]
pub struct HorizontalSectionItemRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for HorizontalSectionItemRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/pages/{baseSitePage%2Did}/graph.sitePage/canvasLayout/horizontalSections/{horizontalSection%2Did}{?%24expand,%24select}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl HorizontalSectionItemRequestBuilder {
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

    /// Provides operations to manage the columns property of the horizontalSection entity.
    pub fn columns(&self) -> HorizontalSectionColumnsRequestBuilder {
        self.base.navigate()
    }

    /// Get horizontalSections from sites
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<HorizontalSectionItemRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<HorizontalSection>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Get horizontalSections from sites
    pub fn to_get_request_information(
        &self,
        config: Option<HorizontalSectionItemRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }

    /// Update the navigation property horizontalSections in sites
    pub async fn patch(
        &self,
        ctx: &RequestContext,
        body: &HorizontalSection,
        config: Option<HorizontalSectionItemRequestBuilderPatchRequestConfiguration>,
    ) -> Result<Option<HorizontalSection>, SdkError> {
        let info = self.to_patch_request_information(body, config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Update the navigation property horizontalSections in sites
    pub fn to_patch_request_information(
        &self,
        body: &HorizontalSection,
        config: Option<HorizontalSectionItemRequestBuilderPatchRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        let mut info = self.base.request_information(HttpMethod::Patch, config, "application/json");
        info.set_content_from_parsable(self.base.adapter().as_ref(), "application/json", body)?;
        Ok(info)
    }

    /// Delete navigation property horizontalSections for sites
    pub async fn delete(
        &self,
        ctx: &RequestContext,
        config: Option<HorizontalSectionItemRequestBuilderDeleteRequestConfiguration>,
    ) -> Result<(), SdkError> {
        let info = self.to_delete_request_information(config)?;
        self.base
            .adapter()
            .send_no_content(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Delete navigation property horizontalSections for sites
    pub fn to_delete_request_information(
        &self,
        config: Option<HorizontalSectionItemRequestBuilderDeleteRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Delete, config, "application/json"))
    }
}

/// Get horizontalSections from sites
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HorizontalSectionItemRequestBuilderGetQueryParameters {
    /// Expand related entities
    pub expand: Vec<String>,
    /// Select properties to be returned
    pub select: Vec<String>,
}

impl QueryParameters for HorizontalSectionItemRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24expand", &self.expand);
        map.insert("%24select", &self.select);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type HorizontalSectionItemRequestBuilderGetRequestConfiguration =
    RequestConfiguration<HorizontalSectionItemRequestBuilderGetQueryParameters>;

/// Configuration for the request such as headers and middleware options.
pub type HorizontalSectionItemRequestBuilderPatchRequestConfiguration = RequestConfiguration;

/// Configuration for the request such as headers and middleware options.
pub type HorizontalSectionItemRequestBuilderDeleteRequestConfiguration = RequestConfiguration;

/// Provides operations to manage the columns property of the horizontalSection entity.
#[derive(Debug, Clone)]
pub struct HorizontalSectionColumnsRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for HorizontalSectionColumnsRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/pages/{baseSitePage%2Did}/graph.sitePage/canvasLayout/horizontalSections/{horizontalSection%2Did}/columns{?%24top,%24skip,%24search,%24filter,%24count,%24orderby,%24select,%24expand}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl HorizontalSectionColumnsRequestBuilder {
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

    /// Provides operations to manage the columns property of the horizontalSection entity.
    pub fn by_horizontal_section_column_id(
        &self,
        horizontal_section_column_id: impl Into<String>,
    ) -> HorizontalSectionColumnItemRequestBuilder {
        self.base.navigate_with_id("horizontalSectionColumn%2Did", horizontal_section_column_id)
    }

    /// Provides operations to count the resources in the collection.
    pub fn count(&self) -> HorizontalSectionColumnsCountRequestBuilder {
        self.base.navigate()
    }

    /// Get columns from sites
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<HorizontalSectionColumnsRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<HorizontalSectionColumnCollectionResponse>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Get columns from sites
    pub fn to_get_request_information(
        &self,
        config: Option<HorizontalSectionColumnsRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }

    /// Create new navigation property to columns for sites
    pub async fn post(
        &self,
        ctx: &RequestContext,
        body: &HorizontalSectionColumn,
        config: Option<HorizontalSectionColumnsRequestBuilderPostRequestConfiguration>,
    ) -> Result<Option<HorizontalSectionColumn>, SdkError> {
        let info = self.to_post_request_information(body, config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Create new navigation property to columns for sites
    pub fn to_post_request_information(
        &self,
        body: &HorizontalSectionColumn,
        config: Option<HorizontalSectionColumnsRequestBuilderPostRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        let mut info = self.base.request_information(HttpMethod::Post, config, "application/json");
        info.set_content_from_parsable(self.base.adapter().as_ref(), "application/json", body)?;
        Ok(info)
    }
}

/// Get columns from sites
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HorizontalSectionColumnsRequestBuilderGetQueryParameters {
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

impl QueryParameters for HorizontalSectionColumnsRequestBuilderGetQueryParameters {
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
pub type HorizontalSectionColumnsRequestBuilderGetRequestConfiguration =
    RequestConfiguration<HorizontalSectionColumnsRequestBuilderGetQueryParameters>;

/// Configuration for the request such as headers and middleware options.
pub type HorizontalSectionColumnsRequestBuilderPostRequestConfiguration = RequestConfiguration;

/// Provides operations to count the resources in the collection.
#[derive(Debug, Clone)]
pub struct HorizontalSectionColumnsCountRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for HorizontalSectionColumnsCountRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/pages/{baseSitePage%2Did}/graph.sitePage/canvasLayout/horizontalSections/{horizontalSection%2Did}/columns/$count{?%24search,%24filter}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl HorizontalSectionColumnsCountRequestBuilder {
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
        config: Option<HorizontalSectionColumnsCountRequestBuilderGetRequestConfiguration>,
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
        config: Option<HorizontalSectionColumnsCountRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "text/plain;q=0.9"))
    }
}

/// Get the number of the resource
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HorizontalSectionColumnsCountRequestBuilderGetQueryParameters {
    /// Search items by search phrases
    pub search: Option<String>,
    /// Filter items by property values
    pub filter: Option<String>,
}

impl QueryParameters for HorizontalSectionColumnsCountRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24search", &self.search);
        map.insert("%24filter", &self.filter);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type HorizontalSectionColumnsCountRequestBuilderGetRequestConfiguration =
    RequestConfiguration<HorizontalSectionColumnsCountRequestBuilderGetQueryParameters>;

/// Provides operations to manage the columns property of the horizontalSection entity.
#[derive(Debug, Clone)]
pub struct HorizontalSectionColumnItemRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for HorizontalSectionColumnItemRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/pages/{baseSitePage%2Did}/graph.sitePage/canvasLayout/horizontalSections/{horizontalSection%2Did}/columns/{horizontalSectionColumn%2Did}{?%24expand,%24select}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl HorizontalSectionColumnItemRequestBuilder {
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
        config: Option<HorizontalSectionColumnItemRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<HorizontalSectionColumn>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Get columns from sites
    pub fn to_get_request_information(
        &self,
        config: Option<HorizontalSectionColumnItemRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }

    /// Update the navigation property columns in sites
    pub async fn patch(
        &self,
        ctx: &RequestContext,
        body: &HorizontalSectionColumn,
        config: Option<HorizontalSectionColumnItemRequestBuilderPatchRequestConfiguration>,
    ) -> Result<Option<HorizontalSectionColumn>, SdkError> {
        let info = self.to_patch_request_information(body, config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Update the navigation property columns in sites
    pub fn to_patch_request_information(
        &self,
        body: &HorizontalSectionColumn,
        config: Option<HorizontalSectionColumnItemRequestBuilderPatchRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        let mut info = self.base.request_information(HttpMethod::Patch, config, "application/json");
        info.set_content_from_parsable(self.base.adapter().as_ref(), "application/json", body)?;
        Ok(info)
    }

    /// Delete navigation property columns for sites
    pub async fn delete(
        &self,
        ctx: &RequestContext,
        config: Option<HorizontalSectionColumnItemRequestBuilderDeleteRequestConfiguration>,
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
        config: Option<HorizontalSectionColumnItemRequestBuilderDeleteRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Delete, config, "application/json"))
    }
}

/// Get columns from sites
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HorizontalSectionColumnItemRequestBuilderGetQueryParameters {
    /// Expand related entities
    pub expand: Vec<String>,
    /// Select properties to be returned
    pub select: Vec<String>,
}

impl QueryParameters for HorizontalSectionColumnItemRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24expand", &self.expand);
        map.insert("%24select", &self.select);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type HorizontalSectionColumnItemRequestBuilderGetRequestConfiguration =
    RequestConfiguration<HorizontalSectionColumnItemRequestBuilderGetQueryParameters>;

/// Configuration for the request such as headers and middleware options.
pub type HorizontalSectionColumnItemRequestBuilderPatchRequestConfiguration = RequestConfiguration;

/// Configuration for the request such as headers and middleware options.
pub type HorizontalSectionColumnItemRequestBuilderDeleteRequestConfiguration = RequestConfiguration;

/// Provides operations to manage the verticalSection property of the canvasLayout entity.
#[derive(Debug, Clone)]
pub struct VerticalSectionRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for VerticalSectionRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/pages/{baseSitePage%2Did}/graph.sitePage/canvasLayout/verticalSection{?%24expand,%24select}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl VerticalSectionRequestBuilder {
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

    /// Provides operations to manage the webparts property of the verticalSection entity.
    pub fn webparts(&self) -> VerticalSectionWebpartsRequestBuilder {
        self.base.navigate()
    }

    /// Get verticalSection from sites
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<VerticalSectionRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<VerticalSection>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Get verticalSection from sites
    pub fn to_get_request_information(
        &self,
        config: Option<VerticalSectionRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }

    /// Update the navigation property verticalSection in sites
    pub async fn patch(
        &self,
        ctx: &RequestContext,
        body: &VerticalSection,
        config: Option<VerticalSectionRequestBuilderPatchRequestConfiguration>,
    ) -> Result<Option<VerticalSection>, SdkError> {
        let info = self.to_patch_request_information(body, config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Update the navigation property verticalSection in sites
    pub fn to_patch_request_information(
        &self,
        body: &VerticalSection,
        config: Option<VerticalSectionRequestBuilderPatchRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        let mut info = self.base.request_information(HttpMethod::Patch, config, "application/json");
        info.set_content_from_parsable(self.base.adapter().as_ref(), "application/json", body)?;
        Ok(info)
    }

    /// Delete navigation property verticalSection for sites
    pub async fn delete(
        &self,
        ctx: &RequestContext,
        config: Option<VerticalSectionRequestBuilderDeleteRequestConfiguration>,
    ) -> Result<(), SdkError> {
        let info = self.to_delete_request_information(config)?;
        self.base
            .adapter()
            .send_no_content(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Delete navigation property verticalSection for sites
    pub fn to_delete_request_information(
        &self,
        config: Option<VerticalSectionRequestBuilderDeleteRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Delete, config, "application/json"))
    }
}

/// Get verticalSection from sites
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VerticalSectionRequestBuilderGetQueryParameters {
    /// Expand related entities
    pub expand: Vec<String>,
    /// Select properties to be returned
    pub select: Vec<String>,
}

impl QueryParameters for VerticalSectionRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24expand", &self.expand);
        map.insert("%24select", &self.select);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type VerticalSectionRequestBuilderGetRequestConfiguration =
    RequestConfiguration<VerticalSectionRequestBuilderGetQueryParameters>;

/// Configuration for the request such as headers and middleware options.
pub type VerticalSectionRequestBuilderPatchRequestConfiguration = RequestConfiguration;

/// Configuration for the request such as headers and middleware options.
pub type VerticalSectionRequestBuilderDeleteRequestConfiguration = RequestConfiguration;

/// Provides operations to manage the webparts property of the verticalSection entity.
#[derive(Debug, Clone)]
pub struct VerticalSectionWebpartsRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for VerticalSectionWebpartsRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/pages/{baseSitePage%2Did}/graph.sitePage/canvasLayout/verticalSection/webparts{?%24top,%24skip,%24search,%24filter,%24count,%24orderby,%24select,%24expand}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl VerticalSectionWebpartsRequestBuilder {
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

    /// Provides operations to manage the webparts property of the verticalSection entity.
    pub fn by_web_part_id(&self, web_part_id: impl Into<String>) -> WebPartItemRequestBuilder {
        self.base.navigate_with_id("webPart%2Did", web_part_id)
    }

    /// Provides operations to count the resources in the collection.
    pub fn count(&self) -> VerticalSectionWebpartsCountRequestBuilder {
        self.base.navigate()
    }

    /// Get webparts from sites
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<VerticalSectionWebpartsRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<WebPartCollectionResponse>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Get webparts from sites
    pub fn to_get_request_information(
        &self,
        config: Option<VerticalSectionWebpartsRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }

    /// Create new navigation property to webparts for sites
    pub async fn post(
        &self,
        ctx: &RequestContext,
        body: &AnyWebPart,
        config: Option<VerticalSectionWebpartsRequestBuilderPostRequestConfiguration>,
    ) -> Result<Option<AnyWebPart>, SdkError> {
        let info = self.to_post_request_information(body, config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Create new navigation property to webparts for sites
    pub fn to_post_request_information(
        &self,
        body: &AnyWebPart,
        config: Option<VerticalSectionWebpartsRequestBuilderPostRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        let mut info = self.base.request_information(HttpMethod::Post, config, "application/json");
        info.set_content_from_parsable(self.base.adapter().as_ref(), "application/json", body)?;
        Ok(info)
    }
}

/// Get webparts from sites
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VerticalSectionWebpartsRequestBuilderGetQueryParameters {
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

impl QueryParameters for VerticalSectionWebpartsRequestBuilderGetQueryParameters {
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
pub type VerticalSectionWebpartsRequestBuilderGetRequestConfiguration =
    RequestConfiguration<VerticalSectionWebpartsRequestBuilderGetQueryParameters>;

/// Configuration for the request such as headers and middleware options.
pub type VerticalSectionWebpartsRequestBuilderPostRequestConfiguration = RequestConfiguration;

/// Provides operations to count the resources in the collection.
#[derive(Debug, Clone)]
pub struct VerticalSectionWebpartsCountRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for VerticalSectionWebpartsCountRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/pages/{baseSitePage%2Did}/graph.sitePage/canvasLayout/verticalSection/webparts/$count{?%24search,%24filter}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl VerticalSectionWebpartsCountRequestBuilder {
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
        config: Option<VerticalSectionWebpartsCountRequestBuilderGetRequestConfiguration>,
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
        config: Option<VerticalSectionWebpartsCountRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "text/plain;q=0.9"))
    }
}

/// Get the number of the resource
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VerticalSectionWebpartsCountRequestBuilderGetQueryParameters {
    /// Search items by search phrases
    pub search: Option<String>,
    /// Filter items by property values
    pub filter: Option<String>,
}

impl QueryParameters for VerticalSectionWebpartsCountRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24search", &self.search);
        map.insert("%24filter", &self.filter);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type VerticalSectionWebpartsCountRequestBuilderGetRequestConfiguration =
    RequestConfiguration<VerticalSectionWebpartsCountRequestBuilderGetQueryParameters>;

/// Provides operations to manage the webparts property of the verticalSection entity.
#[derive(Debug, Clone)]
pub struct WebPartItemRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for WebPartItemRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/pages/{baseSitePage%2Did}/graph.sitePage/canvasLayout/verticalSection/webparts/{webPart%2Did}{?%24expand,%24select}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl WebPartItemRequestBuilder {
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

    /// Get webparts from sites
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<WebPartItemRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<AnyWebPart>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Get webparts from sites
    pub fn to_get_request_information(
        &self,
        config: Option<WebPartItemRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }

    /// Update the navigation property webparts in sites
    pub async fn patch(
        &self,
        ctx: &RequestContext,
        body: &AnyWebPart,
        config: Option<WebPartItemRequestBuilderPatchRequestConfiguration>,
    ) -> Result<Option<AnyWebPart>, SdkError> {
        let info = self.to_patch_request_information(body, config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Update the navigation property webparts in sites
    pub fn to_patch_request_information(
        &self,
        body: &AnyWebPart,
        config: Option<WebPartItemRequestBuilderPatchRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        let mut info = self.base.request_information(HttpMethod::Patch, config, "application/json");
        info.set_content_from_parsable(self.base.adapter().as_ref(), "application/json", body)?;
        Ok(info)
    }

    /// Delete navigation property webparts for sites
    pub async fn delete(
        &self,
        ctx: &RequestContext,
        config: Option<WebPartItemRequestBuilderDeleteRequestConfiguration>,
    ) -> Result<(), SdkError> {
        let info = self.to_delete_request_information(config)?;
        self.base
            .adapter()
            .send_no_content(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Delete navigation property webparts for sites
    pub fn to_delete_request_information(
        &self,
        config: Option<WebPartItemRequestBuilderDeleteRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Delete, config, "application/json"))
    }
}

/// Get webparts from sites
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WebPartItemRequestBuilderGetQueryParameters {
    /// Expand related entities
    pub expand: Vec<String>,
    /// Select properties to be returned
    pub select: Vec<String>,
}

impl QueryParameters for WebPartItemRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24expand", &self.expand);
        map.insert("%24select", &self.select);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type WebPartItemRequestBuilderGetRequestConfiguration =
    RequestConfiguration<WebPartItemRequestBuilderGetQueryParameters>;

/// Configuration for the request such as headers and middleware options.
pub type WebPartItemRequestBuilderPatchRequestConfiguration = RequestConfiguration;

/// Configuration for the request such as headers and middleware options.
pub type WebPartItemRequestBuilderDeleteRequestConfiguration = RequestConfiguration;
