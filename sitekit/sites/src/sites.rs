// This code was automatically generated by sitekit-gen. Do not edit manually.

//! Sites collection, site items, subsites and the delta, add and remove functions.

use std::sync::Arc;

use sitekit::{
    BaseRequestBuilder, HttpMethod, PathParameters, QueryMap, QueryParameters, RequestAdapter,
    RequestAdapterExt, RequestBuilder, RequestConfiguration, RequestContext, RequestInformation,
    SdkError,
};

use crate::models::{
    AddPostRequestBody, AddPostResponse, DeltaGetResponse, DeltaResponse, RemovePostRequestBody,
    RemovePostResponse, Site, SiteCollectionResponse,
};
use crate::odataerrors::ERROR_MAPPINGS;

/// Provides operations to manage the collection of site entities.
#[derive(Debug, Clone)]
pub struct SitesRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for SitesRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites{?%24top,%24skip,%24search,%24filter,%24count,%24orderby,%24select,%24expand}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl SitesRequestBuilder {
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

    /// Provides operations to call the add method.
    pub fn add(&self) -> AddRequestBuilder {
        self.base.navigate()
    }

    /// Provides operations to manage the collection of site entities.
    pub fn by_site_id(&self, site_id: impl Into<String>) -> SiteItemRequestBuilder {
        self.base.navigate_with_id("site%2Did", site_id)
    }

    /// Provides operations to count the resources in the collection.
    pub fn count(&self) -> SitesCountRequestBuilder {
        self.base.navigate()
    }

    /// Provides operations to call the delta method.
    pub fn delta(&self) -> DeltaRequestBuilder {
        self.base.navigate()
    }

    /// Provides operations to call the remove method.
    pub fn remove(&self) -> RemoveRequestBuilder {
        self.base.navigate()
    }

    /// List all available sites in an organization.
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<SitesRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<SiteCollectionResponse>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// List all available sites in an organization.
    pub fn to_get_request_information(
        &self,
        config: Option<SitesRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }
}

/// List all available sites in an organization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SitesRequestBuilderGetQueryParameters {
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

impl QueryParameters for SitesRequestBuilderGetQueryParameters {
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
pub type SitesRequestBuilderGetRequestConfiguration =
    RequestConfiguration<SitesRequestBuilderGetQueryParameters>;

/// Provides operations to count the resources in the collection.
#[derive(Debug, Clone)]
pub struct SitesCountRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for SitesCountRequestBuilder {
    const URL_TEMPLATE: &'static str = "{+baseurl}/sites/$count{?%24search,%24filter}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl SitesCountRequestBuilder {
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
        config: Option<SitesCountRequestBuilderGetRequestConfiguration>,
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
        config: Option<SitesCountRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "text/plain;q=0.9"))
    }
}

/// Get the number of the resource
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SitesCountRequestBuilderGetQueryParameters {
    /// Search items by search phrases
    pub search: Option<String>,
    /// Filter items by property values
    pub filter: Option<String>,
}

impl QueryParameters for SitesCountRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24search", &self.search);
        map.insert("%24filter", &self.filter);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type SitesCountRequestBuilderGetRequestConfiguration =
    RequestConfiguration<SitesCountRequestBuilderGetQueryParameters>;

/// Provides operations to call the delta method.
#[derive(Debug, Clone)]
pub struct DeltaRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for DeltaRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/delta(){?%24top,%24skip,%24search,%24filter,%24count,%24select,%24orderby}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl DeltaRequestBuilder {
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

    /// Get newly created, updated, or deleted sites without a full read of the entire collection.
    pub async fn get_as_delta_get_response(
        &self,
        ctx: &RequestContext,
        config: Option<DeltaRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<DeltaGetResponse>, SdkError> {
        let info = self.to_get_as_delta_get_response_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Get newly created, updated, or deleted sites without a full read of the entire collection.
    pub fn to_get_as_delta_get_response_request_information(
        &self,
        config: Option<DeltaRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }

    /// Get newly created, updated, or deleted sites without a full read of the entire collection.
    ///
    /// Deprecated: use [`Self::get_as_delta_get_response`] instead.
    #[deprecated(note = "This function is obsolete. Use get_as_delta_get_response instead.")]
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<DeltaRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<DeltaResponse>, SdkError> {
        Ok(self
            .get_as_delta_get_response(ctx, config)
            .await?
            .map(DeltaResponse::from))
    }

    /// Get newly created, updated, or deleted sites without a full read of the entire collection.
    #[deprecated(note = "This function is obsolete. Use get_as_delta_get_response instead.")]
    pub fn to_get_request_information(
        &self,
        config: Option<DeltaRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        self.to_get_as_delta_get_response_request_information(config)
    }
}

/// Get newly created, updated, or deleted sites without a full read of the entire collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeltaRequestBuilderGetQueryParameters {
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
}

impl QueryParameters for DeltaRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24top", &self.top);
        map.insert("%24skip", &self.skip);
        map.insert("%24search", &self.search);
        map.insert("%24filter", &self.filter);
        map.insert("%24count", &self.count);
        map.insert("%24select", &self.select);
        map.insert("%24orderby", &self.orderby);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type DeltaRequestBuilderGetRequestConfiguration =
    RequestConfiguration<DeltaRequestBuilderGetQueryParameters>;

/// Provides operations to call the add method.
#[derive(Debug, Clone)]
pub struct AddRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for AddRequestBuilder {
    const URL_TEMPLATE: &'static str = "{+baseurl}/sites/add";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl AddRequestBuilder {
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

    /// Follow a user's site or multiple sites.
    pub async fn post(
        &self,
        ctx: &RequestContext,
        body: &AddPostRequestBody,
        config: Option<AddRequestBuilderPostRequestConfiguration>,
    ) -> Result<Option<AddPostResponse>, SdkError> {
        let info = self.to_post_request_information(body, config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Follow a user's site or multiple sites.
    pub fn to_post_request_information(
        &self,
        body: &AddPostRequestBody,
        config: Option<AddRequestBuilderPostRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        let mut info = self.base.request_information(HttpMethod::Post, config, "application/json");
        info.set_content_from_parsable(self.base.adapter().as_ref(), "application/json", body)?;
        Ok(info)
    }
}

/// Configuration for the request such as headers and middleware options.
pub type AddRequestBuilderPostRequestConfiguration = RequestConfiguration;

/// Provides operations to call the remove method.
#[derive(Debug, Clone)]
pub struct RemoveRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for RemoveRequestBuilder {
    const URL_TEMPLATE: &'static str = "{+baseurl}/sites/remove";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl RemoveRequestBuilder {
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

    /// Unfollow a user's site or multiple sites.
    pub async fn post(
        &self,
        ctx: &RequestContext,
        body: &RemovePostRequestBody,
        config: Option<RemoveRequestBuilderPostRequestConfiguration>,
    ) -> Result<Option<RemovePostResponse>, SdkError> {
        let info = self.to_post_request_information(body, config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Unfollow a user's site or multiple sites.
    pub fn to_post_request_information(
        &self,
        body: &RemovePostRequestBody,
        config: Option<RemoveRequestBuilderPostRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        let mut info = self.base.request_information(HttpMethod::Post, config, "application/json");
        info.set_content_from_parsable(self.base.adapter().as_ref(), "application/json", body)?;
        Ok(info)
    }
}

/// Configuration for the request such as headers and middleware options.
pub type RemoveRequestBuilderPostRequestConfiguration = RequestConfiguration;

/// Provides operations to manage the collection of site entities.
#[derive(Debug, Clone)]
pub struct SiteItemRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for SiteItemRequestBuilder {
    const URL_TEMPLATE: &'static str = "{+baseurl}/sites/{site%2Did}{?%24expand,%24select}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl SiteItemRequestBuilder {
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

    /// Provides operations to manage the analytics property of the site entity.
    pub fn analytics(&self) -> crate::analytics::AnalyticsRequestBuilder {
        self.base.navigate()
    }

    /// Provides operations to manage the columns property of the site entity.
    pub fn columns(&self) -> crate::columns::ColumnsRequestBuilder {
        self.base.navigate()
    }

    /// Provides operations to manage the contentTypes property of the site entity.
    pub fn content_types(&self) -> crate::content_types::ContentTypesRequestBuilder {
        self.base.navigate()
    }

    /// Provides operations to manage the drive property of the site entity.
    pub fn drive(&self) -> crate::drive::DriveRequestBuilder {
        self.base.navigate()
    }

    /// Provides operations to call the getByPath method.
    pub fn get_by_path(&self, path: Option<&str>) -> GetByPathRequestBuilder {
        self.base.navigate_with(&[("path", path)])
    }

    /// Provides operations to manage the lists property of the site entity.
    pub fn lists(&self) -> crate::lists::ListsRequestBuilder {
        self.base.navigate()
    }

    /// Provides operations to manage the onenote property of the site entity.
    pub fn onenote(&self) -> crate::onenote::OnenoteRequestBuilder {
        self.base.navigate()
    }

    /// Provides operations to manage the pages property of the site entity.
    pub fn pages(&self) -> crate::pages::PagesRequestBuilder {
        self.base.navigate()
    }

    /// Provides operations to manage the permissions property of the site entity.
    pub fn permissions(&self) -> crate::permissions::PermissionsRequestBuilder {
        self.base.navigate()
    }

    /// Provides operations to manage the sites property of the site entity.
    pub fn sites(&self) -> SubsitesRequestBuilder {
        self.base.navigate()
    }

    /// Provides operations to manage the termStore property of the site entity.
    pub fn term_store(&self) -> crate::term_store::TermStoreRequestBuilder {
        self.base.navigate()
    }

    /// Retrieve properties and relationships for a site resource.
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<SiteItemRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<Site>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Retrieve properties and relationships for a site resource.
    pub fn to_get_request_information(
        &self,
        config: Option<SiteItemRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }

    /// Update entity in sites
    pub async fn patch(
        &self,
        ctx: &RequestContext,
        body: &Site,
        config: Option<SiteItemRequestBuilderPatchRequestConfiguration>,
    ) -> Result<Option<Site>, SdkError> {
        let info = self.to_patch_request_information(body, config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Update entity in sites
    pub fn to_patch_request_information(
        &self,
        body: &Site,
        config: Option<SiteItemRequestBuilderPatchRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        let mut info = self.base.request_information(HttpMethod::Patch, config, "application/json");
        info.set_content_from_parsable(self.base.adapter().as_ref(), "application/json", body)?;
        Ok(info)
    }
}

/// Retrieve properties and relationships for a site resource.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteItemRequestBuilderGetQueryParameters {
    /// Expand related entities
    pub expand: Vec<String>,
    /// Select properties to be returned
    pub select: Vec<String>,
}

impl QueryParameters for SiteItemRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24expand", &self.expand);
        map.insert("%24select", &self.select);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type SiteItemRequestBuilderGetRequestConfiguration =
    RequestConfiguration<SiteItemRequestBuilderGetQueryParameters>;

/// Configuration for the request such as headers and middleware options.
pub type SiteItemRequestBuilderPatchRequestConfiguration = RequestConfiguration;

/// Provides operations to call the getByPath method.
#[derive(Debug, Clone)]
pub struct GetByPathRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for GetByPathRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/getByPath(path='{path}'){?%24expand,%24select}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl GetByPathRequestBuilder {
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

    /// Retrieve a site resource by its server-relative path.
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<GetByPathRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<Site>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Retrieve a site resource by its server-relative path.
    pub fn to_get_request_information(
        &self,
        config: Option<GetByPathRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }
}

/// Retrieve a site resource by its server-relative path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetByPathRequestBuilderGetQueryParameters {
    /// Expand related entities
    pub expand: Vec<String>,
    /// Select properties to be returned
    pub select: Vec<String>,
}

impl QueryParameters for GetByPathRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24expand", &self.expand);
        map.insert("%24select", &self.select);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type GetByPathRequestBuilderGetRequestConfiguration =
    RequestConfiguration<GetByPathRequestBuilderGetQueryParameters>;

/// Provides operations to manage the sites property of the site entity.
#[derive(Debug, Clone)]
pub struct SubsitesRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for SubsitesRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/sites{?%24top,%24skip,%24search,%24filter,%24count,%24orderby,%24select,%24expand}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl SubsitesRequestBuilder {
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

    /// Provides operations to manage the sites property of the site entity.
    pub fn by_site_id1(&self, site_id1: impl Into<String>) -> SubsiteItemRequestBuilder {
        self.base.navigate_with_id("site%2Did1", site_id1)
    }

    /// Provides operations to count the resources in the collection.
    pub fn count(&self) -> SubsitesCountRequestBuilder {
        self.base.navigate()
    }

    /// Get a collection of subsites defined for a site.
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<SubsitesRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<SiteCollectionResponse>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Get a collection of subsites defined for a site.
    pub fn to_get_request_information(
        &self,
        config: Option<SubsitesRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }
}

/// Get a collection of subsites defined for a site.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubsitesRequestBuilderGetQueryParameters {
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

impl QueryParameters for SubsitesRequestBuilderGetQueryParameters {
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
pub type SubsitesRequestBuilderGetRequestConfiguration =
    RequestConfiguration<SubsitesRequestBuilderGetQueryParameters>;

/// Provides operations to count the resources in the collection.
#[derive(Debug, Clone)]
pub struct SubsitesCountRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for SubsitesCountRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/sites/$count{?%24search,%24filter}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl SubsitesCountRequestBuilder {
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
        config: Option<SubsitesCountRequestBuilderGetRequestConfiguration>,
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
        config: Option<SubsitesCountRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "text/plain;q=0.9"))
    }
}

/// Get the number of the resource
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubsitesCountRequestBuilderGetQueryParameters {
    /// Search items by search phrases
    pub search: Option<String>,
    /// Filter items by property values
    pub filter: Option<String>,
}

impl QueryParameters for SubsitesCountRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24search", &self.search);
        map.insert("%24filter", &self.filter);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type SubsitesCountRequestBuilderGetRequestConfiguration =
    RequestConfiguration<SubsitesCountRequestBuilderGetQueryParameters>;

/// Provides operations to manage the sites property of the site entity.
#[derive(Debug, Clone)]
pub struct SubsiteItemRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for SubsiteItemRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/sites/{site%2Did1}{?%24expand,%24select}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl SubsiteItemRequestBuilder {
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

    /// The collection of the sub-sites under this site.
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<SubsiteItemRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<Site>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// The collection of the sub-sites under this site.
    pub fn to_get_request_information(
        &self,
        config: Option<SubsiteItemRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }
}

/// The collection of the sub-sites under this site.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubsiteItemRequestBuilderGetQueryParameters {
    /// Expand related entities
    pub expand: Vec<String>,
    /// Select properties to be returned
    pub select: Vec<String>,
}

impl QueryParameters for SubsiteItemRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24expand", &self.expand);
        map.insert("%24select", &self.select);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type SubsiteItemRequestBuilderGetRequestConfiguration =
    RequestConfiguration<SubsiteItemRequestBuilderGetQueryParameters>;
