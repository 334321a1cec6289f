// This code was automatically generated by sitekit-gen. Do not edit manually.

//! OneNote notebooks, section groups, sections and pages of a site.

use std::sync::Arc;

use bytes::Bytes;
use sitekit::{
    BaseRequestBuilder, HttpMethod, PathParameters, QueryMap, QueryParameters, RequestAdapter,
    RequestAdapterExt, RequestBuilder, RequestConfiguration, RequestContext, RequestInformation,
    SdkError,
};

use crate::models::{
    Notebook, NotebookCollectionResponse, Onenote, OnenotePage, OnenotePageCollectionResponse,
    OnenoteSection, OnenoteSectionCollectionResponse, SectionGroup, SectionGroupCollectionResponse,
};
use crate::odataerrors::ERROR_MAPPINGS;

/// Provides operations to manage the onenote property of the site entity.
#[derive(Debug, Clone)]
pub struct OnenoteRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for OnenoteRequestBuilder {
    const URL_TEMPLATE: &'static str = "{+baseurl}/sites/{site%2Did}/onenote{?%24expand,%24select}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl OnenoteRequestBuilder {
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

    /// Provides operations to manage the notebooks property of the onenote entity.
    pub fn notebooks(&self) -> NotebooksRequestBuilder {
        self.base.navigate()
    }

    /// Calls the OneNote service for notebook related operations.
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<OnenoteRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<Onenote>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Calls the OneNote service for notebook related operations.
    pub fn to_get_request_information(
        &self,
        config: Option<OnenoteRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }
}

/// Calls the OneNote service for notebook related operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OnenoteRequestBuilderGetQueryParameters {
    /// Expand related entities
    pub expand: Vec<String>,
    /// Select properties to be returned
    pub select: Vec<String>,
}

impl QueryParameters for OnenoteRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24expand", &self.expand);
        map.insert("%24select", &self.select);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type OnenoteRequestBuilderGetRequestConfiguration =
    RequestConfiguration<OnenoteRequestBuilderGetQueryParameters>;

/// Provides operations to manage the notebooks property of the onenote entity.
#[derive(Debug, Clone)]
pub struct NotebooksRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for NotebooksRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/onenote/notebooks{?%24top,%24skip,%24search,%24filter,%24count,%24orderby,%24select,%24expand}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl NotebooksRequestBuilder {
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

    /// Provides operations to manage the notebooks property of the onenote entity.
    pub fn by_notebook_id(&self, notebook_id: impl Into<String>) -> NotebookItemRequestBuilder {
        self.base.navigate_with_id("notebook%2Did", notebook_id)
    }

    /// Provides operations to count the resources in the collection.
    pub fn count(&self) -> NotebooksCountRequestBuilder {
        self.base.navigate()
    }

    /// Get notebooks from sites
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<NotebooksRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<NotebookCollectionResponse>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Get notebooks from sites
    pub fn to_get_request_information(
        &self,
        config: Option<NotebooksRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }

    /// Create new navigation property to notebooks for sites
    pub async fn post(
        &self,
        ctx: &RequestContext,
        body: &Notebook,
        config: Option<NotebooksRequestBuilderPostRequestConfiguration>,
    ) -> Result<Option<Notebook>, SdkError> {
        let info = self.to_post_request_information(body, config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Create new navigation property to notebooks for sites
    pub fn to_post_request_information(
        &self,
        body: &Notebook,
        config: Option<NotebooksRequestBuilderPostRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        let mut info = self.base.request_information(HttpMethod::Post, config, "application/json");
        info.set_content_from_parsable(self.base.adapter().as_ref(), "application/json", body)?;
        Ok(info)
    }
}

/// Get notebooks from sites
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotebooksRequestBuilderGetQueryParameters {
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

impl QueryParameters for NotebooksRequestBuilderGetQueryParameters {
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
pub type NotebooksRequestBuilderGetRequestConfiguration =
    RequestConfiguration<NotebooksRequestBuilderGetQueryParameters>;

/// Configuration for the request such as headers and middleware options.
pub type NotebooksRequestBuilderPostRequestConfiguration = RequestConfiguration;

/// Provides operations to count the resources in the collection.
#[derive(Debug, Clone)]
pub struct NotebooksCountRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for NotebooksCountRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/onenote/notebooks/$count{?%24search,%24filter}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl NotebooksCountRequestBuilder {
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
        config: Option<NotebooksCountRequestBuilderGetRequestConfiguration>,
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
        config: Option<NotebooksCountRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "text/plain;q=0.9"))
    }
}

/// Get the number of the resource
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotebooksCountRequestBuilderGetQueryParameters {
    /// Search items by search phrases
    pub search: Option<String>,
    /// Filter items by property values
    pub filter: Option<String>,
}

impl QueryParameters for NotebooksCountRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24search", &self.search);
        map.insert("%24filter", &self.filter);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type NotebooksCountRequestBuilderGetRequestConfiguration =
    RequestConfiguration<NotebooksCountRequestBuilderGetQueryParameters>;

/// Provides operations to manage the notebooks property of the onenote entity.
#[derive(Debug, Clone)]
pub struct NotebookItemRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for NotebookItemRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/onenote/notebooks/{notebook%2Did}{?%24expand,%24select}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl NotebookItemRequestBuilder {
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

    /// Provides operations to manage the sectionGroups property of the notebook entity.
    pub fn section_groups(&self) -> NotebookSectionGroupsRequestBuilder {
        self.base.navigate()
    }

    /// Provides operations to manage the sections property of the notebook entity.
    pub fn sections(&self) -> NotebookSectionsRequestBuilder {
        self.base.navigate()
    }

    /// Get notebooks from sites
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<NotebookItemRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<Notebook>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Get notebooks from sites
    pub fn to_get_request_information(
        &self,
        config: Option<NotebookItemRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }

    /// Update the navigation property notebooks in sites
    pub async fn patch(
        &self,
        ctx: &RequestContext,
        body: &Notebook,
        config: Option<NotebookItemRequestBuilderPatchRequestConfiguration>,
    ) -> Result<Option<Notebook>, SdkError> {
        let info = self.to_patch_request_information(body, config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Update the navigation property notebooks in sites
    pub fn to_patch_request_information(
        &self,
        body: &Notebook,
        config: Option<NotebookItemRequestBuilderPatchRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        let mut info = self.base.request_information(HttpMethod::Patch, config, "application/json");
        info.set_content_from_parsable(self.base.adapter().as_ref(), "application/json", body)?;
        Ok(info)
    }

    /// Delete navigation property notebooks for sites
    pub async fn delete(
        &self,
        ctx: &RequestContext,
        config: Option<NotebookItemRequestBuilderDeleteRequestConfiguration>,
    ) -> Result<(), SdkError> {
        let info = self.to_delete_request_information(config)?;
        self.base
            .adapter()
            .send_no_content(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Delete navigation property notebooks for sites
    pub fn to_delete_request_information(
        &self,
        config: Option<NotebookItemRequestBuilderDeleteRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Delete, config, "application/json"))
    }
}

/// Get notebooks from sites
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotebookItemRequestBuilderGetQueryParameters {
    /// Expand related entities
    pub expand: Vec<String>,
    /// Select properties to be returned
    pub select: Vec<String>,
}

impl QueryParameters for NotebookItemRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24expand", &self.expand);
        map.insert("%24select", &self.select);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type NotebookItemRequestBuilderGetRequestConfiguration =
    RequestConfiguration<NotebookItemRequestBuilderGetQueryParameters>;

/// Configuration for the request such as headers and middleware options.
pub type NotebookItemRequestBuilderPatchRequestConfiguration = RequestConfiguration;

/// Configuration for the request such as headers and middleware options.
pub type NotebookItemRequestBuilderDeleteRequestConfiguration = RequestConfiguration;

/// Provides operations to manage the sections property of the notebook entity.
#[derive(Debug, Clone)]
pub struct NotebookSectionsRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for NotebookSectionsRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/onenote/notebooks/{notebook%2Did}/sections{?%24top,%24skip,%24search,%24filter,%24count,%24orderby,%24select,%24expand}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl NotebookSectionsRequestBuilder {
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

    /// Provides operations to manage the sections property of the notebook entity.
    pub fn by_onenote_section_id(
        &self,
        onenote_section_id: impl Into<String>,
    ) -> NotebookSectionItemRequestBuilder {
        self.base.navigate_with_id("onenoteSection%2Did", onenote_section_id)
    }

    /// Provides operations to count the resources in the collection.
    pub fn count(&self) -> NotebookSectionsCountRequestBuilder {
        self.base.navigate()
    }

    /// Get sections from sites
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<NotebookSectionsRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<OnenoteSectionCollectionResponse>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Get sections from sites
    pub fn to_get_request_information(
        &self,
        config: Option<NotebookSectionsRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }

    /// Create new navigation property to sections for sites
    pub async fn post(
        &self,
        ctx: &RequestContext,
        body: &OnenoteSection,
        config: Option<NotebookSectionsRequestBuilderPostRequestConfiguration>,
    ) -> Result<Option<OnenoteSection>, SdkError> {
        let info = self.to_post_request_information(body, config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Create new navigation property to sections for sites
    pub fn to_post_request_information(
        &self,
        body: &OnenoteSection,
        config: Option<NotebookSectionsRequestBuilderPostRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        let mut info = self.base.request_information(HttpMethod::Post, config, "application/json");
        info.set_content_from_parsable(self.base.adapter().as_ref(), "application/json", body)?;
        Ok(info)
    }
}

/// Get sections from sites
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotebookSectionsRequestBuilderGetQueryParameters {
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

impl QueryParameters for NotebookSectionsRequestBuilderGetQueryParameters {
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
pub type NotebookSectionsRequestBuilderGetRequestConfiguration =
    RequestConfiguration<NotebookSectionsRequestBuilderGetQueryParameters>;

/// Configuration for the request such as headers and middleware options.
pub type NotebookSectionsRequestBuilderPostRequestConfiguration = RequestConfiguration;

/// Provides operations to count the resources in the collection.
#[derive(Debug, Clone)]
pub struct NotebookSectionsCountRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for NotebookSectionsCountRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/onenote/notebooks/{notebook%2Did}/sections/$count{?%24search,%24filter}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl NotebookSectionsCountRequestBuilder {
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
        config: Option<NotebookSectionsCountRequestBuilderGetRequestConfiguration>,
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
        config: Option<NotebookSectionsCountRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "text/plain;q=0.9"))
    }
}

/// Get the number of the resource
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotebookSectionsCountRequestBuilderGetQueryParameters {
    /// Search items by search phrases
    pub search: Option<String>,
    /// Filter items by property values
    pub filter: Option<String>,
}

impl QueryParameters for NotebookSectionsCountRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24search", &self.search);
        map.insert("%24filter", &self.filter);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type NotebookSectionsCountRequestBuilderGetRequestConfiguration =
    RequestConfiguration<NotebookSectionsCountRequestBuilderGetQueryParameters>;

/// Provides operations to manage the sections property of the notebook entity.
#[derive(Debug, Clone)]
pub struct NotebookSectionItemRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for NotebookSectionItemRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/onenote/notebooks/{notebook%2Did}/sections/{onenoteSection%2Did}{?%24expand,%24select}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl NotebookSectionItemRequestBuilder {
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

    /// Provides operations to manage the pages property of the onenoteSection entity.
    pub fn pages(&self) -> SectionPagesRequestBuilder {
        self.base.navigate()
    }

    /// Get sections from sites
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<NotebookSectionItemRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<OnenoteSection>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Get sections from sites
    pub fn to_get_request_information(
        &self,
        config: Option<NotebookSectionItemRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }

    /// Update the navigation property sections in sites
    pub async fn patch(
        &self,
        ctx: &RequestContext,
        body: &OnenoteSection,
        config: Option<NotebookSectionItemRequestBuilderPatchRequestConfiguration>,
    ) -> Result<Option<OnenoteSection>, SdkError> {
        let info = self.to_patch_request_information(body, config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Update the navigation property sections in sites
    pub fn to_patch_request_information(
        &self,
        body: &OnenoteSection,
        config: Option<NotebookSectionItemRequestBuilderPatchRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        let mut info = self.base.request_information(HttpMethod::Patch, config, "application/json");
        info.set_content_from_parsable(self.base.adapter().as_ref(), "application/json", body)?;
        Ok(info)
    }

    /// Delete navigation property sections for sites
    pub async fn delete(
        &self,
        ctx: &RequestContext,
        config: Option<NotebookSectionItemRequestBuilderDeleteRequestConfiguration>,
    ) -> Result<(), SdkError> {
        let info = self.to_delete_request_information(config)?;
        self.base
            .adapter()
            .send_no_content(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Delete navigation property sections for sites
    pub fn to_delete_request_information(
        &self,
        config: Option<NotebookSectionItemRequestBuilderDeleteRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Delete, config, "application/json"))
    }
}

/// Get sections from sites
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotebookSectionItemRequestBuilderGetQueryParameters {
    /// Expand related entities
    pub expand: Vec<String>,
    /// Select properties to be returned
    pub select: Vec<String>,
}

impl QueryParameters for NotebookSectionItemRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24expand", &self.expand);
        map.insert("%24select", &self.select);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type NotebookSectionItemRequestBuilderGetRequestConfiguration =
    RequestConfiguration<NotebookSectionItemRequestBuilderGetQueryParameters>;

/// Configuration for the request such as headers and middleware options.
pub type NotebookSectionItemRequestBuilderPatchRequestConfiguration = RequestConfiguration;

/// Configuration for the request such as headers and middleware options.
pub type NotebookSectionItemRequestBuilderDeleteRequestConfiguration = RequestConfiguration;

/// Provides operations to manage the pages property of the onenoteSection entity.
#[derive(Debug, Clone)]
pub struct SectionPagesRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for SectionPagesRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/onenote/notebooks/{notebook%2Did}/sections/{onenoteSection%2Did}/pages{?%24top,%24skip,%24search,%24filter,%24count,%24orderby,%24select,%24expand}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl SectionPagesRequestBuilder {
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

    /// Provides operations to manage the pages property of the onenoteSection entity.
    pub fn by_onenote_page_id(
        &self,
        onenote_page_id: impl Into<String>,
    ) -> SectionPageItemRequestBuilder {
        self.base.navigate_with_id("onenotePage%2Did", onenote_page_id)
    }

    /// Provides operations to count the resources in the collection.
    pub fn count(&self) -> SectionPagesCountRequestBuilder {
        self.base.navigate()
    }

    /// Get pages from sites
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<SectionPagesRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<OnenotePageCollectionResponse>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Get pages from sites
    pub fn to_get_request_information(
        &self,
        config: Option<SectionPagesRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }

    /// Create new navigation property to pages for sites
    pub async fn post(
        &self,
        ctx: &RequestContext,
        body: &OnenotePage,
        config: Option<SectionPagesRequestBuilderPostRequestConfiguration>,
    ) -> Result<Option<OnenotePage>, SdkError> {
        let info = self.to_post_request_information(body, config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Create new navigation property to pages for sites
    pub fn to_post_request_information(
        &self,
        body: &OnenotePage,
        config: Option<SectionPagesRequestBuilderPostRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        let mut info = self.base.request_information(HttpMethod::Post, config, "application/json");
        info.set_content_from_parsable(self.base.adapter().as_ref(), "application/json", body)?;
        Ok(info)
    }
}

/// Get pages from sites
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionPagesRequestBuilderGetQueryParameters {
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

impl QueryParameters for SectionPagesRequestBuilderGetQueryParameters {
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
pub type SectionPagesRequestBuilderGetRequestConfiguration =
    RequestConfiguration<SectionPagesRequestBuilderGetQueryParameters>;

/// Configuration for the request such as headers and middleware options.
pub type SectionPagesRequestBuilderPostRequestConfiguration = RequestConfiguration;

/// Provides operations to count the resources in the collection.
#[derive(Debug, Clone)]
pub struct SectionPagesCountRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for SectionPagesCountRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/onenote/notebooks/{notebook%2Did}/sections/{onenoteSection%2Did}/pages/$count{?%24search,%24filter}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl SectionPagesCountRequestBuilder {
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
        config: Option<SectionPagesCountRequestBuilderGetRequestConfiguration>,
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
        config: Option<SectionPagesCountRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "text/plain;q=0.9"))
    }
}

/// Get the number of the resource
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionPagesCountRequestBuilderGetQueryParameters {
    /// Search items by search phrases
    pub search: Option<String>,
    /// Filter items by property values
    pub filter: Option<String>,
}

impl QueryParameters for SectionPagesCountRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24search", &self.search);
        map.insert("%24filter", &self.filter);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type SectionPagesCountRequestBuilderGetRequestConfiguration =
    RequestConfiguration<SectionPagesCountRequestBuilderGetQueryParameters>;

/// Provides operations to manage the pages property of the onenoteSection entity.
#[derive(Debug, Clone)]
pub struct SectionPageItemRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for SectionPageItemRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/onenote/notebooks/{notebook%2Did}/sections/{onenoteSection%2Did}/pages/{onenotePage%2Did}{?%24expand,%24select}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl SectionPageItemRequestBuilder {
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
    pub fn content(&self) -> SectionPageContentRequestBuilder {
        self.base.navigate()
    }

    /// Get pages from sites
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<SectionPageItemRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<OnenotePage>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Get pages from sites
    pub fn to_get_request_information(
        &self,
        config: Option<SectionPageItemRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }

    /// Update the navigation property pages in sites
    pub async fn patch(
        &self,
        ctx: &RequestContext,
        body: &OnenotePage,
        config: Option<SectionPageItemRequestBuilderPatchRequestConfiguration>,
    ) -> Result<Option<OnenotePage>, SdkError> {
        let info = self.to_patch_request_information(body, config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Update the navigation property pages in sites
    pub fn to_patch_request_information(
        &self,
        body: &OnenotePage,
        config: Option<SectionPageItemRequestBuilderPatchRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        let mut info = self.base.request_information(HttpMethod::Patch, config, "application/json");
        info.set_content_from_parsable(self.base.adapter().as_ref(), "application/json", body)?;
        Ok(info)
    }

    /// Delete navigation property pages for sites
    pub async fn delete(
        &self,
        ctx: &RequestContext,
        config: Option<SectionPageItemRequestBuilderDeleteRequestConfiguration>,
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
        config: Option<SectionPageItemRequestBuilderDeleteRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Delete, config, "application/json"))
    }
}

/// Get pages from sites
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionPageItemRequestBuilderGetQueryParameters {
    /// Expand related entities
    pub expand: Vec<String>,
    /// Select properties to be returned
    pub select: Vec<String>,
}

impl QueryParameters for SectionPageItemRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24expand", &self.expand);
        map.insert("%24select", &self.select);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type SectionPageItemRequestBuilderGetRequestConfiguration =
    RequestConfiguration<SectionPageItemRequestBuilderGetQueryParameters>;

/// Configuration for the request such as headers and middleware options.
pub type SectionPageItemRequestBuilderPatchRequestConfiguration = RequestConfiguration;

/// Configuration for the request such as headers and middleware options.
pub type SectionPageItemRequestBuilderDeleteRequestConfiguration = RequestConfiguration;

/// Provides operations to manage the media for the site entity.
#[derive(Debug, Clone)]
pub struct SectionPageContentRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for SectionPageContentRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/onenote/notebooks/{notebook%2Did}/sections/{onenoteSection%2Did}/pages/{onenotePage%2Did}/content";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl SectionPageContentRequestBuilder {
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

    /// The page's HTML content.
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<SectionPageContentRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<Bytes>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send_primitive(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// The page's HTML content.
    pub fn to_get_request_information(
        &self,
        config: Option<SectionPageContentRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self
            .base
            .request_information(HttpMethod::Get, config, "application/octet-stream, application/json"))
    }

    /// The page's HTML content.
    pub async fn put(
        &self,
        ctx: &RequestContext,
        body: impl Into<Bytes>,
        config: Option<SectionPageContentRequestBuilderPutRequestConfiguration>,
    ) -> Result<(), SdkError> {
        let info = self.to_put_request_information(body, config)?;
        self.base
            .adapter()
            .send_no_content(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// The page's HTML content.
    pub fn to_put_request_information(
        &self,
        body: impl Into<Bytes>,
        config: Option<SectionPageContentRequestBuilderPutRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        let mut info = self.base.request_information(HttpMethod::Put, config, "application/json");
        info.set_stream_content(body);
        Ok(info)
    }
}

/// Configuration for the request such as headers and middleware options.
pub type SectionPageContentRequestBuilderGetRequestConfiguration = RequestConfiguration;

/// Configuration for the request such as headers and middleware options.
pub type SectionPageContentRequestBuilderPutRequestConfiguration = RequestConfiguration;

/// Provides operations to manage the sectionGroups property of the notebook entity.
#[derive(Debug, Clone)]
pub struct NotebookSectionGroupsRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for NotebookSectionGroupsRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/onenote/notebooks/{notebook%2Did}/sectionGroups{?%24top,%24skip,%24search,%24filter,%24count,%24orderby,%24select,%24expand}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl NotebookSectionGroupsRequestBuilder {
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

    /// Provides operations to manage the sectionGroups property of the notebook entity.
    pub fn by_section_group_id(
        &self,
        section_group_id: impl Into<String>,
    ) -> NotebookSectionGroupItemRequestBuilder {
        self.base.navigate_with_id("sectionGroup%2Did", section_group_id)
    }

    /// Provides operations to count the resources in the collection.
    pub fn count(&self) -> NotebookSectionGroupsCountRequestBuilder {
        self.base.navigate()
    }

    /// Get sectionGroups from sites
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<NotebookSectionGroupsRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<SectionGroupCollectionResponse>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Get sectionGroups from sites
    pub fn to_get_request_information(
        &self,
        config: Option<NotebookSectionGroupsRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }

    /// Create new navigation property to sectionGroups for sites
    pub async fn post(
        &self,
        ctx: &RequestContext,
        body: &SectionGroup,
        config: Option<NotebookSectionGroupsRequestBuilderPostRequestConfiguration>,
    ) -> Result<Option<SectionGroup>, SdkError> {
        let info = self.to_post_request_information(body, config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Create new navigation property to sectionGroups for sites
    pub fn to_post_request_information(
        &self,
        body: &SectionGroup,
        config: Option<NotebookSectionGroupsRequestBuilderPostRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        let mut info = self.base.request_information(HttpMethod::Post, config, "application/json");
        info.set_content_from_parsable(self.base.adapter().as_ref(), "application/json", body)?;
        Ok(info)
    }
}

/// Get sectionGroups from sites
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotebookSectionGroupsRequestBuilderGetQueryParameters {
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

impl QueryParameters for NotebookSectionGroupsRequestBuilderGetQueryParameters {
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
pub type NotebookSectionGroupsRequestBuilderGetRequestConfiguration =
    RequestConfiguration<NotebookSectionGroupsRequestBuilderGetQueryParameters>;

/// Configuration for the request such as headers and middleware options.
pub type NotebookSectionGroupsRequestBuilderPostRequestConfiguration = RequestConfiguration;

/// Provides operations to count the resources in the collection.
#[derive(Debug, Clone)]
pub struct NotebookSectionGroupsCountRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for NotebookSectionGroupsCountRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/onenote/notebooks/{notebook%2Did}/sectionGroups/$count{?%24search,%24filter}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl NotebookSectionGroupsCountRequestBuilder {
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
        config: Option<NotebookSectionGroupsCountRequestBuilderGetRequestConfiguration>,
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
        config: Option<NotebookSectionGroupsCountRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "text/plain;q=0.9"))
    }
}

/// Get the number of the resource
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotebookSectionGroupsCountRequestBuilderGetQueryParameters {
    /// Search items by search phrases
    pub search: Option<String>,
    /// Filter items by property values
    pub filter: Option<String>,
}

impl QueryParameters for NotebookSectionGroupsCountRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24search", &self.search);
        map.insert("%24filter", &self.filter);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type NotebookSectionGroupsCountRequestBuilderGetRequestConfiguration =
    RequestConfiguration<NotebookSectionGroupsCountRequestBuilderGetQueryParameters>;

/// Provides operations to manage the sectionGroups property of the notebook entity.
#[derive(Debug, Clone)]
pub struct NotebookSectionGroupItemRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for NotebookSectionGroupItemRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/onenote/notebooks/{notebook%2Did}/sectionGroups/{sectionGroup%2Did}{?%24expand,%24select}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl NotebookSectionGroupItemRequestBuilder {
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

    /// Provides operations to manage the sections property of the sectionGroup entity.
    pub fn sections(&self) -> SectionGroupSectionsRequestBuilder {
        self.base.navigate()
    }

    /// Get sectionGroups from sites
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<NotebookSectionGroupItemRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<SectionGroup>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Get sectionGroups from sites
    pub fn to_get_request_information(
        &self,
        config: Option<NotebookSectionGroupItemRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }

    /// Update the navigation property sectionGroups in sites
    pub async fn patch(
        &self,
        ctx: &RequestContext,
        body: &SectionGroup,
        config: Option<NotebookSectionGroupItemRequestBuilderPatchRequestConfiguration>,
    ) -> Result<Option<SectionGroup>, SdkError> {
        let info = self.to_patch_request_information(body, config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Update the navigation property sectionGroups in sites
    pub fn to_patch_request_information(
        &self,
        body: &SectionGroup,
        config: Option<NotebookSectionGroupItemRequestBuilderPatchRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        let mut info = self.base.request_information(HttpMethod::Patch, config, "application/json");
        info.set_content_from_parsable(self.base.adapter().as_ref(), "application/json", body)?;
        Ok(info)
    }

    /// Delete navigation property sectionGroups for sites
    pub async fn delete(
        &self,
        ctx: &RequestContext,
        config: Option<NotebookSectionGroupItemRequestBuilderDeleteRequestConfiguration>,
    ) -> Result<(), SdkError> {
        let info = self.to_delete_request_information(config)?;
        self.base
            .adapter()
            .send_no_content(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Delete navigation property sectionGroups for sites
    pub fn to_delete_request_information(
        &self,
        config: Option<NotebookSectionGroupItemRequestBuilderDeleteRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Delete, config, "application/json"))
    }
}

/// Get sectionGroups from sites
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotebookSectionGroupItemRequestBuilderGetQueryParameters {
    /// Expand related entities
    pub expand: Vec<String>,
    /// Select properties to be returned
    pub select: Vec<String>,
}

impl QueryParameters for NotebookSectionGroupItemRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24expand", &self.expand);
        map.insert("%24select", &self.select);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type NotebookSectionGroupItemRequestBuilderGetRequestConfiguration =
    RequestConfiguration<NotebookSectionGroupItemRequestBuilderGetQueryParameters>;

/// Configuration for the request such as headers and middleware options.
pub type NotebookSectionGroupItemRequestBuilderPatchRequestConfiguration = RequestConfiguration;

/// Configuration for the request such as headers and middleware options.
pub type NotebookSectionGroupItemRequestBuilderDeleteRequestConfiguration = RequestConfiguration;

/// Provides operations to manage the sections property of the sectionGroup entity.
#[derive(Debug, Clone)]
pub struct SectionGroupSectionsRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for SectionGroupSectionsRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/onenote/notebooks/{notebook%2Did}/sectionGroups/{sectionGroup%2Did}/sections{?%24top,%24skip,%24search,%24filter,%24count,%24orderby,%24select,%24expand}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl SectionGroupSectionsRequestBuilder {
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

    /// Provides operations to manage the sections property of the sectionGroup entity.
    pub fn by_onenote_section_id(
        &self,
        onenote_section_id: impl Into<String>,
    ) -> SectionGroupSectionItemRequestBuilder {
        self.base.navigate_with_id("onenoteSection%2Did", onenote_section_id)
    }

    /// Provides operations to count the resources in the collection.
    pub fn count(&self) -> SectionGroupSectionsCountRequestBuilder {
        self.base.navigate()
    }

    /// Get sections from sites
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<SectionGroupSectionsRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<OnenoteSectionCollectionResponse>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Get sections from sites
    pub fn to_get_request_information(
        &self,
        config: Option<SectionGroupSectionsRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }
}

/// Get sections from sites
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionGroupSectionsRequestBuilderGetQueryParameters {
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

impl QueryParameters for SectionGroupSectionsRequestBuilderGetQueryParameters {
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
pub type SectionGroupSectionsRequestBuilderGetRequestConfiguration =
    RequestConfiguration<SectionGroupSectionsRequestBuilderGetQueryParameters>;

/// Provides operations to count the resources in the collection.
#[derive(Debug, Clone)]
pub struct SectionGroupSectionsCountRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for SectionGroupSectionsCountRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/onenote/notebooks/{notebook%2Did}/sectionGroups/{sectionGroup%2Did}/sections/$count{?%24search,%24filter}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl SectionGroupSectionsCountRequestBuilder {
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
        config: Option<SectionGroupSectionsCountRequestBuilderGetRequestConfiguration>,
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
        config: Option<SectionGroupSectionsCountRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "text/plain;q=0.9"))
    }
}

/// Get the number of the resource
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionGroupSectionsCountRequestBuilderGetQueryParameters {
    /// Search items by search phrases
    pub search: Option<String>,
    /// Filter items by property values
    pub filter: Option<String>,
}

impl QueryParameters for SectionGroupSectionsCountRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24search", &self.search);
        map.insert("%24filter", &self.filter);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type SectionGroupSectionsCountRequestBuilderGetRequestConfiguration =
    RequestConfiguration<SectionGroupSectionsCountRequestBuilderGetQueryParameters>;

/// Provides operations to manage the sections property of the sectionGroup entity.
#[derive(Debug, Clone)]
pub struct SectionGroupSectionItemRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for SectionGroupSectionItemRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/onenote/notebooks/{notebook%2Did}/sectionGroups/{sectionGroup%2Did}/sections/{onenoteSection%2Did}{?%24expand,%24select}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl SectionGroupSectionItemRequestBuilder {
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

    /// The sections in the section group. Read-only. Nullable.
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<SectionGroupSectionItemRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<OnenoteSection>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// The sections in the section group. Read-only. Nullable.
    pub fn to_get_request_information(
        &self,
        config: Option<SectionGroupSectionItemRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }
}

/// The sections in the section group. Read-only. Nullable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionGroupSectionItemRequestBuilderGetQueryParameters {
    /// Expand related entities
    pub expand: Vec<String>,
    /// Select properties to be returned
    pub select: Vec<String>,
}

impl QueryParameters for SectionGroupSectionItemRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24expand", &self.expand);
        map.insert("%24select", &self.select);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type SectionGroupSectionItemRequestBuilderGetRequestConfiguration =
    RequestConfiguration<SectionGroupSectionItemRequestBuilderGetQueryParameters>;
