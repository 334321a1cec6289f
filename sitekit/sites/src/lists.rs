// This code was automatically generated by sitekit-gen. Do not edit manually.

//! Lists, list items, item fields and item activity.

use std::sync::Arc;

use bytes::Bytes;
use sitekit::{
    BaseRequestBuilder, HttpMethod, PathParameters, QueryMap, QueryParameters, RequestAdapter,
    RequestAdapterExt, RequestBuilder, RequestConfiguration, RequestContext, RequestInformation,
    SdkError,
};

use crate::models::{
    DriveItem, FieldValueSet, GetActivitiesByIntervalGetResponse, List, ListCollectionResponse,
    ListItem, ListItemCollectionResponse, User,
};
use crate::odataerrors::ERROR_MAPPINGS;

/// Provides operations to manage the lists property of the site entity.
#[derive(Debug, Clone)]
pub struct ListsRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for ListsRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/lists{?%24top,%24skip,%24search,%24filter,%24count,%24orderby,%24select,%24expand}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl ListsRequestBuilder {
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

    /// Provides operations to manage the lists property of the site entity.
    pub fn by_list_id(&self, list_id: impl Into<String>) -> ListsItemRequestBuilder {
        self.base.navigate_with_id("list%2Did", list_id)
    }

    /// Provides operations to count the resources in the collection.
    pub fn count(&self) -> ListsCountRequestBuilder {
        self.base.navigate()
    }

    /// Get the collection of lists for a site.
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<ListsRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<ListCollectionResponse>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Get the collection of lists for a site.
    pub fn to_get_request_information(
        &self,
        config: Option<ListsRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }

    /// Create new navigation property to lists for sites
    pub async fn post(
        &self,
        ctx: &RequestContext,
        body: &List,
        config: Option<ListsRequestBuilderPostRequestConfiguration>,
    ) -> Result<Option<List>, SdkError> {
        let info = self.to_post_request_information(body, config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Create new navigation property to lists for sites
    pub fn to_post_request_information(
        &self,
        body: &List,
        config: Option<ListsRequestBuilderPostRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        let mut info = self.base.request_information(HttpMethod::Post, config, "application/json");
        info.set_content_from_parsable(self.base.adapter().as_ref(), "application/json", body)?;
        Ok(info)
    }
}

/// Get the collection of lists for a site.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListsRequestBuilderGetQueryParameters {
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

impl QueryParameters for ListsRequestBuilderGetQueryParameters {
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
pub type ListsRequestBuilderGetRequestConfiguration =
    RequestConfiguration<ListsRequestBuilderGetQueryParameters>;

/// Configuration for the request such as headers and middleware options.
pub type ListsRequestBuilderPostRequestConfiguration = RequestConfiguration;

/// Provides operations to count the resources in the collection.
#[derive(Debug, Clone)]
pub struct ListsCountRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for ListsCountRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/lists/$count{?%24search,%24filter}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl ListsCountRequestBuilder {
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
        config: Option<ListsCountRequestBuilderGetRequestConfiguration>,
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
        config: Option<ListsCountRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "text/plain;q=0.9"))
    }
}

/// Get the number of the resource
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListsCountRequestBuilderGetQueryParameters {
    /// Search items by search phrases
    pub search: Option<String>,
    /// Filter items by property values
    pub filter: Option<String>,
}

impl QueryParameters for ListsCountRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24search", &self.search);
        map.insert("%24filter", &self.filter);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type ListsCountRequestBuilderGetRequestConfiguration =
    RequestConfiguration<ListsCountRequestBuilderGetQueryParameters>;

/// Provides operations to manage the lists property of the site entity.
#[derive(Debug, Clone)]
pub struct ListsItemRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for ListsItemRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/lists/{list%2Did}{?%24expand,%24select}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl ListsItemRequestBuilder {
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

    /// Provides operations to manage the items property of the list entity.
    pub fn items(&self) -> ListItemsRequestBuilder {
        self.base.navigate()
    }

    /// Get lists from sites
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<ListsItemRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<List>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Get lists from sites
    pub fn to_get_request_information(
        &self,
        config: Option<ListsItemRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }

    /// Update the navigation property lists in sites
    pub async fn patch(
        &self,
        ctx: &RequestContext,
        body: &List,
        config: Option<ListsItemRequestBuilderPatchRequestConfiguration>,
    ) -> Result<Option<List>, SdkError> {
        let info = self.to_patch_request_information(body, config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Update the navigation property lists in sites
    pub fn to_patch_request_information(
        &self,
        body: &List,
        config: Option<ListsItemRequestBuilderPatchRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        let mut info = self.base.request_information(HttpMethod::Patch, config, "application/json");
        info.set_content_from_parsable(self.base.adapter().as_ref(), "application/json", body)?;
        Ok(info)
    }

    /// Delete navigation property lists for sites
    pub async fn delete(
        &self,
        ctx: &RequestContext,
        config: Option<ListsItemRequestBuilderDeleteRequestConfiguration>,
    ) -> Result<(), SdkError> {
        let info = self.to_delete_request_information(config)?;
        self.base
            .adapter()
            .send_no_content(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Delete navigation property lists for sites
    pub fn to_delete_request_information(
        &self,
        config: Option<ListsItemRequestBuilderDeleteRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Delete, config, "application/json"))
    }
}

/// Get lists from sites
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListsItemRequestBuilderGetQueryParameters {
    /// Expand related entities
    pub expand: Vec<String>,
    /// Select properties to be returned
    pub select: Vec<String>,
}

impl QueryParameters for ListsItemRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24expand", &self.expand);
        map.insert("%24select", &self.select);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type ListsItemRequestBuilderGetRequestConfiguration =
    RequestConfiguration<ListsItemRequestBuilderGetQueryParameters>;

/// Configuration for the request such as headers and middleware options.
pub type ListsItemRequestBuilderPatchRequestConfiguration = RequestConfiguration;

/// Configuration for the request such as headers and middleware options.
pub type ListsItemRequestBuilderDeleteRequestConfiguration = RequestConfiguration;

/// Provides operations to manage the items property of the list entity.
#[derive(Debug, Clone)]
pub struct ListItemsRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for ListItemsRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/lists/{list%2Did}/items{?%24top,%24skip,%24search,%24filter,%24count,%24orderby,%24select,%24expand}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl ListItemsRequestBuilder {
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

    /// Provides operations to manage the items property of the list entity.
    pub fn by_list_item_id(&self, list_item_id: impl Into<String>) -> ListItemsItemRequestBuilder {
        self.base.navigate_with_id("listItem%2Did", list_item_id)
    }

    /// Provides operations to count the resources in the collection.
    pub fn count(&self) -> ListItemsCountRequestBuilder {
        self.base.navigate()
    }

    /// Get items from sites
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<ListItemsRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<ListItemCollectionResponse>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Get items from sites
    pub fn to_get_request_information(
        &self,
        config: Option<ListItemsRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }

    /// Create new navigation property to items for sites
    pub async fn post(
        &self,
        ctx: &RequestContext,
        body: &ListItem,
        config: Option<ListItemsRequestBuilderPostRequestConfiguration>,
    ) -> Result<Option<ListItem>, SdkError> {
        let info = self.to_post_request_information(body, config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Create new navigation property to items for sites
    pub fn to_post_request_information(
        &self,
        body: &ListItem,
        config: Option<ListItemsRequestBuilderPostRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        let mut info = self.base.request_information(HttpMethod::Post, config, "application/json");
        info.set_content_from_parsable(self.base.adapter().as_ref(), "application/json", body)?;
        Ok(info)
    }
}

/// Get items from sites
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListItemsRequestBuilderGetQueryParameters {
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

impl QueryParameters for ListItemsRequestBuilderGetQueryParameters {
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
pub type ListItemsRequestBuilderGetRequestConfiguration =
    RequestConfiguration<ListItemsRequestBuilderGetQueryParameters>;

/// Configuration for the request such as headers and middleware options.
pub type ListItemsRequestBuilderPostRequestConfiguration = RequestConfiguration;

/// Provides operations to count the resources in the collection.
#[derive(Debug, Clone)]
pub struct ListItemsCountRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for ListItemsCountRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/lists/{list%2Did}/items/$count{?%24search,%24filter}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl ListItemsCountRequestBuilder {
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
        config: Option<ListItemsCountRequestBuilderGetRequestConfiguration>,
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
        config: Option<ListItemsCountRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "text/plain;q=0.9"))
    }
}

/// Get the number of the resource
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListItemsCountRequestBuilderGetQueryParameters {
    /// Search items by search phrases
    pub search: Option<String>,
    /// Filter items by property values
    pub filter: Option<String>,
}

impl QueryParameters for ListItemsCountRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24search", &self.search);
        map.insert("%24filter", &self.filter);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type ListItemsCountRequestBuilderGetRequestConfiguration =
    RequestConfiguration<ListItemsCountRequestBuilderGetQueryParameters>;

/// Provides operations to manage the items property of the list entity.
#[derive(Debug, Clone)]
pub struct ListItemsItemRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for ListItemsItemRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/lists/{list%2Did}/items/{listItem%2Did}{?%24expand,%24select}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl ListItemsItemRequestBuilder {
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

    /// Provides operations to manage the createdByUser property of the baseItem entity.
    pub fn created_by_user(&self) -> ListItemCreatedByUserRequestBuilder {
        self.base.navigate()
    }

    /// Provides operations to manage the driveItem property of the listItem entity.
    pub fn drive_item(&self) -> ListItemDriveItemRequestBuilder {
        self.base.navigate()
    }

    /// Provides operations to manage the fields property of the listItem entity.
    pub fn fields(&self) -> ListItemFieldsRequestBuilder {
        self.base.navigate()
    }

    /// Provides operations to call the getActivitiesByInterval method.
    pub fn get_activities_by_interval(
        &self,
        start_date_time: Option<&str>,
        end_date_time: Option<&str>,
        interval: Option<&str>,
    ) -> GetActivitiesByIntervalRequestBuilder {
        self.base.navigate_with(&[
            ("startDateTime", start_date_time),
            ("endDateTime", end_date_time),
            ("interval", interval),
        ])
    }

    /// Get items from sites
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<ListItemsItemRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<ListItem>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Get items from sites
    pub fn to_get_request_information(
        &self,
        config: Option<ListItemsItemRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }

    /// Update the navigation property items in sites
    pub async fn patch(
        &self,
        ctx: &RequestContext,
        body: &ListItem,
        config: Option<ListItemsItemRequestBuilderPatchRequestConfiguration>,
    ) -> Result<Option<ListItem>, SdkError> {
        let info = self.to_patch_request_information(body, config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Update the navigation property items in sites
    pub fn to_patch_request_information(
        &self,
        body: &ListItem,
        config: Option<ListItemsItemRequestBuilderPatchRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        let mut info = self.base.request_information(HttpMethod::Patch, config, "application/json");
        info.set_content_from_parsable(self.base.adapter().as_ref(), "application/json", body)?;
        Ok(info)
    }

    /// Delete navigation property items for sites
    pub async fn delete(
        &self,
        ctx: &RequestContext,
        config: Option<ListItemsItemRequestBuilderDeleteRequestConfiguration>,
    ) -> Result<(), SdkError> {
        let info = self.to_delete_request_information(config)?;
        self.base
            .adapter()
            .send_no_content(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Delete navigation property items for sites
    pub fn to_delete_request_information(
        &self,
        config: Option<ListItemsItemRequestBuilderDeleteRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Delete, config, "application/json"))
    }
}

/// Get items from sites
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListItemsItemRequestBuilderGetQueryParameters {
    /// Expand related entities
    pub expand: Vec<String>,
    /// Select properties to be returned
    pub select: Vec<String>,
}

impl QueryParameters for ListItemsItemRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24expand", &self.expand);
        map.insert("%24select", &self.select);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type ListItemsItemRequestBuilderGetRequestConfiguration =
    RequestConfiguration<ListItemsItemRequestBuilderGetQueryParameters>;

/// Configuration for the request such as headers and middleware options.
pub type ListItemsItemRequestBuilderPatchRequestConfiguration = RequestConfiguration;

/// Configuration for the request such as headers and middleware options.
pub type ListItemsItemRequestBuilderDeleteRequestConfiguration = RequestConfiguration;

/// Provides operations to manage the fields property of the listItem entity.
#[derive(Debug, Clone)]
pub struct ListItemFieldsRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for ListItemFieldsRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/lists/{list%2Did}/items/{listItem%2Did}/fields{?%24expand,%24select}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl ListItemFieldsRequestBuilder {
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

    /// Get fields from sites
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<ListItemFieldsRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<FieldValueSet>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Get fields from sites
    pub fn to_get_request_information(
        &self,
        config: Option<ListItemFieldsRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }

    /// Update the navigation property fields in sites
    pub async fn patch(
        &self,
        ctx: &RequestContext,
        body: &FieldValueSet,
        config: Option<ListItemFieldsRequestBuilderPatchRequestConfiguration>,
    ) -> Result<Option<FieldValueSet>, SdkError> {
        let info = self.to_patch_request_information(body, config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Update the navigation property fields in sites
    pub fn to_patch_request_information(
        &self,
        body: &FieldValueSet,
        config: Option<ListItemFieldsRequestBuilderPatchRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        let mut info = self.base.request_information(HttpMethod::Patch, config, "application/json");
        info.set_content_from_parsable(self.base.adapter().as_ref(), "application/json", body)?;
        Ok(info)
    }

    /// Delete navigation property fields for sites
    pub async fn delete(
        &self,
        ctx: &RequestContext,
        config: Option<ListItemFieldsRequestBuilderDeleteRequestConfiguration>,
    ) -> Result<(), SdkError> {
        let info = self.to_delete_request_information(config)?;
        self.base
            .adapter()
            .send_no_content(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Delete navigation property fields for sites
    pub fn to_delete_request_information(
        &self,
        config: Option<ListItemFieldsRequestBuilderDeleteRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Delete, config, "application/json"))
    }
}

/// Get fields from sites
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListItemFieldsRequestBuilderGetQueryParameters {
    /// Expand related entities
    pub expand: Vec<String>,
    /// Select properties to be returned
    pub select: Vec<String>,
}

impl QueryParameters for ListItemFieldsRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24expand", &self.expand);
        map.insert("%24select", &self.select);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type ListItemFieldsRequestBuilderGetRequestConfiguration =
    RequestConfiguration<ListItemFieldsRequestBuilderGetQueryParameters>;

/// Configuration for the request such as headers and middleware options.
pub type ListItemFieldsRequestBuilderPatchRequestConfiguration = RequestConfiguration;

/// Configuration for the request such as headers and middleware options.
pub type ListItemFieldsRequestBuilderDeleteRequestConfiguration = RequestConfiguration;

/// Provides operations to manage the driveItem property of the listItem entity.
#[derive(Debug, Clone)]
pub struct ListItemDriveItemRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for ListItemDriveItemRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/lists/{list%2Did}/items/{listItem%2Did}/driveItem{?%24expand,%24select}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl ListItemDriveItemRequestBuilder {
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
    pub fn content(&self) -> ListItemDriveItemContentRequestBuilder {
        self.base.navigate()
    }

    /// For document libraries, the driveItem relationship exposes the listItem as a driveItem.
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<ListItemDriveItemRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<DriveItem>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// For document libraries, the driveItem relationship exposes the listItem as a driveItem.
    pub fn to_get_request_information(
        &self,
        config: Option<ListItemDriveItemRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }
}

/// For document libraries, the driveItem relationship exposes the listItem as a driveItem.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListItemDriveItemRequestBuilderGetQueryParameters {
    /// Expand related entities
    pub expand: Vec<String>,
    /// Select properties to be returned
    pub select: Vec<String>,
}

impl QueryParameters for ListItemDriveItemRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24expand", &self.expand);
        map.insert("%24select", &self.select);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type ListItemDriveItemRequestBuilderGetRequestConfiguration =
    RequestConfiguration<ListItemDriveItemRequestBuilderGetQueryParameters>;

/// Provides operations to manage the media for the site entity.
#[derive(Debug, Clone)]
pub struct ListItemDriveItemContentRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for ListItemDriveItemContentRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/lists/{list%2Did}/items/{listItem%2Did}/driveItem/content{?%24format}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl ListItemDriveItemContentRequestBuilder {
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
        config: Option<ListItemDriveItemContentRequestBuilderGetRequestConfiguration>,
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
        config: Option<ListItemDriveItemContentRequestBuilderGetRequestConfiguration>,
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
        config: Option<ListItemDriveItemContentRequestBuilderPutRequestConfiguration>,
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
        config: Option<ListItemDriveItemContentRequestBuilderPutRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        let mut info = self.base.request_information(HttpMethod::Put, config, "application/json");
        info.set_stream_content(body);
        Ok(info)
    }
}

/// The content stream, if the item represents a file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListItemDriveItemContentRequestBuilderGetQueryParameters {
    /// Format of the content
    pub format: Option<String>,
}

impl QueryParameters for ListItemDriveItemContentRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24format", &self.format);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type ListItemDriveItemContentRequestBuilderGetRequestConfiguration =
    RequestConfiguration<ListItemDriveItemContentRequestBuilderGetQueryParameters>;

/// Configuration for the request such as headers and middleware options.
pub type ListItemDriveItemContentRequestBuilderPutRequestConfiguration = RequestConfiguration;

/// Provides operations to manage the createdByUser property of the baseItem entity.
#[derive(Debug, Clone)]
pub struct ListItemCreatedByUserRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for ListItemCreatedByUserRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/lists/{list%2Did}/items/{listItem%2Did}/createdByUser{?%24expand,%24select}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl ListItemCreatedByUserRequestBuilder {
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

    /// Identity of the user who created the item. Read-only.
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<ListItemCreatedByUserRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<User>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Identity of the user who created the item. Read-only.
    pub fn to_get_request_information(
        &self,
        config: Option<ListItemCreatedByUserRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }
}

/// Identity of the user who created the item. Read-only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListItemCreatedByUserRequestBuilderGetQueryParameters {
    /// Expand related entities
    pub expand: Vec<String>,
    /// Select properties to be returned
    pub select: Vec<String>,
}

impl QueryParameters for ListItemCreatedByUserRequestBuilderGetQueryParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        map.insert("%24expand", &self.expand);
        map.insert("%24select", &self.select);
        map
    }
}

/// Configuration for the request such as headers, query parameters, and middleware options.
pub type ListItemCreatedByUserRequestBuilderGetRequestConfiguration =
    RequestConfiguration<ListItemCreatedByUserRequestBuilderGetQueryParameters>;

/// Provides operations to call the getActivitiesByInterval method.
#[derive(Debug, Clone)]
pub struct GetActivitiesByIntervalRequestBuilder {
    base: BaseRequestBuilder,
}

impl RequestBuilder for GetActivitiesByIntervalRequestBuilder {
    const URL_TEMPLATE: &'static str =
        "{+baseurl}/sites/{site%2Did}/lists/{list%2Did}/items/{listItem%2Did}/getActivitiesByInterval(startDateTime='{startDateTime}',endDateTime='{endDateTime}',interval='{interval}'){?%24top,%24skip,%24search,%24filter,%24count,%24select,%24orderby,%24expand}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl GetActivitiesByIntervalRequestBuilder {
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

    /// Invoke function getActivitiesByInterval
    pub async fn get(
        &self,
        ctx: &RequestContext,
        config: Option<GetActivitiesByIntervalRequestBuilderGetRequestConfiguration>,
    ) -> Result<Option<GetActivitiesByIntervalGetResponse>, SdkError> {
        let info = self.to_get_request_information(config)?;
        self.base
            .adapter()
            .send(ctx, info, &ERROR_MAPPINGS)
            .await
    }

    /// Invoke function getActivitiesByInterval
    pub fn to_get_request_information(
        &self,
        config: Option<GetActivitiesByIntervalRequestBuilderGetRequestConfiguration>,
    ) -> Result<RequestInformation, SdkError> {
        Ok(self.base.request_information(HttpMethod::Get, config, "application/json"))
    }
}

/// Invoke function getActivitiesByInterval
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetActivitiesByIntervalRequestBuilderGetQueryParameters {
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

impl QueryParameters for GetActivitiesByIntervalRequestBuilderGetQueryParameters {
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
pub type GetActivitiesByIntervalRequestBuilderGetRequestConfiguration =
    RequestConfiguration<GetActivitiesByIntervalRequestBuilderGetQueryParameters>;
