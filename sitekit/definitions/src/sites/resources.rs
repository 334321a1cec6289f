//! The request-builder tree of the Sites service, one [`Resource`] per URL template.

use sitekit_define::{
    FunctionArgument, Navigation, Operation, PropertyType, QueryOption, RequestBody, Resource,
    ResponseKind, RestMethod,
};

const SITE: &str = "{+baseurl}/sites/{site%2Did}";

const COUNT_DESCRIPTION: &str = "Provides operations to count the resources in the collection.";
const MEDIA_DESCRIPTION: &str = "Provides operations to manage the media for the site entity.";
const CONTENT_DESCRIPTION: &str = "The content stream, if the item represents a file.";

// === query shapes ===

/// Query options of OData function calls, which list `$select` before `$orderby`.
fn function_query() -> Vec<QueryOption> {
    vec![
        QueryOption::top(),
        QueryOption::skip(),
        QueryOption::search(),
        QueryOption::filter(),
        QueryOption::count(),
        QueryOption::select(),
        QueryOption::orderby(),
        QueryOption::expand(),
    ]
}

fn delta_query() -> Vec<QueryOption> {
    let mut query = function_query();
    query.retain(|q| q.name != "expand");
    query
}

fn templated(path: &str, query: &[QueryOption]) -> String {
    format!("{path}{}", QueryOption::template_suffix(query))
}

// === operations ===

fn list(response: &str, description: &str, query: Vec<QueryOption>) -> Operation {
    Operation::new(RestMethod::Get, ResponseKind::model(response))
        .describe(description)
        .queries(query)
}

fn read(model: &str, description: &str) -> Operation {
    Operation::new(RestMethod::Get, ResponseKind::model(model))
        .describe(description)
        .queries(QueryOption::item())
}

fn create(model: &str, description: &str) -> Operation {
    Operation::new(RestMethod::Post, ResponseKind::model(model))
        .body(RequestBody::Model(model.to_string()))
        .describe(description)
}

fn update(model: &str, description: &str) -> Operation {
    Operation::new(RestMethod::Patch, ResponseKind::model(model))
        .body(RequestBody::Model(model.to_string()))
        .describe(description)
}

fn delete(description: &str) -> Operation {
    Operation::new(RestMethod::Delete, ResponseKind::Empty).describe(description)
}

fn count() -> Operation {
    Operation::new(RestMethod::Get, ResponseKind::Primitive(PropertyType::Int32))
        .describe("Get the number of the resource")
        .queries(QueryOption::counting())
}

fn download(description: &str, query: Vec<QueryOption>) -> Operation {
    Operation::new(RestMethod::Get, ResponseKind::Bytes)
        .describe(description)
        .queries(query)
}

fn upload(response: ResponseKind, description: &str) -> Operation {
    Operation::new(RestMethod::Put, response)
        .body(RequestBody::Stream)
        .describe(description)
}

/// Read, update and delete on a navigation property named `noun`.
fn crud(model: &str, noun: &str) -> Vec<Operation> {
    vec![
        read(model, &format!("Get {noun} from sites")),
        update(model, &format!("Update the navigation property {noun} in sites")),
        delete(&format!("Delete navigation property {noun} for sites")),
    ]
}

// === collections ===

/// A keyed collection segment.
///
/// Expands into three resources: the collection itself, its `$count`
/// segment, and the item reached through `by_{param}`.
struct Collection {
    name: &'static str,
    module: &'static str,
    path: String,
    description: &'static str,
    model: &'static str,
    item: &'static str,
    key: &'static str,
    param: &'static str,
    list_description: Option<&'static str>,
    creatable: bool,
    navigations: Vec<Navigation>,
}

impl Collection {
    fn new(
        name: &'static str,
        module: &'static str,
        path: impl Into<String>,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            module,
            path: path.into(),
            description,
            model: "",
            item: "",
            key: "",
            param: "",
            list_description: None,
            creatable: true,
            navigations: Vec::new(),
        }
    }

    /// Items are `model`s reached through the `item` builder, keyed by `key`.
    fn of(
        mut self,
        model: &'static str,
        item: &'static str,
        key: &'static str,
        param: &'static str,
    ) -> Self {
        self.model = model;
        self.item = item;
        self.key = key;
        self.param = param;
        self
    }

    fn listed_as(mut self, description: &'static str) -> Self {
        self.list_description = Some(description);
        self
    }

    fn read_only(mut self) -> Self {
        self.creatable = false;
        self
    }

    fn navigation(mut self, navigation: Navigation) -> Self {
        self.navigations.push(navigation);
        self
    }

    fn build(self, item_operations: Vec<Operation>, item_navigations: Vec<Navigation>) -> [Resource; 3] {
        let segment = self.path.rsplit('/').next().unwrap_or_default().to_string();
        let list_description = self
            .list_description
            .map(str::to_string)
            .unwrap_or_else(|| format!("Get {segment} from sites"));

        let mut collection = Resource::new(
            self.name,
            self.module,
            templated(&self.path, &QueryOption::collection()),
        )
        .describe(self.description)
        .operation(list(
            &format!("{}CollectionResponse", self.model),
            &list_description,
            QueryOption::collection(),
        ));
        if self.creatable {
            collection = collection.operation(create(
                self.model,
                &format!("Create new navigation property to {segment} for sites"),
            ));
        }
        collection = collection
            .navigation(Navigation::indexer(
                format!("by_{}", self.param),
                self.item,
                self.key,
                self.param,
            ))
            .navigation(Navigation::property("count", format!("{}Count", self.name)));
        for navigation in self.navigations {
            collection = collection.navigation(navigation);
        }

        let counter = Resource::new(
            format!("{}Count", self.name),
            self.module,
            templated(&format!("{}/$count", self.path), &QueryOption::counting()),
        )
        .describe(COUNT_DESCRIPTION)
        .operation(count());

        let mut item = Resource::new(
            self.item,
            self.module,
            templated(&format!("{}/{{{}}}", self.path, self.key), &QueryOption::item()),
        )
        .describe(self.description);
        for operation in item_operations {
            item = item.operation(operation);
        }
        for navigation in item_navigations {
            item = item.navigation(navigation);
        }

        [collection, counter, item]
    }
}

/// Every resource of the service, grouped by module.
pub fn resources() -> Vec<Resource> {
    let mut resources = sites();
    resources.extend(analytics());
    resources.extend(columns());
    resources.extend(content_types());
    resources.extend(drive());
    resources.extend(lists());
    resources.extend(onenote());
    resources.extend(pages());
    resources.extend(permissions());
    resources.extend(term_store());
    resources
}

fn sites() -> Vec<Resource> {
    let delta_description =
        "Get newly created, updated, or deleted sites without a full read of the entire collection.";
    let item = templated(SITE, &QueryOption::item());
    vec![
        Resource::new("Sites", "sites", templated("{+baseurl}/sites", &QueryOption::collection()))
            .describe("Provides operations to manage the collection of site entities.")
            .operation(list(
                "SiteCollectionResponse",
                "List all available sites in an organization.",
                QueryOption::collection(),
            ))
            .navigation(Navigation::indexer("by_site_id", "SiteItem", "site%2Did", "site_id"))
            .navigation(Navigation::property("count", "SitesCount"))
            .navigation(Navigation::property("delta", "Delta"))
            .navigation(Navigation::property("add", "Add"))
            .navigation(Navigation::property("remove", "Remove")),
        Resource::new("SitesCount", "sites", templated("{+baseurl}/sites/$count", &QueryOption::counting()))
            .describe(COUNT_DESCRIPTION)
            .operation(count()),
        Resource::new("Delta", "sites", templated("{+baseurl}/sites/delta()", &delta_query()))
            .describe("Provides operations to call the delta method.")
            .operation(
                list("DeltaGetResponse", delta_description, delta_query())
                    .named("get_as_delta_get_response"),
            )
            .operation(
                list("DeltaResponse", delta_description, delta_query())
                    .deprecated("get_as_delta_get_response", None),
            ),
        Resource::new("Add", "sites", "{+baseurl}/sites/add")
            .describe("Provides operations to call the add method.")
            .operation(
                create("AddPostResponse", "Follow a user's site or multiple sites.")
                    .body(RequestBody::Model("AddPostRequestBody".into())),
            ),
        Resource::new("Remove", "sites", "{+baseurl}/sites/remove")
            .describe("Provides operations to call the remove method.")
            .operation(
                create("RemovePostResponse", "Unfollow a user's site or multiple sites.")
                    .body(RequestBody::Model("RemovePostRequestBody".into())),
            ),
        Resource::new("SiteItem", "sites", item)
            .describe("Provides operations to manage the collection of site entities.")
            .operation(read("Site", "Retrieve properties and relationships for a site resource."))
            .operation(update("Site", "Update entity in sites"))
            .navigation(Navigation::property("analytics", "Analytics"))
            .navigation(Navigation::property("columns", "Columns"))
            .navigation(Navigation::property("content_types", "ContentTypes"))
            .navigation(Navigation::property("drive", "Drive"))
            .navigation(Navigation::function(
                "get_by_path",
                "GetByPath",
                vec![FunctionArgument::new("path", "path")],
            ))
            .navigation(Navigation::property("lists", "Lists"))
            .navigation(Navigation::property("onenote", "Onenote"))
            .navigation(Navigation::property("pages", "Pages"))
            .navigation(Navigation::property("permissions", "Permissions"))
            .navigation(Navigation::property("sites", "Subsites"))
            .navigation(Navigation::property("term_store", "TermStore")),
        Resource::new(
            "GetByPath",
            "sites",
            templated(&format!("{SITE}/getByPath(path='{{path}}')"), &QueryOption::item()),
        )
        .describe("Provides operations to call the getByPath method.")
        .operation(read("Site", "Retrieve a site resource by its server-relative path.")),
        Resource::new("Subsites", "sites", templated(&format!("{SITE}/sites"), &QueryOption::collection()))
            .describe("Provides operations to manage the sites property of the site entity.")
            .operation(list(
                "SiteCollectionResponse",
                "Get a collection of subsites defined for a site.",
                QueryOption::collection(),
            ))
            .navigation(Navigation::indexer("by_site_id1", "SubsiteItem", "site%2Did1", "site_id1"))
            .navigation(Navigation::property("count", "SubsitesCount")),
        Resource::new(
            "SubsitesCount",
            "sites",
            templated(&format!("{SITE}/sites/$count"), &QueryOption::counting()),
        )
        .describe(COUNT_DESCRIPTION)
        .operation(count()),
        Resource::new(
            "SubsiteItem",
            "sites",
            templated(&format!("{SITE}/sites/{{site%2Did1}}"), &QueryOption::item()),
        )
        .describe("Provides operations to manage the sites property of the site entity.")
        .operation(read("Site", "The collection of the sub-sites under this site.")),
    ]
}

fn analytics() -> Vec<Resource> {
    let description =
        "Provides operations to manage the itemActivityStats property of the itemAnalytics entity.";
    let mut resources = vec![
        Resource::new("Analytics", "analytics", templated(&format!("{SITE}/analytics"), &QueryOption::item()))
            .describe("Provides operations to manage the analytics property of the site entity.")
            .operation(read(
                "ItemAnalytics",
                "Analytics about the view activities that took place on this site.",
            ))
            .navigation(Navigation::property("item_activity_stats", "ItemActivityStats")),
    ];
    resources.extend(
        Collection::new(
            "ItemActivityStats",
            "analytics",
            format!("{SITE}/analytics/itemActivityStats"),
            description,
        )
        .of(
            "ItemActivityStat",
            "ItemActivityStatItem",
            "itemActivityStat%2Did",
            "item_activity_stat_id",
        )
        .build(crud("ItemActivityStat", "itemActivityStats"), vec![]),
    );
    resources
}

fn columns() -> Vec<Resource> {
    Collection::new(
        "Columns",
        "columns",
        format!("{SITE}/columns"),
        "Provides operations to manage the columns property of the site entity.",
    )
    .of("ColumnDefinition", "ColumnItem", "columnDefinition%2Did", "column_definition_id")
    .listed_as("Get the collection of columns represented as columnDefinition resources in a site.")
    .build(crud("ColumnDefinition", "columns"), vec![])
    .into()
}

fn content_types() -> Vec<Resource> {
    let mut resources: Vec<Resource> = Collection::new(
        "ContentTypes",
        "content_types",
        format!("{SITE}/contentTypes"),
        "Provides operations to manage the contentTypes property of the site entity.",
    )
    .of("ContentType", "ContentTypeItem", "contentType%2Did", "content_type_id")
    .listed_as("Get the collection of contentType resources in a site.")
    .navigation(Navigation::property(
        "get_compatible_hub_content_types",
        "GetCompatibleHubContentTypes",
    ))
    .build(crud("ContentType", "contentTypes"), vec![])
    .into();
    resources.push(
        Resource::new(
            "GetCompatibleHubContentTypes",
            "content_types",
            templated(
                &format!("{SITE}/contentTypes/getCompatibleHubContentTypes()"),
                &function_query(),
            ),
        )
        .describe("Provides operations to call the getCompatibleHubContentTypes method.")
        .operation(list(
            "GetCompatibleHubContentTypesGetResponse",
            "Get a list of compatible content types from the content type hub that can be added to a target site or a list.",
            function_query(),
        )),
    );
    resources
}

fn drive() -> Vec<Resource> {
    vec![
        Resource::new("Drive", "drive", templated(&format!("{SITE}/drive"), &QueryOption::item()))
            .describe("Provides operations to manage the drive property of the site entity.")
            .operation(read("Drive", "The default drive (document library) for this site."))
            .navigation(Navigation::property("root", "DriveRoot")),
        Resource::new("DriveRoot", "drive", templated(&format!("{SITE}/drive/root"), &QueryOption::item()))
            .describe("Provides operations to manage the root property of the drive entity.")
            .operation(read("DriveItem", "The root folder of the drive."))
            .navigation(Navigation::property("content", "DriveRootContent")),
        Resource::new(
            "DriveRootContent",
            "drive",
            templated(&format!("{SITE}/drive/root/content"), &[QueryOption::format()]),
        )
        .describe(MEDIA_DESCRIPTION)
        .operation(download(CONTENT_DESCRIPTION, vec![QueryOption::format()]))
        .operation(upload(ResponseKind::model("DriveItem"), CONTENT_DESCRIPTION)),
    ]
}

fn lists() -> Vec<Resource> {
    let list_path = format!("{SITE}/lists/{{list%2Did}}");
    let item = format!("{list_path}/items/{{listItem%2Did}}");

    let mut resources: Vec<Resource> = Collection::new(
        "Lists",
        "lists",
        format!("{SITE}/lists"),
        "Provides operations to manage the lists property of the site entity.",
    )
    .of("List", "ListsItem", "list%2Did", "list_id")
    .listed_as("Get the collection of lists for a site.")
    .build(crud("List", "lists"), vec![Navigation::property("items", "ListItems")])
    .into();

    resources.extend(
        Collection::new(
            "ListItems",
            "lists",
            format!("{list_path}/items"),
            "Provides operations to manage the items property of the list entity.",
        )
        .of("ListItem", "ListItemsItem", "listItem%2Did", "list_item_id")
        .build(
            crud("ListItem", "items"),
            vec![
                Navigation::property("created_by_user", "ListItemCreatedByUser"),
                Navigation::property("drive_item", "ListItemDriveItem"),
                Navigation::property("fields", "ListItemFields"),
                Navigation::function(
                    "get_activities_by_interval",
                    "GetActivitiesByInterval",
                    vec![
                        FunctionArgument::new("start_date_time", "startDateTime"),
                        FunctionArgument::new("end_date_time", "endDateTime"),
                        FunctionArgument::new("interval", "interval"),
                    ],
                ),
            ],
        ),
    );

    let mut fields = Resource::new(
        "ListItemFields",
        "lists",
        templated(&format!("{item}/fields"), &QueryOption::item()),
    )
    .describe("Provides operations to manage the fields property of the listItem entity.");
    for operation in crud("FieldValueSet", "fields") {
        fields = fields.operation(operation);
    }

    resources.extend([
        fields,
        Resource::new(
            "ListItemDriveItem",
            "lists",
            templated(&format!("{item}/driveItem"), &QueryOption::item()),
        )
        .describe("Provides operations to manage the driveItem property of the listItem entity.")
        .operation(read(
            "DriveItem",
            "For document libraries, the driveItem relationship exposes the listItem as a driveItem.",
        ))
        .navigation(Navigation::property("content", "ListItemDriveItemContent")),
        Resource::new(
            "ListItemDriveItemContent",
            "lists",
            templated(&format!("{item}/driveItem/content"), &[QueryOption::format()]),
        )
        .describe(MEDIA_DESCRIPTION)
        .operation(download(CONTENT_DESCRIPTION, vec![QueryOption::format()]))
        .operation(upload(ResponseKind::model("DriveItem"), CONTENT_DESCRIPTION)),
        Resource::new(
            "ListItemCreatedByUser",
            "lists",
            templated(&format!("{item}/createdByUser"), &QueryOption::item()),
        )
        .describe("Provides operations to manage the createdByUser property of the baseItem entity.")
        .operation(read("User", "Identity of the user who created the item. Read-only.")),
        Resource::new(
            "GetActivitiesByInterval",
            "lists",
            templated(
                &format!(
                    "{item}/getActivitiesByInterval(startDateTime='{{startDateTime}}',endDateTime='{{endDateTime}}',interval='{{interval}}')"
                ),
                &function_query(),
            ),
        )
        .describe("Provides operations to call the getActivitiesByInterval method.")
        .operation(list(
            "GetActivitiesByIntervalGetResponse",
            "Invoke function getActivitiesByInterval",
            function_query(),
        )),
    ]);
    resources
}

fn onenote() -> Vec<Resource> {
    let notebook = format!("{SITE}/onenote/notebooks/{{notebook%2Did}}");

    let mut resources = vec![
        Resource::new("Onenote", "onenote", templated(&format!("{SITE}/onenote"), &QueryOption::item()))
            .describe("Provides operations to manage the onenote property of the site entity.")
            .operation(read("Onenote", "Calls the OneNote service for notebook related operations."))
            .navigation(Navigation::property("notebooks", "Notebooks")),
    ];
    resources.extend(
        Collection::new(
            "Notebooks",
            "onenote",
            format!("{SITE}/onenote/notebooks"),
            "Provides operations to manage the notebooks property of the onenote entity.",
        )
        .of("Notebook", "NotebookItem", "notebook%2Did", "notebook_id")
        .build(
            crud("Notebook", "notebooks"),
            vec![
                Navigation::property("section_groups", "NotebookSectionGroups"),
                Navigation::property("sections", "NotebookSections"),
            ],
        ),
    );
    resources.extend(
        Collection::new(
            "NotebookSections",
            "onenote",
            format!("{notebook}/sections"),
            "Provides operations to manage the sections property of the notebook entity.",
        )
        .of("OnenoteSection", "NotebookSectionItem", "onenoteSection%2Did", "onenote_section_id")
        .build(
            crud("OnenoteSection", "sections"),
            vec![Navigation::property("pages", "SectionPages")],
        ),
    );
    resources.extend(
        Collection::new(
            "SectionPages",
            "onenote",
            format!("{notebook}/sections/{{onenoteSection%2Did}}/pages"),
            "Provides operations to manage the pages property of the onenoteSection entity.",
        )
        .of("OnenotePage", "SectionPageItem", "onenotePage%2Did", "onenote_page_id")
        .build(
            crud("OnenotePage", "pages"),
            vec![Navigation::property("content", "SectionPageContent")],
        ),
    );
    resources.push(
        Resource::new(
            "SectionPageContent",
            "onenote",
            format!("{notebook}/sections/{{onenoteSection%2Did}}/pages/{{onenotePage%2Did}}/content"),
        )
        .describe(MEDIA_DESCRIPTION)
        .operation(download("The page's HTML content.", vec![]))
        .operation(upload(ResponseKind::Empty, "The page's HTML content.")),
    );
    resources.extend(
        Collection::new(
            "NotebookSectionGroups",
            "onenote",
            format!("{notebook}/sectionGroups"),
            "Provides operations to manage the sectionGroups property of the notebook entity.",
        )
        .of("SectionGroup", "NotebookSectionGroupItem", "sectionGroup%2Did", "section_group_id")
        .build(
            crud("SectionGroup", "sectionGroups"),
            vec![Navigation::property("sections", "SectionGroupSections")],
        ),
    );
    resources.extend(
        Collection::new(
            "SectionGroupSections",
            "onenote",
            format!("{notebook}/sectionGroups/{{sectionGroup%2Did}}/sections"),
            "Provides operations to manage the sections property of the sectionGroup entity.",
        )
        .of("OnenoteSection", "SectionGroupSectionItem", "onenoteSection%2Did", "onenote_section_id")
        .read_only()
        .build(
            vec![read("OnenoteSection", "The sections in the section group. Read-only. Nullable.")],
            vec![],
        ),
    );
    resources
}

fn pages() -> Vec<Resource> {
    let site_page = format!("{SITE}/pages/{{baseSitePage%2Did}}/graph.sitePage");
    let canvas = format!("{site_page}/canvasLayout");

    let mut resources: Vec<Resource> = Collection::new(
        "Pages",
        "pages",
        format!("{SITE}/pages"),
        "Provides operations to manage the pages property of the site entity.",
    )
    .of("BaseSitePage", "BaseSitePageItem", "baseSitePage%2Did", "base_site_page_id")
    .listed_as("Get the collection of baseSitePage objects from the site pages list in a site.")
    .build(
        crud("BaseSitePage", "pages"),
        vec![Navigation::property("graph_site_page", "GraphSitePage")],
    )
    .into();

    let mut layout = Resource::new("CanvasLayout", "pages", templated(&canvas, &QueryOption::item()))
        .describe("Provides operations to manage the canvasLayout property of the sitePage entity.");
    for operation in crud("CanvasLayout", "canvasLayout") {
        layout = layout.operation(operation);
    }
    resources.extend([
        Resource::new("GraphSitePage", "pages", templated(&site_page, &QueryOption::item()))
            .describe("Casts the previous resource to sitePage.")
            .operation(read(
                "SitePage",
                "Get the item of type microsoft.graph.baseSitePage as microsoft.graph.sitePage",
            ))
            .navigation(Navigation::property("canvas_layout", "CanvasLayout")),
        layout
            .navigation(Navigation::property("horizontal_sections", "HorizontalSections"))
            .navigation(Navigation::property("vertical_section", "VerticalSection")),
    ]);

    resources.extend(
        Collection::new(
            "HorizontalSections",
            "pages",
            format!("{canvas}/horizontalSections"),
            "Provides operations to manage the horizontalSections property of the canvasLayout entity.",
        )
        .of(
            "HorizontalSection",
            "HorizontalSectionItem",
            "horizontalSection%2Did",
            "horizontal_section_id",
        )
        .build(
            crud("HorizontalSection", "horizontalSections"),
            vec![Navigation::property("columns", "HorizontalSectionColumns")],
        ),
    );
    resources.extend(
        Collection::new(
            "HorizontalSectionColumns",
            "pages",
            format!("{canvas}/horizontalSections/{{horizontalSection%2Did}}/columns"),
            "Provides operations to manage the columns property of the horizontalSection entity.",
        )
        .of(
            "HorizontalSectionColumn",
            "HorizontalSectionColumnItem",
            "horizontalSectionColumn%2Did",
            "horizontal_section_column_id",
        )
        .build(crud("HorizontalSectionColumn", "columns"), vec![]),
    );

    let mut vertical = Resource::new(
        "VerticalSection",
        "pages",
        templated(&format!("{canvas}/verticalSection"), &QueryOption::item()),
    )
    .describe("Provides operations to manage the verticalSection property of the canvasLayout entity.");
    for operation in crud("VerticalSection", "verticalSection") {
        vertical = vertical.operation(operation);
    }
    resources.push(vertical.navigation(Navigation::property("webparts", "VerticalSectionWebparts")));

    resources.extend(
        Collection::new(
            "VerticalSectionWebparts",
            "pages",
            format!("{canvas}/verticalSection/webparts"),
            "Provides operations to manage the webparts property of the verticalSection entity.",
        )
        .of("WebPart", "WebPartItem", "webPart%2Did", "web_part_id")
        .build(crud("WebPart", "webparts"), vec![]),
    );
    resources
}

fn permissions() -> Vec<Resource> {
    Collection::new(
        "Permissions",
        "permissions",
        format!("{SITE}/permissions"),
        "Provides operations to manage the permissions property of the site entity.",
    )
    .of("Permission", "PermissionItem", "permission%2Did", "permission_id")
    .listed_as("Get the permission resources from the permissions navigation property on a site.")
    .build(crud("Permission", "permissions"), vec![])
    .into()
}

fn term_store() -> Vec<Resource> {
    let store = format!("{SITE}/termStore");
    let set = format!("{store}/groups/{{group%2Did}}/sets/{{set%2Did}}");
    let term = format!("{set}/terms/{{term%2Did}}");

    let mut resources = vec![
        Resource::new("TermStore", "term_store", templated(&store, &QueryOption::item()))
            .describe("Provides operations to manage the termStore property of the site entity.")
            .operation(read("Store", "The default termStore under this site."))
            .operation(update("Store", "Update the navigation property termStore in sites"))
            .navigation(Navigation::property("groups", "TermGroups")),
    ];

    let mut group_operations = crud("Group", "groups");
    group_operations.retain(|o| o.method != RestMethod::Patch);
    resources.extend(
        Collection::new(
            "TermGroups",
            "term_store",
            format!("{store}/groups"),
            "Provides operations to manage the groups property of the store entity.",
        )
        .of("Group", "TermGroupItem", "group%2Did", "group_id")
        .build(group_operations, vec![Navigation::property("sets", "GroupSets")]),
    );
    resources.extend(
        Collection::new(
            "GroupSets",
            "term_store",
            format!("{store}/groups/{{group%2Did}}/sets"),
            "Provides operations to manage the sets property of the group entity.",
        )
        .of("Set", "GroupSetItem", "set%2Did", "set_id")
        .read_only()
        .build(crud("Set", "sets"), vec![Navigation::property("terms", "SetTerms")]),
    );
    resources.extend(
        Collection::new(
            "SetTerms",
            "term_store",
            format!("{set}/terms"),
            "Provides operations to manage the terms property of the set entity.",
        )
        .of("Term", "SetTermItem", "term%2Did", "term_id")
        .build(
            crud("Term", "terms"),
            vec![
                Navigation::property("children", "TermChildren"),
                Navigation::property("relations", "TermRelations"),
            ],
        ),
    );
    resources.extend(
        Collection::new(
            "TermChildren",
            "term_store",
            format!("{term}/children"),
            "Provides operations to manage the children property of the term entity.",
        )
        .of("Term", "TermChildItem", "term%2Did1", "term_id1")
        .build(
            crud("Term", "children"),
            vec![Navigation::property("relations", "TermChildRelations")],
        ),
    );
    resources.extend(
        Collection::new(
            "TermChildRelations",
            "term_store",
            format!("{term}/children/{{term%2Did1}}/relations"),
            "Provides operations to manage the relations property of the term entity.",
        )
        .of("Relation", "TermChildRelationItem", "relation%2Did", "relation_id")
        .build(crud("Relation", "relations"), vec![]),
    );
    resources.extend(
        Collection::new(
            "TermRelations",
            "term_store",
            format!("{term}/relations"),
            "Provides operations to manage the relations property of the term entity.",
        )
        .of("Relation", "TermRelationItem", "relation%2Did", "relation_id")
        .build(crud("Relation", "relations"), vec![]),
    );
    resources
}
