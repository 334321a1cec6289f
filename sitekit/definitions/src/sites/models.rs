//! Entity, complex and enum types of the Sites service.

use sitekit_define::{EnumType, ModelType, PropertyType as T};

/// Item types that have a paged `{Item}CollectionResponse`.
const PAGED_ITEMS: [&str; 19] = [
    "Site", "ItemActivityStat", "ColumnDefinition", "ContentType", "List", "ListItem", "Notebook",
    "OnenoteSection", "SectionGroup", "OnenotePage", "BaseSitePage", "HorizontalSection",
    "HorizontalSectionColumn", "WebPart", "Permission", "Group", "Set", "Term", "Relation",
];

fn model(name: &str) -> T {
    T::model(name)
}

fn many(inner: T) -> T {
    T::collection_of(inner)
}

/// Every model in emission order: entities, value types, then response envelopes.
pub fn models() -> Vec<ModelType> {
    let mut models = entities();
    models.extend(value_types());
    models.extend(responses());
    models
}

fn entities() -> Vec<ModelType> {
    vec![
        ModelType::entity("Entity")
            .odata_type("#microsoft.graph.entity")
            .describe("Base type of every addressable entity.")
            .properties([("id", T::String)]),
        ModelType::entity("BaseItem")
            .base("Entity")
            .odata_type("#microsoft.graph.baseItem")
            .describe("Common properties of sites, lists, list items, drives and drive items.")
            .properties([
                ("createdBy", model("IdentitySet")),
                ("createdDateTime", T::DateTime),
                ("description", T::String),
                ("eTag", T::String),
                ("lastModifiedBy", model("IdentitySet")),
                ("lastModifiedDateTime", T::DateTime),
                ("name", T::String),
                ("parentReference", model("ItemReference")),
                ("webUrl", T::String),
                ("createdByUser", model("User")),
                ("lastModifiedByUser", model("User")),
            ]),
        ModelType::entity("Site")
            .base("BaseItem")
            .odata_type("#microsoft.graph.site")
            .describe("A SharePoint site.")
            .properties([
                ("displayName", T::String),
                ("isPersonalSite", T::Bool),
                ("root", model("Root")),
                ("sharepointIds", model("SharepointIds")),
                ("siteCollection", model("SiteCollection")),
                ("analytics", model("ItemAnalytics")),
                ("columns", many(model("ColumnDefinition"))),
                ("contentTypes", many(model("ContentType"))),
                ("drive", model("Drive")),
                ("drives", many(model("Drive"))),
                ("lists", many(model("List"))),
                ("onenote", model("Onenote")),
                ("pages", many(model("BaseSitePage"))),
                ("permissions", many(model("Permission"))),
                ("sites", many(model("Site"))),
                ("termStore", model("Store")),
            ]),
        ModelType::entity("List")
            .base("BaseItem")
            .odata_type("#microsoft.graph.list")
            .describe("A SharePoint list.")
            .properties([
                ("displayName", T::String),
                ("list", model("ListInfo")),
                ("sharepointIds", model("SharepointIds")),
                ("columns", many(model("ColumnDefinition"))),
                ("contentTypes", many(model("ContentType"))),
                ("drive", model("Drive")),
                ("items", many(model("ListItem"))),
            ]),
        ModelType::entity("ListItem")
            .base("BaseItem")
            .odata_type("#microsoft.graph.listItem")
            .describe("An item in a SharePoint list.")
            .properties([
                ("contentType", model("ContentTypeInfo")),
                ("sharepointIds", model("SharepointIds")),
                ("analytics", model("ItemAnalytics")),
                ("driveItem", model("DriveItem")),
                ("fields", model("FieldValueSet")),
            ]),
        ModelType::entity("FieldValueSet")
            .base("Entity")
            .odata_type("#microsoft.graph.fieldValueSet")
            .describe("Column values of a list item, keyed by column name."),
        ModelType::entity("Drive")
            .base("BaseItem")
            .odata_type("#microsoft.graph.drive")
            .describe("A document library.")
            .properties([
                ("driveType", T::String),
                ("owner", model("IdentitySet")),
                ("quota", model("Quota")),
                ("sharePointIds", model("SharepointIds")),
                ("items", many(model("DriveItem"))),
                ("list", model("List")),
                ("root", model("DriveItem")),
            ]),
        ModelType::entity("DriveItem")
            .base("BaseItem")
            .odata_type("#microsoft.graph.driveItem")
            .describe("A file, folder or other item stored in a drive.")
            .properties([
                ("cTag", T::String),
                ("file", model("File")),
                ("folder", model("Folder")),
                ("root", model("Root")),
                ("size", T::Int64),
                ("sharepointIds", model("SharepointIds")),
                ("webDavUrl", T::String),
                ("analytics", model("ItemAnalytics")),
                ("children", many(model("DriveItem"))),
                ("listItem", model("ListItem")),
            ]),
        ModelType::entity("DirectoryObject")
            .base("Entity")
            .odata_type("#microsoft.graph.directoryObject")
            .describe("A directory object.")
            .properties([("deletedDateTime", T::DateTime)]),
        ModelType::entity("User")
            .base("DirectoryObject")
            .odata_type("#microsoft.graph.user")
            .describe("A user account.")
            .properties([
                ("accountEnabled", T::Bool),
                ("businessPhones", many(T::String)),
                ("displayName", T::String),
                ("givenName", T::String),
                ("jobTitle", T::String),
                ("mail", T::String),
                ("surname", T::String),
                ("userPrincipalName", T::String),
            ]),
        ModelType::entity("ItemAnalytics")
            .base("Entity")
            .odata_type("#microsoft.graph.itemAnalytics")
            .describe("Access statistics for an item.")
            .properties([
                ("allTime", model("ItemActivityStat")),
                ("itemActivityStats", many(model("ItemActivityStat"))),
                ("lastSevenDays", model("ItemActivityStat")),
            ]),
        ModelType::entity("ItemActivityStat")
            .base("Entity")
            .odata_type("#microsoft.graph.itemActivityStat")
            .describe("Activity on an item within an interval.")
            .properties([
                ("access", model("ItemActionStat")),
                ("create", model("ItemActionStat")),
                ("delete", model("ItemActionStat")),
                ("edit", model("ItemActionStat")),
                ("endDateTime", T::DateTime),
                ("incompleteData", model("IncompleteData")),
                ("isTrending", T::Bool),
                ("move", model("ItemActionStat")),
                ("startDateTime", T::DateTime),
            ]),
        ModelType::entity("ColumnDefinition")
            .base("Entity")
            .odata_type("#microsoft.graph.columnDefinition")
            .describe("A column in a site, list or content type.")
            .properties([
                ("columnGroup", T::String),
                ("description", T::String),
                ("displayName", T::String),
                ("enforceUniqueValues", T::Bool),
                ("hidden", T::Bool),
                ("indexed", T::Bool),
                ("isDeletable", T::Bool),
                ("isReorderable", T::Bool),
                ("isSealed", T::Bool),
                ("name", T::String),
                ("number", model("NumberColumn")),
                ("readOnly", T::Bool),
                ("required", T::Bool),
                ("text", model("TextColumn")),
                ("type", T::enumeration("ColumnTypes")),
                ("sourceColumn", model("ColumnDefinition")),
            ]),
        ModelType::entity("ContentType")
            .base("Entity")
            .odata_type("#microsoft.graph.contentType")
            .describe("A content type.")
            .properties([
                ("associatedHubsUrls", many(T::String)),
                ("description", T::String),
                ("group", T::String),
                ("hidden", T::Bool),
                ("isBuiltIn", T::Bool),
                ("name", T::String),
                ("order", model("ContentTypeOrder")),
                ("parentId", T::String),
                ("propagateChanges", T::Bool),
                ("readOnly", T::Bool),
                ("sealed", T::Bool),
                ("base", model("ContentType")),
                ("baseTypes", many(model("ContentType"))),
                ("columns", many(model("ColumnDefinition"))),
            ]),
        ModelType::entity("Permission")
            .base("Entity")
            .odata_type("#microsoft.graph.permission")
            .describe("A sharing permission granted for a site.")
            .properties([
                ("expirationDateTime", T::DateTime),
                ("grantedToIdentitiesV2", many(model("IdentitySet"))),
                ("grantedToV2", model("IdentitySet")),
                ("hasPassword", T::Bool),
                ("inheritedFrom", model("ItemReference")),
                ("link", model("SharingLink")),
                ("roles", many(T::String)),
                ("shareId", T::String),
            ]),
        ModelType::entity("Onenote")
            .base("Entity")
            .odata_type("#microsoft.graph.onenote")
            .describe("The OneNote service entry point of a site.")
            .properties([
                ("notebooks", many(model("Notebook"))),
                ("pages", many(model("OnenotePage"))),
                ("sectionGroups", many(model("SectionGroup"))),
                ("sections", many(model("OnenoteSection"))),
            ]),
        ModelType::entity("OnenoteEntityBaseModel")
            .base("Entity")
            .odata_type("#microsoft.graph.onenoteEntityBaseModel")
            .properties([("self", T::String)]),
        ModelType::entity("OnenoteEntitySchemaObjectModel")
            .base("OnenoteEntityBaseModel")
            .odata_type("#microsoft.graph.onenoteEntitySchemaObjectModel")
            .properties([("createdDateTime", T::DateTime)]),
        ModelType::entity("OnenoteEntityHierarchyModel")
            .base("OnenoteEntitySchemaObjectModel")
            .odata_type("#microsoft.graph.onenoteEntityHierarchyModel")
            .properties([
                ("createdBy", model("IdentitySet")),
                ("displayName", T::String),
                ("lastModifiedBy", model("IdentitySet")),
                ("lastModifiedDateTime", T::DateTime),
            ]),
        ModelType::entity("Notebook")
            .base("OnenoteEntityHierarchyModel")
            .odata_type("#microsoft.graph.notebook")
            .describe("A OneNote notebook.")
            .properties([
                ("isDefault", T::Bool),
                ("isShared", T::Bool),
                ("links", model("NotebookLinks")),
                ("sectionGroupsUrl", T::String),
                ("sectionsUrl", T::String),
                ("userRole", T::enumeration("OnenoteUserRole")),
                ("sectionGroups", many(model("SectionGroup"))),
                ("sections", many(model("OnenoteSection"))),
            ]),
        ModelType::entity("SectionGroup")
            .base("OnenoteEntityHierarchyModel")
            .odata_type("#microsoft.graph.sectionGroup")
            .describe("A group of OneNote sections.")
            .properties([
                ("sectionGroupsUrl", T::String),
                ("sectionsUrl", T::String),
                ("parentNotebook", model("Notebook")),
                ("parentSectionGroup", model("SectionGroup")),
                ("sectionGroups", many(model("SectionGroup"))),
                ("sections", many(model("OnenoteSection"))),
            ]),
        ModelType::entity("OnenoteSection")
            .base("OnenoteEntityHierarchyModel")
            .odata_type("#microsoft.graph.onenoteSection")
            .describe("A section in a OneNote notebook.")
            .properties([
                ("isDefault", T::Bool),
                ("links", model("SectionLinks")),
                ("pagesUrl", T::String),
                ("pages", many(model("OnenotePage"))),
                ("parentNotebook", model("Notebook")),
                ("parentSectionGroup", model("SectionGroup")),
            ]),
        ModelType::entity("OnenotePage")
            .base("OnenoteEntitySchemaObjectModel")
            .odata_type("#microsoft.graph.onenotePage")
            .describe("A page in a OneNote section.")
            .properties([
                ("contentUrl", T::String),
                ("createdByAppId", T::String),
                ("lastModifiedDateTime", T::DateTime),
                ("level", T::Int32),
                ("links", model("PageLinks")),
                ("order", T::Int32),
                ("title", T::String),
                ("userTags", many(T::String)),
                ("parentNotebook", model("Notebook")),
                ("parentSection", model("OnenoteSection")),
            ]),
        ModelType::entity("BaseSitePage")
            .base("BaseItem")
            .odata_type("#microsoft.graph.baseSitePage")
            .describe("A page in the site page library.")
            .properties([
                ("pageLayout", T::enumeration("PageLayoutType")),
                ("publishingState", model("PublicationFacet")),
                ("title", T::String),
            ]),
        ModelType::entity("SitePage")
            .base("BaseSitePage")
            .odata_type("#microsoft.graph.sitePage")
            .describe("A modern SharePoint page.")
            .properties([
                ("promotionKind", T::enumeration("PagePromotionType")),
                ("showComments", T::Bool),
                ("showRecommendedPages", T::Bool),
                ("thumbnailWebUrl", T::String),
                ("canvasLayout", model("CanvasLayout")),
                ("webParts", many(model("WebPart"))),
            ]),
        ModelType::entity("CanvasLayout")
            .base("Entity")
            .odata_type("#microsoft.graph.canvasLayout")
            .describe("The layout of a site page.")
            .properties([
                ("horizontalSections", many(model("HorizontalSection"))),
                ("verticalSection", model("VerticalSection")),
            ]),
        ModelType::entity("HorizontalSection")
            .base("Entity")
            .odata_type("#microsoft.graph.horizontalSection")
            .describe("A horizontal section of a page canvas.")
            .properties([
                ("emphasis", T::enumeration("SectionEmphasisType")),
                ("layout", T::enumeration("HorizontalSectionLayoutType")),
                ("columns", many(model("HorizontalSectionColumn"))),
            ]),
        ModelType::entity("HorizontalSectionColumn")
            .base("Entity")
            .odata_type("#microsoft.graph.horizontalSectionColumn")
            .describe("A column of a horizontal section.")
            .properties([("width", T::Int32), ("webparts", many(model("WebPart")))]),
        ModelType::entity("VerticalSection")
            .base("Entity")
            .odata_type("#microsoft.graph.verticalSection")
            .describe("The vertical section of a page canvas.")
            .properties([
                ("emphasis", T::enumeration("SectionEmphasisType")),
                ("webparts", many(model("WebPart"))),
            ]),
        ModelType::entity("WebPart")
            .base("Entity")
            .odata_type("#microsoft.graph.webPart")
            .describe("A component placed on a page canvas."),
        ModelType::entity("TextWebPart")
            .base("WebPart")
            .odata_type("#microsoft.graph.textWebPart")
            .describe("A web part holding formatted text.")
            .properties([("innerHtml", T::String)]),
        ModelType::entity("StandardWebPart")
            .base("WebPart")
            .odata_type("#microsoft.graph.standardWebPart")
            .describe("A web part with typed data.")
            .properties([
                ("containerTextWebPartId", T::String),
                ("data", model("WebPartData")),
                ("webPartType", T::String),
            ]),
        ModelType::entity("Store")
            .base("Entity")
            .odata_type("#microsoft.graph.termStore.store")
            .describe("The taxonomy term store of a site.")
            .properties([
                ("defaultLanguageTag", T::String),
                ("languageTags", many(T::String)),
                ("groups", many(model("Group"))),
                ("sets", many(model("Set"))),
            ]),
        ModelType::entity("Group")
            .base("Entity")
            .odata_type("#microsoft.graph.termStore.group")
            .describe("A group of term sets.")
            .properties([
                ("createdDateTime", T::DateTime),
                ("description", T::String),
                ("displayName", T::String),
                ("parentSiteId", T::String),
                ("scope", T::enumeration("TermGroupScope")),
                ("sets", many(model("Set"))),
            ]),
        ModelType::entity("Set")
            .base("Entity")
            .odata_type("#microsoft.graph.termStore.set")
            .describe("A set of terms.")
            .properties([
                ("createdDateTime", T::DateTime),
                ("description", T::String),
                ("localizedNames", many(model("LocalizedName"))),
                ("properties", many(model("KeyValue"))),
                ("children", many(model("Term"))),
                ("parentGroup", model("Group")),
                ("relations", many(model("Relation"))),
                ("terms", many(model("Term"))),
            ]),
        ModelType::entity("Term")
            .base("Entity")
            .odata_type("#microsoft.graph.termStore.term")
            .describe("A taxonomy term.")
            .properties([
                ("createdDateTime", T::DateTime),
                ("descriptions", many(model("LocalizedDescription"))),
                ("labels", many(model("LocalizedLabel"))),
                ("lastModifiedDateTime", T::DateTime),
                ("properties", many(model("KeyValue"))),
                ("children", many(model("Term"))),
                ("relations", many(model("Relation"))),
                ("set", model("Set")),
            ]),
        ModelType::entity("Relation")
            .base("Entity")
            .odata_type("#microsoft.graph.termStore.relation")
            .describe("A pin or reuse relation between terms.")
            .properties([
                ("relationship", T::enumeration("RelationType")),
                ("fromTerm", model("Term")),
                ("set", model("Set")),
                ("toTerm", model("Term")),
            ]),
    ]
}

fn value_types() -> Vec<ModelType> {
    vec![
        ModelType::complex("IdentitySet")
            .odata_type("#microsoft.graph.identitySet")
            .describe("The identities of an actor.")
            .properties([
                ("application", model("Identity")),
                ("device", model("Identity")),
                ("user", model("Identity")),
            ]),
        ModelType::complex("Identity")
            .odata_type("#microsoft.graph.identity")
            .describe("A user, device or application identity.")
            .properties([("displayName", T::String), ("id", T::String)]),
        ModelType::complex("ItemReference")
            .odata_type("#microsoft.graph.itemReference")
            .describe("Information needed to address an item.")
            .properties([
                ("driveId", T::String),
                ("driveType", T::String),
                ("id", T::String),
                ("name", T::String),
                ("path", T::String),
                ("shareId", T::String),
                ("sharepointIds", model("SharepointIds")),
                ("siteId", T::String),
            ]),
        ModelType::complex("SharepointIds")
            .odata_type("#microsoft.graph.sharepointIds")
            .describe("SharePoint REST identifiers of an item.")
            .properties([
                ("listId", T::String),
                ("listItemId", T::String),
                ("listItemUniqueId", T::String),
                ("siteId", T::String),
                ("siteUrl", T::String),
                ("tenantId", T::String),
                ("webId", T::String),
            ]),
        ModelType::complex("Root")
            .odata_type("#microsoft.graph.root")
            .describe("Marks the root of a site collection or drive."),
        ModelType::complex("SiteCollection")
            .odata_type("#microsoft.graph.siteCollection")
            .describe("Details of a site collection.")
            .properties([
                ("dataLocationCode", T::String),
                ("hostname", T::String),
                ("root", model("Root")),
            ]),
        ModelType::complex("ListInfo")
            .odata_type("#microsoft.graph.listInfo")
            .describe("Additional list information.")
            .properties([
                ("contentTypesEnabled", T::Bool),
                ("hidden", T::Bool),
                ("template", T::String),
            ]),
        ModelType::complex("ContentTypeInfo")
            .odata_type("#microsoft.graph.contentTypeInfo")
            .describe("The content type of a list item.")
            .properties([("id", T::String), ("name", T::String)]),
        ModelType::complex("Quota")
            .odata_type("#microsoft.graph.quota")
            .describe("Storage quota of a drive.")
            .properties([
                ("deleted", T::Int64),
                ("remaining", T::Int64),
                ("state", T::String),
                ("total", T::Int64),
                ("used", T::Int64),
            ]),
        ModelType::complex("File")
            .odata_type("#microsoft.graph.file")
            .describe("File metadata of a drive item.")
            .properties([("mimeType", T::String), ("processingMetadata", T::Bool)]),
        ModelType::complex("Folder")
            .odata_type("#microsoft.graph.folder")
            .describe("Folder metadata of a drive item.")
            .properties([("childCount", T::Int32)]),
        ModelType::complex("ItemActionStat")
            .odata_type("#microsoft.graph.itemActionStat")
            .describe("Counts for one kind of action.")
            .properties([("actionCount", T::Int32), ("actorCount", T::Int32)]),
        ModelType::complex("IncompleteData")
            .odata_type("#microsoft.graph.incompleteData")
            .describe("Marks statistics computed from incomplete data.")
            .properties([("missingDataBeforeDateTime", T::DateTime), ("wasThrottled", T::Bool)]),
        ModelType::complex("TextColumn")
            .odata_type("#microsoft.graph.textColumn")
            .describe("Settings of a text column.")
            .properties([
                ("allowMultipleLines", T::Bool),
                ("appendChangesToExistingText", T::Bool),
                ("linesForEditing", T::Int32),
                ("maxLength", T::Int32),
                ("textType", T::String),
            ]),
        ModelType::complex("NumberColumn")
            .odata_type("#microsoft.graph.numberColumn")
            .describe("Settings of a number column.")
            .properties([
                ("decimalPlaces", T::String),
                ("displayAs", T::String),
                ("maximum", T::Double),
                ("minimum", T::Double),
            ]),
        ModelType::complex("ContentTypeOrder")
            .odata_type("#microsoft.graph.contentTypeOrder")
            .describe("Position of a content type.")
            .properties([("default", T::Bool), ("position", T::Int32)]),
        ModelType::complex("SharingLink")
            .odata_type("#microsoft.graph.sharingLink")
            .describe("A sharing link.")
            .properties([
                ("application", model("Identity")),
                ("preventsDownload", T::Bool),
                ("scope", T::String),
                ("type", T::String),
                ("webHtml", T::String),
                ("webUrl", T::String),
            ]),
        ModelType::complex("ExternalLink")
            .odata_type("#microsoft.graph.externalLink")
            .describe("A link to open a OneNote resource.")
            .properties([("href", T::String)]),
        ModelType::complex("NotebookLinks")
            .odata_type("#microsoft.graph.notebookLinks")
            .describe("Links for opening a notebook.")
            .properties([
                ("oneNoteClientUrl", model("ExternalLink")),
                ("oneNoteWebUrl", model("ExternalLink")),
            ]),
        ModelType::complex("SectionLinks")
            .odata_type("#microsoft.graph.sectionLinks")
            .describe("Links for opening a section.")
            .properties([
                ("oneNoteClientUrl", model("ExternalLink")),
                ("oneNoteWebUrl", model("ExternalLink")),
            ]),
        ModelType::complex("PageLinks")
            .odata_type("#microsoft.graph.pageLinks")
            .describe("Links for opening a page.")
            .properties([
                ("oneNoteClientUrl", model("ExternalLink")),
                ("oneNoteWebUrl", model("ExternalLink")),
            ]),
        ModelType::complex("PublicationFacet")
            .odata_type("#microsoft.graph.publicationFacet")
            .describe("Publishing state of a page.")
            .properties([
                ("checkedOutBy", model("IdentitySet")),
                ("level", T::String),
                ("versionId", T::String),
            ]),
        ModelType::complex("WebPartData")
            .odata_type("#microsoft.graph.webPartData")
            .describe("Data of a standard web part.")
            .properties([
                ("dataVersion", T::String),
                ("description", T::String),
                ("properties", T::Json),
                ("serverProcessedContent", T::Json),
                ("title", T::String),
            ]),
        ModelType::complex("LocalizedName")
            .odata_type("#microsoft.graph.termStore.localizedName")
            .describe("A localized name of a term set.")
            .properties([("languageTag", T::String), ("name", T::String)]),
        ModelType::complex("KeyValue")
            .odata_type("#microsoft.graph.keyValue")
            .describe("A key-value pair.")
            .properties([("key", T::String), ("value", T::String)]),
        ModelType::complex("LocalizedDescription")
            .odata_type("#microsoft.graph.termStore.localizedDescription")
            .describe("A localized description of a term.")
            .properties([("description", T::String), ("languageTag", T::String)]),
        ModelType::complex("LocalizedLabel")
            .odata_type("#microsoft.graph.termStore.localizedLabel")
            .describe("A localized label of a term.")
            .properties([("isDefault", T::Bool), ("languageTag", T::String), ("name", T::String)]),
    ]
}

fn responses() -> Vec<ModelType> {
    let mut models = vec![
        ModelType::complex("BaseCollectionPaginationCountResponse")
            .describe("A page of a collection.")
            .properties([("@odata.count", T::Int64), ("@odata.nextLink", T::String)]),
    ];
    models.extend(PAGED_ITEMS.iter().map(|item| {
        ModelType::complex(format!("{item}CollectionResponse"))
            .base("BaseCollectionPaginationCountResponse")
            .properties([("value", many(model(item)))])
    }));
    models.extend([
        ModelType::complex("BaseDeltaFunctionResponse")
            .describe("A page of a delta query.")
            .properties([("@odata.deltaLink", T::String), ("@odata.nextLink", T::String)]),
        ModelType::complex("DeltaGetResponse")
            .base("BaseDeltaFunctionResponse")
            .properties([("value", many(model("Site")))]),
        ModelType::complex("DeltaResponse")
            .base("DeltaGetResponse")
            .describe("Deprecated alias of `DeltaGetResponse`."),
        ModelType::complex("AddPostRequestBody").properties([("value", many(model("Site")))]),
        ModelType::complex("AddPostResponse")
            .base("BaseCollectionPaginationCountResponse")
            .properties([("value", many(model("Site")))]),
        ModelType::complex("RemovePostRequestBody").properties([("value", many(model("Site")))]),
        ModelType::complex("RemovePostResponse")
            .base("BaseCollectionPaginationCountResponse")
            .properties([("value", many(model("Site")))]),
        ModelType::complex("GetCompatibleHubContentTypesGetResponse")
            .base("BaseCollectionPaginationCountResponse")
            .properties([("value", many(model("ContentType")))]),
        ModelType::complex("GetActivitiesByIntervalGetResponse")
            .base("BaseCollectionPaginationCountResponse")
            .properties([("value", many(model("ItemActivityStat")))]),
    ]);
    models
}

pub fn enums() -> Vec<EnumType> {
    vec![
        EnumType::new(
            "ColumnTypes",
            &[
                "note", "text", "choice", "multichoice", "number", "currency", "dateTime", "lookup",
                "boolean", "user", "url", "calculated", "location", "geolocation", "term",
                "multiterm", "thumbnail", "approvalStatus", "unknownFutureValue",
            ],
        )
        .describe("The type of a column."),
        EnumType::new(
            "OnenoteUserRole",
            &["None", "Owner", "Contributor", "Reader"],
        )
        .describe("The current user's role on a notebook."),
        EnumType::new(
            "PageLayoutType",
            &["microsoftReserved", "article", "home", "unknownFutureValue"],
        )
        .describe("The layout of a site page."),
        EnumType::new(
            "PagePromotionType",
            &["microsoftReserved", "page", "newsPost", "unknownFutureValue"],
        )
        .describe("How a page is promoted."),
        EnumType::new(
            "SectionEmphasisType",
            &["none", "neutral", "soft", "strong", "unknownFutureValue"],
        )
        .describe("Background emphasis of a section."),
        EnumType::new(
            "HorizontalSectionLayoutType",
            &[
                "none", "oneColumn", "twoColumns", "threeColumns", "oneThirdLeftColumn",
                "oneThirdRightColumn", "fullWidth", "unknownFutureValue",
            ],
        )
        .describe("Column layout of a horizontal section."),
        EnumType::new(
            "TermGroupScope",
            &["global", "system", "siteCollection", "unknownFutureValue"],
        )
        .describe("Visibility of a term group."),
        EnumType::new(
            "RelationType",
            &["pin", "reuse", "unknownFutureValue"],
        )
        .describe("Kind of a term relation."),
    ]
}
