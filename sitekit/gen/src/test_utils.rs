//! Shared fixtures for sitekit-gen tests.
//!
//! The fixture service is a small widget store: a collection with an
//! indexer, an item with read, update and delete, and a polymorphic model.

use proc_macro2::TokenStream;
use sitekit_define::{
    EnumType, ModelType, Navigation, Operation, PropertyType, QueryOption, RequestBody, Resource,
    ResponseKind, RestMethod, ServiceDescription,
};

use crate::output::{format_code, validate_code};

/// The keyed item resource of the fixture service.
pub fn make_item_resource() -> Resource {
    Resource::new(
        "WidgetItem",
        "widgets",
        "{+baseurl}/widgets/{widget%2Did}{?%24expand,%24select}",
    )
    .describe("Provides operations to manage a single widget.")
    .operation(
        Operation::new(RestMethod::Get, ResponseKind::model("Widget"))
            .describe("Get a widget")
            .queries(QueryOption::item()),
    )
    .operation(
        Operation::new(RestMethod::Patch, ResponseKind::model("Widget"))
            .describe("Update a widget")
            .body(RequestBody::Model("Widget".into())),
    )
    .operation(Operation::new(RestMethod::Delete, ResponseKind::Empty).describe("Delete a widget"))
}

/// A minimal but complete service description.
pub fn make_service() -> ServiceDescription {
    ServiceDescription::new("Widgets", "WidgetsClient", "https://api.example.com/v1")
        .describe("Widget store")
        .module("widgets", "Widget collection and items.")
        .root_navigation(Navigation::property("widgets", "Widgets"))
        .resource(
            Resource::new("Widgets", "widgets", "{+baseurl}/widgets{?%24top,%24count}")
                .describe("Provides operations to manage the widget collection.")
                .operation(
                    Operation::new(RestMethod::Get, ResponseKind::model("WidgetCollectionResponse"))
                        .describe("List widgets")
                        .query(QueryOption::top())
                        .query(QueryOption::count()),
                )
                .navigation(Navigation::indexer(
                    "by_widget_id",
                    "WidgetItem",
                    "widget%2Did",
                    "widget_id",
                )),
        )
        .resource(make_item_resource())
        .model(
            ModelType::entity("Widget")
                .odata_type("#example.widget")
                .describe("A widget.")
                .properties([
                    ("name", PropertyType::String),
                    ("type", PropertyType::enumeration("WidgetKind")),
                    ("eTag", PropertyType::String),
                ]),
        )
        .model(
            ModelType::entity("Gizmo")
                .base("Widget")
                .odata_type("#example.gizmo")
                .properties([("size", PropertyType::Int32)]),
        )
        .model(ModelType::complex("WidgetCollectionResponse").properties([
            ("@odata.nextLink", PropertyType::String),
            ("value", PropertyType::collection_of(PropertyType::model("Widget"))),
        ]))
        .enums([EnumType::new("WidgetKind", &["plain", "fancy"])])
        .error_mapping("XXX", "ODataError")
}

/// Formats a token stream the way generated files are formatted.
pub fn render(tokens: &TokenStream) -> String {
    let file = validate_code(tokens).unwrap();
    format_code(&file)
}

/// Drops all whitespace so assertions survive prettyplease line wrapping.
pub fn squash(code: &str) -> String {
    code.chars().filter(|c| !c.is_whitespace()).collect()
}
