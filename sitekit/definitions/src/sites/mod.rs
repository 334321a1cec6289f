//! Sites service definition.
//!
//! SharePoint sites as exposed by the Microsoft Graph v1.0 REST surface: the
//! sites collection and every navigation reachable from a site item
//! (analytics, columns, content types, the default drive, lists, OneNote,
//! pages, permissions and the term store).

mod models;
mod resources;

pub use models::{enums, models};
pub use resources::resources;

use sitekit_define::{AuthStrategy, Navigation, ServiceDescription};

/// Environment variables the bearer token is read from, in fallback order.
pub const TOKEN_ENV: [&str; 2] = ["SITES_ACCESS_TOKEN", "GRAPH_ACCESS_TOKEN"];

/// Creates the Sites service description.
///
/// ## Examples
///
/// ```rust
/// use sitekit_definitions::sites::define_sites_service;
///
/// let service = define_sites_service();
/// assert_eq!(service.client_name, "SitesServiceClient");
/// assert!(service.find_resource("SiteItem").is_some());
/// ```
pub fn define_sites_service() -> ServiceDescription {
    ServiceDescription::new("Sites", "SitesServiceClient", "https://graph.microsoft.com/v1.0")
        .describe("Typed request builders for SharePoint sites and their content.")
        .docs_url("https://learn.microsoft.com/graph/api/resources/sharepoint")
        .auth(
            AuthStrategy::BearerToken {
                scopes: vec!["https://graph.microsoft.com/.default".to_string()],
            },
            &TOKEN_ENV,
        )
        .module(
            "sites",
            "Sites collection, site items, subsites and the delta, add and remove functions.",
        )
        .module("analytics", "Item analytics and activity statistics of a site.")
        .module("columns", "Column definitions of a site.")
        .module("content_types", "Content types of a site and compatible hub content types.")
        .module("drive", "The default document library of a site and its root folder content.")
        .module("lists", "Lists, list items, item fields and item activity.")
        .module("onenote", "OneNote notebooks, section groups, sections and pages of a site.")
        .module("pages", "Site pages and their canvas layout, sections and web parts.")
        .module("permissions", "Sharing permissions of a site.")
        .module("term_store", "The taxonomy term store: groups, sets, terms and relations.")
        .root_navigation(Navigation::property("sites", "Sites"))
        .resources(resources())
        .models(models())
        .enums(enums())
        .error_mapping("XXX", "ODataError")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use sitekit_define::{
        NavigationKind, PropertyType, RequestBody, ResponseKind, RestMethod,
    };

    use super::*;

    #[test]
    fn service_has_correct_metadata() {
        let service = define_sites_service();

        assert_eq!(service.name, "Sites");
        assert_eq!(service.base_url, "https://graph.microsoft.com/v1.0");
        assert_eq!(service.env_auth, TOKEN_ENV);
        assert!(service.auth.requires_credentials());
        assert_eq!(service.error_mappings.len(), 1);
        assert_eq!(service.error_mappings[0].status_key, "XXX");
    }

    #[test]
    fn builder_names_are_unique() {
        let service = define_sites_service();
        let mut seen = HashSet::new();
        for resource in &service.resources {
            assert!(seen.insert(resource.builder_name()), "duplicate {}", resource.name);
        }
        assert_eq!(service.resources.len(), 89);
    }

    #[test]
    fn every_resource_belongs_to_a_declared_module() {
        let service = define_sites_service();
        let modules: HashSet<_> = service.modules.iter().map(|m| m.name.as_str()).collect();
        for resource in &service.resources {
            assert!(modules.contains(resource.module.as_str()), "{}", resource.name);
        }
    }

    #[test]
    fn navigations_target_known_resources() {
        let service = define_sites_service();
        let navigations = service
            .resources
            .iter()
            .flat_map(|r| r.navigations.iter())
            .chain(service.root_navigations.iter());
        for navigation in navigations {
            assert!(
                service.find_resource(&navigation.target).is_some(),
                "unknown target {}",
                navigation.target
            );
        }
    }

    #[test]
    fn navigation_keys_appear_in_child_templates() {
        let service = define_sites_service();
        for resource in &service.resources {
            for navigation in &resource.navigations {
                let Some(child) = service.find_resource(&navigation.target) else {
                    continue;
                };
                let variables = child.path_variables();
                for key in navigation.bound_keys() {
                    assert!(variables.contains(&key), "{} lacks {key}", child.name);
                }
            }
        }
    }

    #[test]
    fn referenced_models_and_enums_exist() {
        let service = define_sites_service();
        for model in &service.models {
            if let Some(base) = &model.base {
                assert!(service.find_model(base).is_some(), "{} base {base}", model.name);
            }
            for property in &model.properties {
                match property.ty.referenced_name() {
                    Some(name) if matches!(strip(&property.ty), PropertyType::Enum(_)) => {
                        assert!(service.find_enum(name).is_some(), "enum {name}");
                    }
                    Some(name) => assert!(service.find_model(name).is_some(), "model {name}"),
                    None => {}
                }
            }
        }
        for operation in service.resources.iter().flat_map(|r| r.operations.iter()) {
            if let Some(name) = operation.response.model_name() {
                assert!(service.find_model(name).is_some(), "response {name}");
            }
            if let Some(RequestBody::Model(name)) = &operation.request {
                assert!(service.find_model(name).is_some(), "body {name}");
            }
        }
    }

    fn strip(ty: &PropertyType) -> &PropertyType {
        match ty {
            PropertyType::Collection(inner) => strip(inner),
            other => other,
        }
    }

    #[test]
    fn site_item_template_and_queries() {
        let service = define_sites_service();
        let item = service.find_resource("SiteItem").unwrap();

        assert_eq!(item.url_template, "{+baseurl}/sites/{site%2Did}{?%24expand,%24select}");
        assert_eq!(item.path_variables(), vec!["site%2Did"]);
        let get = item.find_operation(RestMethod::Get).unwrap();
        assert_eq!(get.response, ResponseKind::model("Site"));
        assert!(item.find_operation(RestMethod::Patch).is_some());
        assert!(item.find_operation(RestMethod::Delete).is_none());
    }

    #[test]
    fn collections_expose_count_and_indexer() {
        let service = define_sites_service();
        let lists = service.find_resource("Lists").unwrap();

        assert_eq!(
            lists.query_variables(),
            vec![
                "%24top", "%24skip", "%24search", "%24filter", "%24count", "%24orderby",
                "%24select", "%24expand"
            ]
        );
        let indexer = lists.navigations.iter().find(|n| n.method_name == "by_list_id").unwrap();
        assert_eq!(
            indexer.kind,
            NavigationKind::Indexer {
                key: "list%2Did".into(),
                param: "list_id".into()
            }
        );
        let counter = service.find_resource("ListsCount").unwrap();
        assert_eq!(counter.url_template, "{+baseurl}/sites/{site%2Did}/lists/$count{?%24search,%24filter}");
        assert_eq!(
            counter.operations[0].response,
            ResponseKind::Primitive(PropertyType::Int32)
        );
    }

    #[test]
    fn delta_keeps_a_deprecated_alias() {
        let service = define_sites_service();
        let delta = service.find_resource("Delta").unwrap();

        assert_eq!(delta.operations.len(), 2);
        assert_eq!(delta.operations[0].method_name(), "get_as_delta_get_response");
        let legacy = &delta.operations[1];
        assert_eq!(legacy.method_name(), "get");
        assert_eq!(
            legacy.deprecation.as_ref().map(|d| d.replacement.as_str()),
            Some("get_as_delta_get_response")
        );
        assert!(!delta.url_template.contains("%24expand"));
    }

    #[test]
    fn function_navigation_binds_every_argument() {
        let service = define_sites_service();
        let items = service.find_resource("ListItemsItem").unwrap();
        let activities = items
            .navigations
            .iter()
            .find(|n| n.target == "GetActivitiesByInterval")
            .unwrap();

        assert_eq!(
            activities.bound_keys(),
            vec!["startDateTime", "endDateTime", "interval"]
        );
    }

    #[test]
    fn content_segments_stream_bytes() {
        let service = define_sites_service();
        let content = service.find_resource("DriveRootContent").unwrap();

        assert_eq!(content.url_template, "{+baseurl}/sites/{site%2Did}/drive/root/content{?%24format}");
        let get = content.find_operation(RestMethod::Get).unwrap();
        assert_eq!(get.response, ResponseKind::Bytes);
        assert_eq!(get.accept_header(), "application/octet-stream, application/json");
        let put = content.find_operation(RestMethod::Put).unwrap();
        assert_eq!(put.request, Some(RequestBody::Stream));
    }

    #[test]
    fn read_only_collections_have_no_post() {
        let service = define_sites_service();
        for name in ["GroupSets", "SectionGroupSections"] {
            let resource = service.find_resource(name).unwrap();
            assert!(resource.find_operation(RestMethod::Post).is_none(), "{name}");
        }
        let groups = service.find_resource("TermGroupItem").unwrap();
        assert!(groups.find_operation(RestMethod::Patch).is_none());
    }

    #[test]
    fn web_parts_are_polymorphic() {
        let service = define_sites_service();

        assert!(service.is_polymorphic("WebPart"));
        assert!(service.is_polymorphic("BaseSitePage"));
        assert!(!service.is_polymorphic("DeltaGetResponse"));
        let lineage: Vec<_> = service.lineage("SitePage").iter().map(|m| m.name.as_str()).collect();
        assert_eq!(lineage, ["Entity", "BaseItem", "BaseSitePage", "SitePage"]);
    }
}
