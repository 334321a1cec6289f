//! Validation of service descriptions.
//!
//! Runs before any code is generated so a broken description fails with a
//! message naming the offending resource instead of producing code that
//! does not compile.
//!
//! ## Validation Checks
//!
//! - **Builder names**: every resource generates a distinct builder type
//! - **Templates**: every URL template parses
//! - **Navigations**: targets exist and bound keys appear in the target template
//! - **Query options**: wire names appear in the template's `{?...}` block
//! - **Types**: referenced models and enums exist
//! - **Deprecations**: replacements name an operation on the same resource
//! - **Error map**: keys are status codes or class keys and map to `ODataError`
//!
//! ## Examples
//!
//! ```
//! use sitekit_definitions::define_sites_service;
//! use sitekit_gen::validation::validate_service;
//!
//! assert!(validate_service(&define_sites_service()).is_ok());
//! ```

use std::collections::HashSet;

use sitekit::template::UriTemplate;
use sitekit_define::{
    Navigation, PropertyType, RequestBody, Resource, ServiceDescription,
};
use tracing::debug;

use crate::codegen::errors::ODATA_ERROR;
use crate::errors::GeneratorError;
use crate::output::FIXED_MODULES;

/// Validates a service description before code generation.
///
/// ## Errors
///
/// Returns the first problem found, as a [`GeneratorError`].
pub fn validate_service(service: &ServiceDescription) -> Result<(), GeneratorError> {
    let mut builders = HashSet::new();
    for resource in &service.resources {
        if !builders.insert(resource.builder_name()) {
            return Err(GeneratorError::DuplicateBuilder {
                name: resource.builder_name(),
            });
        }
    }

    let modules: HashSet<_> = service.modules.iter().map(|m| m.name.as_str()).collect();
    if let Some(reserved) = FIXED_MODULES.iter().find(|m| modules.contains(*m)) {
        return Err(GeneratorError::invalid(
            &service.name,
            format!("module name '{reserved}' is reserved"),
        ));
    }
    for resource in &service.resources {
        if !modules.contains(resource.module.as_str()) {
            return Err(GeneratorError::invalid(
                &resource.name,
                format!("module '{}' is not declared", resource.module),
            ));
        }
        validate_template(resource)?;
        validate_operations(service, resource)?;
        for navigation in &resource.navigations {
            validate_navigation(service, &resource.name, navigation)?;
        }
    }
    for navigation in &service.root_navigations {
        validate_navigation(service, &service.client_name, navigation)?;
    }

    validate_models(service)?;

    if service.error_mappings.is_empty() {
        return Err(GeneratorError::invalid(&service.name, "error map is empty"));
    }
    for mapping in &service.error_mappings {
        if !is_status_key(&mapping.status_key) {
            return Err(GeneratorError::invalid(
                &service.name,
                format!("'{}' is not a status code or range key", mapping.status_key),
            ));
        }
        if mapping.error_type != ODATA_ERROR {
            return Err(GeneratorError::invalid(
                &service.name,
                format!("error type '{}' is not supported", mapping.error_type),
            ));
        }
    }

    debug!(
        resources = service.resources.len(),
        models = service.models.len(),
        "service description is valid"
    );
    Ok(())
}

fn validate_template(resource: &Resource) -> Result<(), GeneratorError> {
    UriTemplate::parse(&resource.url_template).map_err(|source| GeneratorError::Template {
        resource: resource.name.clone(),
        source,
    })?;
    if !resource.url_template.starts_with("{+baseurl}") {
        return Err(GeneratorError::invalid(
            &resource.name,
            "template must start with {+baseurl}",
        ));
    }
    Ok(())
}

fn validate_operations(
    service: &ServiceDescription,
    resource: &Resource,
) -> Result<(), GeneratorError> {
    let declared = resource.query_variables();
    let mut names = HashSet::new();
    for operation in &resource.operations {
        let name = operation.method_name();
        if !names.insert(name.clone()) {
            return Err(GeneratorError::invalid(
                &resource.name,
                format!("operation '{name}' is declared twice"),
            ));
        }
        for option in &operation.query {
            if !declared.contains(&option.wire_name.as_str()) {
                return Err(GeneratorError::invalid(
                    &resource.name,
                    format!("query option '{}' is not in the template", option.wire_name),
                ));
            }
        }
        if let Some(model) = operation.response.model_name() {
            require_model(service, &resource.name, model)?;
        }
        if let Some(RequestBody::Model(model)) = &operation.request {
            require_model(service, &resource.name, model)?;
        }
    }

    for operation in &resource.operations {
        let Some(deprecation) = &operation.deprecation else {
            continue;
        };
        let replacement = resource
            .operations
            .iter()
            .find(|o| o.method_name() == deprecation.replacement && o.deprecation.is_none());
        match replacement {
            Some(target) if target.method == operation.method => {}
            _ => {
                return Err(GeneratorError::invalid(
                    &resource.name,
                    format!(
                        "'{}' is deprecated in favour of unknown operation '{}'",
                        operation.method_name(),
                        deprecation.replacement
                    ),
                ));
            }
        }
    }
    Ok(())
}

fn validate_navigation(
    service: &ServiceDescription,
    owner: &str,
    navigation: &Navigation,
) -> Result<(), GeneratorError> {
    let Some(target) = service.find_resource(&navigation.target) else {
        return Err(GeneratorError::invalid(
            owner,
            format!(
                "navigation '{}' targets unknown resource '{}'",
                navigation.method_name, navigation.target
            ),
        ));
    };
    let variables = target.path_variables();
    for key in navigation.bound_keys() {
        if !variables.contains(&key) {
            return Err(GeneratorError::invalid(
                owner,
                format!(
                    "navigation '{}' binds '{key}' which {} does not declare",
                    navigation.method_name, target.name
                ),
            ));
        }
    }
    Ok(())
}

fn validate_models(service: &ServiceDescription) -> Result<(), GeneratorError> {
    for model in &service.models {
        if let Some(base) = &model.base {
            require_model(service, &model.name, base)?;
        }
        for property in &model.properties {
            match innermost(&property.ty) {
                PropertyType::Model(name) => require_model(service, &model.name, name)?,
                PropertyType::Enum(name) if service.find_enum(name).is_none() => {
                    return Err(GeneratorError::invalid(
                        &model.name,
                        format!("unknown enum '{name}'"),
                    ));
                }
                _ => {}
            }
        }
    }
    Ok(())
}

fn require_model(
    service: &ServiceDescription,
    owner: &str,
    name: &str,
) -> Result<(), GeneratorError> {
    if service.find_model(name).is_none() {
        return Err(GeneratorError::invalid(owner, format!("unknown model '{name}'")));
    }
    Ok(())
}

fn innermost(ty: &PropertyType) -> &PropertyType {
    match ty {
        PropertyType::Collection(inner) => innermost(inner),
        other => other,
    }
}

/// Accepts exact codes (`404`), class keys (`4XX`, `5XX`) and the wildcard `XXX`.
fn is_status_key(key: &str) -> bool {
    let bytes = key.as_bytes();
    if bytes.len() != 3 {
        return false;
    }
    match key {
        "XXX" | "4XX" | "5XX" => true,
        _ => bytes.iter().all(u8::is_ascii_digit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{make_item_resource, make_service};
    use sitekit_define::{Navigation, Operation, QueryOption, ResponseKind, RestMethod};

    // === happy path ===

    #[test]
    fn minimal_service_is_valid() {
        assert!(validate_service(&make_service()).is_ok());
    }

    #[test]
    fn sites_service_is_valid() {
        let service = sitekit_definitions::define_sites_service();
        assert!(validate_service(&service).is_ok());
    }

    // === structural errors ===

    #[test]
    fn duplicate_builder_is_rejected() {
        let service = make_service().resource(make_item_resource());
        let err = validate_service(&service).unwrap_err();
        assert!(matches!(err, GeneratorError::DuplicateBuilder { name } if name == "WidgetItemRequestBuilder"));
    }

    #[test]
    fn malformed_template_is_rejected() {
        let mut service = make_service();
        service.resources[0].url_template = "{+baseurl}/widgets/{id".to_string();
        let err = validate_service(&service).unwrap_err();
        assert!(matches!(err, GeneratorError::Template { .. }));
    }

    #[test]
    fn unknown_navigation_target_is_rejected() {
        let mut service = make_service();
        service.resources[0]
            .navigations
            .push(Navigation::property("gadgets", "Gadgets"));
        let err = validate_service(&service).unwrap_err();
        assert!(err.to_string().contains("unknown resource 'Gadgets'"));
    }

    #[test]
    fn indexer_key_must_appear_in_target() {
        let mut service = make_service();
        service.resources[0].navigations[0] =
            Navigation::indexer("by_widget_id", "WidgetItem", "gadget%2Did", "widget_id");
        let err = validate_service(&service).unwrap_err();
        assert!(err.to_string().contains("gadget%2Did"));
    }

    #[test]
    fn query_option_must_be_in_template() {
        let mut service = make_service();
        let op = Operation::new(RestMethod::Get, ResponseKind::model("Widget")).query(QueryOption::top());
        service.resources[1].operations = vec![op];
        let err = validate_service(&service).unwrap_err();
        assert!(err.to_string().contains("%24top"));
    }

    #[test]
    fn unknown_response_model_is_rejected() {
        let mut service = make_service();
        service.resources[1].operations = vec![Operation::new(RestMethod::Get, ResponseKind::model("Gadget"))];
        let err = validate_service(&service).unwrap_err();
        assert!(err.to_string().contains("unknown model 'Gadget'"));
    }

    #[test]
    fn deprecation_needs_live_replacement() {
        let mut service = make_service();
        service.resources[1].operations.push(
            Operation::new(RestMethod::Get, ResponseKind::model("Widget"))
                .named("get_legacy")
                .deprecated("get_newer", None),
        );
        let err = validate_service(&service).unwrap_err();
        assert!(err.to_string().contains("get_newer"));
    }

    #[test]
    fn reserved_module_name_is_rejected() {
        let service = make_service().module("models", "Clashes with the generated models module.");
        let err = validate_service(&service).unwrap_err();
        assert!(err.to_string().contains("'models' is reserved"));
    }

    #[test]
    fn unknown_error_type_is_rejected() {
        let service = make_service().error_mapping("404", "NotFoundError");
        let err = validate_service(&service).unwrap_err();
        assert!(err.to_string().contains("NotFoundError"));
    }

    #[test]
    fn status_keys() {
        assert!(is_status_key("XXX"));
        assert!(is_status_key("4XX"));
        assert!(is_status_key("404"));
        assert!(!is_status_key("40"));
        assert!(!is_status_key("4X4"));
    }
}
