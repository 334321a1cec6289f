//! Core types for service descriptions.
//!
//! - [`ServiceDescription`] - The top-level description handed to the generator
//! - [`RestMethod`] - HTTP method enumeration
//! - [`ErrorMapping`] - One entry of the service's error map

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::auth::AuthStrategy;
use crate::resource::Resource;
use crate::schema::{EnumType, ModelType};

/// HTTP methods a resource can expose.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use sitekit_define::RestMethod;
///
/// assert_eq!(RestMethod::from_str("PATCH").unwrap(), RestMethod::Patch);
/// assert_eq!(RestMethod::Delete.to_string(), "DELETE");
/// assert_eq!(RestMethod::Get.verb(), "get");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// HTTP GET - Retrieve a resource
    Get,
    /// HTTP POST - Create a resource or invoke an action
    Post,
    /// HTTP PUT - Replace a resource (stream uploads)
    Put,
    /// HTTP PATCH - Partially update a resource
    Patch,
    /// HTTP DELETE - Remove a resource
    Delete,
}

impl RestMethod {
    /// Lowercase verb used for generated method names (`get`, `post`, ...).
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Patch => "patch",
            Self::Delete => "delete",
        }
    }

    /// PascalCase verb used in generated type names (`Get`, `Post`, ...).
    pub fn pascal(&self) -> &'static str {
        match self {
            Self::Get => "Get",
            Self::Post => "Post",
            Self::Put => "Put",
            Self::Patch => "Patch",
            Self::Delete => "Delete",
        }
    }
}

/// Maps a status key (`"404"`, `"4XX"`, `"XXX"`) to the error model decoded
/// for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMapping {
    pub status_key: String,
    pub error_type: String,
}

impl ErrorMapping {
    pub fn new(status_key: impl Into<String>, error_type: impl Into<String>) -> Self {
        Self {
            status_key: status_key.into(),
            error_type: error_type.into(),
        }
    }
}

/// A generated module of request builders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceModule {
    /// Module identifier (snake_case).
    pub name: String,
    pub description: String,
}

/// A complete service description.
///
/// Captures everything needed to _generate_ a request-builder client: the
/// resource tree rooted at the client, the models exchanged with it, and the
/// error map shared by every operation.
///
/// ## Examples
///
/// ```
/// use sitekit_define::{Navigation, Resource, ServiceDescription};
///
/// let service = ServiceDescription::new("Sites", "SitesServiceClient", "https://graph.microsoft.com/v1.0")
///     .resource(Resource::new("Sites", "sites", "{+baseurl}/sites"))
///     .root_navigation(Navigation::property("sites", "Sites"));
///
/// assert_eq!(service.resources.len(), 1);
/// assert!(service.find_resource("Sites").is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceDescription {
    /// Name of the service, used in documentation (e.g., "Sites").
    pub name: String,
    /// Human-readable description of the service.
    pub description: String,
    /// Name of the generated root client struct.
    pub client_name: String,
    /// Default service root used by the runtime adapter.
    pub base_url: String,
    /// Link to the service's documentation (optional).
    pub docs_url: Option<String>,
    /// Authentication the service expects.
    pub auth: AuthStrategy,
    /// Environment variables the bearer token is read from, in fallback order.
    pub env_auth: Vec<String>,
    /// Generated modules and their one-line summaries, in documentation order.
    pub modules: Vec<ServiceModule>,
    /// Accessors exposed directly on the root client.
    pub root_navigations: Vec<crate::resource::Navigation>,
    /// Every request builder, one per URL template.
    pub resources: Vec<Resource>,
    /// Entity and complex types.
    pub models: Vec<ModelType>,
    /// Enumerated types.
    pub enums: Vec<EnumType>,
    /// The error map applied to every operation.
    pub error_mappings: Vec<ErrorMapping>,
}

impl ServiceDescription {
    pub fn new(
        name: impl Into<String>,
        client_name: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            client_name: client_name.into(),
            base_url: base_url.into(),
            docs_url: None,
            auth: AuthStrategy::None,
            env_auth: Vec::new(),
            modules: Vec::new(),
            root_navigations: Vec::new(),
            resources: Vec::new(),
            models: Vec::new(),
            enums: Vec::new(),
            error_mappings: Vec::new(),
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn docs_url(mut self, url: impl Into<String>) -> Self {
        self.docs_url = Some(url.into());
        self
    }

    pub fn auth(mut self, auth: AuthStrategy, env_auth: &[&str]) -> Self {
        self.auth = auth;
        self.env_auth = env_auth.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Declares a generated module. Resources name their module by `name`.
    pub fn module(mut self, name: &str, description: &str) -> Self {
        self.modules.push(ServiceModule {
            name: name.to_string(),
            description: description.to_string(),
        });
        self
    }

    pub fn root_navigation(mut self, navigation: crate::resource::Navigation) -> Self {
        self.root_navigations.push(navigation);
        self
    }

    pub fn resource(mut self, resource: Resource) -> Self {
        self.resources.push(resource);
        self
    }

    pub fn resources(mut self, resources: impl IntoIterator<Item = Resource>) -> Self {
        self.resources.extend(resources);
        self
    }

    pub fn model(mut self, model: ModelType) -> Self {
        self.models.push(model);
        self
    }

    pub fn models(mut self, models: impl IntoIterator<Item = ModelType>) -> Self {
        self.models.extend(models);
        self
    }

    pub fn enums(mut self, enums: impl IntoIterator<Item = EnumType>) -> Self {
        self.enums.extend(enums);
        self
    }

    pub fn error_mapping(mut self, status_key: &str, error_type: &str) -> Self {
        self.error_mappings.push(ErrorMapping::new(status_key, error_type));
        self
    }

    pub fn find_resource(&self, name: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.name == name)
    }

    pub fn find_model(&self, name: &str) -> Option<&ModelType> {
        self.models.iter().find(|m| m.name == name)
    }

    pub fn find_enum(&self, name: &str) -> Option<&EnumType> {
        self.enums.iter().find(|e| e.name == name)
    }

    /// Models that name `base` as their direct base type.
    pub fn derived_models<'a>(&'a self, base: &str) -> Vec<&'a ModelType> {
        self.models
            .iter()
            .filter(|m| m.base.as_deref() == Some(base))
            .collect()
    }

    /// Returns `true` when a subtype of `name` carries a discriminator, so
    /// payloads typed as `name` may hold one of several concrete shapes.
    pub fn is_polymorphic(&self, name: &str) -> bool {
        self.descendants(name).iter().any(|m| m.odata_type.is_some())
    }

    /// Every transitive subtype of `name`, depth first.
    pub fn descendants<'a>(&'a self, name: &str) -> Vec<&'a ModelType> {
        let mut out = Vec::new();
        for child in self.derived_models(name) {
            out.push(child);
            out.extend(self.descendants(&child.name));
        }
        out
    }

    /// The base chain of `name`, root first, ending with the model itself.
    pub fn lineage(&self, name: &str) -> Vec<&ModelType> {
        let mut chain = Vec::new();
        let mut current = self.find_model(name);
        while let Some(model) = current {
            if chain.iter().any(|m: &&ModelType| m.name == model.name) {
                break;
            }
            chain.push(model);
            current = model.base.as_deref().and_then(|b| self.find_model(b));
        }
        chain.reverse();
        chain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ModelType, Property, PropertyType};
    use strum::IntoEnumIterator;

    fn service() -> ServiceDescription {
        ServiceDescription::new("Test", "TestClient", "https://api.example.com")
            .model(ModelType::entity("Entity").property(Property::new("id", PropertyType::String)))
            .model(ModelType::entity("WebPart").base("Entity").odata_type("#x.webPart"))
            .model(ModelType::entity("TextWebPart").base("WebPart").odata_type("#x.textWebPart"))
    }

    #[test]
    fn methods_iterate_in_declaration_order() {
        let verbs: Vec<_> = RestMethod::iter().map(|m| m.verb()).collect();
        assert_eq!(verbs, ["get", "post", "put", "patch", "delete"]);
    }

    #[test]
    fn methods_serialize_uppercase() {
        let json = serde_json::to_string(&RestMethod::Patch).unwrap();
        assert_eq!(json, "\"PATCH\"");
        let back: RestMethod = serde_json::from_str("\"DELETE\"").unwrap();
        assert_eq!(back, RestMethod::Delete);
    }

    #[test]
    fn lineage_is_root_first() {
        let service = service();
        let names: Vec<_> = service.lineage("TextWebPart").iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Entity", "WebPart", "TextWebPart"]);
    }

    #[test]
    fn polymorphism_follows_derived_types() {
        let service = service();
        assert!(service.is_polymorphic("WebPart"));
        assert!(!service.is_polymorphic("TextWebPart"));
        assert_eq!(service.descendants("Entity").len(), 2);
    }

    #[test]
    fn descendants_outlive_the_queried_name() {
        let service = service();
        let found = {
            let name = String::from("WebPart");
            service.descendants(&name)
        };
        let names: Vec<_> = found.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["TextWebPart"]);
        assert_eq!(service.derived_models("Entity").len(), 1);
    }
}
