//! Type mapping from description types to Rust types.

use std::collections::BTreeSet;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use sitekit_define::{
    ModelKind, ModelType, PropertyType, RequestBody, ResponseKind, ServiceDescription,
};

/// Resolves model names to generated Rust types.
///
/// A model is emitted behind an `Any{Name}` enum when some subtype carries an
/// `@odata.type` discriminator and the model is referenced by a property, a
/// response or a request body.
///
/// ## Examples
///
/// ```
/// use sitekit_definitions::define_sites_service;
/// use sitekit_gen::codegen::TypeResolver;
///
/// let service = define_sites_service();
/// let types = TypeResolver::new(&service);
/// assert!(types.is_any("WebPart"));
/// assert!(!types.is_any("Site"));
/// ```
pub struct TypeResolver<'a> {
    service: &'a ServiceDescription,
    any: BTreeSet<String>,
}

impl<'a> TypeResolver<'a> {
    pub fn new(service: &'a ServiceDescription) -> Self {
        let mut referenced = BTreeSet::new();
        for model in &service.models {
            for property in &model.properties {
                if let Some(name) = model_reference(&property.ty) {
                    referenced.insert(name.to_string());
                }
            }
        }
        for operation in service.resources.iter().flat_map(|r| r.operations.iter()) {
            if let Some(name) = operation.response.model_name() {
                referenced.insert(name.to_string());
            }
            if let Some(RequestBody::Model(name)) = &operation.request {
                referenced.insert(name.clone());
            }
        }
        let any = referenced
            .into_iter()
            .filter(|name| service.is_polymorphic(name))
            .collect();
        Self { service, any }
    }

    pub fn service(&self) -> &'a ServiceDescription {
        self.service
    }

    /// Whether `name` is wrapped in an `Any{name}` enum.
    pub fn is_any(&self, name: &str) -> bool {
        self.any.contains(name)
    }

    /// Every polymorphic base, in name order.
    pub fn any_models(&self) -> impl Iterator<Item = &str> {
        self.any.iter().map(String::as_str)
    }

    /// The variants of `Any{name}`: discriminated subtypes depth first, then the base.
    pub fn any_variants(&self, name: &str) -> Vec<&'a ModelType> {
        let mut variants: Vec<_> = self
            .service
            .descendants(name)
            .into_iter()
            .filter(|m| m.odata_type.is_some())
            .collect();
        variants.extend(self.service.find_model(name));
        variants
    }

    /// Name of the Rust type a model reference resolves to.
    pub fn model_type_name(&self, name: &str) -> String {
        if self.is_any(name) {
            format!("Any{name}")
        } else {
            name.to_string()
        }
    }

    pub fn model_ident(&self, name: &str) -> proc_macro2::Ident {
        format_ident!("{}", self.model_type_name(name))
    }

    /// Rust type of a model property (without the `Option` wrapper).
    ///
    /// Single entity references are boxed since entities may refer back to
    /// themselves; collections are not.
    pub fn property_type(&self, ty: &PropertyType) -> TokenStream {
        self.property_type_inner(ty, true)
    }

    fn property_type_inner(&self, ty: &PropertyType, boxed: bool) -> TokenStream {
        match ty {
            PropertyType::String | PropertyType::Duration => quote! { String },
            PropertyType::Bool => quote! { bool },
            PropertyType::Int32 => quote! { i32 },
            PropertyType::Int64 => quote! { i64 },
            PropertyType::Double => quote! { f64 },
            PropertyType::DateTime => quote! { chrono::DateTime<chrono::FixedOffset> },
            PropertyType::Date => quote! { chrono::NaiveDate },
            PropertyType::TimeOfDay => quote! { chrono::NaiveTime },
            PropertyType::Guid => quote! { uuid::Uuid },
            PropertyType::Json => quote! { serde_json::Value },
            PropertyType::Enum(name) => {
                let ident = format_ident!("{}", name);
                quote! { #ident }
            }
            PropertyType::Model(name) => {
                let ident = self.model_ident(name);
                let is_entity = self
                    .service
                    .find_model(name)
                    .is_some_and(|m| m.kind == ModelKind::Entity);
                if boxed && is_entity {
                    quote! { Box<#ident> }
                } else {
                    quote! { #ident }
                }
            }
            PropertyType::Collection(inner) => {
                let inner = self.property_type_inner(inner, false);
                quote! { Vec<#inner> }
            }
        }
    }

    /// Rust type an operation resolves to, or `None` for empty responses.
    pub fn response_type(&self, response: &ResponseKind) -> Option<TokenStream> {
        match response {
            ResponseKind::Model(name) => {
                let ident = self.model_ident(name);
                Some(quote! { #ident })
            }
            ResponseKind::Primitive(ty) => Some(self.property_type(ty)),
            ResponseKind::Bytes => Some(quote! { Bytes }),
            ResponseKind::Empty => None,
        }
    }
}

/// Model name a property refers to, looking through collections.
fn model_reference(ty: &PropertyType) -> Option<&str> {
    match ty {
        PropertyType::Model(name) => Some(name),
        PropertyType::Collection(inner) => model_reference(inner),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::make_service;

    #[test]
    fn referenced_polymorphic_base_becomes_any() {
        let service = make_service();
        let types = TypeResolver::new(&service);

        assert!(types.is_any("Widget"));
        assert!(!types.is_any("Gizmo"));
        assert_eq!(types.model_type_name("Widget"), "AnyWidget");
        let names: Vec<_> = types.any_variants("Widget").iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Gizmo", "Widget"]);
    }

    #[test]
    fn entity_references_are_boxed() {
        let service = make_service();
        let types = TypeResolver::new(&service);

        let single = types.property_type(&PropertyType::model("Gizmo")).to_string();
        assert_eq!(single, "Box < Gizmo >");
        let many = types
            .property_type(&PropertyType::collection_of(PropertyType::model("Gizmo")))
            .to_string();
        assert_eq!(many, "Vec < Gizmo >");
    }

    #[test]
    fn scalar_mapping() {
        let service = make_service();
        let types = TypeResolver::new(&service);

        assert_eq!(types.property_type(&PropertyType::Duration).to_string(), "String");
        assert_eq!(types.property_type(&PropertyType::Guid).to_string(), "uuid :: Uuid");
        assert_eq!(
            types.response_type(&ResponseKind::Primitive(PropertyType::Int32)).map(|t| t.to_string()),
            Some("i32".to_string())
        );
        assert!(types.response_type(&ResponseKind::Empty).is_none());
    }
}
