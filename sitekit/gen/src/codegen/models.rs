//! Model generation: `models.rs` of the generated crate.
//!
//! Every model becomes a serde struct whose inherited properties are
//! flattened in root-first order, followed by an `additional_data` map that
//! keeps unknown properties. Polymorphic bases also get an `Any{Name}` enum
//! that decodes through the `@odata.type` discriminator.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use sitekit_define::{EnumType, ModelType};

use super::doc;
use super::types::TypeResolver;
use crate::naming::{field_ident, needs_rename, pascal_case};

/// Fallback enum value added for values introduced after generation.
const UNKNOWN_FUTURE_VALUE: &str = "unknownFutureValue";

/// Generates the complete `models.rs` module.
pub fn generate_models(types: &TypeResolver<'_>) -> TokenStream {
    let service = types.service();
    let has_any = types.any_models().next().is_some();
    let imports = if has_any {
        quote! { use sitekit::{AdditionalData, AdditionalDataHolder, discriminator_value}; }
    } else {
        quote! { use sitekit::{AdditionalData, AdditionalDataHolder}; }
    };

    let models = service.models.iter().map(|m| generate_model(types, m));
    let any_enums = types.any_models().map(|name| generate_any_enum(types, name));
    let enums = service.enums.iter().map(generate_enum);

    quote! {
        //! Entity, complex and enum types exchanged with the service.

        use serde::{Deserialize, Serialize};
        #imports

        #(#models)*
        #(#any_enums)*
        #(#enums)*
    }
}

/// Generates one model struct with its constructor and trait impls.
pub fn generate_model(types: &TypeResolver<'_>, model: &ModelType) -> TokenStream {
    let service = types.service();
    let name = format_ident!("{}", model.name);
    let description = model
        .description
        .clone()
        .unwrap_or_else(|| format!("The `{}` type.", model.name));
    let docs = doc(&description);

    let lineage = service.lineage(&model.name);
    let fields = lineage.iter().flat_map(|m| m.properties.iter()).map(|property| {
        let ident = field_ident(&property.name);
        let ty = types.property_type(&property.ty);
        let wire = &property.name;
        let serde = if needs_rename(wire, &ident) {
            quote! { #[serde(rename = #wire, skip_serializing_if = "Option::is_none")] }
        } else {
            quote! { #[serde(skip_serializing_if = "Option::is_none")] }
        };
        let field_doc = property.description.as_deref().map(doc);
        quote! {
            #field_doc
            #serde
            pub #ident: Option<#ty>,
        }
    });

    let constructor = match &model.odata_type {
        Some(odata_type) => quote! {
            /// Creates an empty value carrying its `@odata.type` discriminator.
            pub fn new() -> Self {
                Self {
                    odata_type: Some(#odata_type.to_string()),
                    ..Self::default()
                }
            }
        },
        None => quote! {
            /// Creates an empty value.
            pub fn new() -> Self {
                Self::default()
            }
        },
    };

    let alias_conversion = model
        .base
        .as_deref()
        .filter(|_| model.properties.is_empty())
        .map(|base| {
            let base_ident = format_ident!("{}", base);
            let moved = service
                .lineage(base)
                .into_iter()
                .flat_map(|m| m.properties.iter())
                .map(|p| field_ident(&p.name))
                .collect::<Vec<_>>();
            quote! {
                impl From<#base_ident> for #name {
                    fn from(value: #base_ident) -> Self {
                        Self {
                            odata_type: value.odata_type,
                            #( #moved: value.#moved, )*
                            additional_data: value.additional_data,
                        }
                    }
                }
            }
        });

    quote! {
        #docs
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct #name {
            #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
            pub odata_type: Option<String>,
            #(#fields)*
            #[serde(flatten)]
            pub additional_data: AdditionalData,
        }

        impl #name {
            #constructor
        }

        impl AdditionalDataHolder for #name {
            fn additional_data(&self) -> &AdditionalData {
                &self.additional_data
            }

            fn additional_data_mut(&mut self) -> &mut AdditionalData {
                &mut self.additional_data
            }
        }

        #alias_conversion
    }
}

/// Generates `Any{name}`, an untagged enum over the discriminated subtypes.
///
/// Decoding reads `@odata.type` first and falls back to the base type when
/// the discriminator is missing or unknown.
pub fn generate_any_enum(types: &TypeResolver<'_>, name: &str) -> TokenStream {
    let enum_name = format_ident!("Any{}", name);
    let base = format_ident!("{}", name);
    let variants = types.any_variants(name);
    let docs = doc(&format!(
        "A `{name}` or one of its derived types, selected by `@odata.type`."
    ));

    let idents: Vec<_> = variants.iter().map(|m| format_ident!("{}", m.name)).collect();
    let arms = variants
        .iter()
        .filter(|m| m.name != name)
        .filter_map(|m| {
            let ident = format_ident!("{}", m.name);
            m.odata_type.as_deref().map(|odata| {
                quote! { Some(#odata) => serde_json::from_value(value).map(Self::#ident), }
            })
        });

    quote! {
        #docs
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(untagged)]
        pub enum #enum_name {
            #( #idents(#idents), )*
        }

        impl #enum_name {
            /// The `@odata.type` discriminator of the wrapped value.
            pub fn odata_type(&self) -> Option<&str> {
                match self {
                    #( Self::#idents(value) => value.odata_type.as_deref(), )*
                }
            }
        }

        impl<'de> Deserialize<'de> for #enum_name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = serde_json::Value::deserialize(deserializer)?;
                let discriminator = discriminator_value(&value).map(str::to_owned);
                let decoded = match discriminator.as_deref() {
                    #(#arms)*
                    _ => serde_json::from_value(value).map(Self::#base),
                };
                decoded.map_err(serde::de::Error::custom)
            }
        }

        #(
            impl From<#idents> for #enum_name {
                fn from(value: #idents) -> Self {
                    Self::#idents(value)
                }
            }
        )*
    }
}

/// Generates a string enum with a catch-all variant.
pub fn generate_enum(enumeration: &EnumType) -> TokenStream {
    let name = format_ident!("{}", enumeration.name);
    let description = enumeration
        .description
        .clone()
        .unwrap_or_else(|| format!("The `{}` enumeration.", enumeration.name));
    let docs = doc(&description);

    let mut values: Vec<&str> = enumeration.values.iter().map(String::as_str).collect();
    if !values.contains(&UNKNOWN_FUTURE_VALUE) {
        values.push(UNKNOWN_FUTURE_VALUE);
    }
    let variants = values.iter().map(|value| {
        let variant = pascal_case(value);
        let ident = format_ident!("{}", variant);
        let rename = (variant != *value).then(|| quote! { #[serde(rename = #value)] });
        let other = (*value == UNKNOWN_FUTURE_VALUE).then(|| quote! { #[serde(other)] });
        quote! {
            #rename
            #other
            #ident,
        }
    });

    quote! {
        #docs
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum #name {
            #(#variants)*
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{make_service, render};

    // === struct tests ===

    #[test]
    fn derived_model_flattens_lineage() {
        let service = make_service();
        let types = TypeResolver::new(&service);
        let gizmo = service.find_model("Gizmo").unwrap();
        let code = render(&generate_model(&types, gizmo));

        let name = code.find("pub name: Option<String>").unwrap();
        let size = code.find("pub size: Option<i32>").unwrap();
        assert!(name < size);
        assert!(code.contains("pub r#type: Option<WidgetKind>"));
        assert!(code.contains("Some(\"#example.gizmo\".to_string())"));
        assert!(code.contains("#[serde(flatten)]"));
    }

    #[test]
    fn rename_only_where_wire_differs() {
        let service = make_service();
        let types = TypeResolver::new(&service);
        let widget = service.find_model("Widget").unwrap();
        let code = render(&generate_model(&types, widget));

        assert!(code.contains("rename = \"eTag\""));
        assert!(!code.contains("rename = \"name\""));
        assert!(!code.contains("rename = \"type\""));
    }

    #[test]
    fn collection_of_polymorphic_base_uses_any() {
        let service = make_service();
        let types = TypeResolver::new(&service);
        let page = service.find_model("WidgetCollectionResponse").unwrap();
        let code = render(&generate_model(&types, page));

        assert!(code.contains("pub value: Option<Vec<AnyWidget>>"));
        assert!(code.contains("rename = \"@odata.nextLink\""));
        assert!(code.contains("Self::default()"));
    }

    // === Any enum tests ===

    #[test]
    fn any_enum_dispatches_on_discriminator() {
        let service = make_service();
        let types = TypeResolver::new(&service);
        let code = render(&generate_any_enum(&types, "Widget"));

        assert!(code.contains("pub enum AnyWidget"));
        assert!(code.contains("Some(\"#example.gizmo\") =>"));
        assert!(code.contains("map(Self::Gizmo)"));
        assert!(code.contains("map(Self::Widget)"));
        assert!(code.contains("impl From<Gizmo> for AnyWidget"));
    }

    // === enum tests ===

    #[test]
    fn enum_gets_catch_all() {
        let service = make_service();
        let code = render(&generate_enum(&service.enums[0]));

        assert!(code.contains("#[serde(rename = \"plain\")]"));
        assert!(code.contains("#[serde(other)]"));
        assert!(code.contains("UnknownFutureValue"));
    }

    #[test]
    fn whole_module_parses() {
        let service = make_service();
        let types = TypeResolver::new(&service);
        let code = render(&generate_models(&types));

        assert!(code.contains("discriminator_value"));
        assert!(code.contains("pub struct WidgetCollectionResponse"));
    }
}
