//! Query parameter structs and request configuration aliases.
//!
//! Each HTTP verb of a resource gets one configuration alias,
//! `{Builder}{Verb}RequestConfiguration`. When the verb accepts query
//! options the alias is parameterised by a `{Builder}{Verb}QueryParameters`
//! struct whose fields serialise under their template wire names.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use sitekit_define::{Operation, QueryKind, Resource};

use super::doc;

/// Name of the configuration alias for `operation` on `resource`.
pub fn config_alias(resource: &Resource, operation: &Operation) -> Ident {
    format_ident!(
        "{}{}RequestConfiguration",
        resource.builder_name(),
        operation.method.pascal()
    )
}

/// Name of the query parameter struct for `operation` on `resource`.
pub fn query_struct(resource: &Resource, operation: &Operation) -> Ident {
    format_ident!(
        "{}{}QueryParameters",
        resource.builder_name(),
        operation.method.pascal()
    )
}

/// Generates the query struct (if any) and configuration alias for one verb.
pub fn generate_query_parameters(resource: &Resource, operation: &Operation) -> TokenStream {
    let alias = config_alias(resource, operation);
    if operation.query.is_empty() {
        let alias_doc = doc("Configuration for the request such as headers and middleware options.");
        return quote! {
            #alias_doc
            pub type #alias = RequestConfiguration;
        };
    }

    let name = query_struct(resource, operation);
    let docs = doc(&operation.description);
    let fields = operation.query.iter().map(|option| {
        let ident = format_ident!("{}", option.name);
        let field_doc = doc(&option.description);
        let ty = match option.kind {
            QueryKind::String => quote! { Option<String> },
            QueryKind::Int32 => quote! { Option<i32> },
            QueryKind::Bool => quote! { Option<bool> },
            QueryKind::StringList => quote! { Vec<String> },
        };
        quote! {
            #field_doc
            pub #ident: #ty,
        }
    });
    let inserts = operation.query.iter().map(|option| {
        let ident = format_ident!("{}", option.name);
        let wire = &option.wire_name;
        quote! { map.insert(#wire, &self.#ident); }
    });
    let alias_doc = doc(
        "Configuration for the request such as headers, query parameters, and middleware options.",
    );

    quote! {
        #docs
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct #name {
            #(#fields)*
        }

        impl QueryParameters for #name {
            fn to_query_map(&self) -> QueryMap {
                let mut map = QueryMap::new();
                #(#inserts)*
                map
            }
        }

        #alias_doc
        pub type #alias = RequestConfiguration<#name>;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{make_item_resource, make_service, render};
    use sitekit_define::RestMethod;

    #[test]
    fn query_struct_uses_wire_names() {
        let service = make_service();
        let collection = service.find_resource("Widgets").unwrap();
        let get = collection.find_operation(RestMethod::Get).unwrap();
        let code = render(&generate_query_parameters(collection, get));

        assert!(code.contains("pub struct WidgetsRequestBuilderGetQueryParameters"));
        assert!(code.contains("pub top: Option<i32>"));
        assert!(code.contains("pub count: Option<bool>"));
        assert!(code.contains("map.insert(\"%24top\", &self.top);"));
        assert!(code.contains(
            "pub type WidgetsRequestBuilderGetRequestConfiguration = RequestConfiguration<"
        ));
    }

    #[test]
    fn list_options_are_vectors() {
        let item = make_item_resource();
        let get = item.find_operation(RestMethod::Get).unwrap();
        let code = render(&generate_query_parameters(&item, get));

        assert!(code.contains("pub expand: Vec<String>"));
        assert!(code.contains("pub select: Vec<String>"));
    }

    #[test]
    fn verbs_without_query_use_plain_configuration() {
        let item = make_item_resource();
        let delete = item.find_operation(RestMethod::Delete).unwrap();
        let code = render(&generate_query_parameters(&item, delete));

        assert!(code.contains("pub type WidgetItemRequestBuilderDeleteRequestConfiguration = RequestConfiguration;"));
        assert!(!code.contains("QueryParameters"));
    }
}
