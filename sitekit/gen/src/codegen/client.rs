//! Generation of the root service client.
//!
//! The client owns the adapter, seeds the `baseurl` path parameter from it
//! and exposes the service's root navigations.

use std::collections::BTreeSet;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use sitekit_define::{NavigationKind, ServiceDescription};

use super::doc;
use crate::naming::ident;

/// Generates `client.rs`.
pub fn generate_client(service: &ServiceDescription) -> TokenStream {
    let client = format_ident!("{}", service.client_name);

    let mut imports = BTreeSet::new();
    let navigations = service.root_navigations.iter().map(|navigation| {
        let method = ident(&navigation.method_name);
        let target = service.find_resource(&navigation.target);
        let builder = format_ident!("{}RequestBuilder", navigation.target);
        if let Some(target) = target {
            imports.insert((target.module.clone(), builder.to_string()));
        }
        let description = navigation
            .description
            .clone()
            .or_else(|| target.map(|t| t.description.clone()))
            .unwrap_or_default();
        let docs = doc(&description);
        match &navigation.kind {
            NavigationKind::Property => quote! {
                #docs
                pub fn #method(&self) -> #builder {
                    self.base.navigate()
                }
            },
            NavigationKind::Indexer { key, param } => {
                let param = ident(param);
                quote! {
                    #docs
                    pub fn #method(&self, #param: impl Into<String>) -> #builder {
                        self.base.navigate_with_id(#key, #param)
                    }
                }
            }
            NavigationKind::Function { arguments } => {
                let params: Vec<_> = arguments.iter().map(|a| ident(&a.name)).collect();
                let keys = arguments.iter().map(|a| &a.key);
                quote! {
                    #docs
                    pub fn #method(&self, #( #params: Option<&str> ),*) -> #builder {
                        self.base.navigate_with(&[ #( (#keys, #params) ),* ])
                    }
                }
            }
        }
    });
    let navigations: Vec<_> = navigations.collect();
    let imports = imports.into_iter().map(|(module, builder)| {
        let module = ident(&module);
        let builder = format_ident!("{}", builder);
        quote! { use crate::#module::#builder; }
    });

    let mut client_doc = String::from(
        "The main entry point of the SDK, exposes the configuration and the fluent API.",
    );
    if !service.env_auth.is_empty() {
        client_doc.push_str(&format!(
            "\n\nCredentials are read by the adapter's authentication provider; bearer tokens\nare looked up in `{}`.",
            service.env_auth.join("`, then `")
        ));
    }
    let client_doc = doc(&client_doc);

    quote! {
        //! The service client, root of every request-builder chain.

        use std::sync::Arc;

        use sitekit::{BASE_URL_KEY, BaseRequestBuilder, PathParameters, RequestAdapter};

        #(#imports)*

        #client_doc
        #[derive(Debug, Clone)]
        pub struct #client {
            base: BaseRequestBuilder,
        }

        impl #client {
            /// URL template of the client root.
            pub const URL_TEMPLATE: &'static str = "{+baseurl}";

            /// Instantiates a new client rooted at the adapter's base URL.
            pub fn new(adapter: Arc<dyn RequestAdapter>) -> Self {
                let path_parameters = PathParameters::new().with(BASE_URL_KEY, adapter.base_url());
                Self {
                    base: BaseRequestBuilder::new(adapter, Self::URL_TEMPLATE, path_parameters),
                }
            }

            /// The adapter every request is dispatched through.
            pub fn adapter(&self) -> &Arc<dyn RequestAdapter> {
                self.base.adapter()
            }

            #(#navigations)*
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{make_service, render, squash};
    use sitekit_define::AuthStrategy;

    #[test]
    fn client_exposes_root_navigations() {
        let code = render(&generate_client(&make_service()));

        assert!(code.contains("pub struct WidgetsClient"));
        assert!(code.contains("use crate::widgets::WidgetsRequestBuilder;"));
        assert!(code.contains("pub fn widgets(&self) -> WidgetsRequestBuilder"));
        assert!(squash(&code).contains(&squash(
            "PathParameters::new().with(BASE_URL_KEY, adapter.base_url())"
        )));
    }

    #[test]
    fn client_documents_token_variables() {
        let service = make_service().auth(
            AuthStrategy::BearerToken { scopes: Vec::new() },
            &["WIDGETS_TOKEN", "FALLBACK_TOKEN"],
        );
        let code = render(&generate_client(&service));

        assert!(code.contains("`WIDGETS_TOKEN`, then `FALLBACK_TOKEN`"));
    }
}
