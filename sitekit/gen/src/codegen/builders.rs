//! Request builder generation.
//!
//! Resources are grouped by module; each module becomes one source file
//! holding the builders of its resources, their query parameter structs and
//! their request configuration aliases.
//!
//! A generated builder wraps a [`BaseRequestBuilder`] and exposes:
//!
//! - `new`, `new_with_url` and `with_url` constructors
//! - one accessor per navigation, sorted by name
//! - one `async fn` per operation plus a `to_*_request_information` helper
//!
//! [`BaseRequestBuilder`]: sitekit::BaseRequestBuilder

use std::collections::{BTreeSet, HashSet};

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use sitekit_define::{
    Navigation, NavigationKind, Operation, RequestBody, Resource, ResponseKind, ServiceModule,
};

use super::doc;
use super::query::{config_alias, generate_query_parameters};
use super::types::TypeResolver;
use crate::naming::ident;

/// Generates the source of one module of request builders.
pub fn generate_module(types: &TypeResolver<'_>, module: &ServiceModule) -> TokenStream {
    let service = types.service();
    let resources: Vec<&Resource> = service
        .resources
        .iter()
        .filter(|r| r.module == module.name)
        .collect();

    let module_doc = module.description.lines().map(|line| format!(" {line}"));
    let imports = generate_imports(types, &resources);
    let builders = resources
        .iter()
        .map(|resource| generate_builder(types, module, resource));

    quote! {
        #( #![doc = #module_doc] )*

        #imports

        #(#builders)*
    }
}

/// Computes the `use` items a module needs from the operations it holds.
fn generate_imports(types: &TypeResolver<'_>, resources: &[&Resource]) -> TokenStream {
    let operations: Vec<&Operation> = resources.iter().flat_map(|r| &r.operations).collect();

    let mut runtime: BTreeSet<&str> = [
        "BaseRequestBuilder",
        "PathParameters",
        "RequestAdapter",
        "RequestBuilder",
    ]
    .into_iter()
    .collect();
    if !operations.is_empty() {
        runtime.extend([
            "HttpMethod",
            "RequestConfiguration",
            "RequestContext",
            "RequestInformation",
            "SdkError",
        ]);
        let typed_send = operations
            .iter()
            .any(|o| o.deprecation.is_none() && o.response != ResponseKind::Empty);
        if typed_send {
            runtime.insert("RequestAdapterExt");
        }
    }
    if operations.iter().any(|o| !o.query.is_empty()) {
        runtime.extend(["QueryMap", "QueryParameters"]);
    }
    let runtime = runtime.into_iter().map(|name| format_ident!("{}", name));

    let mut models = BTreeSet::new();
    let mut uses_bytes = false;
    for operation in &operations {
        if let Some(name) = operation.response.model_name() {
            models.insert(types.model_type_name(name));
        }
        match &operation.request {
            Some(RequestBody::Model(name)) => {
                models.insert(types.model_type_name(name));
            }
            Some(RequestBody::Stream) => uses_bytes = true,
            None => {}
        }
        if operation.response == ResponseKind::Bytes {
            uses_bytes = true;
        }
    }
    let model_use = (!models.is_empty()).then(|| {
        let models = models.iter().map(|name| format_ident!("{}", name));
        quote! { use crate::models::{ #(#models),* }; }
    });
    let bytes = uses_bytes.then(|| quote! { use bytes::Bytes; });
    let errors = (!operations.is_empty()).then(|| quote! { use crate::odataerrors::ERROR_MAPPINGS; });

    quote! {
        use std::sync::Arc;

        #bytes
        use sitekit::{ #(#runtime),* };

        #model_use
        #errors
    }
}

/// Generates one builder with its query structs and configuration aliases.
fn generate_builder(
    types: &TypeResolver<'_>,
    module: &ServiceModule,
    resource: &Resource,
) -> TokenStream {
    let name = format_ident!("{}", resource.builder_name());
    let template = &resource.url_template;
    let docs = doc(&resource.description);

    let mut navigations: Vec<&Navigation> = resource.navigations.iter().collect();
    navigations.sort_by(|a, b| a.method_name.cmp(&b.method_name));
    let navigations = navigations
        .into_iter()
        .map(|navigation| generate_navigation(types, module, navigation));

    let verbs = resource
        .operations
        .iter()
        .map(|operation| generate_verb(types, resource, operation));

    let mut seen = HashSet::new();
    let configurations = resource
        .operations
        .iter()
        .filter(|operation| seen.insert(operation.method))
        .map(|operation| generate_query_parameters(resource, operation));

    quote! {
        #docs
        #[derive(Debug, Clone)]
        pub struct #name {
            base: BaseRequestBuilder,
        }

        impl RequestBuilder for #name {
            const URL_TEMPLATE: &'static str = #template;

            fn from_base(base: BaseRequestBuilder) -> Self {
                Self { base }
            }

            fn base(&self) -> &BaseRequestBuilder {
                &self.base
            }
        }

        impl #name {
            /// Instantiates a new builder from path bindings.
            pub fn new(path_parameters: PathParameters, adapter: Arc<dyn RequestAdapter>) -> Self {
                Self::from_path_parameters(path_parameters, adapter)
            }

            /// Instantiates a new builder that sends every request to `raw_url`.
            pub fn new_with_url(raw_url: impl Into<String>, adapter: Arc<dyn RequestAdapter>) -> Self {
                Self::from_raw_url(raw_url, adapter)
            }

            /// Returns a builder for this resource bound to `raw_url`, such as an `@odata.nextLink`.
            pub fn with_url(&self, raw_url: impl Into<String>) -> Self {
                <Self as RequestBuilder>::with_url(self, raw_url)
            }

            #(#navigations)*

            #(#verbs)*
        }

        #(#configurations)*
    }
}

/// Generates a navigation accessor.
///
/// Targets in other modules are referenced through their `crate::` path.
fn generate_navigation(
    types: &TypeResolver<'_>,
    module: &ServiceModule,
    navigation: &Navigation,
) -> TokenStream {
    let service = types.service();
    let method = ident(&navigation.method_name);
    let target = service.find_resource(&navigation.target);
    let target_ident = format_ident!("{}RequestBuilder", navigation.target);
    let ret = match target {
        Some(t) if t.module != module.name => {
            let target_module = ident(&t.module);
            quote! { crate::#target_module::#target_ident }
        }
        _ => quote! { #target_ident },
    };
    let description = navigation
        .description
        .clone()
        .or_else(|| target.map(|t| t.description.clone()))
        .unwrap_or_default();
    let docs = doc(&description);

    match &navigation.kind {
        NavigationKind::Property => quote! {
            #docs
            pub fn #method(&self) -> #ret {
                self.base.navigate()
            }
        },
        NavigationKind::Indexer { key, param } => {
            let param = ident(param);
            quote! {
                #docs
                pub fn #method(&self, #param: impl Into<String>) -> #ret {
                    self.base.navigate_with_id(#key, #param)
                }
            }
        }
        NavigationKind::Function { arguments } => {
            let params: Vec<_> = arguments.iter().map(|a| ident(&a.name)).collect();
            let keys = arguments.iter().map(|a| &a.key);
            quote! {
                #docs
                pub fn #method(&self, #( #params: Option<&str> ),*) -> #ret {
                    self.base.navigate_with(&[ #( (#keys, #params) ),* ])
                }
            }
        }
    }
}

/// Generates an operation's `async fn` and its request-information helper.
///
/// Deprecated operations delegate to their replacement and convert the
/// result into their own response type.
fn generate_verb(types: &TypeResolver<'_>, resource: &Resource, operation: &Operation) -> TokenStream {
    let name = operation.method_name();
    let method = ident(&name);
    let helper = format_ident!("to_{}_request_information", name);
    let alias = config_alias(resource, operation);
    let docs = doc(&operation.description);

    let body_param = match &operation.request {
        Some(RequestBody::Model(model)) => {
            let model = types.model_ident(model);
            Some(quote! { body: &#model, })
        }
        Some(RequestBody::Stream) => Some(quote! { body: impl Into<Bytes>, }),
        None => None,
    };
    let body_arg = body_param.as_ref().map(|_| quote! { body, });

    let response = types.response_type(&operation.response);
    let ret = match &response {
        Some(ty) => quote! { Result<Option<#ty>, SdkError> },
        None => quote! { Result<(), SdkError> },
    };

    if let Some(deprecation) = &operation.deprecation {
        let replacement = ident(&deprecation.replacement);
        let replacement_helper = format_ident!("to_{}_request_information", deprecation.replacement);
        let note = format!(
            "This function is obsolete. Use {} instead.",
            deprecation.replacement
        );
        let pointer = doc(&format!(
            "\nDeprecated: use [`Self::{}`] instead.",
            deprecation.replacement
        ));
        let dispatch = match &response {
            Some(ty) => quote! {
                Ok(self.#replacement(ctx, #body_arg config).await?.map(#ty::from))
            },
            None => quote! { self.#replacement(ctx, #body_arg config).await },
        };
        return quote! {
            #docs
            #pointer
            #[deprecated(note = #note)]
            pub async fn #method(
                &self,
                ctx: &RequestContext,
                #body_param
                config: Option<#alias>,
            ) -> #ret {
                #dispatch
            }

            #docs
            #[deprecated(note = #note)]
            pub fn #helper(
                &self,
                #body_param
                config: Option<#alias>,
            ) -> Result<RequestInformation, SdkError> {
                self.#replacement_helper(#body_arg config)
            }
        };
    }

    let send = match &operation.response {
        ResponseKind::Model(_) => format_ident!("send"),
        ResponseKind::Empty => format_ident!("send_no_content"),
        ResponseKind::Primitive(_) | ResponseKind::Bytes => format_ident!("send_primitive"),
    };
    let http_method = format_ident!("{}", operation.method.pascal());
    let accept = operation.accept_header();
    let build = match &operation.request {
        Some(RequestBody::Model(_)) => quote! {
            let mut info = self.base.request_information(HttpMethod::#http_method, config, #accept);
            info.set_content_from_parsable(self.base.adapter().as_ref(), "application/json", body)?;
            Ok(info)
        },
        Some(RequestBody::Stream) => quote! {
            let mut info = self.base.request_information(HttpMethod::#http_method, config, #accept);
            info.set_stream_content(body);
            Ok(info)
        },
        None => quote! {
            Ok(self.base.request_information(HttpMethod::#http_method, config, #accept))
        },
    };

    quote! {
        #docs
        pub async fn #method(
            &self,
            ctx: &RequestContext,
            #body_param
            config: Option<#alias>,
        ) -> #ret {
            let info = self.#helper(#body_arg config)?;
            self.base.adapter().#send(ctx, info, &ERROR_MAPPINGS).await
        }

        #docs
        pub fn #helper(
            &self,
            #body_param
            config: Option<#alias>,
        ) -> Result<RequestInformation, SdkError> {
            #build
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{make_service, render, squash};
    use sitekit_define::{FunctionArgument, PropertyType, RestMethod};

    fn widgets_module(service: &sitekit_define::ServiceDescription) -> String {
        let types = TypeResolver::new(service);
        render(&generate_module(&types, &service.modules[0]))
    }

    // === builder shape ===

    #[test]
    fn builder_carries_template_and_constructors() {
        let code = widgets_module(&make_service());

        assert!(code.contains("pub struct WidgetsRequestBuilder"));
        assert!(code.contains("\"{+baseurl}/widgets{?%24top,%24count}\""));
        assert!(code.contains("pub fn new_with_url("));
        assert!(code.contains("<Self as RequestBuilder>::with_url(self, raw_url)"));
    }

    #[test]
    fn indexer_binds_key() {
        let code = widgets_module(&make_service());

        assert!(code.contains("widget_id: impl Into<String>"));
        assert!(code.contains("self.base.navigate_with_id(\"widget%2Did\", widget_id)"));
    }

    #[test]
    fn function_navigation_takes_optional_arguments() {
        let mut service = make_service();
        service.resources.push(sitekit_define::Resource::new(
            "WidgetsByColor",
            "widgets",
            "{+baseurl}/widgets/byColor(color='{color}')",
        ));
        service.resources[0].navigations.push(Navigation::function(
            "by_color",
            "WidgetsByColor",
            vec![FunctionArgument::new("color", "color")],
        ));
        let code = widgets_module(&service);

        assert!(code.contains("color: Option<&str>"));
        assert!(code.contains("-> WidgetsByColorRequestBuilder"));
        assert!(code.contains("navigate_with(&[(\"color\", color)])"));
    }

    // === verbs ===

    #[test]
    fn verbs_dispatch_through_adapter() {
        let code = widgets_module(&make_service());

        assert!(code.contains("pub async fn get("));
        assert!(code.contains("Result<Option<WidgetCollectionResponse>, SdkError>"));
        assert!(code.contains(".send(ctx, info, &ERROR_MAPPINGS)"));
        assert!(code.contains(".send_no_content(ctx, info, &ERROR_MAPPINGS)"));
        assert!(code.contains("pub fn to_delete_request_information("));
    }

    #[test]
    fn patch_serializes_body() {
        let code = widgets_module(&make_service());

        assert!(code.contains("body: &AnyWidget"));
        assert!(code.contains("set_content_from_parsable("));
        assert!(code.contains("HttpMethod::Patch"));
    }

    #[test]
    fn primitive_response_accepts_text() {
        let mut service = make_service();
        service.resources.push(
            sitekit_define::Resource::new("WidgetsCount", "widgets", "{+baseurl}/widgets/$count")
                .operation(Operation::new(
                    RestMethod::Get,
                    ResponseKind::Primitive(PropertyType::Int32),
                )),
        );
        let code = widgets_module(&service);

        assert!(code.contains("Result<Option<i32>, SdkError>"));
        assert!(code.contains(".send_primitive(ctx, info, &ERROR_MAPPINGS)"));
        assert!(code.contains("\"text/plain;q=0.9\""));
    }

    #[test]
    fn deprecated_operation_delegates() {
        let mut service = make_service();
        service.resources[0].operations.push(
            Operation::new(RestMethod::Get, ResponseKind::model("WidgetCollectionResponse"))
                .named("get_legacy")
                .deprecated("get", None),
        );
        let code = widgets_module(&service);

        assert!(squash(&code).contains(&squash(
            "#[deprecated(note = \"This function is obsolete. Use get instead.\")]"
        )));
        assert!(code.contains("map(WidgetCollectionResponse::from)"));
        assert!(code.contains("self.to_get_request_information(config)"));
        assert_eq!(code.matches("pub struct WidgetsRequestBuilderGetQueryParameters").count(), 1);
    }

    // === imports ===

    #[test]
    fn imports_follow_usage() {
        let code = widgets_module(&make_service());

        assert!(code.contains("use crate::odataerrors::ERROR_MAPPINGS;"));
        assert!(code.contains("RequestAdapterExt"));
        assert!(code.contains("QueryParameters"));
        assert!(!code.contains("use bytes::Bytes;"));
    }
}
