//! Crate documentation for the generated `lib.rs`.
//!
//! [`ModuleDocBuilder`] renders an introduction, the authentication section,
//! a list of the generated modules and a `no_run` example that builds an
//! adapter and calls the first root navigation.

use proc_macro2::TokenStream;
use quote::quote;
use sitekit_define::{AuthStrategy, NavigationKind, RestMethod, ServiceDescription};

use crate::naming::snake_case;

/// Builds crate-level documentation for a generated service crate.
///
/// ## Examples
///
/// ```
/// use sitekit_definitions::define_sites_service;
/// use sitekit_gen::codegen::ModuleDocBuilder;
///
/// let service = define_sites_service();
/// let tokens = ModuleDocBuilder::new(&service).build();
/// assert!(tokens.to_string().contains("Authentication"));
/// ```
pub struct ModuleDocBuilder<'a> {
    service: &'a ServiceDescription,
}

impl<'a> ModuleDocBuilder<'a> {
    pub fn new(service: &'a ServiceDescription) -> Self {
        Self { service }
    }

    /// Name of the generated crate as used in `use` paths.
    pub fn crate_name(&self) -> String {
        format!("sitekit_{}", snake_case(&self.service.name))
    }

    /// Builds the documentation as inner `#![doc]` attributes, one per line.
    pub fn build(&self) -> TokenStream {
        let mut lines = self.intro_paragraph();
        lines.push(String::new());
        lines.extend(self.auth_section());
        lines.push(String::new());
        lines.extend(self.modules_section());
        lines.push(String::new());
        lines.extend(self.example_section());

        let lines = lines.into_iter().map(|line| {
            if line.is_empty() {
                line
            } else {
                format!(" {line}")
            }
        });
        quote! { #( #![doc = #lines] )* }
    }

    fn intro_paragraph(&self) -> Vec<String> {
        let name = &self.service.name;
        let heading = match &self.service.docs_url {
            Some(url) => format!("Typed request builders for the [{name}]({url}) service."),
            None => format!("Typed request builders for the {name} service."),
        };
        let mut lines = vec![heading, String::new()];
        if !self.service.description.is_empty() {
            lines.extend(self.service.description.lines().map(str::to_string));
            lines.push(String::new());
        }
        lines.push("Every URL template of the service has one request builder. Builders are".into());
        lines.push(format!(
            "reached from [`{}`] by navigation methods and dispatch",
            self.service.client_name
        ));
        lines.push("through a shared [`sitekit::RequestAdapter`].".into());
        lines
    }

    fn auth_section(&self) -> Vec<String> {
        let description = match &self.service.auth {
            AuthStrategy::None => "No authentication required.".to_string(),
            AuthStrategy::BearerToken { scopes } if scopes.is_empty() => {
                "Uses OAuth bearer tokens in the `Authorization` header.".to_string()
            }
            AuthStrategy::BearerToken { scopes } => format!(
                "Uses OAuth bearer tokens in the `Authorization` header, scoped to `{}`.",
                scopes.join("`, `")
            ),
            AuthStrategy::ApiKey { header } => {
                format!("Uses API key authentication via the `{header}` header.")
            }
        };
        let mut lines = vec!["## Authentication".to_string(), String::new(), description];
        if !self.service.env_auth.is_empty() {
            lines.push(format!(
                "Tokens are read from `{}`.",
                self.service.env_auth.join("` or `")
            ));
        }
        lines
    }

    fn modules_section(&self) -> Vec<String> {
        let mut lines = vec!["## Modules".to_string(), String::new()];
        for module in &self.service.modules {
            let summary = module.description.lines().next().unwrap_or_default();
            lines.push(format!("- [`{}`] - {}", module.name, summary));
        }
        lines.push("- [`models`] - Entity, complex and enum types".into());
        lines.push("- [`odataerrors`] - The OData error envelope and error map".into());
        lines
    }

    /// Example that reads through the first root navigation.
    ///
    /// Navigations that need arguments are skipped so the example compiles
    /// without inventing identifiers.
    fn example_section(&self) -> Vec<String> {
        let mut lines = vec!["## Examples".to_string(), String::new()];
        let navigation = self
            .service
            .root_navigations
            .iter()
            .find(|n| n.kind == NavigationKind::Property);
        let Some(navigation) = navigation else {
            lines.push("No root navigation is available for an example.".into());
            return lines;
        };
        let target = self.service.find_resource(&navigation.target);
        let calls_get = target.is_some_and(|t| t.operations.iter().any(|o| o.method == RestMethod::Get));

        let (provider_import, provider) = self.example_provider();
        lines.extend([
            "```no_run".to_string(),
            "use std::sync::Arc;".to_string(),
            String::new(),
            format!("use sitekit::{{RequestContext, ReqwestAdapter, {provider_import}}};"),
            format!("use {}::{};", self.crate_name(), self.service.client_name),
            String::new(),
            "# async fn run() -> Result<(), sitekit::SdkError> {".to_string(),
            format!("let auth = {provider};"),
            "let adapter = ReqwestAdapter::builder().authentication_provider(auth).build()?;".to_string(),
            format!("let client = {}::new(Arc::new(adapter));", self.service.client_name),
            String::new(),
        ]);
        if calls_get {
            lines.extend([
                format!(
                    "let response = client.{}().get(&RequestContext::new(), None).await?;",
                    navigation.method_name
                ),
                "println!(\"{:?}\", response);".to_string(),
            ]);
        } else {
            lines.push(format!("let builder = client.{}();", navigation.method_name));
            lines.push("let _ = (builder, RequestContext::new());".to_string());
        }
        lines.extend([
            "# Ok(())".to_string(),
            "# }".to_string(),
            "```".to_string(),
        ]);
        lines
    }

    fn example_provider(&self) -> (String, String) {
        match &self.service.auth {
            AuthStrategy::None => (
                "AnonymousAuthenticationProvider".into(),
                "AnonymousAuthenticationProvider".into(),
            ),
            AuthStrategy::BearerToken { .. } if !self.service.env_auth.is_empty() => (
                "BaseBearerTokenAuthenticationProvider, EnvTokenProvider".into(),
                format!(
                    "BaseBearerTokenAuthenticationProvider::new(EnvTokenProvider::new([{}]))",
                    quoted_list(&self.service.env_auth)
                ),
            ),
            AuthStrategy::BearerToken { .. } => (
                "BaseBearerTokenAuthenticationProvider, StaticTokenProvider".into(),
                "BaseBearerTokenAuthenticationProvider::new(StaticTokenProvider::new(\"token\"))".into(),
            ),
            AuthStrategy::ApiKey { header } => (
                "ApiKeyAuthenticationProvider, ApiKeyLocation".into(),
                format!(
                    "ApiKeyAuthenticationProvider::new(\"key\", ApiKeyLocation::Header(\"{header}\".into()))?"
                ),
            ),
        }
    }
}

fn quoted_list(values: &[String]) -> String {
    values
        .iter()
        .map(|v| format!("\"{v}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::make_service;

    #[test]
    fn intro_links_docs_url() {
        let service = make_service().docs_url("https://docs.example.com");
        let docs = ModuleDocBuilder::new(&service).intro_paragraph().join("\n");
        assert!(docs.contains("[Widgets](https://docs.example.com)"));
        assert!(docs.contains("[`WidgetsClient`]"));
    }

    #[test]
    fn intro_without_docs_url_has_no_link() {
        let service = make_service();
        let docs = ModuleDocBuilder::new(&service).intro_paragraph().join("\n");
        assert!(!docs.contains("]("));
    }

    // === auth ===

    #[test]
    fn bearer_auth_lists_scopes_and_env() {
        let service = make_service().auth(
            AuthStrategy::BearerToken { scopes: vec![".default".into()] },
            &["WIDGETS_TOKEN", "FALLBACK_TOKEN"],
        );
        let auth = ModuleDocBuilder::new(&service).auth_section().join("\n");
        assert!(auth.contains("`.default`"));
        assert!(auth.contains("`WIDGETS_TOKEN` or `FALLBACK_TOKEN`"));
    }

    #[test]
    fn no_auth() {
        let service = make_service();
        let auth = ModuleDocBuilder::new(&service).auth_section().join("\n");
        assert!(auth.contains("No authentication required"));
    }

    #[test]
    fn api_key_auth() {
        let service = make_service().auth(AuthStrategy::ApiKey { header: "X-API-Key".into() }, &[]);
        let builder = ModuleDocBuilder::new(&service);
        assert!(builder.auth_section().join("\n").contains("`X-API-Key`"));
        assert!(builder.example_section().join("\n").contains("ApiKeyLocation::Header"));
    }

    // === modules and example ===

    #[test]
    fn modules_section_lists_declared_modules() {
        let service = make_service();
        let modules = ModuleDocBuilder::new(&service).modules_section().join("\n");
        assert!(modules.contains("- [`widgets`] - Widget collection and items."));
        assert!(modules.contains("[`odataerrors`]"));
    }

    #[test]
    fn example_calls_first_root_navigation() {
        let service = make_service();
        let builder = ModuleDocBuilder::new(&service);
        let example = builder.example_section().join("\n");
        assert!(example.contains("```no_run"));
        assert!(example.contains("use sitekit_widgets::WidgetsClient;"));
        assert!(example.contains("client.widgets().get(&RequestContext::new(), None)"));
        assert!(example.contains("AnonymousAuthenticationProvider"));
    }

    #[test]
    fn example_reads_token_from_env() {
        let service = make_service().auth(
            AuthStrategy::BearerToken { scopes: Vec::new() },
            &["WIDGETS_TOKEN"],
        );
        let example = ModuleDocBuilder::new(&service).example_section().join("\n");
        assert!(example.contains("EnvTokenProvider::new([\"WIDGETS_TOKEN\"])"));
    }

    #[test]
    fn build_emits_inner_doc_attributes() {
        let service = make_service();
        let code = ModuleDocBuilder::new(&service).build().to_string();
        assert!(code.contains("doc ="));
        assert!(code.contains("## Modules"));
        assert!(code.contains("```no_run"));
    }
}
