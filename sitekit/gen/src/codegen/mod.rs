//! Code generation modules for sitekit.
//!
//! This module contains generators that produce Rust source code from a
//! [`ServiceDescription`]. Each submodule emits one kind of generated file
//! or one component of a file.
//!
//! ## Submodules
//!
//! - [`types`] - Maps description types to Rust types and finds polymorphic bases
//! - [`models`] - Generates `models.rs`: structs, `Any*` enums and string enums
//! - [`builders`] - Generates one request builder per resource, grouped by module
//! - [`query`] - Generates query parameter structs and request configuration aliases
//! - [`client`] - Generates the root service client
//! - [`errors`] - Generates the OData error types and the error map
//! - [`module_docs`] - Generates crate-level documentation for `lib.rs`
//!
//! ## Output Format
//!
//! All generators return `proc_macro2::TokenStream`, which is then:
//! - Validated with `syn::parse2` to ensure correctness
//! - Formatted with `prettyplease` for consistent style
//!
//! See [`crate::output`] for the assembly and file writing logic.
//!
//! [`ServiceDescription`]: sitekit_define::ServiceDescription

pub mod builders;
pub mod client;
pub mod errors;
pub mod models;
pub mod module_docs;
pub mod query;
pub mod types;

pub use builders::generate_module;
pub use client::generate_client;
pub use errors::generate_error_module;
pub use models::generate_models;
pub use module_docs::ModuleDocBuilder;
pub use types::TypeResolver;

use proc_macro2::TokenStream;
use quote::quote;

/// Renders `text` as outer doc attributes, one per line.
///
/// Each line gets a leading space so the formatted output reads `/// text`.
pub(crate) fn doc(text: &str) -> TokenStream {
    let lines = text.lines().map(|line| {
        if line.is_empty() {
            String::new()
        } else {
            format!(" {line}")
        }
    });
    quote! { #( #[doc = #lines] )* }
}
