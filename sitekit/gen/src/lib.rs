//! sitekit code generator library.
//!
//! Turns a [`ServiceDescription`] built with `sitekit-define` into the
//! sources of a request-builder crate that runs on the `sitekit` runtime.
//! The generated crate contains:
//!
//! - One request builder per URL template, reached from a root client
//! - Query parameter structs and request configuration aliases per verb
//! - Serde models with inherited properties flattened and `Any*` enums for
//!   polymorphic bases
//! - The OData error envelope and the error map every operation uses
//!
//! ## Modules
//!
//! - [`validation`] - Consistency checks run before generation
//! - [`codegen`] - Token generation for each kind of generated item
//! - [`output`] - Assembly, formatting and atomic file writing
//! - [`cargo_gen`] - `Cargo.toml` generation for the output crate
//! - [`naming`] - Wire-name to Rust identifier conversion
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```
//! use sitekit_definitions::define_sites_service;
//! use sitekit_gen::output::generate;
//!
//! let files = generate(&define_sites_service()).unwrap();
//! assert!(files.iter().any(|f| f.path.ends_with("client.rs")));
//! ```
//!
//! [`ServiceDescription`]: sitekit_define::ServiceDescription

pub mod cargo_gen;
pub mod codegen;
pub mod errors;
pub mod naming;
pub mod output;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_utils;
