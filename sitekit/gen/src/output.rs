//! Output assembly and file writing for generated code.
//!
//! This module handles the final phase of code generation: assembling the
//! generated pieces into complete source files, validating them, formatting
//! them, and writing them to disk atomically.
//!
//! ## Output Structure
//!
//! ```text
//! sites/src/
//! ├── lib.rs          # Crate docs, module declarations, client re-export
//! ├── client.rs       # The root service client
//! ├── models.rs       # Entity, complex and enum types
//! ├── odataerrors.rs  # Error envelope and error map
//! └── {module}.rs     # Request builders, one file per service module
//! ```
//!
//! ## Safety Guarantees
//!
//! - **Validation**: the description is checked before any code is generated
//! - **Parsing**: every file is parsed with `syn` before it is written
//! - **Formatting**: output is formatted with `prettyplease`
//! - **Atomic writes**: temp file + rename so a file is never half written

use std::fs;
use std::path::{Path, PathBuf};

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use sitekit_define::ServiceDescription;
use tracing::{debug, info};

use crate::codegen::{
    ModuleDocBuilder, TypeResolver, generate_client, generate_error_module, generate_models,
    generate_module,
};
use crate::errors::GeneratorError;
use crate::validation::validate_service;

/// Notice placed at the top of every generated file.
pub const GENERATED_NOTICE: &str =
    "// This code was automatically generated by sitekit-gen. Do not edit manually.";

/// Modules every generated crate has besides the service modules.
pub const FIXED_MODULES: [&str; 3] = ["client", "models", "odataerrors"];

/// One formatted source file, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub content: String,
}

impl GeneratedFile {
    fn from_tokens(path: impl Into<PathBuf>, tokens: &TokenStream) -> Result<Self, GeneratorError> {
        let path = path.into();
        let file = validate_code(tokens).map_err(|e| match e {
            GeneratorError::CodeGenError(message) => {
                GeneratorError::CodeGenError(format!("{}: {message}", path.display()))
            }
            other => other,
        })?;
        Ok(Self {
            path,
            content: format_code(&file),
        })
    }
}

/// Assembles `lib.rs`: crate docs, sorted module declarations and the
/// client re-export.
pub fn assemble_lib_rs(service: &ServiceDescription) -> TokenStream {
    let docs = ModuleDocBuilder::new(service).build();
    let mut modules: Vec<&str> = service
        .modules
        .iter()
        .map(|m| m.name.as_str())
        .chain(FIXED_MODULES)
        .collect();
    modules.sort_unstable();
    let modules = modules.into_iter().map(|m| format_ident!("{}", m));
    let client = format_ident!("{}", service.client_name);

    quote! {
        #docs

        #( pub mod #modules; )*

        pub use client::#client;
    }
}

/// Generates every file of the output crate's `src/` directory.
///
/// ## Errors
///
/// Returns an error when the description fails validation or a generated
/// file does not parse.
pub fn generate(service: &ServiceDescription) -> Result<Vec<GeneratedFile>, GeneratorError> {
    validate_service(service)?;
    let types = TypeResolver::new(service);

    let mut files = vec![
        GeneratedFile::from_tokens("lib.rs", &assemble_lib_rs(service))?,
        GeneratedFile::from_tokens("client.rs", &generate_client(service))?,
        GeneratedFile::from_tokens("odataerrors.rs", &generate_error_module(service))?,
        GeneratedFile::from_tokens("models.rs", &generate_models(&types))?,
    ];
    for module in &service.modules {
        let tokens = generate_module(&types, module);
        files.push(GeneratedFile::from_tokens(format!("{}.rs", module.name), &tokens)?);
        debug!(module = %module.name, "generated module");
    }
    Ok(files)
}

/// Parses generated tokens as a complete Rust file.
///
/// ## Errors
///
/// Returns `GeneratorError::CodeGenError` if the code fails to parse.
pub fn validate_code(tokens: &TokenStream) -> Result<syn::File, GeneratorError> {
    syn::parse2(tokens.clone())
        .map_err(|e| GeneratorError::CodeGenError(format!("Generated code is invalid: {e}")))
}

/// Formats a parsed file with prettyplease, prepending [`GENERATED_NOTICE`].
pub fn format_code(file: &syn::File) -> String {
    let formatted = prettyplease::unparse(file);
    format!("{GENERATED_NOTICE}\n\n{formatted}")
}

/// Writes content to a file atomically using temp file + rename.
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` if parent directories cannot be
/// created, the temp file cannot be written or the rename fails.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::WriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| GeneratorError::WriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| GeneratorError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// Generates the crate sources and writes them to `output_dir`.
///
/// In dry-run mode nothing is written; the files are printed to stdout.
///
/// ## Errors
///
/// Returns an error if generation fails or a file cannot be written.
pub fn generate_and_write(
    service: &ServiceDescription,
    output_dir: &Path,
    dry_run: bool,
) -> Result<Vec<GeneratedFile>, GeneratorError> {
    let files = generate(service)?;

    if dry_run {
        for file in &files {
            println!("=== {} ===\n{}\n", file.path.display(), file.content);
        }
        return Ok(files);
    }

    for file in &files {
        let path = output_dir.join(&file.path);
        write_atomic(&path, &file.content)?;
        debug!(path = %path.display(), bytes = file.content.len(), "wrote file");
    }
    info!(
        service = %service.name,
        files = files.len(),
        output = %output_dir.display(),
        "generated service crate"
    );
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::make_service;
    use tempfile::TempDir;

    // === assembly ===

    #[test]
    fn lib_rs_declares_sorted_modules() {
        let service = make_service().module("gadgets", "Gadgets.");
        let file = validate_code(&assemble_lib_rs(&service)).unwrap();
        let code = format_code(&file);

        let client = code.find("pub mod client;").unwrap();
        let gadgets = code.find("pub mod gadgets;").unwrap();
        let models = code.find("pub mod models;").unwrap();
        let widgets = code.find("pub mod widgets;").unwrap();
        assert!(client < gadgets && gadgets < models && models < widgets);
        assert!(code.contains("pub use client::WidgetsClient;"));
        assert!(code.contains("//! ## Modules"));
    }

    #[test]
    fn format_code_prepends_notice() {
        let file = validate_code(&quote! { pub struct Empty; }).unwrap();
        let code = format_code(&file);
        assert!(code.starts_with(GENERATED_NOTICE));
        assert!(code.contains("pub struct Empty;"));
    }

    #[test]
    fn validate_code_rejects_broken_tokens() {
        let tokens: TokenStream = "pub struct".parse().unwrap();
        assert!(matches!(validate_code(&tokens), Err(GeneratorError::CodeGenError(_))));
    }

    #[test]
    fn generate_produces_every_file() {
        let files = generate(&make_service()).unwrap();
        let paths: Vec<_> = files.iter().map(|f| f.path.display().to_string()).collect();
        assert_eq!(
            paths,
            vec!["lib.rs", "client.rs", "odataerrors.rs", "models.rs", "widgets.rs"]
        );
    }

    #[test]
    fn generate_validates_first() {
        let mut service = make_service();
        service.error_mappings.clear();
        assert!(matches!(
            generate(&service),
            Err(GeneratorError::InvalidDescription { .. })
        ));
    }

    // === writing ===

    #[test]
    fn write_atomic_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/deeper/lib.rs");
        write_atomic(&path, "// hi\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "// hi\n");
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn generate_and_write_writes_files() {
        let dir = TempDir::new().unwrap();
        let files = generate_and_write(&make_service(), dir.path(), false).unwrap();
        for file in &files {
            let written = fs::read_to_string(dir.path().join(&file.path)).unwrap();
            assert_eq!(written, file.content);
        }
    }

    #[test]
    fn dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        generate_and_write(&make_service(), dir.path(), true).unwrap();
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
