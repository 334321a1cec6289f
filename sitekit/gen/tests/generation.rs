//! End-to-end tests: generate the sites crate and inspect the output.
//!
//! The compile check is ignored by default since it invokes cargo on the
//! generated crate.

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

use sitekit_definitions::define_sites_service;
use sitekit_gen::cargo_gen::render_cargo_toml;
use sitekit_gen::output::{GENERATED_NOTICE, GeneratedFile, generate, generate_and_write};

/// Drops all whitespace so assertions survive prettyplease line wrapping.
fn squash(code: &str) -> String {
    code.chars().filter(|c| !c.is_whitespace()).collect()
}

fn sites_files() -> Vec<GeneratedFile> {
    generate(&define_sites_service()).expect("sites service generates")
}

fn file<'a>(files: &'a [GeneratedFile], name: &str) -> &'a str {
    files
        .iter()
        .find(|f| f.path == Path::new(name))
        .map(|f| f.content.as_str())
        .unwrap_or_else(|| panic!("{name} was not generated"))
}

// === file set ===

#[test]
fn every_module_gets_a_file() {
    let files = sites_files();
    let service = define_sites_service();

    for module in &service.modules {
        let name = format!("{}.rs", module.name);
        assert!(files.iter().any(|f| f.path == Path::new(&name)), "missing {name}");
    }
    assert_eq!(files.len(), service.modules.len() + 4);
    assert!(files.iter().all(|f| f.content.starts_with(GENERATED_NOTICE)));
}

#[test]
fn lib_rs_reexports_client() {
    let files = sites_files();
    let lib = file(&files, "lib.rs");

    assert!(lib.contains("pub mod odataerrors;"));
    assert!(lib.contains("pub mod term_store;"));
    assert!(lib.contains("pub use client::SitesServiceClient;"));
    assert!(lib.contains("SITES_ACCESS_TOKEN"));
}

// === builders ===

#[test]
fn site_item_builder_has_navigations_and_verbs() {
    let files = sites_files();
    let sites = file(&files, "sites.rs");

    assert!(sites.contains("pub struct SiteItemRequestBuilder"));
    assert!(sites.contains("\"{+baseurl}/sites/{site%2Did}{?%24expand,%24select}\""));
    assert!(sites.contains("navigate_with_id(\"site%2Did\", site_id)"));
    assert!(sites.contains("pub struct SiteItemRequestBuilderGetQueryParameters"));
    assert!(sites.contains("pub async fn patch("));
}

#[test]
fn delta_keeps_deprecated_get() {
    let files = sites_files();
    let sites = file(&files, "sites.rs");

    assert!(squash(sites).contains(&squash(
        "#[deprecated(note = \"This function is obsolete. Use get_as_delta_get_response instead.\")]"
    )));
    assert!(sites.contains("pub async fn get_as_delta_get_response("));
}

#[test]
fn drive_content_streams_bytes() {
    let files = sites_files();
    let drive = file(&files, "drive.rs");

    assert!(drive.contains("use bytes::Bytes;"));
    assert!(drive.contains("body: impl Into<Bytes>"));
    assert!(drive.contains("\"application/octet-stream, application/json\""));
}

#[test]
fn error_map_uses_catch_all_key() {
    let files = sites_files();
    let errors = file(&files, "odataerrors.rs");

    assert!(errors.contains("(\"XXX\", create_odata_error_from_discriminator_value)"));
}

#[test]
fn models_include_polymorphic_unions() {
    let files = sites_files();
    let models = file(&files, "models.rs");

    assert!(models.contains("pub enum AnyBaseSitePage"));
    assert!(models.contains("pub enum AnyWebPart"));
    assert!(models.contains("pub struct DeltaGetResponse"));
    assert!(!models.contains("pub enum AnyDeltaGetResponse"));
}

// === writing ===

#[test]
fn writes_into_output_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let src_dir = temp_dir.path().join("src");

    let files = generate_and_write(&define_sites_service(), &src_dir, false).unwrap();
    for generated in &files {
        let written = fs::read_to_string(src_dir.join(&generated.path)).unwrap();
        assert_eq!(written, generated.content);
    }
}

// === checked-in crate ===

/// Re-renders a source file so layout differences do not count.
fn normalized(source: &str) -> String {
    let file = syn::parse_file(source).expect("source parses");
    prettyplease::unparse(&file)
}

#[test]
fn checked_in_sites_crate_matches_generator() {
    let crate_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../sites");
    let src_dir = crate_dir.join("src");
    let files = sites_files();

    let mut on_disk: Vec<String> = fs::read_dir(&src_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    on_disk.sort();
    let mut expected: Vec<String> = files.iter().map(|f| f.path.display().to_string()).collect();
    expected.sort();
    assert_eq!(on_disk, expected);

    for generated in &files {
        let checked_in = fs::read_to_string(src_dir.join(&generated.path)).unwrap();
        assert!(checked_in.starts_with(GENERATED_NOTICE));
        assert_eq!(
            normalized(&checked_in),
            normalized(&generated.content),
            "{} is out of date, rerun sitekit-gen",
            generated.path.display()
        );
    }

    let manifest = fs::read_to_string(crate_dir.join("Cargo.toml")).unwrap();
    assert_eq!(manifest, render_cargo_toml(&define_sites_service()));
}

/// Generates the sites crate into a temp directory and runs `cargo check`.
#[test]
#[ignore = "slow: compiles generated code"]
fn generated_code_compiles() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let crate_dir = temp_dir.path().join("sites");
    let src_dir = crate_dir.join("src");

    let service = define_sites_service();
    generate_and_write(&service, &src_dir, false).expect("Failed to generate code");

    let runtime = Path::new(env!("CARGO_MANIFEST_DIR")).join("..");
    let manifest = render_cargo_toml(&service).replace(
        "path = \"..\"",
        &format!("path = {:?}", runtime.display().to_string()),
    );
    fs::write(crate_dir.join("Cargo.toml"), manifest).expect("Failed to write Cargo.toml");

    let output = Command::new("cargo")
        .args(["check", "--manifest-path"])
        .arg(crate_dir.join("Cargo.toml"))
        .output()
        .expect("Failed to run cargo check");

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        panic!("Generated code failed to compile:\n\nSTDOUT:\n{stdout}\n\nSTDERR:\n{stderr}");
    }
}
