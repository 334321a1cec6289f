//! `Cargo.toml` generation for the output crate.
//!
//! The generated crate sits next to the runtime (`sitekit/sites` beside
//! `sitekit/`), so the runtime is referenced by the relative path `..`.

use std::path::Path;

use sitekit_define::{PropertyType, RequestBody, ResponseKind, ServiceDescription};
use tracing::info;

use crate::codegen::ModuleDocBuilder;
use crate::errors::GeneratorError;
use crate::output::write_atomic;

/// Renders the manifest of the generated crate.
///
/// `bytes` and `uuid` are only listed when the description has a binary
/// body or a guid value. `chrono` is always listed: the OData error
/// envelope carries a `date`.
pub fn render_cargo_toml(service: &ServiceDescription) -> String {
    let crate_name = ModuleDocBuilder::new(service).crate_name().replace('_', "-");
    let description = format!("Typed request builders for the {} service", service.name);

    let mut dependencies = vec![r#"sitekit = { path = ".." }"#];
    if uses_bytes(service) {
        dependencies.push(r#"bytes = "1.10""#);
    }
    dependencies.extend([
        r#"chrono = { version = "0.4", features = ["serde"] }"#,
        r#"serde = { version = "1.0", features = ["derive"] }"#,
        r#"serde_json = "1.0""#,
    ]);
    if uses_guid(service) {
        dependencies.push(r#"uuid = { version = "1.11", features = ["serde"] }"#);
    }
    let dependencies = dependencies.join("\n");

    format!(
        r#"# This file was automatically generated by sitekit-gen. Do not edit manually.

[package]
name = "{crate_name}"
version = "0.1.0"
edition = "2024"
license = "AGPL-3.0-only"
description = "{description}"

[dependencies]
{dependencies}

[dev-dependencies]
tokio = {{ version = "1.43", features = ["rt-multi-thread", "macros", "time"] }}
wiremock = "0.6"
"#
    )
}

/// Whether any operation sends or receives a raw byte body.
fn uses_bytes(service: &ServiceDescription) -> bool {
    service
        .resources
        .iter()
        .flat_map(|r| &r.operations)
        .any(|o| o.request == Some(RequestBody::Stream) || o.response == ResponseKind::Bytes)
}

/// Whether a model property or primitive response is a guid.
fn uses_guid(service: &ServiceDescription) -> bool {
    let properties = service
        .models
        .iter()
        .flat_map(|m| &m.properties)
        .map(|p| &p.ty);
    let primitives = service
        .resources
        .iter()
        .flat_map(|r| &r.operations)
        .filter_map(|o| match &o.response {
            ResponseKind::Primitive(ty) => Some(ty),
            _ => None,
        });
    properties.chain(primitives).any(is_guid)
}

fn is_guid(ty: &PropertyType) -> bool {
    match ty {
        PropertyType::Guid => true,
        PropertyType::Collection(inner) => is_guid(inner),
        _ => false,
    }
}

/// Writes `Cargo.toml` into `crate_dir`, or prints it in dry-run mode.
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` when the file cannot be written.
pub fn write_cargo_toml(
    crate_dir: &Path,
    service: &ServiceDescription,
    dry_run: bool,
) -> Result<(), GeneratorError> {
    let content = render_cargo_toml(service);
    if dry_run {
        println!("=== Cargo.toml ===\n{content}");
        return Ok(());
    }
    let path = crate_dir.join("Cargo.toml");
    write_atomic(&path, &content)?;
    info!(path = %path.display(), "wrote manifest");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::make_service;
    use sitekit_define::{ModelType, Operation, Resource, RestMethod};
    use tempfile::TempDir;

    #[test]
    fn manifest_is_valid_toml() {
        let rendered = render_cargo_toml(&make_service());
        let manifest: toml::Value = toml::from_str(&rendered).unwrap();

        assert_eq!(manifest["package"]["name"].as_str(), Some("sitekit-widgets"));
        assert_eq!(manifest["package"]["edition"].as_str(), Some("2024"));
        assert_eq!(manifest["dependencies"]["sitekit"]["path"].as_str(), Some(".."));
        assert!(manifest["dev-dependencies"].get("wiremock").is_some());
    }

    #[test]
    fn optional_dependencies_follow_usage() {
        let plain: toml::Value = toml::from_str(&render_cargo_toml(&make_service())).unwrap();
        assert!(plain["dependencies"].get("bytes").is_none());
        assert!(plain["dependencies"].get("uuid").is_none());
        assert!(plain["dependencies"].get("chrono").is_some());

        let service = make_service()
            .model(ModelType::complex("Tag").properties([("tagId", PropertyType::Guid)]))
            .resource(
                Resource::new("WidgetContent", "widgets", "{+baseurl}/widgets/{widget%2Did}/content")
                    .operation(Operation::new(RestMethod::Get, ResponseKind::Bytes)),
            );
        let full: toml::Value = toml::from_str(&render_cargo_toml(&service)).unwrap();
        assert_eq!(full["dependencies"]["bytes"].as_str(), Some("1.10"));
        assert!(full["dependencies"]["uuid"].get("version").is_some());
    }

    #[test]
    fn manifest_starts_with_notice() {
        assert!(render_cargo_toml(&make_service()).starts_with("# This file was automatically generated"));
    }

    #[test]
    fn write_and_dry_run() {
        let dir = TempDir::new().unwrap();
        write_cargo_toml(dir.path(), &make_service(), true).unwrap();
        assert!(!dir.path().join("Cargo.toml").exists());

        write_cargo_toml(dir.path(), &make_service(), false).unwrap();
        assert!(dir.path().join("Cargo.toml").exists());
    }
}
