//! sitekit code generator
//!
//! Generates a typed request-builder crate from a service description.

use std::path::Path;

use clap::Parser;
use colored::Colorize;
use sitekit_definitions::define_sites_service;
use sitekit_gen::cargo_gen::write_cargo_toml;
use sitekit_gen::errors::GeneratorError;
use sitekit_gen::output::generate_and_write;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// sitekit code generator - turns service descriptions into request-builder crates
#[derive(Parser, Debug)]
#[command(name = "sitekit-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Service description to generate code for
    #[arg(short, long, default_value = "sites")]
    service: String,

    /// Output directory for generated sources
    #[arg(short, long, default_value = "sitekit/sites/src")]
    output: String,

    /// Print generated code without writing files
    #[arg(long)]
    dry_run: bool,

    /// Also write Cargo.toml next to the output directory
    #[arg(long)]
    manifest: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Verbosity levels:
/// - 0: warnings only
/// - 1 (-v): INFO
/// - 2 (-vv): DEBUG for the generator
/// - 3+ (-vvv): TRACE
fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "info,sitekit_gen=info".to_string(),
            2 => "info,sitekit_gen=debug".to_string(),
            _ => "debug,sitekit_gen=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> Result<(), GeneratorError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let service = match cli.service.as_str() {
        "sites" => define_sites_service(),
        other => {
            return Err(GeneratorError::ConfigError(format!(
                "Unknown service: '{other}'. Available services: sites"
            )));
        }
    };

    let output_dir = Path::new(&cli.output);
    if !cli.dry_run && !output_dir.is_dir() {
        return Err(GeneratorError::OutputDirNotFound(cli.output.clone()));
    }

    let files = generate_and_write(&service, output_dir, cli.dry_run)?;

    if cli.manifest {
        // The output directory is the crate's src/, the manifest goes one level up.
        let crate_dir = output_dir.parent().unwrap_or(Path::new("."));
        write_cargo_toml(crate_dir, &service, cli.dry_run)?;
    }

    if !cli.dry_run {
        eprintln!(
            "{} {} files for {} into {}",
            "Generated".green().bold(),
            files.len(),
            service.name.bold(),
            cli.output
        );
    }

    Ok(())
}
