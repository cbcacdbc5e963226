//! `oas-build` — Compiles OWL ontologies into an OpenAPI 3.0 document.
//!
//! Reads the Turtle files named on the command line (or by the config file),
//! compiles the configured classes and every class they reference, and writes
//! the document as pretty-printed JSON.
//!
//! **Usage:**
//! ```
//! oas-build [--config <toml>] [--ontology <ttl>]... [--out <path>] [--verbose]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;

use oas_ontology::loader::load_files;
use oas_schemagen::config::Config;
use oas_schemagen::diagnostics::Diagnostics;
use oas_schemagen::document::to_openapi;

/// Compile OWL ontologies into an OpenAPI document.
#[derive(Parser)]
#[command(name = "oas-build", about = "Compile OWL ontologies into OpenAPI schemas")]
struct Args {
    /// Generation settings (TOML).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Turtle ontology to load; repeatable. Replaces the config's list.
    #[arg(long = "ontology")]
    ontologies: Vec<PathBuf>,

    /// Output file for the generated document.
    #[arg(long, default_value = "openapi.json")]
    out: PathBuf,

    /// Log every compilation step.
    #[arg(long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => Config::default(),
    };
    if !args.ontologies.is_empty() {
        config.ontologies = args.ontologies;
    }
    if config.ontologies.is_empty() {
        bail!("No ontology given: pass --ontology or list `ontologies` in the config");
    }

    let ontology = load_files(&config.ontologies).context("Failed to load ontologies")?;
    println!(
        "Loaded {} classes, {} properties, {} individuals from {} file(s)",
        ontology.class_count(),
        ontology.property_count(),
        ontology.individual_count(),
        config.ontologies.len()
    );

    let mut diagnostics = Diagnostics::new();
    let report = oas_schemagen::generate(&ontology, &config.classes, &config, &mut diagnostics)
        .context("Schema generation failed")?;

    let document = to_openapi(&report, &config);
    let json = serde_json::to_string_pretty(&document)
        .context("Failed to serialize the OpenAPI document")?;
    fs::write(&args.out, json)
        .with_context(|| format!("Failed to write {}", args.out.display()))?;

    println!(
        "Generated {} schemas, {} properties, {} required, {} enums",
        report.schema_count(),
        report.property_count,
        report.required_count,
        report.enum_count
    );
    println!(
        "Diagnostics: {} warning(s), {} error(s)",
        diagnostics.warning_count(),
        diagnostics.error_count()
    );
    println!("  Written: {}", args.out.display());
    Ok(())
}
