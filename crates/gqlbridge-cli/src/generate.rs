//! `gqlbridge generate`

use crate::writer::{OutputWriter, WriteReport};
use anyhow::{Context, Result};
use clap::Args;
use gqlbridge_codegen::{GenerationResult, Generator};
use gqlbridge_core::{Config, Schema, ValidationPackage};
use std::path::Path;

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Configuration file (default: gqlbridge.yaml, gqlbridge.yml or gqlbridge.toml in the current directory)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Schema document (JSON)
    #[arg(short, long)]
    pub schema: Option<String>,

    /// Output directory
    #[arg(short, long)]
    pub output: Option<String>,

    /// Java package of the generated sources
    #[arg(short, long)]
    pub package: Option<String>,

    /// Target Java version (8, 11, 17, 21)
    #[arg(long)]
    pub java_version: Option<u32>,

    /// Enable Lombok annotations
    #[arg(long, conflicts_with = "no_lombok")]
    pub lombok: bool,

    /// Disable Lombok annotations
    #[arg(long)]
    pub no_lombok: bool,

    /// Enable validation annotations
    #[arg(long, conflicts_with = "no_validation")]
    pub validation: bool,

    /// Disable validation annotations
    #[arg(long)]
    pub no_validation: bool,

    /// Validation namespace (jakarta or javax)
    #[arg(long, value_parser = parse_validation_package)]
    pub validation_package: Option<ValidationPackage>,

    /// Remove existing .java files from the output directory first
    #[arg(long)]
    pub clean: bool,

    /// Keep files that already exist
    #[arg(long)]
    pub no_overwrite: bool,
}

/// Run generation. Returns `false` when any type or file failed.
pub fn run(args: &GenerateArgs) -> Result<bool> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let config = load_config(args, &cwd)?;
    let schema = load_schema(&config)?;

    let result = Generator::new(config.clone()).generate(&schema);

    let writer = OutputWriter::new(&config.output.directory).with_overwrite(!args.no_overwrite);
    if args.clean {
        let removed = writer
            .clean()
            .with_context(|| format!("Failed to clean {}", writer.dir().display()))?;
        tracing::info!(removed, dir = %writer.dir().display(), "cleaned output directory");
    }
    writer
        .ensure_dir()
        .with_context(|| format!("Failed to create {}", writer.dir().display()))?;

    let report = writer.write_all(&result.units);
    print_report(&result, &report);

    Ok(!result.has_errors() && !report.has_errors())
}

/// Effective configuration: file (explicit or discovered) or defaults, then
/// command line overrides. Version overrides are applied once, for the
/// final Java version.
pub fn load_config(args: &GenerateArgs, cwd: &Path) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::read_file(cwd.join(path))
            .with_context(|| format!("Failed to load configuration from {path}"))?,
        None => match Config::find_default_config(cwd) {
            Some(found) => {
                tracing::debug!(path = %found.display(), "using discovered configuration");
                Config::read_file(&found)
                    .with_context(|| format!("Failed to load configuration from {}", found.display()))?
            }
            None => {
                let mut config = Config::default();
                config.resolve_paths(cwd);
                config
            }
        },
    };

    apply_overrides(&mut config, args, cwd);
    let mut config = config.finalize().context("Invalid configuration")?;

    // an explicit flag beats the version override
    if let Some(package) = args.validation_package {
        config.features.validation.package = package;
    }

    Ok(config)
}

fn apply_overrides(config: &mut Config, args: &GenerateArgs, cwd: &Path) {
    let resolve = |p: &str| cwd.join(p).to_string_lossy().into_owned();

    if let Some(schema) = &args.schema {
        config.schema.path = resolve(schema);
    }
    if let Some(output) = &args.output {
        config.output.directory = resolve(output);
    }
    if let Some(package) = &args.package {
        config.output.package = package.clone();
    }
    if let Some(version) = args.java_version {
        config.java.version = version;
    }
    if let Some(enabled) = switch(args.lombok, args.no_lombok) {
        config.features.lombok.enabled = enabled;
    }
    if let Some(enabled) = switch(args.validation, args.no_validation) {
        config.features.validation.enabled = enabled;
    }
}

fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Read the schema document and its includes into one schema
pub fn load_schema(config: &Config) -> Result<Schema> {
    if config.schema.path.is_empty() {
        anyhow::bail!("No schema specified (use --schema or set schema.path in the configuration)");
    }

    let mut types = read_schema(&config.schema.path)?.types().to_vec();
    for include in &config.schema.includes {
        types.extend_from_slice(read_schema(include)?.types());
    }

    let schema = Schema::from_types(types).context("Failed to merge schema includes")?;
    tracing::info!(types = schema.len(), "loaded schema");
    Ok(schema)
}

fn read_schema(path: &str) -> Result<Schema> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema file: {path}"))?;
    Schema::from_json_str(&json).with_context(|| format!("Failed to parse schema file: {path}"))
}

fn print_report(result: &GenerationResult, report: &WriteReport) {
    for path in &report.written {
        println!("Generated: {}", path.display());
    }
    for path in &report.skipped {
        println!("Skipped: {}", path.display());
    }
    for warning in &result.warnings {
        eprintln!("Warning: {warning}");
    }
    for error in result.errors.iter().chain(&report.errors) {
        eprintln!("Error: {error}");
    }

    let stats = result.stats();
    println!();
    println!("✓ Generation complete: {stats}");
    if stats.skipped > 0 {
        println!("  {} type(s) skipped", stats.skipped);
    }
    if stats.warnings > 0 {
        println!("  {} warning(s)", stats.warnings);
    }

    let errors = result.errors.len() + report.errors.len();
    if errors > 0 {
        eprintln!("{errors} error(s) occurred");
    }
}

fn parse_validation_package(value: &str) -> Result<ValidationPackage, String> {
    match value.to_ascii_lowercase().as_str() {
        "jakarta" => Ok(ValidationPackage::Jakarta),
        "javax" => Ok(ValidationPackage::Javax),
        other => Err(format!("expected 'jakarta' or 'javax', got '{other}'")),
    }
}
