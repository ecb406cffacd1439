use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use dtogen_common::{FileSystem, RealFileSystem};
use dtogen_exporter::{ExportOptions, SourceScanner, TypescriptExporter};
use dtogen_schema::{Manifest, Registry};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// The path to scan for DTO classes (defaults to the configured namespace)
    pub dto_path: Option<String>,

    /// Output directory path (overrides config)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output filename (default: dtos.ts)
    #[arg(short, long)]
    pub filename: Option<String>,
}

pub fn export(args: ExportArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let fs = RealFileSystem;

    let dto_path = match &args.dto_path {
        Some(path) => Path::new(cwd).join(path),
        None => config.get_dto_path(cwd),
    };
    let output_path = match &args.output {
        Some(path) => Path::new(cwd).join(path),
        None => config.get_output_path(cwd),
    };
    let filename = args
        .filename
        .clone()
        .unwrap_or_else(|| config.typescript.filename.clone());

    if !fs.is_dir(&dto_path) {
        return Err(anyhow!("DTO path '{}' does not exist.", dto_path.display()));
    }

    let registry = load_registry(&fs, &config.get_manifest_path(cwd))?;

    println!(
        "{}",
        "📦 Exporting DTO classes to TypeScript...".bright_blue().bold()
    );

    let mut exporter = TypescriptExporter::new(&fs, &registry)
        .with_discovery(SourceScanner::new(config.scan.extension.clone()))
        .with_options(ExportOptions {
            base_class: config.base_class.clone(),
            ..Default::default()
        });

    let report = exporter
        .export(&dto_path, &output_path, &filename)
        .map_err(|e| anyhow!("Export failed: {}", e))?;

    match &report.file {
        Some(file) => println!(
            "{}",
            format!(
                "Successfully exported {} DTO classes to {}",
                report.count,
                file.display()
            )
            .green()
        ),
        None => println!("{}", "No DTO classes found to export.".yellow()),
    }

    if !report.skipped.is_empty() {
        println!("{}", "Skipped classes:".yellow());
        for skipped in &report.skipped {
            println!("  - {}", skipped);
        }
    }

    Ok(())
}

/// Classes known to the export run. A missing manifest leaves the registry
/// empty, so every scanned class is unresolvable.
fn load_registry(fs: &dyn FileSystem, manifest_path: &Path) -> Result<Registry> {
    if !fs.exists(manifest_path) {
        warn!(path = %manifest_path.display(), "Class manifest not found, no classes can be resolved");
        return Ok(Registry::new());
    }

    let manifest = Manifest::load(fs, manifest_path)
        .with_context(|| format!("Cannot load manifest {}", manifest_path.display()))?;
    let registry = Registry::from_manifest(manifest);
    debug!(classes = registry.len(), "Registry ready");
    Ok(registry)
}
