//! Saffron Brew placeholder generator - main entry point
//!
//! With no arguments, writes the built-in image set under the default output root.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use saffron_placeholders::cli::{Cli, Commands};
use saffron_placeholders::{Catalog, Category, Generator, DEFAULT_OUTPUT_ROOT};

/// Initialize logging on stderr; stdout carries only the per-file confirmations
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    match cli.command {
        None => run_generate(None, None, None, cli.dry_run),
        Some(Commands::Generate {
            output_root,
            catalog,
            category,
        }) => run_generate(output_root, catalog.as_deref(), category, cli.dry_run),
        Some(Commands::List {
            output_root,
            catalog,
        }) => run_list(output_root, catalog.as_deref()),
        Some(Commands::Validate { catalog }) => run_validate(&catalog),
        Some(Commands::ExportCatalog { path }) => run_export(&path, cli.dry_run),
    }
}

/// Built-in catalog, or the given JSON catalog after validation
fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            info!("Loading catalog from: {:?}", path);
            let catalog = Catalog::load_from_file(path)?;
            catalog
                .validate()
                .with_context(|| format!("Invalid catalog {:?}", path))?;
            Ok(catalog)
        }
        None => Ok(Catalog::builtin()),
    }
}

fn run_generate(
    output_root: Option<PathBuf>,
    catalog: Option<&Path>,
    category: Option<Category>,
    dry_run: bool,
) -> Result<()> {
    let mut catalog = load_catalog(catalog)?;
    if let Some(category) = category {
        catalog = catalog.filter_category(category);
        debug!("Filtered catalog to {} '{}' image(s)", catalog.len(), category);
    }

    let output_root = output_root.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_ROOT));
    let generator = Generator::new(output_root).dry_run(dry_run);

    let report = generator
        .generate_catalog(&catalog)
        .context("Placeholder generation failed")?;

    if report.dry_run {
        info!("[DRY RUN] {} file(s) would be written", report.count());
    }
    Ok(())
}

fn run_list(output_root: Option<PathBuf>, catalog: Option<&Path>) -> Result<()> {
    let catalog = load_catalog(catalog)?;
    let output_root = output_root.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_ROOT));
    let generator = Generator::new(output_root);

    for descriptor in &catalog {
        println!(
            "{:<24} {:<10} {:<32} {}",
            descriptor.identifier,
            descriptor.category,
            descriptor.caption.replace('\n', " / "),
            generator.output_path(descriptor).display()
        );
    }
    Ok(())
}

fn run_validate(path: &Path) -> Result<()> {
    info!("Validating catalog file: {:?}", path);
    let catalog = Catalog::load_from_file(path)?;
    catalog
        .validate()
        .with_context(|| format!("Catalog validation failed for {:?}", path))?;

    println!("✓ Catalog is valid: {} image(s)", catalog.len());
    Ok(())
}

fn run_export(path: &Path, dry_run: bool) -> Result<()> {
    if dry_run {
        println!("Would export built-in catalog to {}", path.display());
        return Ok(());
    }

    Catalog::builtin().save_to_file(path)?;
    info!("Exported built-in catalog to {:?}", path);
    println!("✓ Catalog written to {}", path.display());
    Ok(())
}
