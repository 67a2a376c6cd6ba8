//! Placeholder generation: resolve output paths and write rendered SVGs.
//!
//! Writes are strictly sequential. The first filesystem failure aborts the
//! run; files already written stay on disk.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::catalog::{Catalog, ImageDescriptor};
use crate::error::{PlaceholderError, Result};
use crate::template::render_descriptor;
use crate::types::CategoryMap;

/// Output root used when none is given on the command line
pub const DEFAULT_OUTPUT_ROOT: &str = "saffronbrew/images";

/// File extension of every generated image
pub const SVG_EXTENSION: &str = "svg";

/// Paths produced by one generation run, in catalog order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub paths: Vec<PathBuf>,
    pub dry_run: bool,
}

impl GenerationReport {
    pub fn count(&self) -> usize {
        self.paths.len()
    }
}

/// Writes placeholder images under an output root
#[derive(Debug, Clone)]
pub struct Generator {
    output_root: PathBuf,
    category_map: CategoryMap,
    dry_run: bool,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_ROOT)
    }
}

impl Generator {
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
            category_map: CategoryMap::DEFAULT,
            dry_run: false,
        }
    }

    pub fn with_category_map(mut self, category_map: CategoryMap) -> Self {
        self.category_map = category_map;
        self
    }

    /// In dry-run mode paths are resolved and reported but nothing is written
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Directory a descriptor's image lands in
    pub fn output_dir(&self, descriptor: &ImageDescriptor) -> PathBuf {
        self.output_root
            .join(self.category_map.subdir(descriptor.category))
    }

    /// `<output_root>/<category_subdir>/<identifier>.svg`
    pub fn output_path(&self, descriptor: &ImageDescriptor) -> PathBuf {
        self.output_dir(descriptor)
            .join(format!("{}.{}", descriptor.identifier, SVG_EXTENSION))
    }

    /// Render and write one descriptor, returning the path written
    pub fn generate_one(&self, descriptor: &ImageDescriptor) -> Result<PathBuf> {
        let dir = self.output_dir(descriptor);
        let path = self.output_path(descriptor);
        let content = render_descriptor(descriptor);

        if self.dry_run {
            debug!("[DRY RUN] Would write {} bytes to {:?}", content.len(), path);
            return Ok(path);
        }

        fs::create_dir_all(&dir).map_err(|source| PlaceholderError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        fs::write(&path, content.as_bytes()).map_err(|source| PlaceholderError::Write {
            path: path.clone(),
            source,
        })?;

        debug!("Wrote {} bytes to {:?}", content.len(), path);
        Ok(path)
    }

    /// Generate every descriptor in order, printing a confirmation line per file
    pub fn generate_all<'a, I>(&self, descriptors: I) -> Result<GenerationReport>
    where
        I: IntoIterator<Item = &'a ImageDescriptor>,
    {
        info!(
            "Generating placeholders under {:?}{}",
            self.output_root,
            if self.dry_run { " (dry run)" } else { "" }
        );

        let mut report = GenerationReport {
            paths: Vec::new(),
            dry_run: self.dry_run,
        };

        for descriptor in descriptors {
            let path = self.generate_one(descriptor)?;
            if self.dry_run {
                println!("Would generate: {}", path.display());
            } else {
                println!("Generated: {}", path.display());
            }
            report.paths.push(path);
        }

        info!("Generated {} placeholder image(s)", report.count());
        Ok(report)
    }

    /// Generate a whole catalog
    pub fn generate_catalog(&self, catalog: &Catalog) -> Result<GenerationReport> {
        self.generate_all(catalog)
    }
}
