//! Saffron Brew placeholder generator library
//!
//! Renders the placeholder SVG set for the Saffron Brew site from a catalog of
//! image descriptors and writes it under an output root, one subdirectory per
//! category.

pub mod catalog;
pub mod cli;
pub mod error;
pub mod generator;
pub mod template;
pub mod types;

// Re-export main types for convenience
pub use catalog::{Catalog, ImageDescriptor};
pub use error::{PlaceholderError, Result};
pub use generator::{GenerationReport, Generator, DEFAULT_OUTPUT_ROOT};
pub use template::{render_descriptor, render_svg, split_caption};
pub use types::{Category, CategoryMap};
