//! Error handling for the placeholder generator
//!
//! Provides the library's error type using thiserror. Filesystem failures
//! carry the path that failed so the binary can report it without extra context.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for placeholder generation
#[derive(Error, Debug)]
pub enum PlaceholderError {
    /// Output directory could not be created
    #[error("Failed to create directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rendered SVG could not be written
    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog errors (invalid descriptors, empty catalog)
    #[error("Catalog error: {0}")]
    Catalog(String),
}

/// Result type alias for placeholder operations
pub type Result<T> = std::result::Result<T, PlaceholderError>;

impl PlaceholderError {
    /// Create a catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Path involved in a filesystem failure, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::CreateDir { path, .. } | Self::Write { path, .. } => Some(path),
            _ => None,
        }
    }
}
