//! Image descriptors and the catalog that holds them.
//!
//! The built-in catalog is a static table compiled into the binary. A catalog
//! can also be saved to and loaded from JSON so the set can be edited without
//! rebuilding.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::PlaceholderError;
use crate::template::split_caption;
use crate::types::Category;

/// One output image: file stem, caption text and category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    pub identifier: String,
    /// Caption; a `\n` separates the primary and secondary line
    pub caption: String,
    pub category: Category,
}

impl ImageDescriptor {
    pub fn new(
        identifier: impl Into<String>,
        caption: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            caption: caption.into(),
            category,
        }
    }

    /// Check that the descriptor maps to a single safe file name
    pub fn validate(&self) -> crate::error::Result<()> {
        let id = self.identifier.as_str();
        if id.is_empty() {
            return Err(PlaceholderError::catalog("Identifier must not be empty"));
        }
        if id.contains("..") || id.contains('/') || id.contains('\\') {
            return Err(PlaceholderError::catalog(format!(
                "Identifier '{}' must not contain path components",
                id
            )));
        }
        if !id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(PlaceholderError::catalog(format!(
                "Identifier '{}' can only contain letters, numbers, '_' and '-'",
                id
            )));
        }
        if let Some(c) = self.caption.chars().find(|&c| is_forbidden_in_xml(c)) {
            return Err(PlaceholderError::catalog(format!(
                "Caption for '{}' contains control character {:?}",
                id, c
            )));
        }
        let (line1, _) = split_caption(&self.caption);
        if line1.trim().is_empty() {
            return Err(PlaceholderError::catalog(format!(
                "Caption for '{}' has an empty first line",
                id
            )));
        }
        Ok(())
    }
}

/// Control characters XML 1.0 does not allow in text content
fn is_forbidden_in_xml(c: char) -> bool {
    c.is_control() && !matches!(c, '\n' | '\t' | '\r')
}

/// Built-in image table: (identifier, caption, category)
const BUILTIN_IMAGES: &[(&str, &str, Category)] = &[
    // Coffee
    ("malabar_espresso", "Malabar\nEspresso", Category::Coffee),
    ("cardamom_latte", "Cardamom\nLatte", Category::Coffee),
    ("filter_coffee", "Filter\nKaapi", Category::Coffee),
    ("saffron_chai", "Kesar\nMasala Chai", Category::Coffee),
    ("rose_chai", "Pistachio\n& Rose", Category::Coffee),
    ("ginger_chai", "Pahadi\nChai", Category::Coffee),
    ("coconut_cold_brew", "Coconut\nCold Brew", Category::Coffee),
    ("espresso_tonic", "Espresso\nTonic", Category::Coffee),
    // Snacks and desserts
    ("truffle_samosa", "Truffle\nSamosa", Category::Snacks),
    ("brioce_vada_pav", "Brioche\nSliders", Category::Snacks),
    ("cheese_toast", "Chilli\nCheese Toast", Category::Snacks),
    ("gulab_jamun_cheesecake", "Gulab Jamun\nCheesecake", Category::Snacks),
    ("rasmalai_tiramisu", "Rasmalai\nTiramisu", Category::Snacks),
    ("chocolate_tart", "Spiced\nChocolate", Category::Snacks),
    // Hero
    ("hero", "Saffron Brew\nInteriors", Category::Interiors),
    // Index page
    ("cappuccino", "Masala\nCappuccino", Category::Coffee),
    ("gulab_jamun", "Gulab Jamun\nCheesecake", Category::Snacks),
    ("chai", "Royal\nKullad Chai", Category::Coffee),
];

/// Ordered list of descriptors to generate
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub images: Vec<ImageDescriptor>,
}

impl Catalog {
    pub fn new(images: Vec<ImageDescriptor>) -> Self {
        Self { images }
    }

    /// The catalog compiled into the binary
    pub fn builtin() -> Self {
        let images = BUILTIN_IMAGES
            .iter()
            .map(|&(identifier, caption, category)| {
                ImageDescriptor::new(identifier, caption, category)
            })
            .collect();
        Self { images }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageDescriptor> {
        self.images.iter()
    }

    /// Keep only descriptors of one category, preserving order
    pub fn filter_category(&self, category: Category) -> Self {
        let images = self
            .images
            .iter()
            .filter(|d| d.category == category)
            .cloned()
            .collect();
        Self { images }
    }

    /// Save the catalog to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize catalog to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write catalog to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load a catalog from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog from {:?}", path.as_ref()))?;

        let catalog: Self =
            serde_json::from_str(&content).context("Failed to parse catalog JSON")?;

        Ok(catalog)
    }

    /// Validate every descriptor and reject two descriptors writing one file
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.images.is_empty() {
            return Err(PlaceholderError::catalog("Catalog contains no images"));
        }

        let mut seen = HashSet::new();
        for descriptor in &self.images {
            descriptor.validate()?;
            if !seen.insert((descriptor.category, descriptor.identifier.as_str())) {
                return Err(PlaceholderError::catalog(format!(
                    "Duplicate image '{}' in category '{}'",
                    descriptor.identifier, descriptor.category
                )));
            }
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ImageDescriptor;
    type IntoIter = std::slice::Iter<'a, ImageDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}
