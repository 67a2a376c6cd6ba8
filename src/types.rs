//! Type-safe image categories
//!
//! Categories are a closed enum rather than free-form strings so an unknown
//! category is rejected at parse time instead of producing a stray directory.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Menu section an image belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    #[default]
    Coffee,
    Snacks,
    Interiors,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

/// Mapping from category to output subdirectory name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryMap {
    pub coffee: &'static str,
    pub snacks: &'static str,
    pub interiors: &'static str,
}

impl CategoryMap {
    /// Built-in mapping: every category writes to a directory of its own name
    pub const DEFAULT: CategoryMap = CategoryMap {
        coffee: "coffee",
        snacks: "snacks",
        interiors: "interiors",
    };

    pub fn subdir(&self, category: Category) -> &'static str {
        match category {
            Category::Coffee => self.coffee,
            Category::Snacks => self.snacks,
            Category::Interiors => self.interiors,
        }
    }

    /// All (category, subdirectory) pairs in declaration order
    pub fn entries(&self) -> Vec<(Category, &'static str)> {
        Category::iter().map(|c| (c, self.subdir(c))).collect()
    }
}

impl Default for CategoryMap {
    fn default() -> Self {
        Self::DEFAULT
    }
}
