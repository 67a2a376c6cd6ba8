use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::Category;

/// Saffron Brew placeholder generator
#[derive(Parser)]
#[command(name = "saffron-placeholders")]
#[command(about = "Generates the Saffron Brew placeholder SVG image set")]
#[command(version)]
pub struct Cli {
    /// Dry-run mode: show which files would be written without touching disk.
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate placeholder images (default when no command is given)
    Generate {
        /// Directory to write category subdirectories into
        #[arg(short, long)]
        output_root: Option<PathBuf>,

        /// JSON catalog to generate instead of the built-in set
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Only generate images of this category (coffee, snacks, interiors)
        #[arg(long)]
        category: Option<Category>,
    },
    /// List catalog entries and their target paths
    List {
        /// Output root the listed paths are resolved against
        #[arg(short, long)]
        output_root: Option<PathBuf>,

        /// JSON catalog to list instead of the built-in set
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
    /// Validate a catalog file
    Validate {
        /// Path to catalog file to validate
        catalog: PathBuf,
    },
    /// Write the built-in catalog to a JSON file
    ExportCatalog {
        /// Destination file
        path: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_no_args() {
        // Running with no args should succeed (defaults to generate)
        let result = Cli::try_parse_from(["saffron-placeholders"]);
        assert!(result.is_ok());
        let cli = result.unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_cli_generate_with_options() {
        let result = Cli::try_parse_from([
            "saffron-placeholders",
            "generate",
            "--output-root",
            "/tmp/images",
            "--category",
            "snacks",
        ]);
        assert!(result.is_ok());
        match result.unwrap().command {
            Some(Commands::Generate {
                output_root,
                catalog,
                category,
            }) => {
                assert_eq!(output_root.unwrap().to_str().unwrap(), "/tmp/images");
                assert!(catalog.is_none());
                assert_eq!(category, Some(Category::Snacks));
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_cli_list_with_output_root() {
        let result = Cli::try_parse_from([
            "saffron-placeholders",
            "list",
            "-o",
            "/srv/site/images",
        ]);
        match result.unwrap().command {
            Some(Commands::List {
                output_root,
                catalog,
            }) => {
                assert_eq!(output_root.unwrap().to_str().unwrap(), "/srv/site/images");
                assert!(catalog.is_none());
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_category() {
        let result = Cli::try_parse_from([
            "saffron-placeholders",
            "generate",
            "--category",
            "desserts",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_global_dry_run() {
        let cli = Cli::try_parse_from(["saffron-placeholders", "generate", "--dry-run"]).unwrap();
        assert!(cli.dry_run);
    }

    #[test]
    fn test_cli_validate_command() {
        let result =
            Cli::try_parse_from(["saffron-placeholders", "validate", "/path/to/catalog.json"]);
        match result.unwrap().command {
            Some(Commands::Validate { catalog }) => {
                assert_eq!(catalog.to_str().unwrap(), "/path/to/catalog.json");
            }
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_cli_export_catalog_command() {
        let result = Cli::try_parse_from(["saffron-placeholders", "export-catalog", "out.json"]);
        assert!(matches!(
            result.unwrap().command,
            Some(Commands::ExportCatalog { .. })
        ));
    }
}
