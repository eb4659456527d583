//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands:
//! configuration loading and request construction.

use crate::error::CliError;
use itemres::resolver::ResolverOptions;
use itemres::{Config, ConfigBuilder};
use std::env;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit resolver configuration file.
    pub config: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. The `--config` file, or discovered configuration files
/// 3. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new().with_working_dir(&env::current_dir()?);

    if let Some(ref path) = global.config {
        if !path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        builder = builder.with_config_file(path);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Load the configuration and convert it into resolver settings.
pub fn load_resolver_options(global: &GlobalOptions) -> Result<ResolverOptions, CliError> {
    let config = load_configuration(global)?;
    Ok(ResolverOptions::from_config(&config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global(config: Option<PathBuf>) -> GlobalOptions {
        GlobalOptions {
            verbose: false,
            quiet: false,
            config,
        }
    }

    #[test]
    fn test_missing_config_file_is_argument_error() {
        let err = load_configuration(&global(Some(PathBuf::from(
            "/nonexistent/itemres.yaml",
        ))))
        .unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_invalid_config_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("itemres.yaml");
        std::fs::write(&path, "matching:\n  mode: exact\n  fuzzy: prefix\n").unwrap();

        let err = load_configuration(&global(Some(path))).unwrap_err();
        assert_eq!(err.exit_code(), 7);
    }

    #[test]
    fn test_explicit_config_file_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.yaml");
        std::fs::write(&path, "site_start_fallback: false\n").unwrap();

        let options = load_resolver_options(&global(Some(path))).unwrap();
        assert!(!options.site_start_fallback);
    }
}
