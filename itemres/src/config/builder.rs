//! Configuration builder.
//!
//! Layers built-in defaults, discovered files, environment variables and
//! programmatic overrides into one validated [`Config`].

use std::env;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::merger::ConfigMerger;
use crate::config::schema::{Config, MatchingConfig};
use crate::config::validator::ConfigValidator;
use crate::error::Result;
use crate::matcher::MatchMode;

/// Builds the effective configuration.
///
/// # Examples
///
/// ```
/// use itemres::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         site_start_fallback: Some(false),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.site_start_fallback, Some(false));
/// assert_eq!(config.display_name_fallback, Some(true));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
    overrides: Vec<Config>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Create a builder that reads files from the current directory and the
    /// user config directory, and applies environment overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start project config discovery from `dir` instead of the current
    /// directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Load the user config from `dir` instead of `~/.itemres`.
    #[must_use]
    pub fn with_config_dir(mut self, dir: &Path) -> Self {
        self.config_dir = Some(dir.to_path_buf());
        self
    }

    /// Use exactly this file instead of discovering user and project files.
    #[must_use]
    pub fn with_config_file(mut self, path: &Path) -> Self {
        self.config_file = Some(path.to_path_buf());
        self
    }

    /// Apply `config` on top of every other source.
    ///
    /// May be called several times; later calls win.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Do not read any configuration file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not apply `ITEMRES_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Built-in defaults, the lowest-precedence source.
    #[must_use]
    pub fn defaults() -> Config {
        Config {
            matching: Some(MatchingConfig {
                mode: Some(MatchMode::Exact),
                fuzzy: None,
            }),
            display_name_fallback: Some(true),
            site_start_fallback: Some(true),
            cross_product_for_root_local_path: Some(true),
            name_replacements: Some(Vec::new()),
        }
    }

    /// Merge every source and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed,
    /// an environment variable is invalid, or the merged configuration
    /// fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = Self::defaults();

        if !self.skip_files {
            for source in self.file_sources()? {
                debug!("applying configuration from {}", source.path.display());
                ConfigMerger::merge_into(&mut config, &source.config);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for overrides in &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    fn file_sources(&self) -> Result<Vec<ConfigSource>> {
        if let Some(ref path) = self.config_file {
            let config = ConfigLoader::load_file(path)?;
            return Ok(vec![ConfigSource {
                path: path.clone(),
                precedence: 4,
                config,
            }]);
        }

        let working_dir = match self.working_dir {
            Some(ref dir) => dir.clone(),
            None => env::current_dir()?,
        };
        ConfigLoader::load_all(&working_dir, self.config_dir.as_deref())
    }
}
