//! Configuration system for the resolver.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project `itemres.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of the merged result
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`ITEMRES_*`)
//! 3. Private project config (`itemres.local.yaml`)
//! 4. Project config (`itemres.yaml`)
//! 5. User config (`~/.itemres/config.yaml`)
//! 6. Built-in defaults
//!
//! An explicit file given to `ConfigBuilder::with_config_file` replaces
//! levels 3 to 5.
//!
//! # Examples
//!
//! Basic usage with defaults:
//!
//! ```no_run
//! use itemres::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("matching: {:?}", config.match_mode());
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use itemres::config::{Config, ConfigBuilder, MatchingConfig};
//! use itemres::matcher::{FuzzyStrategy, MatchMode};
//!
//! let custom = Config {
//!     matching: Some(MatchingConfig {
//!         mode: Some(MatchMode::Mixed),
//!         fuzzy: Some(FuzzyStrategy::Prefix),
//!     }),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.fuzzy_strategy(), FuzzyStrategy::Prefix);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, MatchingConfig, NameReplacement};
pub use validator::ConfigValidator;
