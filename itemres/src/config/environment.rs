//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `ITEMRES_*` environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::matcher::{FuzzyStrategy, MatchMode};
use std::env;

/// `exact` or `mixed`.
pub const MATCH_MODE_ENV: &str = "ITEMRES_MATCH_MODE";
/// `transliterate` or `prefix`.
pub const FUZZY_STRATEGY_ENV: &str = "ITEMRES_FUZZY_STRATEGY";
/// Boolean toggle for the display-name fallback.
pub const DISPLAY_NAME_FALLBACK_ENV: &str = "ITEMRES_DISPLAY_NAME_FALLBACK";
/// Boolean toggle for the site start path fallback.
pub const SITE_START_FALLBACK_ENV: &str = "ITEMRES_SITE_START_FALLBACK";
/// Boolean toggle for cross-product candidates when the local path is `/`.
pub const CROSS_PRODUCT_FOR_ROOT_ENV: &str = "ITEMRES_CROSS_PRODUCT_FOR_ROOT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use itemres::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads the `ITEMRES_*` variables and applies them with higher
    /// precedence than file-based configs. Unset variables leave the
    /// configuration untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., unknown match mode, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        Self::apply_matching_overrides(config)?;

        if let Ok(val) = env::var(DISPLAY_NAME_FALLBACK_ENV) {
            config.display_name_fallback = Some(Self::parse_bool(DISPLAY_NAME_FALLBACK_ENV, &val)?);
        }

        if let Ok(val) = env::var(SITE_START_FALLBACK_ENV) {
            config.site_start_fallback = Some(Self::parse_bool(SITE_START_FALLBACK_ENV, &val)?);
        }

        if let Ok(val) = env::var(CROSS_PRODUCT_FOR_ROOT_ENV) {
            config.cross_product_for_root_local_path =
                Some(Self::parse_bool(CROSS_PRODUCT_FOR_ROOT_ENV, &val)?);
        }

        Ok(())
    }

    /// Apply matching-related environment variable overrides.
    fn apply_matching_overrides(config: &mut Config) -> Result<()> {
        let mut matching = config.matching.unwrap_or_default();
        let mut modified = false;

        if let Ok(mode) = env::var(MATCH_MODE_ENV) {
            matching.mode = Some(MatchMode::parse(mode.trim()).map_err(|message| {
                Error::Validation {
                    field: MATCH_MODE_ENV.into(),
                    message,
                }
            })?);
            modified = true;
        }

        if let Ok(fuzzy) = env::var(FUZZY_STRATEGY_ENV) {
            matching.fuzzy = Some(FuzzyStrategy::parse(fuzzy.trim()).map_err(|message| {
                Error::Validation {
                    field: FUZZY_STRATEGY_ENV.into(),
                    message,
                }
            })?);
            modified = true;
        } else if modified && matching.mode == Some(MatchMode::Exact) {
            // Only the mode came from the environment
            matching.fuzzy = None;
        }

        if modified {
            config.matching = Some(matching);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
