//! Configuration schema definitions.
//!
//! This module defines the configuration structure for the resolver:
//! matching mode, fallback toggles and URL name replacements.

use serde::{Deserialize, Serialize};

use crate::matcher::{FuzzyStrategy, MatchMode};

/// Complete configuration structure.
///
/// Every field is optional so that partial configurations from several
/// sources can be layered on top of each other.
///
/// # Examples
///
/// ```
/// use itemres::config::{Config, MatchingConfig};
/// use itemres::matcher::MatchMode;
///
/// let config = Config {
///     matching: Some(MatchingConfig {
///         mode: Some(MatchMode::Mixed),
///         fuzzy: None,
///     }),
///     display_name_fallback: Some(false),
///     ..Default::default()
/// };
/// assert_eq!(config.display_name_fallback, Some(false));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Name matching settings.
    pub matching: Option<MatchingConfig>,

    /// Resolve by display name when direct lookup fails or hits a wildcard.
    pub display_name_fallback: Option<bool>,

    /// Allow falling back to the site start path.
    pub site_start_fallback: Option<bool>,

    /// Generate root × start item × local candidates when the local path
    /// is `/`.
    pub cross_product_for_root_local_path: Option<bool>,

    /// Character replacements used when item names are written into URLs.
    pub name_replacements: Option<Vec<NameReplacement>>,
}

/// Name matching settings.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MatchingConfig {
    /// Matching mode.
    pub mode: Option<MatchMode>,

    /// Fuzzy fallback used by the `mixed` mode.
    pub fuzzy: Option<FuzzyStrategy>,
}

/// A single URL name replacement.
///
/// `find` is the text in the item name, `replace_with` the text written
/// into URLs in its place.
///
/// # Examples
///
/// ```
/// use itemres::config::NameReplacement;
///
/// let space = NameReplacement::new(" ", "-");
/// assert_eq!(space.find, " ");
/// assert_eq!(space.replace_with, "-");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(deny_unknown_fields)]
pub struct NameReplacement {
    /// Text as it appears in item names.
    pub find: String,

    /// Text as it appears in URLs.
    pub replace_with: String,
}

impl NameReplacement {
    /// Create a replacement.
    #[must_use]
    pub fn new(find: impl Into<String>, replace_with: impl Into<String>) -> Self {
        Self {
            find: find.into(),
            replace_with: replace_with.into(),
        }
    }
}

impl Config {
    /// The configured matching mode, or the default.
    #[must_use]
    pub fn match_mode(&self) -> MatchMode {
        self.matching
            .and_then(|matching| matching.mode)
            .unwrap_or_default()
    }

    /// The configured fuzzy strategy, or the default.
    #[must_use]
    pub fn fuzzy_strategy(&self) -> FuzzyStrategy {
        self.matching
            .and_then(|matching| matching.fuzzy)
            .unwrap_or_default()
    }
}
