//! Configuration validation.
//!
//! This module checks that configuration values are usable by the resolver
//! and consistent with each other.

use crate::config::schema::{Config, MatchingConfig, NameReplacement};
use crate::error::{Error, Result};
use crate::matcher::MatchMode;
use crate::path::normalize::SEPARATOR;
use std::collections::HashSet;

/// Validates configuration.
///
/// # Examples
///
/// ```
/// use itemres::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref matching) = config.matching {
            Self::validate_matching(matching)?;
        }

        if let Some(ref replacements) = config.name_replacements {
            Self::validate_replacements(replacements)?;
        }

        Ok(())
    }

    /// A fuzzy strategy only applies to the `mixed` mode.
    fn validate_matching(matching: &MatchingConfig) -> Result<()> {
        if matching.mode == Some(MatchMode::Exact) && matching.fuzzy.is_some() {
            return Err(Error::Validation {
                field: "matching.fuzzy".into(),
                message: "fuzzy strategy requires mode: mixed".into(),
            });
        }
        Ok(())
    }

    /// Validate URL name replacements.
    ///
    /// Both sides must be non-empty and free of the path separator, and
    /// each `find` may appear only once.
    fn validate_replacements(replacements: &[NameReplacement]) -> Result<()> {
        let mut seen = HashSet::new();

        for (index, replacement) in replacements.iter().enumerate() {
            Self::validate_replacement_text(
                &format!("name_replacements[{index}].find"),
                &replacement.find,
            )?;
            Self::validate_replacement_text(
                &format!("name_replacements[{index}].replace_with"),
                &replacement.replace_with,
            )?;

            if !seen.insert(replacement.find.as_str()) {
                return Err(Error::Validation {
                    field: format!("name_replacements[{index}].find"),
                    message: format!("Duplicate replacement for '{}'", replacement.find),
                });
            }
        }

        Ok(())
    }

    fn validate_replacement_text(field: &str, value: &str) -> Result<()> {
        if value.is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty".into(),
            });
        }

        if value.contains(SEPARATOR) {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Cannot contain the path separator '{SEPARATOR}'"),
            });
        }

        if value.contains('\0') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain null bytes".into(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::FuzzyStrategy;

    fn with_replacements(replacements: Vec<NameReplacement>) -> Config {
        Config {
            name_replacements: Some(replacements),
            ..Default::default()
        }
    }

    fn field_of(result: Result<()>) -> String {
        match result {
            Err(Error::Validation { field, .. }) => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_empty_config() {
        assert!(ConfigValidator::validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_fuzzy_with_mixed() {
        let config = Config {
            matching: Some(MatchingConfig {
                mode: Some(MatchMode::Mixed),
                fuzzy: Some(FuzzyStrategy::Prefix),
            }),
            ..Default::default()
        };
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_validate_fuzzy_with_unset_mode() {
        // The mode may come from another source
        let config = Config {
            matching: Some(MatchingConfig {
                mode: None,
                fuzzy: Some(FuzzyStrategy::Prefix),
            }),
            ..Default::default()
        };
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_validate_fuzzy_with_exact_rejected() {
        let config = Config {
            matching: Some(MatchingConfig {
                mode: Some(MatchMode::Exact),
                fuzzy: Some(FuzzyStrategy::Transliterate),
            }),
            ..Default::default()
        };
        assert_eq!(field_of(ConfigValidator::validate(&config)), "matching.fuzzy");
    }

    #[test]
    fn test_validate_replacements_valid() {
        let config = with_replacements(vec![
            NameReplacement::new("&", ",-a-,"),
            NameReplacement::new(" ", "-"),
        ]);
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_validate_empty_find_rejected() {
        let config = with_replacements(vec![NameReplacement::new("", "-")]);
        assert_eq!(
            field_of(ConfigValidator::validate(&config)),
            "name_replacements[0].find"
        );
    }

    #[test]
    fn test_validate_empty_replace_with_rejected() {
        let config = with_replacements(vec![
            NameReplacement::new(" ", "-"),
            NameReplacement::new("?", ""),
        ]);
        assert_eq!(
            field_of(ConfigValidator::validate(&config)),
            "name_replacements[1].replace_with"
        );
    }

    #[test]
    fn test_validate_separator_rejected() {
        let config = with_replacements(vec![NameReplacement::new(" ", "/")]);
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(format!("{err}").contains("path separator"));

        let config = with_replacements(vec![NameReplacement::new("a/b", "-")]);
        assert!(ConfigValidator::validate(&config).is_err());
    }

    #[test]
    fn test_validate_duplicate_find_rejected() {
        let config = with_replacements(vec![
            NameReplacement::new(" ", "-"),
            NameReplacement::new(" ", "_"),
        ]);
        let err = ConfigValidator::validate(&config).unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("name_replacements[1].find"));
        assert!(msg.contains("Duplicate"));
    }
}
