//! Configuration merging and precedence handling.
//!
//! This module implements hierarchical merging of configuration sources,
//! with special handling for the accumulated `name_replacements` list.

use crate::config::schema::{Config, MatchingConfig, NameReplacement};
use crate::matcher::MatchMode;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use itemres::config::{Config, ConfigMerger};
///
/// let low = Config { site_start_fallback: Some(true), ..Default::default() };
/// let high = Config { site_start_fallback: Some(false), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.site_start_fallback, Some(false));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Toggles: source overwrites if Some
    /// - Matching: field-by-field merge
    /// - Name replacements: accumulated in precedence order; a source entry
    ///   with the same `find` as an existing one replaces it in place
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.display_name_fallback.is_some() {
            target.display_name_fallback = source.display_name_fallback;
        }

        if source.site_start_fallback.is_some() {
            target.site_start_fallback = source.site_start_fallback;
        }

        if source.cross_product_for_root_local_path.is_some() {
            target.cross_product_for_root_local_path = source.cross_product_for_root_local_path;
        }

        if let Some(source_matching) = source.matching {
            target.matching = Some(match target.matching {
                Some(target_matching) => Self::merge_matching(target_matching, source_matching),
                None => source_matching,
            });
        }

        if let Some(ref source_replacements) = source.name_replacements {
            match &mut target.name_replacements {
                Some(target_replacements) => {
                    Self::merge_replacements(target_replacements, source_replacements);
                }
                None => {
                    target.name_replacements.clone_from(&source.name_replacements);
                }
            }
        }
    }

    /// Merge matching configuration.
    ///
    /// Source values take precedence over target values. A source that
    /// switches to `exact` without naming a strategy drops the inherited one.
    fn merge_matching(target: MatchingConfig, source: MatchingConfig) -> MatchingConfig {
        let fuzzy = match (source.mode, source.fuzzy) {
            (_, Some(fuzzy)) => Some(fuzzy),
            (Some(MatchMode::Exact), None) => None,
            (_, None) => target.fuzzy,
        };
        MatchingConfig {
            mode: source.mode.or(target.mode),
            fuzzy,
        }
    }

    fn merge_replacements(target: &mut Vec<NameReplacement>, source: &[NameReplacement]) {
        for replacement in source {
            match target.iter_mut().find(|existing| existing.find == replacement.find) {
                Some(existing) => existing.clone_from(replacement),
                None => target.push(replacement.clone()),
            }
        }
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn toggle() -> impl Strategy<Value = Option<bool>> {
        proptest::option::of(any::<bool>())
    }

    proptest! {
        // Merging a config into itself changes nothing
        #[test]
        fn prop_merge_idempotent(
            display in toggle(),
            site in toggle(),
            finds in proptest::collection::hash_set("[ &?+]", 0..4),
        ) {
            let config = Config {
                display_name_fallback: display,
                site_start_fallback: site,
                name_replacements: Some(
                    finds.into_iter().map(|find| NameReplacement::new(find, "-")).collect()
                ),
                ..Default::default()
            };
            let mut merged = config.clone();
            ConfigMerger::merge_into(&mut merged, &config);
            prop_assert_eq!(merged, config);
        }

        // A set toggle in the source always wins
        #[test]
        fn prop_source_wins(target in toggle(), source in any::<bool>()) {
            let mut merged = Config { display_name_fallback: target, ..Default::default() };
            let high = Config { display_name_fallback: Some(source), ..Default::default() };
            ConfigMerger::merge_into(&mut merged, &high);
            prop_assert_eq!(merged.display_name_fallback, Some(source));
        }
    }
}
