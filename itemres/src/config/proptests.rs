//! Property-based tests for the configuration system.

use super::builder::ConfigBuilder;
use super::merger::ConfigMerger;
use super::schema::{Config, MatchingConfig, NameReplacement};
use crate::matcher::{FuzzyStrategy, MatchMode};
use proptest::prelude::*;

fn matching_strategy() -> impl Strategy<Value = MatchingConfig> {
    (
        prop::option::of(prop_oneof![Just(MatchMode::Exact), Just(MatchMode::Mixed)]),
        prop::option::of(prop_oneof![
            Just(FuzzyStrategy::Transliterate),
            Just(FuzzyStrategy::Prefix)
        ]),
    )
        .prop_map(|(mode, fuzzy)| MatchingConfig { mode, fuzzy })
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(matching_strategy()),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
        prop::option::of(prop::collection::vec("[ &?+]", 0..3)),
    )
        .prop_map(|(matching, display, site, cross, finds)| Config {
            matching,
            display_name_fallback: display,
            site_start_fallback: site,
            cross_product_for_root_local_path: cross,
            name_replacements: finds.map(|finds| {
                finds
                    .into_iter()
                    .map(|find| NameReplacement::new(find, "-"))
                    .collect()
            }),
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Merging preserves every value the higher-precedence source sets
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        if high.display_name_fallback.is_some() {
            prop_assert_eq!(merged.display_name_fallback, high.display_name_fallback);
        } else {
            prop_assert_eq!(merged.display_name_fallback, low.display_name_fallback);
        }
        if high.site_start_fallback.is_some() {
            prop_assert_eq!(merged.site_start_fallback, high.site_start_fallback);
        }
        if let Some(mode) = high.matching.and_then(|m| m.mode) {
            prop_assert_eq!(merged.match_mode(), mode);
        }
    }

    // Every replacement `find` from either side survives a merge exactly once
    #[test]
    fn config_merge_replacements_cover_both_sides(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        let merged_finds: Vec<String> = merged
            .name_replacements
            .unwrap_or_default()
            .into_iter()
            .map(|r| r.find)
            .collect();
        for side in [&low, &high] {
            for replacement in side.name_replacements.iter().flatten() {
                prop_assert!(merged_finds.contains(&replacement.find));
            }
        }
    }

    // Programmatic overrides always reach the built configuration
    #[test]
    fn builder_applies_overrides(display in any::<bool>(), site in any::<bool>()) {
        let config = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                display_name_fallback: Some(display),
                site_start_fallback: Some(site),
                ..Default::default()
            })
            .build()
            .unwrap();
        prop_assert_eq!(config.display_name_fallback, Some(display));
        prop_assert_eq!(config.site_start_fallback, Some(site));
    }
}
