//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, GlobConfig};
use proptest::prelude::*;

fn glob_config_strategy() -> impl Strategy<Value = GlobConfig> {
    (
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(brace, mark, case, tilde)| GlobConfig {
            brace_expansion: brace,
            mark_directories: mark,
            case_sensitive: case,
            tilde_expansion: tilde,
        })
}

fn config_strategy() -> impl Strategy<Value = Config> {
    prop::option::of(glob_config_strategy()).prop_map(|glob| Config { glob })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Set fields from the higher source win, unset ones fall through
    #[test]
    fn config_merge_higher_precedence_wins(low in glob_config_strategy(), high in glob_config_strategy()) {
        let mut merged = Config { glob: Some(low.clone()) };
        ConfigMerger::merge_into(&mut merged, &Config { glob: Some(high.clone()) });
        let merged = merged.glob.unwrap();

        prop_assert_eq!(merged.brace_expansion, high.brace_expansion.or(low.brace_expansion));
        prop_assert_eq!(merged.mark_directories, high.mark_directories.or(low.mark_directories));
        prop_assert_eq!(merged.case_sensitive, high.case_sensitive.or(low.case_sensitive));
        prop_assert_eq!(merged.tilde_expansion, high.tilde_expansion.or(low.tilde_expansion));
    }

    // Merging a config into itself changes nothing
    #[test]
    fn config_merge_idempotent(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged.glob.unwrap_or_default(), config.glob.unwrap_or_default());
    }

    // Merging is associative
    #[test]
    fn config_merge_associative(a in config_strategy(), b in config_strategy(), c in config_strategy()) {
        let mut left = a.clone();
        ConfigMerger::merge_into(&mut left, &b);
        ConfigMerger::merge_into(&mut left, &c);

        let mut bc = b.clone();
        ConfigMerger::merge_into(&mut bc, &c);
        let mut right = a.clone();
        ConfigMerger::merge_into(&mut right, &bc);

        prop_assert_eq!(left, right);
    }

    // YAML serialization round-trips
    #[test]
    fn config_yaml_round_trip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
