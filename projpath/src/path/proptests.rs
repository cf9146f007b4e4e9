//! Property-based tests for path handling.
//!
//! The normalize and relative modules carry light property tests of their
//! own. This suite runs many more cases and covers inputs with `.`, `..` and
//! relative segments resolved through a context.

#![cfg(unix)]

use super::brace::expand_braces;
use super::normalize::resolve_components;
use super::relative::relative;
use super::types::PathContext;
use proptest::prelude::*;
use std::path::{Component, PathBuf};

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn absolute_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(path_component_strategy(), 0..8).prop_map(|parts| {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        path
    })
}

fn relative_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(
        prop_oneof![
            3 => path_component_strategy(),
            1 => Just(".".to_string()),
        ],
        1..5,
    )
    .prop_map(|parts| parts.iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // relative(B, A) joined onto A resolves back to B
    #[test]
    fn relative_round_trip(
        target in absolute_path_strategy(),
        base in absolute_path_strategy(),
    ) {
        let ctx = PathContext::new("/ctx").unwrap();
        let rel = relative(&target, &base, &ctx).unwrap();
        let back = resolve_components(&base.join(&rel)).unwrap();
        prop_assert_eq!(back, target);
    }

    // Relative inputs are resolved through the context before comparing
    #[test]
    fn relative_inputs_round_trip(
        ctx_dir in absolute_path_strategy(),
        target in relative_path_strategy(),
        base in absolute_path_strategy(),
    ) {
        let ctx = PathContext::new(&ctx_dir).unwrap();
        let rel = relative(&target, &base, &ctx).unwrap();
        let back = resolve_components(&base.join(&rel)).unwrap();
        prop_assert_eq!(back, ctx.absolute(&target).unwrap());
    }

    // The result never has a root and `..` only appears as a leading run
    #[test]
    fn relative_shape(
        target in absolute_path_strategy(),
        base in absolute_path_strategy(),
    ) {
        let ctx = PathContext::new("/ctx").unwrap();
        let rel = relative(&target, &base, &ctx).unwrap();
        prop_assert!(!rel.has_root());

        let mut seen_normal = false;
        for component in rel.components() {
            match component {
                Component::ParentDir => prop_assert!(!seen_normal),
                Component::Normal(_) => seen_normal = true,
                other => prop_assert!(false, "unexpected component {:?}", other),
            }
        }
    }

    // Number of `..` equals base depth minus the shared prefix
    #[test]
    fn relative_parent_count(
        shared in absolute_path_strategy(),
        base_tail in prop::collection::vec("b[a-z]{0,4}", 0..4),
        target_tail in prop::collection::vec("t[a-z]{0,4}", 0..4),
    ) {
        let ctx = PathContext::new("/ctx").unwrap();
        let mut base = shared.clone();
        for part in &base_tail {
            base.push(part);
        }
        let mut target = shared.clone();
        for part in &target_tail {
            target.push(part);
        }

        let rel = relative(&target, &base, &ctx).unwrap();
        let parents = rel
            .components()
            .filter(|c| matches!(c, Component::ParentDir))
            .count();
        prop_assert_eq!(parents, base_tail.len());
    }

    // Brace expansion produces the cartesian product of the alternatives
    #[test]
    fn brace_expansion_product(
        left in prop::collection::vec("[a-z]{1,3}", 1..4),
        right in prop::collection::vec("[a-z]{1,3}", 1..4),
    ) {
        let pattern = format!("{{{}}}/{{{}}}", left.join(","), right.join(","));
        let expanded = expand_braces(&pattern);
        prop_assert_eq!(expanded.len(), left.len() * right.len());

        let mut expected = Vec::new();
        for l in &left {
            for r in &right {
                expected.push(format!("{l}/{r}"));
            }
        }
        prop_assert_eq!(expanded, expected);
    }
}
