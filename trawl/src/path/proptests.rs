//! Property-based tests for path handling.
//!
//! Note: The normalize module already has property tests for the
//! lexical rules. This module exercises best-effort canonicalization
//! against a real temporary directory tree.

use std::fs;
use std::path::PathBuf;

use proptest::prelude::*;
use tempfile::tempdir;

use super::canonicalize::{canonicalize, canonicalize_partial};
use super::normalize::resolve_components;

// Strategy for generating path-like component strings
fn component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn relative_suffix_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(component_strategy(), 1..6).prop_map(|parts| parts.iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        max_shrink_iters: 1000,
        .. ProptestConfig::default()
    })]

    // The nonexistent remainder is appended verbatim to the resolved
    // ancestor
    #[test]
    fn partial_preserves_nonexistent_suffix(suffix in relative_suffix_strategy()) {
        let dir = tempdir().unwrap();
        let wanted = dir.path().join(&suffix);

        let resolved = canonicalize_partial(&wanted).unwrap().unwrap();
        let expected = fs::canonicalize(dir.path()).unwrap().join(&suffix);
        prop_assert_eq!(resolved, expected);
    }

    // Canonicalizing an existing path and partially canonicalizing it
    // agree
    #[test]
    fn partial_agrees_with_strict_for_existing(name in component_strategy()) {
        let dir = tempdir().unwrap();
        let target = dir.path().join(&name);
        fs::create_dir(&target).unwrap();

        let strict = canonicalize(&target).unwrap();
        let partial = canonicalize_partial(&target).unwrap().unwrap();
        prop_assert_eq!(strict, partial);
    }

    // Partial canonicalization is idempotent
    #[test]
    fn partial_idempotent(suffix in relative_suffix_strategy()) {
        let dir = tempdir().unwrap();
        let wanted = dir.path().join(&suffix);

        let once = canonicalize_partial(&wanted).unwrap().unwrap();
        let twice = canonicalize_partial(&once).unwrap().unwrap();
        prop_assert_eq!(once, twice);
    }

    // A partial result is always absolute and lexically clean for
    // dot-free inputs
    #[test]
    fn partial_result_is_absolute(suffix in relative_suffix_strategy()) {
        let dir = tempdir().unwrap();
        let wanted = dir.path().join(&suffix);

        let resolved = canonicalize_partial(&wanted).unwrap().unwrap();
        prop_assert!(resolved.is_absolute());
        prop_assert_eq!(resolve_components(&resolved).unwrap(), resolved.clone());
    }
}
