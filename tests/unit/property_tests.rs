//! Property-based tests for selection and synthesis invariants.
//!
//! Uses `proptest` to verify invariants across many random inputs.

use proptest::prelude::*;

use rigup::domain::catalog::Catalog;
use rigup::domain::command::synthesize;
use rigup::domain::pkgmgr::PackageManager;
use rigup::domain::selection::{resolve_by_index, resolve_by_name};

fn catalog_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(Catalog::default().names().collect::<Vec<_>>())
}

proptest! {
    /// Resolved name lists never contain duplicates and stay in
    /// first-occurrence order of the input.
    #[test]
    fn prop_name_resolution_dedups_preserving_order(
        picks in prop::collection::vec(catalog_name(), 1..12)
    ) {
        let raw = picks.join(",");
        let catalog = Catalog::default();
        let resolved = resolve_by_name(raw.split(','), &catalog).expect("catalog names");

        let mut expected: Vec<String> = Vec::new();
        for name in &picks {
            if !expected.iter().any(|seen| seen.as_str() == *name) {
                expected.push((*name).to_string());
            }
        }
        prop_assert_eq!(resolved, expected);
    }

    /// Index resolution never returns duplicates or out-of-range values.
    #[test]
    fn prop_index_resolution_is_unique_and_in_range(
        indices in prop::collection::vec(1usize..=9, 0..15)
    ) {
        let raw = indices
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let resolved = resolve_by_index(&raw, 9).expect("in-range digits");

        let unique: std::collections::HashSet<_> = resolved.iter().copied().collect();
        prop_assert_eq!(unique.len(), resolved.len(), "duplicates in {:?}", resolved);
        prop_assert!(resolved.iter().all(|i| (1..=9).contains(i)));
    }

    /// Synthesis is deterministic and never leaks an unquoted
    /// metacharacter from a hostile package name.
    #[test]
    fn prop_synthesis_is_deterministic_and_quotes(
        name in "[a-z]{1,8}[;&|$` ]{1,3}[a-z]{1,8}",
        password in proptest::option::of("[a-zA-Z0-9 !#%]{1,12}"),
    ) {
        let packages = [name.as_str()];
        let first = synthesize(PackageManager::Dnf, &packages, password.as_deref());
        let second = synthesize(PackageManager::Dnf, &packages, password.as_deref());
        prop_assert_eq!(&first, &second);

        // The raw name must only ever appear inside single quotes.
        let quoted = shell_words::quote(&name).into_owned();
        prop_assert!(quoted.starts_with('\''), "metacharacter name not quoted: {}", quoted);
    }
}

#[test]
fn resolved_selection_is_always_a_catalog_subset() {
    let catalog = Catalog::default();
    let resolved = resolve_by_name("git, docker ,git,htop".split(','), &catalog).expect("valid");
    for name in &resolved {
        assert!(catalog.lookup(name).is_some(), "{name} not in catalog");
    }
}
