mod common;

use cmdtree_core::identity::{derive_name, MAX_NAME_LEN, NAME_SEPARATOR};
use cmdtree_core::CommandPath;
use common::path;
use proptest::prelude::*;
use std::collections::HashSet;

#[test]
fn test_name_is_deterministic() {
    let p = path(&["ip prefix-list PL-A", "seq 10 permit 10.0.0.1/32 eq 32"]);
    let first = derive_name("xr-1", &p);
    for _ in 0..100 {
        assert_eq!(derive_name("xr-1", &p), first);
    }
    assert_eq!(first, "xr-1-b1ed3974cd");
}

#[test]
fn test_no_collisions_across_ten_thousand_paths() {
    let mut seen = HashSet::new();

    for list in 0..100 {
        for seq in 0..100 {
            let container = format!("ip prefix-list PL-{}", list);
            let entry = format!("seq {} permit 10.{}.0.0/16", seq * 10, seq);
            let p = path(&[container.as_str(), entry.as_str()]);
            assert!(
                seen.insert(derive_name("eoscommand-1", &p)),
                "collision for {}",
                p
            );
        }
    }

    assert_eq!(seen.len(), 10_000);
}

#[test]
fn test_prefix_namespaces_identifiers() {
    let p = path(&["hostname r1"]);
    assert_ne!(derive_name("device-a", &p), derive_name("device-b", &p));
}

proptest! {
    #[test]
    fn prop_name_is_bounded_and_never_ends_with_separator(
        prefix in "[a-z0-9-]{0,80}",
        segments in prop::collection::vec("[ -~]{1,30}", 1..5),
    ) {
        let p = CommandPath::new(segments).unwrap();
        let name = derive_name(&prefix, &p);

        prop_assert!(name.chars().count() <= MAX_NAME_LEN);
        prop_assert!(!name.ends_with(NAME_SEPARATOR));
        prop_assert!(!name.is_empty());
    }
}
