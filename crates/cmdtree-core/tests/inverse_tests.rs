mod common;

use cmdtree_core::{invert, toggle, CommandPath};
use common::path;
use proptest::prelude::*;

#[test]
fn test_container_removal_is_not_self_inverse() {
    let original = path(&["ip prefix-list PL-A", "seq 10 permit 10.0.0.1/32 eq 32"]);

    let once = invert(&original, true);
    assert_eq!(once.segments(), ["no ip prefix-list PL-A"]);

    // Inverting the single-command removal re-creates the bare container,
    // not the leaf underneath it
    let twice = invert(&once, true);
    assert_eq!(twice.segments(), ["ip prefix-list PL-A"]);
    assert_ne!(twice, original);
}

#[test]
fn test_leaf_inversion_round_trips() {
    let original = path(&[
        "router bgp 65000",
        "address-family ipv4",
        "no neighbor 10.0.0.2 activate",
    ]);
    let twice = invert(&invert(&original, false), false);
    assert_eq!(twice, original);
}

#[test]
fn test_double_negated_leaf_does_not_round_trip() {
    let original = path(&["interface Ethernet1", "no no shutdown"]);

    let once = invert(&original, false);
    assert_eq!(once.segments(), ["interface Ethernet1", "no shutdown"]);

    let twice = invert(&once, false);
    assert_eq!(twice.segments(), ["interface Ethernet1", "shutdown"]);
    assert_ne!(twice, original);
}

#[test]
fn test_invert_keeps_length_without_container_removal() {
    let original = path(&["a", "b", "c", "d"]);
    assert_eq!(invert(&original, false).len(), 4);
    assert_eq!(invert(&original, true).len(), 1);
}

// Doubly negated segments are excluded; toggling those twice strips both
// prefixes (see test_double_negated_leaf_does_not_round_trip)
fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z0-9 /.-]{0,24}",
        "[a-z0-9 /.-]{0,24}".prop_map(|s| format!("no {}", s)),
    ]
    .prop_filter("doubly negated segment", |s| !s.starts_with("no no "))
}

proptest! {
    #[test]
    fn prop_toggle_is_involution(s in segment()) {
        prop_assert_eq!(toggle(&toggle(&s)), s);
    }

    #[test]
    fn prop_leaf_inversion_is_self_inverse(segments in prop::collection::vec(segment(), 1..6)) {
        let original = CommandPath::new(segments).unwrap();
        prop_assert_eq!(invert(&invert(&original, false), false), original);
    }

    #[test]
    fn prop_inversion_keeps_first_segment(segments in prop::collection::vec(segment(), 2..6)) {
        let original = CommandPath::new(segments).unwrap();
        let inverted = invert(&original, false);
        prop_assert_eq!(inverted.head(), original.head());
    }
}
