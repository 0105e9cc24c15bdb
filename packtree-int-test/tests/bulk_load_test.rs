//! Integration tests for bulk loading.
//!
//! These exercise the round-trip and determinism guarantees of the packed
//! tree across a spread of sizes and node capacities.

use packtree::{IndexError, RTree};
use packtree_int_test::test_util::{random_entries, seeded_rng, sorted_values};

#[test]
fn test_round_trip_preserves_entry_multiset() {
    let mut rng = seeded_rng(1);
    for count in [0, 1, 2, 5, 16, 17, 100, 1000] {
        let entries = random_entries(&mut rng, count);
        let expected = sorted_values(&entries);
        for capacity in [2, 3, 16, 64] {
            let tree = RTree::bulk_load_with_capacity(entries.clone(), capacity).unwrap();
            assert_eq!(tree.len(), count);
            assert_eq!(
                sorted_values(&tree.entries()),
                expected,
                "round trip failed for count {} capacity {}",
                count,
                capacity
            );
        }
    }
}

#[test]
fn test_same_input_builds_identical_tree() {
    let mut rng = seeded_rng(2);
    let entries = random_entries(&mut rng, 700);

    let first = RTree::bulk_load_with_capacity(entries.clone(), 8).unwrap();
    let second = RTree::bulk_load_with_capacity(entries, 8).unwrap();

    // Traversal order is deterministic, so enumeration must agree entry by
    // entry, not just as a multiset.
    assert_eq!(first.entries(), second.entries());
    assert_eq!(first.height(), second.height());
    assert_eq!(first.mbr(), second.mbr());
}

#[test]
fn test_tree_stays_shallow() {
    let mut rng = seeded_rng(3);
    let entries = random_entries(&mut rng, 10_000);
    let tree = RTree::bulk_load_with_capacity(entries, 16).unwrap();
    // 16^4 = 65536, so four levels of branches are plenty for 10k leaves.
    assert!(tree.height() <= 5, "height {} too deep", tree.height());
}

#[test]
fn test_root_mbr_covers_all_entries() {
    let mut rng = seeded_rng(4);
    let entries = random_entries(&mut rng, 500);
    let tree = RTree::bulk_load_with_capacity(entries.clone(), 8).unwrap();
    for entry in &entries {
        assert!(tree.mbr().contains(&entry.bbox));
    }
}

#[test]
fn test_invalid_capacity_is_rejected() {
    let mut rng = seeded_rng(5);
    let entries = random_entries(&mut rng, 10);
    for capacity in [0, 1] {
        match RTree::bulk_load_with_capacity(entries.clone(), capacity) {
            Err(IndexError::InvalidCapacity(reported)) => assert_eq!(reported, capacity),
            Ok(_) => panic!("capacity {} should be rejected", capacity),
        }
    }
}

#[test]
fn test_empty_tree_has_empty_mbr() {
    let tree = RTree::<u32>::bulk_load(Vec::new()).unwrap();
    assert!(tree.is_empty());
    assert!(tree.mbr().is_empty());
    assert_eq!(tree.height(), 0);
}
