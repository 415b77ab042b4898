// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use map_reduce_core::shuffler::{shuffle, sort_pairs};
use map_reduce_core::{KeyValuePair, PhaseBarrier, SortedGroup};
use rand::seq::SliceRandom;
use std::collections::HashSet;

fn pairs(keys: &[&str]) -> Vec<KeyValuePair> {
    keys.iter().map(|key| KeyValuePair::new(*key, 1)).collect()
}

fn keys(pairs: &[KeyValuePair]) -> Vec<&str> {
    pairs.iter().map(|pair| pair.key.as_str()).collect()
}

// ============================================================
// Sorting
// ============================================================

#[test]
fn test_sorts_bytewise() {
    let mut unsorted = pairs(&["the", "cat", "Zebra", "sat", "apple", "10", "9"]);
    sort_pairs(&mut unsorted);
    assert_eq!(
        keys(&unsorted),
        vec!["10", "9", "Zebra", "apple", "cat", "sat", "the"]
    );
}

#[test]
fn test_sort_is_stable() {
    let mut input = vec![
        KeyValuePair::new("b", 1),
        KeyValuePair::new("a", 7),
        KeyValuePair::new("b", 2),
        KeyValuePair::new("a", 8),
    ];
    sort_pairs(&mut input);
    let values: Vec<u64> = input.iter().map(|pair| pair.value).collect();
    assert_eq!(values, vec![7, 8, 1, 2]);
}

#[test]
fn test_sorting_sorted_pairs_is_a_no_op() {
    let mut once = pairs(&["the", "cat", "sat", "on", "the", "mat"]);
    sort_pairs(&mut once);
    let mut twice = once.clone();
    sort_pairs(&mut twice);
    assert_eq!(once, twice);
}

// ============================================================
// Shuffle and phase barrier
// ============================================================

#[test]
fn test_shuffle_releases_barrier() {
    let barrier = PhaseBarrier::new();
    assert!(!barrier.is_released());

    let sorted = shuffle(pairs(&["b", "a"]), &barrier).unwrap();

    assert!(barrier.is_released());
    assert_eq!(keys(sorted.pairs()), vec!["a", "b"]);
}

#[test]
fn test_shuffle_twice_on_one_barrier_fails() {
    let barrier = PhaseBarrier::new();
    shuffle(pairs(&["a"]), &barrier).unwrap();
    let err = shuffle(pairs(&["a"]), &barrier).unwrap_err();
    assert_eq!(err.kind(), "BarrierAlreadyReleased");
}

// ============================================================
// Grouping
// ============================================================

#[test]
fn test_groups_scenario_sentence() {
    let barrier = PhaseBarrier::new();
    let sorted = shuffle(pairs(&["the", "cat", "sat", "on", "the", "mat"]), &barrier).unwrap();

    let groups = sorted.groups();
    assert_eq!(
        groups,
        vec![
            SortedGroup { key: "cat".into(), start: 0, end: 0 },
            SortedGroup { key: "mat".into(), start: 1, end: 1 },
            SortedGroup { key: "on".into(), start: 2, end: 2 },
            SortedGroup { key: "sat".into(), start: 3, end: 3 },
            SortedGroup { key: "the".into(), start: 4, end: 5 },
        ]
    );
    assert_eq!(groups[4].pair_count(), 2);
}

#[test]
fn test_groups_of_empty_store() {
    let barrier = PhaseBarrier::new();
    let sorted = shuffle(Vec::new(), &barrier).unwrap();
    assert!(sorted.is_empty());
    assert!(sorted.groups().is_empty());
}

#[test]
fn test_each_key_occupies_one_contiguous_range() {
    let mut rng = rand::rng();
    let mut input: Vec<KeyValuePair> = (0..500)
        .map(|i| KeyValuePair::new(format!("k{}", i % 37), 1))
        .collect();
    input.shuffle(&mut rng);

    let barrier = PhaseBarrier::new();
    let sorted = shuffle(input, &barrier).unwrap();
    let groups = sorted.groups();

    let mut seen = HashSet::new();
    let mut next_start = 0;
    for group in &groups {
        assert!(seen.insert(group.key.clone()), "{} split in two ranges", group.key);
        assert_eq!(group.start, next_start, "groups must tile the store");
        assert!(sorted
            .range(group.range())
            .iter()
            .all(|pair| pair.key == group.key));
        next_start = group.end + 1;
    }
    assert_eq!(next_start, 500);
    assert_eq!(groups.len(), 37);
}
