// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use map_reduce_core::partitioner::{chunk_sizes, mapper_count, partition};
use map_reduce_core::Token;

fn numbered_tokens(n: usize) -> Vec<Token> {
    (0..n).map(|i| format!("w{}", i)).collect()
}

// ============================================================
// mapper_count tests
// ============================================================

#[test]
fn test_one_mapper_per_twenty_words() {
    assert_eq!(mapper_count(1, 20), 1);
    assert_eq!(mapper_count(20, 20), 1);
    assert_eq!(mapper_count(21, 20), 2);
    assert_eq!(mapper_count(45, 20), 3);
    assert_eq!(mapper_count(100, 20), 5);
}

#[test]
fn test_at_least_one_mapper() {
    assert_eq!(mapper_count(0, 20), 1);
}

#[test]
fn test_words_per_mapper_is_tunable() {
    assert_eq!(mapper_count(10, 3), 4);
    assert_eq!(mapper_count(10, 1), 10);
}

// ============================================================
// chunk_sizes tests
// ============================================================

#[test]
fn test_forty_five_tokens_give_three_chunks_of_fifteen() {
    let workers = mapper_count(45, 20);
    assert_eq!(chunk_sizes(45, workers), vec![15, 15, 15]);
}

#[test]
fn test_first_chunks_take_the_remainder() {
    assert_eq!(chunk_sizes(10, 3), vec![4, 3, 3]);
    assert_eq!(chunk_sizes(41, 3), vec![14, 14, 13]);
}

#[test]
fn test_sizes_differ_by_at_most_one() {
    for total in 1..200 {
        let workers = mapper_count(total, 20);
        let sizes = chunk_sizes(total, workers);
        let min = *sizes.iter().min().unwrap();
        let max = *sizes.iter().max().unwrap();
        assert!(max - min <= 1, "total {} gave sizes {:?}", total, sizes);
        assert_eq!(sizes.iter().sum::<usize>(), total);
    }
}

// ============================================================
// partition tests
// ============================================================

#[test]
fn test_partition_rejects_empty_input() {
    let err = partition(Vec::new(), 20).unwrap_err();
    assert_eq!(err.kind(), "NoInput");
}

#[test]
fn test_partition_concatenation_reconstructs_input() {
    for n in [1, 6, 19, 20, 21, 45, 99, 257] {
        let tokens = numbered_tokens(n);
        let chunks = partition(tokens.clone(), 20).unwrap();

        assert_eq!(chunks.len(), mapper_count(n, 20));
        assert!(chunks.iter().all(|chunk| !chunk.is_empty()));

        let rebuilt: Vec<Token> = chunks.into_iter().flatten().collect();
        assert_eq!(rebuilt, tokens, "partition of {} tokens lost order", n);
    }
}

#[test]
fn test_partition_chunks_are_contiguous() {
    let tokens = numbered_tokens(45);
    let chunks = partition(tokens.clone(), 20).unwrap();

    assert_eq!(chunks[0], tokens[0..15]);
    assert_eq!(chunks[1], tokens[15..30]);
    assert_eq!(chunks[2], tokens[30..45]);
}
