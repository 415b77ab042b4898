// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use map_reduce_core::{IntermediateStore, KeyValuePair};
use std::sync::Arc;

#[tokio::test]
async fn test_insert_keeps_arrival_order() {
    let store = IntermediateStore::with_capacity(4);
    assert_eq!(store.capacity(), 4);
    assert!(store.is_empty().await);
    store.insert(KeyValuePair::new("b", 1)).await.unwrap();
    store.insert(KeyValuePair::new("a", 1)).await.unwrap();

    assert_eq!(store.len().await, 2);
    let pairs = store.seal().await.unwrap();
    assert_eq!(pairs, vec![KeyValuePair::new("b", 1), KeyValuePair::new("a", 1)]);
}

#[tokio::test]
async fn test_insert_beyond_capacity_fails() {
    let store = IntermediateStore::with_capacity(2);
    store.insert(KeyValuePair::new("a", 1)).await.unwrap();
    store.insert(KeyValuePair::new("b", 1)).await.unwrap();

    let err = store.insert(KeyValuePair::new("c", 1)).await.unwrap_err();
    assert_eq!(err.kind(), "StoreCapacityExceeded");
    assert_eq!(store.len().await, 2, "Rejected pair must not be stored");
}

#[tokio::test]
async fn test_sealed_store_rejects_writes() {
    let store = IntermediateStore::with_capacity(8);
    store.insert(KeyValuePair::new("a", 1)).await.unwrap();
    store.seal().await.unwrap();

    let err = store.insert(KeyValuePair::new("b", 1)).await.unwrap_err();
    assert_eq!(err.kind(), "StoreSealed");
    assert_eq!(store.seal().await.unwrap_err().kind(), "StoreSealed");
}

#[tokio::test]
async fn test_concurrent_writers_lose_nothing() {
    let store = Arc::new(IntermediateStore::with_capacity(1_000));

    let mut writers = Vec::new();
    for writer in 0..10 {
        let store = Arc::clone(&store);
        writers.push(tokio::spawn(async move {
            for i in 0..100 {
                store
                    .insert(KeyValuePair::new(format!("w{}-{}", writer, i), 1))
                    .await
                    .unwrap();
            }
        }));
    }
    for writer in writers {
        writer.await.unwrap();
    }

    let pairs = store.seal().await.unwrap();
    assert_eq!(pairs.len(), 1_000);
    assert!(pairs.iter().all(|pair| pair.value == 1));
}

#[tokio::test]
async fn test_concurrent_overflow_is_reported_not_truncated() {
    let store = Arc::new(IntermediateStore::with_capacity(50));

    let mut writers = Vec::new();
    for writer in 0..4 {
        let store = Arc::clone(&store);
        writers.push(tokio::spawn(async move {
            let mut failures = 0;
            for i in 0..20 {
                if store
                    .insert(KeyValuePair::new(format!("w{}-{}", writer, i), 1))
                    .await
                    .is_err()
                {
                    failures += 1;
                }
            }
            failures
        }));
    }

    let mut failures = 0;
    for writer in writers {
        failures += writer.await.unwrap();
    }
    assert_eq!(failures, 30);
    assert_eq!(store.len().await, 50);
}
