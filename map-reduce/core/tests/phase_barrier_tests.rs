// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use map_reduce_core::PhaseBarrier;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_waiters_block_until_release() {
    let barrier = PhaseBarrier::new();
    let passed = Arc::new(AtomicUsize::new(0));

    let mut waiters = Vec::new();
    for _ in 0..5 {
        let barrier = barrier.clone();
        let passed = Arc::clone(&passed);
        waiters.push(tokio::spawn(async move {
            barrier.wait().await;
            passed.fetch_add(1, Ordering::SeqCst);
        }));
    }

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(passed.load(Ordering::SeqCst), 0, "No waiter may pass early");

    barrier.release().unwrap();
    for waiter in waiters {
        waiter.await.unwrap();
    }
    assert_eq!(passed.load(Ordering::SeqCst), 5);
}

#[tokio::test]
async fn test_wait_after_release_returns_immediately() {
    let barrier = PhaseBarrier::new();
    barrier.release().unwrap();

    tokio::time::timeout(Duration::from_secs(1), barrier.wait())
        .await
        .expect("released barrier should not block");
    tokio::time::timeout(Duration::from_secs(1), barrier.wait())
        .await
        .expect("permit should be handed back after each wait");
}

#[test]
fn test_release_is_one_shot() {
    let barrier = PhaseBarrier::new();
    barrier.release().unwrap();
    let err = barrier.release().unwrap_err();
    assert_eq!(err.kind(), "BarrierAlreadyReleased");
    assert!(barrier.is_released());
}
