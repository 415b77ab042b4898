// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::PipelineError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Semaphore;

/// One-shot signal that the map phase and the shuffle are complete
///
/// A single-permit semaphore starting empty. `release` posts the permit once;
/// `wait` acquires it and hands it straight back, so any number of waiters
/// pass once released.
#[derive(Clone)]
pub struct PhaseBarrier {
    permits: Arc<Semaphore>,
    released: Arc<AtomicBool>,
}

impl PhaseBarrier {
    pub fn new() -> Self {
        Self {
            permits: Arc::new(Semaphore::new(0)),
            released: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Posts the signal. A second release is an error.
    pub fn release(&self) -> Result<(), PipelineError> {
        if self.released.swap(true, Ordering::SeqCst) {
            return Err(PipelineError::BarrierAlreadyReleased);
        }
        self.permits.add_permits(1);
        Ok(())
    }

    pub fn is_released(&self) -> bool {
        self.released.load(Ordering::SeqCst)
    }

    /// Blocks until the barrier is released
    pub async fn wait(&self) {
        // The semaphore is never closed, so acquire only fails if it was
        if let Ok(permit) = self.permits.acquire().await {
            drop(permit);
        }
    }
}

impl Default for PhaseBarrier {
    fn default() -> Self {
        Self::new()
    }
}
