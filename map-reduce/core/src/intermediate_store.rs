// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{KeyValuePair, PipelineError};
use tokio::sync::Mutex;
use tracing::trace;

struct StoreState {
    pairs: Vec<KeyValuePair>,
    sealed: bool,
}

/// Bounded collection of every pair the mappers emitted
///
/// Only the orchestrator's collectors write to it, always under the lock.
/// `seal` hands the pairs to the shuffler and rejects any later write.
pub struct IntermediateStore {
    capacity: usize,
    state: Mutex<StoreState>,
}

impl IntermediateStore {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            state: Mutex::new(StoreState {
                pairs: Vec::new(),
                sealed: false,
            }),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends a pair, failing once the capacity would be exceeded
    pub async fn insert(&self, pair: KeyValuePair) -> Result<(), PipelineError> {
        let mut state = self.state.lock().await;
        if state.sealed {
            return Err(PipelineError::StoreSealed);
        }
        if state.pairs.len() >= self.capacity {
            return Err(PipelineError::StoreCapacityExceeded {
                capacity: self.capacity,
            });
        }
        trace!(key = %pair.key, value = pair.value, "Stored intermediate pair");
        state.pairs.push(pair);
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.state.lock().await.pairs.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Ends the write phase and takes the collected pairs out
    pub async fn seal(&self) -> Result<Vec<KeyValuePair>, PipelineError> {
        let mut state = self.state.lock().await;
        if state.sealed {
            return Err(PipelineError::StoreSealed);
        }
        state.sealed = true;
        Ok(std::mem::take(&mut state.pairs))
    }
}
