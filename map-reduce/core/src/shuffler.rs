// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{KeyValuePair, PhaseBarrier, PipelineError};
use std::ops::RangeInclusive;
use std::sync::Arc;

/// Read-only view of the intermediate pairs, sorted by key
///
/// Only `shuffle` builds one, so holding a `SortedStore` means the map phase
/// is over. Clones share the same allocation and never lock.
#[derive(Debug, Clone)]
pub struct SortedStore {
    pairs: Arc<[KeyValuePair]>,
}

impl SortedStore {
    pub fn pairs(&self) -> &[KeyValuePair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn range(&self, range: RangeInclusive<usize>) -> &[KeyValuePair] {
        &self.pairs[range]
    }

    /// Maximal runs of equal keys, left to right
    pub fn groups(&self) -> Vec<SortedGroup> {
        let mut groups: Vec<SortedGroup> = Vec::new();
        for (index, pair) in self.pairs.iter().enumerate() {
            let continues_run = index > 0 && self.pairs[index - 1].key == pair.key;
            if continues_run {
                if let Some(group) = groups.last_mut() {
                    group.end = index;
                    continue;
                }
            }
            groups.push(SortedGroup {
                key: pair.key.clone(),
                start: index,
                end: index,
            });
        }
        groups
    }
}

/// Contiguous run `[start, end]` of pairs sharing one key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedGroup {
    pub key: String,
    pub start: usize,
    pub end: usize,
}

impl SortedGroup {
    pub fn pair_count(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn range(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

/// Sorts the sealed intermediate pairs and releases the phase barrier
///
/// Must only be called after every mapper has been joined and the store has
/// been sealed. The returned store is read-only from here on.
pub fn shuffle(
    mut pairs: Vec<KeyValuePair>,
    barrier: &PhaseBarrier,
) -> Result<SortedStore, PipelineError> {
    sort_pairs(&mut pairs);
    let store = SortedStore {
        pairs: pairs.into(),
    };
    barrier.release()?;
    Ok(store)
}

/// Stable byte-wise sort by key
pub fn sort_pairs(pairs: &mut [KeyValuePair]) {
    pairs.sort_by(|a, b| a.key.as_bytes().cmp(b.key.as_bytes()));
}
