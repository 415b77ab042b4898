// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A normalized word handed to the pipeline by the pre-processing step
pub type Token = String;

/// Pair emitted by a mapper for every token it consumes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValuePair {
    pub key: String,
    pub value: u64,
}

impl KeyValuePair {
    pub fn new(key: impl Into<String>, value: u64) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Result of a single reducer worker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalCount {
    pub key: String,
    pub total: u64,
}

/// Final word to count mapping, iterated in sorted key order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WordCounts {
    counts: BTreeMap<String, u64>,
}

impl WordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a reducer result. Returns false if the key was already present.
    pub fn insert(&mut self, count: FinalCount) -> bool {
        self.counts.insert(count.key, count.total).is_none()
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.counts.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all totals
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(key, total)| (key.as_str(), *total))
    }

    pub fn into_inner(self) -> BTreeMap<String, u64> {
        self.counts
    }
}
