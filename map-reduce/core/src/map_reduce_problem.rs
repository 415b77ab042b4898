// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::KeyValuePair;

/// The user functions plugged into the pipeline
///
/// `map` runs inside mapper workers, `reduce` inside reducer workers. Both
/// must be pure: workers share no state with each other.
pub trait MapReduceProblem: Send + Sync + 'static {
    /// Converts one token into the pair sent back to the orchestrator
    fn map(token: &str) -> KeyValuePair;

    /// Aggregates a contiguous run of pairs that all carry `key`
    fn reduce(key: &str, pairs: &[KeyValuePair]) -> u64;
}
