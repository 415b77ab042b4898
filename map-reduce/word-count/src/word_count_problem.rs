// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use map_reduce_core::{KeyValuePair, MapReduceProblem};

/// Word frequency: every token maps to (token, 1), reducers sum the ones
pub struct WordCountProblem;

impl MapReduceProblem for WordCountProblem {
    fn map(token: &str) -> KeyValuePair {
        KeyValuePair::new(token, 1)
    }

    fn reduce(_key: &str, pairs: &[KeyValuePair]) -> u64 {
        pairs.iter().map(|pair| pair.value).sum()
    }
}
