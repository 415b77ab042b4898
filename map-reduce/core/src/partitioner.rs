// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{PipelineError, Token};

/// Number of mappers for `total` tokens: one per `words_per_mapper`, at least one
pub fn mapper_count(total: usize, words_per_mapper: usize) -> usize {
    total.div_ceil(words_per_mapper.max(1)).max(1)
}

/// Sizes of `workers` balanced chunks covering `total` tokens
///
/// Sizes differ by at most one; the first `total % workers` chunks carry the
/// extra token.
pub fn chunk_sizes(total: usize, workers: usize) -> Vec<usize> {
    if workers == 0 {
        return Vec::new();
    }
    let base = total / workers;
    let remainder = total % workers;
    (0..workers)
        .map(|i| base + usize::from(i < remainder))
        .collect()
}

/// Splits tokens into contiguous chunks, one per mapper, preserving input order
pub fn partition(
    tokens: Vec<Token>,
    words_per_mapper: usize,
) -> Result<Vec<Vec<Token>>, PipelineError> {
    if tokens.is_empty() {
        return Err(PipelineError::NoInput);
    }

    let workers = mapper_count(tokens.len(), words_per_mapper);
    let mut remaining = tokens.into_iter();
    let chunks = chunk_sizes(remaining.len(), workers)
        .into_iter()
        .map(|size| remaining.by_ref().take(size).collect())
        .collect();

    Ok(chunks)
}
