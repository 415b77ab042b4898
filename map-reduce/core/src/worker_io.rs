// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{KeyValuePair, PipelineError, Token};
use async_trait::async_trait;

/// Orchestrator end of a mapper's input channel
#[async_trait]
pub trait TokenSink: Send + 'static {
    /// Sends one token as one message
    async fn send(&mut self, token: Token) -> Result<(), PipelineError>;

    /// Closes the input side, telling the worker no more tokens follow
    async fn close(self) -> Result<(), PipelineError>;
}

/// Orchestrator end of a mapper's output channel
#[async_trait]
pub trait PairSource: Send + 'static {
    /// Receives the next pair
    /// Returns Ok(None) once the worker has closed its output
    async fn recv(&mut self) -> Result<Option<KeyValuePair>, PipelineError>;
}
