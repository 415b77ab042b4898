// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{PairSource, PipelineError, TokenSink};

/// Everything the orchestrator holds for one running mapper
pub struct MapperEndpoints<I, O, H> {
    pub worker_id: usize,
    pub input: I,
    pub output: O,
    pub handle: H,
}

/// Trait for launching isolated mapper workers
/// Implementations decide what isolation means (tasks, threads, ...) and
/// what carries the messages (typed channels, sockets, ...)
pub trait MapperTransport: Send + Sync {
    type Input: TokenSink;
    type Output: PairSource;
    type Handle: Send + 'static;

    /// Creates the channels and starts one mapper worker
    fn launch(
        &self,
        worker_id: usize,
    ) -> impl std::future::Future<
        Output = Result<MapperEndpoints<Self::Input, Self::Output, Self::Handle>, PipelineError>,
    > + Send;

    /// Waits for the worker to exit
    /// Returns the number of pairs it emitted
    fn join(
        &self,
        worker_id: usize,
        handle: Self::Handle,
    ) -> impl std::future::Future<Output = Result<usize, PipelineError>> + Send;
}
