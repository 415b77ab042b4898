// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::partitioner;
use crate::shuffler;
use crate::{
    IntermediateStore, MapReduceProblem, MapperEndpoints, MapperTransport, PairSource,
    PhaseBarrier, PhaseTracker, PipelineConfig, PipelineError, PipelinePhase, ReducerDispatcher,
    Token, TokenSink, WordCounts, WorkerRole, WorkerRuntime,
};
use std::marker::PhantomData;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, trace, warn};

struct RunningMapper<H> {
    worker_id: usize,
    feeder: JoinHandle<Result<(), PipelineError>>,
    collector: JoinHandle<Result<usize, PipelineError>>,
    handle: H,
}

/// Orchestrator coordinates the map-reduce workflow
/// Generic over the problem, the mapper transport and the reducer runtime
pub struct Orchestrator<P, T, R> {
    config: PipelineConfig,
    transport: T,
    _marker: PhantomData<(P, R)>,
}

impl<P, T, R> Orchestrator<P, T, R>
where
    P: MapReduceProblem,
    T: MapperTransport,
    R: WorkerRuntime,
{
    pub fn new(config: PipelineConfig, transport: T) -> Result<Self, PipelineError> {
        config.validate()?;
        Ok(Self {
            config,
            transport,
            _marker: PhantomData,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Runs partition, map, collect, shuffle and reduce over `tokens`
    ///
    /// Either every phase completes and the full counts are returned, or the
    /// first fatal error is.
    pub async fn run(&self, tokens: Vec<Token>) -> Result<WordCounts, PipelineError> {
        let mut phases = PhaseTracker::new();

        phases.advance(PipelinePhase::Partitioning)?;
        let total_words = tokens.len();
        let chunks = partitioner::partition(tokens, self.config.words_per_mapper)?;
        info!(
            "Number of words: {}, mappers selected: {}",
            total_words,
            chunks.len()
        );

        phases.advance(PipelinePhase::Mapping)?;
        let store = Arc::new(IntermediateStore::with_capacity(
            self.config.store_capacity,
        ));
        debug!("Intermediate store holds up to {} pairs", store.capacity());
        let mut running = Vec::with_capacity(chunks.len());
        for (worker_id, chunk) in chunks.into_iter().enumerate() {
            let MapperEndpoints {
                worker_id,
                input,
                output,
                handle,
            } = self.transport.launch(worker_id).await?;
            debug!("Mapper {} processing {} words", worker_id, chunk.len());

            running.push(RunningMapper {
                worker_id,
                feeder: tokio::spawn(feed(worker_id, input, chunk)),
                collector: tokio::spawn(collect(worker_id, output, Arc::clone(&store))),
                handle,
            });
        }

        phases.advance(PipelinePhase::Collecting)?;
        let collected = self.finish_mappers(running).await?;
        info!("All mappers completed! Collected {} pairs", collected);

        phases.advance(PipelinePhase::Shuffling)?;
        let pairs = store.seal().await?;
        let barrier = PhaseBarrier::new();
        let sorted = shuffler::shuffle(pairs, &barrier)?;
        debug!("Shuffled {} pairs", sorted.len());

        phases.advance(PipelinePhase::BarrierReleased)?;

        phases.advance(PipelinePhase::Reducing)?;
        let finals = ReducerDispatcher::<P, R>::new()
            .dispatch(sorted, &barrier)
            .await?;

        let mut counts = WordCounts::new();
        for count in finals {
            if !counts.insert(count) {
                warn!("Reducer produced a duplicate key");
            }
        }

        phases.advance(PipelinePhase::Done)?;
        info!(
            "Counted {} distinct words over {} tokens",
            counts.len(),
            counts.total()
        );
        Ok(counts)
    }

    /// Drains and joins every mapper, keeping the first error in phase order
    async fn finish_mappers(
        &self,
        running: Vec<RunningMapper<T::Handle>>,
    ) -> Result<usize, PipelineError> {
        let mut first_error = None;
        let mut collected = 0;

        for mapper in running {
            let worker_id = mapper.worker_id;
            let received = join_task(worker_id, mapper.collector).await;
            let fed = join_task(worker_id, mapper.feeder).await;
            let emitted = self.transport.join(worker_id, mapper.handle).await;

            match (received, fed, emitted) {
                (Ok(received), Ok(()), Ok(emitted)) if received == emitted => {
                    debug!("Mapper {} finished with {} pairs", worker_id, emitted);
                    collected += received;
                }
                (Ok(received), Ok(()), Ok(emitted)) => {
                    first_error.get_or_insert(PipelineError::ChannelBroken {
                        worker_id,
                        reason: format!("emitted {} pairs but {} arrived", emitted, received),
                    });
                }
                (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(collected),
        }
    }
}

/// Sends a chunk to one mapper, one message per token, then closes its input
async fn feed<I: TokenSink>(
    worker_id: usize,
    mut input: I,
    chunk: Vec<Token>,
) -> Result<(), PipelineError> {
    for token in chunk {
        trace!("Sending word \"{}\" to mapper {}", token, worker_id);
        input.send(token).await?;
    }
    input.close().await
}

/// Reads one mapper's output until it closes, inserting every pair in the store
///
/// After a failed insert the remaining output is still drained, so the worker
/// can run to exhaustion instead of blocking on a full channel.
async fn collect<O: PairSource>(
    worker_id: usize,
    mut output: O,
    store: Arc<IntermediateStore>,
) -> Result<usize, PipelineError> {
    let mut received = 0;
    let mut insert_error = None;

    while let Some(pair) = output.recv().await? {
        received += 1;
        if insert_error.is_some() {
            continue;
        }
        trace!(
            "Received intermediate pair (\"{}\", {}) from mapper {}",
            pair.key,
            pair.value,
            worker_id
        );
        if let Err(e) = store.insert(pair).await {
            warn!("Mapper {} output rejected: {}", worker_id, e);
            insert_error = Some(e);
        }
    }

    match insert_error {
        Some(e) => Err(e),
        None => Ok(received),
    }
}

async fn join_task<T>(
    worker_id: usize,
    handle: JoinHandle<Result<T, PipelineError>>,
) -> Result<T, PipelineError> {
    handle.await.map_err(|e| PipelineError::WorkerFailed {
        role: WorkerRole::Mapper,
        worker_id,
        reason: format!("orchestrator task failed: {}", e),
    })?
}
