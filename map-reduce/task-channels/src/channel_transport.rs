// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::channel_wrappers::{ChannelPairSource, ChannelTokenSink};
use map_reduce_core::{
    KeyValuePair, MapReduceProblem, MapperEndpoints, MapperTransport, PipelineError, Token,
    WorkerRole,
};
use std::marker::PhantomData;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Mappers as tokio tasks connected by two bounded mpsc channels each
///
/// A mapper task owns only its two channel ends, so it shares no memory
/// with the orchestrator or with other mappers.
pub struct ChannelTransport<P> {
    channel_capacity: usize,
    _problem: PhantomData<P>,
}

impl<P> ChannelTransport<P> {
    pub fn new(channel_capacity: usize) -> Self {
        Self {
            channel_capacity,
            _problem: PhantomData,
        }
    }
}

impl<P: MapReduceProblem> MapperTransport for ChannelTransport<P> {
    type Input = ChannelTokenSink;
    type Output = ChannelPairSource;
    type Handle = JoinHandle<Result<usize, PipelineError>>;

    async fn launch(
        &self,
        worker_id: usize,
    ) -> Result<MapperEndpoints<Self::Input, Self::Output, Self::Handle>, PipelineError> {
        if self.channel_capacity == 0 {
            return Err(PipelineError::ChannelSetupFailed {
                worker_id,
                reason: "channel capacity must be at least 1".to_string(),
            });
        }
        let runtime = tokio::runtime::Handle::try_current().map_err(|e| {
            PipelineError::WorkerLaunchFailed {
                role: WorkerRole::Mapper,
                worker_id,
                reason: e.to_string(),
            }
        })?;

        let (token_tx, token_rx) = mpsc::channel::<Token>(self.channel_capacity);
        let (pair_tx, pair_rx) = mpsc::channel::<KeyValuePair>(self.channel_capacity);
        let handle = runtime.spawn(run_mapper::<P>(worker_id, token_rx, pair_tx));

        Ok(MapperEndpoints {
            worker_id,
            input: ChannelTokenSink {
                worker_id,
                tx: token_tx,
            },
            output: ChannelPairSource { rx: pair_rx },
            handle,
        })
    }

    async fn join(&self, worker_id: usize, handle: Self::Handle) -> Result<usize, PipelineError> {
        handle.await.map_err(|e| PipelineError::WorkerFailed {
            role: WorkerRole::Mapper,
            worker_id,
            reason: e.to_string(),
        })?
    }
}

/// Mapper body: one pair out per token in, until the input closes
async fn run_mapper<P: MapReduceProblem>(
    worker_id: usize,
    mut tokens: mpsc::Receiver<Token>,
    pairs: mpsc::Sender<KeyValuePair>,
) -> Result<usize, PipelineError> {
    let mut emitted = 0;
    while let Some(token) = tokens.recv().await {
        pairs
            .send(P::map(&token))
            .await
            .map_err(|_| PipelineError::ChannelBroken {
                worker_id,
                reason: "orchestrator stopped reading mapper output".to_string(),
            })?;
        emitted += 1;
    }
    debug!("Mapper {} input closed after {} words", worker_id, emitted);
    Ok(emitted)
}
