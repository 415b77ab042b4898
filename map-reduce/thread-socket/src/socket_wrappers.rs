// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use bytes::Bytes;
use futures::{SinkExt, StreamExt};
use map_reduce_core::{KeyValuePair, PairSource, PipelineError, Token, TokenSink};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio_util::codec::{FramedRead, FramedWrite, LengthDelimitedCodec};

/// Write half of a mapper connection: one frame per token
pub struct SocketTokenSink {
    worker_id: usize,
    framed: FramedWrite<OwnedWriteHalf, LengthDelimitedCodec>,
}

impl SocketTokenSink {
    pub fn new(worker_id: usize, write_half: OwnedWriteHalf) -> Self {
        Self {
            worker_id,
            framed: FramedWrite::new(write_half, LengthDelimitedCodec::new()),
        }
    }

    fn broken(&self, reason: impl ToString) -> PipelineError {
        PipelineError::ChannelBroken {
            worker_id: self.worker_id,
            reason: reason.to_string(),
        }
    }
}

#[async_trait]
impl TokenSink for SocketTokenSink {
    async fn send(&mut self, token: Token) -> Result<(), PipelineError> {
        let payload = serde_json::to_vec(&token).map_err(|e| self.broken(e))?;
        let result = self.framed.send(Bytes::from(payload)).await;
        result.map_err(|e| self.broken(e))
    }

    async fn close(mut self) -> Result<(), PipelineError> {
        // Flushes pending frames and shuts down the write direction
        let result = SinkExt::<Bytes>::close(&mut self.framed).await;
        result.map_err(|e| self.broken(e))
    }
}

/// Read half of a mapper connection: one frame per pair
pub struct SocketPairSource {
    worker_id: usize,
    framed: FramedRead<OwnedReadHalf, LengthDelimitedCodec>,
}

impl SocketPairSource {
    pub fn new(worker_id: usize, read_half: OwnedReadHalf) -> Self {
        Self {
            worker_id,
            framed: FramedRead::new(read_half, LengthDelimitedCodec::new()),
        }
    }
}

#[async_trait]
impl PairSource for SocketPairSource {
    async fn recv(&mut self) -> Result<Option<KeyValuePair>, PipelineError> {
        let worker_id = self.worker_id;
        match self.framed.next().await {
            None => Ok(None),
            Some(Ok(frame)) => serde_json::from_slice(&frame).map(Some).map_err(|e| {
                PipelineError::ChannelBroken {
                    worker_id,
                    reason: format!("undecodable pair frame: {}", e),
                }
            }),
            Some(Err(e)) => Err(PipelineError::ChannelBroken {
                worker_id,
                reason: e.to_string(),
            }),
        }
    }
}
