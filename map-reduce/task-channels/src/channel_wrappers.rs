// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use map_reduce_core::{KeyValuePair, PairSource, PipelineError, Token, TokenSink};
use tokio::sync::mpsc;

pub struct ChannelTokenSink {
    pub worker_id: usize,
    pub tx: mpsc::Sender<Token>,
}

#[async_trait]
impl TokenSink for ChannelTokenSink {
    async fn send(&mut self, token: Token) -> Result<(), PipelineError> {
        self.tx
            .send(token)
            .await
            .map_err(|_| PipelineError::ChannelBroken {
                worker_id: self.worker_id,
                reason: "mapper stopped reading its input".to_string(),
            })
    }

    async fn close(self) -> Result<(), PipelineError> {
        // Dropping the only sender closes the channel
        drop(self.tx);
        Ok(())
    }
}

pub struct ChannelPairSource {
    pub rx: mpsc::Receiver<KeyValuePair>,
}

#[async_trait]
impl PairSource for ChannelPairSource {
    async fn recv(&mut self) -> Result<Option<KeyValuePair>, PipelineError> {
        Ok(self.rx.recv().await)
    }
}
