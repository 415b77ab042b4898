// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::frame::{read_frame, write_frame};
use crate::socket_wrappers::{SocketPairSource, SocketTokenSink};
use crate::thread_runtime::join_thread;
use map_reduce_core::{
    MapReduceProblem, MapperEndpoints, MapperTransport, PipelineError, Token, WorkerRole,
};
use std::io::{self, BufReader, BufWriter, Write};
use std::marker::PhantomData;
use std::net::{Shutdown, TcpListener, TcpStream};
use std::thread::{self, JoinHandle};
use tracing::debug;

/// Mappers as OS threads, each talking to the orchestrator over its own
/// loopback TCP connection
///
/// The orchestrator-to-worker direction carries tokens and the reverse
/// direction carries pairs. Shutting down a direction closes that channel.
pub struct SocketTransport<P> {
    _problem: PhantomData<P>,
}

impl<P> SocketTransport<P> {
    pub fn new() -> Self {
        Self {
            _problem: PhantomData,
        }
    }
}

impl<P> Default for SocketTransport<P> {
    fn default() -> Self {
        Self::new()
    }
}

fn setup_error(worker_id: usize) -> impl Fn(io::Error) -> PipelineError {
    move |e| PipelineError::ChannelSetupFailed {
        worker_id,
        reason: e.to_string(),
    }
}

/// Returns the orchestrator end and the worker end of a fresh connection
fn connect_pair(worker_id: usize) -> Result<(TcpStream, TcpStream), PipelineError> {
    let listener = TcpListener::bind("127.0.0.1:0").map_err(setup_error(worker_id))?;
    let addr = listener.local_addr().map_err(setup_error(worker_id))?;
    let orchestrator_end = TcpStream::connect(addr).map_err(setup_error(worker_id))?;
    let (worker_end, _) = listener.accept().map_err(setup_error(worker_id))?;

    orchestrator_end
        .set_nodelay(true)
        .map_err(setup_error(worker_id))?;
    worker_end.set_nodelay(true).map_err(setup_error(worker_id))?;
    Ok((orchestrator_end, worker_end))
}

impl<P: MapReduceProblem> MapperTransport for SocketTransport<P> {
    type Input = SocketTokenSink;
    type Output = SocketPairSource;
    type Handle = JoinHandle<Result<usize, PipelineError>>;

    async fn launch(
        &self,
        worker_id: usize,
    ) -> Result<MapperEndpoints<Self::Input, Self::Output, Self::Handle>, PipelineError> {
        let (orchestrator_end, worker_end) =
            tokio::task::spawn_blocking(move || connect_pair(worker_id))
                .await
                .map_err(|e| PipelineError::ChannelSetupFailed {
                    worker_id,
                    reason: e.to_string(),
                })??;

        orchestrator_end
            .set_nonblocking(true)
            .map_err(setup_error(worker_id))?;
        let stream =
            tokio::net::TcpStream::from_std(orchestrator_end).map_err(setup_error(worker_id))?;
        let (read_half, write_half) = stream.into_split();

        let handle = thread::Builder::new()
            .name(format!("mapper-{}", worker_id))
            .spawn(move || run_mapper::<P>(worker_id, worker_end))
            .map_err(|e| PipelineError::WorkerLaunchFailed {
                role: WorkerRole::Mapper,
                worker_id,
                reason: e.to_string(),
            })?;

        Ok(MapperEndpoints {
            worker_id,
            input: SocketTokenSink::new(worker_id, write_half),
            output: SocketPairSource::new(worker_id, read_half),
            handle,
        })
    }

    async fn join(&self, worker_id: usize, handle: Self::Handle) -> Result<usize, PipelineError> {
        join_thread(WorkerRole::Mapper, worker_id, handle).await?
    }
}

/// Mapper thread body: reads token frames until the orchestrator shuts down
/// its write direction, answering each with one pair frame
fn run_mapper<P: MapReduceProblem>(
    worker_id: usize,
    stream: TcpStream,
) -> Result<usize, PipelineError> {
    let broken = |reason: String| PipelineError::ChannelBroken { worker_id, reason };

    let mut reader = BufReader::new(&stream);
    let mut writer = BufWriter::new(&stream);
    let mut emitted = 0;

    while let Some(frame) = read_frame(&mut reader).map_err(|e| broken(e.to_string()))? {
        let token: Token = serde_json::from_slice(&frame)
            .map_err(|e| broken(format!("undecodable token frame: {}", e)))?;
        let payload =
            serde_json::to_vec(&P::map(&token)).map_err(|e| broken(e.to_string()))?;
        write_frame(&mut writer, &payload).map_err(|e| broken(e.to_string()))?;
        emitted += 1;
    }

    writer.flush().map_err(|e| broken(e.to_string()))?;
    drop(writer);
    stream
        .shutdown(Shutdown::Write)
        .map_err(|e| broken(e.to_string()))?;

    debug!("Mapper {} input closed after {} words", worker_id, emitted);
    Ok(emitted)
}
