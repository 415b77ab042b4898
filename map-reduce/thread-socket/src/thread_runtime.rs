// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use map_reduce_core::{PipelineError, WorkerRole, WorkerRuntime};
use std::any::Any;
use std::thread::{self, JoinHandle};

/// Thread-based runtime: every worker is a named OS thread
pub struct ThreadRuntime;

impl WorkerRuntime for ThreadRuntime {
    type Handle<T: Send + 'static> = JoinHandle<T>;

    fn spawn<T, F>(role: WorkerRole, worker_id: usize, f: F) -> Result<Self::Handle<T>, PipelineError>
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        thread::Builder::new()
            .name(format!("{}-{}", role, worker_id))
            .spawn(f)
            .map_err(|e| PipelineError::WorkerLaunchFailed {
                role,
                worker_id,
                reason: e.to_string(),
            })
    }

    async fn join<T: Send + 'static>(
        role: WorkerRole,
        worker_id: usize,
        handle: Self::Handle<T>,
    ) -> Result<T, PipelineError> {
        join_thread(role, worker_id, handle).await
    }
}

/// Joins a thread without blocking the async runtime
pub(crate) async fn join_thread<T: Send + 'static>(
    role: WorkerRole,
    worker_id: usize,
    handle: JoinHandle<T>,
) -> Result<T, PipelineError> {
    let failed = |reason: String| PipelineError::WorkerFailed {
        role,
        worker_id,
        reason,
    };

    match tokio::task::spawn_blocking(move || handle.join()).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(payload)) => Err(failed(panic_message(payload))),
        Err(e) => Err(failed(e.to_string())),
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("panicked: {}", message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("panicked: {}", message)
    } else {
        "panicked".to_string()
    }
}
