// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use map_reduce_core::{PipelineError, WorkerRole, WorkerRuntime};
use tokio::task::JoinHandle;

/// Tokio task-based runtime
pub struct TokioRuntime;

impl WorkerRuntime for TokioRuntime {
    type Handle<T: Send + 'static> = JoinHandle<T>;

    fn spawn<T, F>(role: WorkerRole, worker_id: usize, f: F) -> Result<Self::Handle<T>, PipelineError>
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        let runtime = tokio::runtime::Handle::try_current().map_err(|e| {
            PipelineError::WorkerLaunchFailed {
                role,
                worker_id,
                reason: e.to_string(),
            }
        })?;
        Ok(runtime.spawn(async move { f() }))
    }

    async fn join<T: Send + 'static>(
        role: WorkerRole,
        worker_id: usize,
        handle: Self::Handle<T>,
    ) -> Result<T, PipelineError> {
        handle.await.map_err(|e| PipelineError::WorkerFailed {
            role,
            worker_id,
            reason: e.to_string(),
        })
    }
}
