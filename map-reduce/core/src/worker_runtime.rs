// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{PipelineError, WorkerRole};

/// Trait for abstracting where reducer workers run (tasks, threads)
pub trait WorkerRuntime: Send + Sync + 'static {
    type Handle<T: Send + 'static>: Send + 'static;

    /// Spawn a worker running `f`
    fn spawn<T, F>(role: WorkerRole, worker_id: usize, f: F) -> Result<Self::Handle<T>, PipelineError>
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static;

    /// Wait for the worker to complete and return what it produced
    fn join<T: Send + 'static>(
        role: WorkerRole,
        worker_id: usize,
        handle: Self::Handle<T>,
    ) -> impl std::future::Future<Output = Result<T, PipelineError>> + Send;
}
