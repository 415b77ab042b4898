// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{
    FinalCount, MapReduceProblem, PhaseBarrier, PipelineError, SortedGroup, SortedStore,
    WorkerRole, WorkerRuntime,
};
use std::marker::PhantomData;
use tracing::{debug, info};

/// Work for one reducer worker: one key and its range in the sorted store
#[derive(Debug, Clone)]
pub struct ReducerTask {
    pub key: String,
    pub start: usize,
    pub end: usize,
    store: SortedStore,
}

impl ReducerTask {
    pub fn new(group: SortedGroup, store: SortedStore) -> Self {
        Self {
            key: group.key,
            start: group.start,
            end: group.end,
            store,
        }
    }

    /// Aggregates the task's range. Reads only, so no lock is taken.
    pub fn run<P: MapReduceProblem>(self) -> FinalCount {
        let total = P::reduce(&self.key, self.store.range(self.start..=self.end));
        FinalCount {
            key: self.key,
            total,
        }
    }
}

/// Launches one reducer per distinct key once the phase barrier is released
pub struct ReducerDispatcher<P, R> {
    _marker: PhantomData<(P, R)>,
}

impl<P: MapReduceProblem, R: WorkerRuntime> ReducerDispatcher<P, R> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    /// Builds one task per sorted group
    pub fn plan(&self, store: &SortedStore) -> Result<Vec<ReducerTask>, PipelineError> {
        let groups = store.groups();
        let mut tasks = Vec::new();
        tasks
            .try_reserve_exact(groups.len())
            .map_err(|e| PipelineError::TaskAllocationFailed {
                requested: groups.len(),
                reason: e.to_string(),
            })?;
        tasks.extend(
            groups
                .into_iter()
                .map(|group| ReducerTask::new(group, store.clone())),
        );
        Ok(tasks)
    }

    /// Runs the reduce phase and joins every reducer
    pub async fn dispatch(
        &self,
        store: SortedStore,
        barrier: &PhaseBarrier,
    ) -> Result<Vec<FinalCount>, PipelineError> {
        barrier.wait().await;

        let tasks = self.plan(&store)?;
        info!("Starting {} reducers...", tasks.len());

        let mut handles = Vec::with_capacity(tasks.len());
        for (reducer_id, task) in tasks.into_iter().enumerate() {
            debug!(
                "Reducer {} assigned key '{}' range [{}, {}]",
                reducer_id, task.key, task.start, task.end
            );
            let handle = R::spawn(WorkerRole::Reducer, reducer_id, move || task.run::<P>())?;
            handles.push((reducer_id, handle));
        }

        let mut counts = Vec::with_capacity(handles.len());
        for (reducer_id, handle) in handles {
            counts.push(R::join(WorkerRole::Reducer, reducer_id, handle).await?);
        }
        info!("All reducers completed!");
        Ok(counts)
    }
}

impl<P: MapReduceProblem, R: WorkerRuntime> Default for ReducerDispatcher<P, R> {
    fn default() -> Self {
        Self::new()
    }
}
