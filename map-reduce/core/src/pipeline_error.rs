// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::pipeline_phase::PipelinePhase;
use std::fmt;
use thiserror::Error;

/// Which side of the pipeline a worker belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerRole {
    Mapper,
    Reducer,
}

impl fmt::Display for WorkerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkerRole::Mapper => write!(f, "mapper"),
            WorkerRole::Reducer => write!(f, "reducer"),
        }
    }
}

/// Fatal failures of a pipeline run
///
/// Every variant aborts the whole run. There is no retry and no partial
/// result: a caller either gets the complete word counts or one of these.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The token sequence was empty
    #[error("no input: the token sequence is empty")]
    NoInput,

    /// A worker thread or task could not be created
    #[error("failed to launch {role} worker {worker_id}: {reason}")]
    WorkerLaunchFailed {
        role: WorkerRole,
        worker_id: usize,
        reason: String,
    },

    /// The channels connecting a mapper to the orchestrator could not be created
    #[error("failed to set up channels for mapper {worker_id}: {reason}")]
    ChannelSetupFailed { worker_id: usize, reason: String },

    /// More intermediate pairs arrived than the store can hold
    #[error("intermediate store capacity of {capacity} pairs exceeded")]
    StoreCapacityExceeded { capacity: usize },

    /// The reducer task list could not be allocated
    #[error("failed to allocate {requested} reducer tasks: {reason}")]
    TaskAllocationFailed { requested: usize, reason: String },

    /// A worker panicked or terminated with an error
    #[error("{role} worker {worker_id} failed: {reason}")]
    WorkerFailed {
        role: WorkerRole,
        worker_id: usize,
        reason: String,
    },

    /// A mapper channel broke mid-transfer
    #[error("channel of mapper {worker_id} broke: {reason}")]
    ChannelBroken { worker_id: usize, reason: String },

    /// A write reached the intermediate store after it was handed to the shuffler
    #[error("intermediate store is sealed")]
    StoreSealed,

    #[error("phase barrier was already released")]
    BarrierAlreadyReleased,

    #[error("invalid phase transition from {from} to {to}")]
    InvalidPhaseTransition {
        from: PipelinePhase,
        to: PipelinePhase,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl PipelineError {
    /// Short classification name, stable across error messages
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::NoInput => "NoInput",
            PipelineError::WorkerLaunchFailed { .. } => "WorkerLaunchFailed",
            PipelineError::ChannelSetupFailed { .. } => "ChannelSetupFailed",
            PipelineError::StoreCapacityExceeded { .. } => "StoreCapacityExceeded",
            PipelineError::TaskAllocationFailed { .. } => "TaskAllocationFailed",
            PipelineError::WorkerFailed { .. } => "WorkerFailed",
            PipelineError::ChannelBroken { .. } => "ChannelBroken",
            PipelineError::StoreSealed => "StoreSealed",
            PipelineError::BarrierAlreadyReleased => "BarrierAlreadyReleased",
            PipelineError::InvalidPhaseTransition { .. } => "InvalidPhaseTransition",
            PipelineError::InvalidConfig(_) => "InvalidConfig",
        }
    }
}
