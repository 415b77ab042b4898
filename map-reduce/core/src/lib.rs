// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod key_value;
pub use key_value::{FinalCount, KeyValuePair, Token, WordCounts};

pub mod pipeline_error;
pub use pipeline_error::{PipelineError, WorkerRole};

pub mod config;
pub use config::{ConfigError, PipelineConfig};

pub mod map_reduce_problem;
pub use map_reduce_problem::MapReduceProblem;

pub mod partitioner;

pub mod intermediate_store;
pub use intermediate_store::IntermediateStore;

pub mod shuffler;
pub use shuffler::{SortedGroup, SortedStore};

pub mod phase_barrier;
pub use phase_barrier::PhaseBarrier;

pub mod pipeline_phase;
pub use pipeline_phase::{PhaseTracker, PipelinePhase};

pub mod worker_io;
pub use worker_io::{PairSource, TokenSink};

pub mod mapper_transport;
pub use mapper_transport::{MapperEndpoints, MapperTransport};

pub mod worker_runtime;
pub use worker_runtime::WorkerRuntime;

pub mod reducer;
pub use reducer::{ReducerDispatcher, ReducerTask};

pub mod orchestrator;
pub use orchestrator::Orchestrator;
