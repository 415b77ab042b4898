// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::PipelineError;
use std::fmt;
use tracing::info;

/// Phases of a run, in the only order they may occur
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PipelinePhase {
    Idle,
    Partitioning,
    Mapping,
    Collecting,
    Shuffling,
    BarrierReleased,
    Reducing,
    Done,
}

impl PipelinePhase {
    pub fn next(self) -> Option<PipelinePhase> {
        match self {
            PipelinePhase::Idle => Some(PipelinePhase::Partitioning),
            PipelinePhase::Partitioning => Some(PipelinePhase::Mapping),
            PipelinePhase::Mapping => Some(PipelinePhase::Collecting),
            PipelinePhase::Collecting => Some(PipelinePhase::Shuffling),
            PipelinePhase::Shuffling => Some(PipelinePhase::BarrierReleased),
            PipelinePhase::BarrierReleased => Some(PipelinePhase::Reducing),
            PipelinePhase::Reducing => Some(PipelinePhase::Done),
            PipelinePhase::Done => None,
        }
    }
}

impl fmt::Display for PipelinePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelinePhase::Idle => "Idle",
            PipelinePhase::Partitioning => "Partitioning",
            PipelinePhase::Mapping => "Mapping",
            PipelinePhase::Collecting => "Collecting",
            PipelinePhase::Shuffling => "Shuffling",
            PipelinePhase::BarrierReleased => "BarrierReleased",
            PipelinePhase::Reducing => "Reducing",
            PipelinePhase::Done => "Done",
        };
        f.write_str(name)
    }
}

/// Enforces forward-only, one-step phase transitions
#[derive(Debug)]
pub struct PhaseTracker {
    current: PipelinePhase,
}

impl PhaseTracker {
    pub fn new() -> Self {
        Self {
            current: PipelinePhase::Idle,
        }
    }

    pub fn current(&self) -> PipelinePhase {
        self.current
    }

    pub fn advance(&mut self, to: PipelinePhase) -> Result<(), PipelineError> {
        if self.current.next() != Some(to) {
            return Err(PipelineError::InvalidPhaseTransition {
                from: self.current,
                to,
            });
        }
        info!("=== {} ===", to);
        self.current = to;
        Ok(())
    }
}

impl Default for PhaseTracker {
    fn default() -> Self {
        Self::new()
    }
}
