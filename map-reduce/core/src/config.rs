// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::PipelineError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_WORDS_PER_MAPPER: usize = 20;
pub const DEFAULT_STORE_CAPACITY: usize = 65_536;
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Tunables of a pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// One mapper is launched per this many tokens (rounded up)
    pub words_per_mapper: usize,
    /// Maximum number of pairs the intermediate store accepts
    pub store_capacity: usize,
    /// Buffer size of every mapper input and output channel
    pub channel_capacity: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            words_per_mapper: DEFAULT_WORDS_PER_MAPPER,
            store_capacity: DEFAULT_STORE_CAPACITY,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl PipelineConfig {
    /// Loads a JSON config file. Missing fields fall back to their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.words_per_mapper == 0 {
            return Err(PipelineError::InvalidConfig(
                "words_per_mapper must be at least 1".to_string(),
            ));
        }
        if self.store_capacity == 0 {
            return Err(PipelineError::InvalidConfig(
                "store_capacity must be at least 1".to_string(),
            ));
        }
        if self.channel_capacity == 0 {
            return Err(PipelineError::InvalidConfig(
                "channel_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
