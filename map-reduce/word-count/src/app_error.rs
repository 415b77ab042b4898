// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use map_reduce_core::{ConfigError, PipelineError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read input: {0}")]
    Input(#[from] std::io::Error),

    #[error("{kind}: {0}", kind = .0.kind())]
    Pipeline(#[from] PipelineError),

    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),

    #[error("interrupted")]
    Interrupted,
}

impl AppError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Pipeline(PipelineError::NoInput) => 1,
            AppError::Config(_) | AppError::Input(_) => 2,
            AppError::Pipeline(_) | AppError::Render(_) => 3,
            AppError::Interrupted => 130,
        }
    }
}
