// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::AppError;
use clap::{Parser, ValueEnum};
use map_reduce_core::PipelineConfig;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `word : count` line per word
    Text,
    /// A single JSON object
    Json,
}

/// Count word frequencies with a map-reduce pipeline
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Text file to count; reads stdin when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Count N random lowercase words instead of reading input
    #[arg(long, value_name = "N", conflicts_with = "input")]
    pub random_words: Option<usize>,

    /// Maximum length of generated random words
    #[arg(long, default_value_t = 6)]
    pub max_word_length: usize,

    /// JSON pipeline configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Tokens handled by each mapper
    #[arg(long)]
    pub words_per_mapper: Option<usize>,

    /// Maximum number of intermediate pairs
    #[arg(long)]
    pub store_capacity: Option<usize>,

    /// Buffer size of each mapper channel
    #[arg(long)]
    pub channel_capacity: Option<usize>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Loads the config file if one was given, then applies flag overrides
    pub fn pipeline_config(&self) -> Result<PipelineConfig, AppError> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::load(path)?,
            None => PipelineConfig::default(),
        };

        if let Some(words_per_mapper) = self.words_per_mapper {
            config.words_per_mapper = words_per_mapper;
        }
        if let Some(store_capacity) = self.store_capacity {
            config.store_capacity = store_capacity;
        }
        if let Some(channel_capacity) = self.channel_capacity {
            config.channel_capacity = channel_capacity;
        }
        Ok(config)
    }
}
