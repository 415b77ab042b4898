// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{report, tokenizer, utils, AppError, Args, WordCountProblem};
use map_reduce_core::{MapperTransport, Orchestrator, PipelineConfig, Token, WorkerRuntime};
use std::fs::File;
use std::io::{self, BufReader};
use std::time::Instant;
use tracing::{debug, info};

fn load_tokens(args: &Args) -> Result<Vec<Token>, AppError> {
    if let Some(count) = args.random_words {
        let mut rng = rand::rng();
        return Ok(utils::generate_random_words(
            &mut rng,
            count,
            args.max_word_length,
        ));
    }

    let tokens = match &args.input {
        Some(path) => tokenizer::tokenize_reader(BufReader::new(File::open(path)?))?,
        None => tokenizer::tokenize_reader(io::stdin().lock())?,
    };
    Ok(tokens)
}

/// Reads and tokenizes the input, runs the pipeline and renders the counts
///
/// `make_transport` builds the mapper transport from the final config, so
/// each binary only decides how its workers run.
pub async fn run_app<T, R, F>(args: &Args, make_transport: F) -> Result<String, AppError>
where
    T: MapperTransport,
    R: WorkerRuntime,
    F: FnOnce(&PipelineConfig) -> T,
{
    let start_time = Instant::now();
    let config = args.pipeline_config()?;
    debug!("Configuration: {:?}", config);

    let tokens = load_tokens(args)?;
    info!("Number of words extracted: {}", tokens.len());

    let transport = make_transport(&config);
    let orchestrator = Orchestrator::<WordCountProblem, T, R>::new(config, transport)?;

    let counts = tokio::select! {
        result = orchestrator.run(tokens) => result?,
        _ = tokio::signal::ctrl_c() => {
            info!("Ctrl+C received, aborting run");
            return Err(AppError::Interrupted);
        }
    };

    let rendered = report::render(&counts, args.format)?;
    info!(
        "Processing complete in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(rendered)
}
