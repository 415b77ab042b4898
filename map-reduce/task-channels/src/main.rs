// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use clap::Parser;
use map_reduce_task_channels::{ChannelTransport, TokioRuntime};
use map_reduce_word_count::{logging, run_app, Args, WordCountProblem};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_tracing(args.verbose);

    let result = run_app::<_, TokioRuntime, _>(&args, |config| {
        ChannelTransport::<WordCountProblem>::new(config.channel_capacity)
    })
    .await;

    match result {
        Ok(rendered) => {
            print!("{}", rendered);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
