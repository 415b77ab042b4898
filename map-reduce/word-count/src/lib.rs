// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod word_count_problem;
pub use word_count_problem::WordCountProblem;

pub mod tokenizer;
pub mod utils;

mod cli;
pub use cli::{Args, OutputFormat};

mod app_error;
pub use app_error::AppError;

pub mod logging;
pub mod report;

mod app;
pub use app::run_app;
