// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{AppError, OutputFormat};
use map_reduce_core::WordCounts;
use std::fmt::Write;

/// `  word : count` per line, in sorted key order
pub fn render_text(counts: &WordCounts) -> String {
    let mut out = String::new();
    for (word, count) in counts.iter() {
        let _ = writeln!(out, "  {} : {}", word, count);
    }
    out
}

pub fn render_json(counts: &WordCounts) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(counts)?;
    out.push('\n');
    Ok(out)
}

pub fn render(counts: &WordCounts, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(render_text(counts)),
        OutputFormat::Json => Ok(render_json(counts)?),
    }
}
