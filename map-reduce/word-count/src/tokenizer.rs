// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Pre-processing that turns raw text into the tokens fed to the pipeline

use map_reduce_core::Token;
use std::io::BufRead;

/// Keeps ASCII letters, digits, spaces and tabs; everything else is dropped
pub fn is_kept(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' ' || c == '\t'
}

pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| is_kept(*c)).collect()
}

/// Strips punctuation from one line, then splits it on spaces and tabs.
/// Any other character, `\r` included, is dropped before splitting. Case is kept.
pub fn tokenize_line(line: &str) -> Vec<Token> {
    strip_punctuation(line)
        .split([' ', '\t'])
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn tokenize(text: &str) -> Vec<Token> {
    text.lines().flat_map(tokenize_line).collect()
}

/// Tokenizes a reader line by line; lines are treated as joined by spaces
pub fn tokenize_reader(reader: impl BufRead) -> std::io::Result<Vec<Token>> {
    let mut tokens = Vec::new();
    for line in reader.lines() {
        tokens.extend(tokenize_line(&line?));
    }
    Ok(tokens)
}
