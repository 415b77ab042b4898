// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use map_reduce_core::Token;
use rand::Rng;

pub fn generate_random_word(rng: &mut impl Rng, max_length: usize) -> Token {
    let length = rng.random_range(1..=max_length.max(1));
    (0..length)
        .map(|_| {
            let c = rng.random_range(b'a'..=b'z');
            c as char
        })
        .collect()
}

pub fn generate_random_words(rng: &mut impl Rng, count: usize, max_length: usize) -> Vec<Token> {
    (0..count)
        .map(|_| generate_random_word(rng, max_length))
        .collect()
}
