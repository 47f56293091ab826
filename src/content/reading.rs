// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word count and estimated reading time.

/// Typical adult silent-reading speed.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Count words in a body of text.
///
/// A word is a whitespace-separated token containing at least one
/// alphanumeric character, so Markdown punctuation like `#`, `---` or `>`
/// does not inflate the count.
pub fn word_count(body: &str) -> usize {
    body.split_whitespace()
        .filter(|token| token.chars().any(char::is_alphanumeric))
        .count()
}

/// Whole minutes needed to read `words`, rounded up. Zero words read in
/// zero minutes.
pub fn reading_minutes(words: usize, words_per_minute: u32) -> u32 {
    let wpm = words_per_minute.max(1) as usize;
    words.div_ceil(wpm) as u32
}
