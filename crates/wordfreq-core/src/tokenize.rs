//! Tokenization, punctuation stripping and counting.
//!
//! A token is a whitespace-delimited run of normalized text. A word is a
//! token with every character of [`PUNCTUATION`] removed, wherever it
//! occurs in the token.

use crate::models::WordCounts;

/// Characters removed from tokens to form words.
pub const PUNCTUATION: &[char] = &[
    '"', '\'', '(', ')', '[', ']', ',', '.', '!', '?', '%', '$', ';', ':',
];

/// Split normalized text on runs of whitespace.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Remove all [`PUNCTUATION`] characters from `token`.
///
/// A token made only of punctuation yields the empty string.
pub fn strip_punctuation(token: &str) -> String {
    token.chars().filter(|c| !PUNCTUATION.contains(c)).collect()
}

/// Count the words of normalized `text`.
pub fn count_words(text: &str) -> WordCounts {
    let mut counts = WordCounts::new();
    for token in tokens(text) {
        counts.record(&strip_punctuation(token));
    }
    counts
}
