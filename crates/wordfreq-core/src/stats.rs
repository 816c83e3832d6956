//! Summary statistics.
//!
//! Totals are taken over the unstripped tokens of the normalized text,
//! while the unique count comes from the punctuation-stripped
//! [`WordCounts`]. `"ran!"` therefore contributes four characters to the
//! average word length but is counted as the unique word `"ran"`.

use crate::models::{Summary, WordCounts};
use crate::tokenize::tokens;

/// Compute [`Summary`] statistics for normalized `text` and its counts.
///
/// Ratios are `None` when `text` has no tokens.
pub fn summarize(text: &str, counts: &WordCounts) -> Summary {
    let (total_words, total_characters) = tokens(text).fold((0, 0), |(words, chars), token| {
        (words + 1, chars + token.chars().count())
    });
    let unique_words = counts.len();

    Summary {
        total_words,
        percentage_unique: ratio(unique_words, total_words),
        average_word_length: ratio(total_characters, total_words),
        unique_words,
        total_characters,
    }
}

/// `numerator / denominator`, or `None` for a zero denominator.
pub(crate) fn ratio(numerator: usize, denominator: usize) -> Option<f64> {
    (denominator > 0).then(|| numerator as f64 / denominator as f64)
}
