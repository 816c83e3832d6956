//! Frequency ranking.

use crate::models::{RankedWord, WordCounts};

/// Order words by count, most frequent first.
///
/// Equal counts keep first-occurrence order: the sort is stable over
/// [`WordCounts::iter`].
pub fn rank(counts: &WordCounts) -> Vec<RankedWord> {
    let mut ranked: Vec<RankedWord> = counts
        .iter()
        .map(|(word, count)| RankedWord {
            word: word.to_string(),
            count,
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}
