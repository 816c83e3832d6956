//! Core data types for wordfreq.
//!
//! This module defines the primary types used throughout the library:
//! - [`WordCounts`] - Word to occurrence count mapping
//! - [`RankedWord`] - One entry of the frequency-sorted listing
//! - [`Summary`] - Total words, unique ratio and average word length
//! - [`Readability`] - Sentence-based readability estimates
//! - [`Report`] - Complete result of analyzing one text
//! - [`AnalyzeOptions`] - Optional pipeline stages

use std::collections::HashMap;

use serde::Serialize;

/// Mapping from normalized word to its number of occurrences.
///
/// Words are kept in first-occurrence order alongside a lookup index, so
/// ranking can break count ties deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounts {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl WordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for `word`, starting at 1 on first occurrence.
    pub fn record(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push((word.to_string(), 1));
            }
        }
    }

    /// Occurrence count of `word`, or `None` if it was never seen.
    pub fn get(&self, word: &str) -> Option<usize> {
        self.index.get(word).map(|&slot| self.entries[slot].1)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(word, count)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(word, count)| (word.as_str(), *count))
    }
}

/// One entry of the ranked list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedWord {
    pub word: String,
    pub count: usize,
}

/// Summary statistics for a text.
///
/// Ratios are `None` when the text holds no words.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    #[serde(rename = "total words")]
    pub total_words: usize,
    #[serde(rename = "percentage unique words")]
    pub percentage_unique: Option<f64>,
    #[serde(rename = "average word length")]
    pub average_word_length: Option<f64>,
    /// Distinct words after punctuation stripping.
    #[serde(skip)]
    pub unique_words: usize,
    /// Characters across all unstripped tokens.
    #[serde(skip)]
    pub total_characters: usize,
}

/// Readability estimates derived from sentence, paragraph and word lengths.
///
/// Scores are `None` when the text has no words or no sentences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Readability {
    #[serde(rename = "sentence count")]
    pub sentences: usize,
    #[serde(rename = "paragraph count")]
    pub paragraphs: usize,
    #[serde(rename = "average sentence length")]
    pub average_sentence_length: Option<f64>,
    #[serde(rename = "average paragraph length")]
    pub average_paragraph_length: Option<f64>,
    #[serde(rename = "syllables per word")]
    pub syllables_per_word: Option<f64>,
    #[serde(rename = "commas per sentence")]
    pub commas_per_sentence: Option<f64>,
    /// Occurrences of forms of "to be".
    #[serde(rename = "verbs of being")]
    pub verbs_of_being: usize,
    /// Occurrences of perception and cognition verbs.
    #[serde(rename = "thought verbs")]
    pub thought_verbs: usize,
    #[serde(rename = "flesch reading ease")]
    pub flesch_reading_ease: Option<f64>,
    #[serde(rename = "flesch-kincaid grade")]
    pub flesch_kincaid_grade: Option<f64>,
    #[serde(rename = "automated readability index")]
    pub automated_readability_index: Option<f64>,
    #[serde(rename = "coleman-liau index")]
    pub coleman_liau_index: Option<f64>,
}

/// Complete result of analyzing a text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub stats: Summary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readability: Option<Readability>,
    pub words: Vec<RankedWord>,
}

/// Optional pipeline stages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyzeOptions {
    /// Compute [`Readability`] alongside the summary.
    pub readability: bool,
    /// Keep only the first N ranked words.
    pub top: Option<usize>,
}
