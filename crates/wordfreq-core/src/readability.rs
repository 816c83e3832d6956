//! Readability estimates.
//!
//! Syllables are not counted directly; they are approximated from the
//! average word length using [`SYLLABLE_LENGTH`] characters per syllable.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Readability, Summary, WordCounts};
use crate::stats::ratio;

/// Assumed average number of characters per syllable.
pub const SYLLABLE_LENGTH: f64 = 3.0;

/// Sentence terminators, optional closing quotes or brackets, then
/// whitespace or end of text.
static SENTENCE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[.!?]+["')\]]*(?:\s+|$)"#).expect("sentence pattern is valid")
});

/// Count sentences in `text`: the non-blank segments between sentence breaks.
pub fn count_sentences(text: &str) -> usize {
    SENTENCE_BREAK
        .split(text)
        .filter(|segment| !segment.trim().is_empty())
        .count()
}

/// Forms of "to be".
pub const VERBS_OF_BEING: &[&str] = &["is", "are", "was", "were", "be", "being", "been"];

/// Perception and cognition verbs in their common inflections.
pub const THOUGHT_VERBS: &[&str] = &[
    "see", "sees", "saw", "seen",
    "notice", "notices", "noticed",
    "feel", "feels", "felt",
    "hear", "hears", "heard",
    "smell", "smells", "smelled",
    "taste", "tastes", "tasted",
    "sense", "senses", "sensed",
    "think", "thinks", "thought",
    "wonder", "wonders", "wondered",
    "speculate", "speculates", "speculated",
    "question", "questions", "questioned",
    "contemplate", "contemplates", "contemplated",
    "reckon", "reckons", "reckoned",
    "imagine", "imagines", "imagined",
    "assume", "assumes", "assumed",
    "love", "loves", "loved",
    "hate", "hates", "hated",
];

/// Count paragraphs: lines holding at least one alphanumeric character.
pub fn count_paragraphs(text: &str) -> usize {
    text.lines()
        .filter(|line| line.chars().any(char::is_alphanumeric))
        .count()
}

/// Total occurrences in `counts` of any word in `list`.
pub fn count_listed(counts: &WordCounts, list: &[&str]) -> usize {
    list.iter().filter_map(|word| counts.get(word)).sum()
}

/// Flesch reading ease for average sentence length `asl` and average
/// syllables per word `asw`. Higher is easier.
pub fn flesch_reading_ease(asl: f64, asw: f64) -> f64 {
    206.835 - 1.015 * asl - 84.0 * asw
}

/// Flesch-Kincaid U.S. grade level.
pub fn flesch_kincaid_grade(asl: f64, asw: f64) -> f64 {
    0.39 * asl + 11.8 * asw - 15.59
}

/// Automated readability index from characters per word and words per
/// sentence.
pub fn automated_readability_index(chars_per_word: f64, words_per_sentence: f64) -> f64 {
    4.71 * chars_per_word + 0.5 * words_per_sentence - 21.43
}

/// Coleman-Liau index from characters per word and sentences per word.
pub fn coleman_liau_index(chars_per_word: f64, sentences_per_word: f64) -> f64 {
    0.0588 * (100.0 * chars_per_word) - 0.296 * (100.0 * sentences_per_word) - 15.8
}

/// Assess normalized `text` given its already computed `summary` and
/// word `counts`.
pub fn assess(text: &str, summary: &Summary, counts: &WordCounts) -> Readability {
    let sentences = count_sentences(text);
    let paragraphs = count_paragraphs(text);
    let commas = text.matches(',').count();

    let average_sentence_length = ratio(summary.total_words, sentences);
    let chars_per_word = summary.average_word_length;
    let syllables_per_word = chars_per_word.map(|length| length / SYLLABLE_LENGTH);

    // Every score needs both words and sentences.
    let per_sentence = average_sentence_length.zip(chars_per_word);
    let scores = average_sentence_length.zip(syllables_per_word);

    Readability {
        sentences,
        paragraphs,
        average_sentence_length,
        average_paragraph_length: ratio(summary.total_words, paragraphs),
        syllables_per_word,
        commas_per_sentence: ratio(commas, sentences),
        verbs_of_being: count_listed(counts, VERBS_OF_BEING),
        thought_verbs: count_listed(counts, THOUGHT_VERBS),
        flesch_reading_ease: scores.map(|(asl, asw)| flesch_reading_ease(asl, asw)),
        flesch_kincaid_grade: scores.map(|(asl, asw)| flesch_kincaid_grade(asl, asw)),
        automated_readability_index: per_sentence
            .map(|(asl, cpw)| automated_readability_index(cpw, asl)),
        coleman_liau_index: per_sentence.map(|(asl, cpw)| coleman_liau_index(cpw, 1.0 / asl)),
    }
}
