//! The analysis pipeline: load, normalize, count, rank, summarize.

use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::load::read_text;
use crate::models::{AnalyzeOptions, Report};
use crate::normalize::normalize;
use crate::rank::rank;
use crate::readability::assess;
use crate::stats::summarize;
use crate::tokenize::count_words;

/// Analyze raw text.
///
/// Statistics always cover every word; `options.top` only truncates the
/// ranked listing.
pub fn analyze_text(raw: &str, options: AnalyzeOptions) -> Report {
    let text = normalize(raw);
    let counts = count_words(&text);
    debug!(unique = counts.len(), "counted words");

    let stats = summarize(&text, &counts);
    debug!(total = stats.total_words, "summarized");

    let readability = options.readability.then(|| assess(&text, &stats, &counts));

    let mut words = rank(&counts);
    if let Some(top) = options.top {
        words.truncate(top);
    }

    Report {
        stats,
        readability,
        words,
    }
}

/// Read the file at `path` and analyze its contents.
///
/// # Errors
///
/// Propagates loader errors; see [`read_text`].
pub fn analyze_file(path: impl AsRef<Path>, options: AnalyzeOptions) -> Result<Report> {
    let path = path.as_ref();
    let raw = read_text(path)?;
    debug!(path = %path.display(), bytes = raw.len(), "loaded input");

    Ok(analyze_text(&raw, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WordFreqError;
    use std::io::Write;

    #[test]
    fn sample_report() {
        let report = analyze_text("The cat sat. The cat ran!", AnalyzeOptions::default());

        assert_eq!(report.stats.total_words, 6);
        assert_eq!(report.stats.unique_words, 4);
        assert!(report.readability.is_none());

        let pairs: Vec<_> = report
            .words
            .iter()
            .map(|r| (r.word.as_str(), r.count))
            .collect();
        assert_eq!(pairs, vec![("the", 2), ("cat", 2), ("sat", 1), ("ran", 1)]);
    }

    #[test]
    fn top_truncates_listing_only() {
        let options = AnalyzeOptions {
            top: Some(1),
            ..AnalyzeOptions::default()
        };
        let report = analyze_text("b a b c", options);

        assert_eq!(report.words.len(), 1);
        assert_eq!(report.words[0].word, "b");
        assert_eq!(report.stats.unique_words, 3);
        assert_eq!(report.stats.percentage_unique, Some(0.75));
    }

    #[test]
    fn top_zero_lists_nothing() {
        let options = AnalyzeOptions {
            top: Some(0),
            ..AnalyzeOptions::default()
        };
        assert!(analyze_text("a b", options).words.is_empty());
    }

    #[test]
    fn readability_on_request() {
        let options = AnalyzeOptions {
            readability: true,
            ..AnalyzeOptions::default()
        };
        let report = analyze_text("Short one. Another!", options);

        let readability = report.readability.expect("readability requested");
        assert_eq!(readability.sentences, 2);
    }

    #[test]
    fn empty_input_does_not_fail() {
        let report = analyze_text("", AnalyzeOptions::default());

        assert_eq!(report.stats.total_words, 0);
        assert_eq!(report.stats.percentage_unique, None);
        assert_eq!(report.stats.average_word_length, None);
        assert!(report.words.is_empty());
    }

    #[test]
    fn analyze_file_reads_and_analyzes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Well--actually, don't stop!").unwrap();

        let report = analyze_file(file.path(), AnalyzeOptions::default()).unwrap();
        let words: Vec<_> = report.words.iter().map(|r| r.word.as_str()).collect();

        assert_eq!(words, vec!["well", "actually", "dont", "stop"]);
        assert_eq!(report.stats.total_words, 4);
    }

    #[test]
    fn analyze_file_propagates_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = analyze_file(dir.path().join("nope.txt"), AnalyzeOptions::default())
            .unwrap_err();

        assert!(matches!(err, WordFreqError::FileNotFound { .. }));
    }
}
