//! # wordfreq-core
//!
//! Word-frequency statistics for plain text.
//!
//! The pipeline runs in one pass over an in-memory string:
//!
//! - **Normalize**: lowercase, and treat `--` as a word boundary.
//! - **Count**: split on whitespace, strip a fixed punctuation set from each
//!   token, and count the resulting words.
//! - **Rank**: order words by count, ties in first-occurrence order.
//! - **Summarize**: total words, unique word ratio, average word length,
//!   and optional readability estimates.
//!
//! ## Example
//!
//! ```rust
//! use wordfreq_core::prelude::*;
//!
//! let report = analyze_text("The cat sat. The cat ran!", AnalyzeOptions::default());
//!
//! assert_eq!(report.stats.total_words, 6);
//! assert_eq!(report.words[0].word, "the");
//! assert_eq!(report.words[0].count, 2);
//! ```

pub mod analyze;
pub mod error;
pub mod load;
pub mod models;
pub mod normalize;
pub mod rank;
pub mod readability;
pub mod stats;
pub mod tokenize;

// Re-export commonly used types at the crate root
pub use analyze::{analyze_file, analyze_text};
pub use error::{Result, WordFreqError};
pub use models::{AnalyzeOptions, RankedWord, Readability, Report, Summary, WordCounts};

/// Prelude module for convenient imports.
///
/// ```
/// use wordfreq_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::analyze::{analyze_file, analyze_text};
    pub use crate::error::{Result, WordFreqError};
    pub use crate::load::read_text;
    pub use crate::models::*;
    pub use crate::normalize::normalize;
    pub use crate::rank::rank;
    pub use crate::stats::summarize;
    pub use crate::tokenize::count_words;
}
