use std::path::PathBuf;

use clap::Parser;

/// Word-frequency statistics for a text file
#[derive(Parser, Debug)]
#[command(name = "wordfreq", version)]
#[command(about = "Word-frequency statistics for a text file")]
pub struct Cli {
    /// Text file to analyze
    pub file: PathBuf,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,

    /// Include readability estimates
    #[arg(long)]
    pub readability: bool,

    /// List only the N most frequent words
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    pub verbose: bool,
}
