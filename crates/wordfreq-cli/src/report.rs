use std::io::{self, Write};

use wordfreq_core::{Readability, Report, Summary};

use crate::error::{CliError, CliResult, OutputFormat};

/// Placeholder for ratios over zero words or sentences.
const UNDEFINED: &str = "undefined";

pub fn write_report(
    out: &mut impl Write,
    report: &Report,
    output_format: OutputFormat,
) -> CliResult<()> {
    let written = match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            writeln!(out, "{}", json)
        }
        OutputFormat::Text => write_text(out, report),
    };

    written.map_err(|e| CliError::runtime(format!("Failed to write output: {}", e)))
}

fn write_text(out: &mut impl Write, report: &Report) -> io::Result<()> {
    write_summary(out, &report.stats)?;
    if let Some(readability) = &report.readability {
        write_readability(out, readability)?;
    }
    for ranked in &report.words {
        writeln!(out, "{}\t{}", ranked.word, ranked.count)?;
    }
    Ok(())
}

fn write_summary(out: &mut impl Write, stats: &Summary) -> io::Result<()> {
    writeln!(out, "total words: {}", stats.total_words)?;
    writeln!(
        out,
        "percentage unique words: {}",
        display_ratio(stats.percentage_unique)
    )?;
    writeln!(
        out,
        "average word length: {}",
        display_ratio(stats.average_word_length)
    )
}

fn write_readability(out: &mut impl Write, readability: &Readability) -> io::Result<()> {
    let counts = [
        ("sentence count", readability.sentences),
        ("paragraph count", readability.paragraphs),
    ];
    let ratios = [
        ("average sentence length", readability.average_sentence_length),
        ("average paragraph length", readability.average_paragraph_length),
        ("syllables per word", readability.syllables_per_word),
        ("commas per sentence", readability.commas_per_sentence),
    ];
    let verbs = [
        ("verbs of being", readability.verbs_of_being),
        ("thought verbs", readability.thought_verbs),
    ];
    let scores = [
        ("flesch reading ease", readability.flesch_reading_ease),
        ("flesch-kincaid grade", readability.flesch_kincaid_grade),
        ("automated readability index", readability.automated_readability_index),
        ("coleman-liau index", readability.coleman_liau_index),
    ];

    writeln!(out, "readability:")?;
    for (label, value) in counts {
        writeln!(out, "  {}: {}", label, value)?;
    }
    for (label, value) in ratios {
        writeln!(out, "  {}: {}", label, display_ratio(value))?;
    }
    for (label, value) in verbs {
        writeln!(out, "  {}: {}", label, value)?;
    }
    for (label, value) in scores {
        writeln!(out, "  {}: {}", label, display_ratio(value))?;
    }
    Ok(())
}

fn display_ratio(value: Option<f64>) -> String {
    value.map_or_else(|| UNDEFINED.to_string(), |v| v.to_string())
}
