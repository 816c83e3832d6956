use std::io::{self, Write};
use std::process::ExitCode;

use tracing::debug;
use wordfreq_core::{AnalyzeOptions, analyze_file};

use crate::cli::Cli;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::report::write_report;

pub fn run_analyze(cli: Cli, output_format: OutputFormat) -> CliResult<ExitCode> {
    let options = AnalyzeOptions {
        readability: cli.readability,
        top: cli.top,
    };
    debug!(?options, file = %cli.file.display(), "analyzing");

    let report = analyze_file(&cli.file, options)?;
    debug!(
        total = report.stats.total_words,
        unique = report.stats.unique_words,
        "analysis complete"
    );

    let mut out = io::stdout().lock();
    write_report(&mut out, &report, output_format)?;
    out.flush()
        .map_err(|e| CliError::runtime(format!("Failed to write output: {}", e)))?;

    Ok(ExitCode::from(EXIT_SUCCESS))
}
