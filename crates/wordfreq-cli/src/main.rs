use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

mod analyze_cmd;
mod cli;
mod error;
mod report;

use analyze_cmd::run_analyze;
use cli::Cli;
use error::{output_format_hint, parse_output_format, render_error};

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!("Parsed CLI args: {:?}", cli);

    let fallback = output_format_hint(&cli.output_format);
    let output_format = match parse_output_format(&cli.output_format) {
        Ok(format) => format,
        Err(err) => return render_error(&err, fallback),
    };

    match run_analyze(cli, output_format) {
        Ok(code) => code,
        Err(err) => render_error(&err, output_format),
    }
}
