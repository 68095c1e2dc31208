//! `anonymize_reserves` command-line entry point.
//!
//! # Responsibility
//! - Parse arguments, start logging and run the anonymization pipeline.
//! - Print one confirmation line on success.
//! - Map every failure to a message on stderr and a non-zero exit status.

use clap::Parser;
use log::info;
use reserves_anon_core::{default_log_level, init_logging, run, Cli, RunConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = RunConfig::from(Cli::parse());

    let level = config
        .log_level
        .as_deref()
        .unwrap_or_else(|| default_log_level(config.log_dir.is_some()));
    if let Err(err) = init_logging(level, config.log_dir.as_deref()) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(report) => {
            info!(
                "event=run_complete module=cli status=ok rooms={} entries={} unique_titles={}",
                report.rooms, report.entries, report.unique_titles
            );
            println!(
                "Anonymized {} -> {}",
                report.input_path.display(),
                report.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
