//! Run configuration and command-line definition.
//!
//! # Responsibility
//! - Declare the command-line surface for `anonymize_reserves`.
//! - Resolve input/output paths with their defaults.
//!
//! # Invariants
//! - At most two positional arguments are accepted.
//! - No environment variables are consulted.

use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "reserves.json";
pub const DEFAULT_OUTPUT: &str = "reserves_anonymized.json";

/// Replace organization titles in a reserves export with short labels.
///
/// Titles are sorted and labelled A, B, ..., Z, AA, AB, ...; every other
/// field is copied unchanged.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "anonymize_reserves")]
#[command(version)]
#[command(about = "Replace organization titles in a reserves export with short labels")]
pub struct Cli {
    /// Input reserves export
    #[arg(value_name = "INPUT_JSON", default_value = DEFAULT_INPUT)]
    pub input_path: PathBuf,

    /// Destination for the anonymized export
    #[arg(value_name = "OUTPUT_JSON", default_value = DEFAULT_OUTPUT)]
    pub output_path: PathBuf,

    /// Log level; defaults to `warn` on stderr and a build-mode level for files
    #[arg(long, value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error"])]
    pub log_level: Option<String>,

    /// Write rolling log files to this absolute directory instead of stderr
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<String>,
}

/// Settings for one anonymization run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Explicit log level; `None` picks a default for the chosen target.
    pub log_level: Option<String>,
    /// Absolute directory for rolling log files; `None` logs to stderr.
    pub log_dir: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            log_level: None,
            log_dir: None,
        }
    }
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        Self {
            input_path: cli.input_path,
            output_path: cli.output_path,
            log_level: cli.log_level,
            log_dir: cli.log_dir,
        }
    }
}
