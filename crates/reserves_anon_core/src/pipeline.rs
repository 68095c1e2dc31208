//! One-shot anonymization pipeline.
//!
//! # Responsibility
//! - Drive load -> map -> anonymize -> write for one run.
//! - Report per-run counts for logging and callers.
//!
//! # Invariants
//! - Stages run strictly in order with no retries.
//! - Nothing is written unless loading and parsing fully succeed.

use crate::config::RunConfig;
use crate::service::anonymize_service::anonymize;
use crate::service::mapping_service::{collect_titles, TitleMapping};
use crate::store::{load_rooms, save_rooms, StoreError};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::time::Instant;

/// Pipeline stage, used to report where a run failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Load,
    Write,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Write => "write",
        }
    }
}

/// Fatal pipeline failure.
#[derive(Debug)]
pub struct RunError {
    pub stage: Stage,
    pub source: StoreError,
}

impl Display for RunError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub rooms: usize,
    pub entries: usize,
    /// Title occurrences, duplicates included.
    pub titles: usize,
    pub unique_titles: usize,
}

/// Runs the full pipeline for `config`.
///
/// # Errors
/// - Load-stage `RunError` for missing, unreadable or malformed input; no
///   output is created in that case.
/// - Write-stage `RunError` when the output cannot be persisted.
pub fn run(config: &RunConfig) -> Result<RunReport, RunError> {
    let started_at = Instant::now();
    info!("event=pipeline_run module=pipeline status=start");

    let rooms = load_rooms(&config.input_path)
        .map_err(|source| fail(Stage::Load, source, started_at))?;

    let titles = collect_titles(&rooms).len();
    let mapping = TitleMapping::build(&rooms);
    info!(
        "event=mapping_built module=pipeline status=ok titles={} unique_titles={}",
        titles,
        mapping.len()
    );

    let anonymized = anonymize(&rooms, &mapping);
    let entries: usize = anonymized.iter().map(|room| room.entries().len()).sum();

    save_rooms(&config.output_path, &anonymized)
        .map_err(|source| fail(Stage::Write, source, started_at))?;

    info!(
        "event=pipeline_run module=pipeline status=ok duration_ms={} rooms={} entries={}",
        started_at.elapsed().as_millis(),
        anonymized.len(),
        entries
    );

    Ok(RunReport {
        input_path: config.input_path.clone(),
        output_path: config.output_path.clone(),
        rooms: anonymized.len(),
        entries,
        titles,
        unique_titles: mapping.len(),
    })
}

fn fail(stage: Stage, source: StoreError, started_at: Instant) -> RunError {
    error!(
        "event=pipeline_run module=pipeline status=error stage={} duration_ms={} error_code={}",
        stage.as_str(),
        started_at.elapsed().as_millis(),
        source.code()
    );
    RunError { stage, source }
}
