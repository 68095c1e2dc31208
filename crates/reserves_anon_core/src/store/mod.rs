//! Reserve export file I/O.
//!
//! # Responsibility
//! - Load and parse a reserve export into rooms.
//! - Persist anonymized rooms as formatted UTF-8 JSON.
//!
//! # Invariants
//! - Loading is all-or-nothing; no partial documents are returned.
//! - Saving never leaves a half-written document at the destination.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

mod load;
mod save;

pub use load::load_rooms;
pub use save::save_rooms;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    /// Input path does not exist.
    MissingInput { path: PathBuf, source: io::Error },
    /// Input exists but could not be read.
    UnreadableInput { path: PathBuf, source: io::Error },
    /// Input is not valid JSON or not a list of room objects.
    MalformedInput {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Destination could not be written or replaced.
    OutputWrite { path: PathBuf, source: io::Error },
}

impl StoreError {
    /// Stable code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingInput { .. } => "missing_input",
            Self::UnreadableInput { .. } => "unreadable_input",
            Self::MalformedInput { .. } => "malformed_input",
            Self::OutputWrite { .. } => "output_write_failed",
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingInput { path, .. } => {
                write!(f, "input file not found: {}", path.display())
            }
            Self::UnreadableInput { path, source } => {
                write!(f, "cannot read input file {}: {source}", path.display())
            }
            Self::MalformedInput { path, source } => {
                write!(f, "malformed input {}: {source}", path.display())
            }
            Self::OutputWrite { path, source } => {
                write!(f, "cannot write output file {}: {source}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingInput { source, .. } => Some(source),
            Self::UnreadableInput { source, .. } => Some(source),
            Self::MalformedInput { source, .. } => Some(source),
            Self::OutputWrite { source, .. } => Some(source),
        }
    }
}
