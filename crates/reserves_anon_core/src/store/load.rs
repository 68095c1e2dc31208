//! Reserve export loading.

use super::{StoreError, StoreResult};
use crate::model::room::Room;
use log::{error, info};
use std::io::ErrorKind;
use std::path::Path;
use std::time::Instant;

/// Reads `path` and parses it as a JSON list of rooms.
///
/// # Errors
/// - `MissingInput` when the file does not exist.
/// - `UnreadableInput` for any other read failure.
/// - `MalformedInput` when the content is not UTF-8 JSON shaped as a list
///   of room objects; the parser error is kept unmodified.
pub fn load_rooms(path: impl AsRef<Path>) -> StoreResult<Vec<Room>> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!("event=store_load module=store status=start");

    let result = read_and_parse(path);
    match &result {
        Ok(rooms) => info!(
            "event=store_load module=store status=ok duration_ms={} rooms={}",
            started_at.elapsed().as_millis(),
            rooms.len()
        ),
        Err(err) => error!(
            "event=store_load module=store status=error duration_ms={} error_code={} path={}",
            started_at.elapsed().as_millis(),
            err.code(),
            path.display()
        ),
    }
    result
}

fn read_and_parse(path: &Path) -> StoreResult<Vec<Room>> {
    let bytes = std::fs::read(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            StoreError::MissingInput {
                path: path.to_path_buf(),
                source,
            }
        } else {
            StoreError::UnreadableInput {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    serde_json::from_slice(&bytes).map_err(|source| StoreError::MalformedInput {
        path: path.to_path_buf(),
        source,
    })
}
