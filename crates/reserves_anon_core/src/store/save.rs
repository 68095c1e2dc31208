//! Anonymized export writing.

use super::{StoreError, StoreResult};
use crate::model::room::Room;
use log::{error, info};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tempfile::{Builder, NamedTempFile};

/// Writes `rooms` to `path` as 2-space indented JSON plus one newline.
///
/// Content goes to a temporary file next to `path` first and is renamed
/// over the destination only after a full flush. An existing destination
/// keeps its permissions; a new one gets the umask-filtered `0o666` a plain
/// create would give.
///
/// # Errors
/// - `OutputWrite` when the temp file cannot be created, written or
///   persisted.
pub fn save_rooms(path: impl AsRef<Path>, rooms: &[Room]) -> StoreResult<()> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!("event=store_save module=store status=start");

    let result = write_atomically(path, rooms).map_err(|source| StoreError::OutputWrite {
        path: path.to_path_buf(),
        source,
    });
    match &result {
        Ok(()) => info!(
            "event=store_save module=store status=ok duration_ms={} rooms={}",
            started_at.elapsed().as_millis(),
            rooms.len()
        ),
        Err(err) => error!(
            "event=store_save module=store status=error duration_ms={} error_code={} path={}",
            started_at.elapsed().as_millis(),
            err.code(),
            path.display()
        ),
    }
    result
}

fn write_atomically(path: &Path, rooms: &[Room]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = create_temp_file(dir)?;
    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        serde_json::to_writer_pretty(&mut writer, rooms)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }
    temp.as_file().sync_all()?;

    match std::fs::metadata(path) {
        Ok(existing) => temp.as_file().set_permissions(existing.permissions())?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }

    temp.persist(path).map_err(|err| err.error)?;
    Ok(())
}

fn create_temp_file(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".anonymize_reserves");
    // tempfile defaults to 0o600; creation mode is still filtered by umask.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}
