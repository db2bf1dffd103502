use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{ErrorKind, SeedError, SeedResult};
use crate::seed_error;

/// Writes the assembled SQL text to `path`, replacing any existing file.
///
/// The text is written UTF-8 encoded to a temporary file in the destination
/// directory and renamed over the destination, so a failure partway through
/// never leaves a partially written file behind.
///
/// Fails with [`ErrorKind::DestinationIoError`] when the destination cannot be
/// written (permissions, missing parent directory, disk full).
pub fn write_sql(path: &Path, sql: &str) -> SeedResult<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // The temp file must live next to the destination so the rename stays on
    // one filesystem.
    let mut file = NamedTempFile::new_in(parent).map_err(|err| {
        seed_error!(
            ErrorKind::DestinationIoError,
            "Could not create a temporary file next to the destination",
            err
        )
    })?;

    file.write_all(sql.as_bytes()).map_err(|err| {
        seed_error!(
            ErrorKind::DestinationIoError,
            "Could not write the statement text",
            err
        )
    })?;

    file.persist(path).map_err(|err| {
        seed_error!(
            ErrorKind::DestinationIoError,
            "Could not move the statement into place",
            err
        )
    })?;

    debug!(bytes = sql.len(), path = %path.display(), "wrote seed SQL");

    Ok(())
}
