//! UTF-8 file collaborators
//!
//! Thin wrappers around `std::fs` that map failures onto the sync error
//! taxonomy. A missing destination means "no existing content"; a missing
//! source is fatal.

use crate::core::error::{SyncError, SyncResult};
use std::fs;
use std::io;
use std::path::Path;

/// Read the source changelog. Any failure is fatal.
pub fn read_source(path: &Path) -> SyncResult<String> {
  fs::read_to_string(path).map_err(|source| SyncError::SourceUnreadable {
    path: path.to_path_buf(),
    source,
  })
}

/// Read the destination document. `None` when the file does not exist yet.
pub fn read_dest(path: &Path) -> SyncResult<Option<String>> {
  match fs::read_to_string(path) {
    Ok(content) => Ok(Some(content)),
    Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
    Err(source) => Err(SyncError::DestinationUnreadable {
      path: path.to_path_buf(),
      source,
    }),
  }
}

/// Write the merged document in one shot, with a single trailing newline.
pub fn write_dest(path: &Path, content: &str) -> SyncResult<()> {
  fs::write(path, format!("{}\n", content.trim_end())).map_err(|source| SyncError::DestinationWriteFailure {
    path: path.to_path_buf(),
    source,
  })
}
