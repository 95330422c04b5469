//! Extract command implementation
//!
//! Reads the source changelog and prints its newest version entry without
//! touching the release notes. Useful for piping into other release tooling.

use crate::core::changelog;
use crate::core::config::{FileConfig, SyncConfig};
use crate::core::error::{SyncError, SyncResult};
use crate::core::fsio;
use std::env;
use std::path::PathBuf;

/// Run the extract command
pub fn run_extract(source: Option<PathBuf>, json: bool) -> SyncResult<()> {
  let cwd = env::current_dir().map_err(|e| SyncError::message(format!("Failed to get current directory: {}", e)))?;

  let file = FileConfig::load(&cwd)?;
  let config = SyncConfig::resolve(source, None, file)?;

  let content = fsio::read_source(&config.source)?;
  let entry = changelog::latest_entry(&content);

  if entry.is_empty() {
    return Err(SyncError::ParseFailure { path: config.source });
  }

  if json {
    #[derive(serde::Serialize)]
    struct ExtractOutput<'a> {
      header: &'a str,
      body: &'a str,
      full: &'a str,
      version: Option<String>,
    }

    let out = ExtractOutput {
      header: &entry.header,
      body: &entry.body,
      full: &entry.full,
      version: entry.version().map(|v| v.to_string()),
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
  } else {
    println!("{}", entry.full);
  }

  Ok(())
}
