//! One sync run: read, segment, splice, write
//!
//! Split into a pure in-memory `prepare` step and a single-write `apply` step
//! so dry runs and JSON plans come for free. No partial writes: the
//! destination is written once, after the full merged document exists in
//! memory. Concurrent runs against the same destination are not coordinated;
//! each invocation rewrites the whole document.

use crate::core::changelog::{self, VersionEntry};
use crate::core::config::SyncConfig;
use crate::core::error::{SyncError, SyncResult};
use crate::core::fsio;
use crate::core::merge::{self, MergeOutcome};
use serde::Serialize;

/// What a sync run decided to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SyncAction {
  /// Entry header already present; destination untouched
  AlreadyPresent,
  /// Entry is spliced into the destination
  Merged,
}

/// In-memory result of the read/segment/splice phase
#[derive(Debug, Clone)]
pub struct SyncPlan {
  /// The newest entry extracted from the source changelog
  pub entry: VersionEntry,
  /// What this run will do
  pub action: SyncAction,
  /// The merged document; `None` for an already-present no-op
  pub merged: Option<String>,
  /// Whether the destination file existed before this run
  pub dest_existed: bool,
}

/// Serializable summary of one planned or completed run
#[derive(Debug, Clone, Serialize)]
pub struct SyncOutcome {
  pub action: SyncAction,
  pub header: String,
  pub version: Option<String>,
  pub source: String,
  pub dest: String,
  pub dest_existed: bool,
}

/// Read both documents and compute the merged result in memory
pub fn prepare(config: &SyncConfig) -> SyncResult<SyncPlan> {
  let source_text = fsio::read_source(&config.source)?;

  let entry = changelog::latest_entry(&source_text);
  if entry.is_empty() {
    return Err(SyncError::ParseFailure {
      path: config.source.clone(),
    });
  }

  let existing = fsio::read_dest(&config.dest)?;
  let dest_existed = existing.is_some();
  // A missing destination degenerates to prepending into an empty document
  let existing = existing.unwrap_or_default();

  let (action, merged) = match merge::merge_entry(&existing, &entry)? {
    MergeOutcome::AlreadyPresent => (SyncAction::AlreadyPresent, None),
    MergeOutcome::Merged(doc) => (SyncAction::Merged, Some(doc)),
  };

  Ok(SyncPlan {
    entry,
    action,
    merged,
    dest_existed,
  })
}

/// Write the merged document (no-op for an already-present plan)
pub fn apply(config: &SyncConfig, plan: &SyncPlan) -> SyncResult<()> {
  if let Some(ref merged) = plan.merged {
    fsio::write_dest(&config.dest, merged)?;
  }
  Ok(())
}

impl SyncPlan {
  /// Summary for reporting and `--json` output
  pub fn outcome(&self, config: &SyncConfig) -> SyncOutcome {
    SyncOutcome {
      action: self.action,
      header: self.entry.header.clone(),
      version: self.entry.version().map(|v| v.to_string()),
      source: config.source.display().to_string(),
      dest: config.dest.display().to_string(),
      dest_existed: self.dest_existed,
    }
  }
}
