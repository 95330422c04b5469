//! Idempotent release-notes splicing
//!
//! Pure line-sequence transforms over the destination document: collapse
//! repeated version headers, preserve front matter, and insert the new entry
//! after the Overview section (or prepend when there is none). The input is
//! never mutated; callers receive a new document.

use crate::core::changelog::{VersionEntry, is_version_header};
use crate::core::error::{SyncError, SyncResult};
use std::collections::HashSet;

/// Marker prefix for the introductory section of the release notes
pub const OVERVIEW_PREFIX: &str = "## Overview";

/// Delimiter line for a front-matter block
const FRONT_MATTER_DELIMITER: &str = "---";

/// Result of a merge attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
  /// The destination already carries the entry's header; nothing to do
  AlreadyPresent,
  /// The updated document, trimmed of leading/trailing whitespace
  Merged(String),
}

/// Merge a version entry into the existing release notes document
///
/// Running twice with the same entry never duplicates: when the header is
/// already present verbatim the destination is left untouched. A missing
/// destination is passed in as the empty string, which degenerates to
/// "prepend entry to empty document".
pub fn merge_entry(existing: &str, entry: &VersionEntry) -> SyncResult<MergeOutcome> {
  if entry.header.is_empty() {
    return Err(SyncError::message("Cannot merge a version entry with an empty header"));
  }

  let existing = crate::utils::normalize_newlines(existing);

  if existing.contains(&entry.header) {
    return Ok(MergeOutcome::AlreadyPresent);
  }

  let lines: Vec<&str> = existing.lines().collect();
  let lines = dedup_version_headers(&lines);
  let (front_matter, body) = split_front_matter(&lines);

  let entry_lines: Vec<&str> = entry.full.lines().collect();

  let spliced = match body.iter().position(|l| l.starts_with(OVERVIEW_PREFIX)) {
    Some(overview_idx) => {
      match body[overview_idx + 1..].iter().position(|l| is_version_header(l)) {
        // Insert right before the first version section following the
        // Overview: one blank line before the entry, two after.
        Some(off) => {
          let insert_at = overview_idx + 1 + off;
          let mut out = trim_trailing_blank(&body[..insert_at]).to_vec();
          out.push("");
          out.extend_from_slice(&entry_lines);
          out.push("");
          out.push("");
          out.extend_from_slice(trim_leading_blank(&body[insert_at..]));
          out
        }
        // No version section after the Overview: append at the end of its
        // trailing content block.
        None => {
          let mut out = trim_trailing_blank(body).to_vec();
          out.push("");
          out.extend_from_slice(&entry_lines);
          out
        }
      }
    }
    // No Overview: the entry goes first.
    None => {
      let mut out = entry_lines;
      let rest = trim_leading_blank(body);
      if !rest.is_empty() {
        out.push("");
        out.extend_from_slice(rest);
      }
      out
    }
  };

  let mut merged: Vec<&str> = Vec::new();
  if !front_matter.is_empty() {
    merged.extend_from_slice(front_matter);
    merged.push("");
  }
  merged.extend_from_slice(trim_leading_blank(&spliced));

  Ok(MergeOutcome::Merged(merged.join("\n").trim().to_string()))
}

/// Drop repeated occurrences of identical version-header lines, keeping the
/// first. Body lines under a dropped duplicate attach to the section above.
fn dedup_version_headers<'a>(lines: &[&'a str]) -> Vec<&'a str> {
  let mut seen: HashSet<&str> = HashSet::new();
  lines
    .iter()
    .copied()
    .filter(|l| !is_version_header(l) || seen.insert(*l))
    .collect()
}

/// Split off a leading `---`-delimited front-matter block
///
/// Returns (front matter including both delimiter lines, remainder). The
/// front matter is empty when the document does not open with a delimiter
/// line or the block is unterminated.
fn split_front_matter<'a>(lines: &'a [&'a str]) -> (&'a [&'a str], &'a [&'a str]) {
  if !lines.first().is_some_and(|l| l.trim() == FRONT_MATTER_DELIMITER) {
    return (&[], lines);
  }

  match lines[1..].iter().position(|l| l.trim() == FRONT_MATTER_DELIMITER) {
    Some(off) => {
      let end = 1 + off + 1;
      (&lines[..end], &lines[end..])
    }
    None => (&[], lines),
  }
}

fn trim_leading_blank<'a, 'b>(lines: &'a [&'b str]) -> &'a [&'b str] {
  let mut start = 0;
  while start < lines.len() && lines[start].trim().is_empty() {
    start += 1;
  }
  &lines[start..]
}

fn trim_trailing_blank<'a, 'b>(lines: &'a [&'b str]) -> &'a [&'b str] {
  let mut end = lines.len();
  while end > 0 && lines[end - 1].trim().is_empty() {
    end -= 1;
  }
  &lines[..end]
}
