//! Changelog segmentation
//!
//! Extracts the newest version entry from a Keep-a-Changelog style document.
//! Version sections are headed by lines beginning with `## [`; the newest
//! entry is the first such section in the document. Everything here is a pure
//! text transform: input is never mutated, identical input yields an
//! identical entry.

use serde::Serialize;

/// Marker prefix for version section header lines, e.g. `## [1.2.0] - 2025-01-15`
pub const VERSION_HEADER_PREFIX: &str = "## [";

/// One version section extracted from a changelog
///
/// Identity is the exact header line; `full` is what gets spliced into the
/// release notes document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionEntry {
  /// The matched header line, e.g. `## [1.2.0] - 2025-01-15`
  pub header: String,
  /// Entry content below the header, stripped of stray header-marker lines
  pub body: String,
  /// Header and body joined with a newline, trimmed
  pub full: String,
}

impl VersionEntry {
  /// An entry with no header; signals that parsing found no version section
  pub fn empty() -> Self {
    Self {
      header: String::new(),
      body: String::new(),
      full: String::new(),
    }
  }

  /// True when parsing found no version header
  pub fn is_empty(&self) -> bool {
    self.header.is_empty()
  }

  /// The version identifier between `[` and `]`, when it parses as semver
  ///
  /// Returns `None` for non-semver markers such as `Unreleased`.
  pub fn version(&self) -> Option<semver::Version> {
    let start = self.header.find('[')? + 1;
    let end = self.header[start..].find(']')? + start;
    let ident = self.header[start..end].trim().trim_start_matches('v');
    semver::Version::parse(ident).ok()
  }
}

/// Check if a line opens a version section
pub fn is_version_header(line: &str) -> bool {
  line.starts_with(VERSION_HEADER_PREFIX)
}

/// Extract the newest (first) version entry from a changelog document
///
/// The entry spans from the first version-header line up to, but excluding,
/// the next one (or end of document). Any other header-marker line inside the
/// span is dropped from the body. Returns an empty entry when the document
/// has no version header; callers treat that as a fatal parse failure.
pub fn latest_entry(content: &str) -> VersionEntry {
  let content = crate::utils::normalize_newlines(content);
  let lines: Vec<&str> = content.lines().collect();

  let Some(start) = lines.iter().position(|l| is_version_header(l)) else {
    return VersionEntry::empty();
  };

  let end = lines[start + 1..]
    .iter()
    .position(|l| is_version_header(l))
    .map(|off| start + 1 + off)
    .unwrap_or(lines.len());

  let header = lines[start].trim_end().to_string();

  let body = lines[start + 1..end]
    .iter()
    .copied()
    .filter(|l| !is_version_header(l))
    .collect::<Vec<_>>()
    .join("\n")
    .trim()
    .to_string();

  let full = if body.is_empty() {
    header.clone()
  } else {
    format!("{}\n{}", header, body)
  };

  VersionEntry { header, body, full }
}
