//! Utility functions for text normalization and endpoint classification

/// Check if a string is an http(s) URL usable as a webhook endpoint
///
/// Returns true for:
/// - `http://host/path`
/// - `https://host/path`
///
/// Returns false for everything else (ftp://, file paths, bare hostnames).
pub fn is_http_url(url: &str) -> bool {
  url.starts_with("http://") || url.starts_with("https://")
}

/// Normalize CRLF line endings to LF
///
/// Documents are spliced line-wise; carriage returns would otherwise survive
/// into the merged output.
pub fn normalize_newlines(text: &str) -> String {
  text.replace("\r\n", "\n")
}
