//! Error types for relnotes with contextual messages and exit codes
//!
//! A single unified error type categorizes failures and maps each category to
//! a process exit code. Fatal errors abort the run before any partial write;
//! notification failures live in [`crate::notify`] and never reach this type.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for relnotes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (config file, invalid webhook URL)
  User = 1,
  /// System error (file I/O)
  System = 2,
  /// Validation failure (source changelog has no version entry)
  Validation = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for relnotes
#[derive(Debug)]
pub enum SyncError {
  /// Source changelog could not be read (a missing source is fatal)
  SourceUnreadable { path: PathBuf, source: io::Error },

  /// Source changelog contains no version header line
  ParseFailure { path: PathBuf },

  /// Destination exists but could not be read
  DestinationUnreadable { path: PathBuf, source: io::Error },

  /// Destination could not be written
  DestinationWriteFailure { path: PathBuf, source: io::Error },

  /// Configuration errors
  Config(ConfigError),

  /// Generic error with message
  Message { message: String },
}

impl SyncError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    SyncError::Message { message: msg.into() }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      SyncError::SourceUnreadable { .. } => ExitCode::System,
      SyncError::ParseFailure { .. } => ExitCode::Validation,
      SyncError::DestinationUnreadable { .. } => ExitCode::System,
      SyncError::DestinationWriteFailure { .. } => ExitCode::System,
      SyncError::Config(_) => ExitCode::User,
      SyncError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      SyncError::SourceUnreadable { .. } => Some(
        "Pass --source or set RELNOTES_SOURCE if the changelog lives somewhere other than ./CHANGELOG.md.".to_string(),
      ),
      SyncError::ParseFailure { .. } => Some(
        "Version sections start with a `## [` header line, e.g. `## [1.2.0] - 2025-01-15`.".to_string(),
      ),
      SyncError::Config(e) => e.help_message(),
      _ => None,
    }
  }
}

impl fmt::Display for SyncError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SyncError::SourceUnreadable { path, source } => {
        write!(f, "Failed to read source changelog {}: {}", path.display(), source)
      }
      SyncError::ParseFailure { path } => {
        write!(f, "No version entry found in {}", path.display())
      }
      SyncError::DestinationUnreadable { path, source } => {
        write!(f, "Failed to read destination {}: {}", path.display(), source)
      }
      SyncError::DestinationWriteFailure { path, source } => {
        write!(f, "Failed to write destination {}: {}", path.display(), source)
      }
      SyncError::Config(e) => write!(f, "{}", e),
      SyncError::Message { message } => write!(f, "{}", message),
    }
  }
}

impl std::error::Error for SyncError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      SyncError::SourceUnreadable { source, .. } => Some(source),
      SyncError::DestinationUnreadable { source, .. } => Some(source),
      SyncError::DestinationWriteFailure { source, .. } => Some(source),
      _ => None,
    }
  }
}

impl From<ConfigError> for SyncError {
  fn from(err: ConfigError) -> Self {
    SyncError::Config(err)
  }
}

impl From<String> for SyncError {
  fn from(msg: String) -> Self {
    SyncError::message(msg)
  }
}

impl From<serde_json::Error> for SyncError {
  fn from(err: serde_json::Error) -> Self {
    SyncError::message(format!("JSON error: {}", err))
  }
}

/// Configuration-related errors
#[derive(Debug)]
pub enum ConfigError {
  /// relnotes.toml exists but could not be read
  Unreadable { path: PathBuf, source: io::Error },

  /// relnotes.toml could not be parsed
  Parse { path: PathBuf, message: String },

  /// The configured webhook endpoint is not an http(s) URL
  InvalidWebhook { url: String },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::Parse { .. } => Some(
        "Check the TOML syntax. Recognized keys: source, dest, webhook.".to_string(),
      ),
      ConfigError::InvalidWebhook { .. } => {
        Some("The notification endpoint must be an http:// or https:// URL.".to_string())
      }
      _ => None,
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::Unreadable { path, source } => {
        write!(f, "Failed to read config file {}: {}", path.display(), source)
      }
      ConfigError::Parse { path, message } => {
        write!(f, "Failed to parse {}: {}", path.display(), message)
      }
      ConfigError::InvalidWebhook { url } => {
        write!(f, "Invalid webhook endpoint: {}", url)
      }
    }
  }
}

/// Result type alias for relnotes
pub type SyncResult<T> = Result<T, SyncError>;

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &SyncError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
