//! Configuration resolution for relnotes
//!
//! All process-wide settings travel in an explicit [`SyncConfig`] so the core
//! functions stay testable without environment mutation. Precedence: CLI
//! flags and environment (resolved by clap before they reach this module)
//! over an optional `relnotes.toml` in the working directory over built-in
//! defaults.

use crate::core::error::{ConfigError, SyncResult};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Config file name searched in the working directory
pub const CONFIG_FILE: &str = "relnotes.toml";

/// Default source changelog path
pub const DEFAULT_SOURCE: &str = "./CHANGELOG.md";

/// Default destination document path
pub const DEFAULT_DEST: &str = "./release-notes.md";

/// Optional file-level configuration (`relnotes.toml`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
  /// Source changelog path
  #[serde(default)]
  pub source: Option<PathBuf>,

  /// Destination document path
  #[serde(default)]
  pub dest: Option<PathBuf>,

  /// Webhook endpoint for the post-sync notification
  #[serde(default)]
  pub webhook: Option<String>,
}

impl FileConfig {
  /// Load `relnotes.toml` from `dir`; defaults when the file is absent
  pub fn load(dir: &Path) -> SyncResult<Self> {
    let path = dir.join(CONFIG_FILE);

    let content = match fs::read_to_string(&path) {
      Ok(c) => c,
      Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
      Err(source) => return Err(ConfigError::Unreadable { path, source }.into()),
    };

    toml_edit::de::from_str(&content).map_err(|e| {
      ConfigError::Parse {
        path,
        message: e.to_string(),
      }
      .into()
    })
  }
}

/// Fully resolved configuration for one sync run
#[derive(Debug, Clone)]
pub struct SyncConfig {
  /// Source changelog path
  pub source: PathBuf,
  /// Destination document path
  pub dest: PathBuf,
  /// Optional webhook endpoint for the post-sync summary
  pub notify_url: Option<String>,
}

impl SyncConfig {
  /// Resolve configuration: CLI/env values win over relnotes.toml over defaults
  ///
  /// The destination is deliberately not a command-line flag; it stays at
  /// `./release-notes.md` unless the config file relocates it.
  pub fn resolve(
    cli_source: Option<PathBuf>,
    cli_notify_url: Option<String>,
    file: FileConfig,
  ) -> SyncResult<Self> {
    let config = Self {
      source: cli_source
        .or(file.source)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE)),
      dest: file.dest.unwrap_or_else(|| PathBuf::from(DEFAULT_DEST)),
      notify_url: cli_notify_url.or(file.webhook),
    };

    config.validate()?;
    Ok(config)
  }

  fn validate(&self) -> SyncResult<()> {
    if let Some(ref url) = self.notify_url
      && !crate::utils::is_http_url(url)
    {
      return Err(ConfigError::InvalidWebhook { url: url.clone() }.into());
    }
    Ok(())
  }
}
