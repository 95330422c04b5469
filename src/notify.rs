//! Best-effort webhook notification
//!
//! The notifier is advisory: the caller logs a delivery failure to stderr and
//! moves on, so a broken webhook never changes the process exit code. One
//! POST per run, bounded timeout, no retries.

use std::fmt;
use std::time::Duration;

/// Request timeout for webhook delivery
const NOTIFY_TIMEOUT: Duration = Duration::from_secs(10);

/// Delivery status for one notification attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyStatus {
  /// Message was accepted by the endpoint
  Sent,
  /// No endpoint configured; nothing was sent
  Skipped,
}

/// Notification failure; logged at the call site, never propagated
#[derive(Debug)]
pub enum NotifyError {
  /// Endpoint is not an http(s) URL
  InvalidEndpoint { url: String },

  /// Request failed to build or send
  Delivery { url: String, source: reqwest::Error },

  /// Endpoint answered with a non-success status
  Status { url: String, status: reqwest::StatusCode },
}

impl fmt::Display for NotifyError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      NotifyError::InvalidEndpoint { url } => {
        write!(f, "invalid webhook endpoint: {}", url)
      }
      NotifyError::Delivery { url, source } => {
        write!(f, "could not deliver to {}: {}", url, source)
      }
      NotifyError::Status { url, status } => {
        write!(f, "{} answered {}", url, status)
      }
    }
  }
}

impl std::error::Error for NotifyError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      NotifyError::Delivery { source, .. } => Some(source),
      _ => None,
    }
  }
}

/// Webhook notifier for post-sync summaries
pub struct Notifier {
  endpoint: Option<String>,
}

impl Notifier {
  /// Create a notifier; `None` disables delivery entirely
  pub fn new(endpoint: Option<String>) -> Self {
    Self { endpoint }
  }

  /// POST a plain-text summary to the configured endpoint
  ///
  /// No-op when no endpoint is configured.
  pub fn notify(&self, message: &str) -> Result<NotifyStatus, NotifyError> {
    let Some(url) = self.endpoint.as_deref() else {
      return Ok(NotifyStatus::Skipped);
    };

    if !crate::utils::is_http_url(url) {
      return Err(NotifyError::InvalidEndpoint { url: url.to_string() });
    }

    let client = reqwest::blocking::Client::builder()
      .timeout(NOTIFY_TIMEOUT)
      .build()
      .map_err(|source| NotifyError::Delivery {
        url: url.to_string(),
        source,
      })?;

    let response = client
      .post(url)
      .header(reqwest::header::CONTENT_TYPE, "text/plain; charset=utf-8")
      .body(message.to_string())
      .send()
      .map_err(|source| NotifyError::Delivery {
        url: url.to_string(),
        source,
      })?;

    if !response.status().is_success() {
      return Err(NotifyError::Status {
        url: url.to_string(),
        status: response.status(),
      });
    }

    Ok(NotifyStatus::Sent)
  }
}
