//! Sync command implementation
//!
//! Full control flow: read source → extract newest entry → merge against the
//! destination → single write → best-effort webhook summary.

use crate::core::config::{FileConfig, SyncConfig};
use crate::core::error::{SyncError, SyncResult};
use crate::core::sync::{self, SyncAction, SyncOutcome};
use crate::notify::{Notifier, NotifyStatus};
use std::env;
use std::path::PathBuf;

/// Run the sync command
pub fn run_sync(
  source: Option<PathBuf>,
  notify_url: Option<String>,
  dry_run: bool,
  json: bool,
) -> SyncResult<()> {
  let cwd = env::current_dir().map_err(|e| SyncError::message(format!("Failed to get current directory: {}", e)))?;

  let file = FileConfig::load(&cwd)?;
  let config = SyncConfig::resolve(source, notify_url, file)?;

  let plan = sync::prepare(&config)?;
  let outcome = plan.outcome(&config);

  if plan.action == SyncAction::AlreadyPresent {
    if json {
      println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
      println!(
        "✅ {} already contains {} (nothing to do)",
        config.dest.display(),
        plan.entry.header
      );
    }
    return Ok(());
  }

  if dry_run {
    if json {
      println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
      println!("🔍 Dry-run mode (no changes applied)");
      println!();
      println!("   Would insert: {}", plan.entry.header);
      println!("   Into:         {}", config.dest.display());
    }
    return Ok(());
  }

  sync::apply(&config, &plan)?;

  if json {
    println!("{}", serde_json::to_string_pretty(&outcome)?);
  } else {
    println!("📦 Synced {}", plan.entry.header);
    if plan.dest_existed {
      println!("   Updated {}", config.dest.display());
    } else {
      println!("   Created {}", config.dest.display());
    }
  }

  // Advisory only: a failed webhook never changes the exit code
  let notifier = Notifier::new(config.notify_url.clone());
  match notifier.notify(&summary_message(&outcome)) {
    Ok(NotifyStatus::Sent) => {
      if !json {
        println!("   Notified webhook");
      }
    }
    Ok(NotifyStatus::Skipped) => {}
    Err(e) => eprintln!("⚠️  Notification failed (ignored): {}", e),
  }

  Ok(())
}

/// Plain-text summary for the webhook body
fn summary_message(outcome: &SyncOutcome) -> String {
  format!(
    "[{}] Release notes updated: {} → {}",
    chrono::Utc::now().format("%Y-%m-%d %H:%M UTC"),
    outcome.header,
    outcome.dest
  )
}
