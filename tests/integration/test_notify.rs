//! Integration tests for the post-sync webhook notification

use crate::helpers::{TestWorkspace, WebhookSink, run_relnotes};
use anyhow::Result;

const CHANGELOG: &str = "# Changelog\n\n## [1.2.0] - 2025-06-01\n\n- a change\n";

#[test]
fn test_sync_posts_summary_to_webhook() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_file("CHANGELOG.md", CHANGELOG)?;

  let sink = WebhookSink::start()?;
  let url = sink.url.clone();

  let output = run_relnotes(&ws, &["sync", "--notify-url", &url])?;
  let stdout = String::from_utf8_lossy(&output.stdout);
  let request = sink.recv()?;

  assert!(stdout.contains("Notified webhook"), "stdout: {}", stdout);
  assert!(request.starts_with("POST / HTTP/1.1"), "request: {}", request);
  assert!(request.to_ascii_lowercase().contains("content-type: text/plain"));
  assert!(request.contains("Release notes updated"));
  assert!(request.contains("## [1.2.0] - 2025-06-01"));

  Ok(())
}

#[test]
fn test_notification_failure_is_nonfatal() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_file("CHANGELOG.md", CHANGELOG)?;

  // Nothing listens on the discard port; delivery fails fast.
  let output = run_relnotes(&ws, &["sync", "--notify-url", "http://127.0.0.1:9/hook"])?;
  let stderr = String::from_utf8_lossy(&output.stderr);

  assert!(output.status.success(), "a dead webhook must not fail the sync");
  assert!(stderr.contains("Notification failed"), "stderr: {}", stderr);
  assert!(ws.file_exists("release-notes.md"));

  Ok(())
}

#[test]
fn test_no_webhook_sends_nothing_and_succeeds() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_file("CHANGELOG.md", CHANGELOG)?;

  let output = run_relnotes(&ws, &["sync"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(!stdout.contains("Notified webhook"));
  assert!(ws.file_exists("release-notes.md"));

  Ok(())
}

#[test]
fn test_already_present_run_does_not_notify() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_file("CHANGELOG.md", CHANGELOG)?;

  run_relnotes(&ws, &["sync"])?;

  // Second run is a no-op: the sink must stay silent, so point the webhook at
  // a dead port and rely on the absence of the failure warning.
  let output = run_relnotes(&ws, &["sync", "--notify-url", "http://127.0.0.1:9/hook"])?;
  let stderr = String::from_utf8_lossy(&output.stderr);

  assert!(output.status.success());
  assert!(
    !stderr.contains("Notification failed"),
    "no-op run must not attempt delivery: {}",
    stderr
  );

  Ok(())
}
