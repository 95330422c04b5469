//! Integration tests for `relnotes extract`

use crate::helpers::{TestWorkspace, run_relnotes, run_relnotes_raw};
use anyhow::Result;

#[test]
fn test_extract_prints_latest_entry() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_file(
    "CHANGELOG.md",
    "# Changelog\n\n## [2.0.0] - 2025-06-01\n\n- new stuff\n\n## [1.0.0]\n\n- old stuff\n",
  )?;

  let output = run_relnotes(&ws, &["extract"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("## [2.0.0] - 2025-06-01"));
  assert!(stdout.contains("new stuff"));
  assert!(!stdout.contains("old stuff"));

  Ok(())
}

#[test]
fn test_extract_json() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_file("CHANGELOG.md", "## [1.2.3] - 2025-06-01\n\n- notes\n")?;

  let output = run_relnotes(&ws, &["extract", "--json"])?;
  let json: serde_json::Value = serde_json::from_str(&String::from_utf8_lossy(&output.stdout))?;

  assert_eq!(json["header"], "## [1.2.3] - 2025-06-01");
  assert_eq!(json["body"], "- notes");
  assert_eq!(json["version"], "1.2.3");

  Ok(())
}

#[test]
fn test_extract_headerless_source_exits_nonzero() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_file("CHANGELOG.md", "# Changelog\n\nNothing yet.\n")?;

  let output = run_relnotes_raw(&ws, &["extract"])?;
  let stderr = String::from_utf8_lossy(&output.stderr);

  assert_eq!(output.status.code(), Some(3));
  assert!(stderr.contains("No version entry"), "stderr: {}", stderr);

  Ok(())
}

#[test]
fn test_extract_respects_source_flag() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_file("HISTORY.md", "## [0.1.0]\n- from history\n")?;

  let output = run_relnotes(&ws, &["extract", "--source", "HISTORY.md"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("from history"));

  Ok(())
}
