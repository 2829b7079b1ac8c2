//! Integration tests for `release-status render`

use crate::helpers::{TestWorkspace, run_release_status};
use anyhow::Result;

#[test]
fn test_render_markdown_to_stdout() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_current_packages(&["gemini"])?;
  ws.write_releases(&[
    ("gemini-v2.1.0", "gemini v2.1.0", "2024-01-01T00:00:00Z"),
    ("gemini-v2.10.0", "gemini v2.10.0", "2024-01-02T00:00:00Z"),
    ("gemini-v2.2.0", "gemini v2.2.0", "2024-01-03T00:00:00Z"),
  ])?;
  let before = ws.readme()?;

  let output = run_release_status(&ws.path, &["render"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);
  let lines: Vec<_> = stdout.lines().collect();

  assert_eq!(lines[0], "## Package Status");
  assert_eq!(lines.len(), 5);
  assert!(lines[4].starts_with("| gemini | `gemini` | 2.10.0 | 2024-01-02 |"));
  assert_eq!(ws.readme()?, before);

  Ok(())
}

#[test]
fn test_render_json() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_current_packages(&["gemini"])?;
  ws.write_releases(&[
    ("gemini-v1.2.3", "@scope/gemini v1.2.3", "2024-01-15T00:00:00Z"),
    ("other-tool-v0.1.0", "", "2024-02-01T00:00:00Z"),
  ])?;

  let output = run_release_status(&ws.path, &["render", "--json"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);
  let json: serde_json::Value = serde_json::from_str(&stdout).expect("Should be valid JSON");

  let rows = json.as_array().expect("Output should be a JSON array");
  assert_eq!(rows.len(), 2);
  assert_eq!(rows[0]["package"], "@scope/gemini");
  assert_eq!(rows[0]["binary"], "gemini");
  assert_eq!(rows[0]["version"], "1.2.3");
  assert_eq!(rows[0]["date"], "2024-01-15");
  assert_eq!(rows[0]["status"], "active");
  assert_eq!(rows[1]["package"], "other-tool");
  assert_eq!(rows[1]["status"], "deprecated");

  Ok(())
}

#[test]
fn test_render_verbose_logs_to_stderr() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_current_packages(&[])?;
  ws.write_releases(&[
    ("gemini-v1.0.0", "", "2024-01-15T00:00:00Z"),
    ("nightly", "", "2024-01-15T00:00:00Z"),
  ])?;

  let output = run_release_status(&ws.path, &["render", "--json", "--verbose"])?;
  let stderr = String::from_utf8_lossy(&output.stderr);
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stderr.contains("skipping release without a versioned tag"));
  assert!(serde_json::from_str::<serde_json::Value>(&stdout).is_ok());

  Ok(())
}
