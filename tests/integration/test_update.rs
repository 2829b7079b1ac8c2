//! Integration tests for `release-status update`

use crate::helpers::{TestWorkspace, release_status_command, run_release_status, run_release_status_unchecked};
use anyhow::Result;

const START: &str = "<!-- STATUS_TABLE_START -->";
const END: &str = "<!-- STATUS_TABLE_END -->";

fn setup() -> Result<TestWorkspace> {
  let ws = TestWorkspace::new()?;
  ws.write_current_packages(&["gemini"])?;
  ws.write_releases(&[
    ("gemini-v1.2.3", "@scope/gemini v1.2.3", "2024-01-15T00:00:00Z"),
    ("gemini-v1.10.0", "@scope/gemini v1.10.0", "2024-03-01T12:00:00Z"),
    ("other-tool-v0.2.0", "other-tool v0.2.0", "2023-11-20T08:30:00Z"),
    ("nightly", "Nightly build", "2024-04-01T00:00:00Z"),
  ])?;
  Ok(ws)
}

#[test]
fn test_update_without_subcommand_appends_table() -> Result<()> {
  let ws = setup()?;

  let output = run_release_status(&ws.path, &[])?;
  let stdout = String::from_utf8_lossy(&output.stdout);
  assert_eq!(stdout.trim(), "README.md updated successfully!");

  let readme = ws.readme()?;
  assert!(readme.starts_with("# Project\n\nSome intro text.\n\n<!-- STATUS_TABLE_START -->\n"));
  assert!(readme.ends_with(&format!("\n\n{}\n", END)));
  assert_eq!(readme.matches(START).count(), 1);
  assert_eq!(readme.matches(END).count(), 1);

  assert!(readme.contains("## Package Status\n\n| Package | Binary | Version | Date | Status | Download |\n"));
  assert!(readme.contains(
    "| @scope/gemini | `gemini` | 1.10.0 | 2024-03-01 | \
     ![Active](https://img.shields.io/badge/status-active-brightgreen) | \
     [Download](https://github.com/owner/repo/releases/download/gemini-v1.10.0/gemini) |\n"
  ));
  assert!(readme.contains(
    "| other-tool | `other-tool` | 0.2.0 | 2023-11-20 | \
     ![Deprecated](https://img.shields.io/badge/status-deprecated-red) |"
  ));
  assert!(!readme.contains("nightly"));
  assert!(!readme.contains("| 1.2.3 |"));

  Ok(())
}

#[test]
fn test_update_is_idempotent() -> Result<()> {
  let ws = setup()?;

  run_release_status(&ws.path, &["update"])?;
  let first = ws.readme()?;
  run_release_status(&ws.path, &["update"])?;
  let second = ws.readme()?;

  assert_eq!(first, second);
  assert_eq!(second.matches("## Package Status").count(), 1);

  Ok(())
}

#[test]
fn test_update_replaces_existing_region() -> Result<()> {
  let ws = setup()?;
  ws.write_file(
    "README.md",
    &format!(
      "# Project\n\n{}\n## Package Status\n\nstale rows\n{}\n\n## License\n\nMIT\n",
      START, END
    ),
  )?;

  run_release_status(&ws.path, &["update"])?;
  let readme = ws.readme()?;

  assert!(readme.starts_with(&format!("# Project\n\n{}\n## Package Status\n", START)));
  assert!(readme.ends_with(&format!("|\n\n{}\n\n## License\n\nMIT\n", END)));
  assert!(!readme.contains("stale rows"));

  Ok(())
}

#[test]
fn test_update_custom_paths() -> Result<()> {
  let ws = setup()?;
  ws.write_file("docs/status.md", "# Status\n")?;
  std::fs::rename(ws.path.join("releases.json"), ws.path.join("data.json"))?;

  let output = run_release_status(
    &ws.path,
    &["update", "--releases", "data.json", "--readme", "docs/status.md"],
  )?;
  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.contains("docs/status.md updated successfully!"));

  assert!(ws.read_file("docs/status.md")?.contains("`gemini`"));
  assert!(!ws.readme()?.contains(START));

  Ok(())
}

#[test]
fn test_update_repository_flag_overrides_env() -> Result<()> {
  let ws = setup()?;

  run_release_status(&ws.path, &["--repository", "acme/tools", "update"])?;
  let readme = ws.readme()?;

  assert!(readme.contains("https://github.com/acme/tools/releases/download/gemini-v1.10.0/gemini"));
  assert!(!readme.contains("owner/repo"));

  Ok(())
}

#[test]
fn test_update_without_repository_uses_placeholder() -> Result<()> {
  let ws = setup()?;

  let output = release_status_command(&ws.path, &["update"])
    .env_remove("GITHUB_REPOSITORY")
    .output()?;
  assert!(output.status.success());

  let readme = ws.readme()?;
  assert!(readme.contains("https://github.com/None/releases/download/other-tool-v0.2.0/other-tool"));

  Ok(())
}

#[test]
fn test_dry_run_leaves_readme_untouched() -> Result<()> {
  let ws = setup()?;
  let before = ws.readme()?;

  let output = run_release_status(&ws.path, &["update", "--dry-run"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("would append a new status table"));
  assert!(stdout.contains("2 binaries, 1 active"));
  assert_eq!(ws.readme()?, before);

  Ok(())
}

#[test]
fn test_check_fails_when_stale_then_passes() -> Result<()> {
  let ws = setup()?;

  let output = run_release_status_unchecked(&ws.path, &["update", "--check"])?;
  assert_eq!(output.status.code(), Some(3));
  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("README.md is out of date"));

  run_release_status(&ws.path, &["update"])?;

  let output = run_release_status(&ws.path, &["update", "--check"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.contains("up to date"));

  Ok(())
}

#[test]
fn test_check_and_dry_run_conflict() -> Result<()> {
  let ws = setup()?;

  let output = run_release_status_unchecked(&ws.path, &["update", "--check", "--dry-run"])?;
  assert!(!output.status.success());

  Ok(())
}

#[test]
fn test_current_packages_object_form() -> Result<()> {
  let ws = setup()?;
  ws.write_file(
    "current_packages.json",
    r#"{ "other-tool": { "package": "other-tool" } }"#,
  )?;

  run_release_status(&ws.path, &["update"])?;
  let readme = ws.readme()?;

  let gemini_row = readme.lines().find(|l| l.contains("`gemini`")).unwrap();
  let other_row = readme.lines().find(|l| l.contains("`other-tool`")).unwrap();
  assert!(gemini_row.contains("Deprecated"));
  assert!(other_row.contains("Active"));

  Ok(())
}
