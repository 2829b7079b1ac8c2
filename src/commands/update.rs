//! `release-status update`: regenerate the table inside the README

use crate::commands::build_table;
use crate::core::config::StatusConfig;
use crate::core::error::{StatusError, StatusResult};
use crate::render::{PatchMode, patch_document};
use std::fs;
use tracing::info;

/// What `update` should do with the patched document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateMode {
  /// Overwrite the README
  #[default]
  Write,
  /// Report what would change, write nothing
  DryRun,
  /// Fail when the README is out of date, write nothing
  Check,
}

/// Run the update command
pub fn run_update(config: &StatusConfig, mode: UpdateMode) -> StatusResult<()> {
  let table = build_table(config)?;
  let markdown = table.to_markdown();

  let readme = &config.readme;
  let document = fs::read_to_string(readme).map_err(|e| StatusError::io(readme, e))?;
  let patched = patch_document(&document, &markdown);

  info!(
    mode = ?patched.mode,
    changed = patched.changed,
    rows = table.rows.len(),
    "patched {}",
    readme.display()
  );

  match mode {
    UpdateMode::Check => {
      if patched.changed {
        return Err(StatusError::Stale { path: readme.clone() });
      }
      println!("✅ {} is up to date", readme.display());
    }
    UpdateMode::DryRun => {
      let action = match patched.mode {
        PatchMode::Replaced => "replace the existing status table",
        PatchMode::Appended => "append a new status table",
      };
      if patched.changed {
        println!("🔍 Dry-run: would {} in {}", action, readme.display());
      } else {
        println!("🔍 Dry-run: {} is already up to date", readme.display());
      }
      println!("   {} binaries, {} active", table.rows.len(), table.active_count());
    }
    UpdateMode::Write => {
      fs::write(readme, &patched.content).map_err(|e| StatusError::io(readme, e))?;
      println!("{} updated successfully!", readme.display());
    }
  }

  Ok(())
}
