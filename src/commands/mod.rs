//! CLI commands for release-status
//!
//! - **update**: regenerate the table inside the README (the default command)
//! - **render**: print the table to stdout without touching the README
//!
//! Both take a [`StatusConfig`] and share [`build_table`].

pub mod render;
pub mod update;

pub use render::run_render;
pub use update::run_update;

use crate::core::config::StatusConfig;
use crate::core::error::StatusResult;
use crate::release::{BinaryGroups, load_current_packages, load_releases};
use crate::render::StatusTable;
use tracing::{info, warn};

/// Load both inputs and build the status table
pub fn build_table(config: &StatusConfig) -> StatusResult<StatusTable> {
  let current = load_current_packages(&config.current_packages)?;
  let records = load_releases(&config.releases)?;

  let groups = BinaryGroups::build(&records)?;
  info!(
    releases = records.len(),
    skipped = groups.skipped(),
    binaries = groups.len(),
    active = current.len(),
    "grouped releases"
  );

  if config.repository.is_none() {
    warn!("GITHUB_REPOSITORY is not set; download links will point at github.com/None");
  }

  Ok(StatusTable::build(&groups, &current, config.repository.as_deref()))
}
