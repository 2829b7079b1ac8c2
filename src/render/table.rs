//! Markdown status table
//!
//! One row per binary, built from its latest release:
//!
//! ```text
//! | @scope/gemini | `gemini` | 1.2.3 | 2024-01-15 | ![Active](...) | [Download](...) |
//! ```

use crate::release::{BinaryGroups, CurrentPackages, ParsedRelease};
use serde::Serialize;

/// Section title emitted above the table
pub const TABLE_TITLE: &str = "## Package Status";

const HEADER_ROW: &str = "| Package | Binary | Version | Date | Status | Download |";
const SEPARATOR_ROW: &str = "|---------|--------|---------|------|--------|----------|";

const ACTIVE_BADGE: &str = "![Active](https://img.shields.io/badge/status-active-brightgreen)";
const DEPRECATED_BADGE: &str = "![Deprecated](https://img.shields.io/badge/status-deprecated-red)";

/// Stand-in for the repository when none is configured
const MISSING_REPOSITORY: &str = "None";

/// Whether a binary is still in the active package set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageStatus {
  Active,
  Deprecated,
}

impl PackageStatus {
  pub fn badge(&self) -> &'static str {
    match self {
      Self::Active => ACTIVE_BADGE,
      Self::Deprecated => DEPRECATED_BADGE,
    }
  }

  pub fn is_active(&self) -> bool {
    matches!(self, Self::Active)
  }
}

/// Table output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
  /// Markdown, as embedded in the README
  Markdown,
  /// JSON array of rows for scripting
  Json,
}

/// One table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusRow {
  pub package: String,
  pub binary: String,
  pub version: String,
  pub date: String,
  pub status: PackageStatus,
  pub tag: String,
  pub download_url: String,
}

impl StatusRow {
  /// Build the row for a binary's latest release
  pub fn new(latest: &ParsedRelease, current: &CurrentPackages, repository: Option<&str>) -> Self {
    let status = if current.contains(&latest.binary) {
      PackageStatus::Active
    } else {
      PackageStatus::Deprecated
    };

    Self {
      package: latest.package_name.clone(),
      binary: latest.binary.clone(),
      version: latest.version.clone(),
      date: latest.release_date(),
      status,
      tag: latest.tag.clone(),
      download_url: download_url(repository, &latest.tag, &latest.binary),
    }
  }

  /// Render as a markdown table line (no trailing newline)
  pub fn to_markdown(&self) -> String {
    format!(
      "| {} | `{}` | {} | {} | {} | [Download]({}) |",
      self.package,
      self.binary,
      self.version,
      self.date,
      self.status.badge(),
      self.download_url
    )
  }
}

/// Release asset URL for a binary
///
/// An unset repository yields a URL with `None` in the owner/repo slot rather
/// than an error.
pub fn download_url(repository: Option<&str>, tag: &str, binary: &str) -> String {
  format!(
    "https://github.com/{}/releases/download/{}/{}",
    repository.unwrap_or(MISSING_REPOSITORY),
    tag,
    binary
  )
}

/// The generated status table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusTable {
  pub rows: Vec<StatusRow>,
}

impl StatusTable {
  /// One row per binary, ordered by binary name
  pub fn build(groups: &BinaryGroups, current: &CurrentPackages, repository: Option<&str>) -> Self {
    Self {
      rows: groups
        .latest()
        .map(|latest| StatusRow::new(latest, current, repository))
        .collect(),
    }
  }

  pub fn active_count(&self) -> usize {
    self.rows.iter().filter(|row| row.status.is_active()).count()
  }

  /// Render as markdown; every line, including the last row, ends in `\n`
  pub fn to_markdown(&self) -> String {
    let mut output = String::new();

    output.push_str(TABLE_TITLE);
    output.push_str("\n\n");
    output.push_str(HEADER_ROW);
    output.push('\n');
    output.push_str(SEPARATOR_ROW);
    output.push('\n');

    for row in &self.rows {
      output.push_str(&row.to_markdown());
      output.push('\n');
    }

    output
  }

  /// Render rows as a pretty JSON array
  pub fn to_json(&self) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&self.rows)
  }

  /// Render in the specified format
  pub fn render(&self, format: TableFormat) -> Result<String, serde_json::Error> {
    match format {
      TableFormat::Markdown => Ok(self.to_markdown()),
      TableFormat::Json => self.to_json(),
    }
  }
}
