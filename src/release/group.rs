//! Grouping releases by binary and picking the latest per binary

use crate::core::error::StatusResult;
use crate::release::record::ReleaseRecord;
use crate::release::tag::{parse_package_name, parse_tag};
use crate::release::version::VersionKey;
use chrono::{DateTime, FixedOffset};
use std::collections::BTreeMap;
use tracing::debug;

/// A release whose tag carried a binary name and version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRelease {
  pub binary: String,
  pub version: String,
  pub created_at: DateTime<FixedOffset>,
  pub tag: String,
  pub package_name: String,
  pub version_key: VersionKey,
}

impl ParsedRelease {
  /// Parse a release record
  ///
  /// `Ok(None)` for tags without a version; an error only when a versioned
  /// release has no usable timestamp.
  pub fn from_record(record: &ReleaseRecord) -> StatusResult<Option<Self>> {
    let Some(parts) = parse_tag(&record.tag_name) else {
      return Ok(None);
    };

    let created_at = record.released_at()?;
    let package_name = parse_package_name(record.title()).unwrap_or_else(|| parts.binary.clone());
    let version_key = VersionKey::parse(&parts.version);

    Ok(Some(Self {
      binary: parts.binary,
      version: parts.version,
      created_at,
      tag: record.tag_name.clone(),
      package_name,
      version_key,
    }))
  }

  /// Release date as shown in the status table
  pub fn release_date(&self) -> String {
    self.created_at.format("%Y-%m-%d").to_string()
  }
}

/// Releases keyed by binary, each list newest version first
///
/// Iteration is in ascending binary order.
#[derive(Debug, Clone, Default)]
pub struct BinaryGroups {
  groups: BTreeMap<String, Vec<ParsedRelease>>,
  skipped: usize,
}

impl BinaryGroups {
  /// Group release records and sort each group by version, descending
  pub fn build(records: &[ReleaseRecord]) -> StatusResult<Self> {
    let mut groups = Self::default();

    for record in records {
      match ParsedRelease::from_record(record)? {
        Some(release) => groups.push(release),
        None => {
          debug!(tag = %record.tag_name, "skipping release without a versioned tag");
          groups.skipped += 1;
        }
      }
    }

    groups.sort();
    for latest in groups.latest() {
      debug!(binary = %latest.binary, version = %latest.version, key = %latest.version_key, "latest release");
    }

    Ok(groups)
  }

  fn push(&mut self, release: ParsedRelease) {
    self.groups.entry(release.binary.clone()).or_default().push(release);
  }

  /// Stable descending sort; releases with equal keys keep input order
  fn sort(&mut self) {
    for releases in self.groups.values_mut() {
      releases.sort_by(|a, b| b.version_key.cmp(&a.version_key));
    }
  }

  /// Releases of one binary, newest first
  pub fn get(&self, binary: &str) -> Option<&[ParsedRelease]> {
    self.groups.get(binary).map(Vec::as_slice)
  }

  /// Latest release of every binary, in binary order
  pub fn latest(&self) -> impl Iterator<Item = &ParsedRelease> {
    self.groups.values().filter_map(|releases| releases.first())
  }

  pub fn binaries(&self) -> impl Iterator<Item = &str> {
    self.groups.keys().map(String::as_str)
  }

  /// Number of binaries
  pub fn len(&self) -> usize {
    self.groups.len()
  }

  pub fn is_empty(&self) -> bool {
    self.groups.is_empty()
  }

  /// Records dropped because their tag had no version
  pub fn skipped(&self) -> usize {
    self.skipped
  }
}
