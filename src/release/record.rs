//! Release records and the active-package set, as read from JSON

use crate::core::error::{StatusError, StatusResult};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// One entry of `releases.json`
///
/// Shape matches `gh release list --json tagName,name,publishedAt,createdAt`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseRecord {
  pub tag_name: String,
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub published_at: Option<String>,
  #[serde(default)]
  pub created_at: Option<String>,
}

impl ReleaseRecord {
  /// Release title, empty when absent
  pub fn title(&self) -> &str {
    self.name.as_deref().unwrap_or("")
  }

  /// Timestamp the release is dated by: `publishedAt`, falling back to `createdAt`
  ///
  /// Empty strings count as absent.
  pub fn timestamp(&self) -> Option<&str> {
    [self.published_at.as_deref(), self.created_at.as_deref()]
      .into_iter()
      .flatten()
      .find(|s| !s.is_empty())
  }

  /// Parse [`Self::timestamp`]
  pub fn released_at(&self) -> StatusResult<DateTime<FixedOffset>> {
    let raw = self.timestamp().ok_or_else(|| StatusError::Timestamp {
      tag: self.tag_name.clone(),
      value: None,
    })?;

    parse_timestamp(raw).ok_or_else(|| StatusError::Timestamp {
      tag: self.tag_name.clone(),
      value: Some(raw.to_string()),
    })
  }
}

/// Parse an ISO-8601 timestamp, keeping its offset
///
/// `Z` is read as `+00:00`. Naive date-times and bare dates are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
  let normalized = raw.trim().replace('Z', "+00:00");
  let utc = FixedOffset::east_opt(0)?;

  if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
    return Some(dt);
  }

  for format in ["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M%:z"] {
    if let Ok(dt) = DateTime::parse_from_str(&normalized, format) {
      return Some(dt);
    }
  }

  for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
    if let Ok(naive) = NaiveDateTime::parse_from_str(&normalized, format) {
      return utc.from_local_datetime(&naive).single();
    }
  }

  NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
    .ok()
    .and_then(|d| d.and_hms_opt(0, 0, 0))
    .and_then(|naive| utc.from_local_datetime(&naive).single())
}

/// Binaries that are still built and published
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentPackages(BTreeSet<String>);

impl CurrentPackages {
  /// Build from the JSON value of `current_packages.json`
  ///
  /// Objects contribute their keys, arrays their string elements. Any other
  /// shape is rejected.
  pub fn from_json(value: serde_json::Value) -> Result<Self, String> {
    match value {
      serde_json::Value::Object(map) => Ok(Self(map.into_iter().map(|(k, _)| k).collect())),
      serde_json::Value::Array(items) => Ok(Self(
        items
          .into_iter()
          .filter_map(|item| match item {
            serde_json::Value::String(s) => Some(s),
            _ => None,
          })
          .collect(),
      )),
      other => Err(format!("expected an object or an array, found {}", json_kind(&other))),
    }
  }

  pub fn contains(&self, binary: &str) -> bool {
    self.0.contains(binary)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

impl<S: Into<String>> FromIterator<S> for CurrentPackages {
  fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
    Self(iter.into_iter().map(Into::into).collect())
  }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
  match value {
    serde_json::Value::Null => "null",
    serde_json::Value::Bool(_) => "a boolean",
    serde_json::Value::Number(_) => "a number",
    serde_json::Value::String(_) => "a string",
    serde_json::Value::Array(_) => "an array",
    serde_json::Value::Object(_) => "an object",
  }
}

fn read(path: &Path) -> StatusResult<String> {
  fs::read_to_string(path).map_err(|e| StatusError::io(path, e))
}

/// Load `releases.json`
pub fn load_releases(path: &Path) -> StatusResult<Vec<ReleaseRecord>> {
  let content = read(path)?;
  serde_json::from_str(&content).map_err(|e| StatusError::json(path, e))
}

/// Load `current_packages.json`
pub fn load_current_packages(path: &Path) -> StatusResult<CurrentPackages> {
  let content = read(path)?;
  let value: serde_json::Value = serde_json::from_str(&content).map_err(|e| StatusError::json(path, e))?;
  CurrentPackages::from_json(value).map_err(|message| StatusError::Input {
    path: path.to_path_buf(),
    message,
  })
}
