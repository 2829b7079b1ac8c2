//! Tag and title parsing
//!
//! Release tags encode the binary and its version (`gemini-v1.2.3`), and
//! release titles may carry the published package name (`@scope/gemini v1.2.3`).

use once_cell::sync::Lazy;
use regex::Regex;

/// `<binary>-v?<version>`, binary is the shortest prefix that still leaves a
/// version starting with a digit
static TAG_PATTERN: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^(.+?)-v?(\d+(?:\.\d+)*.*)$").expect("tag pattern is valid"));

/// `<package> v<digit>...`, package is the longest such prefix
static TITLE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+) v\d").expect("title pattern is valid"));

/// Binary name and version extracted from a release tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagParts {
  pub binary: String,
  pub version: String,
}

/// Split a release tag into binary and version
///
/// Returns `None` for tags that don't carry a `-<version>` suffix; callers
/// skip those releases.
pub fn parse_tag(tag: &str) -> Option<TagParts> {
  let caps = TAG_PATTERN.captures(tag)?;
  Some(TagParts {
    binary: caps.get(1)?.as_str().to_string(),
    version: caps.get(2)?.as_str().to_string(),
  })
}

/// Extract the package name from a release title
pub fn parse_package_name(title: &str) -> Option<String> {
  TITLE_PATTERN
    .captures(title)
    .and_then(|caps| caps.get(1))
    .map(|m| m.as_str().to_string())
}
