//! Version ordering heuristic
//!
//! Versions are not required to be semver. A version string is cut into runs
//! of ASCII digits and the text between them; digit runs compare numerically,
//! text compares lexically, and a number always sorts before text at the same
//! position. Lone `.` and `-` separators are dropped.
//!
//! ```text
//! "2.10.0"     -> [2, 10, 0]
//! "1.0.0-rc.1" -> [1, 0, 0, "-rc.", 1]
//! ```

use std::cmp::Ordering;
use std::fmt;

/// An unbounded non-negative integer kept as its decimal digits
///
/// Leading zeros are stripped so `007` and `7` are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number(String);

impl Number {
  fn from_digits(digits: &str) -> Self {
    let trimmed = digits.trim_start_matches('0');
    Number(if trimmed.is_empty() { "0" } else { trimmed }.to_string())
  }
}

impl Ord for Number {
  fn cmp(&self, other: &Self) -> Ordering {
    self.0.len().cmp(&other.0.len()).then_with(|| self.0.cmp(&other.0))
  }
}

impl PartialOrd for Number {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

/// One piece of a version key
///
/// Variant order matters: the derived `Ord` puts every `Number` before every `Text`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Segment {
  Number(Number),
  Text(String),
}

impl fmt::Display for Segment {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Segment::Number(n) => write!(f, "{}", n.0),
      Segment::Text(s) => write!(f, "{:?}", s),
    }
  }
}

/// Sort key for a version string, compared lexicographically by segment
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct VersionKey(Vec<Segment>);

impl VersionKey {
  /// Build the key for a version string
  pub fn parse(version: &str) -> Self {
    let mut segments = Vec::new();
    let mut rest = version;

    while let Some(first) = rest.chars().next() {
      let is_digit = first.is_ascii_digit();
      let end = rest
        .find(|c: char| c.is_ascii_digit() != is_digit)
        .unwrap_or(rest.len());
      let (piece, tail) = rest.split_at(end);

      if is_digit {
        segments.push(Segment::Number(Number::from_digits(piece)));
      } else if piece != "." && piece != "-" {
        segments.push(Segment::Text(piece.to_string()));
      }

      rest = tail;
    }

    VersionKey(segments)
  }

  pub fn segments(&self) -> &[Segment] {
    &self.0
  }
}

impl fmt::Display for VersionKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[")?;
    for (i, segment) in self.0.iter().enumerate() {
      if i > 0 {
        write!(f, ", ")?;
      }
      write!(f, "{}", segment)?;
    }
    write!(f, "]")
  }
}
