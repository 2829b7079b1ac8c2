//! Splicing the status table into a document between sentinel markers

/// Opens the generated region
pub const MARKER_START: &str = "<!-- STATUS_TABLE_START -->";

/// Closes the generated region
pub const MARKER_END: &str = "<!-- STATUS_TABLE_END -->";

/// How the table was placed into the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchMode {
  /// Both markers were present; the region between them was rewritten
  Replaced,
  /// Markers were missing; a new region was added at the end
  Appended,
}

/// Result of patching a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchedDocument {
  pub content: String,
  pub mode: PatchMode,
  /// Whether `content` differs from the input document
  pub changed: bool,
}

/// Put `table` between the markers of `document`
///
/// Only the first occurrence of each marker counts. Everything from the
/// start marker through the end marker is replaced; text around it is kept
/// as-is. Without both markers, the document is right-trimmed and a new
/// marker pair holding the table is appended.
pub fn patch_document(document: &str, table: &str) -> PatchedDocument {
  let (content, mode) = match (document.find(MARKER_START), document.find(MARKER_END)) {
    (Some(start), Some(end)) => {
      let after_end = end + MARKER_END.len();
      let content = format!(
        "{}{}\n{}\n{}{}",
        &document[..start],
        MARKER_START,
        table,
        MARKER_END,
        &document[after_end..]
      );
      (content, PatchMode::Replaced)
    }
    _ => {
      let content = format!(
        "{}\n\n{}\n{}\n{}\n",
        document.trim_end(),
        MARKER_START,
        table,
        MARKER_END
      );
      (content, PatchMode::Appended)
    }
  };

  let changed = content != document;
  PatchedDocument { content, mode, changed }
}
