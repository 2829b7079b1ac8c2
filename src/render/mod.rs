//! Rendering the status table and writing it into the README
//!
//! - **table**: rows from the latest release per binary, as markdown or JSON
//! - **patch**: marker-delimited replace-or-append of the table in a document

pub mod patch;
pub mod table;

pub use patch::{MARKER_END, MARKER_START, PatchMode, PatchedDocument, patch_document};
pub use table::{PackageStatus, StatusRow, StatusTable, TableFormat};
