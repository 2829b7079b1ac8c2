//! Regenerate the package status table embedded in a README
//!
//! Reads `releases.json` (release records) and `current_packages.json`
//! (active binaries), picks the latest version of every binary and writes a
//! markdown table between `<!-- STATUS_TABLE_START -->` and
//! `<!-- STATUS_TABLE_END -->`.

pub mod commands;
pub mod core;
pub mod release;
pub mod render;
