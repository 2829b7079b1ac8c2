//! Release records, tag parsing and version ordering
//!
//! # Pipeline
//!
//! 1. [`record`]: load `releases.json` and `current_packages.json`
//! 2. [`tag`]: split `gemini-v1.2.3` into binary `gemini` and version `1.2.3`
//! 3. [`group`]: bucket releases per binary, newest version first
//! 4. [`version`]: the ordering heuristic used by the sort
//!
//! Releases whose tag has no version part are dropped at step 3 and never
//! reach the table.

pub mod group;
pub mod record;
pub mod tag;
pub mod version;

pub use group::{BinaryGroups, ParsedRelease};
pub use record::{CurrentPackages, ReleaseRecord, load_current_packages, load_releases};
