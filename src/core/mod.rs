//! Core building blocks shared by every command
//!
//! - **config**: input/output paths and the repository used for download links
//! - **error**: error type with exit codes and help messages

pub mod config;
pub mod error;
