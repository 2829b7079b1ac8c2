//! `release-status render`: print the table without touching the README

use crate::commands::build_table;
use crate::core::config::StatusConfig;
use crate::core::error::{ResultExt, StatusResult};
use crate::render::TableFormat;

/// Run the render command
pub fn run_render(config: &StatusConfig, json: bool) -> StatusResult<()> {
  let table = build_table(config)?;

  let format = if json { TableFormat::Json } else { TableFormat::Markdown };
  let output = table.render(format).context("Failed to render status table")?;

  // Markdown already ends in a newline
  match format {
    TableFormat::Markdown => print!("{}", output),
    TableFormat::Json => println!("{}", output),
  }

  Ok(())
}
