//! Output formatting for CLI results

pub mod formatters;
pub mod json;
pub mod table;

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

/// Print a listing in the requested format.
pub fn print_listing<D: Tabled + Serialize>(
    items: &[D],
    format: OutputFormat,
    compact: bool,
) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", table::format_table(items, compact)),
        OutputFormat::Json => println!("{}", json::format_json(items)?),
    }
    Ok(())
}
