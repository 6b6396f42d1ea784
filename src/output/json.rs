//! JSON output formatting

use std::io::Write;

use crate::error::Result;

use super::report::Report;

/// Write a report as pretty-printed JSON.
pub fn write_json<W: Write>(report: &Report, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

/// Print a report as pretty-printed JSON to stdout.
pub fn print_json(report: &Report) -> Result<()> {
    let stdout = std::io::stdout();
    write_json(report, &mut stdout.lock())
}
