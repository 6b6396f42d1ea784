//! Report generation and display
//!
//! Two report formats walk a loaded tree depth-first, children in name order:
//! - Count: matching-line totals per file and directory
//! - Show: the matching lines of every file with their line numbers
//!
//! Reports are emitted line by line into a `ReportSink`:
//! - `Report`: buffered in memory, also used for JSON output
//! - `TextSink`: plain text to any writer
//! - `ConsoleSink`: colored console output

mod config;
mod console;
mod count;
mod format;
mod json;
mod report;
mod show;

pub use config::OutputConfig;
pub use console::ConsoleSink;
pub use count::write_count;
pub use format::OutputFormat;
pub use json::{print_json, write_json};
pub use report::{INDENT_WIDTH, Report, ReportLine, ReportSink, TextSink};
pub use show::write_show;
