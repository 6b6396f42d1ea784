//! Report lines and the sinks that receive them

use std::convert::Infallible;
use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

/// Spaces of indentation per tree depth level.
pub const INDENT_WIDTH: usize = 2;

/// One line of a report, in the order it was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ReportLine {
    /// `<name>: <count> lines`
    Count {
        depth: usize,
        name: String,
        is_dir: bool,
        count: usize,
    },
    /// `<name>:`
    Header {
        depth: usize,
        name: String,
        is_dir: bool,
    },
    /// `<number> <text>`, one selected line of a file.
    Match {
        depth: usize,
        number: usize,
        text: String,
    },
}

impl ReportLine {
    pub fn depth(&self) -> usize {
        match self {
            ReportLine::Count { depth, .. }
            | ReportLine::Header { depth, .. }
            | ReportLine::Match { depth, .. } => *depth,
        }
    }

    pub fn indent(&self) -> String {
        " ".repeat(self.depth() * INDENT_WIDTH)
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = self.indent();
        match self {
            ReportLine::Count { name, count, .. } => write!(f, "{indent}{name}: {count} lines"),
            ReportLine::Header { name, .. } => write!(f, "{indent}{name}:"),
            ReportLine::Match { number, text, .. } => write!(f, "{indent}{number} {text}"),
        }
    }
}

/// Destination for report lines.
pub trait ReportSink {
    type Error;

    fn emit(&mut self, line: ReportLine) -> Result<(), Self::Error>;
}

/// Buffered report, kept in memory for tests and JSON output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    lines: Vec<ReportLine>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    /// The rendered text of every line.
    pub fn text_lines(&self) -> Vec<String> {
        self.lines.iter().map(ToString::to_string).collect()
    }
}

impl ReportSink for Report {
    type Error = Infallible;

    fn emit(&mut self, line: ReportLine) -> Result<(), Infallible> {
        self.lines.push(line);
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Writes each line as plain text to any writer.
pub struct TextSink<W: Write> {
    out: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for TextSink<W> {
    type Error = io::Error;

    fn emit(&mut self, line: ReportLine) -> io::Result<()> {
        writeln!(self.out, "{}", line)
    }
}
