//! Colored console sink
//!
//! Renders the same text as the plain sink, with directory names, counts and
//! line numbers highlighted when color is enabled.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use super::config::OutputConfig;
use super::report::{ReportLine, ReportSink};

pub struct ConsoleSink<W: WriteColor> {
    out: W,
}

impl ConsoleSink<StandardStream> {
    /// Sink writing to stdout, colored according to `config`.
    ///
    /// `use_color` is already resolved against the terminal and environment.
    pub fn stdout(config: &OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_name(&mut self, name: &str, is_dir: bool) -> io::Result<()> {
        if is_dir {
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        } else {
            self.out.set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
        }
        write!(self.out, "{}", name)?;
        self.out.reset()
    }

    fn write_highlight(&mut self, value: usize, color: Color) -> io::Result<()> {
        self.out.set_color(ColorSpec::new().set_fg(Some(color)))?;
        write!(self.out, "{}", value)?;
        self.out.reset()
    }
}

impl<W: WriteColor> ReportSink for ConsoleSink<W> {
    type Error = io::Error;

    fn emit(&mut self, line: ReportLine) -> io::Result<()> {
        write!(self.out, "{}", line.indent())?;
        match &line {
            ReportLine::Count {
                name,
                is_dir,
                count,
                ..
            } => {
                self.write_name(name, *is_dir)?;
                write!(self.out, ": ")?;
                self.write_highlight(*count, Color::Yellow)?;
                writeln!(self.out, " lines")
            }
            ReportLine::Header { name, is_dir, .. } => {
                self.write_name(name, *is_dir)?;
                writeln!(self.out, ":")
            }
            ReportLine::Match { number, text, .. } => {
                self.write_highlight(*number, Color::Green)?;
                writeln!(self.out, " {}", text)
            }
        }
    }
}
