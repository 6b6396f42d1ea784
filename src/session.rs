//! Interactive menu for setting criteria, choosing a format and running reports

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use crate::criteria::CriteriaSet;
use crate::output::{OutputFormat, TextSink};
use crate::tree::Node;

const MENU: &str = "\nMenu:\n1) Set Criteria\n2) Set Output Format\n3) Report\n4) Quit\n";
const FORMAT_MENU: &str = "\nChoose output format:\n1) Count (default)\n2) Show\n";
const CRITERIA_PROMPT: &str = "Enter criteria lines ([+/-] [t/r] [text]), blank line to finish:";

/// Menu-driven session over an already loaded tree.
pub struct Session<'a> {
    root: &'a Node,
    criteria: CriteriaSet,
    format: OutputFormat,
}

impl<'a> Session<'a> {
    /// Start with match-all criteria and the count format.
    pub fn new(root: &'a Node) -> Self {
        Self {
            root,
            criteria: CriteriaSet::match_all(),
            format: OutputFormat::default(),
        }
    }

    pub fn with_criteria(mut self, criteria: CriteriaSet) -> Self {
        self.criteria = criteria;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn criteria(&self) -> &CriteriaSet {
        &self.criteria
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Run the menu loop until the user quits or input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> io::Result<()> {
        loop {
            write!(out, "{MENU}Choice: ")?;
            out.flush()?;

            let Some(choice) = read_line(&mut input)? else {
                writeln!(out, "\nExiting...")?;
                return Ok(());
            };

            match choice.trim() {
                "1" => {
                    self.read_criteria(&mut input, &mut out)?;
                    info!(criteria = %self.criteria, "criteria updated");
                }
                "2" => {
                    self.read_format(&mut input, &mut out)?;
                    info!(format = %self.format, "output format updated");
                }
                "3" => {
                    let mut sink = TextSink::new(&mut out);
                    self.format.generate(self.root, &self.criteria, &mut sink)?;
                }
                "4" => {
                    writeln!(out, "Exiting...")?;
                    return Ok(());
                }
                other => {
                    warn!(choice = other, "invalid menu choice");
                    writeln!(out, "Invalid choice. Try again.")?;
                }
            }
        }
    }

    fn read_criteria<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<()> {
        writeln!(out, "{CRITERIA_PROMPT}")?;
        out.flush()?;

        let mut rules = Vec::new();
        while let Some(line) = read_line(input)? {
            if line.trim().is_empty() {
                break;
            }
            rules.push(line);
        }

        let (criteria, rejects) = CriteriaSet::parse_with_rejects(&rules);
        for reject in &rejects {
            writeln!(out, "Skipped rule: {}", reject)?;
        }
        self.criteria = criteria;
        Ok(())
    }

    fn read_format<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<()> {
        write!(out, "{FORMAT_MENU}Choice: ")?;
        out.flush()?;

        let choice = read_line(input)?.unwrap_or_default();
        if choice.trim() == "2" {
            self.format = OutputFormat::Show;
            writeln!(out, "Output format set to show")?;
        } else {
            self.format = OutputFormat::Count;
            writeln!(out, "Output format set to default (count)")?;
        }
        Ok(())
    }
}

/// Read one line without its terminator; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}
