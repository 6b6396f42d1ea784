//! Report format selection

use std::fmt;

use tracing::info;

use crate::criteria::CriteriaSet;
use crate::tree::Node;

use super::count::write_count;
use super::report::{Report, ReportSink};
use super::show::write_show;

/// Which report to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Matching-line totals per node
    #[default]
    Count,
    /// Matching lines with their line numbers
    Show,
}

impl OutputFormat {
    /// Traverse `root` and emit the report lines into `sink`.
    pub fn generate<S: ReportSink>(
        self,
        root: &Node,
        criteria: &CriteriaSet,
        sink: &mut S,
    ) -> Result<(), S::Error> {
        info!(format = %self, root = root.name(), "generating report");
        match self {
            OutputFormat::Count => write_count(root, criteria, sink),
            OutputFormat::Show => write_show(root, criteria, sink),
        }
    }

    /// Generate into an in-memory `Report`.
    pub fn report(self, root: &Node, criteria: &CriteriaSet) -> Report {
        let mut report = Report::new();
        let Ok(()) = self.generate(root, criteria, &mut report);
        report
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Count => write!(f, "count"),
            OutputFormat::Show => write!(f, "show"),
        }
    }
}
