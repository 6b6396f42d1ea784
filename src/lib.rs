//! linesift - count or show the lines of a directory tree that match include/exclude rules

pub mod criteria;
pub mod error;
pub mod logging;
pub mod output;
pub mod session;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use criteria::{CriteriaSet, Criterion, Matcher, parse_rule};
pub use error::{Error, Result};
pub use output::{
    ConsoleSink, OutputConfig, OutputFormat, Report, ReportLine, ReportSink, TextSink, print_json,
};
pub use session::Session;
pub use tree::{LoaderConfig, Node, NodeBuilder, TreeLoader};
