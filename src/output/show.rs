//! Show report: every node, plus the selected lines of each file

use crate::criteria::CriteriaSet;
use crate::tree::Node;

use super::report::{ReportLine, ReportSink};

/// Emit `<name>:` for every node, and under each file its selected lines
/// tagged with their original 1-based line numbers.
pub fn write_show<S: ReportSink>(
    root: &Node,
    criteria: &CriteriaSet,
    sink: &mut S,
) -> Result<(), S::Error> {
    show_node(root, criteria, 0, sink)
}

fn show_node<S: ReportSink>(
    node: &Node,
    criteria: &CriteriaSet,
    depth: usize,
    sink: &mut S,
) -> Result<(), S::Error> {
    sink.emit(ReportLine::Header {
        depth,
        name: node.name().to_string(),
        is_dir: node.is_dir(),
    })?;

    match node {
        Node::Dir { .. } => {
            for child in node.children() {
                show_node(child, criteria, depth + 1, sink)?;
            }
        }
        Node::File { contents, .. } => {
            for (i, line) in contents.iter().enumerate() {
                if criteria.matches(line) {
                    sink.emit(ReportLine::Match {
                        depth: depth + 1,
                        number: i + 1,
                        text: line.clone(),
                    })?;
                }
            }
        }
    }
    Ok(())
}
