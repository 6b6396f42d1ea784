//! Count report: matching-line totals per file and directory

use crate::criteria::CriteriaSet;
use crate::tree::Node;

use super::report::{ReportLine, ReportSink};

/// Matching-line totals laid out in the same shape as the node tree.
struct Tally<'a> {
    node: &'a Node,
    count: usize,
    children: Vec<Tally<'a>>,
}

impl<'a> Tally<'a> {
    /// Totals are computed bottom-up once, so a directory's count is exactly the
    /// sum of its children's counts.
    fn build(node: &'a Node, criteria: &CriteriaSet) -> Self {
        match node {
            Node::File { contents, .. } => Tally {
                node,
                count: criteria.count_matches(contents),
                children: Vec::new(),
            },
            Node::Dir { .. } => {
                let children: Vec<Tally<'a>> = node
                    .children()
                    .into_iter()
                    .map(|child| Tally::build(child, criteria))
                    .collect();
                Tally {
                    node,
                    count: children.iter().map(|c| c.count).sum(),
                    children,
                }
            }
        }
    }

    fn emit<S: ReportSink>(&self, depth: usize, sink: &mut S) -> Result<(), S::Error> {
        sink.emit(ReportLine::Count {
            depth,
            name: self.node.name().to_string(),
            is_dir: self.node.is_dir(),
            count: self.count,
        })?;
        for child in &self.children {
            child.emit(depth + 1, sink)?;
        }
        Ok(())
    }
}

/// Emit `<name>: <count> lines` for every node, each directory before its children.
pub fn write_count<S: ReportSink>(
    root: &Node,
    criteria: &CriteriaSet,
    sink: &mut S,
) -> Result<(), S::Error> {
    Tally::build(root, criteria).emit(0, sink)
}
