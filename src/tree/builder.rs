//! Build-time accumulation of tree nodes

use tracing::trace;

use crate::error::{Error, Result};

use super::node::Node;

/// Mutable counterpart of `Node`, used while a tree is being assembled.
#[derive(Debug)]
pub enum NodeBuilder {
    File {
        name: String,
        contents: Vec<String>,
    },
    Dir {
        name: String,
        children: Vec<Node>,
    },
}

impl NodeBuilder {
    pub fn dir(name: impl Into<String>) -> Self {
        NodeBuilder::Dir {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn file(name: impl Into<String>, contents: Vec<String>) -> Self {
        NodeBuilder::File {
            name: name.into(),
            contents,
        }
    }

    /// Append a child. Only directories accept children.
    pub fn add_child(&mut self, child: Node) -> Result<()> {
        match self {
            NodeBuilder::Dir { name, children } => {
                trace!(child = child.name(), dir = name.as_str(), "adding child");
                children.push(child);
                Ok(())
            }
            NodeBuilder::File { name, .. } => Err(Error::UnsupportedOperation {
                parent: name.clone(),
                child: child.name().to_string(),
            }),
        }
    }

    /// Freeze into an immutable `Node`.
    pub fn build(self) -> Node {
        match self {
            NodeBuilder::File { name, contents } => Node::File { name, contents },
            NodeBuilder::Dir { name, children } => Node::Dir { name, children },
        }
    }
}
