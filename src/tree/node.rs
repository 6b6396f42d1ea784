//! Immutable file/directory tree

/// A loaded tree entry. Built once through `NodeBuilder` and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    File {
        name: String,
        contents: Vec<String>,
    },
    Dir {
        name: String,
        children: Vec<Node>,
    },
}

impl Node {
    pub fn file(name: impl Into<String>, contents: Vec<String>) -> Self {
        Node::File {
            name: name.into(),
            contents,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::File { name, .. } => name,
            Node::Dir { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Dir { .. })
    }

    /// Children sorted by name, independent of the order they were added in.
    ///
    /// The returned vector is a fresh snapshot; files always yield an empty one.
    /// Siblings sharing a name keep their insertion order.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::File { .. } => Vec::new(),
            Node::Dir { children, .. } => {
                let mut sorted: Vec<&Node> = children.iter().collect();
                sorted.sort_by(|a, b| a.name().cmp(b.name()));
                sorted
            }
        }
    }

    /// Lines of a file; empty for directories.
    pub fn contents(&self) -> &[String] {
        match self {
            Node::File { contents, .. } => contents,
            Node::Dir { .. } => &[],
        }
    }
}
