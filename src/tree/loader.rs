//! TreeLoader - reads a directory from disk into a `Node` tree

use std::fs;
use std::path::Path;

use tracing::{debug, error, warn};

use crate::error::{Error, Result};

use super::builder::NodeBuilder;
use super::config::LoaderConfig;
use super::node::Node;
use super::utils::{entry_name, root_name, should_skip_entry};

/// Loads a directory tree, including every file's lines, into memory.
pub struct TreeLoader {
    config: LoaderConfig,
}

impl TreeLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Load the tree rooted at `root`.
    ///
    /// Fails only when `root` does not exist. Hidden or ignored entries below the
    /// root are left out, and files that cannot be read load with no lines.
    pub fn load(&self, root: &Path) -> Result<Node> {
        if !root.exists() {
            error!(path = %root.display(), "path does not exist");
            return Err(Error::InvalidPath {
                path: root.to_path_buf(),
            });
        }

        let name = root_name(root);
        let node = if root.is_dir() {
            self.load_dir(root, name)?
        } else {
            load_file(root, name)
        };
        debug!(path = %root.display(), "directory tree loaded");
        Ok(node)
    }

    fn load_entry(&self, path: &Path) -> Result<Option<Node>> {
        // Skip symlinks to prevent cycles
        if path.is_symlink() {
            debug!(path = %path.display(), "skipping symlink");
            return Ok(None);
        }

        let name = entry_name(path);
        if should_skip_entry(&name, &self.config.ignore_patterns) {
            debug!(path = %path.display(), "skipping hidden or ignored entry");
            return Ok(None);
        }

        if path.is_dir() {
            self.load_dir(path, name).map(Some)
        } else if path.is_file() {
            Ok(Some(load_file(path, name)))
        } else {
            Ok(None)
        }
    }

    fn load_dir(&self, path: &Path, name: String) -> Result<Node> {
        let mut builder = NodeBuilder::dir(name);

        let entries = match fs::read_dir(path) {
            Ok(e) => e,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read directory");
                return Ok(builder.build());
            }
        };

        for entry in entries.filter_map(|e| e.ok()) {
            if let Some(child) = self.load_entry(&entry.path())? {
                builder.add_child(child)?;
            }
        }

        Ok(builder.build())
    }
}

impl Default for TreeLoader {
    fn default() -> Self {
        Self::new(LoaderConfig::default())
    }
}

fn load_file(path: &Path, name: String) -> Node {
    match read_lines(path) {
        Ok(lines) => NodeBuilder::file(name, lines).build(),
        Err(e) => {
            warn!(error = %e, "falling back to empty contents");
            NodeBuilder::file(name, Vec::new()).build()
        }
    }
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| Error::UnreadableFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content.lines().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTree;

    fn names(node: &Node) -> Vec<String> {
        node.children().iter().map(|n| n.name().to_string()).collect()
    }

    #[test]
    fn test_load_nested_tree() {
        let tree = TestTree::new();
        tree.add_file("a.txt", "foo\nbar\nfoo2\n");
        tree.add_file("sub/b.txt", "one\r\ntwo");

        let root = TreeLoader::default().load(tree.path()).unwrap();
        assert!(root.is_dir());
        assert_eq!(names(&root), vec!["a.txt", "sub"]);

        let children = root.children();
        assert_eq!(children[0].contents(), &["foo", "bar", "foo2"]);
        assert_eq!(children[1].children()[0].contents(), &["one", "two"]);
    }

    #[test]
    fn test_hidden_entries_never_loaded() {
        let tree = TestTree::new();
        tree.add_file(".git/config", "[core]");
        tree.add_file("sub/.secret", "token");
        tree.add_file("sub/visible.txt", "hello");

        let root = TreeLoader::default().load(tree.path()).unwrap();
        assert_eq!(names(&root), vec!["sub"]);
        assert_eq!(names(root.children()[0]), vec!["visible.txt"]);
    }

    #[test]
    fn test_ignore_patterns_skip_entries() {
        let tree = TestTree::new();
        tree.add_file("keep.txt", "x");
        tree.add_file("drop.log", "x");
        tree.add_file("target/out.txt", "x");

        let config = LoaderConfig::with_ignore_patterns(vec![
            "*.log".to_string(),
            "target".to_string(),
        ]);
        let root = TreeLoader::new(config).load(tree.path()).unwrap();
        assert_eq!(names(&root), vec!["keep.txt"]);
    }

    #[test]
    fn test_missing_root_is_invalid_path() {
        let tree = TestTree::new();
        let missing = tree.path().join("nope");
        let err = TreeLoader::default().load(&missing).unwrap_err();
        assert!(matches!(err, Error::InvalidPath { .. }));
    }

    #[test]
    fn test_file_root_loads_single_file() {
        let tree = TestTree::new();
        let path = tree.add_file("single.txt", "line");
        let root = TreeLoader::default().load(&path).unwrap();
        assert!(!root.is_dir());
        assert_eq!(root.name(), "single.txt");
        assert_eq!(root.contents(), &["line"]);
    }

    #[test]
    fn test_non_utf8_file_loads_empty() {
        let tree = TestTree::new();
        tree.add_bytes("binary.dat", &[0xff, 0xfe, 0x00, 0x81]);
        let root = TreeLoader::default().load(tree.path()).unwrap();
        let children = root.children();
        assert_eq!(children[0].name(), "binary.dat");
        assert!(children[0].contents().is_empty());
    }

    #[test]
    fn test_empty_directory_is_kept() {
        let tree = TestTree::new();
        tree.add_dir("empty");
        let root = TreeLoader::default().load(tree.path()).unwrap();
        let children = root.children();
        assert!(children[0].is_dir());
        assert!(children[0].children().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_are_skipped() {
        let tree = TestTree::new();
        tree.add_file("real/file.txt", "x");
        std::os::unix::fs::symlink(tree.path().join("real"), tree.path().join("link"))
            .expect("Failed to create symlink");

        let root = TreeLoader::default().load(tree.path()).unwrap();
        assert_eq!(names(&root), vec!["real"]);
    }
}
