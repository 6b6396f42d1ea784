//! Configuration types for the tree loader

/// Configuration for loading a directory tree.
#[derive(Debug, Clone, Default)]
pub struct LoaderConfig {
    /// Glob patterns matched against entry names; matching entries are left out of the tree.
    /// Hidden entries (names starting with `.`) are always left out.
    pub ignore_patterns: Vec<String>,
}

impl LoaderConfig {
    pub fn with_ignore_patterns(patterns: Vec<String>) -> Self {
        Self {
            ignore_patterns: patterns,
        }
    }
}
