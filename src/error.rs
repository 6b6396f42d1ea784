//! Error types shared across the crate

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid path: {}", path.display())]
    InvalidPath { path: PathBuf },

    #[error("Invalid regex: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid criterion '{rule}': {reason}")]
    MalformedRule { rule: String, reason: &'static str },

    #[error("Could not read file: {}", path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot add child '{child}' to file '{parent}'")]
    UnsupportedOperation { parent: String, child: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn malformed(rule: &str, reason: &'static str) -> Self {
        Self::MalformedRule {
            rule: rule.to_string(),
            reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
