//! Line matchers: plain substring or regular expression

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

pub(crate) const MATCH_ALL_PATTERN: &str = ".*";

static MATCH_ALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MATCH_ALL_PATTERN).expect("MATCH_ALL regex is invalid"));

/// Predicate over a single line of text.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Case-sensitive substring search.
    PlainText(String),
    /// Unanchored regex search; the pattern is compiled once on construction.
    Regex(Regex),
}

impl Matcher {
    pub fn plain_text(text: impl Into<String>) -> Self {
        Matcher::PlainText(text.into())
    }

    pub fn regex(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(Matcher::Regex)
            .map_err(|source| Error::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    /// Regex matching every line.
    pub fn match_all() -> Self {
        Matcher::Regex(MATCH_ALL.clone())
    }

    pub fn matches(&self, line: &str) -> bool {
        match self {
            Matcher::PlainText(text) => line.contains(text.as_str()),
            Matcher::Regex(re) => re.is_match(line),
        }
    }

    /// Rule-grammar letter for this matcher kind (`t` or `r`).
    pub fn kind(&self) -> char {
        match self {
            Matcher::PlainText(_) => 't',
            Matcher::Regex(_) => 'r',
        }
    }

    /// The text or pattern this matcher was built from.
    pub fn source_text(&self) -> &str {
        match self {
            Matcher::PlainText(text) => text,
            Matcher::Regex(re) => re.as_str(),
        }
    }
}
