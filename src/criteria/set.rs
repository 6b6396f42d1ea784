//! Ordered rule list with exclusion precedence

use std::fmt;

use tracing::{debug, warn};

use crate::error::Error;

use super::criterion::{Criterion, parse_rule};
use super::matcher::Matcher;

/// The rules deciding whether a line is selected. Never empty.
#[derive(Debug, Clone)]
pub struct CriteriaSet {
    criteria: Vec<Criterion>,
}

impl CriteriaSet {
    /// A set holding only the inclusive match-all rule.
    pub fn match_all() -> Self {
        Self {
            criteria: vec![Criterion::include(Matcher::match_all())],
        }
    }

    /// Build from already-constructed criteria, falling back to match-all when empty.
    pub fn from_criteria(criteria: Vec<Criterion>) -> Self {
        if criteria.is_empty() {
            debug!("no criteria given, using match-all");
            return Self::match_all();
        }
        Self { criteria }
    }

    /// Parse rule lines, dropping (and logging) the malformed ones.
    pub fn parse<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::parse_with_rejects(rules).0
    }

    /// Parse rule lines, returning the set and the error for every rule that was dropped.
    ///
    /// Blank lines are ignored rather than rejected.
    pub fn parse_with_rejects<I, S>(rules: I) -> (Self, Vec<Error>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut criteria = Vec::new();
        let mut rejects = Vec::new();

        for rule in rules {
            let rule = rule.as_ref();
            if rule.trim().is_empty() {
                continue;
            }
            match parse_rule(rule) {
                Ok(criterion) => criteria.push(criterion),
                Err(e) => {
                    warn!(error = %e, "dropping criterion");
                    rejects.push(e);
                }
            }
        }

        (Self::from_criteria(criteria), rejects)
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// Never true: an empty rule list falls back to match-all.
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Whether a line is selected.
    ///
    /// Any matching exclusion rejects the line outright, whatever the rule order.
    /// Otherwise the line is selected if at least one inclusion matches.
    pub fn matches(&self, line: &str) -> bool {
        if self
            .criteria
            .iter()
            .any(|c| !c.include && c.matches(line))
        {
            return false;
        }
        self.criteria.iter().any(|c| c.include && c.matches(line))
    }

    /// Number of selected lines.
    pub fn count_matches(&self, lines: &[String]) -> usize {
        lines.iter().filter(|line| self.matches(line)).count()
    }
}

impl Default for CriteriaSet {
    fn default() -> Self {
        Self::match_all()
    }
}

impl fmt::Display for CriteriaSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, criterion) in self.criteria.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", criterion)?;
        }
        Ok(())
    }
}
