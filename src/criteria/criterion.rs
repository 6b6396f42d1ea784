//! A single include/exclude rule and its text grammar
//!
//! Rules are written one per line as `<sign> <kind> <text>`:
//!
//! - `sign`: `+` to include matching lines, `-` to exclude them
//! - `kind`: `t` for plain text, `r` for a regular expression
//! - `text`: the rest of the line after the second space

use std::fmt;

use crate::error::{Error, Result};

use super::matcher::Matcher;

#[derive(Debug, Clone)]
pub struct Criterion {
    pub include: bool,
    pub matcher: Matcher,
}

impl Criterion {
    pub fn new(include: bool, matcher: Matcher) -> Self {
        Self { include, matcher }
    }

    pub fn include(matcher: Matcher) -> Self {
        Self::new(true, matcher)
    }

    pub fn exclude(matcher: Matcher) -> Self {
        Self::new(false, matcher)
    }

    pub fn matches(&self, line: &str) -> bool {
        self.matcher.matches(line)
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.include { '+' } else { '-' };
        write!(
            f,
            "{} {} {}",
            sign,
            self.matcher.kind(),
            self.matcher.source_text()
        )
    }
}

/// Parse one rule line.
pub fn parse_rule(rule: &str) -> Result<Criterion> {
    let trimmed = rule.trim();
    let mut parts = trimmed.splitn(3, ' ');

    let (sign, kind, text) = match (parts.next(), parts.next(), parts.next()) {
        (Some(sign), Some(kind), Some(text)) => (sign, kind, text),
        _ => return Err(Error::malformed(rule, "expected <sign> <kind> <text>")),
    };

    let include = match sign {
        "+" => true,
        "-" => false,
        _ => return Err(Error::malformed(rule, "must start with + or -")),
    };

    if kind != "t" && kind != "r" {
        return Err(Error::malformed(rule, "type must be 't' or 'r'"));
    }

    if text.trim().is_empty() {
        return Err(Error::malformed(rule, "text cannot be empty"));
    }

    if text.contains(['\n', '\r']) {
        return Err(Error::malformed(
            rule,
            "text cannot contain newlines or carriage returns",
        ));
    }

    let matcher = if kind == "t" {
        Matcher::plain_text(text)
    } else {
        Matcher::regex(text)?
    };

    Ok(Criterion::new(include, matcher))
}
