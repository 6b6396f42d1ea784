//! Line selection rules
//!
//! A `CriteriaSet` is an ordered list of include/exclude `Criterion` values,
//! each wrapping a `Matcher`. Exclusions always take precedence over inclusions.

mod criterion;
mod matcher;
mod set;

pub use criterion::{Criterion, parse_rule};
pub use matcher::Matcher;
pub use set::CriteriaSet;
