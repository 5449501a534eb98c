//! Error returned when no case applies.

use std::fmt;

use caze_value::Value;

/// No registered case applies to the input.
///
/// Carries the rejected value so callers can report or recover it.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchError {
    value: Value,
    cases: usize,
}

impl MatchError {
    /// Create the error for `value` after `cases` cases were tried.
    #[cold]
    pub fn new(value: Value, cases: usize) -> Self {
        MatchError { value, cases }
    }

    /// The unmatched input.
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// Number of cases the matcher tried.
    pub fn cases(&self) -> usize {
        self.cases
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no case matches {}", self.value)?;
        if self.cases == 0 {
            write!(f, " (matcher has no cases)")?;
        }
        Ok(())
    }
}

impl std::error::Error for MatchError {}
