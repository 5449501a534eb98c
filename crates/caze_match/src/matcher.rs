//! The immutable case chain and its resolution.

use std::fmt;

use caze_value::Value;

use crate::builder::MatchBuilder;
use crate::case::{Case, Pattern};
use crate::errors::MatchError;

/// An immutable, ordered chain of cases.
///
/// Resolution takes `&self` and mutates nothing, so one matcher can be
/// applied to any number of inputs, from any number of threads.
pub struct Matcher<R> {
    cases: Box<[Case<R>]>,
}

impl<R: 'static> Matcher<R> {
    pub fn builder() -> MatchBuilder<R> {
        MatchBuilder::new()
    }
}

impl<R> Matcher<R> {
    pub(crate) fn new(cases: Vec<Case<R>>) -> Self {
        Matcher {
            cases: cases.into_boxed_slice(),
        }
    }

    /// Apply the first case, in registration order, that applies to `value`.
    ///
    /// Later cases never win over an earlier applicable one, however much
    /// more specific their type is.
    #[tracing::instrument(level = "trace", skip_all, fields(cases = self.cases.len()))]
    pub fn apply(&self, value: &Value) -> Result<R, MatchError> {
        for (index, case) in self.cases.iter().enumerate() {
            if let Some(result) = case.try_apply(value) {
                tracing::trace!(index, pattern = %case.pattern(), "case matched");
                return Ok(result);
            }
        }
        tracing::debug!(%value, cases = self.cases.len(), "no case matches");
        Err(MatchError::new(value.clone(), self.cases.len()))
    }

    /// Like [`apply`](Self::apply), discarding the error.
    pub fn try_apply(&self, value: &Value) -> Option<R> {
        self.cases.iter().find_map(|case| case.try_apply(value))
    }

    /// Check whether some case applies to `value`, without running a handler.
    pub fn is_defined_at(&self, value: &Value) -> bool {
        self.cases.iter().any(|case| case.applies(value))
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Patterns in registration order.
    pub fn patterns(&self) -> impl Iterator<Item = &Pattern> + '_ {
        self.cases.iter().map(Case::pattern)
    }
}

impl<R> fmt::Debug for Matcher<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.patterns()).finish()
    }
}
