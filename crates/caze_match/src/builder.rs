//! `MatchBuilder` for accumulating cases in registration order.

use caze_value::{Ty, Value};

use crate::case::{Case, Pattern};
use crate::extract::Extract;
use crate::matcher::Matcher;

/// Accumulates cases for a [`Matcher`].
///
/// Cases are tried in the order they are added. The builder is consumed by
/// each call, so it cannot be shared while it is being filled.
pub struct MatchBuilder<R> {
    cases: Vec<Case<R>>,
}

impl<R: 'static> MatchBuilder<R> {
    pub fn new() -> Self {
        MatchBuilder { cases: Vec::new() }
    }

    /// Add a prebuilt case.
    #[must_use]
    pub fn case(mut self, case: Case<R>) -> Self {
        self.cases.push(case);
        self
    }

    /// Add a value-equality case.
    ///
    /// `Value::Null` as the prototype matches a null input only.
    #[must_use]
    pub fn value<V, F>(self, prototype: V, handler: F) -> Self
    where
        V: Into<Value>,
        F: Fn(&Value) -> R + Send + Sync + 'static,
    {
        self.case(Case::new(Pattern::Value(prototype.into()), handler))
    }

    /// Add a type-based case with an explicit type tag.
    #[must_use]
    pub fn typed<F>(self, ty: impl Into<Ty>, handler: F) -> Self
    where
        F: Fn(&Value) -> R + Send + Sync + 'static,
    {
        self.case(Case::new(Pattern::Typed(ty.into()), handler))
    }

    /// Add a type-based case declared by the handler's parameter type.
    ///
    /// ```text
    /// Matcher::builder()
    ///     .of(|i: i32| i)             // int
    ///     .of(|Boxed(i): Boxed<i32>| i) // Integer
    /// ```
    #[must_use]
    pub fn of<T, F>(self, handler: F) -> Self
    where
        T: Extract,
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        self.case(Case::extracting(handler))
    }

    /// Add a predicate case.
    #[must_use]
    pub fn when<P, F>(self, predicate: P, handler: F) -> Self
    where
        P: Fn(&Value) -> bool + Send + Sync + 'static,
        F: Fn(&Value) -> R + Send + Sync + 'static,
    {
        self.case(Case::new(Pattern::predicate(predicate), handler))
    }

    /// Add a wildcard case matching every input, null included.
    #[must_use]
    pub fn otherwise<F>(self, handler: F) -> Self
    where
        F: Fn(&Value) -> R + Send + Sync + 'static,
    {
        self.case(Case::new(Pattern::Any, handler))
    }
}

impl<R> MatchBuilder<R> {
    /// Number of cases added so far.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Freeze the cases into an immutable matcher.
    ///
    /// Building with no cases is allowed; the matcher then rejects every
    /// input.
    pub fn build(self) -> Matcher<R> {
        tracing::debug!(cases = self.cases.len(), "built matcher");
        Matcher::new(self.cases)
    }
}

impl<R: 'static> Default for MatchBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}
