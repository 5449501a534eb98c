//! Cases: a pattern deciding applicability, bound to a handler.

use std::fmt;

use caze_value::{Ty, Value};

use crate::extract::Extract;

/// Arbitrary applicability test.
pub type PredicateFn = dyn Fn(&Value) -> bool + Send + Sync;

type HandlerFn<R> = dyn Fn(&Value) -> Option<R> + Send + Sync;

/// Applicability of a case.
pub enum Pattern {
    /// Applies when the input equals the prototype.
    ///
    /// A `Value::Null` prototype applies to a null input and nothing else.
    Value(Value),
    /// Applies when the input's runtime type is assignable to the tag.
    Typed(Ty),
    /// Applies when the predicate holds.
    Predicate(Box<PredicateFn>),
    /// Applies to every input, null included.
    Any,
}

impl Pattern {
    pub fn predicate<P>(predicate: P) -> Self
    where
        P: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Pattern::Predicate(Box::new(predicate))
    }

    /// Check whether this pattern applies to `value`.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Pattern::Value(prototype) => prototype == value,
            Pattern::Typed(ty) => ty.accepts(value),
            Pattern::Predicate(predicate) => predicate(value),
            Pattern::Any => true,
        }
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Value(prototype) => write!(f, "Value({prototype:?})"),
            Pattern::Typed(ty) => write!(f, "Typed({ty})"),
            Pattern::Predicate(_) => write!(f, "Predicate"),
            Pattern::Any => write!(f, "Any"),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Value(prototype) => write!(f, "{prototype}"),
            Pattern::Typed(ty) => write!(f, "{ty} _"),
            Pattern::Predicate(_) => write!(f, "<predicate>"),
            Pattern::Any => write!(f, "_"),
        }
    }
}

/// One registered matching rule.
pub struct Case<R> {
    pattern: Pattern,
    /// Extra applicability check for extracting cases.
    converts: Option<fn(&Value) -> bool>,
    handler: Box<HandlerFn<R>>,
}

impl<R: 'static> Case<R> {
    /// Bind `handler` to `pattern`. The handler receives the input as is.
    pub fn new<F>(pattern: Pattern, handler: F) -> Self
    where
        F: Fn(&Value) -> R + Send + Sync + 'static,
    {
        Case {
            pattern,
            converts: None,
            handler: Box::new(move |value: &Value| Some(handler(value))),
        }
    }

    /// Typed case whose handler receives the input converted to `T`.
    ///
    /// The builtin [`Extract`] impls convert every value their type tag
    /// accepts. For an impl that declines one, the case is not applicable
    /// to that value, in [`Case::applies`] and [`Case::try_apply`] alike.
    pub fn extracting<T, F>(handler: F) -> Self
    where
        T: Extract,
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        Case {
            pattern: Pattern::Typed(T::ty()),
            converts: Some(|value: &Value| T::extract(value).is_some()),
            handler: Box::new(move |value: &Value| T::extract(value).map(&handler)),
        }
    }
}

impl<R> Case<R> {
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Check whether the case applies, without running the handler.
    pub fn applies(&self, value: &Value) -> bool {
        self.pattern.matches(value) && self.converts.is_none_or(|converts| converts(value))
    }

    /// Run the handler if the case applies.
    pub fn try_apply(&self, value: &Value) -> Option<R> {
        if self.pattern.matches(value) {
            (self.handler)(value)
        } else {
            None
        }
    }
}

impl<R> fmt::Debug for Case<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Case")
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}
