//! Caze Match - ordered case chains resolved against runtime values.
//!
//! This crate provides:
//! - `Pattern` and `Case`, the applicability test and handler of one rule
//! - `MatchBuilder`, which accumulates cases in registration order
//! - `Matcher`, the immutable chain that resolves an input
//! - `MatchError`, returned when no case applies
//! - `Extract`, `Element` and `Boxed`, which reify a handler's parameter type
//!
//! # Resolution
//!
//! Cases are tried in registration order and the first applicable one
//! wins. A case applies by value equality (`value`), by runtime type
//! assignability (`typed`, `of`), by predicate (`when`) or unconditionally
//! (`otherwise`). There is no specificity ranking: a general case added
//! first shadows every more specific case after it.
//!
//! ```text
//! let m = Matcher::builder()
//!     .value(1, |_| 'a')
//!     .typed(Class::number(), |_| 'b')
//!     .of(|_: Value| 'c')
//!     .build();
//! assert_eq!(m.apply(&Value::Double(2.0)), Ok('b'));
//! ```

mod builder;
mod case;
mod errors;
mod extract;
mod matcher;

use std::sync::Once;

pub use builder::MatchBuilder;
pub use case::{Case, Pattern, PredicateFn};
pub use errors::MatchError;
pub use extract::{Boxed, Element, Extract};
pub use matcher::Matcher;

// Re-export the value model for convenience
pub use caze_value::{
    ArrayValue, Class, ClassId, FunctionValue, Instances, ObjectValue, Primitive, Ty, Value,
    ValueError,
};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=caze_match=debug`
/// or `RUST_LOG=caze_match=trace`; without `RUST_LOG` nothing is installed.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
