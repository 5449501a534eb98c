//! Errors raised while constructing values.

use std::fmt;

use crate::class::{Class, Instances};
use crate::ty::Ty;
use crate::value::Value;

/// A value factory was given a payload its runtime type cannot hold.
#[derive(Clone, Debug, PartialEq)]
pub enum ValueError {
    /// An array element is neither accepted by the component type nor a
    /// null in a reference array.
    ArrayElement {
        index: usize,
        component: Ty,
        element: Value,
    },
    /// `class` cannot be the runtime class of the requested variant.
    NotInstantiable { class: Class, requested: Instances },
}

impl ValueError {
    #[cold]
    pub fn array_element(index: usize, component: Ty, element: Value) -> Self {
        ValueError::ArrayElement {
            index,
            component,
            element,
        }
    }

    #[cold]
    pub fn not_instantiable(class: Class, requested: Instances) -> Self {
        ValueError::NotInstantiable { class, requested }
    }
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueError::ArrayElement {
                index,
                component,
                element,
            } => write!(
                f,
                "element {index} of {component}[] cannot hold {element}"
            ),
            ValueError::NotInstantiable { class, requested } => {
                let kind = match requested {
                    Instances::Functions => "function",
                    Instances::Objects | Instances::Builtin => "object",
                };
                write!(f, "class {class} has no {kind} instances")
            }
        }
    }
}

impl std::error::Error for ValueError {}
