//! Composite value payloads: arrays, objects and functions.

// Function payloads are unsized closures; Heap::new only takes sized values.
#![expect(
    clippy::disallowed_types,
    reason = "Arc unsizes function closures before they are wrapped in Heap"
)]

use std::fmt;
use std::sync::Arc;

use crate::class::{Class, Instances};
use crate::errors::ValueError;
use crate::heap::Heap;
use crate::ty::Ty;

use super::Value;

/// Callable body of a function value.
pub type FunctionFn = dyn Fn(&[Value]) -> Result<Value, String> + Send + Sync;

/// Array with an explicit component type.
///
/// The component type is part of the array's runtime type, so an array of
/// primitive booleans is distinct from an array of boxed `Boolean`s even
/// when both hold the same elements.
///
/// Every element is accepted by the component type, or is null when the
/// component is a reference type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayValue {
    pub(crate) component: Ty,
    pub(crate) items: Vec<Value>,
}

impl ArrayValue {
    pub(crate) fn new(component: Ty, items: Vec<Value>) -> Result<Self, ValueError> {
        let reference = !matches!(component, Ty::Prim(_));
        for (index, item) in items.iter().enumerate() {
            if !(component.accepts(item) || (reference && item.is_null())) {
                return Err(ValueError::array_element(index, component, item.clone()));
            }
        }
        Ok(ArrayValue { component, items })
    }

    pub fn component(&self) -> &Ty {
        &self.component
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Instance of a declared class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectValue {
    pub(crate) class: Class,
    pub(crate) fields: Heap<Vec<Value>>,
}

impl ObjectValue {
    pub(crate) fn new(class: Class, fields: Vec<Value>) -> Result<Self, ValueError> {
        if class.instances() != Instances::Objects {
            return Err(ValueError::not_instantiable(class, Instances::Objects));
        }
        Ok(ObjectValue {
            class,
            fields: Heap::new(fields),
        })
    }

    pub fn class(&self) -> &Class {
        &self.class
    }

    /// Positional field access.
    pub fn field(&self, index: usize) -> Option<&Value> {
        self.fields.get(index)
    }
}

/// Function value whose runtime class is a functional class.
///
/// Two function values are equal only when they share one closure
/// allocation; call shape plays no part in identity or matching.
#[derive(Clone)]
pub struct FunctionValue {
    pub(crate) class: Class,
    func: Heap<FunctionFn>,
}

impl FunctionValue {
    pub(crate) fn new<F>(class: Class, func: F) -> Result<Self, ValueError>
    where
        F: Fn(&[Value]) -> Result<Value, String> + Send + Sync + 'static,
    {
        if class.instances() != Instances::Functions {
            return Err(ValueError::not_instantiable(class, Instances::Functions));
        }
        let func: Arc<FunctionFn> = Arc::new(func);
        Ok(FunctionValue {
            class,
            func: Heap(func),
        })
    }

    pub fn class(&self) -> &Class {
        &self.class
    }

    /// Invoke the function.
    pub fn call(&self, args: &[Value]) -> Result<Value, String> {
        (*self.func)(args)
    }

    /// Check whether both values share one closure.
    pub fn same_function(&self, other: &FunctionValue) -> bool {
        Heap::ptr_eq(&self.func, &other.func)
    }
}

impl PartialEq for FunctionValue {
    fn eq(&self, other: &Self) -> bool {
        self.same_function(other)
    }
}

impl Eq for FunctionValue {}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FunctionValue({})", self.class)
    }
}
