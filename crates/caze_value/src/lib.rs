//! Caze Value - runtime values, classes and type tags.
//!
//! This crate provides:
//! - `Value`, the dynamically typed input a matcher inspects
//! - `Class`, nominal runtime classes with precomputed ancestor sets
//! - `Ty` and `Primitive`, the type tags typed cases declare
//!
//! # Boxing
//!
//! Every scalar value is boxed at runtime: its runtime type is a class
//! (`Integer`, `Double`, ...). Primitive types exist only as declared
//! types, so "does an `int` parameter accept this value" is answered by
//! comparing the value's box against the primitive's box.

mod class;
mod errors;
mod heap;
mod ty;
mod value;

pub use class::{Class, ClassId, Instances};
pub use errors::ValueError;
pub use heap::Heap;
pub use ty::{Primitive, Ty};
pub use value::{ArrayValue, FunctionFn, FunctionValue, ObjectValue, Value};
