//! Type tags declared by typed cases.
//!
//! Runtime values are always boxed: a `Value::Int` has the runtime class
//! `Integer`. A declared primitive type (`Ty::Prim`) accepts exactly the
//! values whose boxed class is the primitive's box, which is what lets an
//! `int` case and an `Integer` case both accept the same value while an
//! `int` case still rejects a `long`.

use std::fmt;

use crate::class::{Class, ClassId};
use crate::value::Value;

/// Primitive numeric and boolean kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
    Bool,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
}

impl Primitive {
    pub const ALL: [Primitive; 8] = [
        Primitive::Bool,
        Primitive::Byte,
        Primitive::Short,
        Primitive::Char,
        Primitive::Int,
        Primitive::Long,
        Primitive::Float,
        Primitive::Double,
    ];

    /// Source-level spelling of the primitive.
    pub fn name(self) -> &'static str {
        match self {
            Primitive::Bool => "boolean",
            Primitive::Byte => "byte",
            Primitive::Short => "short",
            Primitive::Char => "char",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Float => "float",
            Primitive::Double => "double",
        }
    }

    /// The class every runtime value of this kind has.
    pub fn boxed(self) -> Class {
        match self {
            Primitive::Bool => Class::boolean(),
            Primitive::Byte => Class::byte(),
            Primitive::Short => Class::short(),
            Primitive::Char => Class::character(),
            Primitive::Int => Class::integer(),
            Primitive::Long => Class::long(),
            Primitive::Float => Class::float(),
            Primitive::Double => Class::double(),
        }
    }

    pub fn is_numeric(self) -> bool {
        !matches!(self, Primitive::Bool | Primitive::Char)
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A declared parameter type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Ty {
    /// Primitive parameter type, such as `int`.
    Prim(Primitive),
    /// Reference type: `Object`, a boxed class, `String` or a declared class.
    Class(Class),
    /// Array type with the given component type.
    Array(Box<Ty>),
}

impl Ty {
    pub fn object() -> Ty {
        Ty::Class(Class::object())
    }

    /// The reference type boxing `prim`, such as `Integer` for `int`.
    pub fn boxed(prim: Primitive) -> Ty {
        Ty::Class(prim.boxed())
    }

    pub fn array(component: Ty) -> Ty {
        Ty::Array(Box::new(component))
    }

    /// Check whether a declared parameter of this type accepts `value`.
    ///
    /// Null is never accepted: it has no runtime type.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            Ty::Prim(prim) => value.primitive() == Some(*prim),
            Ty::Class(_) | Ty::Array(_) => value
                .runtime_type()
                .is_some_and(|runtime| self.is_assignable_from(&runtime)),
        }
    }

    /// Check whether values of type `other` may be stored in `self`.
    ///
    /// Primitive types are only assignable from themselves. Arrays are
    /// covariant in their component type and assignable to `Object`.
    pub fn is_assignable_from(&self, other: &Ty) -> bool {
        match (self, other) {
            (Ty::Prim(target), Ty::Prim(source)) => target == source,
            (Ty::Prim(_), _) | (_, Ty::Prim(_)) => false,
            (Ty::Class(target), Ty::Class(source)) => source.is_subclass_of(target),
            (Ty::Class(target), Ty::Array(_)) => target.id() == ClassId::OBJECT,
            (Ty::Array(target), Ty::Array(source)) => target.is_assignable_from(source),
            (Ty::Array(_), Ty::Class(_)) => false,
        }
    }
}

impl From<Class> for Ty {
    fn from(class: Class) -> Self {
        Ty::Class(class)
    }
}

impl From<Primitive> for Ty {
    fn from(prim: Primitive) -> Self {
        Ty::Prim(prim)
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Prim(prim) => write!(f, "{prim}"),
            Ty::Class(class) => write!(f, "{class}"),
            Ty::Array(component) => write!(f, "{component}[]"),
        }
    }
}
