//! Reified parameter types for typed cases.
//!
//! A closure's parameter type cannot be recovered at runtime, so typed
//! cases name it through [`Extract`]: the implementing Rust type supplies
//! both the declared type tag and the conversion from a matched value.
//!
//! | Rust type                 | Declared type |
//! |---------------------------|---------------|
//! | `i32`                     | `int`         |
//! | `Boxed<i32>`              | `Integer`     |
//! | `String`                  | `String`      |
//! | `FunctionValue`           | `Function`    |
//! | `Value`                   | `Object`      |
//! | `Vec<bool>`               | `boolean[]`   |
//! | `Vec<Option<Boxed<i32>>>` | `Integer[]`   |
//! | `Vec<Option<String>>`     | `String[]`    |
//! | `Vec<Value>`              | `Object[]`    |
//!
//! An extractor converts every value its declared type accepts. Reference
//! arrays may hold nulls, so their elements are extracted as `Option`.

use caze_value::{Class, FunctionValue, Primitive, Ty, Value};

/// A Rust type usable as the parameter of a typed case.
pub trait Extract: Sized {
    /// Declared type of the parameter.
    fn ty() -> Ty;

    /// Convert a value the declared type accepts.
    fn extract(value: &Value) -> Option<Self>;
}

/// Selects the boxed reference type of a scalar.
///
/// `i32` declares the primitive `int`; `Boxed<i32>` declares `Integer`.
/// Both accept the same runtime values, which makes registration order the
/// only thing deciding between an `int` case and an `Integer` case.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Boxed<T>(pub T);

macro_rules! extract_scalar {
    ($($ty:ty => $prim:ident, $get:ident;)*) => {
        $(
            impl Extract for $ty {
                fn ty() -> Ty {
                    Ty::Prim(Primitive::$prim)
                }

                fn extract(value: &Value) -> Option<Self> {
                    value.$get()
                }
            }

            impl Extract for Boxed<$ty> {
                fn ty() -> Ty {
                    Ty::boxed(Primitive::$prim)
                }

                fn extract(value: &Value) -> Option<Self> {
                    value.$get().map(Boxed)
                }
            }
        )*
    };
}

extract_scalar! {
    bool => Bool, as_bool;
    i8 => Byte, as_byte;
    i16 => Short, as_short;
    char => Char, as_char;
    i32 => Int, as_int;
    i64 => Long, as_long;
    f32 => Float, as_float;
    f64 => Double, as_double;
}

impl Extract for String {
    fn ty() -> Ty {
        Ty::Class(Class::string())
    }

    fn extract(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl Extract for FunctionValue {
    fn ty() -> Ty {
        Ty::Class(Class::function())
    }

    fn extract(value: &Value) -> Option<Self> {
        value.as_function().cloned()
    }
}

/// `Object`: the value is passed through unchanged.
impl Extract for Value {
    fn ty() -> Ty {
        Ty::object()
    }

    fn extract(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

/// An array component type.
///
/// Primitive components extract as the scalar itself. Reference components
/// extract as `Option`, with `None` for a null element; `Value` keeps the
/// null as `Value::Null`.
pub trait Element: Sized {
    /// Declared component type.
    fn component() -> Ty;

    /// Convert an element of an array the declared type accepts.
    fn extract_element(element: &Value) -> Option<Self>;
}

macro_rules! element_primitive {
    ($($ty:ty),*) => {
        $(
            impl Element for $ty {
                fn component() -> Ty {
                    <$ty as Extract>::ty()
                }

                fn extract_element(element: &Value) -> Option<Self> {
                    <$ty as Extract>::extract(element)
                }
            }
        )*
    };
}

element_primitive!(bool, i8, i16, char, i32, i64, f32, f64);

macro_rules! element_nullable {
    ($($ty:ty),*) => {
        $(
            impl Element for Option<$ty> {
                fn component() -> Ty {
                    <$ty as Extract>::ty()
                }

                fn extract_element(element: &Value) -> Option<Self> {
                    if element.is_null() {
                        return Some(None);
                    }
                    <$ty as Extract>::extract(element).map(Some)
                }
            }
        )*
    };
}

element_nullable!(
    Boxed<bool>,
    Boxed<i8>,
    Boxed<i16>,
    Boxed<char>,
    Boxed<i32>,
    Boxed<i64>,
    Boxed<f32>,
    Boxed<f64>,
    String,
    FunctionValue
);

/// Nested arrays: a null row extracts as `None`.
impl<T: Element> Element for Option<Vec<T>> {
    fn component() -> Ty {
        Vec::<T>::ty()
    }

    fn extract_element(element: &Value) -> Option<Self> {
        if element.is_null() {
            return Some(None);
        }
        Vec::<T>::extract(element).map(Some)
    }
}

impl Element for Value {
    fn component() -> Ty {
        Ty::object()
    }

    fn extract_element(element: &Value) -> Option<Self> {
        Some(element.clone())
    }
}

impl<T: Element> Extract for Vec<T> {
    fn ty() -> Ty {
        Ty::array(T::component())
    }

    fn extract(value: &Value) -> Option<Self> {
        value
            .as_array()?
            .items()
            .iter()
            .map(T::extract_element)
            .collect()
    }
}
