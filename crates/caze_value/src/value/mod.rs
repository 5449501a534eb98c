//! Runtime values inspected by the matcher.
//!
//! Scalars are stored inline; strings, arrays, object fields and closures
//! live behind [`Heap`], so cloning a value never copies its payload and
//! values can be shared across threads.
//!
//! ```text
//! let s = Value::string("hello");
//! let flags = Value::array(Ty::Prim(Primitive::Bool), vec![Value::Bool(true)])?;
//! let some = Value::some(Value::Int(42));
//! ```

mod composite;

use std::fmt;

use crate::class::Class;
use crate::errors::ValueError;
use crate::heap::Heap;
use crate::ty::{Primitive, Ty};

pub use composite::{ArrayValue, FunctionFn, FunctionValue, ObjectValue};

/// Dynamically typed runtime value.
#[derive(Clone)]
pub enum Value {
    /// Absence of a reference. Has no runtime type.
    Null,

    // Boxed scalars
    Bool(bool),
    Byte(i8),
    Short(i16),
    Char(char),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),

    // Heap types
    Str(Heap<String>),
    Array(Heap<ArrayValue>),
    /// Instance of a declared class.
    Object(ObjectValue),
    /// Function value with a functional runtime class.
    Function(FunctionValue),

    // Option
    /// Present optional value. Its class is `Some` whatever it wraps.
    Some(Heap<Value>),
    /// Absent optional value. Distinct from `Null`.
    None,
}

// Factory methods

impl Value {
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create an array with an explicit component type.
    ///
    /// Fails unless every element is accepted by `component`. A reference
    /// array may also hold nulls; a primitive array may not.
    pub fn array(component: Ty, items: Vec<Value>) -> Result<Self, ValueError> {
        Ok(Value::Array(Heap::new(ArrayValue::new(component, items)?)))
    }

    /// Create an instance of `class` with positional fields.
    ///
    /// Fails for functional classes and for the builtin value classes.
    pub fn object(class: Class, fields: Vec<Value>) -> Result<Self, ValueError> {
        Ok(Value::Object(ObjectValue::new(class, fields)?))
    }

    /// Create a function value of the functional class `class`.
    pub fn function<F>(class: Class, func: F) -> Result<Self, ValueError>
    where
        F: Fn(&[Value]) -> Result<Value, String> + Send + Sync + 'static,
    {
        Ok(Value::Function(FunctionValue::new(class, func)?))
    }

    #[inline]
    pub fn some(v: Value) -> Self {
        Value::Some(Heap::new(v))
    }
}

// Inspection

impl Value {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Primitive kind of a boxed scalar.
    pub fn primitive(&self) -> Option<Primitive> {
        match self {
            Value::Bool(_) => Some(Primitive::Bool),
            Value::Byte(_) => Some(Primitive::Byte),
            Value::Short(_) => Some(Primitive::Short),
            Value::Char(_) => Some(Primitive::Char),
            Value::Int(_) => Some(Primitive::Int),
            Value::Long(_) => Some(Primitive::Long),
            Value::Float(_) => Some(Primitive::Float),
            Value::Double(_) => Some(Primitive::Double),
            _ => None,
        }
    }

    /// Runtime type of the value, `None` for null.
    ///
    /// Scalars report their boxed class, never a primitive type.
    pub fn runtime_type(&self) -> Option<Ty> {
        let class = match self {
            Value::Null => return None,
            Value::Array(array) => return Some(Ty::Array(Box::new(array.component.clone()))),
            Value::Str(_) => Class::string(),
            Value::Object(obj) => obj.class.clone(),
            Value::Function(func) => func.class.clone(),
            Value::Some(_) => Class::some(),
            Value::None => Class::none(),
            Value::Bool(_)
            | Value::Byte(_)
            | Value::Short(_)
            | Value::Char(_)
            | Value::Int(_)
            | Value::Long(_)
            | Value::Float(_)
            | Value::Double(_) => {
                return self.primitive().map(|prim| Ty::Class(prim.boxed()));
            }
        };
        Some(Ty::Class(class))
    }

    /// Name of the runtime type for diagnostics.
    pub fn type_name(&self) -> String {
        match self.runtime_type() {
            Some(ty) => ty.to_string(),
            None => "null".to_string(),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_byte(&self) -> Option<i8> {
        match self {
            Value::Byte(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_short(&self) -> Option<i16> {
        match self {
            Value::Short(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            Value::Char(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            Value::Long(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayValue> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectValue> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionValue> {
        match self {
            Value::Function(func) => Some(func),
            _ => None,
        }
    }

    /// Contents of a `Some`.
    pub fn as_some(&self) -> Option<&Value> {
        match self {
            Value::Some(inner) => Some(inner),
            _ => None,
        }
    }
}

// Conversions

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_from_scalar! {
    bool => Bool,
    i8 => Byte,
    i16 => Short,
    char => Char,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<FunctionValue> for Value {
    fn from(func: FunctionValue) -> Self {
        Value::Function(func)
    }
}

// Trait implementations

impl PartialEq for Value {
    /// Kind-sensitive value equality.
    ///
    /// `Int(1)` never equals `Long(1)`. Floats compare by bit pattern.
    /// Arrays are equal only to themselves (a clone shares the array).
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) | (Value::None, Value::None) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Byte(a), Value::Byte(b)) => a == b,
            (Value::Short(a), Value::Short(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Long(a), Value::Long(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Double(a), Value::Double(b)) => a.to_bits() == b.to_bits(),
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => Heap::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a == b,
            (Value::Some(a), Value::Some(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Byte(n) => write!(f, "Byte({n})"),
            Value::Short(n) => write!(f, "Short({n})"),
            Value::Char(c) => write!(f, "Char({c:?})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Long(n) => write!(f, "Long({n})"),
            Value::Float(n) => write!(f, "Float({n:?})"),
            Value::Double(n) => write!(f, "Double({n:?})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::Array(array) => {
                write!(f, "Array({}, {:?})", array.component, array.items)
            }
            Value::Object(obj) => write!(f, "Object({}, {:?})", obj.class, &*obj.fields),
            Value::Function(func) => write!(f, "Function({})", func.class),
            Value::Some(v) => write!(f, "Some({:?})", &**v),
            Value::None => write!(f, "None"),
        }
    }
}

fn write_seq(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Byte(n) => write!(f, "{n}"),
            Value::Short(n) => write!(f, "{n}"),
            Value::Char(c) => write!(f, "'{c}'"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Long(n) => write!(f, "{n}L"),
            Value::Float(n) => write!(f, "{n:?}f"),
            Value::Double(n) => write!(f, "{n:?}"),
            Value::Str(s) => write!(f, "\"{}\"", &**s),
            Value::Array(array) => {
                write!(f, "[")?;
                write_seq(f, &array.items)?;
                write!(f, "]")
            }
            Value::Object(obj) => {
                write!(f, "{}(", obj.class)?;
                write_seq(f, &obj.fields)?;
                write!(f, ")")
            }
            Value::Function(func) => write!(f, "<function {}>", func.class),
            Value::Some(v) => write!(f, "Some({})", &**v),
            Value::None => write!(f, "None"),
        }
    }
}
