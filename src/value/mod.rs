mod convert;

use std::fmt;

use crate::list::List;
use crate::object::Object;
use crate::{Error, Result};

pub use convert::FromValue;

/// Variant tag of a stored value. `Undefined` is reported for absent slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Undefined,
    Null,
    Object,
    List,
    String,
    Bool,
    Int,
    Float,
}

impl Type {
    pub fn name(self) -> &'static str {
        match self {
            Type::Undefined => "undefined",
            Type::Null => "null",
            Type::Object => "object",
            Type::List => "list",
            Type::String => "string",
            Type::Bool => "bool",
            Type::Int => "int",
            Type::Float => "float",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Type::Int | Type::Float)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single container slot.
///
/// Equality is structural and variant-sensitive: `Int(1)` never equals
/// `Float(1.0)`. Cloning is deep; nested containers are copied.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    String(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    Object(Object),
    List(List),
}

impl Value {
    pub fn type_of(&self) -> Type {
        match self {
            Value::Null => Type::Null,
            Value::String(_) => Type::String,
            Value::Bool(_) => Type::Bool,
            Value::Int(_) => Type::Int,
            Value::Float(_) => Type::Float,
            Value::Object(_) => Type::Object,
            Value::List(_) => Type::List,
        }
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub const fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    pub const fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub const fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Numeric view used by the unsuffixed reductions; Ints widen to floats.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    /// Structural, variant-sensitive equality.
    pub fn equals(&self, other: &Value) -> bool {
        self == other
    }

    /// Typed view that fails with `TypeMismatch` instead of returning `None`.
    pub fn expect<'a, T: FromValue<'a>>(&'a self) -> Result<T> {
        T::from_value(self).ok_or_else(|| Error::type_mismatch(T::TYPE, self.type_of()))
    }

    pub fn expect_object_mut(&mut self) -> Result<&mut Object> {
        let found = self.type_of();
        self.as_object_mut()
            .ok_or_else(|| Error::type_mismatch(Type::Object, found))
    }

    pub fn expect_list_mut(&mut self) -> Result<&mut List> {
        let found = self.type_of();
        self.as_list_mut()
            .ok_or_else(|| Error::type_mismatch(Type::List, found))
    }

    /// Compact JSON fragment for this value.
    pub fn to_json_string(&self) -> String {
        crate::encode::to_string(self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json_string())
    }
}
