use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use super::{Type, Value};
use crate::list::List;
use crate::object::Object;
use crate::{Error, Result};

/// Borrowed typed view of a [`Value`], used by the typed getters and the
/// typed iteration family. Non-matching variants yield `None`.
pub trait FromValue<'a>: Sized {
    const TYPE: Type;

    fn from_value(value: &'a Value) -> Option<Self>;
}

impl<'a> FromValue<'a> for &'a str {
    const TYPE: Type = Type::String;

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_str()
    }
}

impl<'a> FromValue<'a> for bool {
    const TYPE: Type = Type::Bool;

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_bool()
    }
}

impl<'a> FromValue<'a> for i64 {
    const TYPE: Type = Type::Int;

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_int()
    }
}

impl<'a> FromValue<'a> for f64 {
    const TYPE: Type = Type::Float;

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_float()
    }
}

impl<'a> FromValue<'a> for &'a Object {
    const TYPE: Type = Type::Object;

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_object()
    }
}

impl<'a> FromValue<'a> for &'a List {
    const TYPE: Type = Type::List;

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_list()
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! from_lossless_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Int(i64::from(n))
                }
            }
        )*
    };
}

from_lossless_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! try_from_wide_int {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<$ty> for Value {
                type Error = Error;

                fn try_from(n: $ty) -> Result<Self> {
                    i64::try_from(n).map(Value::Int).map_err(|_| {
                        Error::UnsupportedType(format!(
                            "{} value {n} does not fit a machine-width int",
                            stringify!($ty)
                        ))
                    })
                }
            }
        )*
    };
}

try_from_wide_int!(u64, usize, isize, i128, u128);

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<List> for Value {
    fn from(list: List) -> Self {
        Value::List(list)
    }
}

impl From<Object> for Value {
    fn from(obj: Object) -> Self {
        Value::Object(obj)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<Value>> TryFrom<HashMap<K, V>> for Value {
    type Error = Error;

    fn try_from(map: HashMap<K, V>) -> Result<Self> {
        Object::try_from_iter(map).map(Value::Object)
    }
}

impl<K: Into<String>, V: Into<Value>> TryFrom<BTreeMap<K, V>> for Value {
    type Error = Error;

    fn try_from(map: BTreeMap<K, V>) -> Result<Self> {
        Object::try_from_iter(map).map(Value::Object)
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = Error;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        Ok(match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if n.is_u64() {
                    return Err(Error::UnsupportedType(format!(
                        "integer {n} does not fit a machine-width int"
                    )));
                } else if let Some(f) = n.as_f64() {
                    Value::Float(f)
                } else {
                    return Err(Error::UnsupportedType(format!("number {n}")));
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                let mut list = List::with_capacity(items.len());
                for item in items {
                    list.add(Value::try_from(item)?);
                }
                Value::List(list)
            }
            serde_json::Value::Object(map) => {
                let mut obj = Object::with_capacity(map.len());
                for (key, item) in map {
                    obj.set(key, Value::try_from(item)?)?;
                }
                Value::Object(obj)
            }
        })
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::Number((*i).into()),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::List(list) => serde_json::Value::Array(list.iter().map(Into::into).collect()),
            Value::Object(obj) => {
                let mut map = serde_json::Map::with_capacity(obj.count());
                for (key, item) in obj.iter() {
                    map.insert(key.to_string(), item.into());
                }
                serde_json::Value::Object(map)
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        (&value).into()
    }
}

impl Value {
    /// Classifies any serde-serializable native value into exactly one
    /// variant, failing with `UnsupportedType` when no mapping exists.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
        let json = serde_json::to_value(value)
            .map_err(|err| Error::UnsupportedType(err.to_string()))?;
        Value::try_from(json)
    }
}
