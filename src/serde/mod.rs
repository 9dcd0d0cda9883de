//! `Serialize`/`Deserialize` bridges for [`Value`], [`List`](crate::List)
//! and [`Object`](crate::Object), plus typed extraction into native structs.

mod de;
mod ser;

use ::serde::de::DeserializeOwned;

use crate::value::Value;
use crate::{Error, Result};

impl Value {
    /// Converts the value into any deserializable native type.
    ///
    /// ```
    /// use anytype::{list, Value};
    ///
    /// let value = Value::from(list![1, 2, 3]);
    /// let native: Vec<i64> = value.deserialize_into().unwrap();
    /// assert_eq!(native, vec![1, 2, 3]);
    /// ```
    pub fn deserialize_into<T: DeserializeOwned>(&self) -> Result<T> {
        let json = serde_json::Value::from(self);
        serde_json::from_value(json).map_err(|err| Error::UnsupportedType(err.to_string()))
    }
}
