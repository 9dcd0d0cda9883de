mod iter;

use std::collections::HashMap;
use std::fmt;

use indexmap::IndexMap;

use crate::list::List;
use crate::options::Indent;
use crate::value::{FromValue, Type, Value};
use crate::{Error, Result};

/// String-keyed mapping of values. Keys are unique and never empty.
///
/// Entries keep insertion order for stable output, but equality ignores
/// order: two objects are equal when they hold the same keys mapped to
/// equal values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Object {
    fields: IndexMap<String, Value>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: IndexMap::with_capacity(capacity),
        }
    }

    /// Builds an object from `(key, value)` entries, failing with
    /// `InvalidKey` on the first empty key.
    pub fn try_from_iter<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut obj = Object::new();
        for (key, value) in entries {
            obj.set(key, value)?;
        }
        Ok(obj)
    }

    /// Builds an object from a flat `key, value, key, value, ...` sequence.
    pub fn from_pairs<I, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut obj = Object::new();
        obj.set_pairs(pairs)?;
        Ok(obj)
    }

    /// Stores `value` under `key`, replacing any previous entry.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<&mut Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(Error::InvalidKey);
        }
        self.fields.insert(key, value.into());
        Ok(self)
    }

    /// Variadic form of [`Object::set`]. The sequence must alternate
    /// non-empty string keys and values; it is validated in full before the
    /// object is touched, and a repeated key keeps its last value.
    pub fn set_pairs<I, V>(&mut self, pairs: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let flat: Vec<Value> = pairs.into_iter().map(Into::into).collect();
        if flat.len() % 2 != 0 {
            return Err(Error::OddArgumentCount(flat.len()));
        }
        let valid_keys = flat
            .iter()
            .step_by(2)
            .all(|key| key.as_str().is_some_and(|k| !k.is_empty()));
        if !valid_keys {
            return Err(Error::InvalidKey);
        }

        let mut flat = flat.into_iter();
        while let (Some(key), Some(value)) = (flat.next(), flat.next()) {
            if let Value::String(key) = key {
                self.fields.insert(key, value);
            }
        }
        Ok(self)
    }

    /// Inserts an entry whose key the caller already checked.
    pub(crate) fn insert_checked(&mut self, key: String, value: Value) {
        debug_assert!(!key.is_empty());
        self.fields.insert(key, value);
    }

    /// Removes every named key. Fails with `KeyNotFound` before removing
    /// anything if one of them is absent.
    pub fn unset(&mut self, keys: &[&str]) -> Result<&mut Self> {
        if let Some(missing) = keys.iter().find(|key| !self.fields.contains_key(**key)) {
            return Err(Error::KeyNotFound((*missing).to_string()));
        }
        for key in keys {
            self.fields.shift_remove(*key);
        }
        Ok(self)
    }

    pub fn clear(&mut self) -> &mut Self {
        self.fields.clear();
        self
    }

    pub fn get(&self, key: &str) -> Result<&Value> {
        self.fields
            .get(key)
            .ok_or_else(|| Error::KeyNotFound(key.to_string()))
    }

    pub fn get_mut(&mut self, key: &str) -> Result<&mut Value> {
        self.fields
            .get_mut(key)
            .ok_or_else(|| Error::KeyNotFound(key.to_string()))
    }

    pub fn get_as<'a, T: FromValue<'a>>(&'a self, key: &str) -> Result<T> {
        self.get(key)?.expect::<T>()
    }

    pub fn get_object(&self, key: &str) -> Result<&Object> {
        self.get_as(key)
    }

    pub fn get_object_mut(&mut self, key: &str) -> Result<&mut Object> {
        self.get_mut(key)?.expect_object_mut()
    }

    pub fn get_list(&self, key: &str) -> Result<&List> {
        self.get_as(key)
    }

    pub fn get_list_mut(&mut self, key: &str) -> Result<&mut List> {
        self.get_mut(key)?.expect_list_mut()
    }

    pub fn get_string(&self, key: &str) -> Result<&str> {
        self.get_as(key)
    }

    pub fn get_bool(&self, key: &str) -> Result<bool> {
        self.get_as(key)
    }

    pub fn get_int(&self, key: &str) -> Result<i64> {
        self.get_as(key)
    }

    pub fn get_float(&self, key: &str) -> Result<f64> {
        self.get_as(key)
    }

    /// Variant tag under `key`, or `Type::Undefined` when absent.
    pub fn type_of(&self, key: &str) -> Type {
        self.fields.get(key).map_or(Type::Undefined, Value::type_of)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Snapshot of the keys as a list of strings.
    pub fn keys(&self) -> List {
        self.fields.keys().map(String::as_str).collect()
    }

    /// Snapshot of the values.
    pub fn values(&self) -> List {
        self.fields.values().cloned().collect()
    }

    pub fn to_map(&self) -> HashMap<String, Value> {
        self.fields
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    pub fn count(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn equals(&self, other: &Object) -> bool {
        self == other
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.fields.iter()
    }

    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, Value> {
        self.fields.iter_mut()
    }

    /// New object holding every entry of `self` overwritten by every entry
    /// of `other`. Both operands are unchanged.
    pub fn merge(&self, other: &Object) -> Object {
        let mut merged = self.clone();
        for (key, value) in &other.fields {
            merged.fields.insert(key.clone(), value.clone());
        }
        merged
    }

    /// New object holding copies of only the named entries.
    pub fn pluck(&self, keys: &[&str]) -> Result<Object> {
        let mut plucked = Object::with_capacity(keys.len());
        for key in keys {
            let value = self.get(key)?;
            plucked.fields.insert((*key).to_string(), value.clone());
        }
        Ok(plucked)
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.fields.values().any(|item| item == value)
    }

    /// First key (in insertion order) whose value equals `value`.
    pub fn key_of(&self, value: &Value) -> Option<&str> {
        self.fields
            .iter()
            .find(|(_, item)| *item == value)
            .map(|(key, _)| key.as_str())
    }

    pub fn to_json_string(&self) -> String {
        crate::encode::object_to_string(self)
    }

    /// Pretty-printed JSON with `indent` spaces (0..=10) per level.
    pub fn format_string(&self, indent: usize) -> Result<String> {
        Ok(crate::encode::format_object(self, Indent::new(indent)?))
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json_string())
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
