mod iter;
mod reduce;

use std::fmt;

use smallvec::SmallVec;

use crate::object::Object;
use crate::options::Indent;
use crate::value::{FromValue, Type, Value};
use crate::{Error, Result};

/// Ordered, index-addressed sequence of values. Indices are always
/// contiguous `0..count()`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct List {
    items: Vec<Value>,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// A list of `count` independent copies of `value`.
    pub fn repeat(value: impl Into<Value>, count: usize) -> Self {
        Self {
            items: vec![value.into(); count],
        }
    }

    pub fn from_values(items: Vec<Value>) -> Self {
        Self { items }
    }

    pub fn add(&mut self, value: impl Into<Value>) -> &mut Self {
        self.items.push(value.into());
        self
    }

    pub fn add_all<I, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.items.extend(values.into_iter().map(Into::into));
        self
    }

    /// Inserts before `index`; `index == count()` appends.
    pub fn insert(&mut self, index: usize, value: impl Into<Value>) -> Result<&mut Self> {
        if index > self.items.len() {
            return Err(self.out_of_range(index));
        }
        self.items.insert(index, value.into());
        Ok(self)
    }

    /// Overwrites an existing slot; `index` must be `< count()`.
    pub fn replace(&mut self, index: usize, value: impl Into<Value>) -> Result<&mut Self> {
        let count = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or_else(|| Error::index_out_of_range(index as isize, count))?;
        *slot = value.into();
        Ok(self)
    }

    /// Removes every listed index. All indices are validated before anything
    /// is removed; duplicates are removed once.
    pub fn delete(&mut self, indices: &[usize]) -> Result<&mut Self> {
        if let Some(&bad) = indices.iter().find(|&&i| i >= self.items.len()) {
            return Err(self.out_of_range(bad));
        }
        let mut sorted: SmallVec<[usize; 8]> = SmallVec::from_slice(indices);
        sorted.sort_unstable();
        sorted.dedup();
        for &index in sorted.iter().rev() {
            self.items.remove(index);
        }
        Ok(self)
    }

    /// Removes and returns the last element.
    pub fn pop(&mut self) -> Result<Value> {
        self.items
            .pop()
            .ok_or_else(|| Error::index_out_of_range(-1, 0))
    }

    pub fn clear(&mut self) -> &mut Self {
        self.items.clear();
        self
    }

    pub fn get(&self, index: usize) -> Result<&Value> {
        self.items
            .get(index)
            .ok_or_else(|| self.out_of_range(index))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Value> {
        let count = self.items.len();
        self.items
            .get_mut(index)
            .ok_or_else(|| Error::index_out_of_range(index as isize, count))
    }

    pub fn get_as<'a, T: FromValue<'a>>(&'a self, index: usize) -> Result<T> {
        self.get(index)?.expect::<T>()
    }

    pub fn get_object(&self, index: usize) -> Result<&Object> {
        self.get_as(index)
    }

    pub fn get_object_mut(&mut self, index: usize) -> Result<&mut Object> {
        self.get_mut(index)?.expect_object_mut()
    }

    pub fn get_list(&self, index: usize) -> Result<&List> {
        self.get_as(index)
    }

    pub fn get_list_mut(&mut self, index: usize) -> Result<&mut List> {
        self.get_mut(index)?.expect_list_mut()
    }

    pub fn get_string(&self, index: usize) -> Result<&str> {
        self.get_as(index)
    }

    pub fn get_bool(&self, index: usize) -> Result<bool> {
        self.get_as(index)
    }

    pub fn get_int(&self, index: usize) -> Result<i64> {
        self.get_as(index)
    }

    pub fn get_float(&self, index: usize) -> Result<f64> {
        self.get_as(index)
    }

    /// Variant tag at `index`, or `Type::Undefined` when out of range.
    pub fn type_of(&self, index: usize) -> Type {
        self.items
            .get(index)
            .map_or(Type::Undefined, Value::type_of)
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn equals(&self, other: &List) -> bool {
        self == other
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Value> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    pub fn to_vec(&self) -> Vec<Value> {
        self.items.clone()
    }

    /// New list holding `self` followed by `other`; both operands are unchanged.
    pub fn concat(&self, other: &List) -> List {
        let mut items = Vec::with_capacity(self.items.len() + other.items.len());
        items.extend_from_slice(&self.items);
        items.extend_from_slice(&other.items);
        List { items }
    }

    /// Copies `start..end`. A non-positive `end` counts back from the tail,
    /// so `sub_list(0, -1)` drops the last element and `sub_list(0, 0)`
    /// copies everything.
    pub fn sub_list(&self, start: isize, end: isize) -> Result<List> {
        let count = self.items.len();
        let signed_count = count as isize;
        if end > signed_count || end < -signed_count {
            return Err(Error::index_out_of_range(end, count));
        }
        let end = if end <= 0 { signed_count + end } else { end };
        if start < 0 {
            return Err(Error::index_out_of_range(start, count));
        }
        if start > end {
            return Err(Error::InvalidRange { start, end, count });
        }
        Ok(List {
            items: self.items[start as usize..end as usize].to_vec(),
        })
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.items.contains(value)
    }

    pub fn index_of(&self, value: &Value) -> Option<usize> {
        self.items.iter().position(|item| item == value)
    }

    /// Sorts ascending. The first element decides the ordering (string, int
    /// or float) and every other element must share its variant.
    pub fn sort(&mut self) -> Result<&mut Self> {
        let Some(first) = self.items.first() else {
            return Ok(self);
        };
        let ty = first.type_of();
        if !matches!(ty, Type::String | Type::Int | Type::Float) {
            return Err(Error::UnsupportedType(format!(
                "cannot sort a list of {ty}; the first element has to be string, int or float"
            )));
        }
        if let Some(other) = self.items.iter().find(|item| item.type_of() != ty) {
            return Err(Error::type_mismatch(ty, other.type_of()));
        }
        match ty {
            Type::String => self.items.sort_by(|a, b| a.as_str().cmp(&b.as_str())),
            Type::Int => self.items.sort_by_key(|item| item.as_int()),
            _ => self.items.sort_by(|a, b| {
                let (a, b) = (a.as_float().unwrap_or_default(), b.as_float().unwrap_or_default());
                a.total_cmp(&b)
            }),
        }
        Ok(self)
    }

    pub fn reverse(&mut self) -> &mut Self {
        self.items.reverse();
        self
    }

    fn all_of(&self, ty: Type) -> bool {
        self.items.iter().all(|item| item.type_of() == ty)
    }

    pub fn all_objects(&self) -> bool {
        self.all_of(Type::Object)
    }

    pub fn all_lists(&self) -> bool {
        self.all_of(Type::List)
    }

    pub fn all_strings(&self) -> bool {
        self.all_of(Type::String)
    }

    pub fn all_bools(&self) -> bool {
        self.all_of(Type::Bool)
    }

    pub fn all_ints(&self) -> bool {
        self.all_of(Type::Int)
    }

    pub fn all_floats(&self) -> bool {
        self.all_of(Type::Float)
    }

    pub fn all_numeric(&self) -> bool {
        self.items.iter().all(Value::is_numeric)
    }

    fn typed_vec<'a, T: FromValue<'a>>(&'a self) -> Result<Vec<T>> {
        self.items.iter().map(|item| item.expect::<T>()).collect()
    }

    pub fn string_vec(&self) -> Result<Vec<String>> {
        Ok(self
            .typed_vec::<&str>()?
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    pub fn bool_vec(&self) -> Result<Vec<bool>> {
        self.typed_vec()
    }

    pub fn int_vec(&self) -> Result<Vec<i64>> {
        self.typed_vec()
    }

    pub fn float_vec(&self) -> Result<Vec<f64>> {
        self.typed_vec()
    }

    pub fn to_json_string(&self) -> String {
        crate::encode::list_to_string(self)
    }

    /// Pretty-printed JSON with `indent` spaces (0..=10) per level.
    pub fn format_string(&self, indent: usize) -> Result<String> {
        Ok(crate::encode::format_list(self, Indent::new(indent)?))
    }

    fn out_of_range(&self, index: usize) -> Error {
        Error::index_out_of_range(index as isize, self.items.len())
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json_string())
    }
}

impl<V: Into<Value>> FromIterator<V> for List {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        List {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<V: Into<Value>> Extend<V> for List {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.items.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
