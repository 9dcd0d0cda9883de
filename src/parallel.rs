//! Fan-out helpers. Every callback runs on a rayon worker and the call
//! returns only after all of them finished. Without the `parallel`
//! feature the same functions run sequentially on the calling thread.
//!
//! Callbacks see shared references only; the containers themselves are
//! never mutated concurrently.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::list::List;
use crate::object::Object;
use crate::value::Value;

#[cfg(feature = "parallel")]
fn fan_out<T, R, F>(items: &[T], function: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(usize, &T) -> R + Sync + Send,
{
    items
        .par_iter()
        .enumerate()
        .map(|(index, item)| function(index, item))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn fan_out<T, R, F>(items: &[T], function: F) -> Vec<R>
where
    F: Fn(usize, &T) -> R,
{
    items
        .iter()
        .enumerate()
        .map(|(index, item)| function(index, item))
        .collect()
}

impl List {
    /// Calls `function` for every element concurrently. No ordering is
    /// guaranteed between invocations.
    pub fn for_each_async<F>(&self, function: F) -> &Self
    where
        F: Fn(usize, &Value) + Sync + Send,
    {
        fan_out(self.as_slice(), function);
        self
    }

    /// Maps every element concurrently. Each result lands at its source
    /// index, so the output order matches the input.
    pub fn map_async<F>(&self, function: F) -> List
    where
        F: Fn(usize, &Value) -> Value + Sync + Send,
    {
        List::from_values(fan_out(self.as_slice(), function))
    }
}

impl Object {
    pub fn for_each_async<F>(&self, function: F) -> &Self
    where
        F: Fn(&str, &Value) + Sync + Send,
    {
        let entries: Vec<(&String, &Value)> = self.iter().collect();
        fan_out(&entries, |_, &(key, value)| function(key, value));
        self
    }

    /// New object with the same keys, values mapped concurrently.
    pub fn map_async<F>(&self, function: F) -> Object
    where
        F: Fn(&str, &Value) -> Value + Sync + Send,
    {
        let entries: Vec<(&String, &Value)> = self.iter().collect();
        let mapped = fan_out(&entries, |_, &(key, value)| function(key, value));
        let mut obj = Object::with_capacity(mapped.len());
        for ((key, _), value) in entries.into_iter().zip(mapped) {
            obj.insert_checked(key.clone(), value);
        }
        obj
    }
}
