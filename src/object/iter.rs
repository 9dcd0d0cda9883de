//! Iteration and transform family for [`Object`], keyed by `&str`.
//! Visiting order follows insertion order but callers should not rely on it.

use super::Object;
use crate::list::List;
use crate::value::{FromValue, Value};

impl Object {
    pub fn for_each<F>(&self, mut function: F) -> &Self
    where
        F: FnMut(&str, &Value),
    {
        for (key, value) in &self.fields {
            function(key, value);
        }
        self
    }

    pub fn for_each_typed<'a, T, F>(&'a self, mut function: F) -> &'a Self
    where
        T: FromValue<'a>,
        F: FnMut(&'a str, T),
    {
        for (key, value) in &self.fields {
            if let Some(typed) = T::from_value(value) {
                function(key, typed);
            }
        }
        self
    }

    pub fn for_each_object<'a, F: FnMut(&'a str, &'a Object)>(&'a self, function: F) -> &'a Self {
        self.for_each_typed(function)
    }

    pub fn for_each_list<'a, F: FnMut(&'a str, &'a List)>(&'a self, function: F) -> &'a Self {
        self.for_each_typed(function)
    }

    pub fn for_each_string<'a, F: FnMut(&'a str, &'a str)>(&'a self, function: F) -> &'a Self {
        self.for_each_typed(function)
    }

    pub fn for_each_bool<'a, F: FnMut(&'a str, bool)>(&'a self, function: F) -> &'a Self {
        self.for_each_typed(function)
    }

    pub fn for_each_int<'a, F: FnMut(&'a str, i64)>(&'a self, function: F) -> &'a Self {
        self.for_each_typed(function)
    }

    pub fn for_each_float<'a, F: FnMut(&'a str, f64)>(&'a self, function: F) -> &'a Self {
        self.for_each_typed(function)
    }

    /// New object with the same keys mapped through `function`.
    pub fn map<F>(&self, mut function: F) -> Object
    where
        F: FnMut(&str, &Value) -> Value,
    {
        let mut mapped = Object::with_capacity(self.fields.len());
        for (key, value) in &self.fields {
            mapped.insert_checked(key.clone(), function(key, value));
        }
        mapped
    }

    /// Maps the entries that view as `T`; other entries are dropped.
    pub fn map_typed<'a, T, F>(&'a self, mut function: F) -> Object
    where
        T: FromValue<'a>,
        F: FnMut(&'a str, T) -> Value,
    {
        let mut mapped = Object::new();
        for (key, value) in &self.fields {
            if let Some(typed) = T::from_value(value) {
                mapped.insert_checked(key.clone(), function(key, typed));
            }
        }
        mapped
    }

    pub fn map_objects<'a, F: FnMut(&'a str, &'a Object) -> Value>(&'a self, function: F) -> Object {
        self.map_typed(function)
    }

    pub fn map_lists<'a, F: FnMut(&'a str, &'a List) -> Value>(&'a self, function: F) -> Object {
        self.map_typed(function)
    }

    pub fn map_strings<'a, F: FnMut(&'a str, &'a str) -> Value>(&'a self, function: F) -> Object {
        self.map_typed(function)
    }

    pub fn map_bools<'a, F: FnMut(&'a str, bool) -> Value>(&'a self, function: F) -> Object {
        self.map_typed(function)
    }

    pub fn map_ints<'a, F: FnMut(&'a str, i64) -> Value>(&'a self, function: F) -> Object {
        self.map_typed(function)
    }

    pub fn map_floats<'a, F: FnMut(&'a str, f64) -> Value>(&'a self, function: F) -> Object {
        self.map_typed(function)
    }

    pub fn filter<F>(&self, mut predicate: F) -> Object
    where
        F: FnMut(&str, &Value) -> bool,
    {
        let mut kept = Object::new();
        for (key, value) in &self.fields {
            if predicate(key, value) {
                kept.insert_checked(key.clone(), value.clone());
            }
        }
        kept
    }

    pub fn filter_typed<'a, T, F>(&'a self, mut predicate: F) -> Object
    where
        T: FromValue<'a>,
        F: FnMut(&'a str, T) -> bool,
    {
        let mut kept = Object::new();
        for (key, value) in &self.fields {
            if T::from_value(value).is_some_and(|typed| predicate(key, typed)) {
                kept.insert_checked(key.clone(), value.clone());
            }
        }
        kept
    }

    pub fn filter_objects<'a, F: FnMut(&'a str, &'a Object) -> bool>(&'a self, predicate: F) -> Object {
        self.filter_typed(predicate)
    }

    pub fn filter_lists<'a, F: FnMut(&'a str, &'a List) -> bool>(&'a self, predicate: F) -> Object {
        self.filter_typed(predicate)
    }

    pub fn filter_strings<'a, F: FnMut(&'a str, &'a str) -> bool>(&'a self, predicate: F) -> Object {
        self.filter_typed(predicate)
    }

    pub fn filter_bools<'a, F: FnMut(&'a str, bool) -> bool>(&'a self, predicate: F) -> Object {
        self.filter_typed(predicate)
    }

    pub fn filter_ints<'a, F: FnMut(&'a str, i64) -> bool>(&'a self, predicate: F) -> Object {
        self.filter_typed(predicate)
    }

    pub fn filter_floats<'a, F: FnMut(&'a str, f64) -> bool>(&'a self, predicate: F) -> Object {
        self.filter_typed(predicate)
    }

    pub fn reduce<A, F>(&self, initial: A, mut function: F) -> A
    where
        F: FnMut(A, &str, &Value) -> A,
    {
        self.fields
            .iter()
            .fold(initial, |acc, (key, value)| function(acc, key, value))
    }

    pub fn reduce_typed<'a, T, A, F>(&'a self, initial: A, mut function: F) -> A
    where
        T: FromValue<'a>,
        F: FnMut(A, &'a str, T) -> A,
    {
        self.fields.iter().fold(initial, |acc, (key, value)| {
            match T::from_value(value) {
                Some(typed) => function(acc, key, typed),
                None => acc,
            }
        })
    }

    pub fn reduce_strings<'a, F>(&'a self, initial: String, function: F) -> String
    where
        F: FnMut(String, &'a str, &'a str) -> String,
    {
        self.reduce_typed(initial, function)
    }

    pub fn reduce_ints<'a, F: FnMut(i64, &'a str, i64) -> i64>(&'a self, initial: i64, function: F) -> i64 {
        self.reduce_typed(initial, function)
    }

    pub fn reduce_floats<'a, F: FnMut(f64, &'a str, f64) -> f64>(&'a self, initial: f64, function: F) -> f64 {
        self.reduce_typed(initial, function)
    }
}

#[cfg(test)]
mod tests {
    use crate::value::Value;
    use crate::{list, object, Object};

    fn sample() -> Object {
        object! {
            "i" => 2,
            "f" => 0.5,
            "s" => "text",
            "b" => false,
            "o" => object! { "x" => 1 },
            "l" => list![1, 2],
            "n" => Value::Null,
            "j" => 5,
        }
    }

    #[rstest::rstest]
    fn test_for_each_typed_skips_other_variants() {
        let obj = sample();
        let mut ints = Vec::new();
        obj.for_each_int(|key, i| ints.push((key.to_string(), i)));
        ints.sort();
        assert_eq!(ints, vec![("i".to_string(), 2), ("j".to_string(), 5)]);

        let mut seen = 0;
        obj.for_each(|_, _| seen += 1);
        assert_eq!(seen, 8);

        let mut kinds = (0, 0, 0, 0, 0);
        obj.for_each_float(|_, _| kinds.0 += 1)
            .for_each_string(|_, _| kinds.1 += 1)
            .for_each_bool(|_, _| kinds.2 += 1)
            .for_each_object(|_, _| kinds.3 += 1)
            .for_each_list(|_, _| kinds.4 += 1);
        assert_eq!(kinds, (1, 1, 1, 1, 1));
    }

    #[rstest::rstest]
    fn test_map_keeps_keys() {
        let obj = object! { "a" => 1, "b" => 2 };
        let mapped = obj.map(|key, value| Value::from(format!("{key}{value}")));
        assert!(mapped.equals(&object! { "a" => "a1", "b" => "b2" }));
        assert_eq!(obj.get_int("a").unwrap(), 1);
    }

    #[rstest::rstest]
    fn test_typed_map_and_filter() {
        let obj = sample();
        let doubled = obj.map_ints(|_, i| Value::from(i * 2));
        assert!(doubled.equals(&object! { "i" => 4, "j" => 10 }));
        assert_eq!(obj.map_floats(|_, f| Value::from(f)).count(), 1);
        assert_eq!(obj.map_strings(|_, s| Value::from(s.len() as i64)).get_int("s").unwrap(), 4);
        assert_eq!(obj.map_objects(|_, o| Value::from(o.count() as i64)).count(), 1);
        assert_eq!(obj.map_lists(|_, l| Value::from(l.count() as i64)).get_int("l").unwrap(), 2);

        let big = obj.filter_ints(|_, i| i > 3);
        assert!(big.equals(&object! { "j" => 5 }));
        assert_eq!(obj.filter(|_, v| v.is_null()).count(), 1);
        assert_eq!(obj.filter_strings(|_, s| s.starts_with('t')).count(), 1);
        assert_eq!(obj.filter_floats(|_, f| f > 1.0).count(), 0);
        assert_eq!(obj.filter_objects(|_, o| o.contains_key("x")).count(), 1);
        assert_eq!(obj.filter_lists(|key, _| key == "l").count(), 1);
        assert!(obj.map_bools(|_, b| Value::from(!b)).equals(&object! { "b" => true }));
        assert!(obj.filter_bools(|_, b| !b).equals(&object! { "b" => false }));
        assert!(obj.filter_bools(|_, b| b).is_empty());
    }

    #[rstest::rstest]
    fn test_reduce_family() {
        let obj = sample();
        assert_eq!(obj.reduce(0, |acc, _, _| acc + 1), 8);
        assert_eq!(obj.reduce_ints(0, |acc, _, i| acc + i), 7);
        assert_eq!(obj.reduce_floats(0.0, |acc, _, f| acc + f), 0.5);
        assert_eq!(
            obj.reduce_strings(String::new(), |acc, key, s| acc + key + s),
            "stext"
        );
    }
}
