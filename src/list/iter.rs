//! Iteration and transform family for [`List`].
//!
//! Every typed variant is a thin wrapper over one generic primitive filtered
//! by a [`FromValue`] view; elements of other variants are skipped silently.
//! `map*` and `filter*` always build a new list.

use super::List;
use crate::object::Object;
use crate::value::{FromValue, Value};

impl List {
    /// Visits every element in index order.
    pub fn for_each<F>(&self, mut function: F) -> &Self
    where
        F: FnMut(usize, &Value),
    {
        for (index, item) in self.items.iter().enumerate() {
            function(index, item);
        }
        self
    }

    pub fn for_each_value<F>(&self, mut function: F) -> &Self
    where
        F: FnMut(&Value),
    {
        self.for_each(|_, item| function(item))
    }

    /// Visits only the elements that view as `T`.
    pub fn for_each_typed<'a, T, F>(&'a self, mut function: F) -> &'a Self
    where
        T: FromValue<'a>,
        F: FnMut(T),
    {
        for item in &self.items {
            if let Some(typed) = T::from_value(item) {
                function(typed);
            }
        }
        self
    }

    pub fn for_each_object<'a, F: FnMut(&'a Object)>(&'a self, function: F) -> &'a Self {
        self.for_each_typed(function)
    }

    pub fn for_each_list<'a, F: FnMut(&'a List)>(&'a self, function: F) -> &'a Self {
        self.for_each_typed(function)
    }

    pub fn for_each_string<'a, F: FnMut(&'a str)>(&'a self, function: F) -> &'a Self {
        self.for_each_typed(function)
    }

    pub fn for_each_bool<F: FnMut(bool)>(&self, function: F) -> &Self {
        self.for_each_typed(function)
    }

    pub fn for_each_int<F: FnMut(i64)>(&self, function: F) -> &Self {
        self.for_each_typed(function)
    }

    pub fn for_each_float<F: FnMut(f64)>(&self, function: F) -> &Self {
        self.for_each_typed(function)
    }

    pub fn map<F>(&self, mut function: F) -> List
    where
        F: FnMut(usize, &Value) -> Value,
    {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| function(index, item))
            .collect()
    }

    pub fn map_values<F>(&self, mut function: F) -> List
    where
        F: FnMut(&Value) -> Value,
    {
        self.map(|_, item| function(item))
    }

    /// Maps the elements that view as `T`; other elements are dropped.
    pub fn map_typed<'a, T, F>(&'a self, mut function: F) -> List
    where
        T: FromValue<'a>,
        F: FnMut(T) -> Value,
    {
        self.items
            .iter()
            .filter_map(T::from_value)
            .map(&mut function)
            .collect()
    }

    pub fn map_objects<'a, F: FnMut(&'a Object) -> Value>(&'a self, function: F) -> List {
        self.map_typed(function)
    }

    pub fn map_lists<'a, F: FnMut(&'a List) -> Value>(&'a self, function: F) -> List {
        self.map_typed(function)
    }

    pub fn map_strings<'a, F: FnMut(&'a str) -> Value>(&'a self, function: F) -> List {
        self.map_typed(function)
    }

    pub fn map_bools<F: FnMut(bool) -> Value>(&self, function: F) -> List {
        self.map_typed(function)
    }

    pub fn map_ints<F: FnMut(i64) -> Value>(&self, function: F) -> List {
        self.map_typed(function)
    }

    pub fn map_floats<F: FnMut(f64) -> Value>(&self, function: F) -> List {
        self.map_typed(function)
    }

    pub fn filter<F>(&self, mut predicate: F) -> List
    where
        F: FnMut(&Value) -> bool,
    {
        self.items
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }

    /// Keeps the elements that view as `T` and satisfy `predicate`.
    pub fn filter_typed<'a, T, F>(&'a self, mut predicate: F) -> List
    where
        T: FromValue<'a>,
        F: FnMut(T) -> bool,
    {
        self.items
            .iter()
            .filter(|item| T::from_value(*item).is_some_and(&mut predicate))
            .cloned()
            .collect()
    }

    pub fn filter_objects<'a, F: FnMut(&'a Object) -> bool>(&'a self, predicate: F) -> List {
        self.filter_typed(predicate)
    }

    pub fn filter_lists<'a, F: FnMut(&'a List) -> bool>(&'a self, predicate: F) -> List {
        self.filter_typed(predicate)
    }

    pub fn filter_strings<'a, F: FnMut(&'a str) -> bool>(&'a self, predicate: F) -> List {
        self.filter_typed(predicate)
    }

    pub fn filter_bools<F: FnMut(bool) -> bool>(&self, predicate: F) -> List {
        self.filter_typed(predicate)
    }

    pub fn filter_ints<F: FnMut(i64) -> bool>(&self, predicate: F) -> List {
        self.filter_typed(predicate)
    }

    pub fn filter_floats<F: FnMut(f64) -> bool>(&self, predicate: F) -> List {
        self.filter_typed(predicate)
    }

    pub fn reduce<A, F>(&self, initial: A, mut function: F) -> A
    where
        F: FnMut(A, &Value) -> A,
    {
        self.items
            .iter()
            .fold(initial, |acc, item| function(acc, item))
    }

    /// Folds over the elements that view as `T`.
    pub fn reduce_typed<'a, T, A, F>(&'a self, initial: A, mut function: F) -> A
    where
        T: FromValue<'a>,
        F: FnMut(A, T) -> A,
    {
        self.items
            .iter()
            .filter_map(T::from_value)
            .fold(initial, &mut function)
    }

    pub fn reduce_strings<F>(&self, initial: String, mut function: F) -> String
    where
        F: FnMut(String, &str) -> String,
    {
        self.reduce_typed::<&str, _, _>(initial, |acc, item| function(acc, item))
    }

    pub fn reduce_ints<F: FnMut(i64, i64) -> i64>(&self, initial: i64, function: F) -> i64 {
        self.reduce_typed(initial, function)
    }

    pub fn reduce_floats<F: FnMut(f64, f64) -> f64>(&self, initial: f64, function: F) -> f64 {
        self.reduce_typed(initial, function)
    }
}

#[cfg(test)]
mod tests {
    use crate::value::Value;
    use crate::{list, object, List};

    fn mixed() -> List {
        list![1, "a", 2.5, true, object! { "k" => 1 }, list![1], "b", 3, Value::Null]
    }

    #[rstest::rstest]
    fn test_for_each_visits_in_order() {
        let mut seen = Vec::new();
        mixed().for_each(|index, item| seen.push((index, item.type_of())));
        assert_eq!(seen.len(), 9);
        assert_eq!(seen[0].0, 0);
        assert_eq!(seen[8].0, 8);
    }

    #[rstest::rstest]
    fn test_typed_for_each_skips_other_variants() {
        let list = mixed();
        let mut strings = Vec::new();
        list.for_each_string(|s| strings.push(s.to_string()));
        assert_eq!(strings, vec!["a", "b"]);

        let mut ints = Vec::new();
        list.for_each_int(|i| ints.push(i));
        assert_eq!(ints, vec![1, 3]);

        let mut counts = (0, 0, 0, 0);
        list.for_each_float(|_| counts.0 += 1)
            .for_each_bool(|_| counts.1 += 1)
            .for_each_object(|_| counts.2 += 1)
            .for_each_list(|_| counts.3 += 1);
        assert_eq!(counts, (1, 1, 1, 1));
    }

    #[rstest::rstest]
    fn test_map_returns_new_list() {
        let list = list![1, 2, 3];
        let mapped = list.map(|index, item| Value::from(item.as_int().unwrap() + index as i64));
        assert_eq!(mapped.to_json_string(), "[1,3,5]");
        assert_eq!(list.to_json_string(), "[1,2,3]");
    }

    #[rstest::rstest]
    fn test_typed_map_drops_other_variants() {
        let list = mixed();
        assert_eq!(
            list.map_ints(|i| Value::from(i * 10)).to_json_string(),
            "[10,30]"
        );
        assert_eq!(
            list.map_strings(|s| Value::from(s.to_uppercase()))
                .to_json_string(),
            r#"["A","B"]"#
        );
        assert_eq!(
            list.map_floats(|f| Value::from(f * 2.0)).to_json_string(),
            "[5.0]"
        );
        assert_eq!(
            list.map_objects(|o| Value::from(o.count() as i64))
                .to_json_string(),
            "[1]"
        );
        assert_eq!(
            list.map_lists(|l| Value::from(l.count() as i64))
                .to_json_string(),
            "[1]"
        );
        assert_eq!(list.map_bools(|b| Value::from(!b)).to_json_string(), "[false]");
        assert_eq!(list.map_values(|v| Value::from(v.is_null())).count(), 9);
    }

    #[rstest::rstest]
    fn test_filter_family() {
        let list = mixed();
        assert_eq!(list.filter(Value::is_numeric).count(), 3);
        assert_eq!(list.filter_ints(|i| i > 1).to_json_string(), "[3]");
        assert_eq!(
            list.filter_strings(|s| s == "b").to_json_string(),
            r#"["b"]"#
        );
        assert_eq!(list.filter_floats(|f| f > 0.0).count(), 1);
        assert_eq!(list.filter_objects(|o| o.contains_key("k")).count(), 1);
        assert_eq!(list.filter_lists(|l| l.is_empty()).count(), 0);
        assert_eq!(list.filter_bools(|b| b).to_json_string(), "[true]");
        assert!(list.filter_bools(|b| !b).is_empty());
        assert_eq!(list.count(), 9);
    }

    #[rstest::rstest]
    fn test_reduce_family() {
        let list = mixed();
        let types = list.reduce(0usize, |acc, item| acc + usize::from(item.is_null()));
        assert_eq!(types, 1);
        assert_eq!(list.reduce_ints(0, |acc, i| acc + i), 4);
        assert_eq!(list.reduce_floats(1.0, |acc, f| acc * f), 2.5);
        assert_eq!(
            list.reduce_strings(String::new(), |acc, s| acc + s),
            "ab"
        );
    }
}
