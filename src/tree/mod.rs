//! Tree-form addressing: `.key` descends into an object field and `#index`
//! into a list element, so `.a#2.b` reads field `b` of the third element of
//! list `a`.
//!
//! Reads and removals fail on any unresolvable hop. Writes create missing
//! intermediate containers, replacing a slot that holds the wrong variant,
//! and `#count` as the final hop appends.

mod path;

use tracing::{debug, trace};

use crate::constants::{LIST_SEPARATOR, OBJECT_SEPARATOR};
use crate::list::List;
use crate::object::Object;
use crate::value::{Type, Value};
use crate::{Error, Result};

use path::{Segment, Segments};

/// A container that one path segment can be resolved against.
trait Node {
    fn kind(&self) -> Type;

    fn child(&self, segment: &Segment<'_>) -> Result<&Value>;

    fn child_mut(&mut self, segment: &Segment<'_>) -> Result<&mut Value>;

    /// Existing slot for `segment`, or a new `Null` slot when the key is
    /// missing or the index equals the count.
    fn slot(&mut self, segment: &Segment<'_>) -> Result<&mut Value>;

    /// Fails when a write through `segment` would be out of range.
    fn admits(&self, segment: &Segment<'_>) -> Result<()>;

    fn put(&mut self, segment: &Segment<'_>, value: Value) -> Result<()>;

    fn remove(&mut self, segment: &Segment<'_>) -> Result<()>;
}

impl Node for Object {
    fn kind(&self) -> Type {
        Type::Object
    }

    fn child(&self, segment: &Segment<'_>) -> Result<&Value> {
        self.get(key_of(self, segment)?)
    }

    fn child_mut(&mut self, segment: &Segment<'_>) -> Result<&mut Value> {
        let key = key_of(self, segment)?;
        self.get_mut(key)
    }

    fn slot(&mut self, segment: &Segment<'_>) -> Result<&mut Value> {
        let key = key_of(self, segment)?;
        if !self.contains_key(key) {
            self.set(key, Value::Null)?;
        }
        self.get_mut(key)
    }

    fn admits(&self, segment: &Segment<'_>) -> Result<()> {
        key_of(self, segment).map(drop)
    }

    fn put(&mut self, segment: &Segment<'_>, value: Value) -> Result<()> {
        let key = key_of(self, segment)?;
        self.set(key, value)?;
        Ok(())
    }

    fn remove(&mut self, segment: &Segment<'_>) -> Result<()> {
        let key = key_of(self, segment)?;
        self.unset(&[key])?;
        Ok(())
    }
}

impl Node for List {
    fn kind(&self) -> Type {
        Type::List
    }

    fn child(&self, segment: &Segment<'_>) -> Result<&Value> {
        self.get(index_of(self, segment)?)
    }

    fn child_mut(&mut self, segment: &Segment<'_>) -> Result<&mut Value> {
        let index = index_of(self, segment)?;
        self.get_mut(index)
    }

    fn slot(&mut self, segment: &Segment<'_>) -> Result<&mut Value> {
        let index = index_of(self, segment)?;
        if index == self.count() {
            self.add(Value::Null);
        }
        self.get_mut(index)
    }

    fn admits(&self, segment: &Segment<'_>) -> Result<()> {
        let index = index_of(self, segment)?;
        if index > self.count() {
            return Err(Error::index_out_of_range(index as isize, self.count()));
        }
        Ok(())
    }

    fn put(&mut self, segment: &Segment<'_>, value: Value) -> Result<()> {
        let index = index_of(self, segment)?;
        if index == self.count() {
            self.add(value);
        } else {
            self.replace(index, value)?;
        }
        Ok(())
    }

    fn remove(&mut self, segment: &Segment<'_>) -> Result<()> {
        let index = index_of(self, segment)?;
        self.delete(&[index])?;
        Ok(())
    }
}

fn key_of<'p>(node: &dyn Node, segment: &Segment<'p>) -> Result<&'p str> {
    match *segment {
        Segment::Key(key) => Ok(key),
        Segment::Index(_) => Err(Error::type_mismatch(Type::List, node.kind())),
    }
}

fn index_of(node: &dyn Node, segment: &Segment<'_>) -> Result<usize> {
    match *segment {
        Segment::Index(index) => Ok(index),
        Segment::Key(_) => Err(Error::type_mismatch(Type::Object, node.kind())),
    }
}

/// The container inside `value` that `next` has to be resolved against.
fn descend<'v>(value: &'v Value, next: &Segment<'_>) -> Result<&'v dyn Node> {
    match next {
        Segment::Key(_) => Ok(value.expect::<&Object>()?),
        Segment::Index(_) => Ok(value.expect::<&List>()?),
    }
}

fn descend_mut<'v>(value: &'v mut Value, next: &Segment<'_>) -> Result<&'v mut dyn Node> {
    match next {
        Segment::Key(_) => Ok(value.expect_object_mut()?),
        Segment::Index(_) => Ok(value.expect_list_mut()?),
    }
}

/// Replaces `slot` with an empty container when it cannot hold `next`.
fn vivify(slot: &mut Value, next: &Segment<'_>) {
    let fits = match next {
        Segment::Key(_) => slot.is_object(),
        Segment::Index(_) => slot.is_list(),
    };
    if !fits {
        debug!(replaced = %slot.type_of(), next = ?next, "creating intermediate container");
        *slot = match next {
            Segment::Key(_) => Value::Object(Object::new()),
            Segment::Index(_) => Value::List(List::new()),
        };
    }
}

fn resolve<'r>(root: &'r dyn Node, path: &str) -> Result<&'r Value> {
    let segments = path::parse(path, root_separator(root))?;
    let mut node = root;
    for pair in segments.windows(2) {
        trace!(segment = ?pair[0], "tree-form hop");
        let value = node.child(&pair[0])?;
        node = descend(value, &pair[1])?;
    }
    match segments.last() {
        Some(last) => node.child(last),
        None => Err(Error::invalid_path(path, "path is empty")),
    }
}

fn segments_of<'p>(root: &dyn Node, path: &'p str) -> Result<(Segments<'p>, Segment<'p>)> {
    let segments = path::parse(path, root_separator(root))?;
    match segments.last() {
        Some(&last) => Ok((segments, last)),
        None => Err(Error::invalid_path(path, "path is empty")),
    }
}

/// Walks every hop but the last and returns the container that holds the
/// final segment. With `create`, missing or mistyped slots are vivified.
fn resolve_parent<'r>(
    root: &'r mut dyn Node,
    segments: &[Segment<'_>],
    create: bool,
) -> Result<&'r mut dyn Node> {
    let mut node = root;
    for pair in segments.windows(2) {
        trace!(segment = ?pair[0], create, "tree-form hop");
        let slot = if create {
            let slot = node.slot(&pair[0])?;
            vivify(slot, &pair[1]);
            slot
        } else {
            node.child_mut(&pair[0])?
        };
        node = descend_mut(slot, &pair[1])?;
    }
    Ok(node)
}

/// Dry run of a write: every index hop has to be at most the count of the
/// list it lands in, where a list that will be vivified counts as empty.
/// Nothing is mutated, so a rejected `set_tf` leaves the tree as it was.
fn check_writable(root: &dyn Node, segments: &[Segment<'_>]) -> Result<()> {
    let mut node = Some(root);
    for (position, segment) in segments.iter().enumerate() {
        match node {
            Some(existing) => existing.admits(segment)?,
            None => {
                if let Segment::Index(index) = *segment {
                    if index > 0 {
                        return Err(Error::index_out_of_range(index as isize, 0));
                    }
                }
            }
        }
        node = match (node, segments.get(position + 1)) {
            (Some(existing), Some(next)) => existing
                .child(segment)
                .ok()
                .and_then(|value| descend(value, next).ok()),
            _ => None,
        };
    }
    Ok(())
}

fn root_separator(root: &dyn Node) -> u8 {
    match root.kind() {
        Type::List => LIST_SEPARATOR,
        _ => OBJECT_SEPARATOR,
    }
}

fn set_path(root: &mut dyn Node, path: &str, value: Value) -> Result<()> {
    let (segments, last) = segments_of(root, path)?;
    check_writable(root, &segments)?;
    resolve_parent(root, &segments, true)?.put(&last, value)
}

fn unset_path(root: &mut dyn Node, path: &str) -> Result<()> {
    let (segments, last) = segments_of(root, path)?;
    resolve_parent(root, &segments, false)?.remove(&last)
}

macro_rules! impl_tree_form {
    ($container:ty) => {
        impl $container {
            /// Value at a tree-form `path`.
            pub fn get_tf(&self, path: &str) -> Result<&Value> {
                resolve(self, path)
            }

            /// Stores `value` at `path`, creating intermediate containers.
            pub fn set_tf(&mut self, path: &str, value: impl Into<Value>) -> Result<&mut Self> {
                set_path(self, path, value.into())?;
                Ok(self)
            }

            pub fn unset_tf(&mut self, path: &str) -> Result<&mut Self> {
                unset_path(self, path)?;
                Ok(self)
            }

            /// Variant tag at `path`, or `Type::Undefined` when any hop fails.
            pub fn type_of_tf(&self, path: &str) -> Type {
                resolve(self, path).map_or(Type::Undefined, Value::type_of)
            }
        }
    };
}

impl_tree_form!(Object);
impl_tree_form!(List);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{list, object};

    fn sample() -> Object {
        object! {
            "a" => list![1, 2, object! { "b" => "deep" }],
            "c" => object! { "d" => list![list![true]] },
        }
    }

    #[rstest::rstest]
    #[case(".a#0", Value::from(1))]
    #[case(".a#2.b", Value::from("deep"))]
    #[case(".c.d#0#0", Value::from(true))]
    fn test_get_tf(#[case] path: &str, #[case] expected: Value) {
        assert_eq!(sample().get_tf(path).unwrap(), &expected);
    }

    #[rstest::rstest]
    fn test_get_tf_failures() {
        let obj = sample();
        assert!(matches!(obj.get_tf(".x"), Err(Error::KeyNotFound(_))));
        assert!(matches!(obj.get_tf(".a#9"), Err(Error::IndexOutOfRange { .. })));
        assert!(matches!(obj.get_tf(".a.b"), Err(Error::TypeMismatch { .. })));
        assert!(matches!(obj.get_tf("a"), Err(Error::InvalidPath { .. })));
    }

    #[rstest::rstest]
    fn test_type_of_tf_never_fails() {
        let obj = sample();
        assert_eq!(obj.type_of_tf(".a"), Type::List);
        assert_eq!(obj.type_of_tf(".a#2"), Type::Object);
        assert_eq!(obj.type_of_tf(".a#2.missing"), Type::Undefined);
        assert_eq!(obj.type_of_tf(".a#0.b"), Type::Undefined);
        assert_eq!(obj.type_of_tf(""), Type::Undefined);
    }

    #[rstest::rstest]
    fn test_set_tf_vivifies() {
        let mut obj = Object::new();
        obj.set_tf(".a.b#0.c", 5).unwrap();
        assert_eq!(obj.to_json_string(), r#"{"a":{"b":[{"c":5}]}}"#);
        assert_eq!(obj.get_tf(".a.b#0.c").unwrap(), &Value::from(5));
    }

    #[rstest::rstest]
    fn test_set_tf_replaces_wrong_variant() {
        let mut obj = object! { "a" => 1 };
        obj.set_tf(".a#0", "x").unwrap();
        assert_eq!(obj.to_json_string(), r#"{"a":["x"]}"#);
    }

    #[rstest::rstest]
    fn test_set_tf_list_bounds() {
        let mut list = list![1];
        list.set_tf("#0", 10).unwrap().set_tf("#1", 20).unwrap();
        assert_eq!(list.to_json_string(), "[10,20]");
        assert!(matches!(
            list.set_tf("#5", 0),
            Err(Error::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            list.set_tf("#5.a", 0),
            Err(Error::IndexOutOfRange { .. })
        ));
        assert_eq!(list.count(), 2);
    }

    #[rstest::rstest]
    #[case(".a#2")]
    #[case(".a#1.b")]
    #[case(".x.y#3")]
    #[case(".x#0#1")]
    #[case(".c.d#0#2")]
    #[case(".c.d#1.e#1")]
    fn test_rejected_set_tf_leaves_tree_untouched(#[case] path: &str) {
        let mut obj = object! {
            "a" => 1,
            "c" => object! { "d" => list![list![true]] },
        };
        let before = obj.clone();
        assert!(matches!(
            obj.set_tf(path, 5),
            Err(Error::IndexOutOfRange { .. })
        ));
        assert!(obj.equals(&before));
        assert_eq!(obj.to_json_string(), r#"{"a":1,"c":{"d":[[true]]}}"#);
    }

    #[rstest::rstest]
    fn test_set_tf_reports_count_of_existing_list() {
        let mut obj = object! { "c" => object! { "d" => list![list![true]] } };
        assert!(matches!(
            obj.set_tf(".c.d#0#4", 1),
            Err(Error::IndexOutOfRange { index: 4, count: 1 })
        ));
        assert!(matches!(
            obj.set_tf(".c.e#3", 1),
            Err(Error::IndexOutOfRange { index: 3, count: 0 })
        ));
        assert!(!obj.get_object("c").unwrap().contains_key("e"));
        obj.set_tf(".c.d#0#1", false).unwrap();
        assert_eq!(obj.to_json_string(), r#"{"c":{"d":[[true,false]]}}"#);
    }

    #[rstest::rstest]
    fn test_unset_tf() {
        let mut obj = sample();
        obj.unset_tf(".a#2.b").unwrap().unset_tf(".a#0").unwrap();
        assert_eq!(obj.get_tf(".a").unwrap().to_json_string(), "[2,{}]");
        assert!(matches!(obj.unset_tf(".a#5"), Err(Error::IndexOutOfRange { .. })));
        assert!(matches!(obj.unset_tf(".zzz.y"), Err(Error::KeyNotFound(_))));
        assert!(!obj.contains_key("zzz"));
    }
}
