use crate::list::List;
use crate::object::Object;
use crate::value::{Type, Value};
use crate::Result;

/// Operations shared by every container.
///
/// Custom container types hold a [`List`] or [`Object`], implement this
/// trait by delegating to it and override only what they need. The trait
/// is object safe, so `&dyn Container` works wherever the concrete kind
/// does not matter.
///
/// ```
/// use anytype::{list, Container, List, Result, Type, Value};
///
/// struct Stack(List);
///
/// impl Container for Stack {
///     fn kind(&self) -> Type { Type::List }
///     fn count(&self) -> usize { self.0.count() }
///     fn clear(&mut self) { self.0.clear(); }
///     fn to_json_string(&self) -> String { self.0.to_json_string() }
///     fn format_string(&self, indent: usize) -> Result<String> { self.0.format_string(indent) }
///     fn get_tf(&self, path: &str) -> Result<&Value> { self.0.get_tf(path) }
///     fn set_tf(&mut self, path: &str, value: Value) -> Result<()> { self.0.set_tf(path, value).map(|_| ()) }
///     fn unset_tf(&mut self, path: &str) -> Result<()> { self.0.unset_tf(path).map(|_| ()) }
///     fn to_value(&self) -> Value { Value::List(self.0.clone()) }
/// }
///
/// let stack = Stack(list![1, 2]);
/// let container: &dyn Container = &stack;
/// assert_eq!(container.type_of_tf("#1"), Type::Int);
/// ```
pub trait Container {
    /// `Type::List` or `Type::Object`.
    fn kind(&self) -> Type;

    fn count(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    fn clear(&mut self);

    fn to_json_string(&self) -> String;

    fn format_string(&self, indent: usize) -> Result<String>;

    fn get_tf(&self, path: &str) -> Result<&Value>;

    fn set_tf(&mut self, path: &str, value: Value) -> Result<()>;

    fn unset_tf(&mut self, path: &str) -> Result<()>;

    fn type_of_tf(&self, path: &str) -> Type {
        self.get_tf(path).map_or(Type::Undefined, Value::type_of)
    }

    /// Deep copy of the container as a value.
    fn to_value(&self) -> Value;
}

macro_rules! delegate_container {
    ($container:ty, $kind:expr, $variant:path) => {
        impl Container for $container {
            fn kind(&self) -> Type {
                $kind
            }

            fn count(&self) -> usize {
                <$container>::count(self)
            }

            fn is_empty(&self) -> bool {
                <$container>::is_empty(self)
            }

            fn clear(&mut self) {
                <$container>::clear(self);
            }

            fn to_json_string(&self) -> String {
                <$container>::to_json_string(self)
            }

            fn format_string(&self, indent: usize) -> Result<String> {
                <$container>::format_string(self, indent)
            }

            fn get_tf(&self, path: &str) -> Result<&Value> {
                <$container>::get_tf(self, path)
            }

            fn set_tf(&mut self, path: &str, value: Value) -> Result<()> {
                <$container>::set_tf(self, path, value).map(|_| ())
            }

            fn unset_tf(&mut self, path: &str) -> Result<()> {
                <$container>::unset_tf(self, path).map(|_| ())
            }

            fn type_of_tf(&self, path: &str) -> Type {
                <$container>::type_of_tf(self, path)
            }

            fn to_value(&self) -> Value {
                $variant(self.clone())
            }
        }
    };
}

delegate_container!(List, Type::List, Value::List);
delegate_container!(Object, Type::Object, Value::Object);
