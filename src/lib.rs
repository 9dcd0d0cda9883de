//! Dynamic JSON-compatible containers.
//!
//! [`List`] and [`Object`] hold tagged [`Value`]s, parse from and serialize
//! to JSON text, and address nested data through tree-form paths such as
//! `.users#0.name`.
//!
//! ```
//! use anytype::{parse_object, Type};
//!
//! let mut config = parse_object(r#"{"servers": [{"port": 80}]}"#).unwrap();
//! config.set_tf(".servers#0.port", 8080).unwrap();
//! config.set_tf(".servers#1.port", 8081).unwrap();
//! assert_eq!(config.type_of_tf(".servers#1.port"), Type::Int);
//! assert_eq!(
//!     config.to_json_string(),
//!     r#"{"servers":[{"port":8080},{"port":8081}]}"#
//! );
//! ```

pub mod constants;
pub mod container;
pub mod decode;
pub mod encode;
pub mod error;
pub mod list;
pub mod num;
pub mod object;
pub mod options;
mod parallel;
mod serde;
pub mod text;
pub mod tree;
pub mod value;

use std::io::Read;
use std::path::Path;

pub use crate::container::Container;
pub use crate::error::{Error, ParseErrorKind};
pub use crate::list::List;
pub use crate::object::Object;
pub use crate::options::{Indent, ParseMode, ParseOptions};
pub use crate::value::{FromValue, Type, Value};

pub type Result<T> = std::result::Result<T, Error>;

/// Parses `input` as a JSON object in strict mode.
pub fn parse_object(input: &str) -> Result<Object> {
    parse_object_with_options(input, &ParseOptions::default())
}

pub fn parse_object_with_options(input: &str, options: &ParseOptions) -> Result<Object> {
    decode::object_from_str(input, options)
}

/// Parses `input` as a JSON array in strict mode.
pub fn parse_list(input: &str) -> Result<List> {
    parse_list_with_options(input, &ParseOptions::default())
}

pub fn parse_list_with_options(input: &str, options: &ParseOptions) -> Result<List> {
    decode::list_from_str(input, options)
}

/// Parses raw bytes as an object. Bytes that are not UTF-8 fail with
/// [`ParseErrorKind::InvalidEncoding`].
pub fn object_from_slice(input: &[u8]) -> Result<Object> {
    object_from_slice_with_options(input, &ParseOptions::default())
}

pub fn object_from_slice_with_options(input: &[u8], options: &ParseOptions) -> Result<Object> {
    decode::object_from_slice(input, options)
}

pub fn list_from_slice(input: &[u8]) -> Result<List> {
    list_from_slice_with_options(input, &ParseOptions::default())
}

pub fn list_from_slice_with_options(input: &[u8], options: &ParseOptions) -> Result<List> {
    decode::list_from_slice(input, options)
}

pub fn object_from_reader<R: Read>(reader: R) -> Result<Object> {
    decode::object_from_reader(reader, &ParseOptions::default())
}

pub fn list_from_reader<R: Read>(reader: R) -> Result<List> {
    decode::list_from_reader(reader, &ParseOptions::default())
}

/// Reads and parses a JSON object file.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Object> {
    decode::parse_file(path, &ParseOptions::default())
}

/// Builds a [`List`] from any values convertible into [`Value`].
///
/// ```
/// use anytype::list;
///
/// let mixed = list![1, "two", 3.0, false];
/// assert_eq!(mixed.to_json_string(), r#"[1,"two",3.0,false]"#);
/// assert!(list![].is_empty());
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::List::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::List::from_values(vec![$($crate::Value::from($item)),+])
    };
}

/// Builds an [`Object`] from `key => value` pairs. A repeated key keeps the
/// last value.
///
/// # Panics
///
/// Panics when a key is empty. Use [`Object::set`] or [`Object::from_pairs`]
/// for keys that are not known to be valid.
///
/// ```
/// use anytype::{list, object};
///
/// let user = object! { "name" => "ada", "tags" => list!["x"] };
/// assert_eq!(user.to_json_string(), r#"{"name":"ada","tags":["x"]}"#);
/// ```
#[macro_export]
macro_rules! object {
    () => {
        $crate::Object::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut object = $crate::Object::new();
        $(
            if let Err(err) = object.set($key, $value) {
                panic!("object!: {}", err);
            }
        )+
        object
    }};
}
