mod writer;

use std::io::Write;

use crate::{list::List, object::Object, options::Indent, value::Value, Result};

use writer::Writer;

/// Compact JSON text for any value.
///
/// ```
/// use anytype::{list, Value};
///
/// let value = Value::from(list![1, 2.0, "three"]);
/// assert_eq!(anytype::encode::to_string(&value), r#"[1,2.0,"three"]"#);
/// ```
pub fn to_string(value: &Value) -> String {
    let mut writer = Writer::compact();
    writer.write_value(value, 0);
    writer.finish()
}

/// Pretty JSON text with `indent` spaces per nesting level.
pub fn to_string_pretty(value: &Value, indent: Indent) -> String {
    let mut writer = Writer::pretty(indent);
    writer.write_value(value, 0);
    writer.finish()
}

pub fn list_to_string(list: &List) -> String {
    let mut writer = Writer::compact();
    writer.write_list(list, 0);
    writer.finish()
}

pub fn object_to_string(obj: &Object) -> String {
    let mut writer = Writer::compact();
    writer.write_object(obj, 0);
    writer.finish()
}

pub fn format_list(list: &List, indent: Indent) -> String {
    let mut writer = Writer::pretty(indent);
    writer.write_list(list, 0);
    writer.finish()
}

pub fn format_object(obj: &Object, indent: Indent) -> String {
    let mut writer = Writer::pretty(indent);
    writer.write_object(obj, 0);
    writer.finish()
}

/// Writes `value` to `out`, pretty-printed when `indent` is given.
pub fn to_writer<W: Write>(mut out: W, value: &Value, indent: Option<Indent>) -> Result<()> {
    let text = match indent {
        Some(indent) => to_string_pretty(value, indent),
        None => to_string(value),
    };
    out.write_all(text.as_bytes())?;
    Ok(())
}
