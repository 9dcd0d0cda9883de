use crate::{
    list::List,
    num::number::{write_float_into, write_int_into},
    object::Object,
    options::Indent,
    text::string::escape_string_into,
    value::Value,
};

/// Byte buffer that renders a value graph as compact or pretty JSON.
pub(crate) struct Writer {
    buffer: Vec<u8>,
    pretty: bool,
    indent_unit: String,
    indent_cache: Vec<String>,
}

impl Writer {
    pub fn compact() -> Self {
        Self {
            buffer: Vec::new(),
            pretty: false,
            indent_unit: String::new(),
            indent_cache: vec![String::new()],
        }
    }

    pub fn pretty(indent: Indent) -> Self {
        Self {
            buffer: Vec::new(),
            pretty: true,
            indent_unit: " ".repeat(indent.get_spaces()),
            indent_cache: vec![String::new()],
        }
    }

    pub fn finish(self) -> String {
        match String::from_utf8(self.buffer) {
            Ok(text) => text,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        }
    }

    pub fn write_value(&mut self, value: &Value, depth: usize) {
        match value {
            Value::Null => self.buffer.extend_from_slice(b"null"),
            Value::Bool(true) => self.buffer.extend_from_slice(b"true"),
            Value::Bool(false) => self.buffer.extend_from_slice(b"false"),
            Value::Int(i) => write_int_into(&mut self.buffer, *i),
            Value::Float(f) => write_float_into(&mut self.buffer, *f),
            Value::String(s) => self.write_quoted_string(s),
            Value::List(list) => self.write_list(list, depth),
            Value::Object(obj) => self.write_object(obj, depth),
        }
    }

    pub fn write_list(&mut self, list: &List, depth: usize) {
        self.buffer.push(b'[');
        if !list.is_empty() {
            for (i, item) in list.iter().enumerate() {
                if i > 0 {
                    self.buffer.push(b',');
                }
                self.write_break(depth + 1);
                self.write_value(item, depth + 1);
            }
            self.write_break(depth);
        }
        self.buffer.push(b']');
    }

    pub fn write_object(&mut self, obj: &Object, depth: usize) {
        self.buffer.push(b'{');
        if !obj.is_empty() {
            for (i, (key, item)) in obj.iter().enumerate() {
                if i > 0 {
                    self.buffer.push(b',');
                }
                self.write_break(depth + 1);
                self.write_quoted_string(key);
                self.buffer.push(b':');
                if self.pretty {
                    self.buffer.push(b' ');
                }
                self.write_value(item, depth + 1);
            }
            self.write_break(depth);
        }
        self.buffer.push(b'}');
    }

    pub fn write_quoted_string(&mut self, s: &str) {
        self.buffer.push(b'"');
        escape_string_into(&mut self.buffer, s);
        self.buffer.push(b'"');
    }

    /// Newline plus indentation in pretty mode; nothing when compact.
    fn write_break(&mut self, depth: usize) {
        if !self.pretty {
            return;
        }
        self.buffer.push(b'\n');
        self.write_indent(depth);
    }

    fn write_indent(&mut self, depth: usize) {
        if depth == 0 || self.indent_unit.is_empty() {
            return;
        }
        if depth >= self.indent_cache.len() {
            self.extend_indent_cache(depth);
        }
        self.buffer
            .extend_from_slice(self.indent_cache[depth].as_bytes());
    }

    fn extend_indent_cache(&mut self, depth: usize) {
        while self.indent_cache.len() <= depth {
            let next = match self.indent_cache.last() {
                Some(prev) => {
                    let mut s = String::with_capacity(prev.len() + self.indent_unit.len());
                    s.push_str(prev);
                    s.push_str(&self.indent_unit);
                    s
                }
                None => String::new(),
            };
            self.indent_cache.push(next);
        }
    }
}
