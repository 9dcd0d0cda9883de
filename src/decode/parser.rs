use tracing::{debug, trace};

use crate::constants::is_structural_char;
use crate::error::ParseErrorKind;
use crate::list::List;
use crate::object::Object;
use crate::options::ParseOptions;
use crate::text::string::unquote;
use crate::value::Value;
use crate::{Error, Result};

use super::scanner::{is_whitespace, Cursor};
use super::token::classify;

/// Lexer state inside an object body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ObjectState {
    /// Waiting for the opening quote of a key, or `}`.
    KeyStart { after_comma: bool },
    /// Key read, waiting for `:`.
    AfterKey,
    /// Waiting for the value of the current key.
    Value,
    /// Value read, waiting for `,` or `}`.
    AfterValue { spaced: bool },
}

/// Lexer state inside a list body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListState {
    Element { after_comma: bool },
    AfterValue { spaced: bool },
}

pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
    options: &'a ParseOptions,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a [u8], options: &'a ParseOptions) -> Self {
        Self {
            cursor: Cursor::new(input),
            options,
            depth: 0,
        }
    }

    pub fn parse_object_root(mut self) -> Result<Object> {
        self.expect_root('{')?;
        let obj = self.parse_object()?;
        self.finish()?;
        Ok(obj)
    }

    pub fn parse_list_root(mut self) -> Result<List> {
        self.expect_root('[')?;
        let list = self.parse_list()?;
        self.finish()?;
        Ok(list)
    }

    fn expect_root(&mut self, open: char) -> Result<()> {
        self.cursor.skip_whitespace()?;
        match self.cursor.peek()? {
            Some(ch) if ch == open => Ok(()),
            Some(other) => Err(self.unexpected(&format!("'{open}'"), other)),
            None => Err(self
                .cursor
                .error(ParseErrorKind::UnexpectedToken, format!("expecting '{open}'"))),
        }
    }

    /// Anything after the root container is an error in strict mode and is
    /// ignored when repairing.
    fn finish(&mut self) -> Result<()> {
        self.cursor.skip_whitespace()?;
        if let Some(ch) = self.cursor.peek()? {
            if !self.options.is_repair() {
                return Err(self.unexpected("end of input", ch));
            }
            debug!(line = self.cursor.line(), "ignoring trailing content after root");
        }
        Ok(())
    }

    fn enter(&mut self, kind: &'static str) -> Result<()> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(self.cursor.error(
                ParseErrorKind::DepthLimitExceeded,
                format!("nesting deeper than {} levels", self.options.max_depth),
            ));
        }
        trace!(kind, depth = self.depth, line = self.cursor.line(), "enter container");
        Ok(())
    }

    fn leave(&mut self, kind: &'static str) {
        trace!(kind, depth = self.depth, line = self.cursor.line(), "leave container");
        self.depth -= 1;
    }

    fn parse_object(&mut self) -> Result<Object> {
        self.enter("object")?;
        self.cursor.bump('{');

        let mut obj = Object::new();
        let mut key = String::new();
        let mut state = ObjectState::KeyStart { after_comma: false };
        loop {
            let ch = self.next_char()?;
            match state {
                ObjectState::KeyStart { after_comma } => match ch {
                    c if is_whitespace(c) => self.cursor.bump(c),
                    '}' if !after_comma || self.options.is_repair() => {
                        if after_comma {
                            debug!(line = self.cursor.line(), "dropping trailing comma in object");
                        }
                        self.cursor.bump('}');
                        break;
                    }
                    '"' => {
                        self.cursor.bump('"');
                        key = self.read_string()?;
                        if key.is_empty() {
                            return Err(self
                                .cursor
                                .error(ParseErrorKind::InvalidValue, "object key cannot be empty"));
                        }
                        state = ObjectState::AfterKey;
                    }
                    other => return Err(self.unexpected("'\"'", other)),
                },
                ObjectState::AfterKey => match ch {
                    c if is_whitespace(c) => self.cursor.bump(c),
                    ':' => {
                        self.cursor.bump(':');
                        state = ObjectState::Value;
                    }
                    other => return Err(self.unexpected("':'", other)),
                },
                ObjectState::Value => {
                    let value = self.parse_value('}')?;
                    obj.insert_checked(std::mem::take(&mut key), value);
                    state = ObjectState::AfterValue { spaced: false };
                }
                ObjectState::AfterValue { spaced } => match ch {
                    c if is_whitespace(c) => {
                        self.cursor.bump(c);
                        state = ObjectState::AfterValue { spaced: true };
                    }
                    ',' => {
                        self.cursor.bump(',');
                        state = ObjectState::KeyStart { after_comma: true };
                    }
                    '}' => {
                        self.cursor.bump('}');
                        break;
                    }
                    '"' if spaced && self.options.is_repair() => {
                        debug!(line = self.cursor.line(), "accepting whitespace as object separator");
                        state = ObjectState::KeyStart { after_comma: false };
                    }
                    other => return Err(self.unexpected("',' or '}'", other)),
                },
            }
        }

        self.leave("object");
        Ok(obj)
    }

    fn parse_list(&mut self) -> Result<List> {
        self.enter("list")?;
        self.cursor.bump('[');

        let mut list = List::new();
        let mut state = ListState::Element { after_comma: false };
        loop {
            let ch = self.next_char()?;
            match state {
                ListState::Element { after_comma } => match ch {
                    c if is_whitespace(c) => self.cursor.bump(c),
                    ']' if !after_comma || self.options.is_repair() => {
                        if after_comma {
                            debug!(line = self.cursor.line(), "dropping trailing comma in list");
                        }
                        self.cursor.bump(']');
                        break;
                    }
                    _ => {
                        list.add(self.parse_value(']')?);
                        state = ListState::AfterValue { spaced: false };
                    }
                },
                ListState::AfterValue { spaced } => match ch {
                    c if is_whitespace(c) => {
                        self.cursor.bump(c);
                        state = ListState::AfterValue { spaced: true };
                    }
                    ',' => {
                        self.cursor.bump(',');
                        state = ListState::Element { after_comma: true };
                    }
                    ']' => {
                        self.cursor.bump(']');
                        break;
                    }
                    _ if spaced && self.options.is_repair() => {
                        debug!(line = self.cursor.line(), "accepting whitespace as list separator");
                        state = ListState::Element { after_comma: false };
                    }
                    other => return Err(self.unexpected("',' or ']'", other)),
                },
            }
        }

        self.leave("list");
        Ok(list)
    }

    /// One element: a string, a nested container or a bare token that ends
    /// at whitespace or a structural character.
    fn parse_value(&mut self, close: char) -> Result<Value> {
        self.cursor.skip_whitespace()?;
        match self.next_char()? {
            '"' => {
                self.cursor.bump('"');
                Ok(Value::String(self.read_string()?))
            }
            '{' => Ok(Value::Object(self.parse_object()?)),
            '[' => Ok(Value::List(self.parse_list()?)),
            ch if ch == ',' || ch == close || is_structural_char(ch) => {
                Err(self.unexpected("a value", ch))
            }
            _ => self.read_bare(),
        }
    }

    /// Reads a quoted string body after the opening quote. Escapes are kept
    /// verbatim (`\` plus the next character) and resolved in one pass once
    /// the closing quote is seen.
    fn read_string(&mut self) -> Result<String> {
        let start_line = self.cursor.line();
        let mut raw = String::new();
        loop {
            raw.push_str(self.cursor.take_string_run()?);
            match self.cursor.advance()? {
                Some('"') => break,
                Some('\\') => {
                    let escaped = self.next_char()?;
                    self.cursor.bump(escaped);
                    raw.push('\\');
                    raw.push(escaped);
                }
                Some(other) => raw.push(other),
                None => return Err(self.end_of_input()),
            }
        }
        unquote(&raw).map_err(|message| Error::parse(ParseErrorKind::InvalidValue, start_line, message))
    }

    fn read_bare(&mut self) -> Result<Value> {
        let mut token = String::new();
        while let Some(ch) = self.cursor.peek()? {
            if is_whitespace(ch) || is_structural_char(ch) {
                break;
            }
            token.push(ch);
            self.cursor.bump(ch);
        }
        classify(&token).ok_or_else(|| {
            self.cursor
                .error(ParseErrorKind::InvalidValue, format!("invalid value '{token}'"))
        })
    }

    fn next_char(&self) -> Result<char> {
        self.cursor.peek()?.ok_or_else(|| self.end_of_input())
    }

    fn end_of_input(&self) -> Error {
        self.cursor.error(
            ParseErrorKind::UnexpectedEndOfInput,
            "input ended before the container was closed",
        )
    }

    fn unexpected(&self, expected: &str, found: char) -> Error {
        self.cursor.error(
            ParseErrorKind::UnexpectedToken,
            format!("expecting {expected}, got '{found}'"),
        )
    }
}
