use memchr::{memchr2, memchr_iter};

use crate::error::ParseErrorKind;
use crate::Error;

/// Byte cursor over the raw input that decodes one UTF-8 scalar at a time
/// and tracks the 1-based line for diagnostics.
pub(crate) struct Cursor<'a> {
    input: &'a [u8],
    position: usize,
    line: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            position: 0,
            line: 1,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn error(&self, kind: ParseErrorKind, message: impl Into<String>) -> Error {
        Error::parse(kind, self.line, message)
    }

    pub fn peek(&self) -> Result<Option<char>, Error> {
        let Some(&lead) = self.input.get(self.position) else {
            return Ok(None);
        };
        if lead.is_ascii() {
            return Ok(Some(lead as char));
        }
        let width = match lead {
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return Err(self.invalid_encoding(lead)),
        };
        self.input
            .get(self.position..self.position + width)
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
            .and_then(|s| s.chars().next())
            .map(Some)
            .ok_or_else(|| self.invalid_encoding(lead))
    }

    /// Consumes `ch`, which must be the character last returned by `peek`.
    pub fn bump(&mut self, ch: char) {
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
        }
    }

    pub fn advance(&mut self) -> Result<Option<char>, Error> {
        let next = self.peek()?;
        if let Some(ch) = next {
            self.bump(ch);
        }
        Ok(next)
    }

    /// Skips JSON whitespace and reports whether anything was skipped.
    pub fn skip_whitespace(&mut self) -> Result<bool, Error> {
        let start = self.position;
        while let Some(ch) = self.peek()? {
            if !is_whitespace(ch) {
                break;
            }
            self.bump(ch);
        }
        Ok(self.position > start)
    }

    /// Takes the run of string-body bytes up to the next `"` or `\`,
    /// validating it as UTF-8 in one pass.
    pub fn take_string_run(&mut self) -> Result<&'a str, Error> {
        let rest = &self.input[self.position..];
        let len = memchr2(b'"', b'\\', rest).unwrap_or(rest.len());
        let run = &rest[..len];
        match std::str::from_utf8(run) {
            Ok(text) => {
                self.line += memchr_iter(b'\n', run).count();
                self.position += len;
                Ok(text)
            }
            Err(err) => {
                let valid = err.valid_up_to();
                self.line += memchr_iter(b'\n', &run[..valid]).count();
                self.position += valid;
                Err(self.invalid_encoding(run[valid]))
            }
        }
    }

    fn invalid_encoding(&self, byte: u8) -> Error {
        self.error(
            ParseErrorKind::InvalidEncoding,
            format!("invalid UTF-8 sequence starting with byte 0x{byte:02x}"),
        )
    }
}

#[inline]
pub(crate) fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}
