use std::fmt;

use thiserror::Error;

use crate::value::Type;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    InvalidEncoding,
    InvalidValue,
    UnexpectedToken,
    UnexpectedEndOfInput,
    DepthLimitExceeded,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ParseErrorKind::InvalidEncoding => "invalid encoding",
            ParseErrorKind::InvalidValue => "invalid value",
            ParseErrorKind::UnexpectedToken => "unexpected token",
            ParseErrorKind::UnexpectedEndOfInput => "unexpected end of input",
            ParseErrorKind::DepthLimitExceeded => "depth limit exceeded",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: Type, found: Type },

    #[error("index {index} out of range with count {count}")]
    IndexOutOfRange { index: isize, count: usize },

    #[error("key '{0}' not found")]
    KeyNotFound(String),

    #[error("invalid range {start}..{end} with count {count}")]
    InvalidRange {
        start: isize,
        end: isize,
        count: usize,
    },

    #[error("object fields have to be set as key-value pairs, got {0} arguments")]
    OddArgumentCount(usize),

    #[error("object key has to be a non-empty string")]
    InvalidKey,

    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    #[error("invalid indentation {0}, expected 0..=10")]
    InvalidIndentation(usize),

    #[error("'{path}' is not a valid tree form: {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("operation requires a non-empty list")]
    EmptyList,

    /// Parser failure. `line` is 1-based.
    #[error("not a valid JSON - {kind} at line {line}: {message}")]
    Parse {
        kind: ParseErrorKind,
        line: usize,
        message: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn parse(kind: ParseErrorKind, line: usize, message: impl Into<String>) -> Self {
        Error::Parse {
            kind,
            line,
            message: message.into(),
        }
    }

    pub fn type_mismatch(expected: Type, found: Type) -> Self {
        Error::TypeMismatch { expected, found }
    }

    pub fn index_out_of_range(index: isize, count: usize) -> Self {
        Error::IndexOutOfRange { index, count }
    }

    pub fn invalid_path(path: impl Into<String>, reason: &'static str) -> Self {
        Error::InvalidPath {
            path: path.into(),
            reason,
        }
    }

    /// Parser error kind, if this is a parse failure.
    pub fn parse_kind(&self) -> Option<ParseErrorKind> {
        match self {
            Error::Parse { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// 1-based line of a parse failure.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Parse { line, .. } => Some(*line),
            _ => None,
        }
    }
}
