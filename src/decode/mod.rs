mod parser;
mod scanner;
mod token;

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::list::List;
use crate::object::Object;
use crate::options::ParseOptions;
use crate::Result;

use parser::Parser;

pub fn object_from_slice(input: &[u8], options: &ParseOptions) -> Result<Object> {
    Parser::new(input, options).parse_object_root()
}

pub fn list_from_slice(input: &[u8], options: &ParseOptions) -> Result<List> {
    Parser::new(input, options).parse_list_root()
}

pub fn object_from_str(input: &str, options: &ParseOptions) -> Result<Object> {
    object_from_slice(input.as_bytes(), options)
}

pub fn list_from_str(input: &str, options: &ParseOptions) -> Result<List> {
    list_from_slice(input.as_bytes(), options)
}

/// Reads `reader` to the end, then parses the bytes as an object. Read
/// failures surface as `Error::Io`.
pub fn object_from_reader<R: Read>(mut reader: R, options: &ParseOptions) -> Result<Object> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    object_from_slice(&buf, options)
}

pub fn list_from_reader<R: Read>(mut reader: R, options: &ParseOptions) -> Result<List> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    list_from_slice(&buf, options)
}

/// Parses the file at `path` as an object.
pub fn parse_file(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Object> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    debug!(path = %path.display(), len = bytes.len(), "parsing file");
    object_from_slice(&bytes, options)
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor};

    use super::*;
    use crate::error::ParseErrorKind;
    use crate::Error;

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[rstest::rstest]
    fn test_from_reader() {
        let options = ParseOptions::default();
        let obj = object_from_reader(Cursor::new(br#"{"a":[1]}"#.to_vec()), &options).unwrap();
        assert_eq!(obj.get_list("a").unwrap().count(), 1);
        let list = list_from_reader(Cursor::new(b"[true]".to_vec()), &options).unwrap();
        assert!(list.get_bool(0).unwrap());
    }

    #[rstest::rstest]
    fn test_reader_failure_is_io() {
        let err = object_from_reader(FailingReader, &ParseOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[rstest::rstest]
    fn test_from_slice_checks_encoding() {
        let err = list_from_slice(b"[\"\xc3\"]", &ParseOptions::default()).unwrap_err();
        assert_eq!(err.parse_kind(), Some(ParseErrorKind::InvalidEncoding));
    }

    #[rstest::rstest]
    fn test_parse_file_missing_is_io() {
        let err = parse_file("/definitely/not/here.json", &ParseOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Io(ref io) if io.kind() == io::ErrorKind::NotFound));
    }
}
