use memchr::memchr2;
use smallvec::SmallVec;

use crate::constants::{LIST_SEPARATOR, OBJECT_SEPARATOR};
use crate::{Error, Result};

/// One hop of a tree-form path: `.key` into an object or `#index` into a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'p> {
    Key(&'p str),
    Index(usize),
}

pub(crate) type Segments<'p> = SmallVec<[Segment<'p>; 8]>;

/// Splits `path` at every `.` or `#`. The path has to start with `root`,
/// the separator matching the kind of container it is resolved against.
pub(crate) fn parse(path: &str, root: u8) -> Result<Segments<'_>> {
    let bytes = path.as_bytes();
    match bytes.first() {
        None => return Err(Error::invalid_path(path, "path is empty")),
        Some(&first) if first != root => {
            return Err(Error::invalid_path(
                path,
                if root == OBJECT_SEPARATOR {
                    "an object path has to start with '.'"
                } else {
                    "a list path has to start with '#'"
                },
            ))
        }
        Some(_) => {}
    }

    let mut segments = Segments::new();
    let mut start = 0;
    while start < bytes.len() {
        let separator = bytes[start];
        let body_start = start + 1;
        let end = memchr2(OBJECT_SEPARATOR, LIST_SEPARATOR, &bytes[body_start..])
            .map_or(bytes.len(), |offset| body_start + offset);
        let body = &path[body_start..end];
        if body.is_empty() {
            return Err(Error::invalid_path(path, "empty segment"));
        }
        let segment = if separator == OBJECT_SEPARATOR {
            Segment::Key(body)
        } else {
            let index = body
                .parse::<usize>()
                .map_err(|_| Error::invalid_path(path, "list index has to be a non-negative integer"))?;
            Segment::Index(index)
        };
        segments.push(segment);
        start = end;
    }
    Ok(segments)
}
