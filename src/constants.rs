pub const DEFAULT_INDENT: usize = 2;

pub const MAX_INDENT: usize = 10;

pub const MAX_DEPTH: usize = 256;

/// Floats at or above this magnitude serialize in exponential notation.
pub const EXP_UPPER: f64 = 1e6;

/// Nonzero floats at or below this magnitude serialize in exponential notation.
pub const EXP_LOWER: f64 = 1e-6;

pub const OBJECT_SEPARATOR: u8 = b'.';

pub const LIST_SEPARATOR: u8 = b'#';

#[inline]
pub fn is_structural_char(ch: char) -> bool {
    matches!(ch, '[' | ']' | '{' | '}' | ':' | ',')
}
