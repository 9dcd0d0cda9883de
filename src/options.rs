use crate::constants::{DEFAULT_INDENT, MAX_DEPTH, MAX_INDENT};
use crate::{Error, Result};

/// How the parser treats a missing `,` between adjacent elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Adjacent elements must be separated by a comma.
    #[default]
    Strict,
    /// Whitespace alone is accepted as a separator, e.g. `[1 2]` or `{"a":{} "b":2}`.
    Repair,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(usize);

impl Indent {
    pub fn new(spaces: usize) -> Result<Self> {
        if spaces > MAX_INDENT {
            return Err(Error::InvalidIndentation(spaces));
        }
        Ok(Indent(spaces))
    }

    pub fn get_spaces(self) -> usize {
        self.0
    }
}

impl Default for Indent {
    fn default() -> Self {
        Indent(DEFAULT_INDENT)
    }
}

#[derive(Debug, Clone)]
pub struct ParseOptions {
    pub mode: ParseMode,
    pub max_depth: usize,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_repair(self, repair: bool) -> Self {
        self.with_mode(if repair {
            ParseMode::Repair
        } else {
            ParseMode::Strict
        })
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn is_repair(&self) -> bool {
        self.mode == ParseMode::Repair
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            mode: ParseMode::default(),
            max_depth: MAX_DEPTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    #[case(0)]
    #[case(2)]
    #[case(10)]
    fn test_indent_accepts_valid_range(#[case] spaces: usize) {
        assert_eq!(Indent::new(spaces).unwrap().get_spaces(), spaces);
    }

    #[rstest::rstest]
    fn test_indent_rejects_above_ten() {
        assert!(matches!(Indent::new(11), Err(Error::InvalidIndentation(11))));
    }

    #[rstest::rstest]
    fn test_parse_options_builder() {
        let options = ParseOptions::new().with_repair(true).with_max_depth(8);
        assert!(options.is_repair());
        assert_eq!(options.max_depth, 8);
        assert_eq!(ParseOptions::default().mode, ParseMode::Strict);
    }
}
