use std::fmt;

/// Why a source line did not produce a statement.
///
/// Unmatched lines are never fatal: the parser records a `MatchError` and
/// moves on to the next line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchError {
    pub message: String,
    /// 1-based source line number.
    pub line: usize,
    /// 1-based column (in characters, within the trimmed line) where
    /// matching stopped.
    pub col: usize,
}

impl MatchError {
    pub(crate) fn new(msg: impl Into<String>, line: usize, col: usize) -> Self {
        Self { message: msg.into(), line, col }
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "eui line {}:{} skipped: {}", self.line, self.col, self.message)
    }
}

impl std::error::Error for MatchError {}
