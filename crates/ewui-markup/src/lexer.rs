// ── Line ──────────────────────────────────────────────────────────────────

/// Statement terminator stripped from the end of every line.
pub const TERMINATOR: char = ';';

/// One non-empty source line, trimmed and stripped of a single trailing
/// terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'s> {
    /// 1-based line number in the source text.
    pub number: usize,
    pub text: &'s str,
}

/// Split `src` into statement lines.
///
/// Blank lines, and lines that are empty once the terminator is removed, are
/// dropped. Numbering follows the source text so diagnostics point at
/// the right place.
pub fn lines(src: &str) -> impl Iterator<Item = Line<'_>> {
    src.lines().enumerate().filter_map(|(i, raw)| {
        let text = strip_terminator(raw.trim());
        (!text.is_empty()).then_some(Line { number: i + 1, text })
    })
}

fn strip_terminator(s: &str) -> &str {
    s.strip_suffix(TERMINATOR).map(str::trim_end).unwrap_or(s)
}

// ── Cursor ────────────────────────────────────────────────────────────────

/// Character cursor over a single line.
///
/// Every `eat_*`/`scan_*` method either consumes input and returns a value,
/// or leaves the position unchanged and returns `None`.
#[derive(Debug, Clone)]
pub struct Cursor<'s> {
    src: &'s str,
    pos: usize,
}

impl<'s> Cursor<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0 }
    }

    /// Byte offset into the line.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Rewind (or fast-forward) to a position previously returned by [`pos`](Self::pos).
    pub fn reset(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// 1-based character column of the current position.
    pub fn col(&self) -> usize {
        self.src[..self.pos].chars().count() + 1
    }

    pub fn rest(&self) -> &'s str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    pub fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    pub fn eat(&mut self, ch: char) -> bool {
        if self.peek() == Some(ch) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn eat_str(&mut self, s: &str) -> bool {
        if self.rest().starts_with(s) {
            self.pos += s.len();
            true
        } else {
            false
        }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'s str {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if pred(c)) {
            self.advance();
        }
        &self.src[start..self.pos]
    }

    /// Consume up to (not including) `end`. `None` if `end` never occurs.
    fn take_until(&mut self, end: char) -> Option<&'s str> {
        let len = self.rest().find(end)?;
        let s = &self.src[self.pos..self.pos + len];
        self.pos += len;
        Some(s)
    }

    /// `"..."` with no escapes. Empty content only when `allow_empty`.
    pub fn scan_quoted(&mut self, allow_empty: bool) -> Option<&'s str> {
        let start = self.pos;
        if self.eat('"') {
            if let Some(body) = self.take_until('"') {
                self.eat('"');
                if allow_empty || !body.is_empty() {
                    return Some(body);
                }
            }
        }
        self.pos = start;
        None
    }

    /// Base-10 integer with an optional leading `-`.
    pub fn scan_int(&mut self) -> Option<i64> {
        let start = self.pos;
        self.eat('-');
        let digits = self.take_while(|c| c.is_ascii_digit());
        let parsed = if digits.is_empty() {
            None
        } else {
            self.src[start..self.pos].parse::<i64>().ok()
        };
        if parsed.is_none() {
            self.pos = start;
        }
        parsed
    }

    /// Identifier: one or more alphanumerics or `_`.
    pub fn scan_ident(&mut self) -> Option<&'s str> {
        let word = self.take_while(|c| c.is_alphanumeric() || c == '_');
        (!word.is_empty()).then_some(word)
    }

    /// The first of `words` that the input starts with.
    pub fn scan_keyword(&mut self, words: &[&'static str]) -> Option<&'static str> {
        let word = words.iter().copied().find(|w| self.rest().starts_with(*w))?;
        self.pos += word.len();
        Some(word)
    }

    /// `[a, "b", c]`: everything up to the first `]`, split on commas, each
    /// element trimmed and unquoted. Blank elements are dropped; a quoted
    /// `""` is kept as an empty option.
    pub fn scan_list(&mut self) -> Option<Vec<String>> {
        let start = self.pos;
        if !self.eat('[') {
            return None;
        }
        let Some(body) = self.take_until(']') else {
            self.pos = start;
            return None;
        };
        self.eat(']');
        Some(
            body.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(|item| item.trim_matches('"').to_string())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_trimmed_and_numbered() {
        let got: Vec<_> = lines("\n  label=a;  \n\n;\nx;;\n").collect();
        assert_eq!(got, vec![
            Line { number: 2, text: "label=a" },
            Line { number: 5, text: "x;" },
        ]);
    }

    #[test]
    fn quoted_rejects_empty_unless_allowed() {
        let mut c = Cursor::new(r#""""#);
        assert_eq!(c.scan_quoted(false), None);
        assert_eq!(c.pos(), 0);
        assert_eq!(c.scan_quoted(true), Some(""));
    }

    #[test]
    fn unterminated_quote_rewinds() {
        let mut c = Cursor::new(r#""abc"#);
        assert_eq!(c.scan_quoted(false), None);
        assert_eq!(c.rest(), r#""abc"#);
    }

    #[test]
    fn ints() {
        assert_eq!(Cursor::new("42,").scan_int(), Some(42));
        assert_eq!(Cursor::new("-7").scan_int(), Some(-7));
        assert_eq!(Cursor::new("-").scan_int(), None);
        assert_eq!(Cursor::new("abc").scan_int(), None);
        assert_eq!(Cursor::new("99999999999999999999").scan_int(), None);
    }

    #[test]
    fn ident_accepts_unicode_word_chars() {
        assert_eq!(Cursor::new("按钮_1,x").scan_ident(), Some("按钮_1"));
        assert_eq!(Cursor::new(",x").scan_ident(), None);
    }

    #[test]
    fn list_is_split_and_unquoted() {
        let mut c = Cursor::new(r#"[ "A", B ,, "C" ] tail"#);
        assert_eq!(c.scan_list(), Some(vec!["A".into(), "B".into(), "C".into()]));
        assert_eq!(c.rest(), " tail");
        assert_eq!(Cursor::new("[]").scan_list(), Some(vec![]));
        assert_eq!(Cursor::new("[a, b").scan_list(), None);
    }

    #[test]
    fn list_keeps_quoted_empty_option() {
        let mut c = Cursor::new(r#"["A","","B"]"#);
        assert_eq!(c.scan_list(), Some(vec!["A".into(), "".into(), "B".into()]));
    }

    #[test]
    fn column_counts_characters() {
        let mut c = Cursor::new("显示=x");
        c.eat_str("显示");
        assert_eq!(c.col(), 3);
    }
}
