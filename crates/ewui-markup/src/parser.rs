use crate::ast::{AttrValue, Attributes, Document, ParsedLine, Statement};
use crate::error::MatchError;
use crate::grammar::{AttrKind, AttrSpec, GRAMMAR, TagGrammar};
use crate::lexer::{Cursor, Line, lines};

// ── Matcher ───────────────────────────────────────────────────────────────

/// Table-driven statement matcher for a single line.
struct Matcher<'s> {
    cur: Cursor<'s>,
    line: usize,
}

impl<'s> Matcher<'s> {
    fn new(line: Line<'s>) -> Self {
        Self { cur: Cursor::new(line.text), line: line.number }
    }

    fn err(&self, msg: impl Into<String>) -> MatchError {
        MatchError::new(msg, self.line, self.cur.col())
    }

    /// Find the grammar whose `keyword =` opens the line.
    fn match_tag(&mut self) -> Option<&'static TagGrammar> {
        GRAMMAR.iter().find(|g| {
            self.cur.reset(0);
            if !self.cur.eat_str(g.keyword) {
                return false;
            }
            self.cur.skip_whitespace();
            if !self.cur.eat('=') {
                return false;
            }
            self.cur.skip_whitespace();
            true
        })
    }

    fn match_statement(mut self) -> Result<ParsedLine, MatchError> {
        let Some(grammar) = self.match_tag() else {
            self.cur.reset(0);
            return Err(self.err("unrecognized statement"));
        };

        let mut attrs = Attributes::default();
        for (i, spec) in grammar.attrs.iter().enumerate() {
            let start = self.cur.pos();
            let scanned = (i == 0 || self.separator()).then(|| self.attribute(spec)).flatten();
            match scanned {
                Some((key, value)) => attrs.push(key, value),
                None if spec.required => {
                    return Err(self.err(format!(
                        "{}: expected `{}=` with {}",
                        grammar.keyword,
                        spec.keys.join("=` or `"),
                        spec.kind.describe(),
                    )));
                }
                None => self.cur.reset(start),
            }
        }

        let Some(statement) = Statement::from_attrs(grammar.tag, &attrs) else {
            return Err(self.err(format!("{}: attribute value out of range", grammar.keyword)));
        };
        let rest = self.cur.rest().trim();
        Ok(ParsedLine {
            line: self.line,
            statement,
            trailing: (!rest.is_empty()).then(|| rest.to_string()),
        })
    }

    /// `\s*,\s*` between attributes.
    fn separator(&mut self) -> bool {
        self.cur.skip_whitespace();
        let ok = self.cur.eat(',');
        self.cur.skip_whitespace();
        ok
    }

    /// `key=value` for any of the attribute's accepted keys.
    fn attribute(&mut self, spec: &AttrSpec) -> Option<(&'static str, AttrValue)> {
        let start = self.cur.pos();
        for &key in spec.keys {
            self.cur.reset(start);
            if self.cur.eat_str(key) && self.cur.eat('=') {
                return self.value(spec.kind).map(|v| (key, v));
            }
        }
        None
    }

    fn value(&mut self, kind: AttrKind) -> Option<AttrValue> {
        let c = &mut self.cur;
        match kind {
            AttrKind::Str        => c.scan_quoted(false).map(|s| AttrValue::Str(s.to_string())),
            AttrKind::StrOrEmpty => c.scan_quoted(true).map(|s| AttrValue::Str(s.to_string())),
            AttrKind::Int        => c.scan_int().map(AttrValue::Int),
            AttrKind::Bool       => c.scan_keyword(&["true", "false"]).map(|w| AttrValue::Bool(w == "true")),
            AttrKind::Ident      => c.scan_ident().map(|s| AttrValue::Ident(s.to_string())),
            AttrKind::Keyword(w) => c.scan_keyword(w).map(AttrValue::Keyword),
            AttrKind::List       => c.scan_list().map(AttrValue::List),
        }
    }
}

// ── Public entry points ───────────────────────────────────────────────────

/// Match a single line of source.
///
/// Returns `Ok(None)` for a line that is blank once trimmed and stripped of
/// its terminator.
pub fn parse_line(number: usize, raw: &str) -> Result<Option<ParsedLine>, MatchError> {
    match lines(raw).next() {
        Some(line) => Matcher::new(Line { number, ..line }).match_statement().map(Some),
        None => Ok(None),
    }
}

/// Match every line of `src`. Never fails: unmatched lines are collected in
/// [`Document::skipped`].
pub fn parse_str(src: &str) -> Document {
    let mut doc = Document::default();
    for line in lines(src) {
        match Matcher::new(line).match_statement() {
            Ok(parsed) => doc.statements.push(parsed),
            Err(e) => doc.skipped.push(e),
        }
    }
    doc
}
