//! Cursor over L20n source text.
//!
//! The cursor owns an immutable view of the source and a byte offset that
//! only ever moves forward. Every grammar rule is built on two primitives:
//! consuming a run of whitespace and matching a fixed lexical pattern at the
//! current offset. Pattern matches that fail leave the offset untouched and
//! return `None`, so callers can use them to pick between grammar branches;
//! reads past the end of the scanned region fail with `UnexpectedEnd` rather
//! than reading out of bounds.

use super::ast::{Identifier, Spacing};
use super::error::{ParseError, ParseErrorKind};

pub(crate) struct Cursor<'src> {
    source: &'src str,
    offset: usize,
    limit: usize,
    depth: usize,
    max_depth: usize,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(source: &'src str, max_depth: usize) -> Self {
        Self {
            source,
            offset: 0,
            limit: source.len(),
            depth: 0,
            max_depth,
        }
    }

    /// A cursor over the byte region `[start, end)` of the same source.
    ///
    /// Used for sub-parses such as complex-string interiors; offsets in
    /// reported errors stay absolute.
    pub(crate) fn region(&self, start: usize, end: usize) -> Cursor<'src> {
        Cursor {
            source: self.source,
            offset: start,
            limit: end,
            depth: self.depth,
            max_depth: self.max_depth,
        }
    }

    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.offset >= self.limit
    }

    fn rest(&self) -> &'src str {
        &self.source[self.offset..self.limit]
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub(crate) fn starts_with(&self, pat: &str) -> bool {
        self.rest().starts_with(pat)
    }

    /// Consume one character.
    pub(crate) fn bump(&mut self) -> Result<char, ParseError> {
        let c = self.peek().ok_or_else(|| self.end_error())?;
        self.offset += c.len_utf8();
        Ok(c)
    }

    /// Consume `c` if it is next; the offset is untouched otherwise.
    pub(crate) fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.offset += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume `pat` if the region starts with it.
    pub(crate) fn eat_str(&mut self, pat: &str) -> bool {
        if self.starts_with(pat) {
            self.offset += pat.len();
            true
        } else {
            false
        }
    }

    /// Require `c` next, failing with `UnexpectedToken` or `UnexpectedEnd`.
    pub(crate) fn expect(&mut self, c: char) -> Result<(), ParseError> {
        match self.peek() {
            Some(found) if found == c => {
                self.offset += c.len_utf8();
                Ok(())
            }
            Some(found) => Err(self.error(ParseErrorKind::UnexpectedToken(found))),
            None => Err(self.end_error()),
        }
    }

    /// Advance past the recognized whitespace set and return the skipped run.
    ///
    /// Never fails and never moves backward; at end of input the run is
    /// empty.
    pub(crate) fn skip_whitespace(&mut self) -> Spacing {
        let start = self.offset;
        while let Some(c) = self.peek() {
            if !c.is_ascii_whitespace() {
                break;
            }
            self.offset += c.len_utf8();
        }
        Spacing::from(&self.source[start..self.offset])
    }

    /// Match an identifier at the cursor: `[A-Za-z_][A-Za-z0-9_]*`.
    ///
    /// `None` leaves the offset untouched; callers use it to pick a branch.
    pub(crate) fn identifier(&mut self) -> Option<Identifier> {
        let first = self.peek()?;
        if !(first.is_ascii_alphabetic() || first == '_') {
            return None;
        }
        let start = self.offset;
        self.offset += 1;
        while let Some(c) = self.peek() {
            if !(c.is_ascii_alphanumeric() || c == '_') {
                break;
            }
            self.offset += 1;
        }
        Some(Identifier::new(&self.source[start..self.offset]))
    }

    /// Match a maximal run of ASCII digits.
    pub(crate) fn digits(&mut self) -> Option<&'src str> {
        let start = self.offset;
        while let Some(c) = self.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            self.offset += 1;
        }
        if self.offset > start {
            Some(&self.source[start..self.offset])
        } else {
            None
        }
    }

    /// Byte offset of the next occurrence of `pat` at or after the cursor.
    pub(crate) fn find(&self, pat: &str) -> Option<usize> {
        self.rest().find(pat).map(|i| self.offset + i)
    }

    /// The source bytes between two absolute offsets.
    pub(crate) fn slice(&self, start: usize, end: usize) -> &'src str {
        &self.source[start..end]
    }

    /// Move the cursor forward to an absolute offset.
    pub(crate) fn jump(&mut self, offset: usize) {
        debug_assert!(offset >= self.offset && offset <= self.limit);
        self.offset = offset;
    }

    /// Enter one nesting level, failing once the configured maximum is hit.
    pub(crate) fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.max_depth {
            return Err(self.error(ParseErrorKind::NestingTooDeep));
        }
        self.depth += 1;
        Ok(())
    }

    /// Leave one nesting level.
    pub(crate) fn exit(&mut self) {
        self.depth -= 1;
    }

    pub(crate) fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.offset)
    }

    pub(crate) fn end_error(&self) -> ParseError {
        ParseError::new(ParseErrorKind::UnexpectedEnd, self.offset)
    }

    /// An error for the character at the cursor, or `UnexpectedEnd` when
    /// nothing remains.
    pub(crate) fn unexpected(&self) -> ParseError {
        match self.peek() {
            Some(c) => self.error(ParseErrorKind::UnexpectedToken(c)),
            None => self.end_error(),
        }
    }
}
