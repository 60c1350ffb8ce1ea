//! Parse error types for L20n source text.

use thiserror::Error;

/// The kind of failure encountered while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The grammar required more input than remained.
    #[error("unexpected end of input")]
    UnexpectedEnd,

    /// The next character does not match any grammar alternative.
    #[error("unexpected character '{0}'")]
    UnexpectedToken(char),

    /// A mandatory whitespace or punctuation separator was absent.
    #[error("missing separator")]
    MissingSeparator,

    /// A string, array, or hash value was required.
    #[error("expected a value")]
    ExpectedValue,

    /// A list item must be followed by `,` or the closing bracket.
    #[error("expected ',' or closing bracket")]
    ExpectedSeparatorOrEnd,

    /// A comment is missing its closing `*/`.
    #[error("unterminated comment")]
    UnterminatedComment,

    /// A `{{` interpolation is missing its closing `}}`.
    #[error("unterminated interpolation")]
    UnterminatedInterpolation,

    /// Expression or value nesting exceeded the configured maximum depth.
    #[error("nesting too deep")]
    NestingTooDeep,

    /// A numeric literal does not fit in a 64-bit integer.
    #[error("invalid number literal")]
    InvalidNumber,

    /// A macro declares the same parameter name twice.
    #[error("duplicate macro parameter")]
    DuplicateParameter,
}

/// An error that occurred during parsing.
///
/// Carries the failure kind and the byte offset of the first point of
/// failure. Parsing is all-or-nothing: a single error aborts the whole parse
/// and no partial AST is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} at offset {offset}")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,

    /// Byte offset into the source text where the failure was detected.
    pub offset: usize,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// Calculate the 1-based line and column of this error in `source`.
    pub fn line_column(&self, source: &str) -> (usize, usize) {
        let offset = self.offset.min(source.len());
        let consumed = &source[..offset];
        let line = consumed.chars().filter(|&c| c == '\n').count() + 1;
        let column = match consumed.rfind('\n') {
            Some(pos) => offset - pos,
            None => offset + 1,
        };
        (line, column)
    }
}
