//! Value grammar: strings, complex strings, arrays, hashes, and key/value
//! pairs.

use super::ast::{
    Array, ComplexStr, Hash, KeyValuePair, KvpLayout, Segment, SequenceLayout, Str, Value,
};
use super::cursor::Cursor;
use super::error::{ParseError, ParseErrorKind};
use super::expression;

/// Parse a value, failing with `ExpectedValue` when the lookahead character
/// cannot start one.
pub(crate) fn value(cur: &mut Cursor<'_>) -> Result<Value, ParseError> {
    match try_value(cur)? {
        Some(parsed) => Ok(parsed),
        None => Err(cur.error(ParseErrorKind::ExpectedValue)),
    }
}

/// Parse a value if the lookahead character starts one; callers decide
/// whether absence is legal.
pub(crate) fn try_value(cur: &mut Cursor<'_>) -> Result<Option<Value>, ParseError> {
    cur.enter()?;
    let parsed = match cur.peek() {
        Some('\'' | '"') => Some(string(cur)?),
        Some('[') => Some(Value::Array(array(cur)?)),
        Some('{') => Some(Value::Hash(hash(cur)?)),
        _ => None,
    };
    cur.exit();
    Ok(parsed)
}

/// Parse one `key: value` pair.
pub(crate) fn key_value_pair(cur: &mut Cursor<'_>) -> Result<KeyValuePair, ParseError> {
    let key = cur.identifier().ok_or_else(|| cur.unexpected())?;
    let before_colon = cur.skip_whitespace();
    cur.expect(':')?;
    let after_colon = cur.skip_whitespace();
    let parsed = value(cur)?;
    Ok(KeyValuePair {
        key,
        value: parsed,
        layout: KvpLayout {
            before_colon,
            after_colon,
        },
    })
}

/// Parse a quoted string: the shortest run of characters up to an unescaped
/// matching quote, consumed through the closing quote. A string whose raw
/// content contains `{{` re-parses as a complex string.
fn string(cur: &mut Cursor<'_>) -> Result<Value, ParseError> {
    let quote = cur.bump()?;
    let start = cur.offset();
    let end = loop {
        match cur.peek() {
            None => return Err(cur.end_error()),
            Some('\\') => {
                cur.bump()?;
                cur.bump()?;
            }
            Some(c) if c == quote => {
                let end = cur.offset();
                cur.bump()?;
                break end;
            }
            Some(_) => {
                cur.bump()?;
            }
        }
    };
    let raw = cur.slice(start, end);
    if raw.contains("{{") {
        let segments = segments(cur, start, end)?;
        Ok(Value::Complex(ComplexStr { quote, segments }))
    } else {
        Ok(Value::Str(Str {
            quote,
            raw: raw.to_string(),
        }))
    }
}

/// Split the string region `[start, end)` into literal runs and `{{ ... }}`
/// holes. Runs on a sub-cursor over the original source so error offsets
/// stay absolute.
fn segments(cur: &Cursor<'_>, start: usize, end: usize) -> Result<Vec<Segment>, ParseError> {
    let mut inner = cur.region(start, end);
    let mut segments = Vec::new();
    while !inner.is_at_end() {
        let run_start = inner.offset();
        let run_end = inner.find("{{").unwrap_or(end);
        if run_end > run_start {
            segments.push(Segment::Literal(inner.slice(run_start, run_end).to_string()));
            inner.jump(run_end);
        }
        if inner.eat_str("{{") {
            let hole_start = run_end;
            let expr = expression::expression(&mut inner).map_err(|e| match e.kind {
                ParseErrorKind::UnexpectedEnd => {
                    ParseError::new(ParseErrorKind::UnterminatedInterpolation, hole_start)
                }
                _ => e,
            })?;
            if !inner.eat_str("}}") {
                return Err(ParseError::new(
                    ParseErrorKind::UnterminatedInterpolation,
                    hole_start,
                ));
            }
            segments.push(Segment::Interpolation(expr));
        }
    }
    Ok(segments)
}

/// Parse an array literal: `[`, optional whitespace, items separated by `,`,
/// `]`. May be empty.
fn array(cur: &mut Cursor<'_>) -> Result<Array, ParseError> {
    cur.expect('[')?;
    let after_open = cur.skip_whitespace();
    let mut items = Vec::new();
    let mut after_items = Vec::new();
    let mut after_commas = Vec::new();
    if !cur.eat(']') {
        loop {
            items.push(value(cur)?);
            after_items.push(cur.skip_whitespace());
            if cur.eat(',') {
                after_commas.push(cur.skip_whitespace());
            } else if cur.eat(']') {
                break;
            } else {
                return Err(cur.error(ParseErrorKind::ExpectedSeparatorOrEnd));
            }
        }
    }
    Ok(Array {
        items,
        layout: SequenceLayout {
            after_open,
            after_items,
            after_commas,
        },
    })
}

/// Parse a hash literal: `{`, optional whitespace, `key: value` pairs
/// separated by `,`, `}`. May be empty.
fn hash(cur: &mut Cursor<'_>) -> Result<Hash, ParseError> {
    cur.expect('{')?;
    let after_open = cur.skip_whitespace();
    let mut items = Vec::new();
    let mut after_items = Vec::new();
    let mut after_commas = Vec::new();
    if !cur.eat('}') {
        loop {
            items.push(key_value_pair(cur)?);
            after_items.push(cur.skip_whitespace());
            if cur.eat(',') {
                after_commas.push(cur.skip_whitespace());
            } else if cur.eat('}') {
                break;
            } else {
                return Err(cur.error(ParseErrorKind::ExpectedSeparatorOrEnd));
            }
        }
    }
    Ok(Hash {
        items,
        layout: SequenceLayout {
            after_open,
            after_items,
            after_commas,
        },
    })
}
