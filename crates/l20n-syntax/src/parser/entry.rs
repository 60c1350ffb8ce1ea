//! Entry grammar: entities, macros, and comments.

use super::ast::{
    Attribute, Comment, Entity, EntityLayout, Entry, Expression, Identifier, Macro, MacroLayout,
    SequenceLayout, Spacing,
};
use super::cursor::Cursor;
use super::error::{ParseError, ParseErrorKind};
use super::{expression, value};

/// Parse one top-level entry. The cursor sits on the first non-whitespace
/// character of the entry.
pub(crate) fn entry(cur: &mut Cursor<'_>) -> Result<Entry, ParseError> {
    if cur.starts_with("/*") {
        return Ok(Entry::Comment(comment(cur)?));
    }
    if !cur.eat('<') {
        return Err(cur.unexpected());
    }
    let id = cur.identifier().ok_or_else(|| cur.unexpected())?;
    match cur.peek() {
        Some('(') => Ok(Entry::Macro(macro_entry(cur, id)?)),
        Some('[') => {
            let index = index(cur)?;
            Ok(Entry::Entity(entity(cur, id, Some(index))?))
        }
        _ => Ok(Entry::Entity(entity(cur, id, None)?)),
    }
}

/// Parse a `/* ... */` comment. The content between the delimiters is kept
/// verbatim and never scanned for nested markers.
fn comment(cur: &mut Cursor<'_>) -> Result<Comment, ParseError> {
    let open = cur.offset();
    cur.eat_str("/*");
    let Some(close) = cur.find("*/") else {
        return Err(ParseError::new(ParseErrorKind::UnterminatedComment, open));
    };
    let content = cur.slice(cur.offset(), close).to_string();
    cur.jump(close + 2);
    Ok(Comment { content })
}

/// Parse the remainder of an entity after `<id` and any index. The entity
/// needs a value, at least one attribute, or both; whitespace after the id
/// is mandatory before either.
fn entity(
    cur: &mut Cursor<'_>,
    id: Identifier,
    index: Option<Vec<Expression>>,
) -> Result<Entity, ParseError> {
    let before_body = cur.skip_whitespace();
    match cur.peek() {
        None => return Err(cur.end_error()),
        Some('>') => return Err(cur.error(ParseErrorKind::ExpectedValue)),
        Some(_) if before_body.is_empty() => {
            return Err(cur.error(ParseErrorKind::MissingSeparator));
        }
        Some(_) => {}
    }
    let value = value::try_value(cur)?;
    let mut attributes = Vec::new();
    if value.is_none() {
        // Value-less entities open directly with an attribute; the mandatory
        // post-id whitespace is already in `before_body`.
        attributes.push(Attribute {
            gap: Spacing::default(),
            pair: value::key_value_pair(cur)?,
        });
    }
    let before_close = attribute_list(cur, &mut attributes)?;
    Ok(Entity {
        id,
        index,
        value,
        attributes,
        layout: EntityLayout {
            before_body,
            before_close,
        },
    })
}

/// Parse trailing attributes up to and through the closing `>`, returning
/// the whitespace that preceded it. The first attribute may sit flush
/// against the value or macro body; consecutive attributes must be
/// separated by whitespace.
fn attribute_list(
    cur: &mut Cursor<'_>,
    attributes: &mut Vec<Attribute>,
) -> Result<Spacing, ParseError> {
    loop {
        let gap = cur.skip_whitespace();
        if cur.eat('>') {
            return Ok(gap);
        }
        if cur.is_at_end() {
            return Err(cur.end_error());
        }
        if gap.is_empty() && !attributes.is_empty() {
            return Err(cur.error(ParseErrorKind::MissingSeparator));
        }
        attributes.push(Attribute {
            gap,
            pair: value::key_value_pair(cur)?,
        });
    }
}

/// Parse the remainder of a macro after `<id`, with the cursor on `(`.
fn macro_entry(cur: &mut Cursor<'_>, id: Identifier) -> Result<Macro, ParseError> {
    cur.expect('(')?;
    let after_open = cur.skip_whitespace();
    let mut params: Vec<Identifier> = Vec::new();
    let mut after_items = Vec::new();
    let mut after_commas = Vec::new();
    if !cur.eat(')') {
        loop {
            let param = cur.identifier().ok_or_else(|| cur.unexpected())?;
            if params.iter().any(|p| p.name == param.name) {
                return Err(ParseError::new(
                    ParseErrorKind::DuplicateParameter,
                    cur.offset() - param.name.len(),
                ));
            }
            params.push(param);
            after_items.push(cur.skip_whitespace());
            if cur.eat(',') {
                after_commas.push(cur.skip_whitespace());
            } else if cur.eat(')') {
                break;
            } else {
                return Err(cur.error(ParseErrorKind::ExpectedSeparatorOrEnd));
            }
        }
    }
    let before_body = cur.skip_whitespace();
    if before_body.is_empty() {
        return Err(cur.error(ParseErrorKind::MissingSeparator));
    }
    cur.expect('{')?;
    let body = expression::expression(cur)?;
    cur.skip_whitespace();
    cur.expect('}')?;
    let mut attributes = Vec::new();
    let before_close = attribute_list(cur, &mut attributes)?;
    Ok(Macro {
        id,
        params,
        body,
        attributes,
        layout: MacroLayout {
            params: SequenceLayout {
                after_open,
                after_items,
                after_commas,
            },
            before_body,
            before_close,
        },
    })
}

/// Parse an entity index: `[` expressions `]`, with the cursor on `[`.
/// An empty index `[]` is legal and distinct from no index at all.
fn index(cur: &mut Cursor<'_>) -> Result<Vec<Expression>, ParseError> {
    cur.expect('[')?;
    cur.skip_whitespace();
    let mut items = Vec::new();
    if cur.eat(']') {
        return Ok(items);
    }
    loop {
        items.push(expression::expression(cur)?);
        if cur.eat(']') {
            break;
        }
        if !cur.eat(',') {
            return Err(cur.error(ParseErrorKind::ExpectedSeparatorOrEnd));
        }
    }
    Ok(items)
}
