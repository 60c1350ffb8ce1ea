//! Recursive-descent parser for L20n source text.
//!
//! [`parse`] turns a source string into a [`Resource`] whose nodes carry
//! enough layout metadata that the serializer can reproduce the original
//! bytes. Parsing is all-or-nothing: the first failure aborts with a
//! [`ParseError`] and no partial tree is produced.

pub mod ast;
mod cursor;
mod entry;
mod error;
mod expression;
mod value;

pub use error::{ParseError, ParseErrorKind};

use ast::Resource;
use cursor::Cursor;

/// Maximum value and expression nesting depth used by [`parse`].
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Parse an L20n resource with the default nesting limit.
///
/// # Errors
///
/// Returns a [`ParseError`] with the byte offset of the first point of
/// failure if `source` is not a well-formed resource.
pub fn parse(source: &str) -> Result<Resource, ParseError> {
    parse_with_max_depth(source, DEFAULT_MAX_DEPTH)
}

/// Parse an L20n resource, rejecting values and expressions nested more than
/// `max_depth` levels deep with [`ParseErrorKind::NestingTooDeep`].
///
/// # Errors
///
/// Returns a [`ParseError`] with the byte offset of the first point of
/// failure if `source` is not a well-formed resource.
pub fn parse_with_max_depth(source: &str, max_depth: usize) -> Result<Resource, ParseError> {
    let mut cur = Cursor::new(source, max_depth);
    let mut body = Vec::new();
    let mut blanks = Vec::new();
    loop {
        blanks.push(cur.skip_whitespace());
        if cur.is_at_end() {
            break;
        }
        body.push(entry::entry(&mut cur)?);
    }
    Ok(Resource { body, blanks })
}
