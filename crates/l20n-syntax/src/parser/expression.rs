//! Expression grammar: precedence climbing over ten operator levels.
//!
//! Each level recognizes its own operators and delegates operands to the
//! next tighter-binding level, down to the postfix member chain and the
//! parenthesis/primary rule. Whitespace around operators is consumed and
//! discarded: only declaration-level and value-level whitespace participates
//! in format preservation, so expressions re-serialize canonically rather
//! than byte-exactly.

use super::ast::{BinaryOperator, Expression, LogicalOperator, UnaryOperator};
use super::cursor::Cursor;
use super::error::{ParseError, ParseErrorKind};
use super::value;

type Level = fn(&mut Cursor<'_>) -> Result<Expression, ParseError>;

/// Parse a full expression, starting at the loosest-binding level.
pub(crate) fn expression(cur: &mut Cursor<'_>) -> Result<Expression, ParseError> {
    cur.enter()?;
    cur.skip_whitespace();
    let parsed = conditional(cur)?;
    cur.exit();
    Ok(parsed)
}

/// Ternary `?:`, right-associative. Without a `?` this is just the
/// next-level expression.
fn conditional(cur: &mut Cursor<'_>) -> Result<Expression, ParseError> {
    let test = or_expression(cur)?;
    cur.skip_whitespace();
    if !cur.eat('?') {
        return Ok(test);
    }
    let consequent = expression(cur)?;
    cur.skip_whitespace();
    cur.expect(':')?;
    let alternate = expression(cur)?;
    Ok(Expression::Conditional {
        test: Box::new(test),
        consequent: Box::new(consequent),
        alternate: Box::new(alternate),
    })
}

fn or_expression(cur: &mut Cursor<'_>) -> Result<Expression, ParseError> {
    logical(cur, "||", LogicalOperator::Or, and_expression)
}

fn and_expression(cur: &mut Cursor<'_>) -> Result<Expression, ParseError> {
    logical(cur, "&&", LogicalOperator::And, equality)
}

/// One left-associative logical level.
fn logical(
    cur: &mut Cursor<'_>,
    token: &str,
    operator: LogicalOperator,
    next: Level,
) -> Result<Expression, ParseError> {
    let mut left = next(cur)?;
    loop {
        cur.skip_whitespace();
        if !cur.eat_str(token) {
            break;
        }
        cur.skip_whitespace();
        let right = next(cur)?;
        left = Expression::Logical {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        };
    }
    Ok(left)
}

fn equality(cur: &mut Cursor<'_>) -> Result<Expression, ParseError> {
    binary(
        cur,
        &[
            ("==", BinaryOperator::Equal),
            ("!=", BinaryOperator::NotEqual),
        ],
        relational,
    )
}

fn relational(cur: &mut Cursor<'_>) -> Result<Expression, ParseError> {
    // Two-character operators first so `<=` is not read as `<` then `=`.
    binary(
        cur,
        &[
            ("<=", BinaryOperator::LessOrEqual),
            (">=", BinaryOperator::GreaterOrEqual),
            ("<", BinaryOperator::Less),
            (">", BinaryOperator::Greater),
        ],
        additive,
    )
}

fn additive(cur: &mut Cursor<'_>) -> Result<Expression, ParseError> {
    binary(
        cur,
        &[("+", BinaryOperator::Add), ("-", BinaryOperator::Subtract)],
        modulo,
    )
}

fn modulo(cur: &mut Cursor<'_>) -> Result<Expression, ParseError> {
    binary(cur, &[("%", BinaryOperator::Modulo)], multiplicative)
}

fn multiplicative(cur: &mut Cursor<'_>) -> Result<Expression, ParseError> {
    binary(cur, &[("*", BinaryOperator::Multiply)], division)
}

fn division(cur: &mut Cursor<'_>) -> Result<Expression, ParseError> {
    binary(cur, &[("/", BinaryOperator::Divide)], unary)
}

/// One left-associative binary level over a closed operator set.
fn binary(
    cur: &mut Cursor<'_>,
    operators: &[(&str, BinaryOperator)],
    next: Level,
) -> Result<Expression, ParseError> {
    let mut left = next(cur)?;
    loop {
        cur.skip_whitespace();
        let Some(operator) = eat_operator(cur, operators) else {
            break;
        };
        cur.skip_whitespace();
        let right = next(cur)?;
        left = Expression::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        };
    }
    Ok(left)
}

fn eat_operator(
    cur: &mut Cursor<'_>,
    operators: &[(&str, BinaryOperator)],
) -> Option<BinaryOperator> {
    for &(token, operator) in operators {
        if cur.eat_str(token) {
            return Some(operator);
        }
    }
    None
}

/// Prefix `+`, `-`, `!`; right-recursive, so repetition is allowed. Each
/// stacked operator counts one nesting level against the configured limit.
fn unary(cur: &mut Cursor<'_>) -> Result<Expression, ParseError> {
    let operator = match cur.peek() {
        Some('+') => Some(UnaryOperator::Plus),
        Some('-') => Some(UnaryOperator::Minus),
        Some('!') => Some(UnaryOperator::Not),
        _ => None,
    };
    let Some(operator) = operator else {
        return member(cur);
    };
    cur.bump()?;
    cur.skip_whitespace();
    cur.enter()?;
    let operand = unary(cur)?;
    cur.exit();
    Ok(Expression::Unary {
        operator,
        operand: Box::new(operand),
    })
}

/// Postfix member chain: attribute access (`..id`, `[.expr]`), property
/// access (`.id`, `[expr]`), and calls, applied repeatedly until none match.
/// The two-character attribute forms are ruled out before the one-character
/// property forms.
fn member(cur: &mut Cursor<'_>) -> Result<Expression, ParseError> {
    let mut object = parenthesis(cur)?;
    cur.skip_whitespace();
    loop {
        if cur.eat_str("..") {
            let field = cur.identifier().ok_or_else(|| cur.unexpected())?;
            object = Expression::Attribute {
                object: Box::new(object),
                field: Box::new(Expression::Identifier(field)),
                computed: false,
            };
        } else if cur.eat_str("[.") {
            let field = expression(cur)?;
            cur.expect(']')?;
            object = Expression::Attribute {
                object: Box::new(object),
                field: Box::new(field),
                computed: true,
            };
        } else if cur.eat('.') {
            let field = cur.identifier().ok_or_else(|| cur.unexpected())?;
            object = Expression::Property {
                object: Box::new(object),
                field: Box::new(Expression::Identifier(field)),
                computed: false,
            };
        } else if cur.eat('[') {
            let field = expression(cur)?;
            cur.expect(']')?;
            object = Expression::Property {
                object: Box::new(object),
                field: Box::new(field),
                computed: true,
            };
        } else if cur.eat('(') {
            let arguments = call_arguments(cur)?;
            object = Expression::Call {
                callee: Box::new(object),
                arguments,
            };
        } else {
            break;
        }
    }
    Ok(object)
}

/// Comma-separated argument list after the opening `(`; may be empty.
fn call_arguments(cur: &mut Cursor<'_>) -> Result<Vec<Expression>, ParseError> {
    let mut arguments = Vec::new();
    cur.skip_whitespace();
    if cur.eat(')') {
        return Ok(arguments);
    }
    loop {
        arguments.push(expression(cur)?);
        if cur.eat(')') {
            break;
        }
        if !cur.eat(',') {
            return Err(cur.error(ParseErrorKind::ExpectedSeparatorOrEnd));
        }
    }
    Ok(arguments)
}

/// `(` expr `)`, or a primary expression.
fn parenthesis(cur: &mut Cursor<'_>) -> Result<Expression, ParseError> {
    if cur.eat('(') {
        let inner = expression(cur)?;
        cur.expect(')')?;
        return Ok(Expression::Parenthesis(Box::new(inner)));
    }
    primary(cur)
}

/// Numeric literal, value literal, or identifier, in that lookahead order.
fn primary(cur: &mut Cursor<'_>) -> Result<Expression, ParseError> {
    if let Some(digits) = cur.digits() {
        let start = cur.offset() - digits.len();
        let number = digits
            .parse::<i64>()
            .map_err(|_| ParseError::new(ParseErrorKind::InvalidNumber, start))?;
        return Ok(Expression::Number(number));
    }
    if matches!(cur.peek(), Some('\'' | '"' | '{' | '[')) {
        let literal = value::value(cur)?;
        return Ok(Expression::Value(Box::new(literal)));
    }
    match cur.identifier() {
        Some(id) => Ok(Expression::Identifier(id)),
        None => Err(cur.unexpected()),
    }
}
