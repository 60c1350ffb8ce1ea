//! Serializer from the AST back to L20n source text.
//!
//! Declarations and values replay the whitespace captured in their layout
//! slots, so an unmodified tree serializes back to the exact input bytes.
//! Expressions carry no layout and serialize canonically: one space around
//! binary and logical operators, none inside member chains or interpolation
//! braces.

use crate::parser::ast::{
    Attribute, ComplexStr, Entity, Entry, Expression, Hash, KeyValuePair, Macro, Resource, Segment,
    SequenceLayout, Spacing, Str, Value,
};

/// Serialize a whole resource.
pub fn serialize(resource: &Resource) -> String {
    let mut out = String::new();
    out.push_str(resource.blanks.first().map_or("", Spacing::as_str));
    for (i, entry) in resource.body.iter().enumerate() {
        write_entry(&mut out, entry);
        out.push_str(resource.blanks.get(i + 1).map_or("", Spacing::as_str));
    }
    out
}

/// Serialize a single entry without surrounding whitespace.
pub fn serialize_entry(entry: &Entry) -> String {
    let mut out = String::new();
    write_entry(&mut out, entry);
    out
}

/// Serialize a value, replaying its captured layout.
pub fn serialize_value(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

/// Serialize an expression in canonical form.
pub fn serialize_expression(expression: &Expression) -> String {
    let mut out = String::new();
    write_expression(&mut out, expression);
    out
}

fn write_entry(out: &mut String, entry: &Entry) {
    match entry {
        Entry::Entity(entity) => write_entity(out, entity),
        Entry::Macro(makro) => write_macro(out, makro),
        Entry::Comment(comment) => {
            out.push_str("/*");
            out.push_str(&comment.content);
            out.push_str("*/");
        }
    };
}

fn write_entity(out: &mut String, entity: &Entity) {
    out.push('<');
    out.push_str(&entity.id.name);
    if let Some(index) = &entity.index {
        out.push('[');
        for (i, expr) in index.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            write_expression(out, expr);
        }
        out.push(']');
    }
    out.push_str(entity.layout.before_body.as_str());
    if let Some(value) = &entity.value {
        write_value(out, value);
    }
    write_attributes(out, &entity.attributes);
    out.push_str(entity.layout.before_close.as_str());
    out.push('>');
}

fn write_macro(out: &mut String, makro: &Macro) {
    out.push('<');
    out.push_str(&makro.id.name);
    out.push('(');
    write_sequence(out, &makro.params, &makro.layout.params, |out, param| {
        out.push_str(&param.name);
    });
    out.push(')');
    out.push_str(makro.layout.before_body.as_str());
    out.push('{');
    write_expression(out, &makro.body);
    out.push('}');
    write_attributes(out, &makro.attributes);
    out.push_str(makro.layout.before_close.as_str());
    out.push('>');
}

fn write_attributes(out: &mut String, attributes: &[Attribute]) {
    for attribute in attributes {
        out.push_str(attribute.gap.as_str());
        write_key_value_pair(out, &attribute.pair);
    }
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Str(string) => write_str(out, string),
        Value::Complex(complex) => write_complex_str(out, complex),
        Value::Array(array) => {
            out.push('[');
            write_sequence(out, &array.items, &array.layout, write_value);
            out.push(']');
        }
        Value::Hash(hash) => write_hash(out, hash),
    };
}

fn write_str(out: &mut String, string: &Str) {
    out.push(string.quote);
    out.push_str(&string.raw);
    out.push(string.quote);
}

fn write_complex_str(out: &mut String, complex: &ComplexStr) {
    out.push(complex.quote);
    for segment in &complex.segments {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Interpolation(expr) => {
                out.push_str("{{");
                write_expression(out, expr);
                out.push_str("}}");
            }
        }
    }
    out.push(complex.quote);
}

fn write_hash(out: &mut String, hash: &Hash) {
    out.push('{');
    write_sequence(out, &hash.items, &hash.layout, write_key_value_pair);
    out.push('}');
}

fn write_key_value_pair(out: &mut String, pair: &KeyValuePair) {
    out.push_str(&pair.key.name);
    out.push_str(pair.layout.before_colon.as_str());
    out.push(':');
    out.push_str(pair.layout.after_colon.as_str());
    write_value(out, &pair.value);
}

/// Replay a comma-separated sequence between its brackets: `after_open`,
/// then each item followed by its `after_items` run, with `,` and its
/// `after_commas` run between consecutive items.
fn write_sequence<T>(
    out: &mut String,
    items: &[T],
    layout: &SequenceLayout,
    mut write_item: impl FnMut(&mut String, &T),
) {
    out.push_str(layout.after_open.as_str());
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
            out.push_str(layout.after_commas.get(i - 1).map_or("", Spacing::as_str));
        }
        write_item(out, item);
        out.push_str(layout.after_items.get(i).map_or("", Spacing::as_str));
    }
}

fn write_expression(out: &mut String, expression: &Expression) {
    match expression {
        Expression::Conditional {
            test,
            consequent,
            alternate,
        } => {
            write_expression(out, test);
            out.push_str(" ? ");
            write_expression(out, consequent);
            out.push_str(" : ");
            write_expression(out, alternate);
        }
        Expression::Logical {
            operator,
            left,
            right,
        } => {
            write_expression(out, left);
            out.push(' ');
            out.push_str(operator.as_str());
            out.push(' ');
            write_expression(out, right);
        }
        Expression::Binary {
            operator,
            left,
            right,
        } => {
            write_expression(out, left);
            out.push(' ');
            out.push_str(operator.as_str());
            out.push(' ');
            write_expression(out, right);
        }
        Expression::Unary { operator, operand } => {
            out.push_str(operator.as_str());
            write_expression(out, operand);
        }
        Expression::Parenthesis(inner) => {
            out.push('(');
            write_expression(out, inner);
            out.push(')');
        }
        Expression::Attribute {
            object,
            field,
            computed,
        } => {
            write_expression(out, object);
            if *computed {
                out.push_str("[.");
                write_expression(out, field);
                out.push(']');
            } else {
                out.push_str("..");
                write_expression(out, field);
            }
        }
        Expression::Property {
            object,
            field,
            computed,
        } => {
            write_expression(out, object);
            if *computed {
                out.push('[');
                write_expression(out, field);
                out.push(']');
            } else {
                out.push('.');
                write_expression(out, field);
            }
        }
        Expression::Call { callee, arguments } => {
            write_expression(out, callee);
            out.push('(');
            for (i, argument) in arguments.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_expression(out, argument);
            }
            out.push(')');
        }
        Expression::Number(number) => out.push_str(&number.to_string()),
        Expression::Identifier(id) => out.push_str(&id.name),
        Expression::Value(value) => write_value(out, value),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::{BinaryOperator, Identifier, KvpLayout, LogicalOperator, UnaryOperator};

    #[test]
    fn test_serialize_plain_string_value() {
        let value = Value::Str(Str {
            quote: '"',
            raw: "Hello".to_string(),
        });
        assert_eq!(serialize_value(&value), "\"Hello\"");
    }

    #[test]
    fn test_serialize_keeps_escapes_verbatim() {
        let value = Value::Str(Str {
            quote: '"',
            raw: "say \\\"hi\\\"".to_string(),
        });
        assert_eq!(serialize_value(&value), "\"say \\\"hi\\\"\"");
    }

    #[test]
    fn test_serialize_hash_replays_layout() {
        let hash = Hash {
            items: vec![KeyValuePair {
                key: Identifier::new("one"),
                value: Value::Str(Str {
                    quote: '"',
                    raw: "1".to_string(),
                }),
                layout: KvpLayout {
                    before_colon: Spacing::default(),
                    after_colon: Spacing::from(" "),
                },
            }],
            layout: SequenceLayout {
                after_open: Spacing::from(" "),
                after_items: vec![Spacing::from(" ")],
                after_commas: vec![],
            },
        };
        assert_eq!(serialize_value(&Value::Hash(hash)), "{ one: \"1\" }");
    }

    #[test]
    fn test_serialize_binary_expression_canonical() {
        let expr = Expression::Binary {
            operator: BinaryOperator::Add,
            left: Box::new(Expression::Number(1)),
            right: Box::new(Expression::Binary {
                operator: BinaryOperator::Multiply,
                left: Box::new(Expression::Number(2)),
                right: Box::new(Expression::Number(3)),
            }),
        };
        assert_eq!(serialize_expression(&expr), "1 + 2 * 3");
    }

    #[test]
    fn test_serialize_unary_and_logical() {
        let expr = Expression::Logical {
            operator: LogicalOperator::And,
            left: Box::new(Expression::Unary {
                operator: UnaryOperator::Not,
                operand: Box::new(Expression::Identifier(Identifier::new("a"))),
            }),
            right: Box::new(Expression::Identifier(Identifier::new("b"))),
        };
        assert_eq!(serialize_expression(&expr), "!a && b");
    }

    #[test]
    fn test_serialize_member_chain() {
        let expr = Expression::Call {
            callee: Box::new(Expression::Attribute {
                object: Box::new(Expression::Identifier(Identifier::new("brand"))),
                field: Box::new(Expression::Identifier(Identifier::new("gender"))),
                computed: false,
            }),
            arguments: vec![Expression::Number(1)],
        };
        assert_eq!(serialize_expression(&expr), "brand..gender(1)");
    }
}
