//! Integration tests for resource-level parsing: entries, entities, macros,
//! comments, and error reporting.

use l20n_syntax::{Entry, ParseErrorKind, Segment, Value, parse, parse_with_max_depth};

#[test]
fn test_empty_resource() {
    let resource = parse("").unwrap();
    assert!(resource.body.is_empty());
    assert_eq!(resource.blanks.len(), 1);
}

#[test]
fn test_whitespace_only_resource() {
    let resource = parse("  \n\t ").unwrap();
    assert!(resource.body.is_empty());
    assert_eq!(resource.blanks.len(), 1);
    assert_eq!(resource.blanks[0].as_str(), "  \n\t ");
}

#[test]
fn test_simple_entity() {
    let resource = parse(r#"<hello "Hello, world!">"#).unwrap();
    assert_eq!(resource.body.len(), 1);
    let Entry::Entity(entity) = &resource.body[0] else {
        panic!("expected entity");
    };
    assert_eq!(entity.id.name, "hello");
    assert!(entity.index.is_none());
    assert!(entity.attributes.is_empty());
    match &entity.value {
        Some(Value::Str(s)) => {
            assert_eq!(s.quote, '"');
            assert_eq!(s.raw, "Hello, world!");
        }
        other => panic!("expected string value, got {other:?}"),
    }
}

#[test]
fn test_single_quoted_entity() {
    let resource = parse("<a 'single'>").unwrap();
    let Entry::Entity(entity) = &resource.body[0] else {
        panic!("expected entity");
    };
    match &entity.value {
        Some(Value::Str(s)) => assert_eq!(s.quote, '\''),
        other => panic!("expected string value, got {other:?}"),
    }
}

#[test]
fn test_entity_with_attributes() {
    let resource = parse(r#"<brand "Firefox" title:"Browser" accesskey: "F">"#).unwrap();
    let Entry::Entity(entity) = &resource.body[0] else {
        panic!("expected entity");
    };
    assert!(entity.value.is_some());
    assert_eq!(entity.attributes.len(), 2);
    assert_eq!(entity.attributes[0].pair.key.name, "title");
    assert_eq!(entity.attributes[1].pair.key.name, "accesskey");
}

#[test]
fn test_attribute_may_sit_flush_against_value() {
    let resource = parse(r#"<id "v"title:"x">"#).unwrap();
    let Entry::Entity(entity) = &resource.body[0] else {
        panic!("expected entity");
    };
    assert!(entity.value.is_some());
    assert_eq!(entity.attributes.len(), 1);
    assert!(entity.attributes[0].gap.is_empty());
}

#[test]
fn test_consecutive_attributes_need_separator() {
    let err = parse(r#"<id "v" a:"1"b:"2">"#).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MissingSeparator);
    assert_eq!(err.offset, 13);
}

#[test]
fn test_entity_without_value_needs_attribute() {
    let resource = parse(r#"<brand title: "Browser">"#).unwrap();
    let Entry::Entity(entity) = &resource.body[0] else {
        panic!("expected entity");
    };
    assert!(entity.value.is_none());
    assert_eq!(entity.attributes.len(), 1);
    assert!(entity.attributes[0].gap.is_empty());
}

#[test]
fn test_bare_entity_is_an_error() {
    let err = parse("<id>").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::ExpectedValue);
    assert_eq!(err.offset, 3);
}

#[test]
fn test_missing_separator_after_id() {
    let err = parse(r#"<id"v">"#).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MissingSeparator);
    assert_eq!(err.offset, 3);
}

#[test]
fn test_entity_with_index() {
    let resource = parse(r#"<plural[one, many] "x">"#).unwrap();
    let Entry::Entity(entity) = &resource.body[0] else {
        panic!("expected entity");
    };
    let index = entity.index.as_ref().unwrap();
    assert_eq!(index.len(), 2);
}

#[test]
fn test_empty_index_is_distinct_from_none() {
    let resource = parse(r#"<plural[] "x">"#).unwrap();
    let Entry::Entity(entity) = &resource.body[0] else {
        panic!("expected entity");
    };
    assert_eq!(entity.index.as_deref(), Some(&[][..]));
}

#[test]
fn test_array_value() {
    let resource = parse(r#"<l ["a", "b"]>"#).unwrap();
    let Entry::Entity(entity) = &resource.body[0] else {
        panic!("expected entity");
    };
    match &entity.value {
        Some(Value::Array(array)) => assert_eq!(array.items.len(), 2),
        other => panic!("expected array value, got {other:?}"),
    }
}

#[test]
fn test_hash_value_preserves_order() {
    let resource = parse(r#"<plural {one: "1", many: "n"}>"#).unwrap();
    let Entry::Entity(entity) = &resource.body[0] else {
        panic!("expected entity");
    };
    match &entity.value {
        Some(Value::Hash(hash)) => {
            assert_eq!(hash.items.len(), 2);
            assert_eq!(hash.items[0].key.name, "one");
            assert_eq!(hash.items[1].key.name, "many");
        }
        other => panic!("expected hash value, got {other:?}"),
    }
}

#[test]
fn test_hash_allows_duplicate_keys() {
    let resource = parse(r#"<h {k: "1", k: "2"}>"#).unwrap();
    let Entry::Entity(entity) = &resource.body[0] else {
        panic!("expected entity");
    };
    match &entity.value {
        Some(Value::Hash(hash)) => assert_eq!(hash.items.len(), 2),
        other => panic!("expected hash value, got {other:?}"),
    }
}

#[test]
fn test_missing_list_separator() {
    let err = parse(r#"<l ["x" "y"]>"#).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::ExpectedSeparatorOrEnd);
    assert_eq!(err.offset, 8);
}

#[test]
fn test_complex_string_segments() {
    let resource = parse(r#"<hi "Hello {{user}}!">"#).unwrap();
    let Entry::Entity(entity) = &resource.body[0] else {
        panic!("expected entity");
    };
    match &entity.value {
        Some(Value::Complex(complex)) => {
            assert_eq!(complex.segments.len(), 3);
            assert_eq!(complex.segments[0], Segment::Literal("Hello ".to_string()));
            assert!(matches!(complex.segments[1], Segment::Interpolation(_)));
            assert_eq!(complex.segments[2], Segment::Literal("!".to_string()));
        }
        other => panic!("expected complex string, got {other:?}"),
    }
}

#[test]
fn test_unterminated_interpolation() {
    let err = parse(r#"<a "a{{">"#).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnterminatedInterpolation);
    assert_eq!(err.offset, 5);
}

#[test]
fn test_escaped_quote_does_not_close_string() {
    let resource = parse(r#"<a "say \"hi\"">"#).unwrap();
    let Entry::Entity(entity) = &resource.body[0] else {
        panic!("expected entity");
    };
    match &entity.value {
        Some(Value::Str(s)) => assert_eq!(s.raw, r#"say \"hi\""#),
        other => panic!("expected string value, got {other:?}"),
    }
}

#[test]
fn test_macro_entry() {
    let resource = parse("<plural(n) {n}>").unwrap();
    let Entry::Macro(makro) = &resource.body[0] else {
        panic!("expected macro");
    };
    assert_eq!(makro.id.name, "plural");
    assert_eq!(makro.params.len(), 1);
    assert_eq!(makro.params[0].name, "n");
    assert!(makro.attributes.is_empty());
}

#[test]
fn test_macro_without_params() {
    let resource = parse("<now() {1}>").unwrap();
    let Entry::Macro(makro) = &resource.body[0] else {
        panic!("expected macro");
    };
    assert!(makro.params.is_empty());
}

#[test]
fn test_macro_with_attributes() {
    let resource = parse(r#"<f(n) {n} note: "doubles">"#).unwrap();
    let Entry::Macro(makro) = &resource.body[0] else {
        panic!("expected macro");
    };
    assert_eq!(makro.attributes.len(), 1);
    assert_eq!(makro.attributes[0].pair.key.name, "note");
}

#[test]
fn test_duplicate_macro_parameter() {
    let err = parse("<f(a, a) {a}>").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::DuplicateParameter);
    assert_eq!(err.offset, 6);
}

#[test]
fn test_macro_needs_separator_before_body() {
    let err = parse("<f(n){n}>").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MissingSeparator);
    assert_eq!(err.offset, 5);
}

#[test]
fn test_comment_entry() {
    let resource = parse("/* note */").unwrap();
    let Entry::Comment(comment) = &resource.body[0] else {
        panic!("expected comment");
    };
    assert_eq!(comment.content, " note ");
}

#[test]
fn test_unterminated_comment() {
    let err = parse("/* oops").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnterminatedComment);
    assert_eq!(err.offset, 0);
}

#[test]
fn test_blanks_surround_every_entry() {
    let resource = parse("/* header */\n\n<a \"1\">\n<b \"2\">\n").unwrap();
    assert_eq!(resource.body.len(), 3);
    assert_eq!(resource.blanks.len(), 4);
    assert_eq!(resource.blanks[0].as_str(), "");
    assert_eq!(resource.blanks[1].as_str(), "\n\n");
    assert_eq!(resource.blanks[2].as_str(), "\n");
    assert_eq!(resource.blanks[3].as_str(), "\n");
}

#[test]
fn test_truncated_entity_reports_end() {
    let err = parse(r#"<a "v""#).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnexpectedEnd);
    assert_eq!(err.offset, 6);
}

#[test]
fn test_stray_character_at_top_level() {
    let err = parse("x").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnexpectedToken('x'));
    assert_eq!(err.offset, 0);
}

#[test]
fn test_nesting_limit() {
    let err = parse_with_max_depth(r#"<a [[["x"]]]>"#, 2).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::NestingTooDeep);
    assert!(parse_with_max_depth(r#"<a [[["x"]]]>"#, 4).is_ok());
}

#[test]
fn test_error_line_column() {
    let err = parse("<a \"1\">\n<b>").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::ExpectedValue);
    assert_eq!(err.offset, 10);
    assert_eq!(err.line_column("<a \"1\">\n<b>"), (2, 3));
}
