pub mod parser;
pub mod serializer;

pub use parser::ast::{
    Array, Attribute, BinaryOperator, Comment, ComplexStr, Entity, EntityLayout, Entry, Expression,
    Hash, Identifier, KeyValuePair, KvpLayout, LogicalOperator, Macro, MacroLayout, Resource,
    Segment, SequenceLayout, Spacing, Str, UnaryOperator, Value,
};
pub use parser::{DEFAULT_MAX_DEPTH, ParseError, ParseErrorKind, parse, parse_with_max_depth};
pub use serializer::{serialize, serialize_entry, serialize_expression, serialize_value};
