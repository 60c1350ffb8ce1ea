//! AST node types for L20n resources.
//!
//! Every node is immutable once constructed and exclusively owns its
//! children, so the tree is a strict forest built bottom-up as parsing
//! proceeds. Nodes that span literal punctuation additionally carry layout
//! metadata: the exact whitespace consumed around each syntactic slot,
//! enough to reconstruct the original source byte-for-byte. Layout is not
//! semantic — [`Spacing`] compares equal regardless of content, so two trees
//! differing only in stored whitespace are equal.

use serde::{Deserialize, Serialize};

/// A raw whitespace run captured from the source.
///
/// Compares equal regardless of content: layout carries no meaning for
/// evaluation, only for source reconstruction.
#[derive(Debug, Clone, Default, Eq, Serialize, Deserialize)]
pub struct Spacing(pub String);

impl Spacing {
    /// The captured run as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the run is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl PartialEq for Spacing {
    fn eq(&self, _: &Spacing) -> bool {
        true
    }
}

impl From<&str> for Spacing {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A parsed resource: the root node for one source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Top-level entries in source order.
    pub body: Vec<Entry>,

    /// Whitespace before, between, and after entries.
    /// Always holds exactly `body.len() + 1` runs.
    pub blanks: Vec<Spacing>,
}

/// A top-level entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Entry {
    Entity(Entity),
    Macro(Macro),
    Comment(Comment),
}

/// A name token: `[A-Za-z_][A-Za-z0-9_]*`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    /// Create an identifier from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A translatable message: `<id[index] value attrs>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: Identifier,

    /// Selector index; `Some` exactly when the source wrote `[...]` after
    /// the id. May be empty.
    pub index: Option<Vec<Expression>>,

    /// Main value. A value-less entity must carry at least one attribute;
    /// a bare `<id>` is a parse error.
    pub value: Option<Value>,

    pub attributes: Vec<Attribute>,
    pub layout: EntityLayout,
}

/// One `key: value` attribute together with the whitespace that precedes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    /// Whitespace between the previous syntax and this pair. May be empty
    /// for the first attribute (flush against the value, or covered by the
    /// mandatory post-id whitespace in [`EntityLayout::before_body`]);
    /// non-empty for every attribute after the first.
    pub gap: Spacing,
    pub pair: KeyValuePair,
}

/// Layout slots of an entity:
/// `<id` index? `before_body` value? attrs `before_close` `>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityLayout {
    /// Whitespace after the id (or index), before the value or first
    /// attribute.
    pub before_body: Spacing,

    /// Whitespace immediately before the closing `>`.
    pub before_close: Spacing,
}

/// A reusable parameterized expression: `<id(a, b) {a + b}>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Macro {
    pub id: Identifier,

    /// Parameter names, unique within the macro. May be empty.
    pub params: Vec<Identifier>,

    pub body: Expression,
    pub attributes: Vec<Attribute>,
    pub layout: MacroLayout,
}

/// Layout slots of a macro:
/// `<id(` params `)` `before_body` `{` body `}` attrs `before_close` `>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroLayout {
    pub params: SequenceLayout,

    /// Mandatory whitespace between `)` and `{`.
    pub before_body: Spacing,

    /// Whitespace immediately before the closing `>`.
    pub before_close: Spacing,
}

/// Free text between `/*` and `*/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub content: String,
}

/// An entity, attribute, or hash value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Str(Str),
    Complex(ComplexStr),
    Array(Array),
    Hash(Hash),
}

/// A plain quoted string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Str {
    /// The delimiter the source used: `'` or `"`.
    pub quote: char,

    /// Verbatim text between the quotes; backslash escapes are left
    /// untouched.
    pub raw: String,
}

/// A quoted string containing `{{ expression }}` interpolation holes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexStr {
    /// The delimiter the source used: `'` or `"`.
    pub quote: char,

    /// Literal runs and interpolation holes in source order. Literal
    /// segments are never empty, and adjacent literals are not merged.
    pub segments: Vec<Segment>,
}

/// One span of a complex string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Segment {
    /// Literal text (no interpolation).
    Literal(String),

    /// An embedded `{{ ... }}` expression.
    Interpolation(Expression),
}

/// An ordered literal list: `["a", "b"]`. May be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Array {
    pub items: Vec<Value>,
    pub layout: SequenceLayout,
}

/// An ordered key/value literal: `{one: "1", many: "n"}`.
///
/// Keys need not be unique at parse time; picking among duplicates is a
/// resolution-time concern. Insertion order is preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hash {
    pub items: Vec<KeyValuePair>,
    pub layout: SequenceLayout,
}

/// One `key: value` pair, shared between hashes and attribute lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyValuePair {
    pub key: Identifier,
    pub value: Value,
    pub layout: KvpLayout,
}

/// Layout slots of a pair: key `before_colon` `:` `after_colon` value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KvpLayout {
    pub before_colon: Spacing,
    pub after_colon: Spacing,
}

/// Layout slots of a bracketed, comma-separated sequence.
///
/// Serialization slots: the open bracket, `after_open`, then item `i`
/// followed by `after_items[i]`, with each `,` followed by
/// `after_commas[i - 1]`, then the close bracket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SequenceLayout {
    pub after_open: Spacing,
    pub after_items: Vec<Spacing>,
    pub after_commas: Vec<Spacing>,
}

/// An expression at any precedence level.
///
/// Expressions carry no layout metadata: whitespace around operators is
/// consumed and discarded during parsing, and expressions re-serialize
/// canonically rather than byte-exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// Ternary `test ? consequent : alternate` (right-associative).
    Conditional {
        test: Box<Expression>,
        consequent: Box<Expression>,
        alternate: Box<Expression>,
    },

    /// `||` or `&&` (left-associative).
    Logical {
        operator: LogicalOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// Equality, relational, or arithmetic operator (left-associative).
    Binary {
        operator: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// Prefix `+`, `-`, or `!`.
    Unary {
        operator: UnaryOperator,
        operand: Box<Expression>,
    },

    /// A parenthesized sub-expression. The node is kept so the canonical
    /// serialization reproduces the parentheses.
    Parenthesis(Box<Expression>),

    /// Attribute access: `id..attr` (static) or `id[.expr]` (computed).
    Attribute {
        object: Box<Expression>,
        field: Box<Expression>,
        computed: bool,
    },

    /// Property access: `id.prop` (static) or `id[expr]` (computed).
    Property {
        object: Box<Expression>,
        field: Box<Expression>,
        computed: bool,
    },

    /// Call: `callee(arg, ...)`. The argument list may be empty.
    Call {
        callee: Box<Expression>,
        arguments: Vec<Expression>,
    },

    /// A numeric literal.
    Number(i64),

    /// A bare identifier reference.
    Identifier(Identifier),

    /// A value literal used in expression position.
    Value(Box<Value>),
}

/// Short-circuiting logical operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalOperator {
    Or,
    And,
}

impl LogicalOperator {
    /// The operator's source form.
    pub fn as_str(self) -> &'static str {
        match self {
            LogicalOperator::Or => "||",
            LogicalOperator::And => "&&",
        }
    }
}

/// Binary operators across the equality, relational, and arithmetic levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOperator {
    Equal,
    NotEqual,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
    Add,
    Subtract,
    Modulo,
    Multiply,
    Divide,
}

impl BinaryOperator {
    /// The operator's source form.
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::Less => "<",
            BinaryOperator::LessOrEqual => "<=",
            BinaryOperator::Greater => ">",
            BinaryOperator::GreaterOrEqual => ">=",
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Modulo => "%",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
        }
    }
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOperator {
    Plus,
    Minus,
    Not,
}

impl UnaryOperator {
    /// The operator's source form.
    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOperator::Plus => "+",
            UnaryOperator::Minus => "-",
            UnaryOperator::Not => "!",
        }
    }
}
