//! Expression node types.
//!
//! Every expression form in the language surface has a distinct node here.
//! Expressions own their lexical payloads (names, processed string content)
//! and reference child expressions by `NodeId`.

use std::fmt;

use fern_source::types::Span;

use super::{AstNode, NodeId, NodeKind};

// ============================================================================
// Literals
// ============================================================================

/// A literal payload carried by a [`LiteralExpr`].
///
/// String content is stored escape-processed: `\n`, `\t`, `\r`, `\\`, `\"`,
/// `\{` and `\}` have already been mapped by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// Integer literal (decimal, hex, binary or octal in source)
    Int(i64),
    /// Float literal
    Float(f64),
    /// String literal without interpolation
    Str(String),
    /// Boolean literal
    Bool(bool),
}

/// Represents a literal value in the AST (e.g. `42`, `"hello"`, `true`).
#[derive(Debug, Clone)]
pub struct LiteralExpr {
    /// The literal value
    pub value: LiteralValue,
    /// The span of this node in the source code
    pub span: Span,
}

impl LiteralExpr {
    /// Creates a new literal expression
    #[must_use]
    pub const fn new(value: LiteralValue, span: Span) -> Self { Self { value, span } }
}

impl AstNode for LiteralExpr {
    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }
}

impl fmt::Display for LiteralExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            LiteralValue::Int(v) => write!(f, "Literal({v})"),
            LiteralValue::Float(v) => write!(f, "Literal({v})"),
            LiteralValue::Str(v) => write!(f, "Literal({v:?})"),
            LiteralValue::Bool(v) => write!(f, "Literal({v})"),
        }
    }
}

// ============================================================================
// String Interpolation
// ============================================================================

/// One segment of an interpolated string.
#[derive(Debug, Clone)]
pub enum StringPart {
    /// A literal text segment, escape-processed
    Text(String),
    /// An interpolated expression
    Expr(NodeId),
}

/// Represents a string with interpolated expressions (e.g. `"Hi, {name}!"`).
///
/// Parts alternate between literal text and expressions in source order.
/// Empty text segments are not materialized, so `"{a}{b}"` has exactly two
/// parts.
#[derive(Debug, Clone)]
pub struct StringInterpExpr {
    /// The segments of the string, in source order
    pub parts: Vec<StringPart>,
    /// The span of this node in the source code
    pub span: Span,
}

impl StringInterpExpr {
    /// Creates a new interpolated string expression
    #[must_use]
    pub const fn new(parts: Vec<StringPart>, span: Span) -> Self { Self { parts, span } }
}

impl AstNode for StringInterpExpr {
    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> {
        self.parts
            .iter()
            .filter_map(|p| match p {
                StringPart::Expr(id) => Some(*id),
                StringPart::Text(_) => None,
            })
            .collect()
    }
}

impl fmt::Display for StringInterpExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StringInterp({} parts)", self.parts.len())
    }
}

// ============================================================================
// Identifiers
// ============================================================================

/// Represents an identifier reference in expression position.
#[derive(Debug, Clone)]
pub struct IdentExpr {
    /// The identifier name
    pub name: String,
    /// The span of this node in the source code
    pub span: Span,
}

impl IdentExpr {
    /// Creates a new identifier expression
    #[must_use]
    pub const fn new(name: String, span: Span) -> Self { Self { name, span } }
}

impl AstNode for IdentExpr {
    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }
}

impl fmt::Display for IdentExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Ident({})", self.name) }
}

// ============================================================================
// Binary Operations
// ============================================================================

/// Represents the operator of a binary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    // Arithmetic
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
    Mod, // %
    Pow, // ** (right-associative)

    // Comparison
    Eq,    // ==
    NotEq, // !=
    Lt,    // <
    LtEq,  // <=
    Gt,    // >
    GtEq,  // >=
    In,    // in

    // Logical
    And, // and
    Or,  // or

    // Pipeline
    Pipe, // |>
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "**",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::In => "in",
            Self::And => "and",
            Self::Or => "or",
            Self::Pipe => "|>",
        };
        write!(f, "{op}")
    }
}

/// Represents a binary operation in the AST (e.g. `a + b`).
#[derive(Debug, Clone, Copy)]
pub struct BinaryExpr {
    /// The operator
    pub op: BinaryOp,
    /// The left operand
    pub left: NodeId,
    /// The right operand
    pub right: NodeId,
    /// The span of this node in the source code
    pub span: Span,
}

impl BinaryExpr {
    /// Creates a new binary operation
    #[must_use]
    pub const fn new(op: BinaryOp, left: NodeId, right: NodeId, span: Span) -> Self {
        Self { op, left, right, span }
    }
}

impl AstNode for BinaryExpr {
    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> { vec![self.left, self.right] }
}

impl fmt::Display for BinaryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Binary({})", self.op) }
}

// ============================================================================
// Unary Operations
// ============================================================================

/// Represents the operator of a unary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Arithmetic negation (`-x`)
    Neg,
    /// Logical negation (`not x`)
    Not,
}

/// Represents a unary operation in the AST (e.g. `-x`, `not b`).
#[derive(Debug, Clone, Copy)]
pub struct UnaryExpr {
    /// The operator
    pub op: UnaryOp,
    /// The operand
    pub operand: NodeId,
    /// The span of this node in the source code
    pub span: Span,
}

impl UnaryExpr {
    /// Creates a new unary operation
    #[must_use]
    pub const fn new(op: UnaryOp, operand: NodeId, span: Span) -> Self {
        Self { op, operand, span }
    }
}

impl AstNode for UnaryExpr {
    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> { vec![self.operand] }
}

impl fmt::Display for UnaryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Unary({:?})", self.op) }
}

// ============================================================================
// Calls
// ============================================================================

/// A single call argument, optionally labelled (`f(count: 3)`).
#[derive(Debug, Clone)]
pub struct CallArg {
    /// The argument label, if any
    pub name: Option<String>,
    /// The argument value
    pub value: NodeId,
}

/// Represents a function call (e.g. `f(a, label: b)`).
#[derive(Debug, Clone)]
pub struct CallExpr {
    /// The callee expression
    pub callee: NodeId,
    /// Ordered list of (possibly labelled) arguments
    pub args: Vec<CallArg>,
    /// The span of this node in the source code
    pub span: Span,
}

impl CallExpr {
    /// Creates a new call expression
    #[must_use]
    pub const fn new(callee: NodeId, args: Vec<CallArg>, span: Span) -> Self {
        Self { callee, args, span }
    }
}

impl AstNode for CallExpr {
    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> {
        let mut children = vec![self.callee];
        children.extend(self.args.iter().map(|a| a.value));
        children
    }
}

impl fmt::Display for CallExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Call({} args)", self.args.len())
    }
}

// ============================================================================
// Control Flow Expressions
// ============================================================================

/// Represents a conditional expression (`if cond: …` / `if cond: … else: …`).
#[derive(Debug, Clone, Copy)]
pub struct IfExpr {
    /// The condition
    pub condition: NodeId,
    /// The then branch
    pub then_branch: NodeId,
    /// The else branch, if present
    pub else_branch: Option<NodeId>,
    /// The span of this node in the source code
    pub span: Span,
}

impl IfExpr {
    /// Creates a new conditional expression
    #[must_use]
    pub const fn new(
        condition: NodeId,
        then_branch: NodeId,
        else_branch: Option<NodeId>,
        span: Span,
    ) -> Self {
        Self { condition, then_branch, else_branch, span }
    }
}

impl AstNode for IfExpr {
    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> {
        let mut children = vec![self.condition, self.then_branch];
        children.extend(self.else_branch);
        children
    }
}

impl fmt::Display for IfExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "If") }
}

/// One arm of a `match` or `receive` expression.
#[derive(Debug, Clone, Copy)]
pub struct MatchArm {
    /// The pattern to match against
    pub pattern: NodeId,
    /// Optional guard condition
    pub guard: Option<NodeId>,
    /// The arm body
    pub body: NodeId,
    /// The span of this node in the source code
    pub span: Span,
}

impl MatchArm {
    /// Creates a new match arm
    #[must_use]
    pub const fn new(pattern: NodeId, guard: Option<NodeId>, body: NodeId, span: Span) -> Self {
        Self { pattern, guard, body, span }
    }
}

impl AstNode for MatchArm {
    fn kind(&self) -> NodeKind { NodeKind::Pattern }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> {
        let mut children = vec![self.pattern];
        children.extend(self.guard);
        children.push(self.body);
        children
    }
}

impl fmt::Display for MatchArm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "MatchArm") }
}

/// Represents a match expression.
///
/// The scrutinee is optional: `match:` with no value matches guards only.
#[derive(Debug, Clone)]
pub struct MatchExpr {
    /// The value being matched, if any
    pub value: Option<NodeId>,
    /// The arms, in source order (each a [`MatchArm`] node)
    pub arms: Vec<NodeId>,
    /// The span of this node in the source code
    pub span: Span,
}

impl MatchExpr {
    /// Creates a new match expression
    #[must_use]
    pub const fn new(value: Option<NodeId>, arms: Vec<NodeId>, span: Span) -> Self {
        Self { value, arms, span }
    }
}

impl AstNode for MatchExpr {
    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> {
        let mut children = Vec::new();
        children.extend(self.value);
        children.extend(&self.arms);
        children
    }
}

impl fmt::Display for MatchExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Match({} arms)", self.arms.len())
    }
}

/// Represents a block: a sequence of statements with an optional final value.
///
/// A block whose last item is an expression yields that expression's value;
/// a block of only statements yields unit.
#[derive(Debug, Clone)]
pub struct BlockExpr {
    /// The statements, in source order
    pub statements: Vec<NodeId>,
    /// The trailing value expression, if any
    pub value: Option<NodeId>,
    /// The span of this node in the source code
    pub span: Span,
}

impl BlockExpr {
    /// Creates a new block expression
    #[must_use]
    pub const fn new(statements: Vec<NodeId>, value: Option<NodeId>, span: Span) -> Self {
        Self { statements, value, span }
    }
}

impl AstNode for BlockExpr {
    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> {
        let mut children = self.statements.clone();
        children.extend(self.value);
        children
    }
}

impl fmt::Display for BlockExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Block({} stmts)", self.statements.len())
    }
}

// ============================================================================
// Collection Literals
// ============================================================================

/// Represents a list literal (e.g. `[1, 2, 3]`).
#[derive(Debug, Clone)]
pub struct ListExpr {
    /// The elements, in source order
    pub elements: Vec<NodeId>,
    /// The span of this node in the source code
    pub span: Span,
}

impl ListExpr {
    /// Creates a new list literal
    #[must_use]
    pub const fn new(elements: Vec<NodeId>, span: Span) -> Self { Self { elements, span } }
}

impl AstNode for ListExpr {
    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> { self.elements.clone() }
}

impl fmt::Display for ListExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "List({} elements)", self.elements.len())
    }
}

/// Represents a tuple literal (e.g. `(1, "a")`).
#[derive(Debug, Clone)]
pub struct TupleExpr {
    /// The elements, in source order
    pub elements: Vec<NodeId>,
    /// The span of this node in the source code
    pub span: Span,
}

impl TupleExpr {
    /// Creates a new tuple literal
    #[must_use]
    pub const fn new(elements: Vec<NodeId>, span: Span) -> Self { Self { elements, span } }
}

impl AstNode for TupleExpr {
    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> { self.elements.clone() }
}

impl fmt::Display for TupleExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tuple({} elements)", self.elements.len())
    }
}

/// A key-value pair in a map literal.
#[derive(Debug, Clone, Copy)]
pub struct MapEntry {
    /// The key expression
    pub key: NodeId,
    /// The value expression
    pub value: NodeId,
}

/// Represents a map literal (e.g. `%{name: "fern", age: 3}`).
#[derive(Debug, Clone)]
pub struct MapExpr {
    /// The entries, in source order
    pub entries: Vec<MapEntry>,
    /// The span of this node in the source code
    pub span: Span,
}

impl MapExpr {
    /// Creates a new map literal
    #[must_use]
    pub const fn new(entries: Vec<MapEntry>, span: Span) -> Self { Self { entries, span } }
}

impl AstNode for MapExpr {
    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> {
        self.entries.iter().flat_map(|e| [e.key, e.value]).collect()
    }
}

impl fmt::Display for MapExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Map({} entries)", self.entries.len())
    }
}

/// A field initializer in a record update.
#[derive(Debug, Clone)]
pub struct FieldInit {
    /// The field name
    pub name: String,
    /// The new value
    pub value: NodeId,
}

/// Represents a record update (e.g. `%{point | x: 10}`).
#[derive(Debug, Clone)]
pub struct RecordUpdateExpr {
    /// The base record expression
    pub base: NodeId,
    /// The fields being replaced
    pub fields: Vec<FieldInit>,
    /// The span of this node in the source code
    pub span: Span,
}

impl RecordUpdateExpr {
    /// Creates a new record update expression
    #[must_use]
    pub const fn new(base: NodeId, fields: Vec<FieldInit>, span: Span) -> Self {
        Self { base, fields, span }
    }
}

impl AstNode for RecordUpdateExpr {
    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> {
        let mut children = vec![self.base];
        children.extend(self.fields.iter().map(|f| f.value));
        children
    }
}

impl fmt::Display for RecordUpdateExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordUpdate({} fields)", self.fields.len())
    }
}

/// Represents a list comprehension (e.g. `[x * 2 for x in xs if x > 0]`).
#[derive(Debug, Clone)]
pub struct ListCompExpr {
    /// The element expression
    pub body: NodeId,
    /// The loop variable name
    pub var_name: String,
    /// The iterable expression
    pub iterable: NodeId,
    /// Optional filter condition
    pub condition: Option<NodeId>,
    /// The span of this node in the source code
    pub span: Span,
}

impl ListCompExpr {
    /// Creates a new list comprehension
    #[must_use]
    pub const fn new(
        body: NodeId,
        var_name: String,
        iterable: NodeId,
        condition: Option<NodeId>,
        span: Span,
    ) -> Self {
        Self { body, var_name, iterable, condition, span }
    }
}

impl AstNode for ListCompExpr {
    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> {
        let mut children = vec![self.body, self.iterable];
        children.extend(self.condition);
        children
    }
}

impl fmt::Display for ListCompExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ListComp({})", self.var_name)
    }
}

// ============================================================================
// Functions as Values
// ============================================================================

/// Represents an anonymous function (e.g. `(x, y) -> x + y`).
///
/// Lambda parameters are bare names; typed parameters belong to `fn`
/// declarations only.
#[derive(Debug, Clone)]
pub struct LambdaExpr {
    /// The parameter names
    pub params: Vec<String>,
    /// The body expression
    pub body: NodeId,
    /// The span of this node in the source code
    pub span: Span,
}

impl LambdaExpr {
    /// Creates a new lambda expression
    #[must_use]
    pub const fn new(params: Vec<String>, body: NodeId, span: Span) -> Self {
        Self { params, body, span }
    }
}

impl AstNode for LambdaExpr {
    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> { vec![self.body] }
}

impl fmt::Display for LambdaExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lambda({} params)", self.params.len())
    }
}

// ============================================================================
// Postfix Forms
// ============================================================================

/// Represents a field access (e.g. `point.x`).
///
/// For tuple indexing the field is a numeric lexeme: `pair.0`. A chained
/// numeric access like `t.0.1` produces two nested `DotExpr` nodes.
#[derive(Debug, Clone)]
pub struct DotExpr {
    /// The object being accessed
    pub object: NodeId,
    /// The field name (may be numeric for tuple indexing)
    pub field: String,
    /// The span of this node in the source code
    pub span: Span,
}

impl DotExpr {
    /// Creates a new field access
    #[must_use]
    pub const fn new(object: NodeId, field: String, span: Span) -> Self {
        Self { object, field, span }
    }
}

impl AstNode for DotExpr {
    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> { vec![self.object] }
}

impl fmt::Display for DotExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Dot({})", self.field) }
}

/// Represents an index access (e.g. `xs[0]`).
#[derive(Debug, Clone, Copy)]
pub struct IndexExpr {
    /// The object being indexed
    pub object: NodeId,
    /// The index expression
    pub index: NodeId,
    /// The span of this node in the source code
    pub span: Span,
}

impl IndexExpr {
    /// Creates a new index access
    #[must_use]
    pub const fn new(object: NodeId, index: NodeId, span: Span) -> Self {
        Self { object, index, span }
    }
}

impl AstNode for IndexExpr {
    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> { vec![self.object, self.index] }
}

impl fmt::Display for IndexExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Index") }
}

/// Represents the try operator (`expr?`).
///
/// Evaluates to the success value of a Result-shaped expression or
/// propagates the failure to the enclosing function.
#[derive(Debug, Clone, Copy)]
pub struct TryExpr {
    /// The expression whose result is unwrapped
    pub value: NodeId,
    /// The span of this node in the source code
    pub span: Span,
}

impl TryExpr {
    /// Creates a new try expression
    #[must_use]
    pub const fn new(value: NodeId, span: Span) -> Self { Self { value, span } }
}

impl AstNode for TryExpr {
    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> { vec![self.value] }
}

impl fmt::Display for TryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Try") }
}

// ============================================================================
// Ranges
// ============================================================================

/// Represents a range (e.g. `1..10`, `0..=n`).
#[derive(Debug, Clone, Copy)]
pub struct RangeExpr {
    /// The start expression
    pub start: NodeId,
    /// The end expression
    pub end: NodeId,
    /// Whether the end is inclusive (`..=`)
    pub inclusive: bool,
    /// The span of this node in the source code
    pub span: Span,
}

impl RangeExpr {
    /// Creates a new range expression
    #[must_use]
    pub const fn new(start: NodeId, end: NodeId, inclusive: bool, span: Span) -> Self {
        Self { start, end, inclusive, span }
    }
}

impl AstNode for RangeExpr {
    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> { vec![self.start, self.end] }
}

impl fmt::Display for RangeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Range({})", if self.inclusive { "..=" } else { ".." })
    }
}

// ============================================================================
// Binds and With
// ============================================================================

/// Represents a bind expression (`name <- expr`).
///
/// A first-class expression inside `with` bindings and block statement
/// sequences; the checker interprets it monadically over Result-shaped
/// values.
#[derive(Debug, Clone)]
pub struct BindExpr {
    /// The bound name
    pub name: String,
    /// The bound expression
    pub value: NodeId,
    /// The span of this node in the source code
    pub span: Span,
}

impl BindExpr {
    /// Creates a new bind expression
    #[must_use]
    pub const fn new(name: String, value: NodeId, span: Span) -> Self {
        Self { name, value, span }
    }
}

impl AstNode for BindExpr {
    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> { vec![self.value] }
}

impl fmt::Display for BindExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Bind({})", self.name) }
}

/// Represents a with expression: a chain of binds, a body, and optional
/// else arms handling the first failed bind.
#[derive(Debug, Clone)]
pub struct WithExpr {
    /// The bindings, in source order (each a [`BindExpr`] node)
    pub bindings: Vec<NodeId>,
    /// The body evaluated when every bind succeeds
    pub body: NodeId,
    /// Else arms matched against the first failure (each a [`MatchArm`] node)
    pub else_arms: Vec<NodeId>,
    /// The span of this node in the source code
    pub span: Span,
}

impl WithExpr {
    /// Creates a new with expression
    #[must_use]
    pub const fn new(
        bindings: Vec<NodeId>,
        body: NodeId,
        else_arms: Vec<NodeId>,
        span: Span,
    ) -> Self {
        Self { bindings, body, else_arms, span }
    }
}

impl AstNode for WithExpr {
    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> {
        let mut children = self.bindings.clone();
        children.push(self.body);
        children.extend(&self.else_arms);
        children
    }
}

impl fmt::Display for WithExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "With({} bindings)", self.bindings.len())
    }
}

// ============================================================================
// Loops
// ============================================================================

/// Represents a for loop (`for x in xs: …`).
#[derive(Debug, Clone)]
pub struct ForExpr {
    /// The loop variable name
    pub var: String,
    /// The iterable expression
    pub iterable: NodeId,
    /// The loop body
    pub body: NodeId,
    /// The span of this node in the source code
    pub span: Span,
}

impl ForExpr {
    /// Creates a new for loop
    #[must_use]
    pub const fn new(var: String, iterable: NodeId, body: NodeId, span: Span) -> Self {
        Self { var, iterable, body, span }
    }
}

impl AstNode for ForExpr {
    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> { vec![self.iterable, self.body] }
}

impl fmt::Display for ForExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "For({})", self.var) }
}

/// Represents a while loop (`while cond: …`).
#[derive(Debug, Clone, Copy)]
pub struct WhileExpr {
    /// The loop condition
    pub condition: NodeId,
    /// The loop body
    pub body: NodeId,
    /// The span of this node in the source code
    pub span: Span,
}

impl WhileExpr {
    /// Creates a new while loop
    #[must_use]
    pub const fn new(condition: NodeId, body: NodeId, span: Span) -> Self {
        Self { condition, body, span }
    }
}

impl AstNode for WhileExpr {
    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> { vec![self.condition, self.body] }
}

impl fmt::Display for WhileExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "While") }
}

/// Represents an unconditional loop (`loop: …`), exited via `break`.
#[derive(Debug, Clone, Copy)]
pub struct LoopExpr {
    /// The loop body
    pub body: NodeId,
    /// The span of this node in the source code
    pub span: Span,
}

impl LoopExpr {
    /// Creates a new loop expression
    #[must_use]
    pub const fn new(body: NodeId, span: Span) -> Self { Self { body, span } }
}

impl AstNode for LoopExpr {
    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> { vec![self.body] }
}

impl fmt::Display for LoopExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Loop") }
}

// ============================================================================
// Processes
// ============================================================================

/// Represents spawning a process (`spawn(expr)`).
#[derive(Debug, Clone, Copy)]
pub struct SpawnExpr {
    /// The expression evaluated in the new process
    pub body: NodeId,
    /// The span of this node in the source code
    pub span: Span,
}

impl SpawnExpr {
    /// Creates a new spawn expression
    #[must_use]
    pub const fn new(body: NodeId, span: Span) -> Self { Self { body, span } }
}

impl AstNode for SpawnExpr {
    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> { vec![self.body] }
}

impl fmt::Display for SpawnExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Spawn") }
}

/// Represents sending a message to a process (`send(pid, msg)`).
#[derive(Debug, Clone, Copy)]
pub struct SendExpr {
    /// The target process expression
    pub target: NodeId,
    /// The message expression
    pub message: NodeId,
    /// The span of this node in the source code
    pub span: Span,
}

impl SendExpr {
    /// Creates a new send expression
    #[must_use]
    pub const fn new(target: NodeId, message: NodeId, span: Span) -> Self {
        Self { target, message, span }
    }
}

impl AstNode for SendExpr {
    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> { vec![self.target, self.message] }
}

impl fmt::Display for SendExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Send") }
}

/// The timeout arm of a receive expression.
#[derive(Debug, Clone, Copy)]
pub struct ReceiveAfter {
    /// The timeout expression
    pub timeout: NodeId,
    /// The body run when the timeout elapses
    pub body: NodeId,
}

/// Represents a receive expression: message arms plus an optional `after`
/// timeout arm.
#[derive(Debug, Clone)]
pub struct ReceiveExpr {
    /// The message arms, in source order (each a [`MatchArm`] node)
    pub arms: Vec<NodeId>,
    /// The timeout arm, if present
    pub after: Option<ReceiveAfter>,
    /// The span of this node in the source code
    pub span: Span,
}

impl ReceiveExpr {
    /// Creates a new receive expression
    #[must_use]
    pub const fn new(arms: Vec<NodeId>, after: Option<ReceiveAfter>, span: Span) -> Self {
        Self { arms, after, span }
    }
}

impl AstNode for ReceiveExpr {
    fn kind(&self) -> NodeKind { NodeKind::Expression }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> {
        let mut children = self.arms.clone();
        if let Some(after) = &self.after {
            children.push(after.timeout);
            children.push(after.body);
        }
        children
    }
}

impl fmt::Display for ReceiveExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Receive({} arms)", self.arms.len())
    }
}
