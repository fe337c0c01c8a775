//! AST node type definitions.
//!
//! Nodes are grouped into the families the language surface defines:
//! expressions, statements, declarations, patterns, and type annotations.
//! All families share the [`AnyNode`] discriminated union, allocated in the
//! [`crate::ast::Ast`] arena and addressed by [`NodeId`].

mod declarations;
mod expressions;
mod patterns;
mod program;
mod statements;
mod types;

use std::fmt;

pub use declarations::*;
pub use expressions::*;
use fern_source::types::Span;
pub use patterns::*;
pub use program::*;
pub use statements::*;
pub use types::*;

/// A type-safe identifier for nodes in the AST arena.
///
/// A `NodeId` is only meaningful together with the arena that produced it;
/// dropping the arena invalidates every ID at once.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Creates a new `NodeId` with the given index.
    #[must_use]
    pub const fn new(index: u32) -> Self { Self(index) }

    /// Returns the arena index of this node.
    #[must_use]
    pub const fn index(&self) -> u32 { self.0 }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "NodeId({})", self.0) }
}

/// Main AST node type - discriminated union with all node variants.
#[derive(Debug, Clone)]
pub enum AnyNode {
    // Expressions
    /// Binary operation (e.g. `a + b`)
    BinaryExpr(BinaryExpr),
    /// Bind expression (`name <- expr`)
    BindExpr(BindExpr),
    /// Block of statements with an optional trailing value
    BlockExpr(BlockExpr),
    /// Function call (e.g. `f(a, label: b)`)
    CallExpr(CallExpr),
    /// Field access (e.g. `point.x`, `pair.0`)
    DotExpr(DotExpr),
    /// For loop over an iterable
    ForExpr(ForExpr),
    /// Identifier reference
    IdentExpr(IdentExpr),
    /// Conditional expression with optional else branch
    IfExpr(IfExpr),
    /// Index access (e.g. `xs[0]`)
    IndexExpr(IndexExpr),
    /// Anonymous function (e.g. `(x, y) -> x + y`)
    LambdaExpr(LambdaExpr),
    /// List comprehension (e.g. `[x * 2 for x in xs if x > 0]`)
    ListCompExpr(ListCompExpr),
    /// List literal (e.g. `[1, 2, 3]`)
    ListExpr(ListExpr),
    /// Literal value (e.g. `42`, `"hello"`, `true`)
    LiteralExpr(LiteralExpr),
    /// Unconditional loop
    LoopExpr(LoopExpr),
    /// Map literal (e.g. `%{key: value}`)
    MapExpr(MapExpr),
    /// One arm of a `match` or `receive` (pattern, optional guard, body)
    MatchArm(MatchArm),
    /// Match expression over an optional scrutinee
    MatchExpr(MatchExpr),
    /// Range (e.g. `1..10`, `1..=10`)
    RangeExpr(RangeExpr),
    /// Receive expression with arms and optional `after` timeout
    ReceiveExpr(ReceiveExpr),
    /// Record update (e.g. `%{base | field: value}`)
    RecordUpdateExpr(RecordUpdateExpr),
    /// Send a message to a process (`send(pid, msg)`)
    SendExpr(SendExpr),
    /// Spawn a process (`spawn(expr)`)
    SpawnExpr(SpawnExpr),
    /// String with interpolated expressions (e.g. `"Hi, {name}!"`)
    StringInterpExpr(StringInterpExpr),
    /// Try operator (`expr?`)
    TryExpr(TryExpr),
    /// Tuple literal (e.g. `(1, "a")`)
    TupleExpr(TupleExpr),
    /// Unary operation (`-x`, `not b`)
    UnaryExpr(UnaryExpr),
    /// While loop
    WhileExpr(WhileExpr),
    /// With expression (monadic bind chain with optional else arms)
    WithExpr(WithExpr),

    // Statements
    /// Break out of a loop with an optional value
    BreakStmt(BreakStmt),
    /// Continue to the next loop iteration
    ContinueStmt(ContinueStmt),
    /// Defer an expression to scope exit
    DeferStmt(DeferStmt),
    /// Expression used in statement position
    ExpressionStmt(ExpressionStmt),
    /// Let binding with pattern, optional annotation and optional else
    LetStmt(LetStmt),
    /// Return with optional value and optional postfix condition
    ReturnStmt(ReturnStmt),

    // Declarations
    /// Function declaration (single-clause or multi-clause)
    FnDecl(FnDecl),
    /// Trait implementation (`impl Trait for args`)
    ImplDecl(ImplDecl),
    /// Import of a dotted path with optional items/alias
    ImportDecl(ImportDecl),
    /// Module declaration (dotted path)
    ModuleDecl(ModuleDecl),
    /// Newtype declaration wrapping an inner type
    NewtypeDecl(NewtypeDecl),
    /// Trait declaration with method signatures
    TraitDecl(TraitDecl),
    /// Type declaration (record fields or sum variants)
    TypeDecl(TypeDecl),

    // Patterns
    /// Constructor pattern (e.g. `Some(x)`, `None`)
    ConstructorPattern(ConstructorPattern),
    /// Binding pattern (e.g. `x`)
    IdentPattern(IdentPattern),
    /// Literal pattern (e.g. `0`, `"done"`)
    LiteralPattern(LiteralPattern),
    /// Rest pattern (`..name` or `.._`)
    RestPattern(RestPattern),
    /// Tuple or list pattern (e.g. `(a, b)`, `[head, ..tail]`)
    TuplePattern(TuplePattern),
    /// Wildcard pattern (`_`)
    WildcardPattern(WildcardPattern),

    // Type annotations
    /// Function type annotation (e.g. `(Int, Int) -> Bool`)
    FunctionType(FunctionType),
    /// Named type with optional arguments (e.g. `List[Int]`)
    NamedType(NamedType),
    /// Tuple type annotation (e.g. `(Int, String)`)
    TupleType(TupleType),

    // Top-level
    /// A whole source file: the sequence of top-level statements
    Program(Program),
}

// Generate trait implementations from the master variant list
for_each_node_variant!(impl_astnode_for_anynode);
for_each_node_variant!(impl_display_for_anynode);

/// A trait for AST nodes that can be stored in the arena.
pub trait AstNode: fmt::Display {
    /// Returns the kind of this node.
    fn kind(&self) -> NodeKind;

    /// Returns the span of this node in the source code.
    fn span(&self) -> Span;

    /// Returns the children of this node, in source order.
    fn children(&self) -> Vec<NodeId> { vec![] }
}

/// High-level node categorization for quick filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Declaration, // Function, type, trait, impl, newtype, module, import
    Expression,  // All expressions
    Module,      // Top-level construct
    Pattern,     // Match patterns and arms
    Statement,   // All statements
    Type,        // Type annotations
}

/// The node structure that pairs common metadata with node-specific data.
#[derive(Debug, Clone)]
pub struct Node {
    /// The kind of node
    pub kind: NodeKind,
    /// Node-specific data
    pub data: AnyNode,
    /// Source code span
    pub span: Span,
}
