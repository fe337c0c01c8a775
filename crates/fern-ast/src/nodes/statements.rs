//! Statement node types.

use std::fmt;

use fern_source::types::Span;

use super::{AstNode, NodeId, NodeKind};

// ============================================================================
// Let Bindings
// ============================================================================

/// Represents a let binding (e.g. `let (a, b) = pair` or
/// `let Some(x) = find(k) else: fallback`).
#[derive(Debug, Clone, Copy)]
pub struct LetStmt {
    /// The pattern bound by this let
    pub pattern: NodeId,
    /// Optional type annotation
    pub ty: Option<NodeId>,
    /// The bound value
    pub value: NodeId,
    /// Optional else expression, evaluated when the pattern fails to match
    pub else_branch: Option<NodeId>,
    /// The span of this node in the source code
    pub span: Span,
}

impl LetStmt {
    /// Creates a new let statement
    #[must_use]
    pub const fn new(
        pattern: NodeId,
        ty: Option<NodeId>,
        value: NodeId,
        else_branch: Option<NodeId>,
        span: Span,
    ) -> Self {
        Self { pattern, ty, value, else_branch, span }
    }
}

impl AstNode for LetStmt {
    fn kind(&self) -> NodeKind { NodeKind::Statement }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> {
        let mut children = vec![self.pattern];
        children.extend(self.ty);
        children.push(self.value);
        children.extend(self.else_branch);
        children
    }
}

impl fmt::Display for LetStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Let") }
}

// ============================================================================
// Returns
// ============================================================================

/// Represents a return statement with an optional value and an optional
/// postfix condition (`return x if done`, `return x unless valid`).
///
/// The `unless` form is stored with the condition already negated.
#[derive(Debug, Clone, Copy)]
pub struct ReturnStmt {
    /// The returned value, if any
    pub value: Option<NodeId>,
    /// Postfix condition; the return only fires when it holds
    pub condition: Option<NodeId>,
    /// The span of this node in the source code
    pub span: Span,
}

impl ReturnStmt {
    /// Creates a new return statement
    #[must_use]
    pub const fn new(value: Option<NodeId>, condition: Option<NodeId>, span: Span) -> Self {
        Self { value, condition, span }
    }
}

impl AstNode for ReturnStmt {
    fn kind(&self) -> NodeKind { NodeKind::Statement }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> {
        let mut children = Vec::new();
        children.extend(self.value);
        children.extend(self.condition);
        children
    }
}

impl fmt::Display for ReturnStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Return") }
}

// ============================================================================
// Defer
// ============================================================================

/// Represents a defer statement: the expression runs at scope exit.
#[derive(Debug, Clone, Copy)]
pub struct DeferStmt {
    /// The deferred expression
    pub value: NodeId,
    /// The span of this node in the source code
    pub span: Span,
}

impl DeferStmt {
    /// Creates a new defer statement
    #[must_use]
    pub const fn new(value: NodeId, span: Span) -> Self { Self { value, span } }
}

impl AstNode for DeferStmt {
    fn kind(&self) -> NodeKind { NodeKind::Statement }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> { vec![self.value] }
}

impl fmt::Display for DeferStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Defer") }
}

// ============================================================================
// Loop Control
// ============================================================================

/// Represents a break statement with an optional value.
#[derive(Debug, Clone, Copy)]
pub struct BreakStmt {
    /// The value the enclosing loop evaluates to, if any
    pub value: Option<NodeId>,
    /// The span of this node in the source code
    pub span: Span,
}

impl BreakStmt {
    /// Creates a new break statement
    #[must_use]
    pub const fn new(value: Option<NodeId>, span: Span) -> Self { Self { value, span } }
}

impl AstNode for BreakStmt {
    fn kind(&self) -> NodeKind { NodeKind::Statement }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> { self.value.into_iter().collect() }
}

impl fmt::Display for BreakStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Break") }
}

/// Represents a continue statement.
#[derive(Debug, Clone, Copy)]
pub struct ContinueStmt {
    /// The span of this node in the source code
    pub span: Span,
}

impl ContinueStmt {
    /// Creates a new continue statement
    #[must_use]
    pub const fn new(span: Span) -> Self { Self { span } }
}

impl AstNode for ContinueStmt {
    fn kind(&self) -> NodeKind { NodeKind::Statement }

    fn span(&self) -> Span { self.span }
}

impl fmt::Display for ContinueStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Continue") }
}

// ============================================================================
// Expression Statements
// ============================================================================

/// Represents an expression used in statement position.
#[derive(Debug, Clone, Copy)]
pub struct ExpressionStmt {
    /// The wrapped expression
    pub expr: NodeId,
    /// The span of this node in the source code
    pub span: Span,
}

impl ExpressionStmt {
    /// Creates a new expression statement
    #[must_use]
    pub const fn new(expr: NodeId, span: Span) -> Self { Self { expr, span } }
}

impl AstNode for ExpressionStmt {
    fn kind(&self) -> NodeKind { NodeKind::Statement }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> { vec![self.expr] }
}

impl fmt::Display for ExpressionStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "ExpressionStmt") }
}
