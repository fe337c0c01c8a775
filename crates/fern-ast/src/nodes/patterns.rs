//! Pattern node types.
//!
//! Patterns appear on the left-hand side of `let`, in `match`/`receive`
//! arms, in `with … else` arms, and as multi-clause function parameters.

use std::fmt;

use fern_source::types::Span;

use super::{AstNode, NodeId, NodeKind};

/// Represents the wildcard pattern (`_`), which matches anything without
/// binding.
#[derive(Debug, Clone, Copy)]
pub struct WildcardPattern {
    /// The span of this node in the source code
    pub span: Span,
}

impl WildcardPattern {
    /// Creates a new wildcard pattern
    #[must_use]
    pub const fn new(span: Span) -> Self { Self { span } }
}

impl AstNode for WildcardPattern {
    fn kind(&self) -> NodeKind { NodeKind::Pattern }

    fn span(&self) -> Span { self.span }
}

impl fmt::Display for WildcardPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Wildcard") }
}

/// Represents a binding pattern: matches anything and binds it to a name.
#[derive(Debug, Clone)]
pub struct IdentPattern {
    /// The bound name
    pub name: String,
    /// The span of this node in the source code
    pub span: Span,
}

impl IdentPattern {
    /// Creates a new identifier pattern
    #[must_use]
    pub const fn new(name: String, span: Span) -> Self { Self { name, span } }
}

impl AstNode for IdentPattern {
    fn kind(&self) -> NodeKind { NodeKind::Pattern }

    fn span(&self) -> Span { self.span }
}

impl fmt::Display for IdentPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IdentPattern({})", self.name)
    }
}

/// Represents a literal pattern: matches when the value equals the literal.
#[derive(Debug, Clone, Copy)]
pub struct LiteralPattern {
    /// The literal expression to compare against
    pub value: NodeId,
    /// The span of this node in the source code
    pub span: Span,
}

impl LiteralPattern {
    /// Creates a new literal pattern
    #[must_use]
    pub const fn new(value: NodeId, span: Span) -> Self { Self { value, span } }
}

impl AstNode for LiteralPattern {
    fn kind(&self) -> NodeKind { NodeKind::Pattern }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> { vec![self.value] }
}

impl fmt::Display for LiteralPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "LiteralPattern") }
}

/// Represents a tuple pattern (also used for list patterns): matches a
/// sequence element-wise.
#[derive(Debug, Clone)]
pub struct TuplePattern {
    /// The element patterns, in source order
    pub elements: Vec<NodeId>,
    /// The span of this node in the source code
    pub span: Span,
}

impl TuplePattern {
    /// Creates a new tuple pattern
    #[must_use]
    pub const fn new(elements: Vec<NodeId>, span: Span) -> Self { Self { elements, span } }
}

impl AstNode for TuplePattern {
    fn kind(&self) -> NodeKind { NodeKind::Pattern }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> { self.elements.clone() }
}

impl fmt::Display for TuplePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TuplePattern({} elements)", self.elements.len())
    }
}

/// Represents a constructor pattern (e.g. `Some(x)`).
///
/// A nullary constructor like `None` is a constructor pattern with an empty
/// argument list.
#[derive(Debug, Clone)]
pub struct ConstructorPattern {
    /// The constructor name
    pub name: String,
    /// The argument patterns, in source order
    pub args: Vec<NodeId>,
    /// The span of this node in the source code
    pub span: Span,
}

impl ConstructorPattern {
    /// Creates a new constructor pattern
    #[must_use]
    pub const fn new(name: String, args: Vec<NodeId>, span: Span) -> Self {
        Self { name, args, span }
    }
}

impl AstNode for ConstructorPattern {
    fn kind(&self) -> NodeKind { NodeKind::Pattern }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> { self.args.clone() }
}

impl fmt::Display for ConstructorPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConstructorPattern({})", self.name)
    }
}

/// Represents a rest pattern inside a sequence (`..name` or `.._`).
#[derive(Debug, Clone)]
pub struct RestPattern {
    /// The bound name, or `None` for `.._`
    pub name: Option<String>,
    /// The span of this node in the source code
    pub span: Span,
}

impl RestPattern {
    /// Creates a new rest pattern
    #[must_use]
    pub const fn new(name: Option<String>, span: Span) -> Self { Self { name, span } }
}

impl AstNode for RestPattern {
    fn kind(&self) -> NodeKind { NodeKind::Pattern }

    fn span(&self) -> Span { self.span }
}

impl fmt::Display for RestPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RestPattern({})", self.name.as_deref().unwrap_or("_"))
    }
}
