//! Type annotation node types.
//!
//! These are the surface-syntax type expressions the parser produces for
//! annotations (`let x: List[Int]`, parameter and return types). The
//! post-inference type representation is a separate IR and lives in the
//! `fern-types` crate.

use std::fmt;

use fern_source::types::Span;

use super::{AstNode, NodeId, NodeKind};

/// Represents a named type with optional arguments (e.g. `Int`,
/// `List[String]`, `Map[K, V]`).
#[derive(Debug, Clone)]
pub struct NamedType {
    /// The type name
    pub name: String,
    /// The type arguments, empty for a bare name
    pub args: Vec<NodeId>,
    /// The span of this node in the source code
    pub span: Span,
}

impl NamedType {
    /// Creates a new named type annotation
    #[must_use]
    pub const fn new(name: String, args: Vec<NodeId>, span: Span) -> Self {
        Self { name, args, span }
    }
}

impl AstNode for NamedType {
    fn kind(&self) -> NodeKind { NodeKind::Type }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> { self.args.clone() }
}

impl fmt::Display for NamedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NamedType({})", self.name)
    }
}

/// Represents a function type annotation (e.g. `(Int, Int) -> Bool`).
#[derive(Debug, Clone)]
pub struct FunctionType {
    /// The parameter types, in source order
    pub params: Vec<NodeId>,
    /// The return type
    pub ret: NodeId,
    /// The span of this node in the source code
    pub span: Span,
}

impl FunctionType {
    /// Creates a new function type annotation
    #[must_use]
    pub const fn new(params: Vec<NodeId>, ret: NodeId, span: Span) -> Self {
        Self { params, ret, span }
    }
}

impl AstNode for FunctionType {
    fn kind(&self) -> NodeKind { NodeKind::Type }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> {
        let mut children = self.params.clone();
        children.push(self.ret);
        children
    }
}

impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FunctionType({} params)", self.params.len())
    }
}

/// Represents a tuple type annotation (e.g. `(Int, String)`).
#[derive(Debug, Clone)]
pub struct TupleType {
    /// The element types, in source order
    pub elements: Vec<NodeId>,
    /// The span of this node in the source code
    pub span: Span,
}

impl TupleType {
    /// Creates a new tuple type annotation
    #[must_use]
    pub const fn new(elements: Vec<NodeId>, span: Span) -> Self { Self { elements, span } }
}

impl AstNode for TupleType {
    fn kind(&self) -> NodeKind { NodeKind::Type }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> { self.elements.clone() }
}

impl fmt::Display for TupleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TupleType({} elements)", self.elements.len())
    }
}
