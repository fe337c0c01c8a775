//! The top-level program node.

use std::fmt;

use fern_source::types::Span;

use super::{AstNode, NodeId, NodeKind};

/// Represents a whole source file: the sequence of top-level statements.
///
/// Adjacent same-name function clauses have already been merged into single
/// multi-clause [`super::FnDecl`] nodes by the time a `Program` is produced.
#[derive(Debug, Clone)]
pub struct Program {
    /// The top-level statements, in source order
    pub statements: Vec<NodeId>,
    /// The span of this node in the source code
    pub span: Span,
}

impl Program {
    /// Creates a new program node
    #[must_use]
    pub const fn new(statements: Vec<NodeId>, span: Span) -> Self { Self { statements, span } }
}

impl AstNode for Program {
    fn kind(&self) -> NodeKind { NodeKind::Module }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> { self.statements.clone() }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Program({} statements)", self.statements.len())
    }
}
