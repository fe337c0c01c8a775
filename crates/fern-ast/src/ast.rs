//! AST arena for node allocation and traversal.
//!
//! The arena is an append-only table of nodes. Allocation hands out a
//! [`NodeId`]; nodes are immutable once allocated and are never freed
//! individually. Dropping the arena invalidates every `NodeId` it produced.

use fern_source::types::Span;

use crate::nodes::{AnyNode, AstNode, Node, NodeId, NodeKind};

/// An arena for allocating AST nodes.
///
/// The lexer and parser allocate every node they produce from a single `Ast`
/// owned by the caller. Cross-node links are always downward (parent owns
/// children by `NodeId`) and never cyclic.
#[derive(Debug, Default, Clone)]
pub struct Ast {
    /// Append-only node storage; a `NodeId` indexes into this table.
    nodes: Vec<Node>,
    /// The root node of the AST, if any.
    root: Option<NodeId>,
}

impl Ast {
    /// Creates a new empty AST arena.
    #[must_use]
    pub fn new() -> Self { Self { nodes: Vec::new(), root: None } }

    /// Creates a new AST arena with the given initial node capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { nodes: Vec::with_capacity(capacity), root: None }
    }

    /// Sets the root node of the AST.
    pub const fn set_root(&mut self, root: NodeId) { self.root = Some(root); }

    /// Returns the root node of the AST, if any.
    #[must_use]
    pub const fn root(&self) -> Option<NodeId> { self.root }

    /// Allocates a new node in the arena and returns its ID.
    pub fn alloc_node(&mut self, kind: NodeKind, data: AnyNode, span: Span) -> NodeId {
        let index = self.nodes.len() as u32;
        self.nodes.push(Node { kind, data, span });

        NodeId::new(index)
    }

    /// Gets a reference to a node by its ID.
    ///
    /// Returns `None` if the ID was not produced by this arena.
    #[must_use]
    pub fn get_node(&self, id: NodeId) -> Option<&Node> { self.nodes.get(id.index() as usize) }

    /// Returns the span of a node, if it exists.
    #[must_use]
    pub fn get_span(&self, id: NodeId) -> Option<Span> { self.get_node(id).map(|n| n.span) }

    /// Returns the number of nodes stored in the arena.
    #[must_use]
    pub fn node_count(&self) -> usize { self.nodes.len() }

    /// Performs a pre-order traversal of the AST starting from the given node.
    ///
    /// Visits the node first, then its children. The visitor returns `false`
    /// to abort the traversal; the method returns `true` if the traversal ran
    /// to completion.
    pub fn traverse_pre_order<F>(&self, node_id: NodeId, visit_fn: &mut F) -> bool
    where F: FnMut(NodeId) -> bool {
        if !visit_fn(node_id) {
            return false;
        }

        let Some(node) = self.get_node(node_id) else { return false };

        for child_id in node.data.children() {
            if !self.traverse_pre_order(child_id, visit_fn) {
                return false;
            }
        }

        true
    }

    /// Performs a post-order traversal of the AST starting from the given node.
    ///
    /// Visits the children first, then the node itself.
    pub fn traverse_post_order<F>(&self, node_id: NodeId, visit_fn: &mut F) -> bool
    where F: FnMut(NodeId) -> bool {
        let Some(node) = self.get_node(node_id) else { return false };

        for child_id in node.data.children() {
            if !self.traverse_post_order(child_id, visit_fn) {
                return false;
            }
        }

        visit_fn(node_id)
    }

    /// Finds all nodes of a specific kind below (and including) `start_node`.
    #[must_use]
    pub fn find_nodes_of_kind(&self, start_node: NodeId, node_kind: NodeKind) -> Vec<NodeId> {
        let mut result = Vec::new();

        let _ = self.traverse_pre_order(start_node, &mut |node_id| {
            if let Some(node) = self.get_node(node_id)
                && node.kind == node_kind
            {
                result.push(node_id);
            }
            true
        });

        result
    }

    /// Finds the first node below `start_node` that matches a predicate.
    #[must_use]
    pub fn find_node<F>(&self, start_node: NodeId, mut pred: F) -> Option<NodeId>
    where F: FnMut(NodeId) -> bool {
        let mut result = None;

        let _ = self.traverse_pre_order(start_node, &mut |node_id| {
            if pred(node_id) {
                result = Some(node_id);
                false
            } else {
                true
            }
        });

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::{BinaryExpr, BinaryOp, LiteralExpr, LiteralValue};

    fn int(ast: &mut Ast, value: i64) -> NodeId {
        ast.alloc_node(
            NodeKind::Expression,
            AnyNode::LiteralExpr(LiteralExpr::new(LiteralValue::Int(value), Span::default())),
            Span::default(),
        )
    }

    #[test]
    fn alloc_and_get_round_trip() {
        let mut ast = Ast::new();
        let id = int(&mut ast, 7);

        let node = ast.get_node(id).expect("node should exist");
        assert_eq!(node.kind, NodeKind::Expression);
        assert!(matches!(
            node.data,
            AnyNode::LiteralExpr(LiteralExpr { value: LiteralValue::Int(7), .. })
        ));
    }

    #[test]
    fn traversal_visits_children() {
        let mut ast = Ast::new();
        let lhs = int(&mut ast, 1);
        let rhs = int(&mut ast, 2);
        let sum = ast.alloc_node(
            NodeKind::Expression,
            AnyNode::BinaryExpr(BinaryExpr::new(BinaryOp::Add, lhs, rhs, Span::default())),
            Span::default(),
        );

        let mut pre = Vec::new();
        assert!(ast.traverse_pre_order(sum, &mut |id| {
            pre.push(id);
            true
        }));
        assert_eq!(pre, vec![sum, lhs, rhs]);

        let mut post = Vec::new();
        assert!(ast.traverse_post_order(sum, &mut |id| {
            post.push(id);
            true
        }));
        assert_eq!(post, vec![lhs, rhs, sum]);
    }

    #[test]
    fn find_nodes_of_kind_collects_all_expressions() {
        let mut ast = Ast::new();
        let lhs = int(&mut ast, 1);
        let rhs = int(&mut ast, 2);
        let sum = ast.alloc_node(
            NodeKind::Expression,
            AnyNode::BinaryExpr(BinaryExpr::new(BinaryOp::Add, lhs, rhs, Span::default())),
            Span::default(),
        );

        assert_eq!(ast.find_nodes_of_kind(sum, NodeKind::Expression).len(), 3);
    }
}
