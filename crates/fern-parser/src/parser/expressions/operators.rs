//! Operator precedence and operator node construction.
//!
//! Binding powers follow the Pratt convention: left-associative operators
//! have `right_bp = left_bp + 1`, the right-associative `**` has
//! `right_bp = left_bp - 1`. Lower binding power binds less tightly.
//!
//! ## Operator precedence (lowest to highest)
//!
//! 1. Pipe (`|>`) - 1/2
//! 2. Range (`..`, `..=`) - 3/4 (non-associative, single occurrence)
//! 3. Logical OR (`or`) - 5/6
//! 4. Logical AND (`and`) - 7/8
//! 5. Equality (`==`, `!=`) - 9/10
//! 6. Comparison (`<`, `<=`, `>`, `>=`, `in`) - 11/12
//! 7. Additive (`+`, `-`) - 13/14
//! 8. Multiplicative (`*`, `/`, `%`) - 15/16
//! 9. Power (`**`) - 18/17 (right-associative)
//! 10. Unary prefix (`-`, `not`) - operand at 19
//! 11. Postfix chain (`?`, `[`, `.`, `(`) - 21/22

use fern_ast::nodes::{AnyNode, BinaryExpr, BinaryOp, NodeId, NodeKind, RangeExpr, UnaryExpr, UnaryOp};

use crate::diagnostics::ParseResult;
use crate::lexer::TokenKind;
use crate::parser::Parser;

/// Binding power applied to the operand of a prefix operator.
pub(super) const UNARY_BP: u8 = 19;

/// Get the binding power for infix and postfix operators.
///
/// Returns `(left_binding_power, right_binding_power)`, or `None` when the
/// token cannot continue an expression.
#[inline]
pub(super) const fn infix_binding_power(op: TokenKind) -> Option<(u8, u8)> {
    Some(match op {
        // Pipeline
        TokenKind::PipeGt => (1, 2),

        // Range - non-associative, chaining is rejected by the builder
        TokenKind::DotDot | TokenKind::DotDotEq => (3, 4),

        // Logical OR
        TokenKind::Or => (5, 6),

        // Logical AND
        TokenKind::And => (7, 8),

        // Equality
        TokenKind::EqEq | TokenKind::NotEq => (9, 10),

        // Comparison and membership
        TokenKind::Lt
        | TokenKind::LtEq
        | TokenKind::Gt
        | TokenKind::GtEq
        | TokenKind::In => (11, 12),

        // Additive
        TokenKind::Plus | TokenKind::Minus => (13, 14),

        // Multiplicative
        TokenKind::Star | TokenKind::Slash | TokenKind::Percent => (15, 16),

        // Power - RIGHT-ASSOCIATIVE
        TokenKind::StarStar => (18, 17),

        // Postfix chain (highest precedence)
        TokenKind::Question | TokenKind::LBracket | TokenKind::Dot | TokenKind::LParen => (21, 22),

        _ => return None,
    })
}

/// Map an operator token onto its AST operator.
const fn token_to_binary_op(kind: TokenKind) -> Option<BinaryOp> {
    Some(match kind {
        TokenKind::PipeGt => BinaryOp::Pipe,
        TokenKind::Or => BinaryOp::Or,
        TokenKind::And => BinaryOp::And,
        TokenKind::EqEq => BinaryOp::Eq,
        TokenKind::NotEq => BinaryOp::NotEq,
        TokenKind::Lt => BinaryOp::Lt,
        TokenKind::LtEq => BinaryOp::LtEq,
        TokenKind::Gt => BinaryOp::Gt,
        TokenKind::GtEq => BinaryOp::GtEq,
        TokenKind::In => BinaryOp::In,
        TokenKind::Plus => BinaryOp::Add,
        TokenKind::Minus => BinaryOp::Sub,
        TokenKind::Star => BinaryOp::Mul,
        TokenKind::Slash => BinaryOp::Div,
        TokenKind::Percent => BinaryOp::Mod,
        TokenKind::StarStar => BinaryOp::Pow,
        _ => return None,
    })
}

impl Parser<'_> {
    /// Parse the right-hand side of a binary operator and build the node.
    pub(super) fn parse_binary_expr(&mut self, lhs: NodeId, right_bp: u8) -> ParseResult<NodeId> {
        let start = self.node_start(lhs);
        let op_kind = self.current_token().kind;

        self.advance(); // consume the operator

        let rhs = self.parse_expression_bp(right_bp)?;
        let span = self.span_from(start);

        // Ranges get their own node; everything else is a plain binary op
        if matches!(op_kind, TokenKind::DotDot | TokenKind::DotDotEq) {
            if matches!(self.current_token().kind, TokenKind::DotDot | TokenKind::DotDotEq) {
                return Err(self.error("Ranges cannot be chained"));
            }

            let inclusive = op_kind == TokenKind::DotDotEq;
            let range = RangeExpr::new(lhs, rhs, inclusive, span);
            return Ok(self.alloc_node(NodeKind::Expression, AnyNode::RangeExpr(range), span));
        }

        let Some(op) = token_to_binary_op(op_kind) else {
            return Err(self.error("Expected a binary operator"));
        };

        let binary = BinaryExpr::new(op, lhs, rhs, span);
        Ok(self.alloc_node(NodeKind::Expression, AnyNode::BinaryExpr(binary), span))
    }

    /// Parse a prefix operator: `-expr` or `not expr`.
    pub(super) fn parse_unary_expr(&mut self) -> ParseResult<NodeId> {
        let start = self.current_token().span.start;
        let op = match self.current_token().kind {
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Not => UnaryOp::Not,
            _ => return Err(self.error("Expected a unary operator")),
        };

        self.advance();

        let operand = self.parse_expression_bp(UNARY_BP)?;
        let span = self.span_from(start);
        let unary = UnaryExpr::new(op, operand, span);

        Ok(self.alloc_node(NodeKind::Expression, AnyNode::UnaryExpr(unary), span))
    }

    /// Start offset of an already-built node, falling back to the current
    /// token.
    pub(crate) fn node_start(&self, id: NodeId) -> usize {
        self.ast()
            .get_span(id)
            .map_or_else(|| self.current_token().span.start, |span| span.start)
    }
}
