//! Keyword-introduced expression forms: `if`, `match`, `with`, the loops,
//! and the process primitives `spawn`, `send` and `receive`.
//!
//! Each form recognizes an inline body on the same logical line or an
//! indented block; the block machinery in `statement.rs` handles both.

use fern_ast::nodes::{
    AnyNode,
    ForExpr,
    IfExpr,
    LoopExpr,
    MatchArm,
    MatchExpr,
    NodeId,
    NodeKind,
    ReceiveAfter,
    ReceiveExpr,
    SendExpr,
    SpawnExpr,
    WhileExpr,
    WithExpr,
};

use crate::diagnostics::ParseResult;
use crate::lexer::TokenKind;
use crate::parser::Parser;

impl Parser<'_> {
    /// Parse `if cond: then [else: other | else if …]`.
    pub(super) fn parse_if_expr(&mut self) -> ParseResult<NodeId> {
        let start = self.current_token().span.start;
        let dedents_at_if = self.dedents_seen();
        self.advance(); // consume 'if'

        let condition = self.parse_expression()?;
        self.expect(TokenKind::Colon)?;
        let then_branch = self.parse_block()?;

        // The else clause belongs to this if only while no enclosing block
        // has ended in between
        let else_branch = if self.check(TokenKind::Else)
            && self.dedents_seen() == dedents_at_if
        {
            self.advance();

            if self.check(TokenKind::If) {
                Some(self.parse_if_expr()?)
            } else {
                self.expect(TokenKind::Colon)?;
                Some(self.parse_block()?)
            }
        } else {
            None
        };

        let span = self.span_from(start);
        let node = IfExpr::new(condition, then_branch, else_branch, span);
        Ok(self.alloc_node(NodeKind::Expression, AnyNode::IfExpr(node), span))
    }

    /// Parse `match [value]: arms`.
    pub(super) fn parse_match_expr(&mut self) -> ParseResult<NodeId> {
        let start = self.current_token().span.start;
        self.advance(); // consume 'match'

        let value =
            if self.check(TokenKind::Colon) { None } else { Some(self.parse_expression()?) };

        self.expect(TokenKind::Colon)?;

        let (arms, _) = self.parse_arm_sequence(false)?;
        if arms.is_empty() {
            return Err(self.error("A match needs at least one arm"));
        }

        let span = self.span_from(start);
        let node = MatchExpr::new(value, arms, span);
        Ok(self.alloc_node(NodeKind::Expression, AnyNode::MatchExpr(node), span))
    }

    /// Parse `with bind, bind, …: body [else: arms]`.
    pub(super) fn parse_with_expr(&mut self) -> ParseResult<NodeId> {
        let start = self.current_token().span.start;
        let dedents_at_with = self.dedents_seen();
        self.advance(); // consume 'with'

        let mut bindings = Vec::new();
        loop {
            let binding = self.parse_expression()?;

            if !matches!(
                self.ast().get_node(binding).map(|n| &n.data),
                Some(AnyNode::BindExpr(_))
            ) {
                return Err(self.error("Expected a binding ('name <- expr') in with"));
            }

            bindings.push(binding);

            if !self.eat(TokenKind::Comma) {
                break;
            }
        }

        self.expect(TokenKind::Colon)?;
        let body = self.parse_block()?;

        let else_arms = if self.check(TokenKind::Else)
            && self.dedents_seen() == dedents_at_with
        {
            self.advance();
            self.expect(TokenKind::Colon)?;
            let (arms, _) = self.parse_arm_sequence(false)?;
            arms
        } else {
            Vec::new()
        };

        let span = self.span_from(start);
        let node = WithExpr::new(bindings, body, else_arms, span);
        Ok(self.alloc_node(NodeKind::Expression, AnyNode::WithExpr(node), span))
    }

    /// Parse `for var in iterable: body`.
    pub(super) fn parse_for_expr(&mut self) -> ParseResult<NodeId> {
        let start = self.current_token().span.start;
        self.advance(); // consume 'for'

        let var = self.expect_ident("loop variable")?;
        self.expect(TokenKind::In)?;
        let iterable = self.parse_expression()?;
        self.expect(TokenKind::Colon)?;
        let body = self.parse_block()?;

        let span = self.span_from(start);
        let node = ForExpr::new(var, iterable, body, span);
        Ok(self.alloc_node(NodeKind::Expression, AnyNode::ForExpr(node), span))
    }

    /// Parse `while cond: body`.
    pub(super) fn parse_while_expr(&mut self) -> ParseResult<NodeId> {
        let start = self.current_token().span.start;
        self.advance(); // consume 'while'

        let condition = self.parse_expression()?;
        self.expect(TokenKind::Colon)?;
        let body = self.parse_block()?;

        let span = self.span_from(start);
        let node = WhileExpr::new(condition, body, span);
        Ok(self.alloc_node(NodeKind::Expression, AnyNode::WhileExpr(node), span))
    }

    /// Parse `loop: body`.
    pub(super) fn parse_loop_expr(&mut self) -> ParseResult<NodeId> {
        let start = self.current_token().span.start;
        self.advance(); // consume 'loop'

        self.expect(TokenKind::Colon)?;
        let body = self.parse_block()?;

        let span = self.span_from(start);
        let node = LoopExpr::new(body, span);
        Ok(self.alloc_node(NodeKind::Expression, AnyNode::LoopExpr(node), span))
    }

    /// Parse `spawn(expr)`.
    pub(super) fn parse_spawn_expr(&mut self) -> ParseResult<NodeId> {
        let start = self.current_token().span.start;
        self.advance(); // consume 'spawn'

        self.expect(TokenKind::LParen)?;
        let body = self.parse_expression()?;
        self.expect(TokenKind::RParen)?;

        let span = self.span_from(start);
        let node = SpawnExpr::new(body, span);
        Ok(self.alloc_node(NodeKind::Expression, AnyNode::SpawnExpr(node), span))
    }

    /// Parse `send(pid, msg)`.
    pub(super) fn parse_send_expr(&mut self) -> ParseResult<NodeId> {
        let start = self.current_token().span.start;
        self.advance(); // consume 'send'

        self.expect(TokenKind::LParen)?;
        let target = self.parse_expression()?;
        self.expect(TokenKind::Comma)?;
        let message = self.parse_expression()?;
        self.expect(TokenKind::RParen)?;

        let span = self.span_from(start);
        let node = SendExpr::new(target, message, span);
        Ok(self.alloc_node(NodeKind::Expression, AnyNode::SendExpr(node), span))
    }

    /// Parse `receive: arms [after timeout => body]`.
    pub(super) fn parse_receive_expr(&mut self) -> ParseResult<NodeId> {
        let start = self.current_token().span.start;
        self.advance(); // consume 'receive'

        self.expect(TokenKind::Colon)?;

        let (arms, after) = self.parse_arm_sequence(true)?;
        if arms.is_empty() && after.is_none() {
            return Err(self.error("A receive needs at least one arm"));
        }

        let span = self.span_from(start);
        let node = ReceiveExpr::new(arms, after, span);
        Ok(self.alloc_node(NodeKind::Expression, AnyNode::ReceiveExpr(node), span))
    }

    // ------------------------------------------------------------------
    // Arms
    // ------------------------------------------------------------------

    /// Parse a sequence of match arms after a `:`.
    ///
    /// Arms continue on an explicit comma, on a same-line pattern, or on a
    /// pattern at the same indentation (no dedent crossed since the
    /// sequence started). The sequence's own trailing dedent is consumed
    /// so it does not leak to the enclosing block. When `allow_after` is
    /// set, a final `after timeout => body` arm is recognized.
    fn parse_arm_sequence(
        &mut self,
        allow_after: bool,
    ) -> ParseResult<(Vec<NodeId>, Option<ReceiveAfter>)> {
        let base = self.dedents_seen();
        let mut arms = Vec::new();
        let mut after = None;

        loop {
            if allow_after && self.check(TokenKind::After) {
                self.advance();
                let timeout = self.parse_expression()?;
                self.expect(TokenKind::FatArrow)?;
                let body = self.parse_expression()?;
                after = Some(ReceiveAfter { timeout, body });
                break; // the timeout arm is always last
            }

            arms.push(self.parse_match_arm()?);

            if self.eat(TokenKind::Comma) {
                if self.dedents_seen() > base {
                    break;
                }
                if Self::can_start_pattern(self.current_token().kind)
                    || (allow_after && self.check(TokenKind::After))
                {
                    continue;
                }
                break;
            }

            if self.dedents_seen() > base || self.check(TokenKind::Eof) {
                break;
            }

            if !(Self::can_start_pattern(self.current_token().kind)
                || (allow_after && self.check(TokenKind::After)))
            {
                break;
            }
        }

        if self.dedents_seen() > base {
            self.consume_dedent();
        }

        Ok((arms, after))
    }

    /// Parse one arm: `pattern [if guard] => body`.
    fn parse_match_arm(&mut self) -> ParseResult<NodeId> {
        let start = self.current_token().span.start;

        let pattern = self.parse_pattern()?;

        let guard = if self.eat(TokenKind::If) { Some(self.parse_expression()?) } else { None };

        self.expect(TokenKind::FatArrow)?;
        let body = self.parse_expression()?;

        let span = self.span_from(start);
        let arm = MatchArm::new(pattern, guard, body, span);
        Ok(self.alloc_node(NodeKind::Pattern, AnyNode::MatchArm(arm), span))
    }
}
