//! Core expression parsing using Pratt precedence climbing.

use fern_ast::nodes::{
    AnyNode,
    BindExpr,
    CallArg,
    CallExpr,
    DotExpr,
    IdentExpr,
    IndexExpr,
    NodeId,
    NodeKind,
    TryExpr,
};
use fern_source::types::Span;

use super::operators::infix_binding_power;
use crate::diagnostics::ParseResult;
use crate::lexer::TokenKind;
use crate::parser::Parser;

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// This is the main entry point for expression parsing. It delegates to
    /// the Pratt parser with minimum binding power 0, so every operator is
    /// parsed with correct precedence and associativity.
    ///
    /// ## Errors
    ///
    /// Returns [`crate::diagnostics::ParseError`] if an operand or operator
    /// argument fails to parse.
    pub fn parse_expression(&mut self) -> ParseResult<NodeId> { self.parse_expression_bp(0) }

    /// Parse an expression with a minimum binding power.
    ///
    /// Operators whose left binding power is below `min_bp` end the loop,
    /// handing the partial expression back to the caller.
    pub(crate) fn parse_expression_bp(&mut self, min_bp: u8) -> ParseResult<NodeId> {
        let mut lhs = self.parse_primary()?;

        loop {
            let op = self.current_token().kind;

            let Some((left_bp, right_bp)) = infix_binding_power(op) else {
                break;
            };

            if left_bp < min_bp {
                break;
            }

            lhs = match op {
                // Postfix: try operator
                TokenKind::Question => self.parse_try_with_lhs(lhs),
                // Postfix: index access
                TokenKind::LBracket => self.parse_index_with_lhs(lhs)?,
                // Postfix: field access
                TokenKind::Dot => self.parse_dot_with_lhs(lhs)?,
                // Postfix: call - but never across a newline, so a
                // parenthesized statement on the next line is not an
                // argument list
                TokenKind::LParen => {
                    if self.newline_before_current() {
                        break;
                    }
                    self.parse_call_with_lhs(lhs)?
                }
                // Binary operators
                _ => self.parse_binary_expr(lhs, right_bp)?,
            }
        }

        Ok(lhs)
    }

    /// Whether a token can begin an expression; used by `return`/`break`
    /// to decide if a value follows on the same line.
    pub(crate) const fn can_start_expression(kind: TokenKind) -> bool {
        matches!(
            kind,
            TokenKind::IntLiteral
                | TokenKind::HexLiteral
                | TokenKind::BinLiteral
                | TokenKind::OctLiteral
                | TokenKind::FloatLiteral
                | TokenKind::StringLiteral
                | TokenKind::StringBegin
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Ident
                | TokenKind::Minus
                | TokenKind::Not
                | TokenKind::LParen
                | TokenKind::LBracket
                | TokenKind::LBrace
                | TokenKind::PercentBrace
                | TokenKind::If
                | TokenKind::Match
                | TokenKind::With
                | TokenKind::For
                | TokenKind::While
                | TokenKind::Loop
                | TokenKind::Spawn
                | TokenKind::Send
                | TokenKind::Receive
        )
    }

    /// Parse a primary expression: the dispatched switch on the current
    /// token that anchors the Pratt loop.
    ///
    /// When nothing matches, the error is reported, one token is skipped
    /// (unless at EOF) and a dummy literal is returned so the surrounding
    /// AST shape never contains vacant children.
    pub(crate) fn parse_primary(&mut self) -> ParseResult<NodeId> {
        match self.current_token().kind {
            // Literals
            TokenKind::IntLiteral
            | TokenKind::HexLiteral
            | TokenKind::BinLiteral
            | TokenKind::OctLiteral
            | TokenKind::FloatLiteral
            | TokenKind::True
            | TokenKind::False
            | TokenKind::StringLiteral => self.parse_literal(),

            // Interpolated strings
            TokenKind::StringBegin => self.parse_string_interp(),

            // Identifier, or a bind when immediately followed by `<-`
            TokenKind::Ident => {
                let start = self.current_token().span.start;
                let name = self.current_token().text.clone();
                self.advance();

                if self.check(TokenKind::LArrow) && !self.newline_before_current() {
                    self.advance();
                    let value = self.parse_expression()?;
                    let span = self.span_from(start);
                    let bind = BindExpr::new(name, value, span);
                    return Ok(self.alloc_node(NodeKind::Expression, AnyNode::BindExpr(bind), span));
                }

                let span = self.span_from(start);
                let ident = IdentExpr::new(name, span);
                Ok(self.alloc_node(NodeKind::Expression, AnyNode::IdentExpr(ident), span))
            }

            // Prefix operators
            TokenKind::Minus | TokenKind::Not => self.parse_unary_expr(),

            // Bracketed forms
            TokenKind::LParen => self.parse_paren_form(),
            TokenKind::LBracket => self.parse_list_or_comprehension(),
            TokenKind::LBrace => self.parse_brace_block(),
            TokenKind::PercentBrace => self.parse_map_or_record_update(),

            // Keyword-introduced forms
            TokenKind::If => self.parse_if_expr(),
            TokenKind::Match => self.parse_match_expr(),
            TokenKind::With => self.parse_with_expr(),
            TokenKind::For => self.parse_for_expr(),
            TokenKind::While => self.parse_while_expr(),
            TokenKind::Loop => self.parse_loop_expr(),
            TokenKind::Spawn => self.parse_spawn_expr(),
            TokenKind::Send => self.parse_send_expr(),
            TokenKind::Receive => self.parse_receive_expr(),

            kind => {
                let error = self.error(&format!("Unexpected token in expression: {kind}"));
                self.report_error(error);

                if !self.check(TokenKind::Eof) {
                    self.advance();
                }

                Ok(self.dummy_node())
            }
        }
    }

    // ------------------------------------------------------------------
    // Postfix forms
    // ------------------------------------------------------------------

    /// Postfix `?`.
    fn parse_try_with_lhs(&mut self, lhs: NodeId) -> NodeId {
        let start = self.node_start(lhs);
        self.advance(); // consume '?'

        let span = self.span_from(start);
        self.alloc_node(NodeKind::Expression, AnyNode::TryExpr(TryExpr::new(lhs, span)), span)
    }

    /// Postfix `[index]`.
    fn parse_index_with_lhs(&mut self, lhs: NodeId) -> ParseResult<NodeId> {
        let start = self.node_start(lhs);
        self.advance(); // consume '['

        let index = self.parse_expression()?;
        self.expect(TokenKind::RBracket)?;

        let span = self.span_from(start);
        let node = IndexExpr::new(lhs, index, span);
        Ok(self.alloc_node(NodeKind::Expression, AnyNode::IndexExpr(node), span))
    }

    /// Postfix `.field`.
    ///
    /// The field may be numeric for tuple indexing. `t.0.1` arrives from
    /// the lexer as `t`, `.`, float `0.1` under maximal munch, so a float
    /// here is split at its dot into two chained accesses.
    fn parse_dot_with_lhs(&mut self, lhs: NodeId) -> ParseResult<NodeId> {
        let start = self.node_start(lhs);
        self.advance(); // consume '.'

        match self.current_token().kind {
            TokenKind::Ident | TokenKind::IntLiteral => {
                let field = self.current_token().text.clone();
                self.advance();

                let span = self.span_from(start);
                let node = DotExpr::new(lhs, field, span);
                Ok(self.alloc_node(NodeKind::Expression, AnyNode::DotExpr(node), span))
            }

            TokenKind::FloatLiteral => {
                let text = self.current_token().text.clone();
                let token_span = self.current_token().span;
                self.advance();

                let (first, second) =
                    text.split_once('.').unwrap_or((text.as_str(), ""));

                let inner_span = Span::new(start, token_span.start + first.len());
                let inner = DotExpr::new(lhs, first.to_string(), inner_span);
                let inner_id =
                    self.alloc_node(NodeKind::Expression, AnyNode::DotExpr(inner), inner_span);

                let span = self.span_from(start);
                let outer = DotExpr::new(inner_id, second.to_string(), span);
                Ok(self.alloc_node(NodeKind::Expression, AnyNode::DotExpr(outer), span))
            }

            kind => Err(self.error(&format!("Expected field name after '.', found {kind}"))),
        }
    }

    /// Postfix `(args)` - a call with ordered, possibly labelled arguments.
    fn parse_call_with_lhs(&mut self, lhs: NodeId) -> ParseResult<NodeId> {
        let start = self.node_start(lhs);
        self.advance(); // consume '('

        let mut args = Vec::new();

        while !self.check(TokenKind::RParen) {
            args.push(self.parse_call_arg()?);

            if !self.eat(TokenKind::Comma) {
                break;
            }
        }

        self.expect(TokenKind::RParen)?;

        let span = self.span_from(start);
        let call = CallExpr::new(lhs, args, span);
        Ok(self.alloc_node(NodeKind::Expression, AnyNode::CallExpr(call), span))
    }

    /// One call argument: `expr` or `label: expr`.
    fn parse_call_arg(&mut self) -> ParseResult<CallArg> {
        if self.check(TokenKind::Ident) {
            // Speculatively read `ident :` as a label
            let checkpoint = self.checkpoint();
            let name = self.current_token().text.clone();
            self.advance();

            if self.eat(TokenKind::Colon) {
                let value = self.parse_expression()?;
                return Ok(CallArg { name: Some(name), value });
            }

            self.rewind(checkpoint);
        }

        let value = self.parse_expression()?;
        Ok(CallArg { name: None, value })
    }
}
