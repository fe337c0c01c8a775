//! Bracketed expression forms: parenthesized groups, tuples, lambdas,
//! lists, comprehensions, maps, record updates, and brace blocks.

use fern_ast::nodes::{
    AnyNode,
    BlockExpr,
    FieldInit,
    LambdaExpr,
    ListCompExpr,
    ListExpr,
    MapEntry,
    MapExpr,
    NodeId,
    NodeKind,
    RecordUpdateExpr,
    TupleExpr,
};

use crate::diagnostics::ParseResult;
use crate::lexer::TokenKind;
use crate::parser::statement::BlockItem;
use crate::parser::Parser;

impl Parser<'_> {
    /// Parse a `(`-introduced form: a lambda, a grouped expression, or a
    /// tuple.
    ///
    /// The lambda attempt is speculative: the parser snapshots the lexer,
    /// reads `(ident, ident, …) ->`, and on any mismatch rewinds and
    /// re-parses the parenthesized content as an expression. A single
    /// element without a trailing comma is grouping and yields the inner
    /// expression unwrapped; anything else is a tuple.
    pub(super) fn parse_paren_form(&mut self) -> ParseResult<NodeId> {
        let start = self.current_token().span.start;

        let checkpoint = self.checkpoint();
        if let Some(params) = self.try_lambda_params() {
            let body = self.parse_expression()?;
            let span = self.span_from(start);
            let lambda = LambdaExpr::new(params, body, span);
            return Ok(self.alloc_node(NodeKind::Expression, AnyNode::LambdaExpr(lambda), span));
        }
        self.rewind(checkpoint);

        self.advance(); // consume '('

        // Empty parentheses: the empty tuple (unit)
        if self.eat(TokenKind::RParen) {
            let span = self.span_from(start);
            let tuple = TupleExpr::new(vec![], span);
            return Ok(self.alloc_node(NodeKind::Expression, AnyNode::TupleExpr(tuple), span));
        }

        let first = self.parse_expression()?;

        if self.check(TokenKind::Comma) {
            let mut elements = vec![first];
            while self.eat(TokenKind::Comma) {
                if self.check(TokenKind::RParen) {
                    break; // trailing comma
                }
                elements.push(self.parse_expression()?);
            }
            self.expect(TokenKind::RParen)?;

            let span = self.span_from(start);
            let tuple = TupleExpr::new(elements, span);
            return Ok(self.alloc_node(NodeKind::Expression, AnyNode::TupleExpr(tuple), span));
        }

        // Grouping: the parentheses leave no node behind
        self.expect(TokenKind::RParen)?;
        Ok(first)
    }

    /// Speculatively read `(ident, ident, …) ->`.
    ///
    /// Returns the parameter names on success; on failure the caller
    /// rewinds to its checkpoint, so this may leave the parser mid-way.
    fn try_lambda_params(&mut self) -> Option<Vec<String>> {
        self.advance(); // consume '('

        let mut params = Vec::new();

        while !self.check(TokenKind::RParen) {
            if !self.check(TokenKind::Ident) {
                return None;
            }

            params.push(self.current_token().text.clone());
            self.advance();

            if self.eat(TokenKind::Comma) {
                continue;
            }

            if !self.check(TokenKind::RParen) {
                return None;
            }
        }

        self.advance(); // consume ')'

        if !self.check(TokenKind::Arrow) {
            return None;
        }
        self.advance(); // consume '->'

        Some(params)
    }

    /// Parse a `[`-introduced form: a list literal or a list
    /// comprehension, decided by `for` after the first element.
    pub(super) fn parse_list_or_comprehension(&mut self) -> ParseResult<NodeId> {
        let start = self.current_token().span.start;
        self.advance(); // consume '['

        if self.eat(TokenKind::RBracket) {
            let span = self.span_from(start);
            let list = ListExpr::new(vec![], span);
            return Ok(self.alloc_node(NodeKind::Expression, AnyNode::ListExpr(list), span));
        }

        let first = self.parse_expression()?;

        if self.eat(TokenKind::For) {
            let var_name = self.expect_ident("loop variable")?;
            self.expect(TokenKind::In)?;
            let iterable = self.parse_expression()?;

            let condition =
                if self.eat(TokenKind::If) { Some(self.parse_expression()?) } else { None };

            self.expect(TokenKind::RBracket)?;

            let span = self.span_from(start);
            let comp = ListCompExpr::new(first, var_name, iterable, condition, span);
            return Ok(self.alloc_node(NodeKind::Expression, AnyNode::ListCompExpr(comp), span));
        }

        let mut elements = vec![first];
        while self.eat(TokenKind::Comma) {
            if self.check(TokenKind::RBracket) {
                break; // trailing comma
            }
            elements.push(self.parse_expression()?);
        }
        self.expect(TokenKind::RBracket)?;

        let span = self.span_from(start);
        let list = ListExpr::new(elements, span);
        Ok(self.alloc_node(NodeKind::Expression, AnyNode::ListExpr(list), span))
    }

    /// Parse a `%{`-introduced form: a map literal or a record update.
    ///
    /// The first item decides: `%{ expr | … }` is a record update,
    /// `%{ expr : … }` is a map. Any other continuation is a syntax error.
    pub(super) fn parse_map_or_record_update(&mut self) -> ParseResult<NodeId> {
        let start = self.current_token().span.start;
        self.advance(); // consume '%{'

        if self.eat(TokenKind::RBrace) {
            let span = self.span_from(start);
            let map = MapExpr::new(vec![], span);
            return Ok(self.alloc_node(NodeKind::Expression, AnyNode::MapExpr(map), span));
        }

        let first = self.parse_expression()?;

        if self.eat(TokenKind::Pipe) {
            // Record update: %{ base | field: value, … }
            let mut fields = Vec::new();
            loop {
                let name = self.expect_ident("field name")?;
                self.expect(TokenKind::Colon)?;
                let value = self.parse_expression()?;
                fields.push(FieldInit { name, value });

                if !self.eat(TokenKind::Comma) {
                    break;
                }
                if self.check(TokenKind::RBrace) {
                    break; // trailing comma
                }
            }
            self.expect(TokenKind::RBrace)?;

            let span = self.span_from(start);
            let update = RecordUpdateExpr::new(first, fields, span);
            return Ok(self.alloc_node(
                NodeKind::Expression,
                AnyNode::RecordUpdateExpr(update),
                span,
            ));
        }

        if self.eat(TokenKind::Colon) {
            // Map literal: %{ key: value, … }
            let value = self.parse_expression()?;
            let mut entries = vec![MapEntry { key: first, value }];

            while self.eat(TokenKind::Comma) {
                if self.check(TokenKind::RBrace) {
                    break; // trailing comma
                }
                let key = self.parse_expression()?;
                self.expect(TokenKind::Colon)?;
                let value = self.parse_expression()?;
                entries.push(MapEntry { key, value });
            }
            self.expect(TokenKind::RBrace)?;

            let span = self.span_from(start);
            let map = MapExpr::new(entries, span);
            return Ok(self.alloc_node(NodeKind::Expression, AnyNode::MapExpr(map), span));
        }

        Err(self.error("Expected '|' for a record update or ':' for a map after the first item"))
    }

    /// Parse a brace block: comma-separated statements and expressions,
    /// where a final item without a trailing comma is the block's value.
    pub(super) fn parse_brace_block(&mut self) -> ParseResult<NodeId> {
        let start = self.current_token().span.start;
        self.advance(); // consume '{'

        let mut statements = Vec::new();
        let mut value = None;

        while !self.check(TokenKind::RBrace) {
            let item = self.parse_block_item()?;

            if self.eat(TokenKind::Comma) {
                statements.push(self.item_as_statement(item));
                continue;
            }

            // No trailing comma: a final expression is the block's value
            match item {
                BlockItem::Expr(expr) => value = Some(expr),
                BlockItem::Stmt(stmt) => statements.push(stmt),
            }
            break;
        }

        self.expect(TokenKind::RBrace)?;

        let span = self.span_from(start);
        let block = BlockExpr::new(statements, value, span);
        Ok(self.alloc_node(NodeKind::Expression, AnyNode::BlockExpr(block), span))
    }
}
