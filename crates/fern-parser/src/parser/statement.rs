//! Statement parsing and indented-block handling.
//!
//! The statement parser is a straightforward dispatch on the current
//! token. Blocks are where the layout machinery surfaces: an indented
//! block keeps reading items until the dedent counter shows that its
//! indentation level was left, then consumes that one dedent so it does
//! not propagate to the enclosing block.

use fern_ast::nodes::{
    AnyNode,
    BlockExpr,
    BreakStmt,
    ContinueStmt,
    DeferStmt,
    ExpressionStmt,
    LetStmt,
    NodeId,
    NodeKind,
    ReturnStmt,
    UnaryExpr,
    UnaryOp,
};

use crate::diagnostics::ParseResult;
use crate::lexer::TokenKind;
use crate::parser::Parser;

/// One item of a block: a statement, or an expression that may turn out to
/// be the block's trailing value.
pub(crate) enum BlockItem {
    Stmt(NodeId),
    Expr(NodeId),
}

impl Parser<'_> {
    /// Parse a single statement.
    ///
    /// Reaching a statement start clears panic mode, re-enabling
    /// diagnostics after an error earlier in the file.
    ///
    /// ## Errors
    ///
    /// Returns [`crate::diagnostics::ParseError`] when the statement is
    /// malformed; the caller reports it and synchronizes.
    pub fn parse_statement(&mut self) -> ParseResult<NodeId> {
        self.clear_panic();

        match self.current_token().kind {
            TokenKind::Pub => {
                self.advance();
                match self.current_token().kind {
                    TokenKind::Fn => self.parse_fn_decl(true),
                    TokenKind::Type => self.parse_type_decl(true),
                    TokenKind::Newtype => self.parse_newtype_decl(true),
                    kind => Err(self.error(&format!(
                        "Expected 'fn', 'type' or 'newtype' after 'pub', found {kind}"
                    ))),
                }
            }
            TokenKind::Fn => self.parse_fn_decl(false),
            TokenKind::Type => self.parse_type_decl(false),
            TokenKind::Trait => self.parse_trait_decl(),
            TokenKind::Impl => self.parse_impl_decl(),
            TokenKind::Newtype => self.parse_newtype_decl(false),
            TokenKind::Module => self.parse_module_decl(),
            TokenKind::Import => self.parse_import_decl(),
            TokenKind::Let => self.parse_let_stmt(),
            TokenKind::Return => self.parse_return_stmt(),
            TokenKind::Defer => self.parse_defer_stmt(),
            TokenKind::Break => self.parse_break_stmt(),
            TokenKind::Continue => self.parse_continue_stmt(),
            _ => {
                let expr = self.parse_expression()?;
                Ok(self.wrap_expression_stmt(expr))
            }
        }
    }

    // ------------------------------------------------------------------
    // Simple statements
    // ------------------------------------------------------------------

    /// Parse `let pattern [: Type] = value [else: block]`.
    fn parse_let_stmt(&mut self) -> ParseResult<NodeId> {
        let start = self.current_token().span.start;
        self.advance(); // consume 'let'

        let pattern = self.parse_pattern()?;

        let ty = if self.eat(TokenKind::Colon) { Some(self.parse_type_expr()?) } else { None };

        self.expect(TokenKind::Eq)?;

        let dedents_before = self.dedents_seen();
        let value = self.parse_expression()?;

        // The else only belongs to this let while we are still inside the
        // same block
        let else_branch = if self.check(TokenKind::Else) && self.dedents_seen() == dedents_before
        {
            self.advance();
            self.expect(TokenKind::Colon)?;
            Some(self.parse_block()?)
        } else {
            None
        };

        let span = self.span_from(start);
        let stmt = LetStmt::new(pattern, ty, value, else_branch, span);
        Ok(self.alloc_node(NodeKind::Statement, AnyNode::LetStmt(stmt), span))
    }

    /// Parse `return [value] [if cond | unless cond]`.
    ///
    /// The postfix condition only binds when no dedent was crossed after
    /// the value, so an `if` statement following a block-final `return`
    /// stays its own statement.
    fn parse_return_stmt(&mut self) -> ParseResult<NodeId> {
        let start = self.current_token().span.start;
        self.advance(); // consume 'return'

        let dedents_before = self.dedents_seen();

        let value = if !self.newline_before_current()
            && Self::can_start_expression(self.current_token().kind)
        {
            Some(self.parse_expression()?)
        } else {
            None
        };

        let condition = if value.is_some()
            && self.dedents_seen() == dedents_before
            && matches!(self.current_token().kind, TokenKind::If | TokenKind::Unless)
        {
            let negate = self.check(TokenKind::Unless);
            self.advance();

            let cond = self.parse_expression()?;
            if negate {
                let span = self.ast().get_span(cond).unwrap_or_default();
                let negated = UnaryExpr::new(UnaryOp::Not, cond, span);
                Some(self.alloc_node(NodeKind::Expression, AnyNode::UnaryExpr(negated), span))
            } else {
                Some(cond)
            }
        } else {
            None
        };

        let span = self.span_from(start);
        let stmt = ReturnStmt::new(value, condition, span);
        Ok(self.alloc_node(NodeKind::Statement, AnyNode::ReturnStmt(stmt), span))
    }

    /// Parse `defer expr`.
    fn parse_defer_stmt(&mut self) -> ParseResult<NodeId> {
        let start = self.current_token().span.start;
        self.advance(); // consume 'defer'

        let value = self.parse_expression()?;

        let span = self.span_from(start);
        let stmt = DeferStmt::new(value, span);
        Ok(self.alloc_node(NodeKind::Statement, AnyNode::DeferStmt(stmt), span))
    }

    /// Parse `break [value]`.
    fn parse_break_stmt(&mut self) -> ParseResult<NodeId> {
        let start = self.current_token().span.start;
        self.advance(); // consume 'break'

        let value = if !self.newline_before_current()
            && Self::can_start_expression(self.current_token().kind)
        {
            Some(self.parse_expression()?)
        } else {
            None
        };

        let span = self.span_from(start);
        let stmt = BreakStmt::new(value, span);
        Ok(self.alloc_node(NodeKind::Statement, AnyNode::BreakStmt(stmt), span))
    }

    /// Parse `continue`.
    fn parse_continue_stmt(&mut self) -> ParseResult<NodeId> {
        let span = self.current_token().span;
        self.advance(); // consume 'continue'

        let stmt = ContinueStmt::new(span);
        Ok(self.alloc_node(NodeKind::Statement, AnyNode::ContinueStmt(stmt), span))
    }

    // ------------------------------------------------------------------
    // Blocks
    // ------------------------------------------------------------------

    /// Parse a block body after a `:`.
    ///
    /// An inline body (no newline after the colon) is a single item. An
    /// indented body reads items until its indentation level ends; the
    /// final expression becomes the block's value, and a block that is a
    /// single expression is returned unwrapped.
    pub(crate) fn parse_block(&mut self) -> ParseResult<NodeId> {
        let start = self.current_token().span.start;

        if !self.newline_before_current() {
            // Inline form: the body is one item on the same logical line
            let item = self.parse_block_item()?;
            return Ok(match item {
                BlockItem::Expr(expr) => expr,
                BlockItem::Stmt(stmt) => {
                    let span = self.span_from(start);
                    let block = BlockExpr::new(vec![stmt], None, span);
                    self.alloc_node(NodeKind::Expression, AnyNode::BlockExpr(block), span)
                }
            });
        }

        if !self.indent_before_current() {
            let error = self.error("Expected an indented block");
            self.report_error(error);
            let span = self.span_from(start);
            let block = BlockExpr::new(vec![], None, span);
            return Ok(self.alloc_node(NodeKind::Expression, AnyNode::BlockExpr(block), span));
        }

        let base = self.dedents_seen();
        let mut statements = Vec::new();
        let mut value = None;

        loop {
            let item = self.parse_block_item()?;
            let ended = self.dedents_seen() > base || self.check(TokenKind::Eof);

            match item {
                BlockItem::Expr(expr) if ended => value = Some(expr),
                BlockItem::Expr(expr) => statements.push(self.wrap_expression_stmt(expr)),
                BlockItem::Stmt(stmt) => statements.push(stmt),
            }

            if ended {
                break;
            }
        }

        // This block's own dedent must not leak to the enclosing block
        if self.dedents_seen() > base {
            self.consume_dedent();
        }

        // A single-expression block is the expression itself
        if statements.is_empty()
            && let Some(expr) = value
        {
            return Ok(expr);
        }

        let span = self.span_from(start);
        let block = BlockExpr::new(statements, value, span);
        Ok(self.alloc_node(NodeKind::Expression, AnyNode::BlockExpr(block), span))
    }

    /// Parse one block item: a statement keyword or an expression.
    pub(crate) fn parse_block_item(&mut self) -> ParseResult<BlockItem> {
        match self.current_token().kind {
            TokenKind::Let => Ok(BlockItem::Stmt(self.parse_let_stmt()?)),
            TokenKind::Return => Ok(BlockItem::Stmt(self.parse_return_stmt()?)),
            TokenKind::Defer => Ok(BlockItem::Stmt(self.parse_defer_stmt()?)),
            TokenKind::Break => Ok(BlockItem::Stmt(self.parse_break_stmt()?)),
            TokenKind::Continue => Ok(BlockItem::Stmt(self.parse_continue_stmt()?)),
            _ => Ok(BlockItem::Expr(self.parse_expression()?)),
        }
    }

    /// Turn a block item into a statement node.
    pub(crate) fn item_as_statement(&mut self, item: BlockItem) -> NodeId {
        match item {
            BlockItem::Stmt(stmt) => stmt,
            BlockItem::Expr(expr) => self.wrap_expression_stmt(expr),
        }
    }

    /// Wrap an expression into an expression statement.
    pub(crate) fn wrap_expression_stmt(&mut self, expr: NodeId) -> NodeId {
        let span = self.ast().get_span(expr).unwrap_or_default();
        let stmt = ExpressionStmt::new(expr, span);
        self.alloc_node(NodeKind::Statement, AnyNode::ExpressionStmt(stmt), span)
    }
}
