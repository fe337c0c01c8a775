//! Pattern parsing.
//!
//! Patterns appear in `let`, `match`/`receive` arms, `with … else` arms,
//! and multi-clause function parameters. Constructor patterns are told
//! apart from bindings by their capitalized head.

use fern_ast::nodes::{
    AnyNode,
    ConstructorPattern,
    IdentPattern,
    LiteralExpr,
    LiteralPattern,
    LiteralValue,
    NodeId,
    NodeKind,
    RestPattern,
    TuplePattern,
    WildcardPattern,
};

use crate::diagnostics::ParseResult;
use crate::lexer::TokenKind;
use crate::parser::Parser;

impl Parser<'_> {
    /// Whether a token can begin a pattern; used for match-arm
    /// continuation decisions.
    pub(crate) const fn can_start_pattern(kind: TokenKind) -> bool {
        matches!(
            kind,
            TokenKind::Underscore
                | TokenKind::Ident
                | TokenKind::IntLiteral
                | TokenKind::HexLiteral
                | TokenKind::BinLiteral
                | TokenKind::OctLiteral
                | TokenKind::FloatLiteral
                | TokenKind::StringLiteral
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Minus
                | TokenKind::LParen
                | TokenKind::LBracket
                | TokenKind::DotDot
        )
    }

    /// Parse a single pattern.
    ///
    /// ## Errors
    ///
    /// Returns [`crate::diagnostics::ParseError`] when the current token
    /// cannot begin a pattern.
    pub(crate) fn parse_pattern(&mut self) -> ParseResult<NodeId> {
        match self.current_token().kind {
            // Wildcard
            TokenKind::Underscore => {
                let span = self.current_token().span;
                self.advance();
                let pattern = WildcardPattern::new(span);
                Ok(self.alloc_node(NodeKind::Pattern, AnyNode::WildcardPattern(pattern), span))
            }

            // Rest: `..name` or `.._`
            TokenKind::DotDot => {
                let start = self.current_token().span.start;
                self.advance();

                let name = match self.current_token().kind {
                    TokenKind::Ident => {
                        let name = self.current_token().text.clone();
                        self.advance();
                        Some(name)
                    }
                    TokenKind::Underscore => {
                        self.advance();
                        None
                    }
                    _ => None,
                };

                let span = self.span_from(start);
                let pattern = RestPattern::new(name, span);
                Ok(self.alloc_node(NodeKind::Pattern, AnyNode::RestPattern(pattern), span))
            }

            // Literals
            TokenKind::IntLiteral
            | TokenKind::HexLiteral
            | TokenKind::BinLiteral
            | TokenKind::OctLiteral
            | TokenKind::FloatLiteral
            | TokenKind::StringLiteral
            | TokenKind::True
            | TokenKind::False => self.parse_literal_pattern(false),

            // Negated numeric literal
            TokenKind::Minus => {
                self.advance();
                self.parse_literal_pattern(true)
            }

            // Binding or constructor, decided by capitalization
            TokenKind::Ident => {
                let start = self.current_token().span.start;
                let name = self.current_token().text.clone();
                self.advance();

                let is_constructor = name.chars().next().is_some_and(char::is_uppercase);

                if is_constructor {
                    let mut args = Vec::new();

                    if self.check(TokenKind::LParen) && !self.newline_before_current() {
                        self.advance();
                        while !self.check(TokenKind::RParen) {
                            args.push(self.parse_pattern()?);
                            if !self.eat(TokenKind::Comma) {
                                break;
                            }
                        }
                        self.expect(TokenKind::RParen)?;
                    }

                    let span = self.span_from(start);
                    let pattern = ConstructorPattern::new(name, args, span);
                    return Ok(self.alloc_node(
                        NodeKind::Pattern,
                        AnyNode::ConstructorPattern(pattern),
                        span,
                    ));
                }

                let span = self.span_from(start);
                let pattern = IdentPattern::new(name, span);
                Ok(self.alloc_node(NodeKind::Pattern, AnyNode::IdentPattern(pattern), span))
            }

            // Tuple pattern
            TokenKind::LParen => {
                let start = self.current_token().span.start;
                self.advance();

                let mut elements = Vec::new();
                let mut saw_comma = false;

                while !self.check(TokenKind::RParen) {
                    elements.push(self.parse_pattern()?);
                    if self.eat(TokenKind::Comma) {
                        saw_comma = true;
                    } else {
                        break;
                    }
                }
                self.expect(TokenKind::RParen)?;

                // A single parenthesized pattern is just grouping
                if elements.len() == 1 && !saw_comma {
                    return Ok(elements[0]);
                }

                let span = self.span_from(start);
                let pattern = TuplePattern::new(elements, span);
                Ok(self.alloc_node(NodeKind::Pattern, AnyNode::TuplePattern(pattern), span))
            }

            // List pattern; shares the tuple pattern shape
            TokenKind::LBracket => {
                let start = self.current_token().span.start;
                self.advance();

                let mut elements = Vec::new();
                while !self.check(TokenKind::RBracket) {
                    elements.push(self.parse_pattern()?);
                    if !self.eat(TokenKind::Comma) {
                        break;
                    }
                }
                self.expect(TokenKind::RBracket)?;

                let span = self.span_from(start);
                let pattern = TuplePattern::new(elements, span);
                Ok(self.alloc_node(NodeKind::Pattern, AnyNode::TuplePattern(pattern), span))
            }

            kind => Err(self.error(&format!("Expected a pattern, found {kind}"))),
        }
    }

    /// Parse a literal and wrap it as a literal pattern, optionally
    /// negating a numeric value (the `-` has already been consumed).
    fn parse_literal_pattern(&mut self, negate: bool) -> ParseResult<NodeId> {
        // When negating, the '-' in `previous` anchors the span
        let start = if negate {
            self.previous_token().span.start
        } else {
            self.current_token().span.start
        };
        let value = self.parse_literal()?;

        let value = if negate {
            let Some(node) = self.ast().get_node(value) else {
                return Err(self.error("Expected a literal"));
            };

            let AnyNode::LiteralExpr(literal) = &node.data else {
                return Err(self.error("Expected a literal"));
            };

            let span = node.span;
            let negated = match &literal.value {
                LiteralValue::Int(v) => LiteralValue::Int(-v),
                LiteralValue::Float(v) => LiteralValue::Float(-v),
                _ => return Err(self.error("Only numeric literals can be negated in patterns")),
            };

            self.alloc_node(
                NodeKind::Expression,
                AnyNode::LiteralExpr(LiteralExpr::new(negated, span)),
                span,
            )
        } else {
            value
        };

        let span = self.span_from(start);
        let pattern = LiteralPattern::new(value, span);
        Ok(self.alloc_node(NodeKind::Pattern, AnyNode::LiteralPattern(pattern), span))
    }
}
