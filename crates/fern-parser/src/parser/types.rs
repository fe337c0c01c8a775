//! Type annotation parsing.
//!
//! Annotations cover named types with optional arguments (`List[Int]`),
//! function types (`(Int, Int) -> Bool`) and tuple types (`(Int, String)`).

use fern_ast::nodes::{AnyNode, FunctionType, NamedType, NodeId, NodeKind, TupleType};

use crate::diagnostics::ParseResult;
use crate::lexer::TokenKind;
use crate::parser::Parser;

impl Parser<'_> {
    /// Parse a single type annotation.
    ///
    /// ## Errors
    ///
    /// Returns [`crate::diagnostics::ParseError`] when the current token
    /// cannot begin a type.
    pub fn parse_type_expr(&mut self) -> ParseResult<NodeId> {
        match self.current_token().kind {
            // Named type with optional arguments
            TokenKind::Ident => {
                let start = self.current_token().span.start;
                let name = self.current_token().text.clone();
                self.advance();

                let mut args = Vec::new();
                if self.check(TokenKind::LBracket) && !self.newline_before_current() {
                    self.advance();
                    while !self.check(TokenKind::RBracket) {
                        args.push(self.parse_type_expr()?);
                        if !self.eat(TokenKind::Comma) {
                            break;
                        }
                    }
                    self.expect(TokenKind::RBracket)?;
                }

                let span = self.span_from(start);
                let named = NamedType::new(name, args, span);
                Ok(self.alloc_node(NodeKind::Type, AnyNode::NamedType(named), span))
            }

            // Parenthesized: function type, tuple type, or grouping
            TokenKind::LParen => {
                let start = self.current_token().span.start;
                self.advance();

                let mut elements = Vec::new();
                let mut saw_comma = false;

                while !self.check(TokenKind::RParen) {
                    elements.push(self.parse_type_expr()?);
                    if self.eat(TokenKind::Comma) {
                        saw_comma = true;
                    } else {
                        break;
                    }
                }
                self.expect(TokenKind::RParen)?;

                if self.eat(TokenKind::Arrow) {
                    let ret = self.parse_type_expr()?;
                    let span = self.span_from(start);
                    let function = FunctionType::new(elements, ret, span);
                    return Ok(self.alloc_node(
                        NodeKind::Type,
                        AnyNode::FunctionType(function),
                        span,
                    ));
                }

                // A single parenthesized type is just grouping
                if elements.len() == 1 && !saw_comma {
                    return Ok(elements[0]);
                }

                let span = self.span_from(start);
                let tuple = TupleType::new(elements, span);
                Ok(self.alloc_node(NodeKind::Type, AnyNode::TupleType(tuple), span))
            }

            kind => Err(self.error(&format!("Expected a type, found {kind}"))),
        }
    }
}
