//! Literal and string-interpolation parsing.

use fern_ast::nodes::{
    AnyNode,
    LiteralExpr,
    LiteralValue,
    NodeKind,
    NodeId,
    StringInterpExpr,
    StringPart,
};

use crate::diagnostics::ParseResult;
use crate::lexer::TokenKind;
use crate::parser::Parser;

impl Parser<'_> {
    /// Parse a literal expression from the current token.
    pub(crate) fn parse_literal(&mut self) -> ParseResult<NodeId> {
        let token = self.current_token().clone();
        self.advance();

        let value = match token.kind {
            TokenKind::IntLiteral => LiteralValue::Int(self.parse_int_text(&token.text, 10)),
            TokenKind::HexLiteral => LiteralValue::Int(self.parse_int_text(&token.text[2..], 16)),
            TokenKind::BinLiteral => LiteralValue::Int(self.parse_int_text(&token.text[2..], 2)),
            TokenKind::OctLiteral => LiteralValue::Int(self.parse_int_text(&token.text[2..], 8)),
            TokenKind::FloatLiteral => {
                let digits: String = token.text.chars().filter(|&c| c != '_').collect();
                LiteralValue::Float(digits.parse().unwrap_or(0.0))
            }
            TokenKind::True => LiteralValue::Bool(true),
            TokenKind::False => LiteralValue::Bool(false),
            // The token text is already escape-processed by the lexer
            TokenKind::StringLiteral => LiteralValue::Str(token.text),
            _ => return Err(self.error("Expected a literal")),
        };

        let literal = LiteralExpr::new(value, token.span);
        Ok(self.alloc_node(NodeKind::Expression, AnyNode::LiteralExpr(literal), token.span))
    }

    /// Decode an integer lexeme, ignoring `_` separators.
    ///
    /// Out-of-range literals are reported and read as zero rather than
    /// aborting the parse.
    fn parse_int_text(&mut self, digits: &str, radix: u32) -> i64 {
        let cleaned: String = digits.chars().filter(|&c| c != '_').collect();

        match i64::from_str_radix(&cleaned, radix) {
            Ok(value) => value,
            Err(_) => {
                let error = self.error("Integer literal out of range");
                self.report_error(error);
                0
            }
        }
    }

    /// Parse an interpolated string.
    ///
    /// The lexer delivers `StringBegin`, then the tokens of the first
    /// embedded expression, then `StringMid`/`StringEnd` segments around
    /// any further expressions. Empty text segments are dropped, so
    /// `"{a}{b}"` carries exactly two parts.
    pub(super) fn parse_string_interp(&mut self) -> ParseResult<NodeId> {
        let start = self.current_token().span.start;
        let mut parts = Vec::new();

        // StringBegin
        let begin = self.current_token().clone();
        self.advance();
        if !begin.text.is_empty() {
            parts.push(StringPart::Text(begin.text));
        }

        loop {
            let expr = self.parse_expression()?;
            parts.push(StringPart::Expr(expr));

            match self.current_token().kind {
                TokenKind::StringMid => {
                    let mid = self.current_token().text.clone();
                    self.advance();
                    if !mid.is_empty() {
                        parts.push(StringPart::Text(mid));
                    }
                }
                TokenKind::StringEnd => {
                    let end = self.current_token().text.clone();
                    self.advance();
                    if !end.is_empty() {
                        parts.push(StringPart::Text(end));
                    }
                    break;
                }
                kind => {
                    return Err(
                        self.error(&format!("Expected string continuation, found {kind}"))
                    );
                }
            }
        }

        let span = self.span_from(start);
        let interp = StringInterpExpr::new(parts, span);
        Ok(self.alloc_node(NodeKind::Expression, AnyNode::StringInterpExpr(interp), span))
    }
}
