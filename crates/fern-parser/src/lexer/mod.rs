//! # Lexer module for the Fern programming language.
//!
//! This module converts source text into tokens. It uses the `logos` crate
//! for raw tokenization and layers Fern's layout rules on top:
//!
//! - Indentation tracking that synthesizes INDENT/DEDENT tokens from an
//!   indent stack (starting at `[0]`, tabs expanding to the next multiple
//!   of 8)
//! - Bracket-depth tracking: no layout tokens are ever emitted while inside
//!   `(…)`, `[…]` or `{…}`
//! - String interpolation: `"Hi, {name}!"` lexes as `StringBegin`, the
//!   tokens of `name`, then `StringEnd`, re-entering string mode after the
//!   balanced `}`
//! - Escape processing at scan time: string tokens carry processed content
//! - Malformed input surfaces as `Error` tokens; the lexer never aborts
//!
//! The whole lexer state is cheaply cloneable, which backs both `peek()` and
//! the `save()`/`restore()` pair the parser uses for bounded speculation.

mod rules;
mod token;

use std::collections::VecDeque;

use fern_source::types::Span;
use logos::{Lexer as LogosLexer, Logos};
pub use rules::*;
pub use token::*;

/// How a string segment scan ended.
enum SegmentEnd {
    /// The closing quote was found
    Quote,
    /// An unescaped `{` opened an interpolation
    Brace,
    /// Newline or end of input before the string closed
    Unterminated,
}

/// The Fern lexer. Converts source text into a stream of tokens.
///
/// Produces a lazy sequence terminated by an `Eof` token. `peek()` looks one
/// token ahead without consuming; `save()`/`restore()` snapshot the complete
/// lexer state (cursor, indent stack, bracket depth, interpolation stack and
/// pending layout tokens) for speculative parsing.
#[derive(Clone)]
pub struct Lexer<'src> {
    /// The inner logos lexer
    inner: LogosLexer<'src, TokenKind>,
    /// Source code
    source: &'src str,
    /// Queue of pending layout tokens to return before lexing continues
    pending: VecDeque<Token>,
    /// One-token lookahead cache backing `peek()`
    peeked: Option<Token>,
    /// Indentation stack of column widths
    indent_stack: Vec<usize>,
    /// How many `( [ {` are currently open
    bracket_depth: usize,
    /// Brace nesting per open interpolation; the length is the
    /// interpolation depth
    interp_stack: Vec<u32>,
    /// Whether the next token starts a fresh line
    at_line_start: bool,
    /// Byte offset where the current line starts
    line_start: usize,
    /// Whether the EOF token has been produced
    reached_eof: bool,
}

impl std::fmt::Debug for Lexer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("offset", &self.inner.span().end)
            .field("indent_stack", &self.indent_stack)
            .field("bracket_depth", &self.bracket_depth)
            .field("interp_stack", &self.interp_stack)
            .finish_non_exhaustive()
    }
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
            source,
            pending: VecDeque::new(),
            peeked: None,
            indent_stack: vec![0], // Start with no indentation
            bracket_depth: 0,
            interp_stack: Vec::new(),
            at_line_start: true,
            line_start: 0,
            reached_eof: false,
        }
    }

    /// Convenience: tokenize the entire source into a `Vec<Token>`.
    ///
    /// The returned vector includes the final `Eof` token.
    #[must_use]
    pub fn tokenize(source: &'src str) -> Vec<Token> { Self::new(source).collect() }

    /// Advance and return the next token.
    pub fn next_token(&mut self) -> Token {
        if let Some(token) = self.peeked.take() {
            return token;
        }

        self.advance_token()
    }

    /// Look at the next token without consuming it.
    pub fn peek(&mut self) -> &Token {
        if self.peeked.is_none() {
            let token = self.advance_token();
            self.peeked = Some(token);
        }

        self.peeked.as_ref().expect("peeked token was just cached")
    }

    /// Capture the complete lexer state for speculative parsing.
    #[must_use]
    pub fn save(&self) -> Self { self.clone() }

    /// Restore a previously captured state, rewinding the lexer.
    pub fn restore(&mut self, state: Self) { *self = state; }

    /// Produce the next token from the layout machinery or the raw stream.
    fn advance_token(&mut self) -> Token {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return token;
            }

            // Layout decisions happen at line starts, outside brackets and
            // outside interpolation expressions
            if self.at_line_start && self.bracket_depth == 0 && self.interp_stack.is_empty() {
                self.at_line_start = false;
                if let Some(token) = self.handle_line_start() {
                    return token;
                }
            }

            let Some(result) = self.inner.next() else {
                return self.end_of_file();
            };

            let span = Span::from(self.inner.span());

            let Ok(kind) = result else {
                // Unknown character: surface it and continue with the next
                return Token::new(TokenKind::Error, self.inner.slice().to_string(), span);
            };

            match kind {
                TokenKind::Newline => {
                    self.line_start = span.end;

                    // Inside brackets or interpolations, newlines are plain
                    // whitespace
                    if self.bracket_depth > 0 || !self.interp_stack.is_empty() {
                        continue;
                    }

                    self.at_line_start = true;
                    return Token::with_empty_text(TokenKind::Newline, span);
                }

                TokenKind::DoubleQuote => return self.scan_string_segment(span.start, true),

                // Both brace openers are closed by `}`, so both nest inside
                // an interpolation expression
                TokenKind::LBrace | TokenKind::PercentBrace => {
                    self.bracket_depth += 1;
                    if let Some(depth) = self.interp_stack.last_mut() {
                        *depth += 1;
                    }
                    return Token::new(kind, self.inner.slice().to_string(), span);
                }

                TokenKind::RBrace => {
                    if let Some(depth) = self.interp_stack.last_mut() {
                        if *depth == 0 {
                            // The brace that opened this interpolation was
                            // part of the string token; re-enter string mode
                            return self.scan_string_segment(span.start, false);
                        }
                        *depth -= 1;
                    }
                    self.bracket_depth = self.bracket_depth.saturating_sub(1);
                    return Token::new(TokenKind::RBrace, "}".to_string(), span);
                }

                kind if kind.is_open_bracket() => {
                    self.bracket_depth += 1;
                    return Token::new(kind, self.inner.slice().to_string(), span);
                }

                kind if kind.is_close_bracket() => {
                    self.bracket_depth = self.bracket_depth.saturating_sub(1);
                    return Token::new(kind, self.inner.slice().to_string(), span);
                }

                TokenKind::Ident => {
                    let lexeme = self.inner.slice();
                    let kind = check_keyword(lexeme).unwrap_or(TokenKind::Ident);
                    return Token::new(kind, lexeme.to_string(), span);
                }

                kind => return Token::new(kind, self.inner.slice().to_string(), span),
            }
        }
    }

    /// Compare the indentation of a fresh line against the indent stack.
    ///
    /// Returns the layout token to emit first, queueing any further DEDENTs.
    /// Blank and comment-only lines never change layout.
    fn handle_line_start(&mut self) -> Option<Token> {
        let line = &self.source[self.line_start..];
        let (width, consumed) = indentation_width(line);

        if is_blank_or_comment(&line[consumed..]) {
            return None;
        }

        let top = self.indent_stack.last().copied().unwrap_or(0);
        let span = Span::new(self.line_start, self.line_start + consumed);

        match width.cmp(&top) {
            // Indentation increased: push the level and emit INDENT
            std::cmp::Ordering::Greater => {
                self.indent_stack.push(width);
                Some(Token::with_empty_text(TokenKind::Indent, span))
            }

            // Indentation decreased: pop levels, emit one DEDENT now and
            // queue the rest
            std::cmp::Ordering::Less => {
                let mut popped = 0;
                while self.indent_stack.last().is_some_and(|&level| level > width) {
                    let _ = self.indent_stack.pop();
                    popped += 1;
                }

                for _ in 1..popped {
                    self.pending.push_back(Token::with_empty_text(TokenKind::Dedent, span));
                }

                (popped > 0).then(|| Token::with_empty_text(TokenKind::Dedent, span))
            }

            // Same level: no layout token
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Drain remaining indentation levels as DEDENTs, then produce EOF.
    fn end_of_file(&mut self) -> Token {
        let offset = self.source.len();
        let span = Span::new(offset, offset);

        if self.indent_stack.len() > 1 {
            let _ = self.indent_stack.pop();
            return Token::with_empty_text(TokenKind::Dedent, span);
        }

        self.reached_eof = true;
        Token::with_empty_text(TokenKind::Eof, span)
    }

    /// Scan one string segment starting right after a `"` (when `opening`)
    /// or right after the `}` that closed an interpolation.
    ///
    /// Escape sequences are processed into the token text. The segment ends
    /// at the closing quote, at an unescaped `{` opening an interpolation,
    /// or - for malformed input - at a newline or end of input.
    fn scan_string_segment(&mut self, start: usize, opening: bool) -> Token {
        let rest = self.inner.remainder();
        let content_start = self.inner.span().end;

        let mut text = String::new();
        let mut consumed = 0;
        let mut end = SegmentEnd::Unterminated;
        let mut chars = rest.chars();

        while let Some(ch) = chars.next() {
            match ch {
                '"' => {
                    consumed += 1;
                    end = SegmentEnd::Quote;
                    break;
                }
                '\\' => {
                    consumed += 1;
                    let Some(escaped) = chars.next() else { break };
                    consumed += escaped.len_utf8();
                    match escaped {
                        'n' => text.push('\n'),
                        't' => text.push('\t'),
                        'r' => text.push('\r'),
                        '\\' => text.push('\\'),
                        '"' => text.push('"'),
                        '{' => text.push('{'),
                        '}' => text.push('}'),
                        // Unrecognized escapes pass through verbatim
                        other => {
                            text.push('\\');
                            text.push(other);
                        }
                    }
                }
                '{' => {
                    // A brace directly before the closing quote stays literal
                    if chars.clone().next() == Some('"') {
                        text.push('{');
                        consumed += 1;
                    } else {
                        consumed += 1;
                        end = SegmentEnd::Brace;
                        break;
                    }
                }
                // Strings do not span lines; leave the newline for layout
                '\n' => break,
                other => {
                    text.push(other);
                    consumed += other.len_utf8();
                }
            }
        }

        self.inner.bump(consumed);
        let span = Span::new(start, content_start + consumed);

        let kind = match end {
            SegmentEnd::Quote => {
                if opening {
                    TokenKind::StringLiteral
                } else {
                    let _ = self.interp_stack.pop();
                    TokenKind::StringEnd
                }
            }
            SegmentEnd::Brace => {
                if opening {
                    self.interp_stack.push(0);
                    TokenKind::StringBegin
                } else {
                    // The entry for this interpolation stays live at depth 0
                    TokenKind::StringMid
                }
            }
            SegmentEnd::Unterminated => {
                if !opening {
                    let _ = self.interp_stack.pop();
                }
                TokenKind::Error
            }
        };

        Token::new(kind, text, span)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.reached_eof && self.peeked.is_none() && self.pending.is_empty() {
            return None;
        }

        Some(self.next_token())
    }
}
