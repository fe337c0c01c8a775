//! Parser module for the Fern programming language.
//!
//! This module converts token streams into an arena-allocated AST. It is a
//! recursive descent parser for statements with Pratt-style operator
//! precedence climbing for expressions.
//!
//! Layout tokens never reach the grammar rules: [`Parser::advance`] skips
//! NEWLINE/INDENT/DEDENT silently while recording two transient signals -
//! a dedent counter that block parsers use to detect the end of an inner
//! block, and a newline flag that suppresses call syntax across lines.
//!
//! On a syntax error the parser reports a diagnostic, sets its `had_error`
//! flag and enters panic mode, skipping tokens until the next statement
//! boundary so one pass can report several independent errors.

mod declaration;
mod expressions;
mod module;
mod pattern;
mod statement;
mod types;

use std::sync::Arc;

use fern_ast::ast::Ast;
use fern_ast::nodes::{AnyNode, LiteralExpr, LiteralValue, NodeId, NodeKind};
use fern_source::types::{FileID, Position, SourceManager, SourceSpan, Span};

use crate::diagnostics::{DiagnosticReporter, LexError, ParseError, ParseResult};
use crate::lexer::{Lexer, Token, TokenKind};

/// A complete snapshot of the parser's position, used for bounded
/// speculative parsing (lambda vs grouped expression, typed vs pattern
/// parameters). Restoring a checkpoint rewinds the lexer, both token slots
/// and the layout counters.
pub(crate) struct Checkpoint<'src> {
    lexer: Lexer<'src>,
    current: Token,
    previous: Token,
    dedents_seen: u32,
    newline_seen: bool,
    indent_seen: bool,
}

/// The Parser converts a stream of tokens into an AST.
///
/// Construction runs the lexer internally; the caller supplies the source
/// buffer, a file ID and the [`SourceManager`] used for diagnostics. All
/// nodes are allocated in the parser's [`Ast`] arena.
#[derive(Debug)]
pub struct Parser<'src> {
    /// Source code being parsed
    source: &'src str,
    /// File identifier
    file_id: FileID,
    /// Source manager for position lookup
    source_manager: Arc<SourceManager>,
    /// AST arena for node allocation
    ast: Ast,
    /// Lexer providing tokens
    lexer: Lexer<'src>,
    /// Current token
    current: Token,
    /// Previous token
    previous: Token,
    /// Diagnostic reporter for error messages
    diagnostics: DiagnosticReporter,
    /// Set by any syntax error
    had_error: bool,
    /// Suppresses cascading diagnostics until the next statement boundary
    panic_mode: bool,
    /// How many DEDENTs were skipped since the last reset
    dedents_seen: u32,
    /// Whether a NEWLINE was skipped reaching the current token
    newline_seen: bool,
    /// Whether an INDENT was skipped reaching the current token
    indent_seen: bool,
}

impl<'src> Parser<'src> {
    /// Create a new parser for the given source code.
    #[must_use]
    pub fn new(source: &'src str, file_id: FileID, source_manager: Arc<SourceManager>) -> Self {
        let diagnostics = DiagnosticReporter::new(source_manager.clone());
        let lexer = Lexer::new(source);
        let dummy = Token::with_empty_text(TokenKind::Eof, Span::default());

        let mut parser = Self {
            source,
            file_id,
            source_manager,
            ast: Ast::new(),
            lexer,
            current: dummy.clone(),
            previous: dummy,
            diagnostics,
            had_error: false,
            panic_mode: false,
            dedents_seen: 0,
            newline_seen: false,
            indent_seen: false,
        };

        // Load the first real token into `current`
        parser.advance();

        parser
    }

    // ------------------------------------------------------------------
    // Token plumbing
    // ------------------------------------------------------------------

    /// Shift `current` into `previous` and pull the next token, silently
    /// skipping layout tokens while recording them in the dedent counter
    /// and the newline flag. Lexer `Error` tokens are reported here and
    /// skipped as well.
    pub(crate) fn advance(&mut self) {
        self.newline_seen = false;
        self.indent_seen = false;

        let next = loop {
            let token = self.lexer.next_token();

            match token.kind {
                TokenKind::Newline => self.newline_seen = true,
                TokenKind::Indent => self.indent_seen = true,
                TokenKind::Dedent => self.dedents_seen += 1,
                TokenKind::Error => self.report_lex_error(&token),
                _ => break token,
            }
        };

        self.previous = std::mem::replace(&mut self.current, next);
    }

    /// Look at the current token.
    #[inline]
    pub(crate) const fn current_token(&self) -> &Token { &self.current }

    /// Look at the previously consumed token.
    #[inline]
    pub(crate) const fn previous_token(&self) -> &Token { &self.previous }

    /// Check if the current token is of the specified kind.
    #[inline]
    pub(crate) fn check(&self, kind: TokenKind) -> bool { self.current.kind == kind }

    /// Consume the current token if it matches, otherwise report nothing
    /// and return false.
    pub(crate) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            return true;
        }

        false
    }

    /// Consume the current token if it matches the expected kind.
    ///
    /// ## Errors
    ///
    /// Returns an `UnexpectedToken` error naming the expected kind.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> ParseResult<()> {
        if self.eat(kind) {
            return Ok(());
        }

        Err(ParseError::unexpected_token(
            kind,
            self.current.kind,
            self.source_span(self.current.span),
        ))
    }

    /// Whether a newline was crossed reaching the current token.
    #[inline]
    pub(crate) const fn newline_before_current(&self) -> bool { self.newline_seen }

    /// Whether an indent was crossed reaching the current token.
    #[inline]
    pub(crate) const fn indent_before_current(&self) -> bool { self.indent_seen }

    /// Consume an identifier and return its text.
    ///
    /// ## Errors
    ///
    /// Returns an error naming what the identifier was supposed to be.
    pub(crate) fn expect_ident(&mut self, what: &str) -> ParseResult<String> {
        if self.check(TokenKind::Ident) {
            let text = self.current.text.clone();
            self.advance();
            return Ok(text);
        }

        Err(self.error(&format!("Expected {what}, found {}", self.current.kind)))
    }

    /// The dedent counter since the last reset.
    #[inline]
    pub(crate) const fn dedents_seen(&self) -> u32 { self.dedents_seen }

    /// Consume one pending dedent, if any. Block parsers call this so the
    /// dedent that ended their own body does not propagate to the
    /// enclosing block.
    pub(crate) const fn consume_dedent(&mut self) {
        if self.dedents_seen > 0 {
            self.dedents_seen -= 1;
        }
    }

    // ------------------------------------------------------------------
    // Speculation
    // ------------------------------------------------------------------

    /// Capture the parser position for speculative parsing.
    pub(crate) fn checkpoint(&self) -> Checkpoint<'src> {
        Checkpoint {
            lexer: self.lexer.save(),
            current: self.current.clone(),
            previous: self.previous.clone(),
            dedents_seen: self.dedents_seen,
            newline_seen: self.newline_seen,
            indent_seen: self.indent_seen,
        }
    }

    /// Rewind to a previously captured position.
    pub(crate) fn rewind(&mut self, checkpoint: Checkpoint<'src>) {
        self.lexer.restore(checkpoint.lexer);
        self.current = checkpoint.current;
        self.previous = checkpoint.previous;
        self.dedents_seen = checkpoint.dedents_seen;
        self.newline_seen = checkpoint.newline_seen;
        self.indent_seen = checkpoint.indent_seen;
    }

    // ------------------------------------------------------------------
    // Diagnostics
    // ------------------------------------------------------------------

    /// Convert a byte span into a positioned span for diagnostics.
    pub(crate) fn source_span(&self, span: Span) -> SourceSpan {
        let start = self
            .source_manager
            .position_from_offset(self.file_id, span.start)
            .unwrap_or(Position::new(1, 1, span.start));
        let end = self
            .source_manager
            .position_from_offset(self.file_id, span.end)
            .unwrap_or(Position::new(1, 1, span.end));

        SourceSpan::new(start, end, self.file_id)
    }

    /// Create a free-form syntax error at the current token.
    pub(crate) fn error(&self, message: &str) -> ParseError {
        ParseError::invalid_syntax(message, self.source_span(self.current.span))
    }

    /// Report an error, set `had_error` and enter panic mode. While in
    /// panic mode further reports are suppressed so one mistake does not
    /// cascade.
    pub(crate) fn report_error(&mut self, error: ParseError) {
        self.had_error = true;

        if self.panic_mode {
            return;
        }

        self.panic_mode = true;
        self.diagnostics.report(error);
    }

    /// Report an error without touching panic mode; used by whole-program
    /// passes that run after parsing, where suppression makes no sense.
    pub(crate) fn report_plain_error(&mut self, error: ParseError) {
        self.had_error = true;
        self.diagnostics.report(error);
    }

    /// Translate a lexer `Error` token into a diagnostic.
    fn report_lex_error(&mut self, token: &Token) {
        self.had_error = true;

        let span = self.source_span(token.span);

        // String errors start at the opening quote or at the `}` that
        // resumed string mode; anything else is a stray character
        let error = match self.source.as_bytes().get(token.span.start) {
            Some(b'"' | b'}') => LexError::UnterminatedString { span },
            _ => LexError::UnknownCharacter {
                lexeme: self.source[token.span.start..token.span.end].to_string(),
                span,
            },
        };

        self.diagnostics.report(error);
    }

    /// Skip tokens until a plausible statement start after an error.
    ///
    /// Panic mode stays set until the statement loop clears it at the next
    /// boundary; this only moves the cursor there.
    pub(crate) fn synchronize(&mut self) {
        // Always make progress, or an unrecognized token would loop forever
        if !self.check(TokenKind::Eof) {
            self.advance();
        }

        while !self.check(TokenKind::Eof) {
            if matches!(
                self.current.kind,
                TokenKind::Fn
                    | TokenKind::Let
                    | TokenKind::Return
                    | TokenKind::Defer
                    | TokenKind::Break
                    | TokenKind::Continue
                    | TokenKind::Type
                    | TokenKind::Trait
                    | TokenKind::Impl
                    | TokenKind::Newtype
                    | TokenKind::Module
                    | TokenKind::Import
                    | TokenKind::Pub
            ) {
                return;
            }

            self.advance();
        }
    }

    /// Clear panic mode; called when a statement boundary is reached.
    pub(crate) const fn clear_panic(&mut self) { self.panic_mode = false; }

    // ------------------------------------------------------------------
    // Arena access
    // ------------------------------------------------------------------

    /// Get access to the AST arena.
    #[inline]
    #[must_use]
    pub const fn ast(&self) -> &Ast { &self.ast }

    /// Consume the parser, returning the arena it filled.
    #[must_use]
    pub fn into_ast(self) -> Ast { self.ast }

    /// Allocate an AST node.
    pub(crate) fn alloc_node(&mut self, kind: NodeKind, data: AnyNode, span: Span) -> NodeId {
        self.ast.alloc_node(kind, data, span)
    }

    /// Allocate the dummy node returned when primary parsing fails, so the
    /// AST never contains vacant child slots.
    pub(crate) fn dummy_node(&mut self) -> NodeId {
        let span = self.current.span;
        self.alloc_node(
            NodeKind::Expression,
            AnyNode::LiteralExpr(LiteralExpr::new(LiteralValue::Int(0), span)),
            span,
        )
    }

    /// Get the diagnostics reporter.
    #[inline]
    #[must_use]
    pub const fn diagnostics(&self) -> &DiagnosticReporter { &self.diagnostics }

    /// Whether any syntax error was encountered.
    #[inline]
    #[must_use]
    pub const fn had_error(&self) -> bool { self.had_error }

    /// Span from a recorded start offset to the end of the previous token.
    pub(crate) const fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.previous.span.end)
    }

    /// Length of the source buffer in bytes.
    pub(crate) const fn source_len(&self) -> usize { self.source.len() }

    /// Record the root node in the arena.
    pub(crate) const fn set_root(&mut self, root: NodeId) { self.ast.set_root(root); }
}
