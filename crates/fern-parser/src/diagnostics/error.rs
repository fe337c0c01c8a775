//! Error types for the Fern front end.
//!
//! Two taxonomies exist: lexer errors (unterminated string, unknown
//! character) that originate as `Error` tokens, and parser errors
//! (expected X, got Y). Both are turned into [`Diagnostic`]s so a single
//! compile pass can report every problem it finds.

use std::fmt;

use fern_source::types::SourceSpan;
use thiserror::Error;

use crate::lexer::TokenKind;

/// Represents the severity level of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    /// An error that prevents successful compilation
    Error,
    /// A warning about potential issues
    Warning,
    /// Additional notes about other diagnostics
    Note,
}

impl DiagnosticLevel {
    /// Returns a string representation of the diagnostic level
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Note => "note",
        }
    }

    /// Returns the ANSI color code for the level
    #[must_use]
    pub const fn color_code(&self) -> &'static str {
        match self {
            Self::Error => "\x1b[31m",   // Red
            Self::Warning => "\x1b[33m", // Yellow
            Self::Note => "\x1b[34m",    // Blue
        }
    }

    /// Returns the ANSI reset code
    #[must_use]
    pub const fn reset_code() -> &'static str { "\x1b[0m" }
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_str()) }
}

/// Lexer error type.
///
/// Lexer errors surface as `Error` tokens carrying the offending span; the
/// lexer continues scanning, so several of these can accumulate in one pass.
#[derive(Debug, Error, Clone)]
pub enum LexError {
    /// String literal without a closing quote on its line
    #[error("Unterminated string literal")]
    UnterminatedString {
        /// Span of the broken literal
        span: SourceSpan,
    },
    /// A character no token rule accepts
    #[error("Unknown character {lexeme:?}")]
    UnknownCharacter {
        /// The offending text
        lexeme: String,
        /// Span of the offending text
        span: SourceSpan,
    },
}

impl LexError {
    /// Returns the span the error points at.
    #[must_use]
    pub const fn span(&self) -> SourceSpan {
        match self {
            Self::UnterminatedString { span } | Self::UnknownCharacter { span, .. } => *span,
        }
    }
}

/// Parser error type.
#[derive(Debug, Error, Clone)]
pub enum ParseError {
    /// The current token is not what the grammar requires
    #[error("Expected {expected}, found {found}")]
    UnexpectedToken {
        /// What the grammar required
        expected: TokenKind,
        /// What was actually there
        found: TokenKind,
        /// Span of the found token
        span: SourceSpan,
    },
    /// Free-form syntax error
    #[error("{message}")]
    InvalidSyntax {
        /// Error message
        message: String,
        /// Span of the error
        span: SourceSpan,
    },
    /// Clauses of one function separated by other statements
    #[error("Clauses of function '{name}' must be adjacent")]
    NonAdjacentClauses {
        /// The function name
        name: String,
        /// Span of the stray clause
        span: SourceSpan,
    },
}

impl ParseError {
    /// Creates an "expected X, found Y" error.
    #[must_use]
    pub const fn unexpected_token(expected: TokenKind, found: TokenKind, span: SourceSpan) -> Self {
        Self::UnexpectedToken { expected, found, span }
    }

    /// Creates a free-form syntax error.
    pub fn invalid_syntax(message: impl Into<String>, span: SourceSpan) -> Self {
        Self::InvalidSyntax { message: message.into(), span }
    }

    /// Creates a non-adjacent clause error.
    pub fn non_adjacent_clauses(name: impl Into<String>, span: SourceSpan) -> Self {
        Self::NonAdjacentClauses { name: name.into(), span }
    }

    /// Returns the span the error points at.
    #[must_use]
    pub const fn span(&self) -> SourceSpan {
        match self {
            Self::UnexpectedToken { span, .. }
            | Self::InvalidSyntax { span, .. }
            | Self::NonAdjacentClauses { span, .. } => *span,
        }
    }
}

/// Result type for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// A diagnostic message with source location and optional annotations.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity of the message
    pub level: DiagnosticLevel,
    /// The message itself
    pub message: String,
    /// Where the message points
    pub span: SourceSpan,
    /// Additional explanatory notes
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Creates an error-level diagnostic.
    pub fn error(message: impl Into<String>, span: SourceSpan) -> Self {
        Self { level: DiagnosticLevel::Error, message: message.into(), span, notes: Vec::new() }
    }

    /// Creates a warning-level diagnostic.
    pub fn warning(message: impl Into<String>, span: SourceSpan) -> Self {
        Self { level: DiagnosticLevel::Warning, message: message.into(), span, notes: Vec::new() }
    }

    /// Creates a note-level diagnostic.
    pub fn note(message: impl Into<String>, span: SourceSpan) -> Self {
        Self { level: DiagnosticLevel::Note, message: message.into(), span, notes: Vec::new() }
    }

    /// Attaches an explanatory note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl From<ParseError> for Diagnostic {
    fn from(error: ParseError) -> Self {
        let span = error.span();
        Self::error(error.to_string(), span)
    }
}

impl From<LexError> for Diagnostic {
    fn from(error: LexError) -> Self {
        let span = error.span();
        Self::error(error.to_string(), span)
    }
}
