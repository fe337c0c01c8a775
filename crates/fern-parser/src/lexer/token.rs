//! Token definitions for the Fern programming language.
//!
//! The raw tokenizer is a `logos` automaton covering identifiers, numbers,
//! operators, punctuation, newlines and comments. Everything layout- or
//! string-related is synthesized by the [`super::Lexer`] wrapper: keyword
//! kinds are resolved from identifier lexemes, string tokens are produced by
//! the hand-rolled segment scanner, and `Indent`/`Dedent`/`Eof`/`Error` have
//! no logos rule at all.

use std::fmt::{self, Display, Formatter};

use fern_source::types::Span;
use logos::Logos;

/// Represents the type of a token in the Fern language.
#[derive(Logos, Debug, Eq, PartialEq, Clone, Copy, Hash)]
#[logos(skip r"[ \t\r\f]+")] // Horizontal whitespace; newlines drive layout
pub enum TokenKind {
    // Keywords (resolved from Ident through the keyword table, no logos rule)
    After,
    And,
    As,
    Break,
    Continue,
    Defer,
    Derive,
    Do,
    Else,
    False,
    Fn,
    For,
    If,
    Impl,
    Import,
    In,
    Let,
    Loop,
    Match,
    Module,
    Newtype,
    Not,
    Or,
    Pub,
    Receive,
    Return,
    Send,
    Spawn,
    Trait,
    True,
    Type,
    Underscore,
    Unless,
    Where,
    While,
    With,

    // Literals
    #[regex(r"[0-9][0-9_]*")]
    IntLiteral,
    #[regex(r"0[xX][0-9a-fA-F][0-9a-fA-F_]*")]
    HexLiteral,
    #[regex(r"0[bB][01][01_]*")]
    BinLiteral,
    #[regex(r"0[oO][0-7][0-7_]*")]
    OctLiteral,
    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*")]
    FloatLiteral,

    // String tokens. The opening quote is the only logos rule; the segment
    // scanner in the wrapper produces the four surface kinds below.
    #[token("\"")]
    DoubleQuote,
    /// A complete string literal without interpolation
    StringLiteral,
    /// The first segment of an interpolated string (up to the first `{`)
    StringBegin,
    /// A segment between two interpolations (`}` … `{`)
    StringMid,
    /// The final segment of an interpolated string (`}` … `"`)
    StringEnd,

    // Identifiers: ASCII letters/underscore or any non-ASCII character to
    // start, letters/digits/underscore/non-ASCII to continue
    #[regex(r"(?:[A-Za-z_]|[^\x00-\x7F])(?:[A-Za-z0-9_]|[^\x00-\x7F])*")]
    Ident,

    // Operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("**")]
    StarStar,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("=")]
    Eq,
    #[token("=>")]
    FatArrow,
    #[token("->")]
    Arrow,
    #[token("<-")]
    LArrow,
    #[token("|")]
    Pipe,
    #[token("|>")]
    PipeGt,
    #[token("..")]
    DotDot,
    #[token("..=")]
    DotDotEq,

    // Punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("%{")]
    PercentBrace,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token("@")]
    At,
    #[token("?")]
    Question,

    // Whitespace and comments
    #[regex(r"\n")]
    Newline,
    #[regex(r"#[^\n]*", logos::skip)]
    #[regex(r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/", logos::skip)]
    Comment,

    // Synthetic tokens
    Indent,
    Dedent,
    Eof,
    Error,
}

impl TokenKind {
    /// Returns true for the layout tokens the parser skips transparently.
    #[must_use]
    pub const fn is_layout(&self) -> bool {
        matches!(self, Self::Newline | Self::Indent | Self::Dedent)
    }

    /// Returns true for tokens that open a bracketed span.
    #[must_use]
    pub const fn is_open_bracket(&self) -> bool {
        matches!(self, Self::LParen | Self::LBracket | Self::LBrace | Self::PercentBrace)
    }

    /// Returns true for tokens that close a bracketed span.
    #[must_use]
    pub const fn is_close_bracket(&self) -> bool {
        matches!(self, Self::RParen | Self::RBracket | Self::RBrace)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            // Keywords
            Self::After => write!(f, "after"),
            Self::And => write!(f, "and"),
            Self::As => write!(f, "as"),
            Self::Break => write!(f, "break"),
            Self::Continue => write!(f, "continue"),
            Self::Defer => write!(f, "defer"),
            Self::Derive => write!(f, "derive"),
            Self::Do => write!(f, "do"),
            Self::Else => write!(f, "else"),
            Self::False => write!(f, "false"),
            Self::Fn => write!(f, "fn"),
            Self::For => write!(f, "for"),
            Self::If => write!(f, "if"),
            Self::Impl => write!(f, "impl"),
            Self::Import => write!(f, "import"),
            Self::In => write!(f, "in"),
            Self::Let => write!(f, "let"),
            Self::Loop => write!(f, "loop"),
            Self::Match => write!(f, "match"),
            Self::Module => write!(f, "module"),
            Self::Newtype => write!(f, "newtype"),
            Self::Not => write!(f, "not"),
            Self::Or => write!(f, "or"),
            Self::Pub => write!(f, "pub"),
            Self::Receive => write!(f, "receive"),
            Self::Return => write!(f, "return"),
            Self::Send => write!(f, "send"),
            Self::Spawn => write!(f, "spawn"),
            Self::Trait => write!(f, "trait"),
            Self::True => write!(f, "true"),
            Self::Type => write!(f, "type"),
            Self::Underscore => write!(f, "_"),
            Self::Unless => write!(f, "unless"),
            Self::Where => write!(f, "where"),
            Self::While => write!(f, "while"),
            Self::With => write!(f, "with"),

            // Literals
            Self::IntLiteral => write!(f, "<int>"),
            Self::HexLiteral => write!(f, "<hex>"),
            Self::BinLiteral => write!(f, "<bin>"),
            Self::OctLiteral => write!(f, "<oct>"),
            Self::FloatLiteral => write!(f, "<float>"),
            Self::DoubleQuote => write!(f, "\""),
            Self::StringLiteral => write!(f, "<string>"),
            Self::StringBegin => write!(f, "<string begin>"),
            Self::StringMid => write!(f, "<string mid>"),
            Self::StringEnd => write!(f, "<string end>"),

            // Identifiers
            Self::Ident => write!(f, "<identifier>"),

            // Operators
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::StarStar => write!(f, "**"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::Lt => write!(f, "<"),
            Self::LtEq => write!(f, "<="),
            Self::Gt => write!(f, ">"),
            Self::GtEq => write!(f, ">="),
            Self::EqEq => write!(f, "=="),
            Self::NotEq => write!(f, "!="),
            Self::Eq => write!(f, "="),
            Self::FatArrow => write!(f, "=>"),
            Self::Arrow => write!(f, "->"),
            Self::LArrow => write!(f, "<-"),
            Self::Pipe => write!(f, "|"),
            Self::PipeGt => write!(f, "|>"),
            Self::DotDot => write!(f, ".."),
            Self::DotDotEq => write!(f, "..="),

            // Punctuation
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::PercentBrace => write!(f, "%{{"),
            Self::Comma => write!(f, ","),
            Self::Colon => write!(f, ":"),
            Self::Dot => write!(f, "."),
            Self::At => write!(f, "@"),
            Self::Question => write!(f, "?"),

            // Whitespace and comments
            Self::Newline => write!(f, "<newline>"),
            Self::Comment => write!(f, "<comment>"),

            // Synthetic tokens
            Self::Indent => write!(f, "<indent>"),
            Self::Dedent => write!(f, "<dedent>"),
            Self::Eof => write!(f, "<end of file>"),
            Self::Error => write!(f, "<error>"),
        }
    }
}

/// Represents a token in the Fern language.
///
/// `text` is the lexeme exactly as it appeared in source for identifiers,
/// numbers and operators; for string tokens it is the escape-processed
/// content without quotes; for synthetic tokens it is empty. The text is
/// copied out of the source buffer at scan time - tokens never borrow it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The (possibly processed) token text.
    pub text: String,
    /// The byte span of the token in the source code.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, text: String, span: Span) -> Self {
        Self { kind, text, span }
    }

    /// Creates a token with empty text (synthetic tokens).
    #[must_use]
    pub const fn with_empty_text(kind: TokenKind, span: Span) -> Self {
        Self { kind, text: String::new(), span }
    }

    /// Checks if the token is of the specified kind.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool { self.kind == kind }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}..{}", self.kind, self.span.start, self.span.end)
    }
}
