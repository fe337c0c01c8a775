//! Tests for the layout-aware lexer.

use fern_parser::lexer::{Lexer, Token, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::tokenize(source).iter().map(|t| t.kind).collect()
}

fn non_layout_kinds(source: &str) -> Vec<TokenKind> {
    Lexer::tokenize(source).iter().map(|t| t.kind).filter(|k| !k.is_layout()).collect()
}

// ============================================================================
// Basic Tokens
// ============================================================================

#[test]
fn empty_source_is_just_eof() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
}

#[test]
fn numeric_literals() {
    assert_eq!(
        non_layout_kinds("42 3.14 0xFF 0b1010 0o77 1_000_000"),
        vec![
            TokenKind::IntLiteral,
            TokenKind::FloatLiteral,
            TokenKind::HexLiteral,
            TokenKind::BinLiteral,
            TokenKind::OctLiteral,
            TokenKind::IntLiteral,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn keywords_resolve_from_identifiers() {
    assert_eq!(
        non_layout_kinds("fn fnord let letter _ _x"),
        vec![
            TokenKind::Fn,
            TokenKind::Ident,
            TokenKind::Let,
            TokenKind::Ident,
            TokenKind::Underscore,
            TokenKind::Ident,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn unicode_identifiers() {
    let tokens = Lexer::tokenize("héllo π");
    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[0].text, "héllo");
    assert_eq!(tokens[1].kind, TokenKind::Ident);
    assert_eq!(tokens[1].text, "π");
}

#[test]
fn maximal_munch_operators() {
    assert_eq!(
        non_layout_kinds("..= .. . ** * <- <= < => = |> |"),
        vec![
            TokenKind::DotDotEq,
            TokenKind::DotDot,
            TokenKind::Dot,
            TokenKind::StarStar,
            TokenKind::Star,
            TokenKind::LArrow,
            TokenKind::LtEq,
            TokenKind::Lt,
            TokenKind::FatArrow,
            TokenKind::Eq,
            TokenKind::PipeGt,
            TokenKind::Pipe,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn comments_are_stripped() {
    assert_eq!(
        kinds("x # a line comment\ny"),
        vec![TokenKind::Ident, TokenKind::Newline, TokenKind::Ident, TokenKind::Eof]
    );

    assert_eq!(
        non_layout_kinds("a /* block */ b"),
        vec![TokenKind::Ident, TokenKind::Ident, TokenKind::Eof]
    );
}

#[test]
fn carriage_returns_are_whitespace() {
    assert_eq!(
        kinds("a\r\nb"),
        vec![TokenKind::Ident, TokenKind::Newline, TokenKind::Ident, TokenKind::Eof]
    );
}

#[test]
fn unknown_character_produces_error_token() {
    let tokens = Lexer::tokenize("a $ b");
    let error: Vec<&Token> = tokens.iter().filter(|t| t.kind == TokenKind::Error).collect();

    assert_eq!(error.len(), 1);
    assert_eq!(error[0].text, "$");
    // The lexer continues after the error
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn plain_string_is_one_token_without_quotes() {
    let tokens = Lexer::tokenize("\"hello world\"");
    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].text, "hello world");
}

#[test]
fn escape_sequences_are_processed_at_scan_time() {
    let tokens = Lexer::tokenize(r#""a\nb\tc\\d\"e\{f\}g""#);
    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].text, "a\nb\tc\\d\"e{f}g");
}

#[test]
fn interpolation_produces_begin_mid_end() {
    assert_eq!(
        kinds("\"Hello, {name}!\""),
        vec![TokenKind::StringBegin, TokenKind::Ident, TokenKind::StringEnd, TokenKind::Eof]
    );

    assert_eq!(
        kinds("\"{a}{b}\""),
        vec![
            TokenKind::StringBegin,
            TokenKind::Ident,
            TokenKind::StringMid,
            TokenKind::Ident,
            TokenKind::StringEnd,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn interpolation_segment_text_is_processed() {
    let tokens = Lexer::tokenize("\"Hello, {name}!\"");
    assert_eq!(tokens[0].text, "Hello, ");
    assert_eq!(tokens[1].text, "name");
    assert_eq!(tokens[2].text, "!");
}

#[test]
fn braces_inside_interpolation_do_not_close_it() {
    // The inner map braces nest inside the interpolation expression
    assert_eq!(
        kinds("\"{ %{a: 1} }\""),
        vec![
            TokenKind::StringBegin,
            TokenKind::PercentBrace,
            TokenKind::Ident,
            TokenKind::Colon,
            TokenKind::IntLiteral,
            TokenKind::RBrace,
            TokenKind::StringEnd,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn unterminated_string_is_an_error_token() {
    let tokens = Lexer::tokenize("\"abc\nx");
    assert_eq!(tokens[0].kind, TokenKind::Error);
    // The newline stays visible to the layout machinery
    assert_eq!(tokens[1].kind, TokenKind::Newline);
    assert_eq!(tokens[2].kind, TokenKind::Ident);
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn indented_block_emits_indent_and_dedent() {
    assert_eq!(
        kinds("fn main():\n    let x = 1\n    x\n"),
        vec![
            TokenKind::Fn,
            TokenKind::Ident,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::Colon,
            TokenKind::Newline,
            TokenKind::Indent,
            TokenKind::Let,
            TokenKind::Ident,
            TokenKind::Eq,
            TokenKind::IntLiteral,
            TokenKind::Newline,
            TokenKind::Ident,
            TokenKind::Newline,
            TokenKind::Dedent,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn indents_and_dedents_balance() {
    let sources = [
        "a:\n  b:\n    c\nd\n",
        "x\n",
        "f():\n\tbody\n",
        "deep:\n  l1:\n    l2:\n      l3\n",
    ];

    for source in sources {
        let tokens = Lexer::tokenize(source);
        let indents = tokens.iter().filter(|t| t.kind == TokenKind::Indent).count();
        let dedents = tokens.iter().filter(|t| t.kind == TokenKind::Dedent).count();
        assert_eq!(indents, dedents, "unbalanced layout for {source:?}");
    }
}

#[test]
fn multiple_dedents_are_queued() {
    let tokens = Lexer::tokenize("a:\n  b:\n    c\nd\n");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

    // Dropping from depth 2 to 0 emits two consecutive DEDENTs before `d`
    let d_pos = tokens.iter().position(|t| t.text == "d").expect("d token");
    assert_eq!(kinds[d_pos - 1], TokenKind::Dedent);
    assert_eq!(kinds[d_pos - 2], TokenKind::Dedent);
}

#[test]
fn no_layout_tokens_inside_brackets() {
    let tokens = Lexer::tokenize("f(1,\n   2,\n   3)");
    assert!(tokens.iter().all(|t| !t.kind.is_layout()), "brackets must suppress layout");
}

#[test]
fn blank_and_comment_lines_do_not_change_layout() {
    let tokens = Lexer::tokenize("a:\n    b\n\n    # note\n    c\n");
    let indents = tokens.iter().filter(|t| t.kind == TokenKind::Indent).count();
    let dedents = tokens.iter().filter(|t| t.kind == TokenKind::Dedent).count();

    assert_eq!(indents, 1);
    assert_eq!(dedents, 1);
}

#[test]
fn tab_indentation_expands_to_multiple_of_eight() {
    // A tab and eight spaces land on the same indentation level
    let tokens = Lexer::tokenize("a:\n\tb\n        c\n");
    let indents = tokens.iter().filter(|t| t.kind == TokenKind::Indent).count();

    assert_eq!(indents, 1);
}

#[test]
fn dedents_drain_at_eof() {
    let tokens = Lexer::tokenize("a:\n  b:\n    c");
    let dedents = tokens.iter().filter(|t| t.kind == TokenKind::Dedent).count();

    assert_eq!(dedents, 2);
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
}

// ============================================================================
// Positions
// ============================================================================

#[test]
fn spans_are_monotonic() {
    let tokens = Lexer::tokenize("fn f():\n    1 + 2\nf()\n");

    let mut last_start = 0;
    for token in &tokens {
        assert!(token.span.start >= last_start, "span went backwards at {token}");
        last_start = token.span.start;
    }
}

// ============================================================================
// Save / Restore
// ============================================================================

#[test]
fn save_and_restore_rewind_the_stream() {
    let mut lexer = Lexer::new("(a, b) -> a");

    let saved = lexer.save();
    let first: Vec<TokenKind> = (0..5).map(|_| lexer.next_token().kind).collect();

    lexer.restore(saved);
    let second: Vec<TokenKind> = (0..5).map(|_| lexer.next_token().kind).collect();

    assert_eq!(first, second);
}

#[test]
fn peek_does_not_consume() {
    let mut lexer = Lexer::new("a b");

    assert_eq!(lexer.peek().kind, TokenKind::Ident);
    assert_eq!(lexer.peek().text, "a");

    let token = lexer.next_token();
    assert_eq!(token.text, "a");
    assert_eq!(lexer.next_token().text, "b");
}

#[test]
fn save_restore_covers_interpolation_state() {
    let mut lexer = Lexer::new("\"{a}{b}\"");

    // Enter the interpolation, then rewind past the StringBegin
    let saved = lexer.save();
    assert_eq!(lexer.next_token().kind, TokenKind::StringBegin);
    assert_eq!(lexer.next_token().kind, TokenKind::Ident);

    lexer.restore(saved);
    let kinds: Vec<TokenKind> = lexer.by_ref().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::StringBegin,
            TokenKind::Ident,
            TokenKind::StringMid,
            TokenKind::Ident,
            TokenKind::StringEnd,
            TokenKind::Eof,
        ]
    );
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn tokenizing_twice_is_identical() {
    let source = "fn fact(0) -> 1\nfn fact(n) -> n * fact(n - 1)\n";

    assert_eq!(Lexer::tokenize(source), Lexer::tokenize(source));
}
