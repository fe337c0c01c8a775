//! Helper rules for lexical analysis.
//!
//! This module contains the keyword table, the indentation width rule, and
//! the blank-line test used by the layout machinery.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use super::token::TokenKind;

/// Get the global keyword table for efficient lookups.
pub(crate) fn keywords() -> &'static FxHashMap<&'static str, TokenKind> {
    static KEYWORDS: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();

    KEYWORDS.get_or_init(|| {
        let mut map = FxHashMap::default();
        let _ = map.insert("after", TokenKind::After);
        let _ = map.insert("and", TokenKind::And);
        let _ = map.insert("as", TokenKind::As);
        let _ = map.insert("break", TokenKind::Break);
        let _ = map.insert("continue", TokenKind::Continue);
        let _ = map.insert("defer", TokenKind::Defer);
        let _ = map.insert("derive", TokenKind::Derive);
        let _ = map.insert("do", TokenKind::Do);
        let _ = map.insert("else", TokenKind::Else);
        let _ = map.insert("false", TokenKind::False);
        let _ = map.insert("fn", TokenKind::Fn);
        let _ = map.insert("for", TokenKind::For);
        let _ = map.insert("if", TokenKind::If);
        let _ = map.insert("impl", TokenKind::Impl);
        let _ = map.insert("import", TokenKind::Import);
        let _ = map.insert("in", TokenKind::In);
        let _ = map.insert("let", TokenKind::Let);
        let _ = map.insert("loop", TokenKind::Loop);
        let _ = map.insert("match", TokenKind::Match);
        let _ = map.insert("module", TokenKind::Module);
        let _ = map.insert("newtype", TokenKind::Newtype);
        let _ = map.insert("not", TokenKind::Not);
        let _ = map.insert("or", TokenKind::Or);
        let _ = map.insert("pub", TokenKind::Pub);
        let _ = map.insert("receive", TokenKind::Receive);
        let _ = map.insert("return", TokenKind::Return);
        let _ = map.insert("send", TokenKind::Send);
        let _ = map.insert("spawn", TokenKind::Spawn);
        let _ = map.insert("trait", TokenKind::Trait);
        let _ = map.insert("true", TokenKind::True);
        let _ = map.insert("type", TokenKind::Type);
        let _ = map.insert("_", TokenKind::Underscore);
        let _ = map.insert("unless", TokenKind::Unless);
        let _ = map.insert("where", TokenKind::Where);
        let _ = map.insert("while", TokenKind::While);
        let _ = map.insert("with", TokenKind::With);

        map
    })
}

/// Resolve an identifier lexeme against the keyword table.
///
/// Returns the keyword kind on a hit; the lexeme stays an identifier
/// otherwise.
#[must_use]
pub fn check_keyword(lexeme: &str) -> Option<TokenKind> { keywords().get(lexeme).copied() }

/// Measure the indentation width at the start of a line.
///
/// Spaces count 1; a tab advances to the next multiple of 8; `\r` is
/// transparent. Returns the width together with the byte length of the
/// consumed prefix.
#[must_use]
pub fn indentation_width(line: &str) -> (usize, usize) {
    let mut width = 0;
    let mut consumed = 0;

    for ch in line.chars() {
        match ch {
            ' ' => width += 1,
            '\t' => width = (width / 8 + 1) * 8,
            '\r' => {}
            _ => break,
        }
        consumed += ch.len_utf8();
    }

    (width, consumed)
}

/// Test whether the rest of a line holds no tokens.
///
/// A line is blank for layout purposes when nothing but whitespace and
/// comments remains before the newline. Block comments may hide the rest of
/// the line; a multi-line block comment makes the line blank as well, since
/// the layout decision belongs to the line where real content appears.
#[must_use]
pub fn is_blank_or_comment(rest: &str) -> bool {
    let mut rest = rest;

    loop {
        rest = rest.trim_start_matches([' ', '\t', '\r']);

        match rest.as_bytes().first() {
            None | Some(b'\n') | Some(b'#') => return true,
            Some(b'/') if rest.as_bytes().get(1) == Some(&b'*') => {
                match rest[2..].find("*/") {
                    // Resume the scan after the comment close
                    Some(end) => rest = &rest[2 + end + 2..],
                    // Unterminated comment swallows the rest of the line
                    None => return true,
                }
            }
            Some(_) => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_lookup() {
        assert_eq!(check_keyword("fn"), Some(TokenKind::Fn));
        assert_eq!(check_keyword("_"), Some(TokenKind::Underscore));
        assert_eq!(check_keyword("fnord"), None);
    }

    #[test]
    fn tab_expands_to_next_multiple_of_eight() {
        assert_eq!(indentation_width("    x"), (4, 4));
        assert_eq!(indentation_width("\tx"), (8, 1));
        assert_eq!(indentation_width("  \tx"), (8, 3));
        assert_eq!(indentation_width("\t\tx"), (16, 2));
    }

    #[test]
    fn blank_line_detection() {
        assert!(is_blank_or_comment(""));
        assert!(is_blank_or_comment("   \n"));
        assert!(is_blank_or_comment("  # trailing note\n"));
        assert!(is_blank_or_comment(" /* a */ # b\n"));
        assert!(!is_blank_or_comment(" /* a */ x\n"));
        assert!(!is_blank_or_comment("x\n"));
    }
}
