//! Whitespace-sensitive scanning of the adjacent size identifier.

use super::cursor::Cursor;
use super::tokens::TokenKind;

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Recognize an identifier bound directly to the preceding token.
///
/// The rule is invoked at the character right after the preceding token and
/// skips no whitespace, so a space at the lookahead disqualifies the match
/// on its own. Declines without consuming anything in that case.
pub(super) fn scan_size_identifier<C: Cursor>(cursor: &mut C) -> Option<TokenKind> {
    match cursor.lookahead() {
        Some(c) if is_identifier_start(c) => cursor.advance(false),
        _ => return None,
    }

    while let Some(c) = cursor.lookahead() {
        if !is_identifier_continue(c) {
            break;
        }
        cursor.advance(false);
    }

    cursor.mark_end();
    Some(TokenKind::StaticArraySizeIdentifier)
}
