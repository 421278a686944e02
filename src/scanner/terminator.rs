//! Automatic statement termination at line breaks.

use super::cursor::Cursor;
use super::tokens::TokenKind;

/// Characters that signal the statement continues past the line break:
/// method chaining, a trailing binary operator, or an unfinished argument
/// list. No terminator is inserted in front of one of these.
fn continues_statement(c: char) -> bool {
    matches!(
        c,
        '.' | '+' | '-' | '*' | '/' | '%' | '=' | '<' | '>' | '&' | '|' | ',' | ')' | ']' | '}'
    )
}

/// Insert an implicit statement terminator when at least one newline
/// separates the previous token from the next significant character.
///
/// Declines without committing a boundary when no newline was crossed or
/// when the next significant character continues the statement; whitespace
/// consumed by the attempt is abandoned and the host re-scans from the
/// original position. On success the committed span covers only the
/// whitespace — the next token's characters stay unconsumed.
pub(super) fn scan_automatic_semicolon<C: Cursor>(cursor: &mut C) -> Option<TokenKind> {
    let mut crossed_newline = false;

    while let Some(c) = cursor.lookahead() {
        if !c.is_whitespace() {
            break;
        }
        if c == '\n' {
            crossed_newline = true;
        }
        cursor.advance(false);
    }

    if !crossed_newline {
        return None;
    }
    if cursor.lookahead().is_some_and(continues_statement) {
        return None;
    }

    cursor.mark_end();
    Some(TokenKind::AutomaticSemicolon)
}
