//! String-content scanning: literal fragments and the `\(` interpolation
//! opener.

use super::cursor::Cursor;
use super::tokens::TokenKind;

const QUOTE: char = '"';
const ESCAPE: char = '\\';
const INTERPOLATION_OPEN: char = '(';

// ============================================================================
// Fragment scanning
// ============================================================================

/// Consume literal string content up to a closing quote, end of input, or a
/// `\(` escape.
///
/// Declines when no content was accumulated, so the grammar emits no
/// fragment between back-to-back interpolations. A `\(` sequence is left
/// unconsumed beyond the committed boundary for the interpolation rule to
/// claim on the next call.
pub(super) fn scan_string_fragment<C: Cursor>(cursor: &mut C) -> Option<TokenKind> {
    let mut has_content = false;

    loop {
        match cursor.lookahead() {
            None | Some(QUOTE) => {
                return has_content.then_some(TokenKind::StringFragment);
            }
            Some(ESCAPE) => {
                // Commit up to the backslash before looking past it: if an
                // interpolation follows, the fragment ends here.
                cursor.mark_end();
                cursor.advance(false);
                if cursor.lookahead() == Some(INTERPOLATION_OPEN) {
                    return has_content.then_some(TokenKind::StringFragment);
                }
                // Ordinary escape: the next character is literal content.
                if cursor.lookahead().is_some() {
                    cursor.advance(false);
                    has_content = true;
                }
            }
            Some(_) => {
                cursor.advance(false);
                has_content = true;
            }
        }
        cursor.mark_end();
    }
}

// ============================================================================
// Interpolation opener
// ============================================================================

/// Recognize the two-character `\(` sequence opening an embedded expression.
///
/// On a mismatch after the backslash the scan declines without committing an
/// end boundary. The consumed backslash is not rolled back in-source; the
/// host only observes committed boundaries, so the attempt leaves no trace
/// in the token stream.
pub(super) fn scan_interpolation_start<C: Cursor>(cursor: &mut C) -> Option<TokenKind> {
    if cursor.lookahead() != Some(ESCAPE) {
        return None;
    }
    cursor.advance(false);
    if cursor.lookahead() != Some(INTERPOLATION_OPEN) {
        return None;
    }
    cursor.advance(false);
    cursor.mark_end();
    Some(TokenKind::InterpolationStart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::cursor::SourceCursor;

    fn fragment(source: &str) -> (Option<TokenKind>, usize) {
        let mut cursor = SourceCursor::new(source);
        let token = scan_string_fragment(&mut cursor);
        (token, cursor.marked_end())
    }

    #[test]
    fn declines_at_immediate_closing_quote() {
        assert_eq!(fragment("\"rest"), (None, 0));
    }

    #[test]
    fn declines_at_end_of_input() {
        assert_eq!(fragment(""), (None, 0));
    }

    #[test]
    fn declines_at_immediate_interpolation() {
        // Back-to-back interpolations leave nothing between them.
        assert_eq!(fragment("\\(a)"), (None, 0));
    }

    #[test]
    fn runs_to_closing_quote() {
        let (token, end) = fragment("abc\"tail");
        assert_eq!(token, Some(TokenKind::StringFragment));
        assert_eq!(end, 3);
    }

    #[test]
    fn runs_to_end_of_input() {
        let (token, end) = fragment("abc");
        assert_eq!(token, Some(TokenKind::StringFragment));
        assert_eq!(end, 3);
    }

    #[test]
    fn stops_before_interpolation() {
        let (token, end) = fragment("hello\\(world)\"");
        assert_eq!(token, Some(TokenKind::StringFragment));
        assert_eq!(end, 5);
    }

    #[test]
    fn ordinary_escape_counts_as_content() {
        let (token, end) = fragment("\\n\"");
        assert_eq!(token, Some(TokenKind::StringFragment));
        assert_eq!(end, 2);
    }

    #[test]
    fn escaped_quote_does_not_terminate() {
        let (token, end) = fragment("\\\"more\"");
        assert_eq!(token, Some(TokenKind::StringFragment));
        assert_eq!(end, 6);
    }

    #[test]
    fn lone_trailing_backslash_declines() {
        let (token, _) = fragment("\\");
        assert_eq!(token, None);
    }

    #[test]
    fn multibyte_content_is_spanned_in_bytes() {
        let (token, end) = fragment("héllo\"");
        assert_eq!(token, Some(TokenKind::StringFragment));
        assert_eq!(end, "héllo".len());
    }

    #[test]
    fn interpolation_start_spans_exactly_two_chars() {
        let mut cursor = SourceCursor::new("\\(b");
        let token = scan_interpolation_start(&mut cursor);
        assert_eq!(token, Some(TokenKind::InterpolationStart));
        assert_eq!(cursor.marked_end(), 2);
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.lookahead(), Some('b'));
    }

    #[test]
    fn interpolation_mismatch_commits_nothing() {
        let mut cursor = SourceCursor::new("\\n");
        assert_eq!(scan_interpolation_start(&mut cursor), None);
        // The backslash was consumed from lookahead, but no boundary was
        // committed, so the attempt is invisible to the host.
        assert_eq!(cursor.marked_end(), 0);
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn interpolation_requires_leading_backslash() {
        let mut cursor = SourceCursor::new("(b");
        assert_eq!(scan_interpolation_start(&mut cursor), None);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn interpolation_declines_at_end_of_input() {
        let mut cursor = SourceCursor::new("\\");
        assert_eq!(scan_interpolation_start(&mut cursor), None);
        assert_eq!(cursor.marked_end(), 0);
    }
}
