//! Hand-written recognition of Atom's context-sensitive tokens.
//!
//! The parser calls [`Scanner::scan`] at positions where the grammar offers
//! one of the externally scanned token kinds, passing the set of kinds it is
//! willing to accept. Each kind has its own recognition routine; a fixed
//! priority order keeps the outcome deterministic at positions where several
//! kinds are requested at once.
//!
//! ## Module Structure
//!
//! - `tokens` - External token vocabulary (TokenKind, ValidSymbols)
//! - `cursor` - Lexer-handle contract and a reference cursor over `&str`
//! - `strings` - String-fragment and interpolation-start recognition
//! - `terminator` - Automatic statement terminator at line breaks
//! - `identifier` - Whitespace-sensitive adjacent identifier

pub mod cursor;
mod identifier;
mod strings;
mod terminator;
pub mod tokens;

pub use cursor::{Cursor, SourceCursor};
pub use tokens::{TokenKind, ValidSymbols};

/// Session handle for the external scanner.
///
/// The scanner keeps no state between calls, so the session operations the
/// host contract requires (`reset`, `serialize`, `deserialize`) are trivial
/// and the handle itself is zero-sized. Creation is [`Scanner::new`];
/// destruction is `Drop`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Scanner;

impl Scanner {
    /// Create a scanner session.
    pub fn new() -> Self {
        Scanner
    }

    /// Clear transient state between speculative parse attempts. There is
    /// none.
    pub fn reset(&mut self) {}

    /// Write persisted session state into `buffer`, returning the number of
    /// bytes written — always 0.
    pub fn serialize(&self, _buffer: &mut [u8]) -> usize {
        0
    }

    /// Restore session state written by [`serialize`](Scanner::serialize).
    /// Nothing to restore.
    pub fn deserialize(&mut self, _buffer: &[u8]) {}

    /// Attempt to recognize one of the requested token kinds at the cursor.
    ///
    /// Returns the recognized kind with its end boundary committed through
    /// [`Cursor::mark_end`], or `None` to signal the parser to try other
    /// productions. Rules are tried in fixed priority order: adjacent
    /// identifier, automatic terminator, string fragment, interpolation
    /// start.
    #[tracing::instrument(level = "trace", skip(self, cursor), ret)]
    pub fn scan<C: Cursor>(&mut self, cursor: &mut C, valid: ValidSymbols) -> Option<TokenKind> {
        if valid.contains(TokenKind::StaticArraySizeIdentifier) {
            if let Some(token) = identifier::scan_size_identifier(cursor) {
                return Some(token);
            }
            // The probe consumes nothing when it declines, so the rules
            // below still see the original lookahead.
        }

        // Once entered, the whitespace and string-content scans may consume
        // input; their outcome is final even when they decline.
        if valid.contains(TokenKind::AutomaticSemicolon) {
            return terminator::scan_automatic_semicolon(cursor);
        }
        if valid.contains(TokenKind::StringFragment) {
            return strings::scan_string_fragment(cursor);
        }
        if valid.contains(TokenKind::InterpolationStart) {
            return strings::scan_interpolation_start(cursor);
        }

        None
    }
}
