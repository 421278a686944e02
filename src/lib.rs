#![forbid(unsafe_code)]
//! Scanner extension for the Atom language grammar.
//!
//! Most of Atom's tokens are declared in the grammar and recognized by the
//! generated, table-driven lexer. Four token kinds cannot be expressed that
//! way because their validity depends on surrounding lexical context, and
//! this crate recognizes them by hand:
//!
//! - `string-fragment` — literal text inside a string literal, ending before
//!   the closing quote or a `\(` escape
//! - `interpolation-start` — the `\(` sequence opening an embedded expression
//! - `automatic-semicolon` — implicit statement terminator inserted at line
//!   breaks outside a continued expression
//! - `static-array-size-identifier` — an identifier bound to the preceding
//!   token with no intervening whitespace
//!
//! The host parser drives the scanner through [`Scanner::scan`], lending it a
//! [`Cursor`] into the source text together with the set of kinds the grammar
//! would accept at the current position. The scanner holds no state across
//! calls; every scan is a pure function of cursor position and valid-symbols
//! set.
//!
//! ## Examples
//! ```rust
//! use atom_scanner::{Scanner, SourceCursor, TokenKind, ValidSymbols};
//!
//! let mut scanner = Scanner::new();
//! let mut cursor = SourceCursor::new("hello\\(name)\"");
//! let token = scanner.scan(&mut cursor, ValidSymbols::only(TokenKind::StringFragment));
//! assert_eq!(token, Some(TokenKind::StringFragment));
//! assert_eq!(cursor.marked_end(), 5);
//! ```

pub mod cli;
pub mod scanner;

pub use scanner::{Cursor, Scanner, SourceCursor, TokenKind, ValidSymbols};
