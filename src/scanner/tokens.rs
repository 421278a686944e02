//! External token vocabulary shared with the host parser.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// ============================================================================
// TOKEN KINDS
// ============================================================================

/// Token kinds recognized by the hand-written scanner, in the order the
/// grammar declares them. The discriminant doubles as the flag index in
/// [`ValidSymbols`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Literal text inside a string literal, between escape boundaries.
    StringFragment,
    /// The `\(` escape opening an embedded expression.
    InterpolationStart,
    /// Implicit statement terminator inserted at a line break.
    AutomaticSemicolon,
    /// Size identifier bound tightly to the preceding token.
    StaticArraySizeIdentifier,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 4] = [
        TokenKind::StringFragment,
        TokenKind::InterpolationStart,
        TokenKind::AutomaticSemicolon,
        TokenKind::StaticArraySizeIdentifier,
    ];

    /// Flag index of this kind in the host's valid-symbols array.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Kebab-case name, as accepted on the `atom-scan` command line.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::StringFragment => "string-fragment",
            TokenKind::InterpolationStart => "interpolation-start",
            TokenKind::AutomaticSemicolon => "automatic-semicolon",
            TokenKind::StaticArraySizeIdentifier => "static-array-size-identifier",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for [`TokenKind::from_str`] on an unrecognized name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "unknown token kind '{0}' (expected string-fragment, interpolation-start, \
     automatic-semicolon, or static-array-size-identifier)"
)]
pub struct UnknownTokenKind(pub String);

impl FromStr for TokenKind {
    type Err = UnknownTokenKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownTokenKind(s.to_string()))
    }
}

// ============================================================================
// VALID-SYMBOLS SET
// ============================================================================

/// The set of token kinds the parser is willing to accept at the current
/// position.
///
/// Read-only input to every scan call. Flag order matches
/// [`TokenKind::ALL`].
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidSymbols {
    flags: [bool; TokenKind::ALL.len()],
}

impl ValidSymbols {
    /// The empty set; every scan declines immediately.
    pub fn none() -> Self {
        Self::default()
    }

    /// The set containing every declared kind.
    pub fn all() -> Self {
        Self {
            flags: [true; TokenKind::ALL.len()],
        }
    }

    /// The set containing a single kind.
    pub fn only(kind: TokenKind) -> Self {
        Self::none().with(kind)
    }

    /// Builder-style insertion.
    pub fn with(mut self, kind: TokenKind) -> Self {
        self.flags[kind.index()] = true;
        self
    }

    /// Whether the parser accepts `kind` here.
    pub fn contains(self, kind: TokenKind) -> bool {
        self.flags[kind.index()]
    }

    /// Build from the host's raw flag array, indexed by declaration order.
    pub fn from_flags(flags: [bool; TokenKind::ALL.len()]) -> Self {
        Self { flags }
    }

    /// True when no kind is requested.
    pub fn is_empty(self) -> bool {
        !self.flags.contains(&true)
    }
}

impl FromIterator<TokenKind> for ValidSymbols {
    fn from_iter<I: IntoIterator<Item = TokenKind>>(iter: I) -> Self {
        iter.into_iter().fold(Self::none(), Self::with)
    }
}

impl fmt::Debug for ValidSymbols {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        for kind in TokenKind::ALL {
            if self.contains(kind) {
                set.entry(&kind.name());
            }
        }
        set.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_order_matches_flag_index() {
        for (index, kind) in TokenKind::ALL.into_iter().enumerate() {
            assert_eq!(kind.index(), index);
        }
    }

    #[test]
    fn names_round_trip() {
        for kind in TokenKind::ALL {
            assert_eq!(kind.name().parse::<TokenKind>(), Ok(kind));
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let error = "semicolon".parse::<TokenKind>().unwrap_err();
        assert!(error.to_string().contains("semicolon"));
    }

    #[test]
    fn set_membership() {
        let valid = ValidSymbols::only(TokenKind::StringFragment)
            .with(TokenKind::AutomaticSemicolon);
        assert!(valid.contains(TokenKind::StringFragment));
        assert!(valid.contains(TokenKind::AutomaticSemicolon));
        assert!(!valid.contains(TokenKind::InterpolationStart));
        assert!(!valid.is_empty());
        assert!(ValidSymbols::none().is_empty());
    }

    #[test]
    fn host_flag_array_round_trips() {
        let valid = ValidSymbols::from_flags([true, false, true, false]);
        assert!(valid.contains(TokenKind::StringFragment));
        assert!(!valid.contains(TokenKind::InterpolationStart));
        assert!(valid.contains(TokenKind::AutomaticSemicolon));
        assert!(!valid.contains(TokenKind::StaticArraySizeIdentifier));
    }

    #[test]
    fn collects_from_kind_iterator() {
        let valid: ValidSymbols = [TokenKind::InterpolationStart].into_iter().collect();
        assert!(valid.contains(TokenKind::InterpolationStart));
        assert!(!valid.contains(TokenKind::StringFragment));
    }
}
