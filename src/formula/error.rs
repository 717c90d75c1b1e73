//! Error type for chemical formula parsing.
//!
//! Every variant carries the byte offset into the formula text where the
//! problem was detected, together with the offending substring when one
//! exists, so callers can point at the exact location in user input.

use thiserror::Error;

/// Errors that can occur while parsing a chemical formula.
///
/// Parsing is all-or-nothing: any of these aborts the parse and no partial
/// [`Formula`](super::Formula) is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// An opening parenthesis was never closed.
    #[error("unmatched '(' at position {position}")]
    UnmatchedOpen {
        /// Byte offset of the opening parenthesis.
        position: usize,
    },

    /// A closing parenthesis has no matching opening parenthesis.
    #[error("unmatched ')' at position {position}")]
    UnmatchedClose {
        /// Byte offset of the closing parenthesis.
        position: usize,
    },

    /// A numeral appears where no atom or group precedes it.
    #[error("number '{number}' at position {position} does not follow an element or group")]
    DanglingNumber {
        /// The numeral as written.
        number: String,
        /// Byte offset of the first digit.
        position: usize,
    },

    /// A token that is not an uppercase letter followed by lowercase letters.
    #[error("invalid element symbol '{symbol}' at position {position}")]
    InvalidSymbol {
        /// The rejected token.
        symbol: String,
        /// Byte offset of the token.
        position: usize,
    },

    /// A numeral that is not `digits` or `digits.digits`.
    #[error("invalid number '{number}' at position {position}")]
    InvalidNumber {
        /// The rejected numeral.
        number: String,
        /// Byte offset of the first digit.
        position: usize,
    },

    /// A charge suffix that is neither a run of one sign nor a signed integer.
    #[error("invalid charge notation '{suffix}' at position {position}")]
    InvalidCharge {
        /// The complete rejected suffix.
        suffix: String,
        /// Byte offset where the suffix starts.
        position: usize,
    },

    /// A character that has no meaning in the formula grammar.
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        position: usize,
    },

    /// The reserved charge pseudo-symbol was used as an element.
    #[error("symbol '{symbol}' at position {position} is reserved for the charge")]
    ReservedSymbol {
        /// The reserved symbol.
        symbol: String,
        /// Byte offset of the symbol.
        position: usize,
    },
}

impl ParseError {
    /// Returns the byte offset in the formula text where the error was detected.
    pub fn position(&self) -> usize {
        match self {
            Self::UnmatchedOpen { position }
            | Self::UnmatchedClose { position }
            | Self::DanglingNumber { position, .. }
            | Self::InvalidSymbol { position, .. }
            | Self::InvalidNumber { position, .. }
            | Self::InvalidCharge { position, .. }
            | Self::UnexpectedCharacter { position, .. }
            | Self::ReservedSymbol { position, .. } => *position,
        }
    }

    pub(crate) fn dangling_number(number: impl Into<String>, position: usize) -> Self {
        Self::DanglingNumber {
            number: number.into(),
            position,
        }
    }

    pub(crate) fn invalid_symbol(symbol: impl Into<String>, position: usize) -> Self {
        Self::InvalidSymbol {
            symbol: symbol.into(),
            position,
        }
    }

    pub(crate) fn invalid_number(number: impl Into<String>, position: usize) -> Self {
        Self::InvalidNumber {
            number: number.into(),
            position,
        }
    }

    pub(crate) fn invalid_charge(suffix: impl Into<String>, position: usize) -> Self {
        Self::InvalidCharge {
            suffix: suffix.into(),
            position,
        }
    }
}
