//! Error types for the list lexer

use thiserror::Error;

/// Reason a scan stopped early.
///
/// The `Display` text of each variant is exactly the message carried by the
/// terminal [`TokenKind::Error`](crate::TokenKind::Error) token.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// The first character is neither `[` nor end of input
    ///
    /// **Example:** `a ]`
    #[error("unexpected initial symbol")]
    UnexpectedInitialSymbol,

    /// End of input reached while a list is still open
    ///
    /// **Example:** `[a, b`
    #[error("unclosed list")]
    UnclosedList,

    /// A character appeared where only a value, separator or closer was valid
    ///
    /// **Example:** `[a; b]`
    #[error("unexpected rune")]
    UnexpectedRune,
}

/// Lexer errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input was rejected by the scanner
    #[error("{name}: {kind} at offset {offset}")]
    Lex {
        /// Diagnostic name given to the scan
        name: String,
        /// Byte offset of the offending character (input length at end of input)
        offset: usize,
        /// What went wrong
        kind: LexErrorKind,
    },

    /// The background scanning thread could not be started
    #[error("failed to spawn lexer thread for {name}: {message}")]
    Spawn {
        /// Diagnostic name given to the scan
        name: String,
        /// OS error text
        message: String,
    },

    /// The background scanning thread panicked before finishing
    #[error("lexer thread for {name} panicked")]
    ProducerPanicked {
        /// Diagnostic name given to the scan
        name: String,
    },
}

impl Error {
    /// Create a lex error
    pub fn lex(name: impl Into<String>, offset: usize, kind: LexErrorKind) -> Self {
        Error::Lex {
            name: name.into(),
            offset,
            kind,
        }
    }

    /// The scan failure behind this error, if any
    pub fn kind(&self) -> Option<LexErrorKind> {
        match self {
            Error::Lex { kind, .. } => Some(*kind),
            Error::Spawn { .. } | Error::ProducerPanicked { .. } => None,
        }
    }
}

/// Result type for lexer operations
pub type Result<T> = std::result::Result<T, Error>;
