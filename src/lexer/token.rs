use serde::{Deserialize, Serialize};

/// Longest lexeme printed in full by `Token`'s `Display` impl
const DISPLAY_LIMIT: usize = 10;

/// A single token from the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Exact lexeme, or the error message for `TokenKind::Error`
    pub text: String,
    /// Byte offset where the lexeme starts
    pub offset: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, text: impl Into<String>, offset: usize) -> Self {
        Token {
            kind,
            text: text.into(),
            offset,
        }
    }

    /// True once this token ends the stream
    pub fn is_terminal(&self) -> bool {
        self.kind.is_terminal()
    }
}

/// All possible token types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Left bracket [
    LeftBracket,
    /// Right bracket ]
    RightBracket,
    /// Comma delimiter
    Comma,
    /// Run of ASCII letters and digits
    Symbol,
    /// End of input marker
    EndOfInput,
    /// Scan failure; the token text is the message
    Error,
}

impl TokenKind {
    /// Check if no token can follow this one
    pub fn is_terminal(&self) -> bool {
        matches!(self, TokenKind::EndOfInput | TokenKind::Error)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            TokenKind::LeftBracket => "'['",
            TokenKind::RightBracket => "']'",
            TokenKind::Comma => "','",
            TokenKind::Symbol => "symbol",
            TokenKind::EndOfInput => "end of input",
            TokenKind::Error => "error",
        };
        f.write_str(name)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => write!(f, "EOF"),
            TokenKind::Error => write!(f, "{}", self.text),
            _ if self.text.chars().count() > DISPLAY_LIMIT => {
                let head: String = self.text.chars().take(DISPLAY_LIMIT).collect();
                write!(f, "{:?}...", head)
            }
            _ => write!(f, "{:?}", self.text),
        }
    }
}
