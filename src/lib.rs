//! # listlex - A lexer for nested symbol lists
//!
//! Tokenizes a minimal notation of nested, comma-separated lists of bare
//! symbols such as `[a, b, [c, d], e]`. Symbols are runs of ASCII letters and
//! digits; whitespace only separates tokens.
//!
//! ## Quick Start
//!
//! ```rust
//! use listlex::{lex, TokenKind};
//!
//! let kinds: Vec<TokenKind> = lex("example", "[a, [b]]").map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::LeftBracket,
//!         TokenKind::Symbol,
//!         TokenKind::Comma,
//!         TokenKind::LeftBracket,
//!         TokenKind::Symbol,
//!         TokenKind::RightBracket,
//!         TokenKind::RightBracket,
//!         TokenKind::EndOfInput,
//!     ]
//! );
//! ```
//!
//! ## Token Protocol
//!
//! A stream always ends with exactly one terminal token:
//!
//! - [`TokenKind::EndOfInput`] after a successful scan
//! - [`TokenKind::Error`] carrying one of the messages `unexpected initial symbol`,
//!   `unclosed list` or `unexpected rune`
//!
//! Nothing follows the terminal token. Malformed input yields the valid prefix
//! followed by the error token; there is no recovery.
//!
//! ```rust
//! use listlex::{lex, Token, TokenKind};
//!
//! let tokens: Vec<Token> = lex("example", "[ a").collect();
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[2].kind, TokenKind::Error);
//! assert_eq!(tokens[2].text, "unclosed list");
//! ```
//!
//! ## Error Handling
//!
//! [`tokenize`] collects the stream and turns a failed scan into an [`Error`]:
//!
//! ```rust
//! use listlex::{tokenize, LexErrorKind};
//!
//! let err = tokenize("config", "[a b]").unwrap_err();
//! assert_eq!(err.kind(), Some(LexErrorKind::UnexpectedRune));
//! assert_eq!(err.to_string(), "config: unexpected rune at offset 3");
//! ```
//!
//! ## Threaded Transport
//!
//! With the default `threaded` feature, [`lex_threaded`] runs the scanner on a
//! background thread and hands tokens over one at a time through a
//! rendezvous channel.
//!
//! ## Logging
//!
//! Scans report through [`tracing`]: `debug` for start, finish and failure,
//! `trace` for every token. No subscriber is installed by this crate.

/// Version of the lexer
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;

// Re-export main types
pub use error::{Error, LexErrorKind, Result};
#[cfg(feature = "threaded")]
pub use lexer::{lex_threaded, LexHandle, TokenStream};
pub use lexer::{Cursor, Scanner, State, Token, TokenKind};

/// Starts lexing `input`.
///
/// The returned [`Scanner`] is both the handle and the token stream: iterate it
/// to pull tokens, or inspect its cursor between pulls. `name` only appears in
/// diagnostics and may be empty.
pub fn lex<'a>(name: &'a str, input: &'a str) -> Scanner<'a> {
    Scanner::new(name, input)
}

/// Scans all of `input` into a vector ending in `EndOfInput`.
pub fn tokenize(name: &str, input: &str) -> Result<Vec<Token>> {
    Scanner::new(name, input).tokenize()
}
