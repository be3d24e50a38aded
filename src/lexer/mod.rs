//! Lexical analysis for bracketed symbol lists
//!
//! Converts source text into a stream of tokens with a small state machine.

#[cfg(feature = "threaded")]
mod channel;
mod cursor;
mod scanner;
mod token;

#[cfg(feature = "threaded")]
pub use channel::{lex_threaded, LexHandle, TokenStream};
pub use cursor::{is_symbol_char, is_whitespace, Cursor};
pub use scanner::{Scanner, State};
pub use token::{Token, TokenKind};
