use std::iter::FusedIterator;

use super::cursor::{is_symbol_char, Cursor};
use super::token::{Token, TokenKind};
use crate::error::{Error, LexErrorKind, Result};

/// Scanner states.
///
/// Each state consumes some input, hands over at most one token and names the
/// state to run next. Nesting depth is never stored: every `[` re-enters
/// `InsideList`, and every `]` lands in `AfterList`, which serves all depths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Very first character: `[` or end of input
    Start,
    /// After `[` or `,`: a value or `]`
    InsideList,
    /// At the first character of a symbol
    Symbol,
    /// After a symbol: `,` or `]`
    AfterSymbol,
    /// After `]`: `,`, another `]`, or end of input
    AfterList,
}

impl State {
    fn run(self, scanner: &mut Scanner<'_>) -> Option<State> {
        match self {
            State::Start => scanner.lex_start(),
            State::InsideList => scanner.lex_inside_list(),
            State::Symbol => scanner.lex_symbol(),
            State::AfterSymbol => scanner.lex_after_symbol(),
            State::AfterList => scanner.lex_after_list(),
        }
    }
}

/// State-machine scanner for bracketed symbol lists.
///
/// The scanner is also the token stream: it implements [`Iterator`], running
/// states lazily until the next token is ready. The stream ends right after
/// the first [`TokenKind::EndOfInput`] or [`TokenKind::Error`] token.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    /// Used only for diagnostics
    name: &'a str,
    cursor: Cursor<'a>,
    /// `None` once a terminal token has been produced
    state: Option<State>,
    pending: Option<Token>,
    failure: Option<(LexErrorKind, usize)>,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner for `input`; `name` only appears in diagnostics.
    pub fn new(name: &'a str, input: &'a str) -> Self {
        tracing::debug!(name = name, len = input.len(), "starting scan");
        Scanner {
            name,
            cursor: Cursor::new(input),
            state: Some(State::Start),
            pending: None,
            failure: None,
        }
    }

    /// Diagnostic name of this scan
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Current cursor position and pending lexeme
    pub fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    /// State that runs on the next pull, `None` once finished
    pub fn state(&self) -> Option<State> {
        self.state
    }

    /// Failure reason and offset, once an error token has been produced
    pub fn failure(&self) -> Option<(LexErrorKind, usize)> {
        self.failure
    }

    /// Runs states until one token is produced.
    pub fn next_token(&mut self) -> Option<Token> {
        while self.pending.is_none() {
            let state = self.state?;
            self.state = state.run(self);
        }
        self.pending.take()
    }

    /// Scans all tokens and returns them as a vector ending in `EndOfInput`.
    ///
    /// A failed scan is reported as [`Error::Lex`] instead of an error token.
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }

        match self.failure {
            Some((kind, offset)) => Err(Error::lex(self.name, offset, kind)),
            None => Ok(tokens),
        }
    }

    fn emit(&mut self, kind: TokenKind) {
        let (text, offset) = self.cursor.take_lexeme();
        tracing::trace!(name = self.name, ?kind, offset, "token");
        self.pending = Some(Token::new(kind, text, offset));
    }

    fn emit_end(&mut self) -> Option<State> {
        self.emit(TokenKind::EndOfInput);
        tracing::debug!(name = self.name, "scan finished");
        None
    }

    fn fail(&mut self, kind: LexErrorKind) -> Option<State> {
        let offset = self.cursor.last_offset();
        tracing::debug!(name = self.name, %kind, offset, "scan failed");
        self.failure = Some((kind, offset));
        self.pending = Some(Token::new(TokenKind::Error, kind.to_string(), offset));
        None
    }

    fn lex_start(&mut self) -> Option<State> {
        match self.cursor.read() {
            Some('[') => {
                self.emit(TokenKind::LeftBracket);
                Some(State::InsideList)
            }
            None => self.emit_end(),
            Some(_) => self.fail(LexErrorKind::UnexpectedInitialSymbol),
        }
    }

    fn lex_inside_list(&mut self) -> Option<State> {
        self.cursor.skip_whitespace();
        match self.cursor.read() {
            Some(c) if is_symbol_char(c) => {
                self.cursor.backup();
                Some(State::Symbol)
            }
            Some('[') => {
                self.emit(TokenKind::LeftBracket);
                Some(State::InsideList)
            }
            Some(']') => {
                self.emit(TokenKind::RightBracket);
                Some(State::AfterList)
            }
            None => self.fail(LexErrorKind::UnclosedList),
            Some(_) => self.fail(LexErrorKind::UnexpectedRune),
        }
    }

    fn lex_symbol(&mut self) -> Option<State> {
        self.cursor.consume_run(is_symbol_char);
        // Entry from InsideList guarantees at least one symbol character
        if self.cursor.position() > self.cursor.start() {
            self.emit(TokenKind::Symbol);
        }
        Some(State::AfterSymbol)
    }

    fn lex_after_symbol(&mut self) -> Option<State> {
        self.cursor.skip_whitespace();
        match self.cursor.read() {
            Some(',') => {
                self.emit(TokenKind::Comma);
                Some(State::InsideList)
            }
            Some(']') => {
                self.emit(TokenKind::RightBracket);
                Some(State::AfterList)
            }
            None => self.fail(LexErrorKind::UnclosedList),
            Some(_) => self.fail(LexErrorKind::UnexpectedRune),
        }
    }

    fn lex_after_list(&mut self) -> Option<State> {
        self.cursor.skip_whitespace();
        match self.cursor.read() {
            Some(',') => {
                self.emit(TokenKind::Comma);
                Some(State::InsideList)
            }
            Some(']') => {
                self.emit(TokenKind::RightBracket);
                Some(State::AfterList)
            }
            None => self.emit_end(),
            Some(_) => self.fail(LexErrorKind::UnexpectedRune),
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

impl FusedIterator for Scanner<'_> {}
