//! Character cursor over the input string.
//!
//! The cursor tracks two offsets: `start`, the beginning of the lexeme being
//! scanned, and `pos`, the next byte to read. Characters are decoded as UTF-8,
//! so the width of the last character read is remembered to step back over it.
//!
//! Only one step back is possible per read. `backup` clears the remembered
//! width, so a second `backup` without an intervening `read` leaves the cursor
//! where it is instead of walking back over the wrong number of bytes.

/// Returns `true` for characters allowed in a symbol (ASCII letters and digits).
#[inline]
pub fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Returns `true` for insignificant whitespace between tokens.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Cursor over a borrowed input string
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    start: usize,
    pos: usize,
    width: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the beginning of `source`
    pub fn new(source: &'a str) -> Self {
        Cursor {
            source,
            start: 0,
            pos: 0,
            width: 0,
        }
    }

    /// The full input
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Offset where the pending lexeme begins
    pub fn start(&self) -> usize {
        self.start
    }

    /// Offset of the next character to read
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Text consumed since the last `ignore` or `take_lexeme`
    pub fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.pos]
    }

    /// True when every character has been consumed
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Consumes the next character; `None` at end of input.
    pub fn read(&mut self) -> Option<char> {
        match self.source[self.pos..].chars().next() {
            Some(c) => {
                self.width = c.len_utf8();
                self.pos += self.width;
                Some(c)
            }
            None => {
                self.width = 0;
                None
            }
        }
    }

    /// Steps back over the character returned by the last `read`.
    pub fn backup(&mut self) {
        self.pos -= self.width;
        self.width = 0;
    }

    /// Returns the next character without consuming it.
    pub fn peek(&mut self) -> Option<char> {
        let c = self.read();
        self.backup();
        c
    }

    /// Offset of the character returned by the last `read`, or the end of
    /// input if that read hit the end.
    pub fn last_offset(&self) -> usize {
        self.pos - self.width
    }

    /// Drops the pending lexeme without producing a token.
    pub fn ignore(&mut self) {
        self.start = self.pos;
    }

    /// Returns the pending lexeme and its start offset, then starts a new one.
    pub fn take_lexeme(&mut self) -> (&'a str, usize) {
        let lexeme = (self.lexeme(), self.start);
        self.start = self.pos;
        lexeme
    }

    /// Consumes the next character if `accept` matches it.
    pub fn try_consume(&mut self, accept: fn(char) -> bool) -> bool {
        match self.read() {
            Some(c) if accept(c) => true,
            _ => {
                self.backup();
                false
            }
        }
    }

    /// Consumes characters while `accept` matches, stopping just after the last match.
    pub fn consume_run(&mut self, accept: fn(char) -> bool) {
        while self.try_consume(accept) {}
    }

    /// Consumes and discards a run of whitespace.
    pub fn skip_whitespace(&mut self) {
        self.consume_run(is_whitespace);
        self.ignore();
    }
}
