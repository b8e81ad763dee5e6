//! Lexer: turns source text into a stream of tokens.
//!
//! Whitespace and comments are skipped; `\n` is significant and becomes a
//! `Newline` token. The lexer keeps only a cursor and a line counter, so it
//! can be driven one token at a time by the interpreter.

use super::token::{Span, Token, TokenKind};

pub const UNTERMINATED_STRING: &str = "Unterminated string.";
pub const UNEXPECTED_CHARACTER: &str = "Unexpected character.";

// ─── Lexer ───────────────────────────────────────────────────────────────────

pub struct Lexer<'src> {
    src: &'src str,
    bytes: &'src [u8],
    start: usize,
    current: usize,
    line: usize,
    done: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            start: 0,
            current: 0,
            line: 1,
            done: false,
        }
    }

    pub fn source(&self) -> &'src str {
        self.src
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// Scan the next token. Keeps returning `Eof` once the input is exhausted.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        self.start = self.current;

        if self.is_at_end() {
            return self.make_token(TokenKind::Eof);
        }

        let c = self.advance();
        if is_alphanum(c) {
            return self.identifier();
        }

        match c {
            b'{' => self.make_token(TokenKind::LeftBrace),
            b'}' => self.make_token(TokenKind::RightBrace),
            b'=' => self.make_token(TokenKind::Equal),
            b'<' => {
                if self.matches(b'-') && self.matches(b'>') {
                    self.make_token(TokenKind::DoubleArrow)
                } else {
                    self.error_token(UNEXPECTED_CHARACTER)
                }
            }
            b'-' => {
                if self.matches(b'>') {
                    self.make_token(TokenKind::Arrow)
                } else {
                    self.error_token(UNEXPECTED_CHARACTER)
                }
            }
            b'"' | b'\'' => self.string(c),
            b'\n' => {
                let token = self.make_token(TokenKind::Newline);
                self.line += 1;
                token
            }
            _ => {
                if !c.is_ascii() {
                    // Swallow the whole character so spans stay on char boundaries.
                    let width = self.src[self.start..]
                        .chars()
                        .next()
                        .map_or(1, char::len_utf8);
                    self.current = self.start + width;
                }
                self.error_token(UNEXPECTED_CHARACTER)
            }
        }
    }

    // ── Cursor helpers ───────────────────────────────────────────────────────

    fn is_at_end(&self) -> bool {
        self.current >= self.bytes.len()
    }

    fn advance(&mut self) -> u8 {
        let c = self.bytes[self.current];
        self.current += 1;
        c
    }

    fn peek(&self) -> u8 {
        self.bytes.get(self.current).copied().unwrap_or(0)
    }

    fn peek_next(&self) -> u8 {
        self.bytes.get(self.current + 1).copied().unwrap_or(0)
    }

    fn matches(&mut self, expected: u8) -> bool {
        if self.is_at_end() || self.bytes[self.current] != expected {
            return false;
        }
        self.current += 1;
        true
    }

    // ── Token builders ───────────────────────────────────────────────────────

    fn make_token(&self, kind: TokenKind) -> Token {
        let span = if kind == TokenKind::String {
            // Strip the delimiting quotes.
            Span::new(self.start + 1, self.current - self.start - 2)
        } else {
            Span::new(self.start, self.current - self.start)
        };
        Token::new(kind, span, self.line)
    }

    fn error_token(&self, message: &'static str) -> Token {
        Token::error(
            message,
            Span::new(self.start, self.current - self.start),
            self.line,
        )
    }

    // ── Scanners ─────────────────────────────────────────────────────────────

    /// Skip spaces, tabs, carriage returns and comments. Newlines are tokens.
    fn skip_whitespace(&mut self) {
        loop {
            match self.peek() {
                b' ' | b'\r' | b'\t' => {
                    self.current += 1;
                }
                b'/' if self.peek_next() == b'/' => {
                    while self.peek() != b'\n' && !self.is_at_end() {
                        self.current += 1;
                    }
                }
                b'/' if self.peek_next() == b'*' => {
                    self.current += 2;
                    while !(self.peek() == b'*' && self.peek_next() == b'/') && !self.is_at_end() {
                        if self.advance() == b'\n' {
                            self.line += 1;
                        }
                    }
                    if !self.is_at_end() {
                        self.current += 2;
                    }
                }
                _ => return,
            }
        }
    }

    fn identifier(&mut self) -> Token {
        while is_alphanum(self.peek()) {
            self.current += 1;
        }
        self.make_token(TokenKind::Identifier)
    }

    fn string(&mut self, quote: u8) -> Token {
        while self.peek() != quote && !self.is_at_end() {
            if self.peek() == b'\n' {
                return self.error_token(UNTERMINATED_STRING);
            }
            self.current += 1;
        }

        if self.is_at_end() {
            return self.error_token(UNTERMINATED_STRING);
        }

        // Closing quote.
        self.current += 1;
        self.make_token(TokenKind::String)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields every token up to and including the first `Eof`.
    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            self.done = true;
        }
        Some(token)
    }
}

fn is_alphanum(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

// ─── Tests ───────────────────────────────────────────────────────────────────
