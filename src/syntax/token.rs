//! Token types produced by the lexer.
//!
//! A token never owns text: it points back into the source buffer through
//! its `Span`, except for `Error` tokens which carry a static message.

// ─── TokenKind ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    LeftBrace,   // {
    RightBrace,  // }
    Equal,       // =
    Newline,     // \n
    Arrow,       // ->
    DoubleArrow, // <->
    Identifier,
    String,
    Error,
    Eof,
}

impl TokenKind {
    /// True for `->` and `<->`.
    pub fn is_arrow(self) -> bool {
        matches!(self, TokenKind::Arrow | TokenKind::DoubleArrow)
    }
}

// ─── Span ────────────────────────────────────────────────────────────────────

/// Byte range into the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub len: usize,
}

impl Span {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

// ─── Token ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub line: usize,
    /// Set only on `TokenKind::Error`.
    pub message: Option<&'static str>,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span, line: usize) -> Self {
        Self {
            kind,
            span,
            line,
            message: None,
        }
    }

    pub fn error(message: &'static str, span: Span, line: usize) -> Self {
        Self {
            kind: TokenKind::Error,
            span,
            line,
            message: Some(message),
        }
    }

    /// The source text this token covers. String tokens exclude their quotes.
    pub fn lexeme<'src>(&self, src: &'src str) -> &'src str {
        src.get(self.span.start..self.span.end()).unwrap_or("")
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
