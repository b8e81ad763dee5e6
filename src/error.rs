//! Error types shared by the interpreter, the library API and the CLI.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::syntax::{Token, TokenKind};

// ─── Location ────────────────────────────────────────────────────────────────

/// Where on its line a diagnostic points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// At the offending lexeme.
    At(String),
    /// At end of input.
    End,
    /// At a newline token.
    LineEnd,
    /// Lexical errors carry no lexeme.
    Lexical,
}

impl Location {
    pub fn of(token: &Token, src: &str) -> Self {
        match token.kind {
            TokenKind::Eof => Location::End,
            TokenKind::Newline => Location::LineEnd,
            TokenKind::Error => Location::Lexical,
            _ => Location::At(token.lexeme(src).to_string()),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::At(lexeme) => write!(f, " at '{lexeme}'"),
            Location::End => write!(f, " at end"),
            Location::LineEnd => write!(f, " at end of line"),
            Location::Lexical => Ok(()),
        }
    }
}

// ─── Diagnostic ──────────────────────────────────────────────────────────────

/// One line-tagged error reported while interpreting a document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("[line {line}] Error{location}: {message}")]
pub struct Diagnostic {
    pub line: usize,
    pub location: Location,
    pub message: String,
}

impl Diagnostic {
    pub fn new(line: usize, location: Location, message: impl Into<String>) -> Self {
        Self {
            line,
            location,
            message: message.into(),
        }
    }
}

// ─── Error ───────────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("document has {} error(s)", .0.len())]
    Parse(Vec<Diagnostic>),

    #[error("could not open file \"{}\"", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write file \"{}\"", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

// ─── Tests ───────────────────────────────────────────────────────────────────
