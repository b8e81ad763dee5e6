//! Recursive-descent interpreter for the diagram language.
//!
//! Statements are executed as soon as they are recognised: assignments bind
//! symbols, arrows create nodes and edges. There is no AST. Errors put the
//! interpreter into panic mode, which silences further reports until it
//! resynchronises at the next line.

use crate::error::{Diagnostic, Location};
use crate::graph::Graph;
use crate::syntax::lexer::UNEXPECTED_CHARACTER;
use crate::syntax::{Lexer, Span, Token, TokenKind};

use super::symbols::SymbolTable;

pub const EXPECTED_STATEMENT: &str = "Expected either assignment or arrow to node.";
pub const EXPECTED_STRING: &str = "Expected string.";
pub const EXPECTED_IDENTIFIER: &str = "Expected identifier.";
pub const EXPECTED_VALUE: &str = "Expected string or identifier.";
pub const UNDEFINED_VARIABLE: &str = "Undefined variable.";
pub const ASSIGN_TO_LITERAL: &str = "Cannot assign to literal.";
pub const ASSIGN_IDENT_IN_EDGE: &str = "Cannot assign to identifier while adding edge.";

// ─── Interpretation ──────────────────────────────────────────────────────────

/// Everything a run over one document produced.
#[derive(Debug, Clone)]
pub struct Interpretation {
    pub graph: Graph,
    pub symbols: SymbolTable,
    pub diagnostics: Vec<Diagnostic>,
}

impl Interpretation {
    pub fn had_error(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

// ─── Interpreter ─────────────────────────────────────────────────────────────

pub struct Interpreter<'src> {
    src: &'src str,
    lexer: Lexer<'src>,
    current: Token,
    next: Token,
    symbols: SymbolTable,
    graph: Graph,
    diagnostics: Vec<Diagnostic>,
    had_error: bool,
    panic_mode: bool,
    /// Endpoints created before their name was bound, with the token of the
    /// first reference. Checked once the whole document has been read.
    unresolved: Vec<(String, Token)>,
}

impl<'src> Interpreter<'src> {
    pub fn new(src: &'src str) -> Self {
        let placeholder = Token::new(TokenKind::Eof, Span::default(), 1);
        let mut interpreter = Self {
            src,
            lexer: Lexer::new(src),
            current: placeholder,
            next: placeholder,
            symbols: SymbolTable::new(),
            graph: Graph::new(),
            diagnostics: Vec::new(),
            had_error: false,
            panic_mode: false,
            unresolved: Vec::new(),
        };
        interpreter.advance();
        interpreter.advance();
        interpreter
    }

    /// Run every statement and hand back the graph, symbols and diagnostics.
    pub fn run(mut self) -> Interpretation {
        self.skip_newlines();
        while !self.check(TokenKind::Eof) {
            // A lexical error at the start of the line already opened its episode.
            if !self.panic_mode {
                self.statement();
            }
            if self.panic_mode {
                self.synchronize();
            }
            self.skip_newlines();
        }
        self.resolve_forward_references();

        if self.had_error {
            self.diagnostics.sort_by_key(|d| d.line);
        }
        Interpretation {
            graph: self.graph,
            symbols: self.symbols,
            diagnostics: self.diagnostics,
        }
    }

    // ── Token stream ─────────────────────────────────────────────────────────

    /// Shift the lookahead into `current`. Error tokens are reported once they
    /// reach `current` and then skipped, so they belong to the line being
    /// parsed rather than the one before it.
    fn advance(&mut self) {
        loop {
            self.current = self.next;
            self.next = self.lexer.next_token();
            if self.current.kind != TokenKind::Error {
                break;
            }
            let message = self.current.message.unwrap_or(UNEXPECTED_CHARACTER);
            self.error_at(self.current, message);
        }
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    fn check_next(&self, kind: TokenKind) -> bool {
        self.next.kind == kind
    }

    fn text(&self, token: Token) -> &'src str {
        token.lexeme(self.src)
    }

    /// Crossing a newline ends any panic episode.
    fn skip_newlines(&mut self) {
        while self.check(TokenKind::Newline) {
            self.panic_mode = false;
            self.advance();
        }
    }

    // ── Errors ───────────────────────────────────────────────────────────────

    fn error_at(&mut self, token: Token, message: &str) {
        if self.panic_mode {
            return;
        }
        self.panic_mode = true;
        self.had_error = true;

        let diagnostic = Diagnostic::new(token.line, Location::of(&token, self.src), message);
        tracing::debug!(line = token.line, "{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    fn error(&mut self, message: &str) {
        self.error_at(self.current, message);
    }

    /// Drop the rest of the offending line, then leave panic mode.
    fn synchronize(&mut self) {
        while !self.check(TokenKind::Newline) && !self.check(TokenKind::Eof) {
            self.advance();
        }
        self.panic_mode = false;
    }

    // ── Statements ───────────────────────────────────────────────────────────

    fn statement(&mut self) {
        match self.current.kind {
            TokenKind::LeftBrace => self.title(),
            TokenKind::Identifier if self.check_next(TokenKind::Equal) => self.assignment(),
            TokenKind::Identifier if self.next.kind.is_arrow() => {
                let source = self.current;
                self.advance();
                self.arrow_chain(source);
            }
            _ => self.error(EXPECTED_STATEMENT),
        }
    }

    /// `{ "title" }`: the closing brace is optional.
    fn title(&mut self) {
        self.advance();
        if !self.check(TokenKind::String) {
            self.error(EXPECTED_STRING);
            return;
        }
        let title = self.text(self.current);
        self.graph.update_title(title);
        self.advance();
        if self.check(TokenKind::RightBrace) {
            self.advance();
        }
    }

    /// `a = b = ... = ("text" | ident) [arrow tail]`
    fn assignment(&mut self) {
        let mut targets = vec![self.current];
        self.advance();
        self.advance();
        while self.check(TokenKind::Identifier) && self.check_next(TokenKind::Equal) {
            targets.push(self.current);
            self.advance();
            self.advance();
        }

        match self.current.kind {
            TokenKind::String => {
                let value = self.text(self.current);
                for target in targets.iter().rev() {
                    self.declare(self.text(*target), value);
                }
                if self.check_next(TokenKind::Equal) {
                    self.error(ASSIGN_TO_LITERAL);
                    return;
                }
                self.advance();
                // The chain continues from the name bound to the string.
                let innermost = targets.last().copied();
                if let Some(innermost) = innermost.filter(|_| self.current.kind.is_arrow()) {
                    self.arrow_chain(innermost);
                }
            }
            TokenKind::Identifier => {
                let source = self.current;
                let Some(value) = self.symbols.get(self.text(source)).map(str::to_string) else {
                    self.error(UNDEFINED_VARIABLE);
                    return;
                };
                for target in targets.iter().rev() {
                    self.declare(self.text(*target), &value);
                }
                self.advance();
                if self.current.kind.is_arrow() {
                    self.arrow_chain(source);
                }
            }
            _ => self.error(EXPECTED_VALUE),
        }
    }

    /// `(-> | <->) ident ['=' "text"]`, repeated. `current` is the first arrow.
    fn arrow_chain(&mut self, source: Token) {
        let mut left = source;
        while self.current.kind.is_arrow() {
            let bidirectional = self.check(TokenKind::DoubleArrow);
            self.advance();
            if !self.check(TokenKind::Identifier) {
                self.error(EXPECTED_IDENTIFIER);
                return;
            }
            let right = self.current;

            if self.check_next(TokenKind::Equal) {
                self.advance();
                self.advance();
                match self.current.kind {
                    TokenKind::String => {
                        let value = self.text(self.current);
                        self.declare(self.text(right), value);
                    }
                    TokenKind::Identifier => {
                        self.error(ASSIGN_IDENT_IN_EDGE);
                        return;
                    }
                    _ => {
                        self.error(EXPECTED_VALUE);
                        return;
                    }
                }
            }

            self.connect(left, right, bidirectional);
            if self.check(TokenKind::String) && self.check_next(TokenKind::Equal) {
                self.error(ASSIGN_TO_LITERAL);
                return;
            }
            self.advance();
            left = right;
        }
    }

    // ── Graph / symbol effects ───────────────────────────────────────────────

    /// Bind a symbol and refresh the text of an existing node of that name.
    fn declare(&mut self, name: &str, value: &str) {
        self.symbols.set(name, value);
        if let Some(node) = self.graph.get_node_mut(name) {
            node.text = value.to_string();
        }
    }

    fn ensure_node(&mut self, token: Token) {
        let name = self.text(token);
        if self.graph.get_node(name).is_some() {
            return;
        }
        let text = match self.symbols.get(name) {
            Some(value) => value.to_string(),
            None => {
                self.unresolved.push((name.to_string(), token));
                String::new()
            }
        };
        self.graph.add_node(name, &text);
    }

    /// Both endpoints exist after `ensure_node`, so `add_edge` always finds
    /// them; never-bound names surface in `resolve_forward_references`.
    fn connect(&mut self, left: Token, right: Token, bidirectional: bool) {
        self.ensure_node(left);
        self.ensure_node(right);
        let (from, to) = (self.text(left), self.text(right));
        self.graph.add_edge(from, to);
        if bidirectional {
            self.graph.add_edge(to, from);
        }
    }

    fn resolve_forward_references(&mut self) {
        for (name, token) in std::mem::take(&mut self.unresolved) {
            if !self.symbols.is_declared(&name) {
                self.panic_mode = false;
                self.error_at(token, UNDEFINED_VARIABLE);
            }
        }
        self.panic_mode = false;
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_interpreter.rs"]
mod tests;
