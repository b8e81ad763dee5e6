//! Parser entry point: run the interpreter over a whole document.

pub mod interpreter;
pub mod symbols;

pub use interpreter::{Interpretation, Interpreter};
pub use symbols::SymbolTable;

/// Interpret a document, collecting every diagnostic instead of stopping at
/// the first one.
pub fn interpret(src: &str) -> Interpretation {
    let result = Interpreter::new(src).run();
    tracing::debug!(
        nodes = result.graph.len(),
        edges = result.graph.edge_count(),
        symbols = result.symbols.len(),
        errors = result.diagnostics.len(),
        "document interpreted"
    );
    result
}
