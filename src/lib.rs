//! logos: a small diagram language compiled to tree-laid-out SVG.
//!
//! Pipeline: source → lexer → interpreter (graph + symbols) → layout → SVG.
//!
//! ```text
//! { "Family" }
//! r = "Root"
//! c = "Child"
//! r -> c
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod layout;
pub mod parsers;
pub mod renderers;
pub mod syntax;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::RenderConfig;
pub use error::{Diagnostic, Error, Result};
pub use graph::Graph;

/// A rendered diagram together with the file name derived from its title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub file_name: String,
    pub svg: String,
}

/// Interpret `src` into a graph, failing if any diagnostic was reported.
pub fn compile(src: &str) -> Result<Graph> {
    let result = parsers::interpret(src);
    if result.had_error() {
        return Err(Error::Parse(result.diagnostics));
    }
    Ok(result.graph)
}

/// Compile, lay out and render `src` in one step.
pub fn render_source(src: &str, config: &RenderConfig) -> Result<Document> {
    let mut graph = compile(src)?;
    let laid_out = layout::layout(&mut graph);
    Ok(Document {
        file_name: renderers::output_file_name(graph.title()),
        svg: renderers::render(&laid_out, config),
    })
}
