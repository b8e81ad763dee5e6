//! Renderers: turn a `LayoutResult` into an output document.

pub mod svg;

pub use svg::{SvgCanvas, output_file_name, render};
