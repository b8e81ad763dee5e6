//! WASM bindings for logos.
//!
//! Exposes `render` and `renderWithOptions` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::{Error, RenderConfig};

fn to_js_error(err: Error) -> JsError {
    match err {
        Error::Parse(diagnostics) => {
            let lines: Vec<String> = diagnostics.iter().map(ToString::to_string).collect();
            JsError::new(&lines.join("\n"))
        }
        other => JsError::new(&other.to_string()),
    }
}

/// Render a logos document to SVG with default colors.
#[wasm_bindgen]
pub fn render(src: &str) -> Result<String, JsError> {
    crate::render_source(src, &RenderConfig::default())
        .map(|doc| doc.svg)
        .map_err(to_js_error)
}

/// Render with explicit colors and text size. Empty strings and a zero text
/// size keep the defaults.
#[wasm_bindgen(js_name = "renderWithOptions")]
pub fn render_with_options(
    src: &str,
    background_color: &str,
    node_color: &str,
    text_size: u32,
) -> Result<String, JsError> {
    let mut config = RenderConfig::default();
    if !background_color.is_empty() {
        config.background_color = background_color.to_string();
    }
    if !node_color.is_empty() {
        config.node_color = node_color.to_string();
    }
    if text_size > 0 {
        config.text_size = text_size;
    }
    crate::render_source(src, &config)
        .map(|doc| doc.svg)
        .map_err(to_js_error)
}
