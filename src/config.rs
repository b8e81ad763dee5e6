//! Configuration for the SVG rendering step.
//!
//! Colors are passed through to the SVG verbatim, so any CSS color works.

pub const DEFAULT_BACKGROUND_COLOR: &str = "white";
pub const DEFAULT_NODE_COLOR: &str = "white";
pub const DEFAULT_TEXT_SIZE: u32 = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Fill of the whole canvas.
    pub background_color: String,
    /// Fill of every node box.
    pub node_color: String,
    /// Label font size in pixels. The title is drawn at 1.5×.
    pub text_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            node_color: DEFAULT_NODE_COLOR.to_string(),
            text_size: DEFAULT_TEXT_SIZE,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Font size used for the diagram title.
    pub fn title_size(&self) -> f64 {
        f64::from(self.text_size) * 1.5
    }
}
