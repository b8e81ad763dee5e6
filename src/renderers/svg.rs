//! SVG renderer: an append-only `SvgCanvas` plus the draw step that turns a
//! `LayoutResult` into a document.
//!
//! Coordinates are rounded to whole pixels when written.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::layout::types::BOX_WIDTH;
use crate::layout::{LayoutResult, Point};

// ── Constants ────────────────────────────────────────────────────────────────

const FONT_FAMILY: &str = "sans-serif";
const INK: &str = "black";
const EDGE_STROKE_WIDTH: i64 = 8;
const ARROW_HEAD_LENGTH: f64 = BOX_WIDTH / 10.0;
const ARROW_HEAD_ANGLE: f64 = std::f64::consts::PI / 6.0;
const BOX_STROKE_WIDTH: i64 = 6;
const BOX_RADIUS: i64 = 8;

/// Characters that may not appear in a file name on common platforms.
static ILLEGAL_FILE_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[/\\:*?"<>|\x00-\x1f]"#).expect("file name pattern is valid")
});

// ── Helpers ──────────────────────────────────────────────────────────────────

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\'', "&apos;")
        .replace('"', "&quot;")
}

fn px(v: f64) -> i64 {
    v.round() as i64
}

// ── Styles ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct RectStyle<'a> {
    pub fill: &'a str,
    pub stroke: &'a str,
    pub stroke_width: i64,
    pub radius: i64,
}

#[derive(Debug, Clone, Copy)]
pub struct TextStyle<'a> {
    pub font_family: &'a str,
    pub font_size: f64,
    pub fill: &'a str,
    pub stroke: &'a str,
}

// ── Canvas ───────────────────────────────────────────────────────────────────

/// Accumulates SVG elements in draw order. Later elements paint over
/// earlier ones.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    width: i64,
    height: i64,
    buf: String,
}

impl SvgCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        let (width, height) = (px(width), px(height));
        let buf = format!(
            "<svg width='{width}px' height='{height}px' xmlns='http://www.w3.org/2000/svg' \
             version='1.1' xmlns:xlink='http://www.w3.org/1999/xlink'>\n"
        );
        Self { width, height, buf }
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    /// Cover the whole canvas with `color`.
    pub fn fill_background(&mut self, color: &str) {
        let style = RectStyle {
            fill: color,
            stroke: color,
            stroke_width: 0,
            radius: 0,
        };
        self.rectangle(
            Point::default(),
            self.width as f64,
            self.height as f64,
            &style,
        );
    }

    /// Rectangle with its top-left corner at `origin`.
    pub fn rectangle(&mut self, origin: Point, width: f64, height: f64, style: &RectStyle) {
        self.buf.push_str(&format!(
            "  <rect fill='{}' stroke='{}' stroke-width='{}px' width='{}' height='{}' y='{}' x='{}' ry='{r}' rx='{r}'/>\n",
            escape(style.fill),
            escape(style.stroke),
            style.stroke_width,
            px(width),
            px(height),
            px(origin.y),
            px(origin.x),
            r = style.radius,
        ));
    }

    pub fn line(&mut self, stroke: &str, stroke_width: i64, from: Point, to: Point) {
        self.buf.push_str(&format!(
            "  <line stroke='{}' stroke-width='{stroke_width}px' y2='{}' x2='{}' y1='{}' x1='{}'/>\n",
            escape(stroke),
            px(to.y),
            px(to.x),
            px(from.y),
            px(from.x),
        ));
    }

    /// Line from `from` to `to` with a two-stroke head at `to`. A zero-length
    /// arrow has no direction and gets no head.
    pub fn arrow(&mut self, stroke: &str, stroke_width: i64, head_length: f64, from: Point, to: Point) {
        self.line(stroke, stroke_width, from, to);

        let (x1, y1) = (px(from.x) as f64, px(from.y) as f64);
        let (x2, y2) = (px(to.x) as f64, px(to.y) as f64);
        let (dx, dy) = (x2 - x1, y2 - y1);
        let length = dx.hypot(dy);
        if length == 0.0 {
            return;
        }
        let (ux, uy) = (dx / length, dy / length);
        let tip = Point::new(x2, y2);

        for angle in [ARROW_HEAD_ANGLE, -ARROW_HEAD_ANGLE] {
            let (sin, cos) = angle.sin_cos();
            let barb = Point::new(
                x2 - head_length * (ux * cos - uy * sin),
                y2 - head_length * (uy * cos + ux * sin),
            );
            self.line(stroke, stroke_width, tip, barb);
        }
    }

    /// Text centered on `at`.
    pub fn text(&mut self, at: Point, style: &TextStyle, content: &str) {
        self.buf.push_str(&format!(
            "  <text x='{}' y='{}' font-family='{}' stroke='{}' fill='{}' font-size='{}px' \
             text-anchor='middle' dominant-baseline='middle'>{}</text>\n",
            px(at.x),
            px(at.y),
            escape(style.font_family),
            escape(style.stroke),
            escape(style.fill),
            px(style.font_size),
            escape(content),
        ));
    }

    /// Close the document.
    pub fn finish(mut self) -> String {
        self.buf.push_str("</svg>");
        self.buf
    }

    /// Close the document and write it to `path`.
    pub fn save(self, path: &Path) -> Result<()> {
        let svg = self.finish();
        std::fs::write(path, &svg).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = svg.len(), "svg written");
        Ok(())
    }
}

// ── Public API ───────────────────────────────────────────────────────────────

/// Draw background, title, every edge, then every node box and label on top.
pub fn draw(layout: &LayoutResult, config: &RenderConfig) -> SvgCanvas {
    let mut canvas = SvgCanvas::new(layout.width, layout.height);
    canvas.fill_background(&config.background_color);

    let title_style = TextStyle {
        font_family: FONT_FAMILY,
        font_size: config.title_size(),
        fill: INK,
        stroke: INK,
    };
    canvas.text(layout.title_position, &title_style, &layout.title);

    for edge in &layout.edges {
        canvas.arrow(INK, EDGE_STROKE_WIDTH, ARROW_HEAD_LENGTH, edge.start, edge.end);
    }

    let box_style = RectStyle {
        fill: &config.node_color,
        stroke: INK,
        stroke_width: BOX_STROKE_WIDTH,
        radius: BOX_RADIUS,
    };
    let label_style = TextStyle {
        font_size: f64::from(config.text_size),
        ..title_style
    };
    for node in &layout.nodes {
        canvas.rectangle(node.origin(), node.width, node.height, &box_style);
        canvas.text(node.center, &label_style, &node.text);
    }
    canvas
}

/// Render a laid-out graph to a complete SVG document.
pub fn render(layout: &LayoutResult, config: &RenderConfig) -> String {
    draw(layout, config).finish()
}

/// File name for a diagram: its title with illegal characters replaced by
/// `_`, plus `.svg`.
pub fn output_file_name(title: &str) -> String {
    if title.is_empty() {
        return "untitled.svg".to_string();
    }
    format!("{}.svg", ILLEGAL_FILE_CHARS.replace_all(title, "_"))
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_svg.rs"]
mod tests;
