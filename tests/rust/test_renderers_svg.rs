use super::*;
use crate::graph::Graph;
use crate::layout::layout;

const HEADER_400: &str = "<svg width='400px' height='400px' xmlns='http://www.w3.org/2000/svg' \
                          version='1.1' xmlns:xlink='http://www.w3.org/1999/xlink'>\n";

fn black_text() -> TextStyle<'static> {
    TextStyle {
        font_family: "sans-serif",
        font_size: 16.0,
        fill: "black",
        stroke: "black",
    }
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

// ── Canvas ───────────────────────────────────────────────────────────────

#[test]
fn test_empty_canvas() {
    let svg = SvgCanvas::new(400.0, 400.0).finish();
    assert_eq!(svg, format!("{HEADER_400}</svg>"));
}

#[test]
fn test_dimensions_round() {
    let c = SvgCanvas::new(839.6, 293.3);
    assert_eq!(c.width(), 840);
    assert_eq!(c.height(), 293);
}

#[test]
fn test_background_covers_canvas() {
    let mut c = SvgCanvas::new(400.0, 400.0);
    c.fill_background("navy");
    let svg = c.finish();
    assert!(svg.contains(
        "  <rect fill='navy' stroke='navy' stroke-width='0px' width='400' height='400' y='0' x='0' ry='0' rx='0'/>\n"
    ));
}

#[test]
fn test_rectangle_element() {
    let mut c = SvgCanvas::new(400.0, 400.0);
    let style = RectStyle {
        fill: "white",
        stroke: "black",
        stroke_width: 6,
        radius: 8,
    };
    c.rectangle(Point::new(20.4, 9.6), 400.0, 240.0, &style);
    assert!(c.finish().contains(
        "  <rect fill='white' stroke='black' stroke-width='6px' width='400' height='240' y='10' x='20' ry='8' rx='8'/>\n"
    ));
}

#[test]
fn test_line_element() {
    let mut c = SvgCanvas::new(400.0, 400.0);
    c.line("black", 8, Point::new(1.0, 2.0), Point::new(3.0, 4.0));
    assert!(c.finish().contains(
        "  <line stroke='black' stroke-width='8px' y2='4' x2='3' y1='2' x1='1'/>\n"
    ));
}

#[test]
fn test_arrow_head_at_thirty_degrees() {
    let mut c = SvgCanvas::new(400.0, 400.0);
    c.arrow("black", 8, 40.0, Point::new(100.0, 0.0), Point::new(100.0, 100.0));
    let svg = c.finish();
    assert_eq!(count(&svg, "<line"), 3);
    assert!(svg.contains("y2='65' x2='120' y1='100' x1='100'"));
    assert!(svg.contains("y2='65' x2='80' y1='100' x1='100'"));
}

#[test]
fn test_zero_length_arrow_has_no_head() {
    let mut c = SvgCanvas::new(400.0, 400.0);
    c.arrow("black", 8, 40.0, Point::new(50.0, 50.0), Point::new(50.0, 50.0));
    let svg = c.finish();
    assert_eq!(count(&svg, "<line"), 1);
    assert!(!svg.contains("NaN"));
}

#[test]
fn test_text_element() {
    let mut c = SvgCanvas::new(400.0, 400.0);
    c.text(Point::new(200.0, 40.0), &black_text(), "Hi");
    assert!(c.finish().contains(
        "  <text x='200' y='40' font-family='sans-serif' stroke='black' fill='black' font-size='16px' \
         text-anchor='middle' dominant-baseline='middle'>Hi</text>\n"
    ));
}

#[test]
fn test_text_is_escaped() {
    let mut c = SvgCanvas::new(400.0, 400.0);
    c.text(Point::default(), &black_text(), "a < b & \"c\" 'd'");
    let svg = c.finish();
    assert!(svg.contains(">a &lt; b &amp; &quot;c&quot; &apos;d&apos;</text>"));
}

#[test]
fn test_save_writes_file() {
    let dir = std::env::temp_dir().join(format!("logos-svg-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("out.svg");

    let mut c = SvgCanvas::new(400.0, 400.0);
    c.fill_background("white");
    c.save(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("<svg "));
    assert!(written.ends_with("</svg>"));
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_save_into_missing_directory_fails() {
    let path = std::env::temp_dir()
        .join("logos-no-such-dir")
        .join("nested")
        .join("out.svg");
    let err = SvgCanvas::new(1.0, 1.0).save(&path).unwrap_err();
    assert!(matches!(err, Error::Write { .. }));
}

// ── Draw step ────────────────────────────────────────────────────────────

#[test]
fn test_render_empty_graph() {
    let mut g = Graph::new();
    g.update_title("My Graph");
    let svg = render(&layout(&mut g), &RenderConfig::default());
    assert!(svg.starts_with(HEADER_400));
    assert!(svg.ends_with("</svg>"));
    assert_eq!(count(&svg, "<rect"), 1);
    assert_eq!(count(&svg, "<line"), 0);
    assert!(svg.contains("x='200' y='40'"));
    assert!(svg.contains("font-size='24px'"));
    assert!(svg.contains(">My Graph</text>"));
}

#[test]
fn test_render_tree() {
    let mut g = Graph::new();
    g.update_title("Family");
    g.add_node("r", "Root");
    g.add_node("c", "Child");
    g.add_edge("r", "c");

    let config = RenderConfig {
        background_color: "ivory".into(),
        node_color: "lightblue".into(),
        text_size: 20,
    };
    let svg = render(&layout(&mut g), &config);

    assert!(svg.contains("fill='ivory' stroke='ivory'"));
    assert_eq!(count(&svg, "fill='lightblue'"), 2);
    assert_eq!(count(&svg, "<rect"), 3);
    assert_eq!(count(&svg, "<line"), 3);
    assert!(svg.contains("font-size='20px'"));
    assert!(svg.contains("font-size='30px'"));
    assert!(svg.contains(">Root</text>"));
    assert!(svg.contains(">Child</text>"));

    // Edges come before boxes so boxes paint over them.
    let first_line = svg.find("<line").unwrap();
    let first_box = svg.find("fill='lightblue'").unwrap();
    assert!(first_line < first_box);
}

#[test]
fn test_render_is_deterministic() {
    let build = || {
        let mut g = Graph::new();
        for name in ["a", "b", "c"] {
            g.add_node(name, name);
        }
        g.add_edge("a", "b");
        g.add_edge("b", "c");
        g.add_edge("c", "a");
        render(&layout(&mut g), &RenderConfig::default())
    };
    assert_eq!(build(), build());
}

// ── File names ───────────────────────────────────────────────────────────

#[test]
fn test_output_file_name() {
    assert_eq!(output_file_name("My Graph"), "My Graph.svg");
    assert_eq!(output_file_name("a/b\\c:d"), "a_b_c_d.svg");
    assert_eq!(output_file_name("what?*"), "what__.svg");
    assert_eq!(output_file_name(""), "untitled.svg");
}
