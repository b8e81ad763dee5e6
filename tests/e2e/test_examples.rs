//! Run every document in `demos/` through the library pipeline.

use std::fs;
use std::path::PathBuf;

use logos::{RenderConfig, compile, render_source};

fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos")
}

fn read_demo(name: &str) -> String {
    let path = demos_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn test_all_demos_render() {
    let mut seen = 0;
    for entry in fs::read_dir(demos_dir()).unwrap().flatten() {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("logos") {
            continue;
        }
        let src = fs::read_to_string(&path).unwrap();
        let doc = render_source(&src, &RenderConfig::default())
            .unwrap_or_else(|e| panic!("{} failed: {e:?}", path.display()));
        assert!(doc.svg.starts_with("<svg "), "{}", path.display());
        assert!(doc.svg.ends_with("</svg>"), "{}", path.display());
        seen += 1;
    }
    assert!(seen >= 3, "expected demo documents, found {seen}");
}

#[test]
fn test_family_demo() {
    let src = read_demo("family.logos");
    let graph = compile(&src).unwrap();
    assert_eq!(graph.len(), 6);
    assert_eq!(graph.edge_count(), 5);
    assert_eq!(graph.highest_level(), 3);

    let doc = render_source(&src, &RenderConfig::default()).unwrap();
    assert_eq!(doc.file_name, "Family.svg");
    // Background plus one box per node; three strokes per arrow.
    assert_eq!(count(&doc.svg, "<rect"), 7);
    assert_eq!(count(&doc.svg, "<line"), 15);
    for label in ["Grandma", "Mom", "Uncle", "Me", "Sister", "Cousin"] {
        assert!(doc.svg.contains(&format!(">{label}</text>")), "{label}");
    }
}

#[test]
fn test_cycle_demo() {
    let src = read_demo("cycle.logos");
    let graph = compile(&src).unwrap();
    let root = graph.get_node("a").unwrap();
    assert_eq!(root.level, Some(1));
    assert_eq!(root.parent, None);
    assert!(graph.has_edge(graph.get_node("d").unwrap().id, root.id));

    let doc = render_source(&src, &RenderConfig::default()).unwrap();
    assert_eq!(doc.file_name, "Cycle.svg");
    assert_eq!(count(&doc.svg, "<rect"), 5);
}

#[test]
fn test_bidirectional_demo() {
    let src = read_demo("bidirectional.logos");
    let graph = compile(&src).unwrap();
    assert_eq!(graph.len(), 4);
    assert_eq!(graph.edge_count(), 5);
    assert_eq!(graph.get_node("db").unwrap().text, "Database");
    assert_eq!(graph.get_node("cache").unwrap().text, "Cache");

    let doc = render_source(&src, &RenderConfig::default()).unwrap();
    assert_eq!(doc.file_name, "Client _ Server.svg");
}

#[test]
fn test_demos_render_deterministically() {
    let src = read_demo("family.logos");
    let config = RenderConfig::default();
    let first = render_source(&src, &config).unwrap();
    let second = render_source(&src, &config).unwrap();
    assert_eq!(first, second);
}
