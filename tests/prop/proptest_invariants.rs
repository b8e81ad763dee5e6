//! Property tests over randomly generated documents.

use proptest::prelude::*;

use logos::graph::Graph;
use logos::layout::layout;
use logos::layout::types::{BOX_WIDTH, NODE_FOOTPRINT};
use logos::parsers::interpret;

const NAMES: &[&str] = &["a", "b", "c", "d", "e", "f", "g"];

/// Every name bound up front, so the arrow lines never raise diagnostics.
fn header() -> String {
    NAMES
        .iter()
        .map(|n| format!("{n} = \"{}\"\n", n.to_uppercase()))
        .collect()
}

fn arrow_line() -> impl Strategy<Value = String> {
    (
        prop::sample::select(NAMES),
        prop::collection::vec((any::<bool>(), prop::sample::select(NAMES)), 1..4),
    )
        .prop_map(|(first, rest)| {
            let mut line = first.to_string();
            for (double, name) in rest {
                line.push_str(if double { " <-> " } else { " -> " });
                line.push_str(name);
            }
            line.push('\n');
            line
        })
}

fn arrow_lines() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arrow_line(), 0..10)
}

fn document(lines: &[String]) -> String {
    format!("{{ \"Random\" }}\n{}{}", header(), lines.concat())
}

fn graph_of(src: &str) -> Graph {
    let result = interpret(src);
    assert!(!result.had_error(), "{:?}", result.diagnostics);
    result.graph
}

proptest! {
    #[test]
    fn interpretation_is_deterministic(lines in arrow_lines()) {
        let src = document(&lines);
        let first = interpret(&src);
        let second = interpret(&src);
        prop_assert_eq!(first.graph, second.graph);
        prop_assert_eq!(first.diagnostics, second.diagnostics);
    }

    #[test]
    fn repeating_edges_changes_nothing(lines in arrow_lines()) {
        let once = graph_of(&document(&lines));
        let mut twice_lines = lines.clone();
        twice_lines.extend(lines.iter().cloned());
        let twice = graph_of(&document(&twice_lines));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn parents_sit_one_level_up(lines in arrow_lines()) {
        let g = graph_of(&document(&lines));
        let mut deepest = 0;
        for n in g.nodes() {
            // Bound names that never appear in an edge stay unleveled.
            let Some(level) = n.level else {
                prop_assert!(n.parent.is_none());
                continue;
            };
            prop_assert!(level >= 1);
            deepest = deepest.max(level);
            if let Some(p) = n.parent {
                let parent = g.node(p).expect("parent exists");
                prop_assert!(g.has_edge(p, n.id));
                prop_assert_eq!(parent.level.map(|l| l + 1), Some(level));
            } else if level > 1 {
                prop_assert!(false, "{} is on level {} without a parent", n.name, level);
            }
        }
        prop_assert_eq!(g.highest_level(), deepest);
    }

    #[test]
    fn widths_cover_children(lines in arrow_lines()) {
        let mut g = graph_of(&document(&lines));
        let result = layout(&mut g);
        for n in g.nodes() {
            let children: f64 = g.children(n.id).map(|c| c.required_width).sum();
            prop_assert!(n.required_width >= NODE_FOOTPRINT);
            prop_assert!(n.required_width >= children);
        }
        prop_assert_eq!(result.nodes.len(), g.len());
        prop_assert_eq!(result.edges.len(), g.edge_count());
    }

    #[test]
    fn same_level_boxes_do_not_overlap(lines in arrow_lines()) {
        let mut g = graph_of(&document(&lines));
        let result = layout(&mut g);
        for (i, left) in result.nodes.iter().enumerate() {
            for right in &result.nodes[i + 1..] {
                if left.level == right.level {
                    let gap = (left.center.x - right.center.x).abs();
                    prop_assert!(gap >= BOX_WIDTH - 1e-6, "{} / {}: {}", left.name, right.name, gap);
                }
            }
        }
    }

    #[test]
    fn boxes_stay_on_canvas(lines in arrow_lines()) {
        let mut g = graph_of(&document(&lines));
        let result = layout(&mut g);
        for n in &result.nodes {
            prop_assert!(n.center.x - n.width / 2.0 >= 0.0);
            prop_assert!(n.center.x + n.width / 2.0 <= result.width);
            prop_assert!(n.center.y > 0.0 && n.center.y < result.height);
        }
    }

    #[test]
    fn arbitrary_input_never_panics(src in "[ab=\"'{}<>/*\\- \n]{0,60}") {
        let result = interpret(&src);
        let lines = src.matches('\n').count() + 1;
        for d in &result.diagnostics {
            prop_assert!(d.line >= 1 && d.line <= lines, "{}", d);
        }
        let mut g = result.graph;
        let _ = layout(&mut g);
    }
}
