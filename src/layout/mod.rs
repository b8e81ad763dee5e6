//! Layout engine: turn a finished graph into positioned boxes and arrows.

pub mod tree;
pub mod types;

pub use types::{EdgeDirection, LayoutNode, LayoutResult, Point, RoutedEdge};

use crate::graph::Graph;
use types::{BOX_HEIGHT, BOX_WIDTH};

/// Run every layout pass. Widths and coordinates are also written back onto
/// the graph's nodes.
pub fn layout(graph: &mut Graph) -> LayoutResult {
    tree::compute_required_widths(graph);
    let canvas = tree::canvas_size(graph);
    tree::assign_coordinates(graph, canvas);
    tree::center_children(graph);

    let nodes: Vec<LayoutNode> = graph
        .nodes()
        .iter()
        .map(|n| LayoutNode {
            id: n.id,
            name: n.name.clone(),
            text: n.text.clone(),
            level: n.level,
            center: Point::new(n.x, n.y),
            width: BOX_WIDTH,
            height: BOX_HEIGHT,
            required_width: n.required_width,
        })
        .collect();
    let edges = tree::route_edges(graph);

    tracing::debug!(
        width = canvas.width,
        height = canvas.height,
        nodes = nodes.len(),
        edges = edges.len(),
        "layout complete"
    );

    LayoutResult {
        width: canvas.width,
        height: canvas.height,
        title: graph.title().to_string(),
        title_position: tree::title_position(graph, canvas),
        nodes,
        edges,
    }
}
