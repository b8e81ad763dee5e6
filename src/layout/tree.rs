//! Tree layout passes.
//!
//! 1. `compute_required_widths`: bottom-up, each node reserves at least the
//!    combined width of its tree children.
//! 2. `assign_coordinates`: rows by level, nodes packed left to right.
//! 3. `center_children`: top-down, every family is re-centered under its
//!    parent.
//!
//! Cross edges never influence positions; they are only routed.

use crate::graph::{Graph, Node, ROOT_LEVEL};

use super::types::{BOX_HEIGHT, GRAPH_PADDING, NODE_FOOTPRINT, Point, RoutedEdge};

/// Canvas dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

/// Row a node is drawn on. Nodes never touched by an edge share the root row.
fn row(node: &Node) -> u32 {
    node.level.unwrap_or(ROOT_LEVEL)
}

fn center(node: &Node) -> Point {
    Point::new(node.x, node.y)
}

/// Deepest row, never less than the root row.
fn deepest_row(graph: &Graph) -> u32 {
    graph.highest_level().max(ROOT_LEVEL)
}

/// Vertical center of `level`'s row.
pub fn row_y(level: u32, deepest: u32, height: f64) -> f64 {
    f64::from(level) / f64::from(deepest + 1) * height
}

// ─── Pass 1: widths ──────────────────────────────────────────────────────────

pub fn compute_required_widths(graph: &mut Graph) {
    let highest = graph.highest_level();
    let nodes = graph.nodes_mut();
    for node in nodes.iter_mut() {
        node.required_width = NODE_FOOTPRINT;
    }

    for level in (ROOT_LEVEL..=highest).rev() {
        for id in 0..nodes.len() {
            if nodes[id].level != Some(level) {
                continue;
            }
            let children: f64 = nodes
                .iter()
                .filter(|n| n.parent == Some(id))
                .map(|n| n.required_width)
                .sum();
            nodes[id].required_width = nodes[id].required_width.max(children);
        }
    }
}

// ─── Pass 2: coordinates ─────────────────────────────────────────────────────

/// Width covers the root row plus padding; height grows with node count.
pub fn canvas_size(graph: &Graph) -> CanvasSize {
    let top_row: f64 = graph
        .nodes()
        .iter()
        .filter(|n| row(n) == ROOT_LEVEL)
        .map(|n| n.required_width)
        .sum();
    CanvasSize {
        width: top_row + GRAPH_PADDING,
        height: BOX_HEIGHT * graph.len() as f64 + GRAPH_PADDING,
    }
}

pub fn assign_coordinates(graph: &mut Graph, canvas: CanvasSize) {
    let deepest = deepest_row(graph);
    let nodes = graph.nodes_mut();
    for level in (ROOT_LEVEL..=deepest).rev() {
        let y = row_y(level, deepest, canvas.height);
        let mut used = 0.0;
        for node in nodes.iter_mut().filter(|n| row(n) == level) {
            node.x = GRAPH_PADDING / 2.0 + used + node.required_width / 2.0;
            node.y = y;
            used += node.required_width;
        }
    }
}

// ─── Pass 3: refinement ──────────────────────────────────────────────────────

/// Lay each parent's children side by side, proportional to their required
/// widths, centered under the parent. Runs top-down so a child is final
/// before its own children are placed.
pub fn center_children(graph: &mut Graph) {
    let highest = graph.highest_level();
    let nodes = graph.nodes_mut();
    for level in ROOT_LEVEL..=highest {
        for parent in 0..nodes.len() {
            if nodes[parent].level != Some(level) {
                continue;
            }
            let total: f64 = nodes
                .iter()
                .filter(|n| n.parent == Some(parent))
                .map(|n| n.required_width)
                .sum();
            if total == 0.0 {
                continue;
            }

            let mut cursor = nodes[parent].x - total / 2.0;
            for child in nodes.iter_mut().filter(|n| n.parent == Some(parent)) {
                child.x = cursor + child.required_width / 2.0;
                cursor += child.required_width;
            }
        }
    }
}

// ─── Edges and title ─────────────────────────────────────────────────────────

/// Every matrix edge as one straight arrow, row-major.
pub fn route_edges(graph: &Graph) -> Vec<RoutedEdge> {
    let nodes = graph.nodes();
    graph
        .edges()
        .map(|(from, to)| RoutedEdge::new(from, to, center(&nodes[from]), center(&nodes[to])))
        .collect()
}

pub fn title_position(graph: &Graph, canvas: CanvasSize) -> Point {
    let x = canvas.width / 2.0;
    if graph.is_empty() {
        return Point::new(x, canvas.height / 10.0);
    }
    let top = row_y(ROOT_LEVEL, deepest_row(graph), canvas.height);
    Point::new(x, top - BOX_HEIGHT / 1.2)
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_tree.rs"]
mod tests;
