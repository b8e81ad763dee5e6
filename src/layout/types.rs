//! Layout types: Point, LayoutNode, RoutedEdge, EdgeDirection, LayoutResult.

use crate::graph::NodeId;

// ─── Constants ────────────────────────────────────────────────────────────────

pub const BOX_WIDTH: f64 = 400.0;
pub const BOX_HEIGHT: f64 = 240.0;
/// Horizontal gap reserved around every box.
pub const NODE_PADDING: f64 = BOX_WIDTH * 0.10;
/// Minimum horizontal space one node occupies.
pub const NODE_FOOTPRINT: f64 = BOX_WIDTH + NODE_PADDING;
/// Extra space added to both canvas dimensions.
pub const GRAPH_PADDING: f64 = 400.0;

// ─── Point ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ─── LayoutNode ───────────────────────────────────────────────────────────────

/// A node with its final center and box size.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    pub id: NodeId,
    pub name: String,
    pub text: String,
    pub level: Option<u32>,
    pub center: Point,
    pub width: f64,
    pub height: f64,
    pub required_width: f64,
}

impl LayoutNode {
    /// Top-left corner of the box.
    pub fn origin(&self) -> Point {
        Point::new(
            self.center.x - self.width / 2.0,
            self.center.y - self.height / 2.0,
        )
    }
}

// ─── EdgeDirection ────────────────────────────────────────────────────────────

/// Which way an edge travels between box centers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeDirection {
    Down,
    Up,
    Left,
    Right,
}

impl EdgeDirection {
    /// Classify the edge `from → to` by comparing centers. Vertical movement
    /// wins over horizontal; coincident points count as `Down`.
    pub fn between(from: Point, to: Point) -> Self {
        if to.y > from.y {
            EdgeDirection::Down
        } else if to.y < from.y {
            EdgeDirection::Up
        } else if to.x < from.x {
            EdgeDirection::Left
        } else if to.x > from.x {
            EdgeDirection::Right
        } else {
            EdgeDirection::Down
        }
    }

    /// Point on the side of a `BOX_WIDTH × BOX_HEIGHT` box centered at
    /// `center` where an edge arriving in this direction stops.
    pub fn entry_point(self, center: Point) -> Point {
        match self {
            EdgeDirection::Down => Point::new(center.x, center.y - BOX_HEIGHT / 2.0),
            EdgeDirection::Up => Point::new(center.x, center.y + BOX_HEIGHT / 2.0),
            EdgeDirection::Left => Point::new(center.x + BOX_WIDTH / 2.0, center.y),
            EdgeDirection::Right => Point::new(center.x - BOX_WIDTH / 2.0, center.y),
        }
    }
}

// ─── RoutedEdge ───────────────────────────────────────────────────────────────

/// An edge reduced to one straight arrow.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub direction: EdgeDirection,
    /// Center of the source box.
    pub start: Point,
    /// Side of the target box.
    pub end: Point,
}

impl RoutedEdge {
    pub fn new(from: NodeId, to: NodeId, start: Point, target_center: Point) -> Self {
        let direction = EdgeDirection::between(start, target_center);
        Self {
            from,
            to,
            direction,
            start,
            end: direction.entry_point(target_center),
        }
    }
}

// ─── LayoutResult ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    pub width: f64,
    pub height: f64,
    pub title: String,
    pub title_position: Point,
    pub nodes: Vec<LayoutNode>,
    pub edges: Vec<RoutedEdge>,
}

impl LayoutResult {
    pub fn node(&self, name: &str) -> Option<&LayoutNode> {
        self.nodes.iter().find(|n| n.name == name)
    }
}
