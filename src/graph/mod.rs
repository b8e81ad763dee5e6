//! Graph: named nodes over an adjacency matrix, with incremental level
//! and parent bookkeeping.
//!
//! Levels are assigned as edges arrive: an unleveled source becomes a root
//! (level 1) and an unleveled target lands one level below its source. Only
//! edges that step exactly one level down become tree edges (parent/child);
//! every other edge is kept in the matrix as a cross edge.

pub mod export;
pub mod matrix;

use std::collections::HashMap;

use matrix::AdjacencyMatrix;

/// Dense index of a node; doubles as its row/column in the matrix.
pub type NodeId = usize;

pub const ROOT_LEVEL: u32 = 1;

// ─── Node ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    /// Display text; empty when the name was never bound.
    pub text: String,
    /// Depth in the tree, `None` until an edge touches the node.
    pub level: Option<u32>,
    /// Tree parent (non-owning).
    pub parent: Option<NodeId>,
    pub child_count: usize,
    /// Filled in by the layout engine.
    pub required_width: f64,
    pub x: f64,
    pub y: f64,
}

impl Node {
    pub fn new(id: NodeId, name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            text: text.into(),
            level: None,
            parent: None,
            child_count: 0,
            required_width: 0.0,
            x: -1.0,
            y: -1.0,
        }
    }
}

// ─── Graph ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    title: String,
    nodes: Vec<Node>,
    /// Maps node name → id.
    node_index: HashMap<String, NodeId>,
    edges: AdjacencyMatrix,
    highest_level: u32,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Mutation ─────────────────────────────────────────────────────────────

    /// Append a node under the next dense id. Callers check for an existing
    /// name first; the interpreter never redeclares a node.
    pub fn add_node(&mut self, name: &str, text: &str) -> NodeId {
        let id = self.nodes.len();
        self.edges.ensure_capacity(id + 1);
        self.nodes.push(Node::new(id, name, text));
        self.node_index.insert(name.to_string(), id);
        id
    }

    /// Add the directed edge `from → to`.
    ///
    /// Returns `false` (and changes nothing) if either name is unknown.
    /// Re-adding an existing edge succeeds without touching any state.
    pub fn add_edge(&mut self, from_name: &str, to_name: &str) -> bool {
        let (Some(&from), Some(&to)) = (
            self.node_index.get(from_name),
            self.node_index.get(to_name),
        ) else {
            return false;
        };

        if self.edges.get(from, to) {
            return true;
        }
        self.edges.set(from, to);

        let from_level = *self.nodes[from].level.get_or_insert(ROOT_LEVEL);
        self.highest_level = self.highest_level.max(from_level);

        let to_level = *self.nodes[to].level.get_or_insert(from_level + 1);
        self.highest_level = self.highest_level.max(to_level);

        if to_level == from_level + 1 {
            self.nodes[from].child_count += 1;
            self.nodes[to].parent = Some(from);
        }

        tracing::trace!(
            from = from_name,
            to = to_name,
            from_level,
            to_level,
            "edge added"
        );
        true
    }

    pub fn update_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    // ── Lookup ───────────────────────────────────────────────────────────────

    pub fn get_node(&self, name: &str) -> Option<&Node> {
        self.node_index.get(name).map(|&id| &self.nodes[id])
    }

    pub fn get_node_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.node_index.get(name).map(|&id| &mut self.nodes[id])
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        from < self.nodes.len() && to < self.nodes.len() && self.edges.get(from, to)
    }

    /// All edges as `(from, to)` id pairs, row-major.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.edges.edges(self.nodes.len())
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Direct tree children of `id`, in creation order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(move |n| n.parent == Some(id))
    }

    /// Nodes on `level`, in creation order.
    pub fn nodes_at_level(&self, level: u32) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(move |n| n.level == Some(level))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn highest_level(&self) -> u32 {
        self.highest_level
    }

    pub fn matrix_capacity(&self) -> usize {
        self.edges.capacity()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
