//! Debug views of a finished graph: the plain-text edge dump and a
//! petgraph `DiGraph` (with Graphviz DOT output on top of it).

use std::fmt::Write as _;

use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};

use super::{Graph, Node};

/// Node weight carried into the petgraph view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    pub name: String,
    pub text: String,
    pub level: Option<u32>,
}

impl std::fmt::Display for NodeData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.text.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}", self.text)
        }
    }
}

/// Edge weight: whether the edge is part of the layout tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    Tree,
    Cross,
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeKind::Tree => Ok(()),
            EdgeKind::Cross => write!(f, "cross"),
        }
    }
}

fn level_text(level: Option<u32>) -> String {
    level.map_or_else(|| "-1".to_string(), |l| l.to_string())
}

fn node_summary(n: &Node) -> String {
    format!(
        "{}({}) - level {} - {} children",
        n.name,
        n.text,
        level_text(n.level),
        n.child_count
    )
}

impl Graph {
    /// Title line plus one line per edge, in matrix order.
    pub fn describe(&self) -> String {
        let mut out = format!("---{}---({} levels)\n", self.title, self.highest_level);
        for (from, to) in self.edges() {
            let _ = writeln!(
                out,
                "{} -> {}",
                node_summary(&self.nodes[from]),
                node_summary(&self.nodes[to])
            );
        }
        out
    }

    /// Copy the graph into a petgraph `DiGraph`; node indices equal node ids.
    pub fn to_digraph(&self) -> DiGraph<NodeData, EdgeKind> {
        let mut dg = DiGraph::with_capacity(self.nodes.len(), self.edge_count());
        for n in &self.nodes {
            dg.add_node(NodeData {
                name: n.name.clone(),
                text: n.text.clone(),
                level: n.level,
            });
        }
        for (from, to) in self.edges() {
            let kind = if self.nodes[to].parent == Some(from) {
                EdgeKind::Tree
            } else {
                EdgeKind::Cross
            };
            dg.add_edge(NodeIndex::new(from), NodeIndex::new(to), kind);
        }
        dg
    }

    /// Graphviz DOT rendering of `to_digraph()`.
    pub fn to_dot(&self) -> String {
        let dg = self.to_digraph();
        let body = Dot::with_config(&dg, &[Config::GraphContentOnly]);
        format!("digraph {{\n{body}}}\n")
    }
}
