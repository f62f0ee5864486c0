//! Temporal supra-graph: per-year layers stitched into one graph.
//!
//! # Overview
//!
//! ```text
//! BTreeMap<year, WeightedGraph>
//!        ↓  build::build_supragraph()
//! SupraGraph
//!   ├─ nodes: (label, year), one per node of each layer
//!   ├─ intra edges: layer edges, weight / divisor
//!   └─ inter edges: (label, t) -- (label, t+1) for every reference label
//!        ↓  stats::SupraStats::from_graph()   matrix::supra_adjacency()
//! ```
//!
//! Nodes are created once per `(label, year)` and never removed. Edge
//! weights and kinds are fixed at insertion.

pub mod build;
pub mod coupling;
pub mod matrix;
pub mod stats;

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::Serialize;

pub use build::build_supragraph;
pub use coupling::{Transition, adaptive_omega, coupling_schedule};
pub use stats::SupraStats;

// ---------------------------------------------------------------------------
// Node / edge payloads
// ---------------------------------------------------------------------------

/// A node of one layer: original label plus the layer's year.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SupraNode {
    /// Label of the node in its layer.
    pub label: String,
    /// Year of the layer the node belongs to.
    pub year: i32,
}

impl SupraNode {
    pub fn new(label: impl Into<String>, year: i32) -> Self {
        Self {
            label: label.into(),
            year,
        }
    }
}

/// Whether an edge lies within one layer or couples two layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Both endpoints in the same year.
    Intra,
    /// Same label in consecutive years.
    Inter,
}

/// Edge payload of the supra-graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SupraEdge {
    /// Intra: layer weight over the divisor. Inter: the transition's omega.
    pub weight: f64,
    /// Whether the edge lies within a layer or couples two layers.
    pub kind: EdgeKind,
}

// ---------------------------------------------------------------------------
// SupraGraph
// ---------------------------------------------------------------------------

/// Multilayer graph with `(label, year)` nodes and tagged edges.
#[derive(Debug, Clone, Default)]
pub struct SupraGraph {
    graph: UnGraph<SupraNode, SupraEdge>,
    node_map: HashMap<SupraNode, NodeIndex>,
    years: Vec<i32>,
    transitions: Vec<Transition>,
}

impl SupraGraph {
    /// Insert `node` if absent. Returns its index and whether it was new.
    fn ensure_node(&mut self, node: SupraNode) -> (NodeIndex, bool) {
        if let Some(&idx) = self.node_map.get(&node) {
            return (idx, false);
        }
        let idx = self.graph.add_node(node.clone());
        self.node_map.insert(node, idx);
        (idx, true)
    }

    fn add_edge(&mut self, a: NodeIndex, b: NodeIndex, edge: SupraEdge) {
        self.graph.add_edge(a, b, edge);
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    #[must_use]
    pub fn intra_edge_count(&self) -> usize {
        self.count_kind(EdgeKind::Intra)
    }

    #[must_use]
    pub fn inter_edge_count(&self) -> usize {
        self.count_kind(EdgeKind::Inter)
    }

    fn count_kind(&self, kind: EdgeKind) -> usize {
        self.graph.edge_weights().filter(|e| e.kind == kind).count()
    }

    #[must_use]
    pub fn contains_node(&self, label: &str, year: i32) -> bool {
        self.node_map.contains_key(&SupraNode::new(label, year))
    }

    #[must_use]
    pub fn node_index(&self, node: &SupraNode) -> Option<NodeIndex> {
        self.node_map.get(node).copied()
    }

    /// The edge between `a` and `b`, in either orientation.
    #[must_use]
    pub fn edge(&self, a: &SupraNode, b: &SupraNode) -> Option<SupraEdge> {
        let ia = self.node_index(a)?;
        let ib = self.node_index(b)?;
        self.graph
            .find_edge(ia, ib)
            .and_then(|e| self.graph.edge_weight(e))
            .copied()
    }

    /// Nodes in insertion order (year ascending, then layer node order).
    pub fn nodes(&self) -> impl Iterator<Item = &SupraNode> + '_ {
        self.graph.node_weights()
    }

    /// Edges in insertion order: all intra edges by year, then inter edges
    /// by transition.
    pub fn edges(&self) -> impl Iterator<Item = (&SupraNode, &SupraNode, SupraEdge)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (&self.graph[e.source()], &self.graph[e.target()], *e.weight()))
    }

    /// Labels present in layer `year`, in insertion order.
    #[must_use]
    pub fn layer_nodes(&self, year: i32) -> Vec<&str> {
        self.nodes()
            .filter(|n| n.year == year)
            .map(|n| n.label.as_str())
            .collect()
    }

    /// Layer years, ascending.
    #[must_use]
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Coupling applied between consecutive layers, in year order.
    #[must_use]
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Borrow the underlying petgraph graph.
    #[must_use]
    pub const fn graph(&self) -> &UnGraph<SupraNode, SupraEdge> {
        &self.graph
    }
}
