//! Per-year weighted layer.
//!
//! # Overview
//!
//! A [`WeightedGraph`] is one year of the temporal network: an undirected
//! [`petgraph`] graph whose node weights are labels and whose edge weights
//! are co-occurrence counts (or any non-negative weight).
//!
//! ## Invariants
//!
//! - At most one edge between any pair of nodes.
//! - No self-loops.
//! - Weights are finite and non-negative.
//!
//! Isolated nodes are first-class: the node set is tracked independently
//! of the edge set, so a layer built from a sparse backbone still carries
//! every organization of that year.
//!
//! ## Ordering
//!
//! Nodes and edges iterate in insertion order (petgraph index order).

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::codec::to_edge_list;
use crate::error::{Error, Result};
use crate::model::{AdjacencyMatrix, EdgeRecord, check_weight};

// ---------------------------------------------------------------------------
// WeightedGraph
// ---------------------------------------------------------------------------

/// Undirected, simple, weighted graph with string labels.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    graph: UnGraph<String, f64>,
    node_map: HashMap<String, NodeIndex>,
}

impl WeightedGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph with the given nodes and no edges.
    pub fn with_nodes<L: Into<String>>(labels: impl IntoIterator<Item = L>) -> Self {
        let mut graph = Self::new();
        for label in labels {
            graph.add_node(label);
        }
        graph
    }

    /// Build a layer from an explicit node set plus sparse edge records.
    ///
    /// Record endpoints missing from `nodes` are added as nodes, mirroring
    /// how a layer is assembled from a backbone whose labels are a subset
    /// of the projection's labels.
    ///
    /// # Errors
    ///
    /// Propagates [`WeightedGraph::add_edge`] errors (self-loop, duplicate
    /// edge, invalid weight).
    pub fn from_edge_records<L: Into<String>>(
        nodes: impl IntoIterator<Item = L>,
        records: &[EdgeRecord],
    ) -> Result<Self> {
        let mut graph = Self::with_nodes(nodes);
        for record in records {
            graph.add_edge(&record.source, &record.target, record.weight)?;
        }
        Ok(graph)
    }

    /// Build a layer holding every label of `matrix` and every positive
    /// upper-triangle entry as an edge.
    #[must_use]
    pub fn from_adjacency(matrix: &AdjacencyMatrix) -> Self {
        let mut graph = Self::with_nodes(matrix.labels().iter().cloned());
        // The codec only yields distinct, off-diagonal, validated entries,
        // so no edge check can fail here.
        for record in to_edge_list(matrix) {
            let a = graph.add_node(record.source);
            let b = graph.add_node(record.target);
            graph.graph.add_edge(a, b, record.weight);
        }
        graph
    }

    /// Add `label` if absent; return its index either way.
    pub fn add_node(&mut self, label: impl Into<String>) -> NodeIndex {
        let label = label.into();
        if let Some(&idx) = self.node_map.get(&label) {
            return idx;
        }
        let idx = self.graph.add_node(label.clone());
        self.node_map.insert(label, idx);
        idx
    }

    /// Add the undirected edge `u -- v` with weight `weight`.
    ///
    /// Endpoints that are not yet nodes are added.
    ///
    /// # Errors
    ///
    /// - [`Error::SelfLoop`] if `u == v`.
    /// - [`Error::DuplicateEdge`] if the pair is already connected.
    /// - [`Error::InvalidWeight`] if `weight` is negative or not finite.
    pub fn add_edge(&mut self, u: &str, v: &str, weight: f64) -> Result<()> {
        if u == v {
            return Err(Error::SelfLoop(u.to_string()));
        }
        check_weight(u, v, weight)?;
        let a = self.add_node(u);
        let b = self.add_node(v);
        if self.graph.contains_edge(a, b) {
            return Err(Error::DuplicateEdge(u.to_string(), v.to_string()));
        }
        self.graph.add_edge(a, b, weight);
        Ok(())
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
    pub fn contains_node(&self, label: &str) -> bool {
        self.node_map.contains_key(label)
    }

    /// Look up the `NodeIndex` for a label.
    #[must_use]
    pub fn node_index(&self, label: &str) -> Option<NodeIndex> {
        self.node_map.get(label).copied()
    }

    /// Weight of the edge between `u` and `v`, if any.
    #[must_use]
    pub fn weight(&self, u: &str, v: &str) -> Option<f64> {
        let a = self.node_index(u)?;
        let b = self.node_index(v)?;
        self.graph
            .find_edge(a, b)
            .and_then(|e| self.graph.edge_weight(e))
            .copied()
    }

    /// Node labels in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph.node_weights().map(String::as_str)
    }

    /// `(u, v, weight)` triples in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, f64)> + '_ {
        self.graph.edge_references().map(|e| {
            (
                self.graph[e.source()].as_str(),
                self.graph[e.target()].as_str(),
                *e.weight(),
            )
        })
    }

    /// Edges as sparse records, in insertion order.
    #[must_use]
    pub fn edge_records(&self) -> Vec<EdgeRecord> {
        self.edges()
            .map(|(u, v, w)| EdgeRecord::new(u, v, w))
            .collect()
    }

    /// Arithmetic mean of the edge weights, `None` for an edgeless layer.
    #[must_use]
    pub fn mean_weight(&self) -> Option<f64> {
        let count = self.edge_count();
        if count == 0 {
            return None;
        }
        Some(self.total_weight() / count as f64)
    }

    /// Sum of edge weights (each undirected edge counted once).
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.graph.edge_weights().sum()
    }

    /// Borrow the underlying petgraph graph.
    #[must_use]
    pub const fn graph(&self) -> &UnGraph<String, f64> {
        &self.graph
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
