//! Summary statistics for a built supra-graph.
//!
//! # Statistics Provided
//!
//! - **node_count**: total `(label, year)` nodes.
//! - **intra_edge_count / inter_edge_count**: edges by kind.
//! - **layers**: per year, node count, intra edge count and the sum of
//!   (possibly normalized) intra weights.
//! - **transitions**: coupling weight applied between consecutive years.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{EdgeKind, SupraGraph, Transition};

/// Per-layer counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerStats {
    /// Layer year.
    pub year: i32,
    /// `(label, year)` nodes in this layer, coupling-created ones included.
    pub node_count: usize,
    /// Intra edges in this layer.
    pub intra_edge_count: usize,
    /// Sum of intra edge weights as stored (after normalization).
    pub intra_weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupraStats {
    /// Total `(label, year)` nodes.
    pub node_count: usize,
    /// Edges within a layer.
    pub intra_edge_count: usize,
    /// Coupling edges between consecutive layers.
    pub inter_edge_count: usize,
    /// Per-layer breakdown, ascending by year.
    pub layers: Vec<LayerStats>,
    /// Coupling weight applied per transition, ascending by year.
    pub transitions: Vec<Transition>,
}

impl SupraStats {
    #[must_use]
    pub fn from_graph(supra: &SupraGraph) -> Self {
        let mut layers: BTreeMap<i32, LayerStats> = supra
            .years()
            .iter()
            .map(|&year| {
                (
                    year,
                    LayerStats {
                        year,
                        node_count: 0,
                        intra_edge_count: 0,
                        intra_weight: 0.0,
                    },
                )
            })
            .collect();

        for node in supra.nodes() {
            if let Some(layer) = layers.get_mut(&node.year) {
                layer.node_count += 1;
            }
        }

        let mut intra_edge_count = 0;
        let mut inter_edge_count = 0;
        for (a, _, edge) in supra.edges() {
            match edge.kind {
                EdgeKind::Intra => {
                    intra_edge_count += 1;
                    if let Some(layer) = layers.get_mut(&a.year) {
                        layer.intra_edge_count += 1;
                        layer.intra_weight += edge.weight;
                    }
                }
                EdgeKind::Inter => inter_edge_count += 1,
            }
        }

        Self {
            node_count: supra.node_count(),
            intra_edge_count,
            inter_edge_count,
            layers: layers.into_values().collect(),
            transitions: supra.transitions().to_vec(),
        }
    }
}
