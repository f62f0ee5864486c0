//! Dense supra-adjacency matrix.
//!
//! Rows/columns are ordered by `(year, label)` so the block for layer `t`
//! sits on the diagonal and coupling between `t` and `t+1` occupies the
//! adjacent off-diagonal blocks. Intra and inter weights share one matrix.

use nalgebra::DMatrix;
use petgraph::visit::EdgeRef;

use super::{SupraGraph, SupraNode};

impl SupraGraph {
    /// Symmetric supra-adjacency matrix and the node order indexing it.
    #[must_use]
    pub fn supra_adjacency(&self) -> (Vec<SupraNode>, DMatrix<f64>) {
        let mut order: Vec<_> = self.graph.node_indices().collect();
        order.sort_by(|&a, &b| {
            let (na, nb) = (&self.graph[a], &self.graph[b]);
            na.year.cmp(&nb.year).then_with(|| na.label.cmp(&nb.label))
        });

        let mut position = vec![0_usize; self.graph.node_count()];
        for (pos, idx) in order.iter().enumerate() {
            position[idx.index()] = pos;
        }

        let n = order.len();
        let mut matrix = DMatrix::zeros(n, n);
        for edge in self.graph.edge_references() {
            let i = position[edge.source().index()];
            let j = position[edge.target().index()];
            matrix[(i, j)] = edge.weight().weight;
            matrix[(j, i)] = edge.weight().weight;
        }

        let nodes = order.into_iter().map(|idx| self.graph[idx].clone()).collect();
        (nodes, matrix)
    }
}
