//! Network representations shared across the workspace.
//!
//! # Overview
//!
//! ```text
//! IncidenceMatrix (rows x columns presence)
//!        ↓  IncidenceMatrix::project()
//! AdjacencyMatrix (dense, symmetric, label-indexed)
//!        ↓  codec::to_edge_list()  /  backbone filter
//! Vec<EdgeRecord> (sparse upper triangle)
//!        ↓  WeightedGraph::from_edge_records()
//! WeightedGraph (one layer / year)
//! ```
//!
//! Labels are opaque strings (organization or municipality names). Every
//! representation keeps the label order it was built with so positional
//! and label-based lookups agree.

pub mod edge;
pub mod graph;
pub mod incidence;
pub mod matrix;

pub use edge::EdgeRecord;
pub use graph::WeightedGraph;
pub use incidence::{IncidenceMatrix, Projection};
pub use matrix::AdjacencyMatrix;

use crate::error::{Error, Result};

/// Reject weights that are negative, NaN or infinite.
pub(crate) fn check_weight(row: &str, col: &str, weight: f64) -> Result<()> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidWeight {
            row: row.to_string(),
            col: col.to_string(),
            weight,
        })
    }
}

/// Build a label → position map, rejecting duplicates.
pub(crate) fn index_labels(labels: &[String]) -> Result<std::collections::HashMap<String, usize>> {
    let mut index = std::collections::HashMap::with_capacity(labels.len());
    for (i, label) in labels.iter().enumerate() {
        if index.insert(label.clone(), i).is_some() {
            return Err(Error::DuplicateLabel(label.clone()));
        }
    }
    Ok(index)
}
