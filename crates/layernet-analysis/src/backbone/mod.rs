//! Noise-corrected backbone extraction.
//!
//! # Overview
//!
//! Keeps only the edges of a weighted co-occurrence network whose weight is
//! higher than a strength-preserving null model would produce by chance.
//!
//! ## Null model
//!
//! With node strengths `s_i` (row sums) and total weight `W` (matrix sum
//! halved), the `W` units of weight are treated as independent trials, each
//! landing on pair `(i, j)` with probability
//!
//! ```text
//! p_ij = clip(s_i * s_j / W², 0, 1)
//! ```
//!
//! ## Test
//!
//! An edge of weight `w` is significant when
//! `P(X >= w) < alpha` for `X ~ Binomial(W, p_ij)`.
//!
//! ## Degenerate input
//!
//! `W == 0` yields an empty backbone without computing anything else.

pub mod binomial;

use layernet_core::codec::{IndexedEdge, label_edge, upper_triangle};
use layernet_core::{AdjacencyMatrix, BackboneConfig, EdgeRecord, TrialCount};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use self::binomial::upper_tail_p_value;

/// A candidate edge with its null-model probability and p-value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredEdge {
    /// The candidate edge as it appears in the edge list.
    pub record: EdgeRecord,
    /// `p_ij` after clipping to `[0, 1]`.
    pub p_null: f64,
    /// `P(X >= weight)` under the null.
    pub p_value: f64,
}

impl ScoredEdge {
    #[must_use]
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}

/// Score every positive upper-triangle edge of `matrix`.
///
/// Order matches [`layernet_core::to_edge_list`]. Returns an empty vector
/// when the total weight is zero.
#[must_use]
#[instrument(skip(matrix), fields(nodes = matrix.dim()))]
pub fn score_edges(matrix: &AdjacencyMatrix, trial_count: TrialCount) -> Vec<ScoredEdge> {
    let total = matrix.total_weight();
    if total == 0.0 {
        debug!("zero total weight; empty backbone");
        return Vec::new();
    }

    let trials = trial_count.resolve(total);
    if trials.fract() != 0.0 {
        warn!(trials, "fractional binomial trial count");
    }
    if !matrix.is_symmetric(1e-9) {
        warn!("adjacency matrix is not symmetric; strengths use row sums");
    }

    let strengths = matrix.strengths();
    let squared_total = total * total;

    upper_triangle(matrix)
        .into_iter()
        .map(|edge| {
            let IndexedEdge { row, col, weight } = edge;
            let p_null = (strengths[row] * strengths[col] / squared_total).clamp(0.0, 1.0);
            let p_value = upper_tail_p_value(weight, trials, p_null);
            ScoredEdge {
                record: label_edge(matrix, edge),
                p_null,
                p_value,
            }
        })
        .collect()
}

/// Backbone of `matrix` at significance level `alpha`, passing the total
/// weight to the binomial unchanged.
#[must_use]
pub fn extract_backbone(matrix: &AdjacencyMatrix, alpha: f64) -> Vec<EdgeRecord> {
    filter(matrix, alpha, TrialCount::Exact)
}

/// Backbone of `matrix` using `config`'s alpha and trial-count policy.
///
/// # Errors
///
/// Returns [`layernet_core::Error::InvalidAlpha`] if `config.alpha` is not
/// a finite value in `[0, 1]`.
pub fn extract_backbone_with(
    matrix: &AdjacencyMatrix,
    config: &BackboneConfig,
) -> layernet_core::Result<Vec<EdgeRecord>> {
    config.validate()?;
    Ok(filter(matrix, config.alpha, config.trial_count))
}

#[instrument(skip(matrix), fields(nodes = matrix.dim()))]
fn filter(matrix: &AdjacencyMatrix, alpha: f64, trial_count: TrialCount) -> Vec<EdgeRecord> {
    let scored = score_edges(matrix, trial_count);
    let candidates = scored.len();
    let kept: Vec<EdgeRecord> = scored
        .into_iter()
        .filter(|edge| edge.is_significant(alpha))
        .map(|edge| edge.record)
        .collect();
    debug!(candidates, kept = kept.len(), "backbone filtered");
    kept
}
