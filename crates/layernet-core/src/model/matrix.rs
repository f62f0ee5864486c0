//! Dense, label-indexed adjacency matrices.
//!
//! An [`AdjacencyMatrix`] is the hand-off format between the bipartite
//! projection and everything downstream. Rows and columns share one label
//! list in the same order. Construction validates shape, label uniqueness
//! and weight domain; symmetry is the caller's contract and is only
//! reported through [`AdjacencyMatrix::is_symmetric`].

use std::collections::HashMap;

use nalgebra::DMatrix;

use crate::error::{Error, Result};
use crate::model::{check_weight, index_labels};

/// Symmetric weighted adjacency matrix with one label per row/column.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyMatrix {
    labels: Vec<String>,
    index: HashMap<String, usize>,
    values: DMatrix<f64>,
}

impl AdjacencyMatrix {
    /// Wrap `values` with `labels`.
    ///
    /// # Errors
    ///
    /// - [`Error::NotSquare`] if `values` is not square.
    /// - [`Error::LabelCountMismatch`] if `labels.len()` differs from the
    ///   matrix dimension.
    /// - [`Error::DuplicateLabel`] if a label repeats.
    /// - [`Error::InvalidWeight`] for negative or non-finite entries.
    pub fn new(labels: Vec<String>, values: DMatrix<f64>) -> Result<Self> {
        if values.nrows() != values.ncols() {
            return Err(Error::NotSquare {
                rows: values.nrows(),
                cols: values.ncols(),
            });
        }
        if labels.len() != values.nrows() {
            return Err(Error::LabelCountMismatch {
                labels: labels.len(),
                dim: values.nrows(),
            });
        }
        let index = index_labels(&labels)?;
        for i in 0..values.nrows() {
            for j in 0..values.ncols() {
                check_weight(&labels[i], &labels[j], values[(i, j)])?;
            }
        }
        Ok(Self {
            labels,
            index,
            values,
        })
    }

    /// Build from row slices, e.g. literal test fixtures.
    ///
    /// # Errors
    ///
    /// Same as [`AdjacencyMatrix::new`]; a ragged row reports
    /// [`Error::NotSquare`] with that row's length.
    pub fn from_rows<L: Into<String>>(
        labels: impl IntoIterator<Item = L>,
        rows: &[Vec<f64>],
    ) -> Result<Self> {
        let n = rows.len();
        if let Some(bad) = rows.iter().find(|row| row.len() != n) {
            return Err(Error::NotSquare {
                rows: n,
                cols: bad.len(),
            });
        }
        let values = DMatrix::from_fn(n, n, |i, j| rows[i][j]);
        Self::new(labels.into_iter().map(Into::into).collect(), values)
    }

    /// All-zero matrix over `labels`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateLabel`] if a label repeats.
    pub fn zeros<L: Into<String>>(labels: impl IntoIterator<Item = L>) -> Result<Self> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let n = labels.len();
        Self::new(labels, DMatrix::zeros(n, n))
    }

    /// Number of rows (= columns = labels).
    #[must_use]
    pub fn dim(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Label of row/column `i`.
    #[must_use]
    pub fn label(&self, i: usize) -> Option<&str> {
        self.labels.get(i).map(String::as_str)
    }

    /// Position of `label`.
    #[must_use]
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    #[must_use]
    pub fn values(&self) -> &DMatrix<f64> {
        &self.values
    }

    /// Entry at positions `(i, j)`. Panics if out of bounds, like indexing.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[(i, j)]
    }

    /// Entry at labels `(a, b)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLabel`] if either label is absent.
    pub fn weight(&self, a: &str, b: &str) -> Result<f64> {
        let i = self
            .index_of(a)
            .ok_or_else(|| Error::UnknownLabel(a.to_string()))?;
        let j = self
            .index_of(b)
            .ok_or_else(|| Error::UnknownLabel(b.to_string()))?;
        Ok(self.values[(i, j)])
    }

    /// Node strengths: full row sums, in label order.
    #[must_use]
    pub fn strengths(&self) -> Vec<f64> {
        (0..self.dim()).map(|i| self.values.row(i).sum()).collect()
    }

    /// Strength of `label`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLabel`] if the label is absent.
    pub fn strength(&self, label: &str) -> Result<f64> {
        let i = self
            .index_of(label)
            .ok_or_else(|| Error::UnknownLabel(label.to_string()))?;
        Ok(self.values.row(i).sum())
    }

    /// Total network weight: the sum of all entries halved, since every
    /// undirected edge appears twice. May be fractional if the diagonal is
    /// non-zero.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.values.sum() / 2.0
    }

    /// Return `true` if `M[i, j]` and `M[j, i]` agree within `tolerance`
    /// everywhere.
    #[must_use]
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        let n = self.dim();
        (0..n).all(|i| {
            (i + 1..n).all(|j| (self.values[(i, j)] - self.values[(j, i)]).abs() <= tolerance)
        })
    }
}
