//! Bipartite incidence matrices and their one-mode projections.
//!
//! Rows are one node type (municipalities), columns the other (criminal
//! organizations). An entry counts presence, normally 0 or 1. Projecting
//! onto either side yields the weighted co-occurrence [`AdjacencyMatrix`]
//! that the backbone filter consumes.

use std::collections::HashMap;

use nalgebra::DMatrix;
use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::model::{AdjacencyMatrix, check_weight, index_labels};

/// Which node type the projection keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// `B·Bᵗ`: weight = number of column entities two rows share.
    OntoRows,
    /// `Bᵗ·B`: weight = number of row entities two columns share.
    OntoColumns,
}

/// Rectangular presence matrix with row and column labels.
#[derive(Debug, Clone, PartialEq)]
pub struct IncidenceMatrix {
    row_labels: Vec<String>,
    column_labels: Vec<String>,
    column_index: HashMap<String, usize>,
    values: DMatrix<f64>,
}

impl IncidenceMatrix {
    /// # Errors
    ///
    /// - [`Error::LabelCountMismatch`] if either label list does not match
    ///   its dimension.
    /// - [`Error::DuplicateLabel`] if a row or column label repeats.
    /// - [`Error::InvalidWeight`] for negative or non-finite entries.
    pub fn new(
        row_labels: Vec<String>,
        column_labels: Vec<String>,
        values: DMatrix<f64>,
    ) -> Result<Self> {
        if row_labels.len() != values.nrows() {
            return Err(Error::LabelCountMismatch {
                labels: row_labels.len(),
                dim: values.nrows(),
            });
        }
        if column_labels.len() != values.ncols() {
            return Err(Error::LabelCountMismatch {
                labels: column_labels.len(),
                dim: values.ncols(),
            });
        }
        index_labels(&row_labels)?;
        let column_index = index_labels(&column_labels)?;
        for i in 0..values.nrows() {
            for j in 0..values.ncols() {
                check_weight(&row_labels[i], &column_labels[j], values[(i, j)])?;
            }
        }
        Ok(Self {
            row_labels,
            column_labels,
            column_index,
            values,
        })
    }

    /// Build from row slices.
    ///
    /// # Errors
    ///
    /// Same as [`IncidenceMatrix::new`]; a ragged row reports
    /// [`Error::LabelCountMismatch`] against the column labels.
    pub fn from_rows<R: Into<String>, C: Into<String>>(
        row_labels: impl IntoIterator<Item = R>,
        column_labels: impl IntoIterator<Item = C>,
        rows: &[Vec<f64>],
    ) -> Result<Self> {
        let row_labels: Vec<String> = row_labels.into_iter().map(Into::into).collect();
        let column_labels: Vec<String> = column_labels.into_iter().map(Into::into).collect();
        let ncols = column_labels.len();
        if let Some(bad) = rows.iter().find(|row| row.len() != ncols) {
            return Err(Error::LabelCountMismatch {
                labels: ncols,
                dim: bad.len(),
            });
        }
        let values = DMatrix::from_fn(rows.len(), ncols, |i, j| rows[i][j]);
        Self::new(row_labels, column_labels, values)
    }

    #[must_use]
    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    #[must_use]
    pub fn column_labels(&self) -> &[String] {
        &self.column_labels
    }

    #[must_use]
    pub fn values(&self) -> &DMatrix<f64> {
        &self.values
    }

    /// One-mode projection with the diagonal zeroed (no self-loops).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWeight`] if a product entry overflows to
    /// infinity.
    #[instrument(skip(self), fields(rows = self.row_labels.len(), cols = self.column_labels.len()))]
    pub fn project(&self, onto: Projection) -> Result<AdjacencyMatrix> {
        let (labels, mut product) = match onto {
            Projection::OntoRows => (
                self.row_labels.clone(),
                &self.values * self.values.transpose(),
            ),
            Projection::OntoColumns => (
                self.column_labels.clone(),
                self.values.transpose() * &self.values,
            ),
        };
        product.fill_diagonal(0.0);
        debug!(nodes = labels.len(), "projected incidence matrix");
        AdjacencyMatrix::new(labels, product)
    }

    /// Fold column `absorb` into column `keep` and drop `absorb`.
    ///
    /// The kept column becomes `1` wherever either column was present and
    /// `0` elsewhere; it stays at its original position. Used to merge an
    /// organization with an alias or splinter recorded separately.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownLabel`] if either column is absent.
    /// - [`Error::DuplicateLabel`] if `keep == absorb`.
    pub fn merge_columns(&self, keep: &str, absorb: &str) -> Result<Self> {
        let k = self
            .column_index
            .get(keep)
            .copied()
            .ok_or_else(|| Error::UnknownLabel(keep.to_string()))?;
        let a = self
            .column_index
            .get(absorb)
            .copied()
            .ok_or_else(|| Error::UnknownLabel(absorb.to_string()))?;
        if k == a {
            return Err(Error::DuplicateLabel(keep.to_string()));
        }

        let mut values = self.values.clone();
        for i in 0..values.nrows() {
            let present = values[(i, k)] + values[(i, a)] > 0.0;
            values[(i, k)] = if present { 1.0 } else { 0.0 };
        }
        let values = values.remove_column(a);

        let mut column_labels = self.column_labels.clone();
        column_labels.remove(a);
        Self::new(self.row_labels.clone(), column_labels, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> IncidenceMatrix {
        // Three municipalities, three organizations.
        IncidenceMatrix::from_rows(
            ["m1", "m2", "m3"],
            ["Sinaloa", "Sinaloa_Family", "Zetas"],
            &[
                vec![1.0, 0.0, 1.0],
                vec![1.0, 1.0, 1.0],
                vec![0.0, 1.0, 0.0],
            ],
        )
        .expect("valid incidence")
    }

    #[test]
    fn projection_onto_columns_counts_shared_rows() {
        let adj = sample().project(Projection::OntoColumns).expect("projection");
        assert_eq!(adj.labels(), ["Sinaloa", "Sinaloa_Family", "Zetas"]);
        assert_eq!(adj.weight("Sinaloa", "Zetas").expect("known"), 2.0);
        assert_eq!(adj.weight("Sinaloa", "Sinaloa_Family").expect("known"), 1.0);
        assert_eq!(adj.weight("Sinaloa_Family", "Zetas").expect("known"), 1.0);
        assert!(adj.is_symmetric(0.0));
    }

    #[test]
    fn projection_onto_rows_counts_shared_columns() {
        let adj = sample().project(Projection::OntoRows).expect("projection");
        assert_eq!(adj.labels(), ["m1", "m2", "m3"]);
        assert_eq!(adj.weight("m1", "m2").expect("known"), 2.0);
        assert_eq!(adj.weight("m1", "m3").expect("known"), 0.0);
        assert_eq!(adj.weight("m2", "m3").expect("known"), 1.0);
    }

    #[test]
    fn projection_zeroes_the_diagonal() {
        let adj = sample().project(Projection::OntoColumns).expect("projection");
        for i in 0..adj.dim() {
            assert_eq!(adj.get(i, i), 0.0);
        }
    }

    #[test]
    fn merge_columns_is_a_presence_union() {
        let merged = sample()
            .merge_columns("Sinaloa", "Sinaloa_Family")
            .expect("merge");
        assert_eq!(merged.column_labels(), ["Sinaloa", "Zetas"]);
        let sinaloa: Vec<f64> = merged.values().column(0).iter().copied().collect();
        assert_eq!(sinaloa, vec![1.0, 1.0, 1.0]);
        let zetas: Vec<f64> = merged.values().column(1).iter().copied().collect();
        assert_eq!(zetas, vec![1.0, 1.0, 0.0]);
    }

    #[test]
    fn merge_columns_rejects_unknown_and_identical() {
        assert_eq!(
            sample().merge_columns("Sinaloa", "Gulf"),
            Err(Error::UnknownLabel("Gulf".to_string()))
        );
        assert_eq!(
            sample().merge_columns("Zetas", "Zetas"),
            Err(Error::DuplicateLabel("Zetas".to_string()))
        );
    }

    #[test]
    fn label_count_must_match() {
        let err = IncidenceMatrix::new(
            vec!["m1".into()],
            vec!["a".into(), "b".into()],
            DMatrix::zeros(2, 2),
        )
        .expect_err("row mismatch");
        assert_eq!(err, Error::LabelCountMismatch { labels: 1, dim: 2 });
    }
}
