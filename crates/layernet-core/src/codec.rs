//! Dense matrix → sparse edge list.
//!
//! Only the strict upper triangle (`i < j`) is scanned, which excludes the
//! diagonal and counts each undirected edge once. Entries `<= 0` are
//! dropped. Output order is the row-major scan order of the upper triangle;
//! nothing is sorted by label or weight.

use crate::model::{AdjacencyMatrix, EdgeRecord};

/// Positional form of an edge: row index, column index, weight.
///
/// The backbone filter works on these so strengths can be read by position
/// without a label round-trip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedEdge {
    /// Row index, always less than `col`.
    pub row: usize,
    pub col: usize,
    /// Strictly positive.
    pub weight: f64,
}

/// Positive upper-triangle entries of `matrix` in row-major order.
#[must_use]
pub fn upper_triangle(matrix: &AdjacencyMatrix) -> Vec<IndexedEdge> {
    let n = matrix.dim();
    let mut edges = Vec::new();
    for row in 0..n {
        for col in row + 1..n {
            let weight = matrix.get(row, col);
            if weight > 0.0 {
                edges.push(IndexedEdge { row, col, weight });
            }
        }
    }
    edges
}

/// Resolve an [`IndexedEdge`] against the labels of `matrix`.
///
/// # Panics
///
/// Panics if the indices are out of range for `matrix`; edges produced by
/// [`upper_triangle`] on the same matrix are always in range.
#[must_use]
pub fn label_edge(matrix: &AdjacencyMatrix, edge: IndexedEdge) -> EdgeRecord {
    let labels = matrix.labels();
    EdgeRecord::new(labels[edge.row].clone(), labels[edge.col].clone(), edge.weight)
}

/// Sparse edge list of a symmetric adjacency matrix.
#[must_use]
pub fn to_edge_list(matrix: &AdjacencyMatrix) -> Vec<EdgeRecord> {
    upper_triangle(matrix)
        .into_iter()
        .map(|edge| label_edge(matrix, edge))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_node_example() {
        let m = AdjacencyMatrix::from_rows(
            ["A", "B", "C"],
            &[
                vec![0.0, 10.0, 0.0],
                vec![10.0, 0.0, 5.0],
                vec![0.0, 5.0, 0.0],
            ],
        )
        .expect("valid matrix");

        assert_eq!(
            to_edge_list(&m),
            vec![EdgeRecord::new("A", "B", 10.0), EdgeRecord::new("B", "C", 5.0)]
        );
    }

    #[test]
    fn diagonal_is_ignored() {
        let m = AdjacencyMatrix::from_rows(["A", "B"], &[vec![4.0, 1.0], vec![1.0, 9.0]])
            .expect("valid matrix");
        assert_eq!(to_edge_list(&m), vec![EdgeRecord::new("A", "B", 1.0)]);
    }

    #[test]
    fn order_follows_rows_not_labels() {
        // Labels deliberately out of lexical order.
        let m = AdjacencyMatrix::from_rows(
            ["Z", "M", "A"],
            &[
                vec![0.0, 1.0, 2.0],
                vec![1.0, 0.0, 3.0],
                vec![2.0, 3.0, 0.0],
            ],
        )
        .expect("valid matrix");
        let edges = to_edge_list(&m);
        assert_eq!(
            edges,
            vec![
                EdgeRecord::new("Z", "M", 1.0),
                EdgeRecord::new("Z", "A", 2.0),
                EdgeRecord::new("M", "A", 3.0),
            ]
        );
    }

    #[test]
    fn empty_and_zero_matrices_yield_nothing() {
        let empty = AdjacencyMatrix::zeros(Vec::<String>::new()).expect("empty");
        assert!(to_edge_list(&empty).is_empty());

        let zeros = AdjacencyMatrix::zeros(["A", "B", "C"]).expect("zeros");
        assert!(to_edge_list(&zeros).is_empty());
    }

    #[test]
    fn indexed_and_labelled_forms_agree() {
        let m = AdjacencyMatrix::from_rows(
            ["A", "B", "C"],
            &[
                vec![0.0, 0.5, 0.0],
                vec![0.5, 0.0, 0.0],
                vec![0.0, 0.0, 0.0],
            ],
        )
        .expect("valid matrix");
        let indexed = upper_triangle(&m);
        assert_eq!(indexed, vec![IndexedEdge { row: 0, col: 1, weight: 0.5 }]);
        assert_eq!(label_edge(&m, indexed[0]), EdgeRecord::new("A", "B", 0.5));
    }
}
