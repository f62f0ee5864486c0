//! Validation errors for matrices, layers and layered inputs.
//!
//! Every variant is an input defect detected before any algorithm runs.
//! Degenerate-but-valid inputs (an all-zero matrix, an edgeless layer) are
//! not errors.

/// Crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Matrix is not square.
    #[error("matrix is not square: {rows} rows x {cols} columns")]
    NotSquare { rows: usize, cols: usize },

    /// Number of labels does not match the matrix dimension they index.
    #[error("label count mismatch: {labels} labels for a dimension of {dim}")]
    LabelCountMismatch { labels: usize, dim: usize },

    /// The same label indexes two rows or columns.
    #[error("duplicate label: {0}")]
    DuplicateLabel(String),

    /// A label was requested that the matrix or graph does not contain.
    #[error("unknown label: {0}")]
    UnknownLabel(String),

    /// Weight is negative, NaN or infinite.
    #[error("invalid weight {weight} at ({row}, {col})")]
    InvalidWeight { row: String, col: String, weight: f64 },

    #[error("self-loop on {0} is not allowed")]
    SelfLoop(String),

    #[error("duplicate edge between {0} and {1}")]
    DuplicateEdge(String, String),

    /// A year was requested that the layered input does not contain.
    #[error("year {0} not present in the layer sequence")]
    MissingYear(i32),

    #[error("no layers supplied")]
    NoLayers,

    /// Significance level outside `[0, 1]` or not finite.
    #[error("alpha must be a finite value in [0, 1], got {0}")]
    InvalidAlpha(f64),
}
