use serde::{Deserialize, Serialize};

/// One undirected weighted edge in sparse form.
///
/// `source`/`target` follow the row/column order of the matrix the record
/// was extracted from (row label first), not any lexical ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Row-side label.
    pub source: String,
    /// Column-side label.
    pub target: String,
    /// Edge weight, always positive when produced by the codec.
    pub weight: f64,
}

impl EdgeRecord {
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }

    /// Return `true` if this record joins `a` and `b` in either orientation.
    #[must_use]
    pub fn joins(&self, a: &str, b: &str) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}
