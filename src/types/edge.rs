//! The edge snapshot produced by edge extraction.

use serde::Serialize;

use super::Weight;

/// A weighted edge between two vertices, copied out of the adjacency matrix.
///
/// For undirected graphs `start` is always the lower-indexed endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// Label of the start vertex.
    pub start: char,
    /// Label of the end vertex.
    pub end: char,
    /// Matrix index of the start vertex.
    pub start_index: usize,
    /// Matrix index of the end vertex.
    pub end_index: usize,
    /// Edge weight (always finite and positive).
    pub weight: Weight,
}

impl Edge {
    /// Create a new edge.
    pub fn new(
        start: char,
        end: char,
        start_index: usize,
        end_index: usize,
        weight: Weight,
    ) -> Self {
        Self {
            start,
            end,
            start_index,
            end_index,
            weight,
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}--{} ({})", self.start, self.end, self.weight)
    }
}
