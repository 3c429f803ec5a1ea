//! Per-vertex metadata used by Kruskal's grouping.

use serde::Serialize;

/// Snapshot of one vertex: label, degree counts and Kruskal scratch state.
///
/// `visited` and `group` belong to a single algorithm run; they are not
/// graph state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VertexInfo {
    /// Vertex label.
    pub label: char,
    /// Copy of the graph's directed flag.
    pub directed: bool,
    /// Whether an accepted edge has touched this vertex.
    pub visited: bool,
    /// Group identifier; starts as the vertex's own index.
    pub group: usize,
    /// Total degree (in + out for directed graphs).
    pub degree: usize,
    /// In-degree. Always 0 for undirected graphs.
    pub in_degree: usize,
    /// Out-degree. Always 0 for undirected graphs.
    pub out_degree: usize,
}
