//! Edge and vertex extraction from the adjacency matrix.

use crate::graph::Graph;
use crate::types::{Edge, VertexInfo};

/// All edges of the graph in row-major enumeration order.
///
/// Undirected graphs yield each pair once with `start_index < end_index`.
/// The result always has exactly `graph.edge_count()` entries.
pub fn get_edges(graph: &Graph) -> Vec<Edge> {
    let labels = graph.labels();
    let mut edges = Vec::with_capacity(graph.edge_count());
    for i in 0..graph.vertex_count() {
        let first = if graph.is_directed() { 0 } else { i + 1 };
        for j in first..graph.vertex_count() {
            if let Some(weight) = graph.edge_weight(i, j) {
                edges.push(Edge::new(labels[i], labels[j], i, j, weight));
            }
        }
    }
    edges
}

/// Sort edges ascending by weight, keeping enumeration order among equal weights.
pub fn sorted_edges(edges: &mut [Edge]) {
    edges.sort_by_key(|e| e.weight);
}

/// Per-vertex metadata, each vertex starting in its own group.
pub fn get_vexs(graph: &Graph) -> Vec<VertexInfo> {
    let n = graph.vertex_count();
    let directed = graph.is_directed();
    (0..n)
        .map(|i| {
            let out_degree = (0..n).filter(|&j| graph.edge_weight(i, j).is_some()).count();
            let (degree, in_degree, out_degree) = if directed {
                let in_degree = (0..n).filter(|&j| graph.edge_weight(j, i).is_some()).count();
                (in_degree + out_degree, in_degree, out_degree)
            } else {
                (out_degree, 0, 0)
            };
            VertexInfo {
                label: graph.labels()[i],
                directed,
                visited: false,
                group: i,
                degree,
                in_degree,
                out_degree,
            }
        })
        .collect()
}
