//! Built-in sample graphs for demos, tests and benchmarks.

use crate::types::{GraphResult, Weight, INF};

use super::{Graph, GraphBuilder};

/// The eight-vertex directed sample (`a`..`h`).
///
/// `h` has no outgoing edges and nothing reaches `a`.
pub fn directed_sample() -> GraphResult<Graph> {
    let labels = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];
    let matrix: Vec<Vec<Weight>> = vec![
        vec![0, 9, 14, 15, INF, INF, INF, INF],
        vec![INF, 0, INF, INF, 24, INF, INF, INF],
        vec![INF, INF, 0, INF, 18, 30, INF, INF],
        vec![INF, INF, INF, 0, INF, 20, INF, 44],
        vec![INF, INF, INF, INF, 0, 2, INF, 19],
        vec![INF, INF, INF, INF, INF, 0, 11, 16],
        vec![INF, INF, INF, INF, INF, INF, 0, 3],
        vec![INF, INF, INF, INF, INF, INF, INF, 0],
    ];
    Graph::from_matrix(&labels, &matrix, true)
}

/// A seven-vertex connected undirected sample (`a`..`g`) whose MST weighs 39.
pub fn undirected_sample() -> GraphResult<Graph> {
    let mut builder = GraphBuilder::new();
    builder
        .add_vertices(&['a', 'b', 'c', 'd', 'e', 'f', 'g'])
        .link(0, 1, 7)
        .link(0, 3, 5)
        .link(1, 2, 8)
        .link(1, 3, 9)
        .link(1, 4, 7)
        .link(2, 4, 5)
        .link(3, 4, 15)
        .link(3, 5, 6)
        .link(4, 5, 8)
        .link(4, 6, 9)
        .link(5, 6, 11);
    builder.build()
}
