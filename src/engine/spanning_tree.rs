//! Minimum spanning trees: Prim (vertex-centred) and Kruskal (edge-centred).
//!
//! Both assume symmetric weights. On a directed graph they still run, using
//! the weights as stored, and log a warning.

use serde::Serialize;

use crate::graph::Graph;
use crate::types::{Distance, Edge, GraphError, GraphResult, Weight, INF};

use super::extract::{get_edges, get_vexs, sorted_edges};
use super::partition::{GroupTable, Partition};

/// Result of Prim's algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimTree {
    /// Index of the vertex the tree was grown from.
    pub start: usize,
    /// Labels in the order they joined the tree, starting with `start`.
    pub vertices: Vec<char>,
    /// Sum of the weights of the edges used.
    pub total_weight: Distance,
}

/// Result of Kruskal's algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KruskalForest {
    /// Accepted edges in acceptance order (ascending weight).
    pub edges: Vec<Edge>,
    /// Sum of the accepted edge weights.
    pub total_weight: Distance,
}

/// State of one vertex in Prim's candidate array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Candidate {
    /// Already part of the tree.
    Absorbed,
    /// Cheapest known edge from the tree.
    Reachable(Weight),
    /// No edge from the tree yet.
    Unreached,
}

/// Grow a minimum spanning tree from `start`.
///
/// Only the component containing `start` is spanned; vertices it cannot reach
/// are left out of the result.
pub fn prim(graph: &Graph, start: usize) -> GraphResult<PrimTree> {
    let n = graph.vertex_count();
    if start >= n {
        return Err(GraphError::InvalidStart {
            index: start,
            count: n,
        });
    }
    warn_if_directed(graph, "Prim");

    // Weights off the diagonal are always positive, so `Absorbed` only ever
    // comes from the tree itself, never from a zero-weight edge.
    let mut candidates: Vec<Candidate> = graph
        .row(start)
        .iter()
        .enumerate()
        .map(|(j, &w)| {
            if j == start {
                Candidate::Absorbed
            } else if w == INF {
                Candidate::Unreached
            } else {
                Candidate::Reachable(w)
            }
        })
        .collect();

    let labels = graph.labels();
    let mut vertices = Vec::with_capacity(n);
    vertices.push(labels[start]);
    let mut total_weight: Distance = 0;

    while let Some((added, weight)) = cheapest(&candidates) {
        vertices.push(labels[added]);
        total_weight += Distance::from(weight);
        candidates[added] = Candidate::Absorbed;

        for (j, slot) in candidates.iter_mut().enumerate() {
            let Some(w) = graph.edge_weight(added, j) else {
                continue;
            };
            match *slot {
                Candidate::Absorbed => {}
                Candidate::Reachable(current) if w >= current => {}
                _ => *slot = Candidate::Reachable(w),
            }
        }
    }

    if vertices.len() < n {
        log::debug!(
            "Prim from {:?} spanned {} of {} vertices",
            labels[start],
            vertices.len(),
            n
        );
    }

    Ok(PrimTree {
        start,
        vertices,
        total_weight,
    })
}

/// Smallest reachable candidate; the lowest index wins ties.
fn cheapest(candidates: &[Candidate]) -> Option<(usize, Weight)> {
    let mut best: Option<(usize, Weight)> = None;
    for (i, candidate) in candidates.iter().enumerate() {
        if let Candidate::Reachable(w) = *candidate {
            if best.is_none_or(|(_, min)| w < min) {
                best = Some((i, w));
            }
        }
    }
    best
}

/// Minimum spanning forest using per-vertex group ids.
pub fn kruskal(graph: &Graph) -> KruskalForest {
    let mut groups = GroupTable::new(get_vexs(graph));
    grow_forest(graph, &mut groups)
}

/// Kruskal's algorithm over any partition of the graph's vertex indices.
///
/// `partition` should start with every vertex in its own group. One that does
/// not cover exactly `0..graph.vertex_count()` is rejected with
/// `DimensionMismatch`.
pub fn kruskal_with<P: Partition>(
    graph: &Graph,
    partition: &mut P,
) -> GraphResult<KruskalForest> {
    if partition.len() != graph.vertex_count() {
        return Err(GraphError::DimensionMismatch {
            expected: graph.vertex_count(),
            got: partition.len(),
        });
    }
    Ok(grow_forest(graph, partition))
}

fn grow_forest<P: Partition>(graph: &Graph, partition: &mut P) -> KruskalForest {
    warn_if_directed(graph, "Kruskal");

    let mut candidates = get_edges(graph);
    sorted_edges(&mut candidates);

    let limit = graph.vertex_count().saturating_sub(1);
    let mut edges = Vec::with_capacity(limit);
    for edge in candidates {
        if edges.len() == limit {
            break;
        }
        if partition.union(edge.start_index, edge.end_index) {
            edges.push(edge);
        }
    }

    let total_weight = edges.iter().map(|e| Distance::from(e.weight)).sum();
    KruskalForest {
        edges,
        total_weight,
    }
}

fn warn_if_directed(graph: &Graph, algorithm: &str) {
    if graph.is_directed() {
        log::warn!(
            "{} expects an undirected graph; running on a directed graph as stored",
            algorithm
        );
    }
}
