//! Dijkstra shortest paths over the adjacency matrix.

use serde::Serialize;

use crate::graph::Graph;
use crate::types::{Distance, GraphError, GraphResult};

/// A shortest path between two vertices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    /// Index of the first vertex.
    pub start: usize,
    /// Index of the last vertex.
    pub end: usize,
    /// Sum of the edge weights along the path.
    pub length: Distance,
    /// Labels from `start` to `end`, inclusive.
    pub vertices: Vec<char>,
    /// Vertex indices from `start` to `end`, inclusive.
    pub indices: Vec<usize>,
    /// Number of vertices on the path.
    pub vertex_count: usize,
}

/// One vertex in Dijkstra's working set.
#[derive(Debug, Clone)]
struct QueueNode {
    index: usize,
    label: char,
    /// Best known distance from the start; `None` while unreached.
    dist: Option<Distance>,
    predecessor: usize,
    predecessor_label: char,
    finalized: bool,
}

/// Working set split into a finalized prefix `nodes[..settled]` and a
/// frontier suffix `nodes[settled..]`.
struct ShortestPathQueue<'g> {
    graph: &'g Graph,
    nodes: Vec<QueueNode>,
    /// Vertex index -> position in `nodes`.
    slot: Vec<usize>,
    settled: usize,
}

impl<'g> ShortestPathQueue<'g> {
    fn new(graph: &'g Graph, start: usize) -> Self {
        let labels = graph.labels();
        let nodes = (0..graph.vertex_count())
            .map(|i| QueueNode {
                index: i,
                label: labels[i],
                dist: if i == start {
                    Some(0)
                } else {
                    graph.edge_weight(start, i).map(Distance::from)
                },
                predecessor: start,
                predecessor_label: labels[start],
                finalized: i == start,
            })
            .collect();

        let mut queue = Self {
            graph,
            nodes,
            slot: (0..graph.vertex_count()).collect(),
            settled: 0,
        };
        queue.swap(start, 0);
        queue.settled = 1;
        queue
    }

    /// Finalize the closest frontier vertex and return its index.
    ///
    /// Returns `None` once every remaining frontier vertex is unreachable.
    fn settle_next(&mut self) -> Option<usize> {
        let (offset, _) = self.nodes[self.settled..]
            .iter()
            .enumerate()
            .filter_map(|(k, node)| node.dist.map(|d| (k, d)))
            .min_by_key(|&(_, d)| d)?;

        let position = self.settled + offset;
        self.swap(position, self.settled);
        self.nodes[self.settled].finalized = true;
        self.settled += 1;
        Some(self.nodes[self.settled - 1].index)
    }

    /// Relax every frontier vertex through the just-finalized vertex `u`.
    fn relax_from(&mut self, u: usize) {
        let (du, label_u) = {
            let node = self.node(u);
            (node.dist.unwrap_or_default(), node.label)
        };
        for node in &mut self.nodes[self.settled..] {
            let Some(w) = self.graph.edge_weight(u, node.index) else {
                continue;
            };
            let candidate = du + Distance::from(w);
            if node.dist.is_none_or(|d| candidate < d) {
                node.dist = Some(candidate);
                node.predecessor = u;
                node.predecessor_label = label_u;
            }
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.nodes.swap(a, b);
        self.slot[self.nodes[a].index] = a;
        self.slot[self.nodes[b].index] = b;
    }

    fn node(&self, vertex: usize) -> &QueueNode {
        &self.nodes[self.slot[vertex]]
    }

    /// Walk predecessor links back from a finalized `end`.
    fn path_to(&self, start: usize, end: usize) -> PathResult {
        let mut indices = vec![end];
        let mut vertices = vec![self.node(end).label];
        let mut current = end;
        while current != start {
            let node = self.node(current);
            debug_assert!(node.finalized);
            vertices.push(node.predecessor_label);
            indices.push(node.predecessor);
            current = node.predecessor;
        }
        indices.reverse();
        vertices.reverse();

        PathResult {
            start,
            end,
            length: self.node(end).dist.unwrap_or_default(),
            vertex_count: indices.len(),
            vertices,
            indices,
        }
    }
}

/// Shortest path from `start` to `end`.
///
/// Fails with `InvalidVertex` for an out-of-range index and `NoPathFound`
/// when `end` cannot be reached.
pub fn dijkstra(graph: &Graph, start: usize, end: usize) -> GraphResult<PathResult> {
    graph.check_vertex(start)?;
    graph.check_vertex(end)?;

    if start == end {
        let label = graph.labels()[start];
        return Ok(PathResult {
            start,
            end,
            length: 0,
            vertices: vec![label],
            indices: vec![start],
            vertex_count: 1,
        });
    }

    let mut queue = ShortestPathQueue::new(graph, start);
    while let Some(u) = queue.settle_next() {
        if u == end {
            return Ok(queue.path_to(start, end));
        }
        queue.relax_from(u);
    }

    log::debug!(
        "no path from {:?} to {:?}",
        graph.labels()[start],
        graph.labels()[end]
    );
    Err(GraphError::NoPathFound { start, end })
}

/// Shortest distance from `start` to every vertex, indexed by vertex.
///
/// Unreachable vertices are `None`; `start` itself is `Some(0)`.
pub fn shortest_distances(graph: &Graph, start: usize) -> GraphResult<Vec<Option<Distance>>> {
    graph.check_vertex(start)?;

    let mut queue = ShortestPathQueue::new(graph, start);
    while let Some(u) = queue.settle_next() {
        queue.relax_from(u);
    }

    Ok((0..graph.vertex_count())
        .map(|v| queue.node(v).dist)
        .collect())
}
