//! Fluent API for building Graph instances.

use crate::types::{GraphError, GraphResult, Weight, DEFAULT_MAX_VERTICES, INF};

use super::Graph;

/// Fluent builder for constructing a Graph vertex by vertex.
///
/// All validation happens in [`GraphBuilder::build`].
pub struct GraphBuilder {
    max_vertices: usize,
    directed: bool,
    labels: Vec<char>,
    links: Vec<(usize, usize, Weight)>,
}

impl GraphBuilder {
    /// Create a new undirected builder with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_VERTICES)
    }

    /// Create a new undirected builder with a specific vertex capacity.
    pub fn with_capacity(max_vertices: usize) -> Self {
        Self {
            max_vertices,
            directed: false,
            labels: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Choose between a directed and an undirected graph.
    pub fn directed(&mut self, directed: bool) -> &mut Self {
        self.directed = directed;
        self
    }

    /// Add a vertex, returning its index.
    pub fn add_vertex(&mut self, label: char) -> usize {
        self.labels.push(label);
        self.labels.len() - 1
    }

    /// Add several vertices at once.
    pub fn add_vertices(&mut self, labels: &[char]) -> &mut Self {
        self.labels.extend_from_slice(labels);
        self
    }

    /// Add an edge between two vertex indices. A later link overwrites an earlier one.
    pub fn link(&mut self, from: usize, to: usize, weight: Weight) -> &mut Self {
        self.links.push((from, to, weight));
        self
    }

    /// Build the final Graph.
    pub fn build(&self) -> GraphResult<Graph> {
        let n = self.labels.len();
        let mut matrix: Vec<Vec<Weight>> = (0..n)
            .map(|i| (0..n).map(|j| if i == j { 0 } else { INF }).collect())
            .collect();

        for &(from, to, weight) in &self.links {
            for index in [from, to] {
                if index >= n {
                    return Err(GraphError::InvalidVertex { index, count: n });
                }
            }
            matrix[from][to] = weight;
            if !self.directed {
                matrix[to][from] = weight;
            }
        }

        Graph::from_matrix_with_capacity(&self.labels, &matrix, self.directed, self.max_vertices)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
