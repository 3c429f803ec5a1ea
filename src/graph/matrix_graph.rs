//! Core graph structure: labelled vertices over a dense weight matrix.

use std::fmt;

use crate::types::{GraphError, GraphResult, Weight, DEFAULT_MAX_VERTICES, INF};

/// A weighted graph stored as a dense adjacency matrix.
///
/// The matrix is validated once at construction and never changes afterwards,
/// so a `Graph` can be shared freely between readers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    /// Vertex labels, indexed by matrix position.
    labels: Vec<char>,
    /// Row-major `n * n` weights; `INF` marks a missing edge.
    weights: Vec<Weight>,
    /// Whether `weights[i][j]` and `weights[j][i]` are independent.
    directed: bool,
    /// Finite off-diagonal entries (unordered pairs when undirected).
    edge_count: usize,
    /// Maximum number of vertices this graph was allowed to hold.
    capacity: usize,
}

impl Graph {
    /// Build a graph from labels and a square weight matrix using the default capacity.
    pub fn from_matrix(
        labels: &[char],
        matrix: &[Vec<Weight>],
        directed: bool,
    ) -> GraphResult<Self> {
        Self::from_matrix_with_capacity(labels, matrix, directed, DEFAULT_MAX_VERTICES)
    }

    /// Build a graph, rejecting more than `max_vertices` vertices.
    pub fn from_matrix_with_capacity(
        labels: &[char],
        matrix: &[Vec<Weight>],
        directed: bool,
        max_vertices: usize,
    ) -> GraphResult<Self> {
        // The matrix holds at most n(n-1) edges, so bounding n bounds the edge count too.
        let n = labels.len();
        if n > max_vertices {
            return Err(GraphError::CapacityExceeded {
                count: n,
                max: max_vertices,
            });
        }
        if matrix.len() != n {
            return Err(GraphError::DimensionMismatch {
                expected: n,
                got: matrix.len(),
            });
        }
        if let Some(row) = matrix.iter().find(|row| row.len() != n) {
            return Err(GraphError::DimensionMismatch {
                expected: n,
                got: row.len(),
            });
        }

        for (i, row) in matrix.iter().enumerate() {
            for (j, &w) in row.iter().enumerate() {
                let valid = if i == j { w == 0 } else { w > 0 };
                if !valid {
                    return Err(GraphError::InvalidWeight {
                        row: i,
                        col: j,
                        weight: w,
                    });
                }
                if !directed && j > i && w != matrix[j][i] {
                    return Err(GraphError::AsymmetricMatrix { row: i, col: j });
                }
            }
        }

        let mut stored_labels = Vec::new();
        stored_labels.try_reserve_exact(n)?;
        stored_labels.extend_from_slice(labels);

        let mut weights = Vec::new();
        weights.try_reserve_exact(n * n)?;
        for row in matrix {
            weights.extend_from_slice(row);
        }

        let edge_count = matrix
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .filter(|&(j, &w)| w != INF && if directed { i != j } else { j > i })
                    .count()
            })
            .sum();

        Ok(Self {
            labels: stored_labels,
            weights,
            directed,
            edge_count,
            capacity: max_vertices,
        })
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph is directed.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// The vertex capacity the graph was built with.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// All labels in index order.
    pub fn labels(&self) -> &[char] {
        &self.labels
    }

    /// Label of vertex `index`.
    pub fn label(&self, index: usize) -> GraphResult<char> {
        self.labels
            .get(index)
            .copied()
            .ok_or_else(|| self.invalid_vertex(index))
    }

    /// Index of the first vertex carrying `label`.
    pub fn position(&self, label: char) -> GraphResult<usize> {
        self.labels
            .iter()
            .position(|&l| l == label)
            .ok_or(GraphError::LabelNotFound(label))
    }

    /// Raw matrix entry from `from` to `to`: 0 on the diagonal, `INF` for no edge.
    pub fn weight(&self, from: usize, to: usize) -> GraphResult<Weight> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        Ok(self.weights[from * self.vertex_count() + to])
    }

    /// Weight of the edge from `from` to `to`, if one exists.
    ///
    /// Returns `None` for the diagonal, missing edges and out-of-range indices.
    pub fn edge_weight(&self, from: usize, to: usize) -> Option<Weight> {
        match self.weight(from, to) {
            Ok(w) if w != 0 && w != INF => Some(w),
            _ => None,
        }
    }

    /// Neighbors of `index` in ascending index order.
    ///
    /// An out-of-range index has no neighbors.
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.row(index)
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w != 0 && w != INF)
            .map(|(j, _)| j)
    }

    /// One matrix row, or an empty slice for an out-of-range index.
    pub fn row(&self, index: usize) -> &[Weight] {
        let n = self.vertex_count();
        if index < n {
            &self.weights[index * n..(index + 1) * n]
        } else {
            &[]
        }
    }

    /// Error unless `index` names a vertex.
    pub fn check_vertex(&self, index: usize) -> GraphResult<()> {
        if index < self.vertex_count() {
            Ok(())
        } else {
            Err(self.invalid_vertex(index))
        }
    }

    fn invalid_vertex(&self, index: usize) -> GraphError {
        GraphError::InvalidVertex {
            index,
            count: self.vertex_count(),
        }
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.directed { "Directed" } else { "Undirected" };
        writeln!(f, "{} graph", kind)?;
        writeln!(
            f,
            "Vertices: {}    Edges: {}",
            self.vertex_count(),
            self.edge_count
        )?;
        write!(f, "     ")?;
        for label in &self.labels {
            write!(f, "{:>5}", label)?;
        }
        writeln!(f)?;
        for (i, label) in self.labels.iter().enumerate() {
            write!(f, "{:>5}", label)?;
            for &w in self.row(i) {
                if w == INF {
                    write!(f, "{:>5}", "INF")?;
                } else {
                    write!(f, "{:>5}", w)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
