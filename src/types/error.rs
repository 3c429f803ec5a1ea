//! Error types for the matgraph library.

use std::collections::TryReserveError;

use thiserror::Error;

/// All errors that can occur in the matgraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Vertex index outside `[0, count)`.
    #[error("Vertex index {index} out of range (graph has {count} vertices)")]
    InvalidVertex { index: usize, count: usize },

    /// Start vertex index outside `[0, count)`.
    #[error("Start vertex {index} out of range (graph has {count} vertices)")]
    InvalidStart { index: usize, count: usize },

    /// Reverse lookup found no vertex with this label.
    #[error("No vertex labelled {0:?}")]
    LabelNotFound(char),

    /// The end vertex cannot be reached from the start vertex.
    #[error("No path from vertex {start} to vertex {end}")]
    NoPathFound { start: usize, end: usize },

    /// Vertex count exceeds the configured capacity.
    #[error("Vertex capacity exceeded: {count} > {max}")]
    CapacityExceeded { count: usize, max: usize },

    /// Weight matrix is not square or does not match the label count.
    #[error("Weight matrix dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Diagonal entry not zero, or off-diagonal entry not positive.
    #[error("Invalid weight {weight} at ({row}, {col})")]
    InvalidWeight { row: usize, col: usize, weight: i32 },

    /// Undirected graph whose matrix is not symmetric.
    #[error("Undirected graph has asymmetric weights at ({row}, {col})")]
    AsymmetricMatrix { row: usize, col: usize },

    /// Storage for the graph could not be allocated.
    #[error("Allocation failed: {0}")]
    ResourceExhausted(#[from] TryReserveError),
}

/// Convenience result type for matgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
