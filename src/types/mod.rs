//! Shared data types for the matgraph library.

pub mod edge;
pub mod error;
pub mod vertex;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use vertex::VertexInfo;

/// Weight of a single edge as stored in the adjacency matrix.
pub type Weight = i32;

/// Accumulated path or tree weight.
pub type Distance = i64;

/// Matrix sentinel meaning "no edge".
pub const INF: Weight = Weight::MAX;

/// Default vertex capacity of a graph.
pub const DEFAULT_MAX_VERTICES: usize = 10;
