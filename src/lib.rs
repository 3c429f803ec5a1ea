//! matgraph: a small weighted graph library over a dense adjacency matrix.
//!
//! Provides depth-first and breadth-first traversal, minimum spanning trees
//! (Prim, Kruskal) and Dijkstra shortest paths with path reconstruction.
//! Graphs are immutable once built; every algorithm borrows the graph and
//! returns an owned result.

pub mod cli;
pub mod engine;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{
    dijkstra, get_edges, get_vexs, kruskal, kruskal_with, prim, shortest_distances, sorted_edges,
    DisjointSet, GroupTable, KruskalForest, Partition, PathResult, PrimTree,
};
pub use graph::{
    bfs_from, dfs_from, directed_sample, traverse_bfs, traverse_dfs, undirected_sample, Graph,
    GraphBuilder,
};
pub use types::{
    Distance, Edge, GraphError, GraphResult, VertexInfo, Weight, DEFAULT_MAX_VERTICES, INF,
};
