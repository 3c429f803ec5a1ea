//! In-memory graph store and traversal.

pub mod builder;
pub mod matrix_graph;
pub mod sample;
pub mod traversal;

pub use builder::GraphBuilder;
pub use matrix_graph::Graph;
pub use sample::{directed_sample, undirected_sample};
pub use traversal::{bfs_from, bfs_order, dfs_from, dfs_order, traverse_bfs, traverse_dfs};
