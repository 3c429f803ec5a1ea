//! Graph algorithms: extraction, spanning trees and shortest paths.

pub mod extract;
pub mod partition;
pub mod shortest_path;
pub mod spanning_tree;

pub use extract::{get_edges, get_vexs, sorted_edges};
pub use partition::{DisjointSet, GroupTable, Partition};
pub use shortest_path::{dijkstra, shortest_distances, PathResult};
pub use spanning_tree::{kruskal, kruskal_with, prim, KruskalForest, PrimTree};
