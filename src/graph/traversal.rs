//! Graph traversal algorithms (DFS, BFS).
//!
//! Neighbors are always visited lowest index first, so both orders are fully
//! determined by the matrix.

use std::collections::VecDeque;

use crate::types::{GraphError, GraphResult};

use super::Graph;

/// Depth-first visitation order over every component, as vertex indices.
pub fn dfs_order(graph: &Graph) -> Vec<usize> {
    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::with_capacity(graph.vertex_count());
    for vertex in 0..graph.vertex_count() {
        if !visited[vertex] {
            dfs_visit(graph, vertex, &mut visited, &mut order);
        }
    }
    order
}

/// Breadth-first visitation order over every component, as vertex indices.
pub fn bfs_order(graph: &Graph) -> Vec<usize> {
    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::with_capacity(graph.vertex_count());
    let mut queue = VecDeque::with_capacity(graph.vertex_count());
    for vertex in 0..graph.vertex_count() {
        if !visited[vertex] {
            bfs_visit(graph, vertex, &mut visited, &mut order, &mut queue);
        }
    }
    order
}

/// Depth-first traversal of the whole graph, returning labels in visiting order.
pub fn traverse_dfs(graph: &Graph) -> Vec<char> {
    to_labels(graph, &dfs_order(graph))
}

/// Breadth-first traversal of the whole graph, returning labels in visiting order.
pub fn traverse_bfs(graph: &Graph) -> Vec<char> {
    to_labels(graph, &bfs_order(graph))
}

/// Depth-first traversal of the component reachable from `start`.
pub fn dfs_from(graph: &Graph, start: usize) -> GraphResult<Vec<char>> {
    check_start(graph, start)?;
    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::new();
    dfs_visit(graph, start, &mut visited, &mut order);
    Ok(to_labels(graph, &order))
}

/// Breadth-first traversal of the component reachable from `start`.
pub fn bfs_from(graph: &Graph, start: usize) -> GraphResult<Vec<char>> {
    check_start(graph, start)?;
    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::new();
    let mut queue = VecDeque::with_capacity(graph.vertex_count());
    bfs_visit(graph, start, &mut visited, &mut order, &mut queue);
    Ok(to_labels(graph, &order))
}

fn dfs_visit(graph: &Graph, vertex: usize, visited: &mut [bool], order: &mut Vec<usize>) {
    visited[vertex] = true;
    order.push(vertex);
    for next in graph.neighbors(vertex) {
        if !visited[next] {
            dfs_visit(graph, next, visited, order);
        }
    }
}

fn bfs_visit(
    graph: &Graph,
    start: usize,
    visited: &mut [bool],
    order: &mut Vec<usize>,
    queue: &mut VecDeque<usize>,
) {
    visited[start] = true;
    order.push(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for next in graph.neighbors(current) {
            if !visited[next] {
                visited[next] = true;
                order.push(next);
                queue.push_back(next);
            }
        }
    }
}

fn check_start(graph: &Graph, start: usize) -> GraphResult<()> {
    if start < graph.vertex_count() {
        Ok(())
    } else {
        Err(GraphError::InvalidStart {
            index: start,
            count: graph.vertex_count(),
        })
    }
}

fn to_labels(graph: &Graph, order: &[usize]) -> Vec<char> {
    order.iter().map(|&i| graph.labels()[i]).collect()
}
