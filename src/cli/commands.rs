//! CLI command implementations.

use crate::engine::{dijkstra, get_edges, get_vexs, kruskal, prim, sorted_edges};
use crate::graph::{directed_sample, traverse_bfs, traverse_dfs, undirected_sample, Graph};
use crate::types::{GraphResult, Weight, INF};

/// Which built-in graph a command runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// Eight-vertex directed graph.
    Directed,
    /// Seven-vertex undirected graph.
    Undirected,
}

impl Sample {
    /// Parse a sample name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "directed" | "d" => Some(Self::Directed),
            "undirected" | "u" => Some(Self::Undirected),
            _ => None,
        }
    }

    /// Build the sample graph.
    pub fn load(self) -> GraphResult<Graph> {
        match self {
            Self::Directed => directed_sample(),
            Self::Undirected => undirected_sample(),
        }
    }
}

/// Print the adjacency matrix.
pub fn cmd_show(graph: &Graph, json: bool) -> GraphResult<()> {
    if json {
        let rows: Vec<Vec<Option<Weight>>> = (0..graph.vertex_count())
            .map(|i| {
                graph
                    .row(i)
                    .iter()
                    .map(|&w| if w == INF { None } else { Some(w) })
                    .collect()
            })
            .collect();
        let info = serde_json::json!({
            "directed": graph.is_directed(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "labels": graph.labels(),
            "matrix": rows,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        print!("{}", graph);
    }
    Ok(())
}

/// Depth-first traversal of the whole graph.
pub fn cmd_dfs(graph: &Graph, json: bool) -> GraphResult<()> {
    print_order("DFS", &traverse_dfs(graph), json);
    Ok(())
}

/// Breadth-first traversal of the whole graph.
pub fn cmd_bfs(graph: &Graph, json: bool) -> GraphResult<()> {
    print_order("BFS", &traverse_bfs(graph), json);
    Ok(())
}

/// Prim's minimum spanning tree grown from the vertex labelled `start`.
pub fn cmd_prim(graph: &Graph, start: char, json: bool) -> GraphResult<()> {
    let tree = prim(graph, graph.position(start)?)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&tree).unwrap_or_default()
        );
    } else {
        println!("PRIM({}) = {}", start, tree.total_weight);
        println!("Vertices in insertion order: {}", join(&tree.vertices));
    }
    Ok(())
}

/// Kruskal's minimum spanning forest.
pub fn cmd_kruskal(graph: &Graph, json: bool) -> GraphResult<()> {
    let forest = kruskal(graph);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&forest).unwrap_or_default()
        );
    } else {
        println!("Kruskal = {}", forest.total_weight);
        println!("Edges in acceptance order:");
        for edge in &forest.edges {
            println!("  {}", edge);
        }
    }
    Ok(())
}

/// Shortest path between two labelled vertices.
pub fn cmd_dijkstra(graph: &Graph, from: char, to: char, json: bool) -> GraphResult<()> {
    let path = dijkstra(graph, graph.position(from)?, graph.position(to)?)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&path).unwrap_or_default()
        );
    } else {
        println!("Shortest path {} -> {}: length {}", from, to, path.length);
        println!(
            "  {} ({} vertices)",
            path.vertices
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" -> "),
            path.vertex_count
        );
    }
    Ok(())
}

/// List every edge, optionally sorted by weight.
pub fn cmd_edges(graph: &Graph, sorted: bool, json: bool) -> GraphResult<()> {
    let mut edges = get_edges(graph);
    if sorted {
        sorted_edges(&mut edges);
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&edges).unwrap_or_default()
        );
    } else {
        println!("{} edges:", edges.len());
        for edge in &edges {
            println!("  {}", edge);
        }
    }
    Ok(())
}

/// Per-vertex degree table.
pub fn cmd_vertices(graph: &Graph, json: bool) -> GraphResult<()> {
    let vertices = get_vexs(graph);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&vertices).unwrap_or_default()
        );
    } else if graph.is_directed() {
        println!("Vertex  Degree  In  Out");
        for v in &vertices {
            println!(
                "  {:<6}{:>6}{:>4}{:>5}",
                v.label, v.degree, v.in_degree, v.out_degree
            );
        }
    } else {
        println!("Vertex  Degree");
        for v in &vertices {
            println!("  {:<6}{:>6}", v.label, v.degree);
        }
    }
    Ok(())
}

fn print_order(name: &str, order: &[char], json: bool) {
    if json {
        println!(
            "{}",
            serde_json::json!({ "traversal": name.to_lowercase(), "order": order })
        );
    } else {
        println!("{}: {}", name, join(order));
    }
}

fn join(labels: &[char]) -> String {
    labels
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
