//! Dijkstra tests, cross-checked against brute-force path enumeration.

mod common;

use matgraph::engine::{dijkstra, shortest_distances};
use matgraph::graph::{directed_sample, undirected_sample, GraphBuilder};
use matgraph::types::GraphError;

use common::{brute_force_shortest, path_weight, random_graph, rng};

// ==================== Directed Sample ====================

#[test]
fn test_b_to_g_matches_brute_force() {
    let graph = directed_sample().unwrap();
    let b = graph.position('b').unwrap();
    let g = graph.position('g').unwrap();

    let path = dijkstra(&graph, b, g).unwrap();
    assert_eq!(Some(path.length), brute_force_shortest(&graph, b, g));
    assert_eq!(path.length, path_weight(&graph, &path.indices));
    assert_eq!(path.vertices, vec!['b', 'e', 'f', 'g']);
    assert_eq!(path.vertex_count, 4);
    assert_eq!((path.start, path.end), (b, g));
}

#[test]
fn test_a_to_h_prefers_longer_route_with_lower_weight() {
    let graph = directed_sample().unwrap();
    let path = dijkstra(&graph, 0, 7).unwrap();

    assert_eq!(path.vertices, vec!['a', 'c', 'e', 'f', 'g', 'h']);
    assert_eq!(path.length, 48);
    assert_eq!(Some(path.length), brute_force_shortest(&graph, 0, 7));
}

#[test]
fn test_unreachable_is_no_path_found() {
    let graph = directed_sample().unwrap();
    let h = graph.position('h').unwrap();
    let a = graph.position('a').unwrap();

    match dijkstra(&graph, h, a).unwrap_err() {
        GraphError::NoPathFound { start, end } => {
            assert_eq!(start, h);
            assert_eq!(end, a);
        }
        e => panic!("Expected NoPathFound, got {:?}", e),
    }
}

#[test]
fn test_start_equals_end() {
    let graph = directed_sample().unwrap();
    for v in 0..graph.vertex_count() {
        let path = dijkstra(&graph, v, v).unwrap();
        assert_eq!(path.length, 0);
        assert_eq!(path.vertex_count, 1);
        assert_eq!(path.indices, vec![v]);
        assert_eq!(path.vertices, vec![graph.label(v).unwrap()]);
    }
}

#[test]
fn test_invalid_vertex() {
    let graph = directed_sample().unwrap();
    assert!(matches!(
        dijkstra(&graph, 8, 0),
        Err(GraphError::InvalidVertex { index: 8, count: 8 })
    ));
    assert!(matches!(
        dijkstra(&graph, 0, 9),
        Err(GraphError::InvalidVertex { index: 9, .. })
    ));
    assert!(matches!(
        shortest_distances(&graph, 8),
        Err(GraphError::InvalidVertex { index: 8, .. })
    ));
}

#[test]
fn test_shortest_distances_directed_sample() {
    let graph = directed_sample().unwrap();
    let distances = shortest_distances(&graph, 0).unwrap();
    assert_eq!(
        distances,
        vec![
            Some(0),
            Some(9),
            Some(14),
            Some(15),
            Some(32),
            Some(34),
            Some(45),
            Some(48)
        ]
    );

    let from_h = shortest_distances(&graph, 7).unwrap();
    assert_eq!(from_h[7], Some(0));
    assert!(from_h[..7].iter().all(Option::is_none));
}

// ==================== Other Graphs ====================

#[test]
fn test_undirected_sample_symmetric_lengths() {
    let graph = undirected_sample().unwrap();
    for s in 0..graph.vertex_count() {
        for e in 0..graph.vertex_count() {
            let there = dijkstra(&graph, s, e).unwrap();
            let back = dijkstra(&graph, e, s).unwrap();
            assert_eq!(there.length, back.length);
        }
    }
}

#[test]
fn test_relaxation_replaces_direct_edge() {
    // Direct x -> z costs 10, x -> y -> z costs 3
    let mut builder = GraphBuilder::new();
    builder
        .directed(true)
        .add_vertices(&['x', 'y', 'z'])
        .link(0, 2, 10)
        .link(0, 1, 1)
        .link(1, 2, 2);
    let graph = builder.build().unwrap();

    let path = dijkstra(&graph, 0, 2).unwrap();
    assert_eq!(path.vertices, vec!['x', 'y', 'z']);
    assert_eq!(path.length, 3);
}

#[test]
fn test_isolated_vertex_unreachable() {
    let mut builder = GraphBuilder::new();
    builder.add_vertices(&['x', 'y', 'z']).link(0, 1, 1);
    let graph = builder.build().unwrap();

    assert!(matches!(
        dijkstra(&graph, 0, 2),
        Err(GraphError::NoPathFound { start: 0, end: 2 })
    ));
    assert_eq!(
        shortest_distances(&graph, 0).unwrap(),
        vec![Some(0), Some(1), None]
    );
}

// ==================== Properties ====================

#[test]
fn test_random_graphs_match_brute_force() {
    let mut rng = rng(31);
    for round in 0..150 {
        let n = 2 + round % 7;
        let graph = random_graph(&mut rng, n, round % 2 == 0, 0.35, false);

        for s in 0..n {
            let distances = shortest_distances(&graph, s).unwrap();
            for e in 0..n {
                let expected = if s == e {
                    Some(0)
                } else {
                    brute_force_shortest(&graph, s, e)
                };
                assert_eq!(distances[e], expected);

                match dijkstra(&graph, s, e) {
                    Ok(path) => {
                        assert_eq!(Some(path.length), expected);
                        assert_eq!(path.length, path_weight(&graph, &path.indices));
                        assert_eq!(path.indices.first(), Some(&s));
                        assert_eq!(path.indices.last(), Some(&e));
                        assert_eq!(path.vertex_count, path.indices.len());
                        assert_eq!(path.vertices.len(), path.indices.len());
                    }
                    Err(GraphError::NoPathFound { .. }) => assert_eq!(expected, None),
                    Err(err) => panic!("Unexpected error: {:?}", err),
                }
            }
        }
    }
}
