//! Criterion benchmarks for matgraph.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use matgraph::engine::{dijkstra, get_edges, kruskal, prim, shortest_distances};
use matgraph::graph::{directed_sample, traverse_bfs, traverse_dfs, Graph};
use matgraph::types::{Weight, INF};

/// Dense random undirected graph at the given capacity, always connected.
fn make_dense_graph(node_count: usize) -> Graph {
    let mut rng = rand::thread_rng();
    let labels: Vec<char> = (0..node_count)
        .map(|i| char::from_u32(0x4E00 + i as u32).unwrap_or('?'))
        .collect();
    let mut matrix: Vec<Vec<Weight>> = vec![vec![INF; node_count]; node_count];
    for i in 0..node_count {
        matrix[i][i] = 0;
        for j in (i + 1)..node_count {
            if j == i + 1 || rng.gen_bool(0.5) {
                let w = rng.gen_range(1..100);
                matrix[i][j] = w;
                matrix[j][i] = w;
            }
        }
    }
    Graph::from_matrix_with_capacity(&labels, &matrix, false, node_count).unwrap()
}

fn bench_traversal(c: &mut Criterion) {
    let graph = make_dense_graph(64);
    c.bench_function("dfs_64", |b| b.iter(|| traverse_dfs(black_box(&graph))));
    c.bench_function("bfs_64", |b| b.iter(|| traverse_bfs(black_box(&graph))));
}

fn bench_spanning_tree(c: &mut Criterion) {
    let graph = make_dense_graph(64);
    c.bench_function("prim_64", |b| b.iter(|| prim(black_box(&graph), 0).unwrap()));
    c.bench_function("kruskal_64", |b| b.iter(|| kruskal(black_box(&graph))));
    c.bench_function("get_edges_64", |b| b.iter(|| get_edges(black_box(&graph))));
}

fn bench_shortest_path(c: &mut Criterion) {
    let sample = directed_sample().unwrap();
    c.bench_function("dijkstra_sample_a_h", |b| {
        b.iter(|| dijkstra(black_box(&sample), 0, 7).unwrap())
    });

    let graph = make_dense_graph(64);
    c.bench_function("dijkstra_64", |b| {
        b.iter(|| dijkstra(black_box(&graph), 0, 63).unwrap())
    });
    c.bench_function("shortest_distances_64", |b| {
        b.iter(|| shortest_distances(black_box(&graph), 0).unwrap())
    });
}

criterion_group!(
    benches,
    bench_traversal,
    bench_spanning_tree,
    bench_shortest_path
);
criterion_main!(benches);
