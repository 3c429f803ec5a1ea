//! Helpers shared by the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;

use log::{Level, LevelFilter, Metadata, Record};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use matgraph::{Distance, Graph, Weight, INF};

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

/// Logger that keeps each test thread's records to itself.
struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|records| {
            records
                .borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static CAPTURE: CaptureLogger = CaptureLogger;

/// Install the capturing logger and clear this thread's records.
pub fn capture_logs() {
    let _ = log::set_logger(&CAPTURE);
    log::set_max_level(LevelFilter::Trace);
    RECORDS.with(|records| records.borrow_mut().clear());
}

/// Messages logged on this thread at `level` since the last `capture_logs`.
pub fn logged(level: Level) -> Vec<String> {
    RECORDS.with(|records| {
        records
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.clone())
            .collect()
    })
}

/// Labels `a`, `b`, ... for `n` vertices.
pub fn labels(n: usize) -> Vec<char> {
    (0..n).map(|i| (b'a' + i as u8) as char).collect()
}

/// Build an `n`-vertex matrix with no edges.
pub fn empty_matrix(n: usize) -> Vec<Vec<Weight>> {
    (0..n)
        .map(|i| (0..n).map(|j| if i == j { 0 } else { INF }).collect())
        .collect()
}

/// Random graph with `n` vertices, each possible edge present with probability `density`.
///
/// With `connected` set, a chain `0 - 1 - ... - n-1` is always present.
pub fn random_graph(
    rng: &mut StdRng,
    n: usize,
    directed: bool,
    density: f64,
    connected: bool,
) -> Graph {
    let mut matrix = empty_matrix(n);
    for i in 0..n {
        let first = if directed { 0 } else { i + 1 };
        for j in first..n {
            if i == j {
                continue;
            }
            let chained = connected && j == i + 1;
            if chained || rng.gen_bool(density) {
                let w = rng.gen_range(1..=20);
                matrix[i][j] = w;
                if !directed {
                    matrix[j][i] = w;
                }
            }
        }
    }
    Graph::from_matrix(&labels(n), &matrix, directed).unwrap()
}

/// Seeded generator so failures are reproducible.
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Shortest `start -> end` length by enumerating every simple path.
pub fn brute_force_shortest(graph: &Graph, start: usize, end: usize) -> Option<Distance> {
    fn walk(
        graph: &Graph,
        current: usize,
        end: usize,
        length: Distance,
        on_path: &mut Vec<bool>,
        best: &mut Option<Distance>,
    ) {
        if current == end {
            if best.is_none_or(|b| length < b) {
                *best = Some(length);
            }
            return;
        }
        for next in graph.neighbors(current) {
            if on_path[next] {
                continue;
            }
            let w = Distance::from(graph.edge_weight(current, next).unwrap());
            on_path[next] = true;
            walk(graph, next, end, length + w, on_path, best);
            on_path[next] = false;
        }
    }

    let mut on_path = vec![false; graph.vertex_count()];
    on_path[start] = true;
    let mut best = None;
    walk(graph, start, end, 0, &mut on_path, &mut best);
    best
}

/// Sum of edge weights along a sequence of vertex indices.
pub fn path_weight(graph: &Graph, indices: &[usize]) -> Distance {
    indices
        .windows(2)
        .map(|pair| Distance::from(graph.edge_weight(pair[0], pair[1]).unwrap()))
        .sum()
}
