//! Dijkstra benchmarks over generated dense matrices.
//!
//! Run with `cargo bench`. Matrix generation is deterministic (simple LCG)
//! so results are comparable across runs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use dense_dijkstra::Graph;

/// Deterministic dense matrix: roughly `density` of off-diagonal entries
/// carry a positive weight.
fn generate_matrix(n: usize, density: f64, seed: u64) -> Vec<Vec<f32>> {
    let mut state = seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    let mut matrix = vec![vec![0.0f32; n]; n];
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let roll = (next() % 1_000) as f64 / 1_000.0;
            if roll < density {
                matrix[i][j] = 1.0 + (next() % 100) as f32 / 10.0;
            }
        }
    }
    // Guarantee reachability: a weight-10 chain along the diagonal.
    for i in 0..n.saturating_sub(1) {
        if matrix[i][i + 1] == 0.0 {
            matrix[i][i + 1] = 10.0;
        }
    }
    matrix
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_build");
    for &n in &[64usize, 256, 1024] {
        let matrix = generate_matrix(n, 0.3, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &matrix, |b, m| {
            b.iter(|| Graph::build(black_box(m), 0, n - 1).expect("build failed"));
        });
    }
    group.finish();
}

fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");
    for &n in &[64usize, 256, 1024] {
        let matrix = generate_matrix(n, 0.3, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &matrix, |b, m| {
            b.iter(|| {
                let graph = Graph::build(black_box(m), 0, n - 1).expect("build failed");
                graph.shortest_path().expect("query failed")
            });
        });
    }
    group.finish();
}

fn bench_sparse_vs_dense(c: &mut Criterion) {
    let mut group = c.benchmark_group("density_512");
    for &density in &[0.05f64, 0.3, 0.8] {
        let matrix = generate_matrix(512, density, 7);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{density:.2}")),
            &matrix,
            |b, m| {
                b.iter(|| {
                    let graph = Graph::build(black_box(m), 0, 511).expect("build failed");
                    graph.shortest_path().expect("query failed")
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_shortest_path, bench_sparse_vs_dense);
criterion_main!(benches);
