//! Layered graph benchmarks (wide and deep at once)

use criterion::Criterion;

pub fn bench_layered(c: &mut Criterion) {
    let graph = topograph_test::layered(100, 100);

    c.bench_function("layered_100x100_sort", |b| b.iter(|| graph.dfs_sort()));
    c.bench_function("layered_100x100_to_dot", |b| b.iter(|| graph.to_dot()));
}
