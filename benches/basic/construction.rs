//! Graph construction and mutation benchmarks

use criterion::{black_box, Criterion};
use topograph::DirectedGraph;

pub fn bench_graph_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    group.bench_function("add_edges_auto_insert_1000", |b| {
        b.iter(|| {
            let mut graph = DirectedGraph::new();
            for i in 1..1000usize {
                graph.add_edge(black_box(i - 1), black_box(i));
            }
            graph
        });
    });

    group.bench_function("add_nodes_then_edges_1000", |b| {
        b.iter(|| {
            let mut graph = DirectedGraph::new();
            graph.add_nodes(0..1000usize);
            for i in 1..1000 {
                graph.add_edge(i - 1, i);
            }
            graph
        });
    });

    group.bench_function("remove_every_other_node_1000", |b| {
        let base = topograph_test::chain(1000);
        b.iter(|| {
            let mut graph = base.clone();
            for i in (0..1000).step_by(2) {
                graph.remove_node(&i);
            }
            graph
        });
    });

    group.bench_function("clone_layered_50x20", |b| {
        let graph = topograph_test::layered(50, 20);
        b.iter(|| black_box(&graph).clone());
    });

    group.finish();
}
