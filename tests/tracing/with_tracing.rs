//! Tests with tracing feature enabled

use topograph::{DirectedGraph, GraphError};

use tracing_subscriber::{fmt, EnvFilter};

fn init_subscriber() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("topograph=trace"))
        .with_test_writer()
        .try_init();
}

#[test]
fn test_tracing_with_subscriber() {
    init_subscriber();

    let mut graph = DirectedGraph::new();
    graph.add_edge("A", "B");
    graph.add_edge("B", "C");

    assert_eq!(graph.dfs_sort(), Ok(vec!["A", "B", "C"]));
}

#[test]
fn test_tracing_with_cycle() {
    init_subscriber();

    let graph = topograph_test::cycle(5);

    assert_eq!(graph.dfs_sort(), Err(GraphError::CyclicGraph));
}

#[test]
fn test_tracing_with_large_graph() {
    init_subscriber();

    let graph = topograph_test::layered(10, 10);

    let sorted = graph.dfs_sort().unwrap();
    topograph_test::assert_topological(&graph, &sorted);
}
