//! Graph fixtures for internal use in topograph tests and benchmarks.
//!
//! This crate is not meant for public use and offers no stability guarantees.

#![cfg(not(tarpaulin_include))]

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use topograph::DirectedGraph;

/// `0 -> 1 -> ... -> len - 1`
pub fn chain(len: usize) -> DirectedGraph<usize> {
    let mut graph = DirectedGraph::new();
    graph.add_nodes(0..len);
    for i in 1..len {
        graph.add_edge(i - 1, i);
    }
    graph
}

/// Node `0` with an edge to each of `1..=width`.
pub fn fan_out(width: usize) -> DirectedGraph<usize> {
    let mut graph = DirectedGraph::new();
    graph.add_node(0);
    for i in 1..=width {
        graph.add_edge(0, i);
    }
    graph
}

/// Nodes `1..=width`, each with an edge into node `0`.
pub fn fan_in(width: usize) -> DirectedGraph<usize> {
    let mut graph = DirectedGraph::new();
    for i in 1..=width {
        graph.add_edge(i, 0);
    }
    graph
}

/// `top -> {left, right} -> bottom`
pub fn diamond() -> DirectedGraph<&'static str> {
    let mut graph = DirectedGraph::new();
    graph.add_edge("top", "left");
    graph.add_edge("top", "right");
    graph.add_edge("left", "bottom");
    graph.add_edge("right", "bottom");
    graph
}

/// `layers` rows of `width` nodes. Node `(l, i)` has id `l * width + i` and links to
/// nodes `i` and `(i + 1) % width` of row `l + 1`.
pub fn layered(layers: usize, width: usize) -> DirectedGraph<usize> {
    let mut graph = DirectedGraph::new();
    graph.add_nodes(0..layers * width);
    for layer in 1..layers {
        for i in 0..width {
            let from = (layer - 1) * width + i;
            graph.add_edge(from, layer * width + i);
            graph.add_edge(from, layer * width + (i + 1) % width);
        }
    }
    graph
}

/// A chain of `len` nodes closed into a cycle by `len - 1 -> 0`.
pub fn cycle(len: usize) -> DirectedGraph<usize> {
    let mut graph = chain(len);
    if len > 0 {
        graph.add_edge(len - 1, 0);
    }
    graph
}

/// Whether `order` lists every vertex of `graph` once and every edge points forward.
pub fn is_topological<N: Eq + Hash + Clone>(graph: &DirectedGraph<N>, order: &[N]) -> bool {
    if order.len() != graph.node_count() {
        return false;
    }

    let mut position = HashMap::with_capacity(order.len());
    for (index, node) in order.iter().enumerate() {
        if !graph.node_exists(node) || position.insert(node, index).is_some() {
            return false;
        }
    }

    graph.nodes().iter().all(|from| {
        graph
            .succeeding_nodes(from)
            .iter()
            .all(|to| position[from] < position[to])
    })
}

/// Panic with the offending order unless it is a topological order of `graph`.
pub fn assert_topological<N: Eq + Hash + Clone + Debug>(graph: &DirectedGraph<N>, order: &[N]) {
    assert!(
        is_topological(graph, order),
        "{order:?} is not a topological order of {:?}",
        graph.nodes()
    );
}
