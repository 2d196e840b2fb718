//! # Sort Example
//!
//! Builds a small dependency graph, prints it in Graphviz DOT format, and prints its
//! depth-first topological order.
//!
//! ## Running This Example
//!
//! ```bash
//! cargo run --example sort
//!
//! # Render the graph (requires Graphviz)
//! cargo run --example sort 2>/dev/null | sed -n '/^digraph/,/^}/p' | dot -Tsvg -o graph.svg
//!
//! # With sorter instrumentation
//! RUST_LOG=topograph=trace cargo run --example sort --features tracing
//! ```

use std::process::ExitCode;

use topograph::{DirectedGraph, GraphResult};
use tracing_subscriber::{fmt, EnvFilter};

fn build_graph() -> DirectedGraph<&'static str> {
    let mut graph = DirectedGraph::new();
    graph.add_nodes(["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K"]);

    graph.add_edge("A", "D");
    graph.add_edge("B", "C");
    graph.add_edge("B", "D");
    graph.add_edge("C", "E");
    graph.add_edge("D", "E");
    graph.add_edge("E", "F");
    graph.add_edge("F", "G");
    graph.add_edge("H", "I");
    graph.add_edge("H", "K");
    graph.add_edge("I", "G");
    graph.add_edge("J", "G");
    graph.add_edge("K", "G");

    graph
}

fn run() -> GraphResult<()> {
    let graph = build_graph();

    println!("{}", graph.to_dot());
    println!("Roots: {:?}", graph.root_nodes());

    let sorted = graph.dfs_sort()?;
    println!("DFS sort: {sorted:?}");

    // Closing a cycle makes the same graph unsortable
    let mut cyclic = graph.clone();
    cyclic.add_edge("G", "A");
    match cyclic.dfs_sort() {
        Ok(order) => println!("Unexpected order for cyclic graph: {order:?}"),
        Err(err) => {
            let message = err.to_string();
            let summary = message.lines().next().unwrap_or_default();
            println!("After adding G -> A: {summary}");
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("topograph=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
