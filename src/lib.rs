//! In-memory directed graphs with depth-first topological sorting
//!
//! `topograph` stores a directed graph over arbitrary hashable node values, answers adjacency
//! queries in insertion order, and computes a topological ordering of its vertices.
//!
//! # Features
//!
//! - **Any node type**: nodes only need `Eq + Hash + Clone`. The graph tracks identity and
//!   never inspects or mutates the values.
//! - **Deterministic**: vertices and adjacency lists come back in insertion order, so queries
//!   and sorts give the same answer for the same sequence of mutations.
//! - **Consistent adjacency**: successors and predecessors are kept in lock-step, edges
//!   auto-insert missing endpoints, and removing a vertex removes its edges.
//! - **Cycle detection**: [`DfsSorter`] fails with [`GraphError::CyclicGraph`] instead of
//!   returning a partial order.
//! - **No recursion limits**: the depth-first walk runs on an explicit stack.
//! - **DOT export**: [`DirectedGraph::to_dot`] renders any graph whose nodes implement
//!   `Display`.
//!
//! # Quick Start
//!
//! ```
//! use topograph::DirectedGraph;
//!
//! let mut graph = DirectedGraph::new();
//! graph.add_nodes(["A", "B", "C", "D"]);
//!
//! graph.add_edge("A", "B");
//! graph.add_edge("B", "D");
//! graph.add_edge("C", "B");
//!
//! assert_eq!(graph.root_nodes(), vec!["A", "C"]);
//! assert_eq!(graph.dfs_sort().unwrap(), vec!["A", "C", "B", "D"]);
//! ```
//!
//! # Core Concepts
//!
//! ## NodeSet
//!
//! A [`NodeSet`] is an insertion-ordered set. It backs the vertex list and every adjacency
//! bucket. Batch operations skip nodes that are already present (or absent, for removal)
//! and carry on with the rest of the batch.
//!
//! ## DirectedEdges
//!
//! [`DirectedEdges`] maps each node to its successors and to its predecessors. A bucket only
//! exists while it is non-empty. [`DirectedEdges::count`] (and therefore
//! [`DirectedGraph::edge_count`]) counts **source nodes with outgoing edges**, not edges:
//!
//! ```
//! use topograph::DirectedGraph;
//!
//! let mut graph = DirectedGraph::new();
//! graph.add_edge(1, 2);
//! graph.add_edge(1, 3);
//!
//! assert_eq!(graph.edge_count(), 1);
//! ```
//!
//! ## DirectedGraph
//!
//! [`DirectedGraph`] combines the two and is the public entry point. It is a plain owned
//! value: cloning it gives an independent graph, and sorting borrows it immutably.
//!
//! ## DfsSorter
//!
//! [`DfsSorter`] runs a depth-first search with temporary (`visiting`) and permanent
//! (`discovered`) marks. Output is post-order reversed: for every edge `u -> v`, `u` comes
//! before `v`. Among nodes the edges leave unordered, earlier-added ones come first.
//!
//! # Error Handling
//!
//! Graph mutation and queries never fail; removing or querying something that is not there
//! is a no-op or returns `false`/empty. Sorting is the only fallible operation:
//!
//! ```
//! use topograph::{DirectedGraph, GraphError};
//!
//! let mut graph = DirectedGraph::new();
//! graph.add_edge("A", "B");
//! graph.add_edge("B", "C");
//! graph.add_edge("C", "A");
//!
//! assert_eq!(graph.dfs_sort(), Err(GraphError::CyclicGraph));
//!
//! // Break the cycle and try again
//! graph.remove_edge(&"C", &"A");
//! assert_eq!(graph.dfs_sort(), Ok(vec!["A", "B", "C"]));
//! ```
//!
//! # Concurrency
//!
//! Everything runs synchronously on the caller's thread. A graph has no interior
//! mutability; share it behind your own lock, or `clone()` a snapshot to sort while the
//! original keeps changing.
//!
//! # Optional Tracing Support
//!
//! topograph provides optional observability through the `tracing` crate. The
//! instrumentation is compiled in only with the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! topograph = { version = "0.1", features = ["tracing"] }
//! tracing-subscriber = "0.3"
//! ```
//!
//! ## Log Levels
//!
//! - **DEBUG**: sort start/completion with vertex and source counts
//! - **TRACE**: per-node visit transitions, endpoints auto-inserted by `add_edge`
//! - **ERROR**: cycle detection
//!
//! Node values are never logged, since they are not required to implement `Debug`.
//!
//! ```bash
//! RUST_LOG=topograph=debug cargo run --example sort --features tracing
//! ```

// Module declarations
mod dot;
mod edges;
mod error;
mod graph;
mod node_set;
mod sort;

// Public re-exports
pub use edges::DirectedEdges;
pub use error::{GraphError, GraphResult};
pub use graph::DirectedGraph;
pub use node_set::NodeSet;
pub use sort::DfsSorter;
