//! Depth-first topological sorting.
//!
//! [`DfsSorter`] orders the vertices of a [`DirectedGraph`] so that every edge points from
//! an earlier node to a later one, or fails with [`GraphError::CyclicGraph`].
//!
//! # Algorithm
//!
//! Each vertex moves through three states during a sort:
//!
//! ```text
//! unvisited -> visiting -> discovered
//! ```
//!
//! `visiting` marks nodes on the current depth-first path; reaching one of them again means
//! the path closed a cycle. `discovered` is permanent: the node and everything reachable
//! from it has been emitted.
//!
//! Nodes are appended in post-order and the sequence is reversed once at the end. Successors
//! are walked last-to-first and the work-list is consumed from its back, so among nodes the
//! edges leave unconstrained, the one added earlier ends up earlier in the result.
//!
//! The walk uses an explicit frame stack instead of recursion, so deep chains cannot
//! overflow the call stack.

use std::collections::HashSet;
use std::hash::Hash;

#[cfg(feature = "tracing")]
use tracing::{debug, error, trace};

use crate::error::{GraphError, GraphResult};
use crate::graph::DirectedGraph;

/// One node on the active depth-first path.
struct Frame<'g, N> {
    node: &'g N,
    successors: &'g [N],
    /// Successors still to visit are `successors[..remaining]`, taken from the back.
    remaining: usize,
}

impl<'g, N> Frame<'g, N> {
    fn new(node: &'g N, successors: &'g [N]) -> Self {
        Self {
            node,
            successors,
            remaining: successors.len(),
        }
    }
}

/// Topologically sorts a directed graph's nodes using depth-first search.
///
/// The sorter borrows the graph for its whole lifetime, so the graph cannot change while a
/// sort is in progress. Every call to [`DfsSorter::sort`] starts from fresh state.
///
/// # Examples
///
/// ```
/// use topograph::{DfsSorter, DirectedGraph, GraphError};
///
/// let mut graph = DirectedGraph::new();
/// graph.add_edge("shirt", "tie");
/// graph.add_edge("tie", "jacket");
/// graph.add_edge("trousers", "shoes");
///
/// let sorted = DfsSorter::new(&graph).sort().unwrap();
/// assert_eq!(sorted, vec!["shirt", "tie", "jacket", "trousers", "shoes"]);
///
/// graph.add_edge("jacket", "shirt");
/// assert_eq!(DfsSorter::new(&graph).sort(), Err(GraphError::CyclicGraph));
/// ```
pub struct DfsSorter<'g, N> {
    graph: &'g DirectedGraph<N>,
}

impl<'g, N: Eq + Hash + Clone> DfsSorter<'g, N> {
    /// Create a sorter reading from `graph`.
    pub fn new(graph: &'g DirectedGraph<N>) -> Self {
        Self { graph }
    }

    /// Return every vertex in topological order.
    ///
    /// Isolated vertices are included. The result is fully determined by the vertex order and
    /// the order in which edges were added.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::CyclicGraph`] if the graph contains a directed cycle (self-loops
    /// included). No partial ordering is returned.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn sort(&self) -> GraphResult<Vec<N>> {
        #[cfg(feature = "tracing")]
        debug!(
            node_count = self.graph.node_count(),
            source_count = self.graph.edge_count(),
            "starting depth-first sort"
        );

        let mut state = SortState::new(self.graph);

        while let Some(node) = state.undiscovered.pop() {
            if let Err(err) = state.visit(node) {
                #[cfg(feature = "tracing")]
                error!(
                    emitted = state.sorted.len(),
                    "cycle detected, aborting sort"
                );
                return Err(err);
            }
        }

        // Nodes were appended as they finished rather than prepended, so flip once
        let sorted: Vec<N> = state.sorted.into_iter().rev().cloned().collect();

        #[cfg(feature = "tracing")]
        debug!(sorted = sorted.len(), "depth-first sort complete");

        Ok(sorted)
    }
}

/// Working state of a single sort; discarded when the sort returns.
struct SortState<'g, N> {
    graph: &'g DirectedGraph<N>,
    undiscovered: Vec<&'g N>,
    visiting: HashSet<&'g N>,
    discovered: HashSet<&'g N>,
    sorted: Vec<&'g N>,
}

impl<'g, N: Eq + Hash + Clone> SortState<'g, N> {
    fn new(graph: &'g DirectedGraph<N>) -> Self {
        let count = graph.node_count();
        Self {
            graph,
            undiscovered: graph.nodes().iter().collect(),
            visiting: HashSet::new(),
            discovered: HashSet::with_capacity(count),
            sorted: Vec::with_capacity(count),
        }
    }

    fn visit(&mut self, root: &'g N) -> GraphResult<()> {
        if self.discovered.contains(root) {
            return Ok(());
        }

        let mut stack = vec![self.enter(root)];

        while let Some(frame) = stack.last_mut() {
            if frame.remaining == 0 {
                let node = frame.node;
                stack.pop();
                self.finish(node);
                continue;
            }

            frame.remaining -= 1;
            let successors = frame.successors;
            let next = &successors[frame.remaining];

            if self.discovered.contains(next) {
                continue;
            }
            if self.visiting.contains(next) {
                return Err(GraphError::CyclicGraph);
            }

            let frame = self.enter(next);
            stack.push(frame);
        }

        Ok(())
    }

    // Temporarily marks `node` and opens a frame over its successors.
    fn enter(&mut self, node: &'g N) -> Frame<'g, N> {
        #[cfg(feature = "tracing")]
        trace!(depth = self.visiting.len(), "visiting node");

        self.visiting.insert(node);
        Frame::new(node, self.graph.succeeding_nodes(node))
    }

    // Permanently marks `node` and emits it.
    fn finish(&mut self, node: &'g N) {
        self.visiting.remove(node);
        self.discovered.insert(node);
        self.sorted.push(node);

        #[cfg(feature = "tracing")]
        trace!(emitted = self.sorted.len(), "node discovered");
    }
}

impl<N: Eq + Hash + Clone> DirectedGraph<N> {
    /// Return the graph's nodes in topological order using depth-first search.
    ///
    /// Shorthand for `DfsSorter::new(self).sort()`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::CyclicGraph`] if the graph contains a directed cycle.
    pub fn dfs_sort(&self) -> GraphResult<Vec<N>> {
        DfsSorter::new(self).sort()
    }
}
