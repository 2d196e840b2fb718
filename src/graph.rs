//! Directed graph over arbitrary hashable node identities.
//!
//! Provides [`DirectedGraph`], which pairs a [`NodeSet`] of vertices with a
//! [`DirectedEdges`] index. Vertex membership and edges are kept consistent:
//!
//! - adding an edge inserts any missing endpoint into the vertex set first
//! - removing a vertex removes every edge incident to it
//!
//! so an edge never refers to a node outside [`DirectedGraph::nodes`].

use std::hash::Hash;

#[cfg(feature = "tracing")]
use tracing::trace;

use crate::edges::DirectedEdges;
use crate::node_set::NodeSet;

/// A graph supporting directed edges between nodes.
///
/// Nodes are only tracked by identity: any `Eq + Hash + Clone` value works, and the graph
/// never inspects or mutates it. Vertices and adjacency lists are reported in insertion
/// order, which makes every query (and [`DirectedGraph::dfs_sort`]) deterministic.
///
/// Cloning yields a fully independent graph.
///
/// # Examples
///
/// ```
/// use topograph::DirectedGraph;
///
/// let mut graph = DirectedGraph::new();
/// graph.add_nodes(["A", "B", "C", "D"]);
/// graph.add_edge("A", "B");
/// graph.add_edge("B", "D");
/// graph.add_edge("C", "B");
///
/// assert_eq!(graph.edge_count(), 3);
/// assert!(graph.edge_exists(&"A", &"B"));
/// assert_eq!(graph.root_nodes(), vec!["A", "C"]);
/// ```
#[derive(Debug, Clone)]
pub struct DirectedGraph<N> {
    pub(crate) nodes: NodeSet<N>,
    pub(crate) edges: DirectedEdges<N>,
}

impl<N> Default for DirectedGraph<N> {
    fn default() -> Self {
        Self {
            nodes: NodeSet::default(),
            edges: DirectedEdges::default(),
        }
    }
}

impl<N: Eq + Hash + Clone> DirectedGraph<N> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex. Adding an existing vertex does nothing.
    pub fn add_node(&mut self, node: N) {
        self.nodes.add(node);
    }

    /// Add several vertices, skipping any that are already present.
    pub fn add_nodes<I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = N>,
    {
        self.nodes.extend(nodes);
    }

    /// Remove a vertex along with every edge that starts or ends at it.
    ///
    /// Removing a vertex that is not in the graph does nothing.
    pub fn remove_node(&mut self, node: &N) {
        if self.nodes.remove(node) {
            self.edges.remove_incident(node);
        }
    }

    /// Remove several vertices and their incident edges, skipping absent ones.
    pub fn remove_nodes<'a, I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = &'a N>,
        N: 'a,
    {
        for node in nodes {
            self.remove_node(node);
        }
    }

    pub fn node_exists(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }

    /// Add the edge `from -> to`.
    ///
    /// Endpoints missing from the vertex set are inserted first (`from` before `to`), so
    /// this can grow [`DirectedGraph::nodes`]. Adding an existing edge does nothing.
    pub fn add_edge(&mut self, from: N, to: N) {
        if !self.nodes.contains(&from) {
            #[cfg(feature = "tracing")]
            trace!(
                position = self.nodes.len(),
                "inserting missing source node for edge"
            );
            self.nodes.add(from.clone());
        }
        if !self.nodes.contains(&to) {
            #[cfg(feature = "tracing")]
            trace!(
                position = self.nodes.len(),
                "inserting missing target node for edge"
            );
            self.nodes.add(to.clone());
        }

        self.edges.add(from, to);
    }

    /// Remove the edge `from -> to`. Both vertices stay; a missing edge is ignored.
    pub fn remove_edge(&mut self, from: &N, to: &N) {
        self.edges.remove(from, to);
    }

    pub fn edge_exists(&self, from: &N, to: &N) -> bool {
        self.edges.exists(from, to)
    }

    pub fn has_preceding_nodes(&self, node: &N) -> bool {
        self.edges.has_preceding_nodes(node)
    }

    /// Nodes with an edge into `node`, in the order those edges were added.
    pub fn preceding_nodes(&self, node: &N) -> &[N] {
        self.edges.preceding_nodes(node)
    }

    pub fn has_succeeding_nodes(&self, node: &N) -> bool {
        self.edges.has_succeeding_nodes(node)
    }

    /// Nodes reached by an edge from `node`, in the order those edges were added.
    pub fn succeeding_nodes(&self, node: &N) -> &[N] {
        self.edges.succeeding_nodes(node)
    }

    /// Vertices without incoming edges, in vertex order.
    pub fn root_nodes(&self) -> Vec<N> {
        self.nodes
            .iter()
            .filter(|node| !self.edges.has_preceding_nodes(node))
            .cloned()
            .collect()
    }
}

impl<N> DirectedGraph<N> {
    /// Vertices in insertion order.
    pub fn nodes(&self) -> &[N] {
        self.nodes.nodes()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of vertices that have at least one outgoing edge.
    ///
    /// Edges sharing a source are counted once; see [`DirectedEdges::count`].
    pub fn edge_count(&self) -> usize {
        self.edges.count()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<N: Eq + Hash + Clone> Extend<(N, N)> for DirectedGraph<N> {
    fn extend<I: IntoIterator<Item = (N, N)>>(&mut self, iter: I) {
        for (from, to) in iter {
            self.add_edge(from, to);
        }
    }
}

impl<N: Eq + Hash + Clone> FromIterator<(N, N)> for DirectedGraph<N> {
    fn from_iter<I: IntoIterator<Item = (N, N)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<N: Eq + Hash> PartialEq for DirectedGraph<N> {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.edges == other.edges
    }
}

impl<N: Eq + Hash> Eq for DirectedGraph<N> {}
