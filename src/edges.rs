//! Bidirectional adjacency index for directed edges.
//!
//! The index keeps two maps in lock-step:
//!
//! - **successors**: `from -> {to, ...}` in the order the edges were added
//! - **predecessors**: `to -> {from, ...}` in the order the edges were added
//!
//! `to` is a successor of `from` exactly when `from` is a predecessor of `to`. A map entry
//! only exists while its bucket is non-empty, so the `has_*` queries are plain key lookups.

use std::collections::HashMap;
use std::hash::Hash;

use crate::node_set::NodeSet;

/// The authoritative edge store of a [`crate::DirectedGraph`].
///
/// Edges are identified by their ordered `(from, to)` pair; adding the same pair twice
/// records it once.
#[derive(Debug, Clone)]
pub struct DirectedEdges<N> {
    successors: HashMap<N, NodeSet<N>>,
    predecessors: HashMap<N, NodeSet<N>>,
}

impl<N> Default for DirectedEdges<N> {
    fn default() -> Self {
        Self {
            successors: HashMap::new(),
            predecessors: HashMap::new(),
        }
    }
}

impl<N: Eq + Hash + Clone> DirectedEdges<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the edge `from -> to`, creating either bucket if needed.
    pub fn add(&mut self, from: N, to: N) {
        self.successors
            .entry(from.clone())
            .or_default()
            .add(to.clone());
        self.predecessors.entry(to).or_default().add(from);
    }

    /// Drop the edge `from -> to`. Buckets left empty are removed; missing edges are ignored.
    pub fn remove(&mut self, from: &N, to: &N) {
        detach(&mut self.successors, from, to);
        detach(&mut self.predecessors, to, from);
    }

    /// Drop every edge that starts or ends at `node`.
    pub fn remove_incident(&mut self, node: &N) {
        if let Some(successors) = self.successors.remove(node) {
            for to in &successors {
                detach(&mut self.predecessors, to, node);
            }
        }
        if let Some(predecessors) = self.predecessors.remove(node) {
            for from in &predecessors {
                detach(&mut self.successors, from, node);
            }
        }
    }

    pub fn exists(&self, from: &N, to: &N) -> bool {
        self.successors
            .get(from)
            .is_some_and(|bucket| bucket.contains(to))
    }

    pub fn has_succeeding_nodes(&self, node: &N) -> bool {
        self.successors.contains_key(node)
    }

    pub fn has_preceding_nodes(&self, node: &N) -> bool {
        self.predecessors.contains_key(node)
    }

    /// Direct successors of `node` in edge insertion order; empty if there are none.
    pub fn succeeding_nodes(&self, node: &N) -> &[N] {
        self.successors
            .get(node)
            .map(NodeSet::nodes)
            .unwrap_or_default()
    }

    /// Direct predecessors of `node` in edge insertion order; empty if there are none.
    pub fn preceding_nodes(&self, node: &N) -> &[N] {
        self.predecessors
            .get(node)
            .map(NodeSet::nodes)
            .unwrap_or_default()
    }
}

impl<N> DirectedEdges<N> {
    /// Number of source nodes with at least one outgoing edge.
    ///
    /// This counts adjacency buckets, not edges: `a -> b` and `a -> c` count once.
    pub fn count(&self) -> usize {
        self.successors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }
}

impl<N: Eq + Hash> PartialEq for DirectedEdges<N> {
    fn eq(&self, other: &Self) -> bool {
        self.successors == other.successors && self.predecessors == other.predecessors
    }
}

impl<N: Eq + Hash> Eq for DirectedEdges<N> {}

// Removes `member` from the bucket under `key`, deleting the bucket once it is empty.
fn detach<N: Eq + Hash + Clone>(map: &mut HashMap<N, NodeSet<N>>, key: &N, member: &N) {
    if let Some(bucket) = map.get_mut(key) {
        bucket.remove(member);
        if bucket.is_empty() {
            map.remove(key);
        }
    }
}
