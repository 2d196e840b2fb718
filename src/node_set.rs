//! Insertion-ordered, duplicate-free node collections.
//!
//! [`NodeSet`] backs both the vertex set of a [`crate::DirectedGraph`] and every
//! adjacency bucket of its edge index. Iteration always follows first-insertion order.

use std::collections::HashSet;
use std::hash::Hash;

/// An ordered set of unique nodes.
///
/// Membership checks are O(1); removal is O(n) because the remaining nodes keep their
/// relative order.
///
/// # Examples
///
/// ```
/// use topograph::NodeSet;
///
/// let mut set = NodeSet::new();
/// set.extend(["b", "a", "b", "c"]);
///
/// assert_eq!(set.nodes(), &["b", "a", "c"]);
/// assert!(set.contains(&"a"));
/// ```
#[derive(Debug, Clone)]
pub struct NodeSet<N> {
    nodes: Vec<N>,
    members: HashSet<N>,
}

impl<N> Default for NodeSet<N> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            members: HashSet::new(),
        }
    }
}

impl<N: Eq + Hash + Clone> NodeSet<N> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `node` unless it is already a member.
    ///
    /// Returns `true` if the node was inserted.
    pub fn add(&mut self, node: N) -> bool {
        if self.members.contains(&node) {
            return false;
        }
        self.members.insert(node.clone());
        self.nodes.push(node);
        true
    }

    /// Remove `node`, keeping the order of the remaining members.
    ///
    /// Returns `true` if the node was a member. Absent nodes are ignored.
    pub fn remove(&mut self, node: &N) -> bool {
        if !self.members.remove(node) {
            return false;
        }
        if let Some(index) = self.nodes.iter().position(|n| n == node) {
            self.nodes.remove(index);
        }
        true
    }

    /// Remove every listed node, skipping the ones that are not members.
    pub fn remove_all<'a, I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = &'a N>,
        N: 'a,
    {
        for node in nodes {
            self.remove(node);
        }
    }

    /// Membership test.
    pub fn contains(&self, node: &N) -> bool {
        self.members.contains(node)
    }
}

impl<N> NodeSet<N> {
    /// Members in insertion order.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, N> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// Skips duplicates and keeps going, so a batch never stops halfway.
impl<N: Eq + Hash + Clone> Extend<N> for NodeSet<N> {
    fn extend<I: IntoIterator<Item = N>>(&mut self, iter: I) {
        for node in iter {
            self.add(node);
        }
    }
}

impl<N: Eq + Hash + Clone> FromIterator<N> for NodeSet<N> {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a, N> IntoIterator for &'a NodeSet<N> {
    type Item = &'a N;
    type IntoIter = std::slice::Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

// Order-sensitive: two sets are equal only if they list the same nodes in the same order.
impl<N: PartialEq> PartialEq for NodeSet<N> {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
    }
}

impl<N: Eq> Eq for NodeSet<N> {}
