//! Graphviz DOT rendering.
//!
//! Produces a `digraph` that tools such as `dot -Tsvg` can lay out. Node labels come from
//! the node's [`Display`] output; vertices and edges are written in graph order so the
//! rendering is stable between runs.

use std::collections::HashMap;
use std::fmt::{Display, Write};
use std::hash::Hash;

use crate::graph::DirectedGraph;

impl<N: Eq + Hash + Clone + Display> DirectedGraph<N> {
    /// Render the graph in Graphviz DOT format.
    ///
    /// Every vertex is declared as `nN [label="..."]`, where `N` is its position in
    /// [`DirectedGraph::nodes`]. Edges follow, grouped by source vertex in vertex order and
    /// listed in the order they were added.
    ///
    /// # Examples
    ///
    /// ```
    /// use topograph::DirectedGraph;
    ///
    /// let mut graph = DirectedGraph::new();
    /// graph.add_edge("A", "B");
    ///
    /// let dot = graph.to_dot();
    /// assert!(dot.starts_with("digraph G {"));
    /// assert!(dot.contains("n0 [label=\"A\"];"));
    /// assert!(dot.contains("n0 -> n1;"));
    /// ```
    #[must_use]
    pub fn to_dot(&self) -> String {
        let mut dot = String::new();
        dot.push_str("digraph G {\n");

        let ids: HashMap<&N, usize> = self
            .nodes()
            .iter()
            .enumerate()
            .map(|(index, node)| (node, index))
            .collect();

        for (index, node) in self.nodes().iter().enumerate() {
            let _ = writeln!(
                dot,
                "    n{index} [label=\"{}\"];",
                escape_dot(&node.to_string())
            );
        }

        for (from_index, from) in self.nodes().iter().enumerate() {
            for to in self.succeeding_nodes(from) {
                if let Some(to_index) = ids.get(to) {
                    let _ = writeln!(dot, "    n{from_index} -> n{to_index};");
                }
            }
        }

        dot.push_str("}\n");
        dot
    }
}

/// Escape a label for use inside a double-quoted DOT string.
fn escape_dot(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    escaped
}
