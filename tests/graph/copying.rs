//! Tests that clones are deep and independent

use crate::common::with_edges;

#[test]
fn test_clone_answers_queries_like_original() {
    let original = with_edges(
        &["A", "B", "C", "D"],
        &[("A", "B"), ("B", "D"), ("C", "B")],
    );
    let copy = original.clone();

    assert_eq!(copy.nodes(), original.nodes());
    assert_eq!(copy.node_count(), original.node_count());
    assert_eq!(copy.edge_count(), original.edge_count());
    assert_eq!(copy.root_nodes(), original.root_nodes());
    for node in original.nodes() {
        assert_eq!(copy.succeeding_nodes(node), original.succeeding_nodes(node));
        assert_eq!(copy.preceding_nodes(node), original.preceding_nodes(node));
    }
    assert_eq!(copy.dfs_sort(), original.dfs_sort());
}

#[test]
fn test_mutating_clone_leaves_original_alone() {
    let original = with_edges(&["A", "B", "C"], &[("A", "B")]);
    let mut copy = original.clone();

    copy.add_edge("B", "C");
    copy.add_edge("C", "E");
    copy.remove_edge(&"A", &"B");
    copy.remove_node(&"A");

    assert_eq!(original.nodes(), &["A", "B", "C"]);
    assert!(original.edge_exists(&"A", &"B"));
    assert!(!original.edge_exists(&"B", &"C"));
    assert!(!original.has_succeeding_nodes(&"C"));
}

#[test]
fn test_mutating_original_leaves_clone_alone() {
    let mut original = with_edges(&["A", "B"], &[("A", "B")]);
    let copy = original.clone();

    original.add_edge("B", "A");
    original.remove_node(&"A");

    assert_eq!(copy.nodes(), &["A", "B"]);
    assert!(copy.edge_exists(&"A", &"B"));
    assert!(!copy.edge_exists(&"B", &"A"));
}

#[test]
fn test_sort_snapshot_while_original_changes() {
    let mut graph = with_edges(&[], &[("A", "B"), ("B", "C")]);
    let snapshot = graph.clone();

    graph.add_edge("C", "A");

    assert!(graph.dfs_sort().is_err());
    assert_eq!(snapshot.dfs_sort(), Ok(vec!["A", "B", "C"]));
}
