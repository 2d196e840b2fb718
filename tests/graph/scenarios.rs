//! Table-driven scenarios for counts and root nodes

use test_case::test_case;

use crate::common::with_edges;

type Edges = &'static [(&'static str, &'static str)];

#[test_case(&["A", "B", "C", "D"], &[("A", "B"), ("B", "D"), ("C", "B")], 4, 3 ; "three sources")]
#[test_case(&["A", "B", "C", "D"], &[("A", "B"), ("B", "C"), ("B", "C")], 4, 2 ; "duplicate edge")]
#[test_case(&[], &[("A", "B")], 2, 1 ; "endpoints auto inserted")]
#[test_case(&[], &[("A", "B"), ("A", "C"), ("A", "D")], 4, 1 ; "fan out counts one source")]
#[test_case(&["A"], &[], 1, 0 ; "no edges")]
fn test_counts(nodes: &[&'static str], edges: Edges, node_count: usize, edge_count: usize) {
    let graph = with_edges(nodes, edges);

    assert_eq!(graph.node_count(), node_count);
    assert_eq!(graph.edge_count(), edge_count);
}

#[test_case(&["A", "B", "C", "D"], &[("A", "B"), ("B", "D"), ("C", "B")], &["A", "C"] ; "two roots")]
#[test_case(
    &["A", "B", "C", "D"],
    &[("A", "B"), ("B", "C"), ("D", "C"), ("E", "C"), ("F", "E")],
    &["A", "D", "F"] ;
    "roots across inserted nodes"
)]
#[test_case(&["A", "B", "C"], &[("A", "B"), ("B", "C"), ("C", "A")], &[] ; "cycle has no roots")]
#[test_case(&["A", "B"], &[], &["A", "B"] ; "isolated nodes are roots")]
fn test_root_nodes(nodes: &[&'static str], edges: Edges, roots: &[&'static str]) {
    let graph = with_edges(nodes, edges);

    assert_eq!(graph.root_nodes(), roots);
}
