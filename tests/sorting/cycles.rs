//! Tests for cycle detection

use test_case::test_case;
use topograph::{DfsSorter, GraphError, GraphResult};

use crate::common::with_edges;

type Edges = &'static [(&'static str, &'static str)];

#[test_case(&[("A", "B"), ("B", "C"), ("C", "A")] ; "triangle")]
#[test_case(&[("A", "A")] ; "self loop")]
#[test_case(&[("A", "B"), ("B", "A")] ; "two node cycle")]
#[test_case(&[("A", "B"), ("B", "C"), ("C", "D"), ("D", "B")] ; "cycle below a root")]
#[test_case(&[("X", "Y"), ("A", "B"), ("B", "C"), ("C", "A")] ; "cycle in second component")]
#[test_case(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D"), ("D", "A")] ; "cycle through diamond")]
fn test_cycle_is_rejected(edges: Edges) {
    let graph = with_edges(&[], edges);

    let result: GraphResult<Vec<_>> = graph.dfs_sort();

    assert_eq!(result, Err(GraphError::CyclicGraph));
}

#[test]
fn test_cycle_error_is_repeatable() {
    let graph = topograph_test::cycle(10);
    let sorter = DfsSorter::new(&graph);

    assert_eq!(sorter.sort(), Err(GraphError::CyclicGraph));
    assert_eq!(sorter.sort(), Err(GraphError::CyclicGraph));
}

#[test]
fn test_cycle_error_message() {
    let graph = topograph_test::cycle(3);

    let err = graph.dfs_sort().unwrap_err();

    assert!(err.to_string().contains("cannot be cyclic"));
}

#[test]
fn test_shared_descendant_is_not_a_cycle() {
    // D is reached twice, but never while it is on the active path
    let graph = with_edges(&[], &[("A", "D"), ("B", "D"), ("A", "B")]);

    assert_eq!(graph.dfs_sort(), Ok(vec!["A", "B", "D"]));
}

#[test]
fn test_breaking_cycle_restores_sort() {
    let mut graph = topograph_test::cycle(4);
    assert!(graph.dfs_sort().is_err());

    graph.remove_edge(&3, &0);

    assert_eq!(graph.dfs_sort(), Ok(vec![0, 1, 2, 3]));
}
