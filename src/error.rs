//! Error types for graph sorting.
//!
//! Building and querying a graph never fails. The only failure in this crate is a
//! topological sort running into a directed cycle.

/// Errors that can occur while sorting a graph
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GraphError {
    /// The sorter found an edge back to a node on the active path
    CyclicGraph,
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::CyclicGraph => {
                write!(
                    f,
                    "The graph cannot be cyclic\n\
                     \n\
                     A directed cycle makes a topological order impossible. \
                     Remove or redirect one of its edges and sort again."
                )
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;
