//! Error types for hops-core.

use thiserror::Error;

/// Result type alias for hops-core operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors that can occur while loading, building or querying a graph.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A query named a node that was never registered.
    #[error("Unknown node: {name}")]
    UnknownNode {
        /// Name as it was looked up (after case normalization).
        name: String,
    },

    /// Both nodes exist but no path connects them.
    #[error("No path from {from} to {to}")]
    Unreachable {
        /// Start node name.
        from: String,
        /// Destination node name.
        to: String,
    },

    /// An edge endpoint could not be resolved to an index during construction.
    #[error("Failed to add edge {from} -- {to}: endpoint not registered")]
    UnresolvedEdge {
        /// First endpoint.
        from: String,
        /// Second endpoint.
        to: String,
    },

    /// A line of the edge list could not be turned into an edge.
    #[error("Malformed input at line {line}: {reason}")]
    MalformedInput {
        /// 1-based line number in the source text.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// IO error reading an edge-list file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Whether this error happened while answering a query, as opposed to
    /// while loading or building the graph.
    pub fn is_query_error(&self) -> bool {
        matches!(
            self,
            GraphError::UnknownNode { .. } | GraphError::Unreachable { .. }
        )
    }
}
