//! Error types for the vertexgraph library.

use thiserror::Error;

/// All errors that can occur in the vertexgraph library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Vertex not found by key.
    #[error("Vertex {0} not found")]
    VertexNotFound(String),

    /// Neither endpoint of an edge is registered.
    #[error("Neither vertex {0} nor vertex {1} found")]
    EndpointsNotFound(String, String),

    /// No edge between two vertices.
    #[error("Vertex {vertex} has no edge to {neighbor}")]
    EdgeNotFound { vertex: String, neighbor: String },

    /// Self-loop not allowed.
    #[error("Self-loop not allowed on vertex {0}")]
    SelfLoop(String),

    /// Key already registered and the graph rejects duplicates.
    #[error("Vertex {0} already exists")]
    DuplicateVertex(String),

    /// Malformed edge argument on the command line.
    #[error("Invalid edge spec: {0}")]
    InvalidEdgeSpec(String),
}

impl GraphError {
    /// True for the not-found class (missing vertex, endpoints or edge).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GraphError::VertexNotFound(_)
                | GraphError::EndpointsNotFound(_, _)
                | GraphError::EdgeNotFound { .. }
        )
    }
}

/// Convenience result type for vertexgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
