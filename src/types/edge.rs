//! The undirected edge record.

use serde::Serialize;

/// Default weight for edges added without one.
pub const DEFAULT_WEIGHT: f64 = 0.0;

/// An undirected, weighted connection between two vertices.
///
/// The graph stores each edge as a pair of adjacency entries; this struct is
/// the flattened view returned by [`Graph::edges`](crate::graph::Graph::edges).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    /// Endpoint registered first.
    pub first: String,
    /// The other endpoint.
    pub second: String,
    /// Weight shared by both directions.
    pub weight: f64,
}

impl Edge {
    /// Create a new edge record.
    pub fn new(first: impl Into<String>, second: impl Into<String>, weight: f64) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            weight,
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "( {} , {} ) weight {}", self.first, self.second, self.weight)
    }
}
