//! vertexgraph — weighted undirected graph with traversal queries.
//!
//! A [`Graph`] owns keyed [`Vertex`] values connected by undirected weighted
//! edges. The [`graph::traversal`] functions answer reachability, path and
//! hop-count queries over it.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    breadth_first_search, breadth_first_search_within, depth_first_search, find_path,
    hop_distance, shortest_path, Graph, GraphBuilder,
};
pub use types::{
    DuplicateVertexPolicy, Edge, GraphConfig, GraphError, GraphResult, Neighbor, Vertex,
    DEFAULT_WEIGHT, UNREACHABLE,
};
