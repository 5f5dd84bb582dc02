//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod traversal;
pub mod vertex_graph;

pub use builder::GraphBuilder;
pub use traversal::{
    breadth_first_search, breadth_first_search_within, depth_first_search, find_path,
    hop_distance, shortest_path,
};
pub use vertex_graph::Graph;
