//! All data types for the vertexgraph library.

pub mod config;
pub mod edge;
pub mod error;
pub mod vertex;

pub use config::{DuplicateVertexPolicy, GraphConfig};
pub use edge::{Edge, DEFAULT_WEIGHT};
pub use error::{GraphError, GraphResult};
pub use vertex::{Neighbor, Vertex};

/// Hop distance reported by `shortest_path` when no path exists.
pub const UNREACHABLE: i64 = -1;
