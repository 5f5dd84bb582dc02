//! Vertex: a keyed node and its weighted adjacency.

use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::{GraphError, GraphResult};

/// One adjacency entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor {
    /// Key of the adjacent vertex.
    pub key: String,
    /// Weight of the connecting edge.
    pub weight: f64,
}

/// A named node in the graph.
///
/// Identity is the key alone: equality and hashing ignore adjacency.
#[derive(Debug, Clone, Serialize)]
pub struct Vertex {
    key: String,
    /// Adjacency in insertion order.
    neighbors: Vec<Neighbor>,
    /// Neighbor key -> position in `neighbors`.
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Vertex {
    /// Create a vertex with no neighbors.
    pub(crate) fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            neighbors: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// The vertex key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Register `neighbor` with `weight` unless it is already adjacent.
    /// Returns true if an entry was inserted.
    pub(crate) fn add_neighbor(&mut self, neighbor: &str, weight: f64) -> bool {
        if self.index.contains_key(neighbor) {
            return false;
        }
        self.index.insert(neighbor.to_string(), self.neighbors.len());
        self.neighbors.push(Neighbor {
            key: neighbor.to_string(),
            weight,
        });
        true
    }

    /// Drop `neighbor` from the adjacency, keeping the order of the rest.
    /// Returns true if an entry was removed.
    pub(crate) fn remove_neighbor(&mut self, neighbor: &str) -> bool {
        let Some(pos) = self.index.remove(neighbor) else {
            return false;
        };
        self.neighbors.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        true
    }

    /// Keys of all adjacent vertices, in insertion order.
    pub fn neighbors(&self) -> impl Iterator<Item = &str> + '_ {
        self.neighbors.iter().map(|n| n.key.as_str())
    }

    /// Adjacency entries with weights.
    pub fn weighted_neighbors(&self) -> &[Neighbor] {
        &self.neighbors
    }

    /// Weight of the edge to `neighbor`.
    pub fn edge_weight(&self, neighbor: &str) -> GraphResult<f64> {
        self.index
            .get(neighbor)
            .map(|&pos| self.neighbors[pos].weight)
            .ok_or_else(|| GraphError::EdgeNotFound {
                vertex: self.key.clone(),
                neighbor: neighbor.to_string(),
            })
    }

    /// True if `neighbor` is adjacent.
    pub fn is_adjacent(&self, neighbor: &str) -> bool {
        self.index.contains_key(neighbor)
    }

    /// Number of adjacent vertices.
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keys: Vec<&str> = self.neighbors().collect();
        write!(f, "{} adjacent to [{}]", self.key, keys.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_neighbor_is_idempotent() {
        let mut v = Vertex::new("A");
        assert!(v.add_neighbor("B", 2.0));
        assert!(!v.add_neighbor("B", 7.0));
        assert_eq!(v.degree(), 1);
        assert_eq!(v.edge_weight("B").unwrap(), 2.0);
    }

    #[test]
    fn missing_edge_differs_from_zero_weight() {
        let mut v = Vertex::new("A");
        v.add_neighbor("B", 0.0);
        assert_eq!(v.edge_weight("B").unwrap(), 0.0);
        match v.edge_weight("C") {
            Err(GraphError::EdgeNotFound { vertex, neighbor }) => {
                assert_eq!(vertex, "A");
                assert_eq!(neighbor, "C");
            }
            other => panic!("Expected EdgeNotFound, got {:?}", other),
        }
    }

    #[test]
    fn remove_neighbor_keeps_lookup_consistent() {
        let mut v = Vertex::new("A");
        v.add_neighbor("B", 1.0);
        v.add_neighbor("C", 2.0);
        v.add_neighbor("D", 3.0);
        assert!(v.remove_neighbor("B"));
        assert!(!v.remove_neighbor("B"));
        assert_eq!(v.neighbors().collect::<Vec<_>>(), vec!["C", "D"]);
        assert_eq!(v.edge_weight("D").unwrap(), 3.0);
        assert!(v.edge_weight("B").is_err());
    }

    #[test]
    fn equality_is_by_key() {
        let mut a = Vertex::new("A");
        a.add_neighbor("B", 1.0);
        let bare = Vertex::new("A");
        assert_eq!(a, bare);
        assert_ne!(a, Vertex::new("B"));
    }

    #[test]
    fn neighbors_keep_insertion_order() {
        let mut v = Vertex::new("A");
        for key in ["D", "B", "C"] {
            v.add_neighbor(key, 1.0);
        }
        assert_eq!(v.neighbors().collect::<Vec<_>>(), vec!["D", "B", "C"]);
        assert_eq!(v.to_string(), "A adjacent to [D, B, C]");
    }
}
