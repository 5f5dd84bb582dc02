//! Core graph structure — keyed vertex registry with undirected weighted edges.

use std::collections::HashMap;

use crate::types::{
    DuplicateVertexPolicy, Edge, GraphConfig, GraphError, GraphResult, Vertex, DEFAULT_WEIGHT,
};

/// The vertex registry. Owns every vertex it creates.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// All vertices, in registration order.
    vertices: Vec<Vertex>,
    /// Key -> position in `vertices`.
    index: HashMap<String, usize>,
    /// Number of undirected edges established.
    edge_count: usize,
    config: GraphConfig,
}

impl Graph {
    /// Create a new empty graph with the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty graph with an explicit config.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The active config.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Register a new vertex for `key` and return it.
    pub fn add_vertex(&mut self, key: impl Into<String>) -> GraphResult<&Vertex> {
        let key = key.into();
        if let Some(&pos) = self.index.get(&key) {
            return match self.config.duplicate_vertices {
                DuplicateVertexPolicy::Reject => Err(GraphError::DuplicateVertex(key)),
                DuplicateVertexPolicy::Replace => {
                    log::warn!("Replacing vertex {} and dropping its edges", key);
                    let old = std::mem::replace(&mut self.vertices[pos], Vertex::new(key));
                    for vertex in self.vertices.iter_mut() {
                        if vertex.remove_neighbor(old.key()) && old.is_adjacent(vertex.key()) {
                            self.edge_count -= 1;
                        }
                    }
                    Ok(&self.vertices[pos])
                }
            };
        }

        let pos = self.vertices.len();
        log::debug!("Adding vertex {} at position {}", key, pos);
        self.index.insert(key.clone(), pos);
        self.vertices.push(Vertex::new(key));
        Ok(&self.vertices[pos])
    }

    /// Get a vertex by key.
    pub fn vertex(&self, key: &str) -> GraphResult<&Vertex> {
        self.index
            .get(key)
            .map(|&pos| &self.vertices[pos])
            .ok_or_else(|| GraphError::VertexNotFound(key.to_string()))
    }

    /// True if `key` is registered.
    pub fn contains_vertex(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Connect two registered vertices in both directions with `weight`.
    ///
    /// Returns true if a new edge was counted. The counter only moves when
    /// neither endpoint already listed the other.
    pub fn add_edge(&mut self, key1: &str, key2: &str, weight: f64) -> GraphResult<bool> {
        let first = self.index.get(key1).copied();
        let second = self.index.get(key2).copied();

        let (first, second) = match (first, second) {
            (Some(a), Some(b)) => (a, b),
            (None, None) if key1 != key2 => {
                return Err(GraphError::EndpointsNotFound(
                    key1.to_string(),
                    key2.to_string(),
                ))
            }
            (None, _) => return Err(GraphError::VertexNotFound(key1.to_string())),
            (_, None) => return Err(GraphError::VertexNotFound(key2.to_string())),
        };

        if key1 == key2 {
            return Err(GraphError::SelfLoop(key1.to_string()));
        }

        let forward = self.vertices[first].add_neighbor(key2, weight);
        let backward = self.vertices[second].add_neighbor(key1, weight);

        if forward && backward {
            self.edge_count += 1;
            log::debug!("Added edge {} <-> {} (weight {})", key1, key2, weight);
            Ok(true)
        } else {
            if forward != backward {
                log::warn!(
                    "Edge {} <-> {} was one-directional; completed without counting",
                    key1,
                    key2
                );
            }
            Ok(false)
        }
    }

    /// Connect two registered vertices with the default weight.
    pub fn add_unweighted_edge(&mut self, key1: &str, key2: &str) -> GraphResult<bool> {
        self.add_edge(key1, key2, DEFAULT_WEIGHT)
    }

    /// All registered keys, in registration order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> + '_ {
        self.vertices.iter().map(|v| v.key())
    }

    /// Iterate over the vertices.
    pub fn iter(&self) -> std::slice::Iter<'_, Vertex> {
        self.vertices.iter()
    }

    /// Every undirected edge once, ordered by the first endpoint's registration.
    pub fn edges(&self) -> Vec<Edge> {
        let mut result = Vec::with_capacity(self.edge_count);
        for (pos, vertex) in self.vertices.iter().enumerate() {
            for neighbor in vertex.weighted_neighbors() {
                let Some(&other) = self.index.get(&neighbor.key) else {
                    continue;
                };
                // Already emitted from the other side.
                if other < pos && self.vertices[other].is_adjacent(vertex.key()) {
                    continue;
                }
                result.push(Edge::new(vertex.key(), neighbor.key.as_str(), neighbor.weight));
            }
        }
        result
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Vertex;
    type IntoIter = std::slice::Iter<'a, Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with(keys: &[&str]) -> Graph {
        let mut graph = Graph::new();
        for key in keys {
            graph.add_vertex(*key).unwrap();
        }
        graph
    }

    #[test]
    fn reverse_insert_does_not_double_count() {
        let mut graph = graph_with(&["A", "B"]);
        assert!(graph.add_edge("A", "B", 3.0).unwrap());
        assert!(!graph.add_edge("B", "A", 3.0).unwrap());
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn missing_endpoints_are_distinguished() {
        let mut graph = graph_with(&["A"]);
        assert_eq!(
            graph.add_edge("X", "Y", 1.0),
            Err(GraphError::EndpointsNotFound("X".into(), "Y".into()))
        );
        assert_eq!(
            graph.add_edge("A", "Y", 1.0),
            Err(GraphError::VertexNotFound("Y".into()))
        );
        assert_eq!(
            graph.add_edge("X", "A", 1.0),
            Err(GraphError::VertexNotFound("X".into()))
        );
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn replace_policy_drops_edges_on_both_sides() {
        let mut graph =
            Graph::with_config(GraphConfig::with_duplicate_policy(DuplicateVertexPolicy::Replace));
        for key in ["A", "B", "C"] {
            graph.add_vertex(key).unwrap();
        }
        graph.add_edge("A", "B", 1.0).unwrap();
        graph.add_edge("B", "C", 1.0).unwrap();

        let replaced = graph.add_vertex("A").unwrap();
        assert_eq!(replaced.degree(), 0);
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 1);
        assert!(!graph.vertex("B").unwrap().is_adjacent("A"));
        assert_eq!(graph.edges(), vec![Edge::new("B", "C", 1.0)]);

        // Re-linking is a fresh edge with one weight in both directions.
        assert!(graph.add_edge("A", "B", 2.0).unwrap());
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.vertex("A").unwrap().edge_weight("B").unwrap(), 2.0);
        assert_eq!(graph.vertex("B").unwrap().edge_weight("A").unwrap(), 2.0);
    }

    #[test]
    fn half_edge_completed_without_counting() {
        let mut graph = graph_with(&["A", "B", "C"]);
        graph.add_edge("A", "B", 1.0).unwrap();
        // Only A lists C.
        graph.vertices[0].add_neighbor("C", 5.0);

        assert!(!graph.add_edge("A", "C", 2.0).unwrap());
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.vertex("A").unwrap().edge_weight("C").unwrap(), 5.0);
        assert_eq!(graph.vertex("C").unwrap().edge_weight("A").unwrap(), 2.0);
    }

    #[test]
    fn edges_listed_once() {
        let mut graph = graph_with(&["A", "B", "C"]);
        graph.add_edge("A", "B", 1.0).unwrap();
        graph.add_edge("C", "A", 2.0).unwrap();
        graph.add_edge("B", "C", 0.5).unwrap();
        assert_eq!(
            graph.edges(),
            vec![
                Edge::new("A", "B", 1.0),
                Edge::new("A", "C", 2.0),
                Edge::new("B", "C", 0.5),
            ]
        );
    }
}
