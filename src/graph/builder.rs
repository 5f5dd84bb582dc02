//! Fluent API for building Graph instances.

use crate::types::{GraphConfig, GraphResult, DEFAULT_WEIGHT};

use super::Graph;

/// Fluent builder for constructing a Graph.
///
/// Edges auto-register missing endpoints, so a graph can be described by
/// its edge list alone. Errors surface from [`build`](Self::build).
pub struct GraphBuilder {
    config: GraphConfig,
    vertices: Vec<String>,
    edges: Vec<(String, String, f64)>,
}

impl GraphBuilder {
    /// Create a new builder with the default config.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create a new builder with a specific config.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Register a vertex.
    pub fn vertex(&mut self, key: impl Into<String>) -> &mut Self {
        self.vertices.push(key.into());
        self
    }

    /// Add a weighted edge.
    pub fn edge(&mut self, a: impl Into<String>, b: impl Into<String>, weight: f64) -> &mut Self {
        self.edges.push((a.into(), b.into(), weight));
        self
    }

    /// Add an edge with the default weight.
    pub fn link(&mut self, a: impl Into<String>, b: impl Into<String>) -> &mut Self {
        self.edge(a, b, DEFAULT_WEIGHT)
    }

    /// Build the final Graph.
    pub fn build(&self) -> GraphResult<Graph> {
        let mut graph = Graph::with_config(self.config);
        for key in &self.vertices {
            graph.add_vertex(key.as_str())?;
        }
        for (a, b, weight) in &self.edges {
            for key in [a, b] {
                if !graph.contains_vertex(key) {
                    graph.add_vertex(key.as_str())?;
                }
            }
            graph.add_edge(a, b, *weight)?;
        }
        Ok(graph)
    }

    /// The friend network used by the `vgraph --sample` demo.
    pub fn sample() -> Self {
        Self::sample_with_config(GraphConfig::default())
    }

    /// The sample friend network, built under `config`.
    pub fn sample_with_config(config: GraphConfig) -> Self {
        let mut builder = Self::with_config(config);
        for name in [
            "Jeorge", "Lofi", "Obama", "Josh", "Medi", "Crawford", "Reagan", "Elf", "Rob",
        ] {
            builder.vertex(name);
        }
        builder
            .link("Jeorge", "Obama")
            .link("Jeorge", "Lofi")
            .link("Jeorge", "Reagan")
            .link("Rob", "Obama")
            .link("Rob", "Crawford")
            .link("Obama", "Josh")
            .link("Josh", "Medi")
            .link("Obama", "Medi")
            .link("Crawford", "Lofi")
            .link("Crawford", "Elf");
        builder
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
