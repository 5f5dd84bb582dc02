//! CLI command implementations.
//!
//! Each command renders its result to a string (text or JSON) and leaves
//! printing to the binary.

use crate::graph::{
    breadth_first_search, breadth_first_search_within, depth_first_search, find_path,
    shortest_path, Graph, GraphBuilder,
};
use crate::types::{GraphConfig, GraphError, GraphResult, UNREACHABLE};

/// Parse an edge argument of the form `A,B` or `A,B,WEIGHT`.
pub fn parse_edge_spec(spec: &str) -> GraphResult<(String, String, Option<f64>)> {
    let parts: Vec<&str> = spec.split(',').map(str::trim).collect();
    let (a, b, weight) = match parts.as_slice() {
        [a, b] => (*a, *b, None),
        [a, b, w] => {
            let weight = w
                .parse::<f64>()
                .map_err(|_| GraphError::InvalidEdgeSpec(format!("bad weight in {:?}", spec)))?;
            (*a, *b, Some(weight))
        }
        _ => {
            return Err(GraphError::InvalidEdgeSpec(format!(
                "expected A,B or A,B,WEIGHT, got {:?}",
                spec
            )))
        }
    };
    if a.is_empty() || b.is_empty() {
        return Err(GraphError::InvalidEdgeSpec(format!(
            "empty vertex key in {:?}",
            spec
        )));
    }
    Ok((a.to_string(), b.to_string(), weight))
}

/// Build the graph described by command-line arguments.
///
/// Starts from the sample friend network when `sample` is set or when no
/// vertices or edges were given; any given vertices and edges are added on
/// top of it.
pub fn build_graph(
    vertices: &[String],
    edges: &[String],
    sample: bool,
    config: GraphConfig,
) -> GraphResult<Graph> {
    let mut builder = if sample || (vertices.is_empty() && edges.is_empty()) {
        GraphBuilder::sample_with_config(config)
    } else {
        GraphBuilder::with_config(config)
    };
    for key in vertices {
        builder.vertex(key.as_str());
    }
    for spec in edges {
        let (a, b, weight) = parse_edge_spec(spec)?;
        match weight {
            Some(w) => builder.edge(a, b, w),
            None => builder.link(a, b),
        };
    }
    let graph = builder.build()?;
    log::debug!(
        "Built graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn pretty(value: serde_json::Value) -> String {
    serde_json::to_string_pretty(&value).unwrap_or_default()
}

/// List all vertex keys.
pub fn cmd_vertices(graph: &Graph, json: bool) -> GraphResult<String> {
    let keys: Vec<&str> = graph.vertices().collect();
    if json {
        Ok(pretty(serde_json::json!({
            "count": graph.vertex_count(),
            "vertices": keys,
        })))
    } else {
        Ok(format!("The vertices are: {}", keys.join(", ")))
    }
}

/// List every undirected edge.
pub fn cmd_edges(graph: &Graph, json: bool) -> GraphResult<String> {
    let edges = graph.edges();
    if json {
        Ok(pretty(serde_json::json!({
            "count": graph.edge_count(),
            "edges": edges,
        })))
    } else {
        let lines: Vec<String> = edges.iter().map(|e| e.to_string()).collect();
        Ok(format!("The edges are:\n{}", lines.join("\n")))
    }
}

/// Show one vertex and its weighted neighbors.
pub fn cmd_show(graph: &Graph, key: &str, json: bool) -> GraphResult<String> {
    let vertex = graph.vertex(key)?;
    if json {
        Ok(pretty(serde_json::json!(vertex)))
    } else {
        let mut out = format!("{}", vertex);
        for neighbor in vertex.weighted_neighbors() {
            out.push_str(&format!("\n  {} (weight {})", neighbor.key, neighbor.weight));
        }
        Ok(out)
    }
}

/// BFS reachability from `start`, optionally bounded by hop count.
pub fn cmd_reach(
    graph: &Graph,
    start: &str,
    max_hops: Option<usize>,
    json: bool,
) -> GraphResult<String> {
    let reached = match max_hops {
        Some(limit) => breadth_first_search_within(graph, start, limit)?,
        None => breadth_first_search(graph, start)?,
    };
    let keys: Vec<&str> = reached.iter().map(|v| v.key()).collect();
    if json {
        Ok(pretty(serde_json::json!({
            "start": start,
            "max_hops": max_hops,
            "reached": keys,
        })))
    } else {
        Ok(format!("Reachable from {}: {}", start, keys.join(", ")))
    }
}

/// DFS path existence.
pub fn cmd_connected(graph: &Graph, from: &str, to: &str, json: bool) -> GraphResult<String> {
    let connected = depth_first_search(graph, graph.vertex(from)?, graph.vertex(to)?)?;
    if json {
        Ok(serde_json::json!({"from": from, "to": to, "connected": connected}).to_string())
    } else if connected {
        Ok(format!("{} and {} are connected", from, to))
    } else {
        Ok(format!("No path between {} and {}", from, to))
    }
}

/// DFS path reconstruction.
pub fn cmd_path(graph: &Graph, from: &str, to: &str, json: bool) -> GraphResult<String> {
    let path = find_path(graph, from, to)?;
    if json {
        return Ok(serde_json::json!({"from": from, "to": to, "path": path}).to_string());
    }
    match path {
        Some(keys) => Ok(keys.join(" -> ")),
        None => Ok(format!("No path between {} and {}", from, to)),
    }
}

/// BFS hop count; prints `-1` when unreachable.
pub fn cmd_distance(graph: &Graph, from: &str, to: &str, json: bool) -> GraphResult<String> {
    let hops = shortest_path(graph, graph.vertex(from)?, graph.vertex(to)?)?;
    if json {
        Ok(serde_json::json!({
            "from": from,
            "to": to,
            "hops": hops,
            "reachable": hops != UNREACHABLE,
        })
        .to_string())
    } else {
        Ok(format!("Distance from {} to {}: {}", from, to, hops))
    }
}

/// Weight of the edge between two vertices.
pub fn cmd_weight(graph: &Graph, from: &str, to: &str, json: bool) -> GraphResult<String> {
    let weight = graph.vertex(from)?.edge_weight(to)?;
    if json {
        Ok(serde_json::json!({"from": from, "to": to, "weight": weight}).to_string())
    } else {
        Ok(format!("Weight of {} - {}: {}", from, to, weight))
    }
}
