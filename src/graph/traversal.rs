//! Graph traversal algorithms (BFS and DFS).
//!
//! All traversals are iterative and ignore edge weights. Missing input
//! vertices are errors; an absent path is a normal answer.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::types::{GraphResult, Vertex, UNREACHABLE};

use super::Graph;

/// Every vertex reachable from `start`, each once, in discovery order.
pub fn breadth_first_search<'g>(graph: &'g Graph, start: &str) -> GraphResult<Vec<&'g Vertex>> {
    bfs_collect(graph, start, None)
}

/// Vertices within `max_hops` edges of `start`, in discovery order.
///
/// `max_hops == 0` yields only the start vertex.
pub fn breadth_first_search_within<'g>(
    graph: &'g Graph,
    start: &str,
    max_hops: usize,
) -> GraphResult<Vec<&'g Vertex>> {
    bfs_collect(graph, start, Some(max_hops))
}

fn bfs_collect<'g>(
    graph: &'g Graph,
    start: &str,
    max_hops: Option<usize>,
) -> GraphResult<Vec<&'g Vertex>> {
    let start_vertex = graph.vertex(start)?;

    let mut visited: HashSet<&str> = HashSet::new();
    let mut reached: Vec<&Vertex> = Vec::new();
    let mut queue: VecDeque<(&Vertex, usize)> = VecDeque::new();

    visited.insert(start_vertex.key());
    reached.push(start_vertex);
    queue.push_back((start_vertex, 0));

    while let Some((current, depth)) = queue.pop_front() {
        if max_hops.is_some_and(|limit| depth >= limit) {
            continue;
        }

        for key in current.neighbors() {
            if !visited.insert(key) {
                continue;
            }
            let neighbor = graph.vertex(key)?;
            reached.push(neighbor);
            queue.push_back((neighbor, depth + 1));
        }
    }

    log::trace!("BFS from {} reached {} vertices", start, reached.len());
    Ok(reached)
}

/// True if any path connects `origin` to `destination`.
///
/// Both vertices are resolved in `graph` by key; a key not registered in
/// `graph` is `VertexNotFound`.
pub fn depth_first_search(
    graph: &Graph,
    origin: &Vertex,
    destination: &Vertex,
) -> GraphResult<bool> {
    let origin = graph.vertex(origin.key())?;
    let destination = graph.vertex(destination.key())?;
    if origin == destination {
        return Ok(true);
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack: Vec<&Vertex> = vec![origin];
    visited.insert(origin.key());

    while let Some(current) = stack.pop() {
        for key in current.neighbors() {
            if key == destination.key() {
                return Ok(true);
            }
            if visited.insert(key) {
                stack.push(graph.vertex(key)?);
            }
        }
    }

    log::trace!(
        "DFS exhausted {} vertices without reaching {}",
        visited.len(),
        destination.key()
    );
    Ok(false)
}

/// Keys along a path from `from` to `to`, or `None` if there is none.
///
/// The path starts with `from`, ends with `to`, and each consecutive pair is
/// adjacent. `from == to` yields the single-element path.
pub fn find_path(graph: &Graph, from: &str, to: &str) -> GraphResult<Option<Vec<String>>> {
    let origin = graph.vertex(from)?;
    graph.vertex(to)?;
    if from == to {
        return Ok(Some(vec![from.to_string()]));
    }

    let mut visited: HashSet<&str> = HashSet::new();
    // The stack is the current path; each frame holds its next neighbor slot.
    let mut stack: Vec<(&Vertex, usize)> = vec![(origin, 0)];
    visited.insert(origin.key());

    while let Some((vertex, cursor)) = stack.last_mut() {
        let vertex: &Vertex = *vertex;
        let Some(next) = vertex.weighted_neighbors().get(*cursor) else {
            stack.pop();
            continue;
        };
        *cursor += 1;

        let key = next.key.as_str();
        if !visited.insert(key) {
            continue;
        }
        if key == to {
            let mut path: Vec<String> = stack.iter().map(|(v, _)| v.key().to_string()).collect();
            path.push(key.to_string());
            log::trace!("Found path {} -> {} with {} hops", from, to, path.len() - 1);
            return Ok(Some(path));
        }
        stack.push((graph.vertex(key)?, 0));
    }

    Ok(None)
}

/// Hop count of the shortest path between two keys, or `None` if unreachable.
pub fn hop_distance(graph: &Graph, from: &str, to: &str) -> GraphResult<Option<usize>> {
    let origin = graph.vertex(from)?;
    graph.vertex(to)?;

    let mut distances: HashMap<&str, usize> = HashMap::new();
    let mut queue: VecDeque<&Vertex> = VecDeque::new();
    distances.insert(origin.key(), 0);
    queue.push_back(origin);

    while let Some(current) = queue.pop_front() {
        let distance = distances[current.key()];
        if current.key() == to {
            return Ok(Some(distance));
        }
        for key in current.neighbors() {
            if distances.contains_key(key) {
                continue;
            }
            distances.insert(key, distance + 1);
            queue.push_back(graph.vertex(key)?);
        }
    }

    Ok(None)
}

/// Hop count of the shortest path, or [`UNREACHABLE`] (`-1`).
///
/// Edge weights are not consulted.
pub fn shortest_path(graph: &Graph, origin: &Vertex, destination: &Vertex) -> GraphResult<i64> {
    let distance = hop_distance(graph, origin.key(), destination.key())?;
    Ok(distance.map_or(UNREACHABLE, |d| d as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GraphError;

    fn path_graph(len: usize) -> Graph {
        let mut graph = Graph::new();
        for i in 0..len {
            graph.add_vertex(format!("v{}", i)).unwrap();
        }
        for i in 1..len {
            graph
                .add_edge(&format!("v{}", i - 1), &format!("v{}", i), 1.0)
                .unwrap();
        }
        graph
    }

    #[test]
    fn bounded_bfs_stops_at_limit() {
        let graph = path_graph(6);
        let keys = |limit| -> Vec<String> {
            breadth_first_search_within(&graph, "v0", limit)
                .unwrap()
                .iter()
                .map(|v| v.key().to_string())
                .collect()
        };
        assert_eq!(keys(0), vec!["v0"]);
        assert_eq!(keys(2), vec!["v0", "v1", "v2"]);
        assert_eq!(keys(10).len(), 6);
    }

    #[test]
    fn long_chain_does_not_recurse() {
        let graph = path_graph(20_000);
        let path = find_path(&graph, "v0", "v19999").unwrap().unwrap();
        assert_eq!(path.len(), 20_000);
        assert_eq!(hop_distance(&graph, "v0", "v19999").unwrap(), Some(19_999));
    }

    #[test]
    fn foreign_vertex_is_not_found() {
        let graph = path_graph(2);
        let mut other = Graph::new();
        let stranger = other.add_vertex("zz").unwrap().clone();
        let v0 = graph.vertex("v0").unwrap();
        assert_eq!(
            depth_first_search(&graph, v0, &stranger),
            Err(GraphError::VertexNotFound("zz".into()))
        );
    }
}
