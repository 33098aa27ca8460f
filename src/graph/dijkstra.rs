//! Single-source shortest paths with Dijkstra's algorithm
//!
//! Uses a binary min-heap with lazy deletion: stale heap entries are skipped
//! when their vertex has already been settled.

use super::model::{Graph, GraphError};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Distances and predecessor links from one source vertex
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    source: usize,
    distances: Vec<Option<u64>>,
    previous: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// Vertex the paths start from
    #[inline]
    #[must_use]
    pub const fn source(&self) -> usize {
        self.source
    }

    /// Shortest distance to every vertex; `None` if unreachable
    #[inline]
    #[must_use]
    pub fn distances(&self) -> &[Option<u64>] {
        &self.distances
    }

    /// Shortest distance to `vertex`
    #[must_use]
    pub fn distance_to(&self, vertex: usize) -> Option<u64> {
        self.distances.get(vertex).copied().flatten()
    }

    /// Predecessor of `vertex` on its shortest path
    #[must_use]
    pub fn previous(&self, vertex: usize) -> Option<usize> {
        self.previous.get(vertex).copied().flatten()
    }

    /// Vertex sequence from the source to `destination`
    ///
    /// Returns `[source]` for the source itself and an empty path for
    /// unreachable or unknown vertices.
    #[must_use]
    pub fn path_to(&self, destination: usize) -> Vec<usize> {
        if self.distance_to(destination).is_none() {
            return Vec::new();
        }

        let mut path = vec![destination];
        let mut cursor = self.previous(destination);
        while let Some(vertex) = cursor {
            path.push(vertex);
            cursor = self.previous(vertex);
        }

        path.reverse();
        path
    }
}

/// Compute shortest paths from `source` to every vertex
///
/// # Errors
///
/// Returns [`GraphError::VertexOutOfRange`] if `source` is not a vertex.
///
/// # Examples
/// ```
/// use word_ladder::graph::{Graph, dijkstra_shortest_path};
///
/// let graph = Graph::parse("3\n0 1 5\n0 2 1\n2 1 1").unwrap();
/// let paths = dijkstra_shortest_path(&graph, 0).unwrap();
///
/// assert_eq!(paths.distance_to(1), Some(2));
/// assert_eq!(paths.path_to(1), vec![0, 2, 1]);
/// ```
pub fn dijkstra_shortest_path(graph: &Graph, source: usize) -> Result<ShortestPaths, GraphError> {
    let n = graph.num_vertices();
    if source >= n {
        return Err(GraphError::VertexOutOfRange {
            vertex: source,
            vertices: n,
        });
    }

    let mut distances: Vec<Option<u64>> = vec![None; n];
    let mut previous: Vec<Option<usize>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut heap = BinaryHeap::new();

    distances[source] = Some(0);
    heap.push(Reverse((0_u64, source)));

    while let Some(Reverse((dist, u))) = heap.pop() {
        if settled[u] {
            continue;
        }
        settled[u] = true;

        for edge in graph.edges_from(u) {
            let v = edge.dst;
            if settled[v] {
                continue;
            }

            let candidate = dist + u64::from(edge.weight);
            if distances[v].is_none_or(|current| candidate < current) {
                distances[v] = Some(candidate);
                previous[v] = Some(u);
                heap.push(Reverse((candidate, v)));
            }
        }
    }

    Ok(ShortestPaths {
        source,
        distances,
        previous,
    })
}
