//! Shortest paths command
//!
//! Runs Dijkstra from one source and lists the route to every vertex.

use crate::graph::{Graph, GraphError, dijkstra_shortest_path};

/// Route from the source to one destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub destination: usize,
    /// Empty when the destination is unreachable
    pub path: Vec<usize>,
    pub cost: Option<u64>,
}

/// Routes from one source to every vertex
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathsReport {
    pub source: usize,
    pub routes: Vec<Route>,
}

/// Compute routes from `source` to every vertex of `graph`
///
/// # Errors
///
/// Returns [`GraphError::VertexOutOfRange`] if `source` is not a vertex.
pub fn run_paths(graph: &Graph, source: usize) -> Result<PathsReport, GraphError> {
    let shortest = dijkstra_shortest_path(graph, source)?;

    let routes = (0..graph.num_vertices())
        .map(|destination| Route {
            destination,
            path: shortest.path_to(destination),
            cost: shortest.distance_to(destination),
        })
        .collect();

    Ok(PathsReport {
        source: shortest.source(),
        routes,
    })
}
