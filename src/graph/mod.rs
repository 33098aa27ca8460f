//! Weighted graphs and shortest paths
//!
//! A small utility next to the ladder solver: explicit weighted graphs with
//! Dijkstra's algorithm.

mod dijkstra;
mod model;

pub use dijkstra::{ShortestPaths, dijkstra_shortest_path};
pub use model::{Edge, Graph, GraphError, MAX_VERTICES, load_graph};
