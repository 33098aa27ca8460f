//! Weighted directed graph and its text format
//!
//! The text format is whitespace separated: the vertex count first, then any
//! number of `src dst weight` triples.
//!
//! ```text
//! 4
//! 0 1 5
//! 0 2 3
//! 2 1 1
//! ```

use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// A directed, weighted edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub src: usize,
    pub dst: usize,
    pub weight: u32,
}

impl Edge {
    #[must_use]
    pub const fn new(src: usize, dst: usize, weight: u32) -> Self {
        Self { src, dst, weight }
    }
}

/// Errors from building or loading a graph
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("failed to read graph file: {0}")]
    Io(#[from] io::Error),

    #[error("graph text is missing the vertex count")]
    MissingVertexCount,

    #[error("invalid token '{token}' at position {position}")]
    InvalidToken { token: String, position: usize },

    #[error("edge list ends in the middle of an edge")]
    TruncatedEdge,

    #[error("vertex {vertex} is out of range for a graph of {vertices} vertices")]
    VertexOutOfRange { vertex: usize, vertices: usize },

    #[error("vertex count {count} is too large")]
    TooManyVertices { count: usize },
}

/// Largest vertex count accepted from graph text
pub const MAX_VERTICES: usize = 1 << 24;

/// Adjacency-list graph over vertices `0..num_vertices`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Create a graph with `num_vertices` vertices and no edges
    #[must_use]
    pub fn with_vertices(num_vertices: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); num_vertices],
        }
    }

    /// Create a graph with `num_vertices` vertices, failing instead of
    /// aborting when the count cannot be allocated
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::TooManyVertices`] if `num_vertices` exceeds
    /// [`MAX_VERTICES`] or the adjacency list cannot be allocated.
    pub fn try_with_vertices(num_vertices: usize) -> Result<Self, GraphError> {
        let too_many = || GraphError::TooManyVertices {
            count: num_vertices,
        };
        if num_vertices > MAX_VERTICES {
            return Err(too_many());
        }

        let mut adjacency: Vec<Vec<Edge>> = Vec::new();
        adjacency
            .try_reserve_exact(num_vertices)
            .map_err(|_| too_many())?;
        adjacency.resize_with(num_vertices, Vec::new);

        Ok(Self { adjacency })
    }

    /// Add a directed edge
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] if either endpoint does not
    /// exist.
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        let vertices = self.num_vertices();
        for vertex in [edge.src, edge.dst] {
            if vertex >= vertices {
                return Err(GraphError::VertexOutOfRange { vertex, vertices });
            }
        }
        self.adjacency[edge.src].push(edge);
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Outgoing edges of `vertex` (empty if the vertex does not exist)
    #[must_use]
    pub fn edges_from(&self, vertex: usize) -> &[Edge] {
        self.adjacency.get(vertex).map_or(&[], Vec::as_slice)
    }

    /// Total number of edges
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Parse the whitespace-separated text format
    ///
    /// # Errors
    ///
    /// Returns a [`GraphError`] describing the first malformed token,
    /// truncated edge, out-of-range vertex, or oversized vertex count.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::graph::Graph;
    ///
    /// let graph = Graph::parse("3\n0 1 4\n1 2 1\n").unwrap();
    /// assert_eq!(graph.num_vertices(), 3);
    /// assert_eq!(graph.num_edges(), 2);
    /// ```
    pub fn parse(text: &str) -> Result<Self, GraphError> {
        let mut tokens = text.split_whitespace().enumerate();

        let (position, first) = tokens.next().ok_or(GraphError::MissingVertexCount)?;
        let num_vertices: usize = parse_token(first, position)?;
        let mut graph = Self::try_with_vertices(num_vertices)?;

        while let Some((position, token)) = tokens.next() {
            let src: usize = parse_token(token, position)?;
            let (position, token) = tokens.next().ok_or(GraphError::TruncatedEdge)?;
            let dst: usize = parse_token(token, position)?;
            let (position, token) = tokens.next().ok_or(GraphError::TruncatedEdge)?;
            let weight: u32 = parse_token(token, position)?;

            graph.add_edge(Edge::new(src, dst, weight))?;
        }

        Ok(graph)
    }
}

fn parse_token<T: std::str::FromStr>(token: &str, position: usize) -> Result<T, GraphError> {
    token.parse().map_err(|_| GraphError::InvalidToken {
        token: token.to_string(),
        position,
    })
}

/// Load a graph from a file in the text format
///
/// # Errors
///
/// Returns [`GraphError::Io`] if the file cannot be read, or a parse error.
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<Graph, GraphError> {
    let content = fs::read_to_string(path)?;
    Graph::parse(&content)
}
