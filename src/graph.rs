//! Undirected multigraphs over string labels
use log::trace;

use crate::error::ValidationError;

/// An unordered pair of vertex labels. Orientation is kept only for display.
pub type Edge = (String, String);

/// A finite undirected graph given by explicit vertex and edge lists.
///
/// Self-loops and parallel edges are stored verbatim. The vertex list keeps insertion order,
/// which fixes the traversal order of the isomorphism search but never its result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    vertices: Vec<String>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Build a graph from raw lists, as given.
    ///
    /// Nothing is deduplicated or checked here: callers that want validation should go through
    /// [`Graph::try_new`] or [`crate::GraphText::parse`].
    pub fn new<V, E, L, R>(vertices: V, edges: E) -> Self
    where
        V: IntoIterator,
        V::Item: Into<String>,
        E: IntoIterator<Item = (L, R)>,
        L: Into<String>,
        R: Into<String>,
    {
        Graph {
            vertices: vertices.into_iter().map(Into::into).collect(),
            edges: edges
                .into_iter()
                .map(|(a, b)| (a.into(), b.into()))
                .collect(),
        }
    }

    /// Build a graph from pre-tokenized lists, rejecting blank labels, duplicate vertices and
    /// edges with an endpoint outside the vertex list.
    pub fn try_new<V, E, L, R>(vertices: V, edges: E) -> Result<Self, ValidationError>
    where
        V: IntoIterator,
        V::Item: Into<String>,
        E: IntoIterator<Item = (L, R)>,
        L: Into<String>,
        R: Into<String>,
    {
        let graph = Graph::new(vertices, edges);
        crate::input::validate(&graph.vertices, &graph.edges)?;
        Ok(graph)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn has_vertex(&self, label: &str) -> bool {
        self.vertices.iter().any(|v| v == label)
    }

    /// Append `label` unless it is already present.
    pub fn add_vertex(&mut self, label: impl Into<String>) {
        let label = label.into();
        if !self.has_vertex(&label) {
            self.vertices.push(label);
        }
    }

    /// Append an edge when both endpoints are already vertices of the graph.
    ///
    /// An edge naming an unknown vertex is dropped without error; rejecting such input loudly
    /// is the job of [`crate::input`].
    pub fn add_edge<L, R>(&mut self, (v1, v2): (L, R))
    where
        L: Into<String>,
        R: Into<String>,
    {
        let (v1, v2) = (v1.into(), v2.into());
        if self.has_vertex(&v1) && self.has_vertex(&v2) {
            self.edges.push((v1, v2));
        } else {
            trace!("skipping edge {v1}-{v2}: endpoint not in graph");
        }
    }

    /// Number of edges having `label` as an endpoint. A self-loop counts once.
    pub fn degree(&self, label: &str) -> usize {
        self.edges
            .iter()
            .filter(|(a, b)| a == label || b == label)
            .count()
    }
}
