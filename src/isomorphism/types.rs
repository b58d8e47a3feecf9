use crate::graph::Graph;
use crate::permutation::*;

/// A vertex correspondence accepted by the search.
///
/// Indices refer to positions in the vertex (and edge) lists of the two graphs that were
/// compared, so the same graphs must be passed back to read it by label.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Isomorphism {
    pub(crate) nodes: Permutation,
    pub(crate) edges: Option<Permutation>,
}

impl Isomorphism {
    pub fn identity(num_vertices: usize, num_edges: usize) -> Self {
        Self {
            nodes: Permutation::identity(num_vertices),
            edges: Some(Permutation::identity(num_edges)),
        }
    }

    /// `nodes()[i]` is the position in the target graph of the image of source vertex `i`.
    pub fn nodes(&self) -> &Permutation {
        &self.nodes
    }

    /// Edge correspondence, only known when edges were matched one-to-one
    /// ([`super::EdgeMatching::Multiset`]).
    pub fn edges(&self) -> Option<&Permutation> {
        self.edges.as_ref()
    }

    /// Image of `vertex` under this mapping from `source` to `target`.
    pub fn image<'g>(&self, source: &Graph, target: &'g Graph, vertex: &str) -> Option<&'g str> {
        let i = source.vertices().iter().position(|v| v == vertex)?;
        let j = *self.nodes.get(i)?;
        target.vertices().get(j).map(String::as_str)
    }

    /// `(vertex, image)` pairs in source vertex order.
    pub fn pairs<'a>(
        &'a self,
        source: &'a Graph,
        target: &'a Graph,
    ) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        source
            .vertices()
            .iter()
            .zip(self.nodes.iter())
            .filter_map(move |(v, &j)| Some((v.as_str(), target.vertices().get(j)?.as_str())))
    }
}
