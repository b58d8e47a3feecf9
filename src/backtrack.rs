//! Exhaustive depth-first search for a vertex bijection between two graphs.
//!
//! ```text
//! extend(mapping):
//!   if every source vertex is mapped:
//!     return check_edges(mapping)
//!   f = first unmapped source vertex (source order)
//!   for g in unused target vertices (target order):
//!     assign f -> g
//!     if extend(mapping) succeeds: keep the witness
//!     unassign f
//! ```
//!
//! Vertices are identified by label. A label listed twice in the source graph can never be
//! mapped twice, so such a graph never reaches the edge check and is reported non-isomorphic.
use std::collections::HashMap;

use log::{debug, trace};

use crate::graph::Graph;
use crate::isomorphism::{EdgeMatching, Isomorphism, SearchOptions};
use crate::nogood::{degrees, nogood};
use crate::permutation::Permutation;

pub(crate) fn find_isomorphism(
    f: &Graph,
    g: &Graph,
    options: &SearchOptions,
) -> Option<Isomorphism> {
    nogood(f, g, options.matching)?;

    let mut state = SearchState::new(f, g, options.matching);
    let found = state.extend();
    debug!(
        "search {} after checking {} complete mappings",
        if found.is_some() { "succeeded" } else { "failed" },
        state.complete_mappings
    );

    let (nodes, edges) = found?;
    let nodes = Permutation::new(nodes)?;
    let edges = match edges {
        Some(edges) => Some(Permutation::new(edges)?),
        None => None,
    };
    Some(Isomorphism { nodes, edges })
}

/// Vertex images and, under [`EdgeMatching::Multiset`], edge images.
type Witness = (Vec<usize>, Option<Vec<usize>>);

/// Partial injective map from source vertex indices to target vertex indices.
struct Mapping {
    f_to_g: Vec<Option<usize>>,
    used: Vec<bool>,
    len: usize,
}

impl Mapping {
    fn new(f_size: usize, g_size: usize) -> Self {
        Mapping {
            f_to_g: vec![None; f_size],
            used: vec![false; g_size],
            len: 0,
        }
    }

    fn assign(&mut self, f: usize, g: usize) {
        debug_assert!(self.f_to_g[f].is_none() && !self.used[g]);
        self.f_to_g[f] = Some(g);
        self.used[g] = true;
        self.len += 1;
    }

    fn unassign(&mut self, f: usize) {
        if let Some(g) = self.f_to_g[f].take() {
            self.used[g] = false;
            self.len -= 1;
        }
    }

    fn image(&self, f: usize) -> Option<usize> {
        self.f_to_g[f]
    }

    fn first_unmapped(&self) -> Option<usize> {
        self.f_to_g.iter().position(Option::is_none)
    }
}

/// Distinct labels of a graph in first-occurrence order, with edges resolved to label indices.
/// An edge whose endpoint is not a vertex resolves to `None`.
struct Indexed<'a> {
    labels: Vec<&'a str>,
    edges: Vec<Option<(usize, usize)>>,
    degrees: Vec<usize>,
}

impl<'a> Indexed<'a> {
    fn new(graph: &'a Graph) -> Self {
        let mut labels = Vec::new();
        let mut index = HashMap::new();
        let mut label_degrees = Vec::new();

        for (label, degree) in graph.vertices().iter().zip(degrees(graph)) {
            if !index.contains_key(label.as_str()) {
                index.insert(label.as_str(), labels.len());
                labels.push(label.as_str());
                label_degrees.push(degree);
            }
        }

        let edges = graph
            .edges()
            .iter()
            .map(|(a, b)| Some((*index.get(a.as_str())?, *index.get(b.as_str())?)))
            .collect();

        Indexed {
            labels,
            edges,
            degrees: label_degrees,
        }
    }
}

struct SearchState<'a> {
    f: Indexed<'a>,
    g: Indexed<'a>,

    /// Length of the raw source vertex list; a complete mapping has this many entries.
    target_len: usize,
    matching: EdgeMatching,

    mapping: Mapping,
    complete_mappings: usize,
}

impl<'a> SearchState<'a> {
    fn new(f: &'a Graph, g: &'a Graph, matching: EdgeMatching) -> Self {
        let f_index = Indexed::new(f);
        let g_index = Indexed::new(g);
        let mapping = Mapping::new(f_index.labels.len(), g_index.labels.len());

        SearchState {
            f: f_index,
            g: g_index,
            target_len: f.vertices().len(),
            matching,
            mapping,
            complete_mappings: 0,
        }
    }

    fn extend(&mut self) -> Option<Witness> {
        if self.mapping.len == self.target_len {
            self.complete_mappings += 1;
            return self.check_edges();
        }

        let f_vertex = self.mapping.first_unmapped()?;

        for g_vertex in 0..self.g.labels.len() {
            if self.mapping.used[g_vertex] || !self.compatible(f_vertex, g_vertex) {
                continue;
            }

            if let Some(witness) = self.try_pair(f_vertex, g_vertex) {
                return Some(witness);
            }
        }

        None
    }

    /// Extend the mapping by one pair for the duration of the recursive call. The pair is
    /// removed again on every outcome, so the mapping is left as it was found.
    fn try_pair(&mut self, f_vertex: usize, g_vertex: usize) -> Option<Witness> {
        trace!(
            "trying {} -> {}",
            self.f.labels[f_vertex],
            self.g.labels[g_vertex]
        );

        self.mapping.assign(f_vertex, g_vertex);
        let result = self.extend();
        self.mapping.unassign(f_vertex);

        result
    }

    /// Degree pruning. Only sound when edges are matched one-to-one.
    fn compatible(&self, f_vertex: usize, g_vertex: usize) -> bool {
        match self.matching {
            EdgeMatching::Existential => true,
            EdgeMatching::Multiset => self.f.degrees[f_vertex] == self.g.degrees[g_vertex],
        }
    }

    /// Every source edge, pushed through the mapping, must equal some target edge as an
    /// unordered pair. Under [`EdgeMatching::Multiset`] each target edge is used at most once.
    fn check_edges(&self) -> Option<Witness> {
        let consume = self.matching == EdgeMatching::Multiset;
        let mut consumed = vec![false; self.g.edges.len()];
        let mut edge_images = Vec::with_capacity(self.f.edges.len());

        for f_edge in &self.f.edges {
            let (a, b) = (*f_edge)?;
            let image = (self.mapping.image(a)?, self.mapping.image(b)?);

            let found = self.g.edges.iter().enumerate().position(|(j, g_edge)| {
                !(consume && consumed[j])
                    && matches!(g_edge, Some(g_edge) if same_pair(image, *g_edge))
            })?;

            consumed[found] = consume;
            edge_images.push(found);
        }

        let nodes = (0..self.f.labels.len())
            .map(|f_vertex| self.mapping.image(f_vertex))
            .collect::<Option<Vec<_>>>()?;
        let edges = consume.then_some(edge_images);
        Some((nodes, edges))
    }
}

fn same_pair((a, b): (usize, usize), (c, d): (usize, usize)) -> bool {
    (a == c && b == d) || (a == d && b == c)
}
