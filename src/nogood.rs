use std::collections::HashMap;
use std::hash::Hash;

use log::debug;

use crate::graph::Graph;
use crate::isomorphism::EdgeMatching;

/// Necessary conditions checked before any search.
///
/// Vertex and edge counts must agree. Degree sequences are only compared under
/// [`EdgeMatching::Multiset`]: the existential edge check can accept mappings that do not
/// preserve degrees, so rejecting on them there would change the answer.
pub(crate) fn nogood(f: &Graph, g: &Graph, matching: EdgeMatching) -> Option<()> {
    if f.vertices().len() != g.vertices().len() {
        debug!(
            "vertex counts differ ({} vs {})",
            f.vertices().len(),
            g.vertices().len()
        );
        return None;
    }

    if f.edges().len() != g.edges().len() {
        debug!(
            "edge counts differ ({} vs {})",
            f.edges().len(),
            g.edges().len()
        );
        return None;
    }

    if matching == EdgeMatching::Multiset && !is_sorted_equal(&degrees(f), &degrees(g)) {
        debug!("degree sequences differ");
        return None;
    }

    Some(())
}

pub(crate) fn degrees(graph: &Graph) -> Vec<usize> {
    graph.vertices().iter().map(|v| graph.degree(v)).collect()
}

/// Check that two vecs are equal once sorted (exact length and elements)
fn is_sorted_equal<T: Eq + Hash>(x: &[T], y: &[T]) -> bool {
    if x.len() != y.len() {
        return false;
    }

    let mut counts = HashMap::new();

    for item in x {
        *counts.entry(item).or_insert(0) += 1;
    }

    for item in y {
        match counts.get_mut(item) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }

    true
}
