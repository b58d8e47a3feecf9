/// Isomorphism witnesses
pub mod types;

/// Search configuration
pub mod options;

pub use options::{EdgeMatching, SearchOptions};
pub use types::Isomorphism;

use crate::graph::Graph;

impl Graph {
    /// Decide whether some bijection of vertices carries every edge of `self` onto an edge of
    /// `other`, with the default [`EdgeMatching::Existential`] rule.
    ///
    /// Graphs with different vertex or edge counts are rejected without searching. Otherwise
    /// every bijection may be tried, so this is only practical for small graphs.
    pub fn is_isomorphic(&self, other: &Graph) -> bool {
        self.find_isomorphism(other).is_some()
    }

    pub fn is_isomorphic_with(&self, other: &Graph, options: &SearchOptions) -> bool {
        self.find_isomorphism_with(other, options).is_some()
    }

    /// Like [`Graph::is_isomorphic`], returning the first accepted mapping.
    pub fn find_isomorphism(&self, other: &Graph) -> Option<Isomorphism> {
        self.find_isomorphism_with(other, &SearchOptions::default())
    }

    pub fn find_isomorphism_with(
        &self,
        other: &Graph,
        options: &SearchOptions,
    ) -> Option<Isomorphism> {
        crate::backtrack::find_isomorphism(self, other, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_edges() -> Vec<(&'static str, &'static str)> {
        Vec::new()
    }

    #[test]
    fn test_triangles() {
        let a = Graph::new(["A", "B", "C"], [("A", "B"), ("B", "C"), ("C", "A")]);
        let b = Graph::new(["X", "Y", "Z"], [("X", "Y"), ("Y", "Z"), ("Z", "X")]);
        assert!(a.is_isomorphic(&b));
        assert!(b.is_isomorphic(&a));

        let found = a.find_isomorphism(&b).expect("both are 3-cycles");
        let pairs: Vec<_> = found.pairs(&a, &b).collect();
        assert_eq!(pairs, [("A", "X"), ("B", "Y"), ("C", "Z")]);
        assert_eq!(found.image(&a, &b, "B"), Some("Y"));
        assert_eq!(found.image(&a, &b, "Q"), None);
    }

    #[test]
    fn test_path_against_cycle() {
        let path = Graph::new(["A", "B", "C"], [("A", "B"), ("B", "C")]);
        let cycle = Graph::new(["X", "Y", "Z"], [("X", "Y"), ("Y", "Z"), ("Z", "X")]);
        assert!(!path.is_isomorphic(&cycle));
        assert!(!cycle.is_isomorphic(&path));
    }

    #[test]
    fn test_duplicated_edge_against_single() {
        let doubled = Graph::new(["A", "B"], [("A", "B"), ("A", "B")]);
        let single = Graph::new(["X", "Y"], [("X", "Y")]);
        assert!(!doubled.is_isomorphic(&single));
        assert!(!single.is_isomorphic(&doubled));
    }

    #[test]
    fn test_single_self_loop() {
        let a = Graph::new(["A"], [("A", "A")]);
        let b = Graph::new(["X"], [("X", "X")]);
        assert!(a.is_isomorphic(&b));
        assert_eq!(a.degree("A"), 1);
    }

    #[test]
    fn test_ignored_edge_does_not_affect_result() {
        let mut a = Graph::new(["A", "B"], [("A", "B")]);
        let b = Graph::new(["X", "Y"], [("X", "Y")]);

        a.add_edge(("A", "C"));
        assert_eq!(a.edges().len(), 1);
        assert!(a.is_isomorphic(&b));
    }

    #[test]
    fn test_disconnected() {
        let a = Graph::new(["A", "B", "C", "D"], [("A", "B"), ("C", "D")]);
        let b = Graph::new(["W", "X", "Y", "Z"], [("W", "X"), ("Y", "Z")]);
        assert!(a.is_isomorphic(&b));

        let star = Graph::new(["W", "X", "Y", "Z"], [("W", "X"), ("W", "Y")]);
        assert!(!a.is_isomorphic(&star));
    }

    #[test]
    fn test_vertex_count_mismatch() {
        let a = Graph::new(["A", "B"], no_edges());
        let b = Graph::new(["X", "Y", "Z"], no_edges());
        assert!(!a.is_isomorphic(&b));
        assert!(Graph::empty().is_isomorphic(&Graph::empty()));
    }

    #[test]
    fn test_loop_placement_matters() {
        let a = Graph::new(["A", "B", "C"], [("A", "B"), ("B", "B")]);
        let b = Graph::new(["X", "Y", "Z"], [("X", "Y"), ("X", "X")]);
        let c = Graph::new(["X", "Y", "Z"], [("X", "Y"), ("Z", "Z")]);
        assert!(a.is_isomorphic(&b));
        assert!(!a.is_isomorphic(&c));
    }

    #[test]
    fn test_multigraph_demo_pair() {
        let a = Graph::new(
            ["A", "B", "C"],
            [
                ("A", "B"),
                ("B", "B"),
                ("B", "C"),
                ("C", "A"),
                ("A", "A"),
                ("A", "B"),
                ("B", "B"),
            ],
        );
        let b = Graph::new(
            ["X", "Y", "Z"],
            [
                ("X", "Y"),
                ("Y", "Y"),
                ("Y", "Z"),
                ("Z", "X"),
                ("X", "X"),
                ("X", "Y"),
                ("Y", "Y"),
            ],
        );

        assert!(a.is_isomorphic(&b));
        assert!(a.is_isomorphic_with(&b, &SearchOptions::multiset()));
    }

    #[test]
    fn test_options_decide_parallel_edge_case() {
        let parallel = Graph::new(["A", "B"], [("A", "B"), ("A", "B")]);
        let looped = Graph::new(["X", "Y"], [("X", "Y"), ("Y", "Y")]);

        assert!(parallel.is_isomorphic(&looped));
        assert!(!looped.is_isomorphic(&parallel));

        let strict = SearchOptions::default().with_matching(EdgeMatching::Multiset);
        assert!(!parallel.is_isomorphic_with(&looped, &strict));
        assert!(!looped.is_isomorphic_with(&parallel, &strict));
    }
}
