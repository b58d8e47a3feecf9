//! Boundary between free-form user input and [`Graph`].
//!
//! Everything that can be wrong with a description is caught here, so the search only ever sees
//! graphs whose edges stay inside their vertex list.

use std::collections::HashSet;

use log::debug;

use crate::error::{Error, ValidationError};
use crate::graph::{Edge, Graph};
use crate::parser::{edge_endpoints, edge_tokens, vertex_labels};

/// The two text fields describing one graph, e.g. `"A,B,C"` and `"A-B,(B,C)"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GraphText<'a> {
    pub vertices: &'a str,
    pub edges: &'a str,
}

impl<'a> GraphText<'a> {
    pub fn new(vertices: &'a str, edges: &'a str) -> Self {
        GraphText { vertices, edges }
    }

    /// Tokenize and validate, reporting the first problem found.
    ///
    /// Malformed edge tokens are reported before any label check, then blank labels, duplicate
    /// vertices and dangling edges, in that order.
    pub fn parse(&self) -> Result<Graph, ValidationError> {
        let vertices = vertex_labels(self.vertices);
        let edges = edge_tokens(self.edges)
            .into_iter()
            .map(edge_endpoints)
            .collect::<Result<Vec<_>, _>>()?;

        Graph::try_new(vertices, edges)
    }
}

/// Check pre-tokenized vertex and edge lists.
pub fn validate(vertices: &[String], edges: &[Edge]) -> Result<(), ValidationError> {
    for (position, label) in vertices.iter().enumerate() {
        if label.trim().is_empty() {
            return Err(ValidationError::BlankLabel {
                location: format!("vertex list at position {}", position + 1),
            });
        }
    }
    for (v1, v2) in edges {
        if v1.trim().is_empty() || v2.trim().is_empty() {
            return Err(ValidationError::BlankLabel {
                location: format!("edge `{v1}-{v2}`"),
            });
        }
    }

    let mut seen = HashSet::new();
    for label in vertices {
        if !seen.insert(label.as_str()) {
            return Err(ValidationError::DuplicateVertex(label.clone()));
        }
    }

    for (v1, v2) in edges {
        for endpoint in [v1, v2] {
            if !seen.contains(endpoint.as_str()) {
                return Err(ValidationError::DanglingEdge {
                    from: v1.clone(),
                    to: v2.clone(),
                    missing: endpoint.clone(),
                });
            }
        }
    }

    Ok(())
}

/// Parse both descriptions and decide whether the graphs are isomorphic.
pub fn compare(first: GraphText<'_>, second: GraphText<'_>) -> Result<bool, Error> {
    let g1 = first
        .parse()
        .map_err(|source| Error::InvalidGraph { index: 1, source })?;
    let g2 = second
        .parse()
        .map_err(|source| Error::InvalidGraph { index: 2, source })?;
    debug!(
        "comparing graphs with {}/{} and {}/{} vertices/edges",
        g1.vertices().len(),
        g1.edges().len(),
        g2.vertices().len(),
        g2.edges().len()
    );

    Ok(g1.is_isomorphic(&g2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(vertices: &str, edges: &str) -> Result<Graph, ValidationError> {
        GraphText::new(vertices, edges).parse()
    }

    #[test]
    fn test_parse_mixed_notation() {
        let graph = parse("A, B ,C", "A-B, (B,C) ,C - A").expect("valid graph");
        assert_eq!(graph, Graph::new(["A", "B", "C"], [("A", "B"), ("B", "C"), ("C", "A")]));
    }

    #[test]
    fn test_parse_without_edges() {
        let graph = parse("A,B", "  ").expect("valid graph");
        assert_eq!(graph.vertices().len(), 2);
        assert!(graph.edges().is_empty());

        assert_eq!(parse("", ""), Ok(Graph::empty()));
    }

    #[test]
    fn test_parse_keeps_loops_and_parallel_edges() {
        let graph = parse("A,B", "A-A,A-B,(B,A)").expect("valid graph");
        assert_eq!(graph.edges().len(), 3);
        assert_eq!(graph.degree("A"), 3);
    }

    #[test]
    fn test_malformed_edge() {
        assert_eq!(
            parse("A,B,C", "A-B,A-B-C"),
            Err(ValidationError::MalformedEdge {
                token: "A-B-C".to_string()
            })
        );
        assert!(matches!(
            parse("A,B", "A-B,,B-A"),
            Err(ValidationError::MalformedEdge { .. })
        ));
        assert!(matches!(
            parse("A,B", "(A,B"),
            Err(ValidationError::MalformedEdge { .. })
        ));
    }

    #[test]
    fn test_blank_labels() {
        assert!(matches!(
            parse("A,,B", ""),
            Err(ValidationError::BlankLabel { location }) if location.contains("position 2")
        ));
        assert!(matches!(
            parse("A,B", "A- "),
            Err(ValidationError::BlankLabel { .. })
        ));
        assert!(matches!(
            parse("A,B", "( ,B)"),
            Err(ValidationError::BlankLabel { .. })
        ));
    }

    #[test]
    fn test_duplicate_vertex() {
        assert_eq!(
            parse("A,B,A", "A-B"),
            Err(ValidationError::DuplicateVertex("A".to_string()))
        );
    }

    #[test]
    fn test_dangling_edge() {
        assert_eq!(
            parse("A,B", "A-B,B-C"),
            Err(ValidationError::DanglingEdge {
                from: "B".to_string(),
                to: "C".to_string(),
                missing: "C".to_string(),
            })
        );
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        assert!(matches!(
            parse("a,b", "A-b"),
            Err(ValidationError::DanglingEdge { missing, .. }) if missing == "A"
        ));
    }

    #[test]
    fn test_compare() {
        let triangle = GraphText::new("A,B,C", "A-B,B-C,C-A");
        let relabeled = GraphText::new("X,Y,Z", "(X,Y),(Y,Z),(Z,X)");
        let path = GraphText::new("X,Y,Z", "X-Y,Y-Z");

        assert!(compare(triangle, relabeled).expect("valid input"));
        assert!(!compare(triangle, path).expect("valid input"));
    }

    #[test]
    fn test_compare_reports_which_graph_failed() {
        let good = GraphText::new("A,B", "A-B");
        let bad = GraphText::new("A,B", "A-C");

        match compare(good, bad) {
            Err(Error::InvalidGraph { index, source }) => {
                assert_eq!(index, 2);
                assert!(matches!(source, ValidationError::DanglingEdge { .. }));
            }
            other => panic!("expected invalid second graph, got {other:?}"),
        }

        let error = compare(bad, good).expect_err("first graph is invalid");
        assert_eq!(
            error.to_string(),
            "graph 1 is invalid: edge `A-C` references unknown vertex `C`"
        );
    }
}
