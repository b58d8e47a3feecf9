//! Exact isomorphism testing for small undirected multigraphs with labelled vertices.
//!
//! ```
//! use graph_isomorphism::{compare, Graph, GraphText};
//!
//! let triangle = Graph::new(["A", "B", "C"], [("A", "B"), ("B", "C"), ("C", "A")]);
//! let relabeled = Graph::new(["X", "Y", "Z"], [("Y", "X"), ("Z", "Y"), ("X", "Z")]);
//! assert!(triangle.is_isomorphic(&relabeled));
//!
//! let result = compare(GraphText::new("A,B", "A-B"), GraphText::new("X,Y", "(X,Y)"));
//! assert!(matches!(result, Ok(true)));
//! ```
pub mod error;
pub mod graph;
pub mod input;
pub mod isomorphism;
pub mod permutation;

// exhaustive bijection search
mod backtrack;

// fast rejection before searching
mod nogood;

// text tokenizers for the input boundary
mod parser;

pub use error::{Error, ValidationError};
pub use graph::{Edge, Graph};
pub use input::{compare, validate, GraphText};
pub use isomorphism::{EdgeMatching, Isomorphism, SearchOptions};
pub use permutation::Permutation;
