use thiserror::Error;

/// Reasons a textual or tokenized graph description is refused before any graph is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// An edge token does not name exactly two vertices
    #[error("malformed edge `{token}`: expected `A-B` or `(A,B)`")]
    MalformedEdge { token: String },

    /// A vertex label or edge endpoint is empty after trimming
    #[error("blank label in {location}")]
    BlankLabel { location: String },

    #[error("vertex `{0}` is listed more than once")]
    DuplicateVertex(String),

    /// An edge endpoint is not in the vertex list
    #[error("edge `{from}-{to}` references unknown vertex `{missing}`")]
    DanglingEdge {
        from: String,
        to: String,
        missing: String,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    /// `index` is 1 for the first graph of a comparison, 2 for the second
    #[error("graph {index} is invalid: {source}")]
    InvalidGraph {
        index: usize,
        #[source]
        source: ValidationError,
    },
}
