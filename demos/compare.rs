//! Compare two graphs given on the command line:
//!
//! ```text
//! cargo run --example compare -- "A,B,C" "A-B,B-C,C-A" "X,Y,Z" "(X,Y),(Y,Z),(Z,X)"
//! ```
//!
//! Without arguments, a pair of three-vertex multigraphs with loops and parallel edges is used.
use std::process::ExitCode;

use graph_isomorphism::{compare, Graph, GraphText};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.as_slice() {
        [] => Ok(builtin_pair()),
        [v1, e1, v2, e2] => compare(GraphText::new(v1, e1), GraphText::new(v2, e2)),
        _ => {
            eprintln!("usage: compare <vertices1> <edges1> <vertices2> <edges2>");
            return ExitCode::from(2);
        }
    };

    match result {
        Ok(true) => println!("The graphs are isomorphic."),
        Ok(false) => println!("The graphs are not isomorphic."),
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}

fn builtin_pair() -> bool {
    let g1 = Graph::new(
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
    let g2 = Graph::new(
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

    g1.is_isomorphic(&g2)
}
