//! Whitespace-separated task network format
//!
//! ```text
//! n m
//! u1 v1 w1
//! ...
//! um vm wm
//! d1 ... dn
//! ```
//!
//! Vertices are numbered from 1. Edge weights are read but play no part in
//! the analysis. Anything after the last duration is ignored. Counts in the
//! header are bounded by petgraph's default index type, and storage grows
//! with the tokens actually read, not with the header.

use critpath::Time;
use miette::Diagnostic;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use std::str::{FromStr, SplitWhitespace};
use thiserror::Error;
use tracing::debug;

/// Ten-task network used when no input is given.
pub const SAMPLE_GRAPH: &str = "10 13   1 2 1   2 4 1   2 5 1   3 5 1   3 6 1   4 7 1   5 7 1   \
                                5 8 1   6 8 1   6 9 1   7 10 1   8 10 1   9 10 1      \
                                0 3 2 3 2 1 3 2 4 1";

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("input ended while reading {expected}")]
    #[diagnostic(
        code(critpath::input::truncated),
        help("the header promises more edges or durations than the input contains")
    )]
    MissingValue { expected: String },

    #[error("token #{position} `{token}` is not a valid {expected}")]
    #[diagnostic(code(critpath::input::invalid_number))]
    InvalidNumber {
        token: String,
        expected: String,
        position: usize,
    },

    #[error("{what} {count} exceeds the supported maximum of {limit}")]
    #[diagnostic(code(critpath::input::count_too_large))]
    CountTooLarge {
        what: &'static str,
        count: usize,
        limit: usize,
    },

    #[error("edge {edge} names vertex {vertex}, but the graph has {vertex_count} vertices")]
    #[diagnostic(
        code(critpath::input::vertex_out_of_range),
        help("vertices are numbered from 1 to n")
    )]
    VertexOutOfRange {
        vertex: usize,
        vertex_count: usize,
        edge: usize,
    },
}

/// A parsed network: node weights are the 1-based vertex numbers, edge
/// weights the (unused) input weights.
#[derive(Debug, Clone)]
pub struct TaskNetwork {
    pub graph: DiGraph<usize, i64>,
    pub durations: Vec<Time>,
}

impl TaskNetwork {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut tokens = Tokens::new(input);

        let vertex_count =
            tokens.count("vertex count", NodeIndex::<u32>::end().index())?;
        let edge_count = tokens.count("edge count", EdgeIndex::<u32>::end().index())?;

        let mut edges = Vec::new();
        for edge in 1..=edge_count {
            let from = tokens.vertex(edge, vertex_count)?;
            let to = tokens.vertex(edge, vertex_count)?;
            let weight: i64 = tokens.next(&format!("weight of edge {edge}"))?;
            edges.push((from, to, weight));
        }

        let mut durations = Vec::new();
        for number in 1..=vertex_count {
            durations.push(tokens.next::<Time>(&format!("duration of vertex {number}"))?);
        }

        let mut graph = DiGraph::with_capacity(durations.len(), edges.len());
        for number in 1..=vertex_count {
            graph.add_node(number);
        }
        graph.extend_with_edges(edges);

        debug!(vertex_count, edge_count, "Parsed task network");
        Ok(Self { graph, durations })
    }

    pub fn sample() -> Result<Self, ParseError> {
        Self::parse(SAMPLE_GRAPH)
    }
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            inner: input.split_whitespace(),
            position: 0,
        }
    }

    fn next<T: FromStr>(&mut self, expected: &str) -> Result<T, ParseError> {
        let token = self.inner.next().ok_or_else(|| ParseError::MissingValue {
            expected: expected.to_string(),
        })?;
        self.position += 1;
        token.parse().map_err(|_| ParseError::InvalidNumber {
            token: token.to_string(),
            expected: expected.to_string(),
            position: self.position,
        })
    }

    /// A header count, at most `limit`.
    fn count(&mut self, what: &'static str, limit: usize) -> Result<usize, ParseError> {
        let count: usize = self.next(what)?;
        if count > limit {
            return Err(ParseError::CountTooLarge { what, count, limit });
        }
        Ok(count)
    }

    fn vertex(&mut self, edge: usize, vertex_count: usize) -> Result<NodeIndex, ParseError> {
        let vertex: usize = self.next(&format!("endpoint of edge {edge}"))?;
        if vertex == 0 || vertex > vertex_count {
            return Err(ParseError::VertexOutOfRange {
                vertex,
                vertex_count,
                edge,
            });
        }
        Ok(NodeIndex::new(vertex - 1))
    }
}
