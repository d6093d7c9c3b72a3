//! Error types for critical-path analysis.

use thiserror::Error;

/// Result type for critical-path analysis.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while analysing a task graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The task graph contains a directed cycle, so no schedule exists.
    #[error("task graph is not a DAG: edge {tail} -> {head} closes a cycle")]
    NotADag {
        /// Dense index of the vertex the back edge leaves.
        tail: usize,
        /// Dense index of the in-progress vertex the back edge returns to.
        head: usize,
    },

    /// The supplied durations do not cover the graph's vertices one-to-one.
    #[error("expected {expected} durations (one per vertex), got {actual}")]
    DurationCountMismatch {
        /// Number of vertices in the graph.
        expected: usize,
        /// Number of durations supplied.
        actual: usize,
    },

    /// An earliest completion time does not fit in [`Time`](crate::Time).
    #[error("earliest completion of vertex {vertex} overflows the time range")]
    TimeOverflow {
        /// Dense index of the vertex whose completion overflowed.
        vertex: usize,
    },
}

impl Error {
    /// Create a cycle error from a back edge.
    #[must_use]
    pub const fn not_a_dag(tail: usize, head: usize) -> Self {
        Self::NotADag { tail, head }
    }

    /// Returns `true` if this error reports a cyclic graph.
    #[must_use]
    pub const fn is_cycle(&self) -> bool {
        matches!(self, Self::NotADag { .. })
    }
}
