//! Results of a successful critical-path analysis.
//!
//! A [`Schedule`] can only be obtained from a run that proved the graph
//! acyclic and completed both passes, so every query on it reads finalized
//! values.

use crate::graph::TaskGraph;
use crate::records::{Time, VertexRecord};
use serde::Serialize;

/// Finalized timings of one task, keyed by its dense vertex index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskTiming {
    /// Dense vertex index.
    pub index: usize,
    /// Processing time.
    pub duration: Time,
    /// Earliest start.
    pub earliest_start: Time,
    /// Earliest completion.
    pub earliest_completion: Time,
    /// Latest start.
    pub latest_start: Time,
    /// Latest completion.
    pub latest_completion: Time,
    /// Float between earliest and latest start.
    pub slack: Time,
    /// Whether the task has zero slack.
    pub critical: bool,
}

/// Earliest/latest times of every task in an acyclic task graph.
///
/// Queries take a vertex of the analysed graph and index the stored records
/// by [`TaskGraph::index`].
///
/// # Panics
///
/// Every per-vertex query panics if the vertex's index is outside the graph's
/// dense range (e.g. a vertex of some other graph).
#[derive(Debug, Clone)]
pub struct Schedule<'g, G: TaskGraph> {
    graph: &'g G,
    order: Vec<G::Vertex>,
    records: Vec<VertexRecord>,
    project_length: Time,
}

impl<G: TaskGraph> PartialEq for Schedule<'_, G> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph)
            && self.order == other.order
            && self.records == other.records
            && self.project_length == other.project_length
    }
}

impl<'g, G: TaskGraph> Schedule<'g, G> {
    pub(crate) fn new(
        graph: &'g G,
        order: Vec<G::Vertex>,
        records: Vec<VertexRecord>,
        project_length: Time,
    ) -> Self {
        Self {
            graph,
            order,
            records,
            project_length,
        }
    }

    /// The graph this schedule was computed for.
    #[must_use]
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    fn record(&self, vertex: G::Vertex) -> &VertexRecord {
        &self.records[self.graph.index(vertex)]
    }

    /// Duration the task was analysed with.
    #[must_use]
    pub fn duration(&self, vertex: G::Vertex) -> Time {
        self.record(vertex).duration
    }

    /// Earliest time `vertex` can start.
    #[must_use]
    pub fn earliest_start(&self, vertex: G::Vertex) -> Time {
        self.record(vertex).earliest_start
    }

    /// Earliest time `vertex` can be completed.
    #[must_use]
    pub fn earliest_completion(&self, vertex: G::Vertex) -> Time {
        self.record(vertex).earliest_completion
    }

    /// Latest start of `vertex` that keeps the project length.
    #[must_use]
    pub fn latest_start(&self, vertex: G::Vertex) -> Time {
        self.record(vertex).latest_start
    }

    /// Latest completion of `vertex` that keeps the project length.
    #[must_use]
    pub fn latest_completion(&self, vertex: G::Vertex) -> Time {
        self.record(vertex).latest_completion
    }

    /// How far `vertex` can be delayed without delaying the project.
    #[must_use]
    pub fn slack(&self, vertex: G::Vertex) -> Time {
        self.record(vertex).slack()
    }

    /// Whether `vertex` has zero slack.
    #[must_use]
    pub fn is_critical(&self, vertex: G::Vertex) -> bool {
        self.record(vertex).is_critical()
    }

    /// Length of the critical path: the largest earliest completion time.
    #[must_use]
    pub fn critical_path_length(&self) -> Time {
        self.project_length
    }

    /// Number of critical vertices.
    #[must_use]
    pub fn num_critical(&self) -> usize {
        self.records.iter().filter(|r| r.is_critical()).count()
    }

    /// Critical vertices in topological order.
    #[must_use]
    pub fn critical_vertices(&self) -> Vec<G::Vertex> {
        self.order
            .iter()
            .copied()
            .filter(|&v| self.is_critical(v))
            .collect()
    }

    /// The topological order both passes ran over.
    #[must_use]
    pub fn topological_order(&self) -> &[G::Vertex] {
        &self.order
    }

    /// All timings of `vertex` at once.
    #[must_use]
    pub fn timing(&self, vertex: G::Vertex) -> TaskTiming {
        let index = self.graph.index(vertex);
        let record = &self.records[index];
        TaskTiming {
            index,
            duration: record.duration,
            earliest_start: record.earliest_start,
            earliest_completion: record.earliest_completion,
            latest_start: record.latest_start,
            latest_completion: record.latest_completion,
            slack: record.slack(),
            critical: record.is_critical(),
        }
    }

    /// Timings of every vertex, in the graph's vertex order.
    #[must_use]
    pub fn timings(&self) -> Vec<TaskTiming> {
        self.graph.vertices().map(|v| self.timing(v)).collect()
    }

    /// One end-to-end chain of critical tasks.
    ///
    /// Starts at the first critical source in topological order and keeps
    /// following a critical successor that starts exactly when the current
    /// task completes. The durations along the chain sum to
    /// [`critical_path_length`](Self::critical_path_length). Empty for an
    /// empty graph.
    #[must_use]
    pub fn critical_path(&self) -> Vec<G::Vertex> {
        let Some(mut current) = self
            .order
            .iter()
            .copied()
            .find(|&v| self.is_critical(v) && self.earliest_start(v) == 0)
        else {
            return Vec::new();
        };

        let mut path = vec![current];
        while let Some(next) = self.graph.successors(current).find(|&v| {
            self.is_critical(v) && self.earliest_start(v) == self.earliest_completion(current)
        }) {
            path.push(next);
            current = next;
        }
        path
    }
}
