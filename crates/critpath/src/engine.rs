//! PERT orchestration: cycle check, ordering, and both passes.

use crate::graph::TaskGraph;
use crate::records::{Time, fresh_records};
use crate::schedule::Schedule;
use crate::traversal::TraversalSession;
use crate::{Error, Result, backward, forward};
use tracing::debug;

/// Critical-path analysis engine bound to one task graph.
///
/// Durations are configured with [`set_duration`](Self::set_duration) and
/// default to zero. [`run`](Self::run) rebuilds all scheduling state from
/// those durations every time, so repeated runs on an unmodified engine give
/// identical schedules.
#[derive(Debug)]
pub struct PertEngine<'g, G: TaskGraph> {
    graph: &'g G,
    durations: Vec<Time>,
    session: TraversalSession,
}

impl<'g, G: TaskGraph> PertEngine<'g, G> {
    /// Create an engine for `graph` with every duration set to zero.
    #[must_use]
    pub fn new(graph: &'g G) -> Self {
        Self {
            graph,
            durations: vec![0; graph.vertex_count()],
            session: TraversalSession::new(),
        }
    }

    /// Create an engine with one duration per vertex, in dense index order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DurationCountMismatch`] if `durations` does not have
    /// exactly one entry per vertex.
    pub fn with_durations(graph: &'g G, durations: &[Time]) -> Result<Self> {
        let expected = graph.vertex_count();
        if durations.len() != expected {
            return Err(Error::DurationCountMismatch {
                expected,
                actual: durations.len(),
            });
        }

        let mut engine = Self::new(graph);
        engine.durations.copy_from_slice(durations);
        Ok(engine)
    }

    /// Set the processing time of the task at `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if the vertex index is outside the graph's dense range.
    pub fn set_duration(&mut self, vertex: G::Vertex, duration: Time) {
        let index = self.graph.index(vertex);
        self.durations[index] = duration;
    }

    /// Configured duration of the task at `vertex`.
    #[must_use]
    pub fn duration(&self, vertex: G::Vertex) -> Time {
        self.durations[self.graph.index(vertex)]
    }

    /// Run the full analysis.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotADag`] if the graph contains a directed cycle. No
    /// scheduling state is computed in that case. Returns
    /// [`Error::TimeOverflow`] if a chain of durations sums past [`Time::MAX`].
    pub fn run(&mut self) -> Result<Schedule<'g, G>> {
        let graph = self.graph;
        let mut records = fresh_records(&self.durations);

        if let Some(back_edge) = self.session.find_back_edge(graph) {
            return Err(Error::not_a_dag(back_edge.tail, back_edge.head));
        }

        let order = self.session.topological_order(graph);
        let project_length = forward::run(graph, &order, &mut records)?;
        backward::run(graph, &order, &mut records, project_length);

        debug!(
            vertices = order.len(),
            project_length, "Critical-path analysis complete"
        );
        Ok(Schedule::new(graph, order, records, project_length))
    }
}

/// Analyse `graph` with one duration per vertex, in dense index order.
///
/// # Errors
///
/// Returns [`Error::DurationCountMismatch`] if the durations do not match the
/// vertex count, [`Error::NotADag`] if the graph has a cycle, and
/// [`Error::TimeOverflow`] if completion times overflow [`Time`].
pub fn pert<'g, G: TaskGraph>(graph: &'g G, durations: &[Time]) -> Result<Schedule<'g, G>> {
    PertEngine::with_durations(graph, durations)?.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::graph::{DiGraph, NodeIndex};

    fn build(vertex_count: usize, edges: &[(usize, usize)]) -> DiGraph<(), ()> {
        let mut graph = DiGraph::new();
        for _ in 0..vertex_count {
            graph.add_node(());
        }
        for &(from, to) in edges {
            graph.add_edge(NodeIndex::new(from), NodeIndex::new(to), ());
        }
        graph
    }

    #[test]
    fn test_durations_default_to_zero() {
        let graph = build(2, &[(0, 1)]);
        let engine = PertEngine::new(&graph);
        assert_eq!(engine.duration(NodeIndex::new(1)), 0);
    }

    #[test]
    fn test_set_duration_feeds_run() {
        let graph = build(2, &[(0, 1)]);
        let mut engine = PertEngine::new(&graph);
        engine.set_duration(NodeIndex::new(0), 4);
        engine.set_duration(NodeIndex::new(1), 2);

        let schedule = engine.run().unwrap();
        assert_eq!(schedule.critical_path_length(), 6);
        assert_eq!(schedule.earliest_start(NodeIndex::new(1)), 4);
    }

    #[test]
    fn test_cycle_reports_back_edge() {
        let graph = build(3, &[(0, 1), (1, 2), (2, 0)]);
        let mut engine = PertEngine::new(&graph);

        let err = engine.run().unwrap_err();
        assert_eq!(err, Error::NotADag { tail: 2, head: 0 });
    }

    #[test]
    fn test_duration_count_mismatch() {
        let graph = build(3, &[]);
        let err = pert(&graph, &[1, 2]).unwrap_err();
        assert_eq!(
            err,
            Error::DurationCountMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_overflowing_chain_is_an_error() {
        let graph = build(2, &[(0, 1)]);
        let err = pert(&graph, &[Time::MAX, 1]).unwrap_err();
        assert_eq!(err, Error::TimeOverflow { vertex: 1 });
    }

    #[test]
    fn test_run_twice_is_identical() {
        let graph = build(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        let mut engine = PertEngine::with_durations(&graph, &[0, 3, 2, 0]).unwrap();

        let first = engine.run().unwrap();
        let second = engine.run().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rerun_after_duration_change() {
        let graph = build(2, &[(0, 1)]);
        let mut engine = PertEngine::with_durations(&graph, &[1, 1]).unwrap();
        assert_eq!(engine.run().unwrap().critical_path_length(), 2);

        engine.set_duration(NodeIndex::new(0), 5);
        let schedule = engine.run().unwrap();
        assert_eq!(schedule.critical_path_length(), 6);
        assert_eq!(schedule.earliest_start(NodeIndex::new(1)), 5);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_set_duration_out_of_range_panics() {
        let graph = build(1, &[]);
        let mut engine = PertEngine::new(&graph);
        engine.set_duration(NodeIndex::new(3), 1);
    }
}
