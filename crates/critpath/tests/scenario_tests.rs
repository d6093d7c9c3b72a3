//! End-to-end scenarios on small hand-checked task graphs.

use critpath::{Error, PertEngine, TaskGraph, Time, pert};
use petgraph::graph::{DiGraph, NodeIndex};

/// Build a graph from 1-based vertex numbers, the way task networks are
/// usually written down.
fn numbered(vertex_count: usize, edges: &[(usize, usize)]) -> DiGraph<usize, ()> {
    let mut graph = DiGraph::new();
    for number in 1..=vertex_count {
        graph.add_node(number);
    }
    for &(from, to) in edges {
        graph.add_edge(NodeIndex::new(from - 1), NodeIndex::new(to - 1), ());
    }
    graph
}

fn task(number: usize) -> NodeIndex {
    NodeIndex::new(number - 1)
}

#[test]
fn diamond_with_zero_duration_ends() {
    let graph = numbered(4, &[(1, 2), (1, 3), (2, 4), (3, 4)]);
    let schedule = pert(&graph, &[0, 3, 2, 0]).unwrap();

    assert_eq!(schedule.earliest_completion(task(2)), 3);
    assert_eq!(schedule.earliest_completion(task(3)), 2);
    assert_eq!(schedule.earliest_completion(task(4)), 3);
    assert_eq!(schedule.critical_path_length(), 3);

    assert_eq!(schedule.slack(task(3)), 1);
    for number in [1, 2, 4] {
        assert_eq!(schedule.slack(task(number)), 0, "task {number} should be critical");
        assert!(schedule.is_critical(task(number)));
    }
    assert_eq!(schedule.num_critical(), 3);

    let path: Vec<usize> = schedule.critical_path().iter().map(|&v| graph[v]).collect();
    assert_eq!(path, vec![1, 2, 4]);
}

#[test]
fn two_task_cycle_is_rejected() {
    let graph = numbered(2, &[(1, 2), (2, 1)]);
    let result = pert(&graph, &[4, 7]);

    assert!(matches!(result, Err(Error::NotADag { .. })));
}

#[test]
fn cycle_rejected_regardless_of_durations() {
    let graph = numbered(3, &[(1, 2), (2, 3), (3, 2)]);
    for durations in [[0, 0, 0], [1, 2, 3], [9, 0, 1]] {
        let err = pert(&graph, &durations).unwrap_err();
        assert!(err.is_cycle());
    }
}

#[test]
fn disconnected_chains_analysed_independently() {
    // Chain A: 1 -> 2 -> 3 (2 + 2 + 2 = 6), chain B: 4 -> 5 (5 + 4 = 9)
    let graph = numbered(5, &[(1, 2), (2, 3), (4, 5)]);
    let schedule = pert(&graph, &[2, 2, 2, 5, 4]).unwrap();

    assert_eq!(schedule.critical_path_length(), 9);
    for number in [1, 2, 3] {
        assert_eq!(schedule.slack(task(number)), 3);
    }
    assert!(schedule.is_critical(task(4)));
    assert!(schedule.is_critical(task(5)));
    assert_eq!(schedule.num_critical(), 2);
    assert_eq!(schedule.earliest_start(task(1)), 0);
    assert_eq!(schedule.earliest_start(task(4)), 0);
}

#[test]
fn ten_task_network() {
    let graph = numbered(
        10,
        &[
            (1, 2),
            (2, 4),
            (2, 5),
            (3, 5),
            (3, 6),
            (4, 7),
            (5, 7),
            (5, 8),
            (6, 8),
            (6, 9),
            (7, 10),
            (8, 10),
            (9, 10),
        ],
    );
    let durations: [Time; 10] = [0, 3, 2, 3, 2, 1, 3, 2, 4, 1];
    let schedule = pert(&graph, &durations).unwrap();

    assert_eq!(schedule.critical_path_length(), 10);
    assert_eq!(schedule.num_critical(), 5);

    let ec: Vec<Time> = graph.vertices().map(|v| schedule.earliest_completion(v)).collect();
    let lc: Vec<Time> = graph.vertices().map(|v| schedule.latest_completion(v)).collect();
    let slack: Vec<Time> = graph.vertices().map(|v| schedule.slack(v)).collect();
    assert_eq!(ec, vec![0, 3, 2, 6, 5, 3, 9, 7, 7, 10]);
    assert_eq!(lc, vec![0, 3, 4, 6, 6, 5, 9, 9, 9, 10]);
    assert_eq!(slack, vec![0, 0, 2, 0, 1, 2, 0, 2, 2, 0]);

    let path: Vec<usize> = schedule.critical_path().iter().map(|&v| graph[v]).collect();
    assert_eq!(path, vec![1, 2, 4, 7, 10]);
}

#[test]
fn engine_rerun_after_failed_cycle_check_on_other_graph() {
    // Running one engine's analysis after another engine rejected a cycle
    // must not be affected by it; each engine owns its own traversal state.
    let cyclic = numbered(2, &[(1, 2), (2, 1)]);
    let acyclic = numbered(2, &[(1, 2)]);

    let mut rejected = PertEngine::with_durations(&cyclic, &[1, 1]).unwrap();
    assert!(rejected.run().is_err());
    assert!(rejected.run().is_err());

    let mut accepted = PertEngine::with_durations(&acyclic, &[1, 1]).unwrap();
    assert_eq!(accepted.run().unwrap().critical_path_length(), 2);
}

#[test]
fn isolated_tasks_are_all_critical_when_equal() {
    let graph = numbered(3, &[]);
    let schedule = pert(&graph, &[4, 4, 4]).unwrap();

    assert_eq!(schedule.critical_path_length(), 4);
    assert_eq!(schedule.num_critical(), 3);
    assert_eq!(schedule.topological_order().len(), 3);
}
