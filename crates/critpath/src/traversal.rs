//! Depth-first traversals over a task graph.
//!
//! Cycle detection and topological ordering share one DFS driver, and one
//! [`TraversalSession`] holds the per-vertex coloring they both need. Every
//! traversal starts by resetting that coloring, so running the cycle check and
//! then the sort on the same session never observes stale state.
//!
//! The DFS keeps an explicit stack of `(vertex, outgoing-edge cursor)` frames
//! instead of recursing, so arbitrarily long dependency chains cannot exhaust
//! the call stack.

use crate::graph::TaskGraph;
use tracing::{debug, trace};

/// Traversal state of a single vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Not reached yet.
    #[default]
    Unvisited,
    /// On the current DFS path.
    InProgress,
    /// All descendants finished.
    Done,
}

/// An edge whose head was still on the DFS path when the edge was followed.
///
/// Its existence proves the graph has a directed cycle through both endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackEdge {
    /// Dense index of the vertex the edge leaves.
    pub tail: usize,
    /// Dense index of the vertex the edge enters.
    pub head: usize,
}

/// Reusable coloring storage for depth-first traversals.
#[derive(Debug, Clone, Default)]
pub struct TraversalSession {
    colors: Vec<Color>,
}

impl TraversalSession {
    /// Create an empty session. Storage is sized on first use.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark every vertex of a graph with `vertex_count` vertices unvisited.
    pub fn reset(&mut self, vertex_count: usize) {
        self.colors.clear();
        self.colors.resize(vertex_count, Color::Unvisited);
    }

    /// Color of the vertex with dense index `index`, as left by the last traversal.
    #[must_use]
    pub fn color(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// Returns `true` if `graph` has no directed cycle.
    pub fn is_dag<G: TaskGraph>(&mut self, graph: &G) -> bool {
        self.find_back_edge(graph).is_none()
    }

    /// Search the whole graph for a back edge, stopping at the first one.
    ///
    /// Every vertex index is tried as a root, so components unreachable from
    /// one another are all covered.
    pub fn find_back_edge<G: TaskGraph>(&mut self, graph: &G) -> Option<BackEdge> {
        self.reset(graph.vertex_count());

        for root in graph.vertices() {
            if self.colors[graph.index(root)] != Color::Unvisited {
                continue;
            }
            if let Some(back_edge) = self.descend(graph, root, true, |_| {}) {
                debug!(
                    tail = back_edge.tail,
                    head = back_edge.head,
                    "Back edge found, graph is cyclic"
                );
                return Some(back_edge);
            }
        }

        debug!(vertices = graph.vertex_count(), "Graph is acyclic");
        None
    }

    /// Topological order of `graph`: the reverse of DFS finish order.
    ///
    /// The caller must already know the graph is acyclic. On a cyclic graph the
    /// result still lists every vertex exactly once, but edges on a cycle will
    /// not all point forward.
    pub fn topological_order<G: TaskGraph>(&mut self, graph: &G) -> Vec<G::Vertex> {
        self.reset(graph.vertex_count());
        let mut finished = Vec::with_capacity(graph.vertex_count());

        for root in graph.vertices() {
            if self.colors[graph.index(root)] == Color::Unvisited {
                self.descend(graph, root, false, |vertex| finished.push(vertex));
            }
        }

        // Finish order lists each vertex after all of its successors.
        finished.reverse();
        debug!(vertices = finished.len(), "Computed topological order");
        finished
    }

    /// Run one DFS tree from `root`, calling `on_finish` in postorder.
    ///
    /// With `stop_at_back_edge` set, returns as soon as an edge into an
    /// in-progress vertex is followed; vertices on the abandoned path keep
    /// their `InProgress` color until the next reset.
    fn descend<G, F>(
        &mut self,
        graph: &G,
        root: G::Vertex,
        stop_at_back_edge: bool,
        mut on_finish: F,
    ) -> Option<BackEdge>
    where
        G: TaskGraph,
        F: FnMut(G::Vertex),
    {
        self.colors[graph.index(root)] = Color::InProgress;
        let mut stack = vec![(root, graph.incident(root))];

        while let Some((vertex, edges)) = stack.last_mut() {
            let vertex = *vertex;

            let Some(edge) = edges.next() else {
                self.colors[graph.index(vertex)] = Color::Done;
                trace!(vertex = graph.index(vertex), "Finished vertex");
                on_finish(vertex);
                stack.pop();
                continue;
            };

            let head = graph.other_end(edge, vertex);
            let head_index = graph.index(head);
            match self.colors[head_index] {
                Color::Unvisited => {
                    self.colors[head_index] = Color::InProgress;
                    stack.push((head, graph.incident(head)));
                }
                Color::InProgress if stop_at_back_edge => {
                    return Some(BackEdge {
                        tail: graph.index(vertex),
                        head: head_index,
                    });
                }
                Color::InProgress | Color::Done => {}
            }
        }

        None
    }
}
