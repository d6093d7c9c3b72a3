//! Task graph adapter.
//!
//! The engine never owns graph storage. It consumes any directed graph that
//! can enumerate its vertices, map each vertex to a dense index, and walk the
//! outgoing edges of a vertex. [`TaskGraph`] captures exactly that surface and
//! is implemented here for petgraph's [`Graph`].

use petgraph::Directed;
use petgraph::Direction::Outgoing;
use petgraph::graph::{EdgeIndex, Graph, IndexType, NodeIndex};
use petgraph::visit::EdgeRef;

/// Read-only view of a directed task graph.
///
/// Implementations must keep `index` dense: every vertex yielded by
/// [`vertices`](Self::vertices) maps to a distinct value in
/// `0..vertex_count()`. The engine uses those indices as array subscripts for
/// its per-vertex state, so a gap or an alias is a caller contract violation.
pub trait TaskGraph {
    /// Handle naming a vertex.
    type Vertex: Copy + Eq + std::fmt::Debug;
    /// Handle naming an edge.
    type Edge: Copy;

    /// Number of vertices. Stable for the lifetime of the borrow.
    fn vertex_count(&self) -> usize;

    /// All vertices, in a stable order.
    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_;

    /// Dense zero-based index of `vertex`.
    fn index(&self, vertex: Self::Vertex) -> usize;

    /// Edges leaving `vertex`.
    fn incident(&self, vertex: Self::Vertex) -> impl Iterator<Item = Self::Edge> + '_;

    /// The endpoint of `edge` that is not `vertex`.
    ///
    /// Given the tail of a directed edge this returns its head.
    fn other_end(&self, edge: Self::Edge, vertex: Self::Vertex) -> Self::Vertex;

    /// Heads of all edges leaving `vertex`.
    fn successors(&self, vertex: Self::Vertex) -> impl Iterator<Item = Self::Vertex> + '_ {
        self.incident(vertex)
            .map(move |edge| self.other_end(edge, vertex))
    }
}

impl<N, E, Ix: IndexType> TaskGraph for Graph<N, E, Directed, Ix> {
    type Vertex = NodeIndex<Ix>;
    type Edge = EdgeIndex<Ix>;

    fn vertex_count(&self) -> usize {
        self.node_count()
    }

    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_ {
        self.node_indices()
    }

    fn index(&self, vertex: Self::Vertex) -> usize {
        vertex.index()
    }

    fn incident(&self, vertex: Self::Vertex) -> impl Iterator<Item = Self::Edge> + '_ {
        self.edges_directed(vertex, Outgoing).map(|edge| edge.id())
    }

    fn other_end(&self, edge: Self::Edge, vertex: Self::Vertex) -> Self::Vertex {
        // Indexing is bounds-checked; an edge from another graph panics here.
        let raw = &self.raw_edges()[edge.index()];
        if raw.source() == vertex {
            raw.target()
        } else {
            raw.source()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::graph::DiGraph;

    fn chain() -> DiGraph<&'static str, ()> {
        let mut graph = DiGraph::new();
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        let c = graph.add_node("c");
        graph.add_edge(a, b, ());
        graph.add_edge(b, c, ());
        graph
    }

    #[test]
    fn test_vertices_are_dense() {
        let graph = chain();
        let indices: Vec<usize> = graph.vertices().map(|v| TaskGraph::index(&graph, v)).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(TaskGraph::vertex_count(&graph), 3);
    }

    #[test]
    fn test_other_end_resolves_head_from_tail() {
        let graph = chain();
        let a = NodeIndex::new(0);
        let b = NodeIndex::new(1);

        let edges: Vec<_> = graph.incident(a).collect();
        assert_eq!(edges.len(), 1);
        assert_eq!(graph.other_end(edges[0], a), b);
        assert_eq!(graph.other_end(edges[0], b), a);
    }

    #[test]
    fn test_incident_is_outgoing_only() {
        let graph = chain();
        let b = NodeIndex::new(1);
        let c = NodeIndex::new(2);

        let heads: Vec<_> = graph.successors(b).collect();
        assert_eq!(heads, vec![c]);
        assert_eq!(graph.successors(c).count(), 0);
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let mut graph: DiGraph<(), ()> = DiGraph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        graph.add_edge(a, b, ());
        graph.add_edge(a, b, ());

        assert_eq!(graph.successors(a).filter(|&v| v == b).count(), 2);
    }
}
