//! PERT critical-path analysis for task graphs.
//!
//! Given a directed graph of tasks, each with a duration, this crate checks
//! that the graph is acyclic, computes every task's earliest and latest start
//! and completion times, and reports slack, critical tasks, and the critical
//! path length.
//!
//! # Key Types
//!
//! - [`TaskGraph`]: the graph surface the engine consumes, implemented for
//!   petgraph's `Graph`
//! - [`PertEngine`]: binds a graph to durations and runs the analysis
//! - [`Schedule`]: the finalized times, only obtainable from a successful run
//!
//! # Example
//!
//! ```
//! use critpath::pert;
//! use petgraph::graph::DiGraph;
//!
//! let mut graph = DiGraph::<&str, ()>::new();
//! let design = graph.add_node("design");
//! let build = graph.add_node("build");
//! let docs = graph.add_node("docs");
//! graph.add_edge(design, build, ());
//! graph.add_edge(design, docs, ());
//!
//! let schedule = pert(&graph, &[2, 5, 1])?;
//! assert_eq!(schedule.critical_path_length(), 7);
//! assert_eq!(schedule.slack(docs), 4);
//! assert!(schedule.is_critical(build));
//! # Ok::<(), critpath::Error>(())
//! ```

pub mod backward;
mod engine;
mod error;
pub mod forward;
mod graph;
mod records;
mod schedule;
pub mod traversal;

pub use engine::{PertEngine, pert};
pub use error::{Error, Result};
pub use graph::TaskGraph;
pub use records::{Time, UNBOUNDED, VertexRecord};
pub use schedule::{Schedule, TaskTiming};
pub use traversal::{BackEdge, Color, TraversalSession};
