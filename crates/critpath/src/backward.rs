//! Backward pass: latest start and completion times.

use crate::graph::TaskGraph;
use crate::records::{Time, VertexRecord};
use tracing::{debug, trace};

/// Propagate latest times along the reverse of `order`.
///
/// Every task is first allowed to finish as late as `project_length`. Walking
/// `order` backwards, each outgoing edge `u -> v` tightens `lc(u)` to `ls(v)`
/// and `ls(u)` is recomputed right away. Since `lc(u)` only ever decreases, the
/// final value is the minimum over all successors whatever order the edges are
/// visited in.
///
/// `project_length` must be the value returned by [`crate::forward::run`] on
/// the same records.
pub fn run<G: TaskGraph>(
    graph: &G,
    order: &[G::Vertex],
    records: &mut [VertexRecord],
    project_length: Time,
) {
    for record in records.iter_mut() {
        record.latest_completion = project_length;
        record.latest_start = project_length - record.duration;
    }

    for &vertex in order.iter().rev() {
        let index = graph.index(vertex);

        for successor in graph.successors(vertex) {
            let bound = records[graph.index(successor)].latest_start;
            let record = &mut records[index];
            record.latest_completion = record.latest_completion.min(bound);
            record.latest_start = record.latest_completion - record.duration;
        }

        let record = &records[index];
        debug_assert!(
            record.earliest_completion <= record.latest_completion,
            "vertex {index} completes late: ec {} > lc {}",
            record.earliest_completion,
            record.latest_completion
        );
        trace!(
            vertex = index,
            ls = record.latest_start,
            lc = record.latest_completion,
            "Latest times fixed"
        );
    }

    debug!(project_length, "Backward pass complete");
}
