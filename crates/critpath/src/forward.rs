//! Forward pass: earliest start and completion times.

use crate::graph::TaskGraph;
use crate::records::{Time, VertexRecord};
use crate::{Error, Result};
use tracing::{debug, trace};

/// Propagate earliest times along `order` and return the project length.
///
/// `order` must be a topological order of `graph`: every predecessor of a
/// vertex is finalized before the vertex itself is read. `records` is indexed
/// by [`TaskGraph::index`].
///
/// # Errors
///
/// Returns [`Error::TimeOverflow`] if some `es + d` exceeds [`Time::MAX`].
pub fn run<G: TaskGraph>(
    graph: &G,
    order: &[G::Vertex],
    records: &mut [VertexRecord],
) -> Result<Time> {
    let mut project_length = 0;

    for &vertex in order {
        let index = graph.index(vertex);
        let record = &mut records[index];
        record.earliest_completion = record
            .earliest_start
            .checked_add(record.duration)
            .ok_or(Error::TimeOverflow { vertex: index })?;
        let completion = record.earliest_completion;
        project_length = project_length.max(completion);
        trace!(
            vertex = index,
            es = record.earliest_start,
            ec = completion,
            "Earliest times fixed"
        );

        for successor in graph.successors(vertex) {
            let next = &mut records[graph.index(successor)];
            next.earliest_start = next.earliest_start.max(completion);
        }
    }

    debug!(project_length, "Forward pass complete");
    Ok(project_length)
}
