//! Per-vertex scheduling state.

/// Scheduling time unit. Durations and all derived times are non-negative.
pub type Time = u64;

/// Sentinel for a latest time that the backward pass has not bounded yet.
pub const UNBOUNDED: Time = Time::MAX;

/// Scheduling attributes of one task, keyed by the vertex's dense index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexRecord {
    /// Processing time of the task.
    pub duration: Time,
    /// Earliest time the task can start.
    pub earliest_start: Time,
    /// `earliest_start + duration` once the forward pass has run.
    pub earliest_completion: Time,
    /// Latest start that does not delay the project.
    pub latest_start: Time,
    /// Latest completion that does not delay the project.
    pub latest_completion: Time,
}

impl VertexRecord {
    /// Fresh record for a task of the given duration.
    #[must_use]
    pub const fn new(duration: Time) -> Self {
        Self {
            duration,
            earliest_start: 0,
            earliest_completion: 0,
            latest_start: UNBOUNDED,
            latest_completion: UNBOUNDED,
        }
    }

    /// Float of the task: how far its start can slip without moving the project end.
    #[must_use]
    pub const fn slack(&self) -> Time {
        self.latest_start - self.earliest_start
    }

    /// A task is critical when it has no float.
    #[must_use]
    pub const fn is_critical(&self) -> bool {
        self.latest_start == self.earliest_start
    }
}

/// Build one fresh record per duration, in index order.
pub(crate) fn fresh_records(durations: &[Time]) -> Vec<VertexRecord> {
    durations.iter().copied().map(VertexRecord::new).collect()
}
