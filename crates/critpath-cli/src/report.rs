//! Rendering of analysis results
//!
//! Vertex numbers in every output are 1-based, matching the input format.

use crate::input::TaskNetwork;
use critpath::{Error, Schedule, TaskTiming, Time};
use petgraph::graph::DiGraph;
use serde::Serialize;
use std::io::{self, Write};

/// One table row for a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    pub vertex: usize,
    pub duration: Time,
    pub earliest_start: Time,
    pub earliest_completion: Time,
    pub latest_start: Time,
    pub latest_completion: Time,
    pub slack: Time,
    pub critical: bool,
}

impl From<TaskTiming> for TaskRow {
    fn from(timing: TaskTiming) -> Self {
        Self {
            vertex: timing.index + 1,
            duration: timing.duration,
            earliest_start: timing.earliest_start,
            earliest_completion: timing.earliest_completion,
            latest_start: timing.latest_start,
            latest_completion: timing.latest_completion,
            slack: timing.slack,
            critical: timing.critical,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Report {
    Scheduled {
        project_length: Time,
        num_critical: usize,
        critical_path: Vec<usize>,
        tasks: Vec<TaskRow>,
    },
    NotADag {
        tail: usize,
        head: usize,
    },
}

impl Report {
    /// Node weights of the graph are the input vertex numbers.
    pub fn from_schedule(schedule: &Schedule<'_, DiGraph<usize, i64>>) -> Self {
        let graph = schedule.graph();
        Self::Scheduled {
            project_length: schedule.critical_path_length(),
            num_critical: schedule.num_critical(),
            critical_path: schedule
                .critical_path()
                .into_iter()
                .map(|vertex| graph[vertex])
                .collect(),
            tasks: schedule.timings().into_iter().map(TaskRow::from).collect(),
        }
    }

    /// Turns a cycle verdict into a report; any other error is handed back.
    pub fn from_error(error: Error) -> Result<Self, Error> {
        match error {
            Error::NotADag { tail, head } => Ok(Self::NotADag {
                tail: tail + 1,
                head: head + 1,
            }),
            other => Err(other),
        }
    }

    pub const fn is_scheduled(&self) -> bool {
        matches!(self, Self::Scheduled { .. })
    }

    pub fn write_table(&self, out: &mut impl Write) -> io::Result<()> {
        match self {
            Self::Scheduled {
                num_critical,
                tasks,
                ..
            } => {
                writeln!(out, "Number of critical vertices: {num_critical}")?;
                writeln!(out, "u\tEC\tLC\tSlack\tCritical")?;
                for row in tasks {
                    writeln!(
                        out,
                        "{}\t{}\t{}\t{}\t{}",
                        row.vertex,
                        row.earliest_completion,
                        row.latest_completion,
                        row.slack,
                        row.critical
                    )?;
                }
                Ok(())
            }
            Self::NotADag { .. } => writeln!(out, "Invalid graph: not a DAG"),
        }
    }

    pub fn write_json(&self, out: &mut impl Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self).map_err(io::Error::other)?;
        writeln!(out)
    }
}

/// Echo the parsed network, one edge per line in input order.
pub fn write_graph(network: &TaskNetwork, out: &mut impl Write) -> io::Result<()> {
    let graph = &network.graph;
    writeln!(out, "Graph: n: {}, m: {}", graph.node_count(), graph.edge_count())?;
    for edge in graph.raw_edges() {
        writeln!(
            out,
            "{} -> {} ({})",
            graph[edge.source()],
            graph[edge.target()],
            edge.weight
        )?;
    }
    writeln!(out)
}
