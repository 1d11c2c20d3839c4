//! Simulation result model.

use serde::{Deserialize, Serialize};

use super::{CompletedProcess, Timeline};

/// The complete outcome of one simulation run.
///
/// Holds the execution timeline and the completed processes with their
/// derived metrics. Returned as one immutable unit; the rendering layer
/// draws the Gantt chart from `timeline` and the statistics table from
/// `processes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Execution timeline covering [start, makespan].
    pub timeline: Timeline,
    /// Completed processes with derived metrics, ordered by id.
    pub processes: Vec<CompletedProcess>,
}

impl SimulationResult {
    /// Finds the completed process with the given id.
    pub fn process(&self, id: u32) -> Option<&CompletedProcess> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Number of completed processes.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }

    /// End of the last timeline segment.
    pub fn makespan(&self) -> i64 {
        self.timeline.makespan()
    }
}
