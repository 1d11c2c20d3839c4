//! Process model.
//!
//! A process is a single CPU-bound job: it arrives at a fixed simulated
//! time and requires a fixed amount of CPU time (one burst). Derived
//! performance metrics are reported separately on [`CompletedProcess`]
//! after a run.
//!
//! # Reference
//! Stallings (2018), "Operating Systems", Ch. 9: Uniprocessor Scheduling

use serde::{Deserialize, Serialize};

/// A process to schedule.
///
/// Caller-owned immutable input record. The engine never mutates these
/// values; each simulation run operates on its own working copy.
///
/// # Time Representation
/// All times are integer simulated time units relative to t=0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique identifier, stable for the simulation's lifetime.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Time at which the process becomes eligible to run (>= 0).
    pub arrival: i64,
    /// Total CPU time required (> 0).
    pub burst: i64,
}

impl Process {
    /// Creates a new process.
    pub fn new(id: u32, name: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            id,
            name: name.into(),
            arrival,
            burst,
        }
    }

    /// Creates a process with a generated placeholder name (`P{id}`).
    pub fn unnamed(id: u32, arrival: i64, burst: i64) -> Self {
        Self::new(id, format!("P{id}"), arrival, burst)
    }
}

/// A process after a completed run, with derived metrics.
///
/// Produced by the engine once the process's remaining time reaches
/// zero. `SimulationResult` orders these by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedProcess {
    /// Identifier of the input process.
    pub id: u32,
    /// Display name of the input process.
    pub name: String,
    /// Arrival time of the input process.
    pub arrival: i64,
    /// Burst time of the input process.
    pub burst: i64,
    /// Time at which the last burst unit finished (>= arrival + burst).
    pub finish_time: i64,
    /// `finish_time - arrival`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst`: time spent ready but not running.
    pub waiting_time: i64,
    /// `turnaround_time / burst`, rounded to 2 decimal places.
    pub normalized_turnaround: f64,
}
