//! Scheduling policies and the simulation facade.
//!
//! One call to [`simulate`] runs one policy over a process list and
//! returns the execution timeline plus per-process metrics. All input
//! problems are rejected before any simulation state is built, so a
//! run never partially executes and then fails.
//!
//! # Usage
//!
//! ```
//! use sched_sim::engine::{simulate, Algorithm};
//! use sched_sim::models::Process;
//!
//! let processes = vec![
//!     Process::new(1, "P1", 0, 8),
//!     Process::new(2, "P2", 1, 4),
//! ];
//! let result = simulate(&processes, &Algorithm::RoundRobin { quantum: 3 }).unwrap();
//! assert_eq!(result.timeline.makespan(), 12);
//! assert_eq!(result.process(2).unwrap().finish_time, 10);
//! ```

mod hrrn;
mod round_robin;
mod srt;
mod stats;
mod workload;

pub use stats::{MetricsSummary, ProcessMetrics};

use std::fmt;

use crate::models::{Process, SimulationResult};
use crate::validation::{validate_processes, ValidationError};
use workload::Workload;

/// Scheduling policy selector.
///
/// Closed set of supported policies; algorithm-specific parameters
/// travel with the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Round Robin with a fixed time quantum.
    RoundRobin {
        /// Slice length in time units (> 0).
        quantum: i64,
    },
    /// Shortest Remaining Time (preemptive SJF).
    Srt,
    /// Highest Response Ratio Next (non-preemptive).
    Hrrn,
}

impl Algorithm {
    /// Resolves an external selector string (`rr`, `srt`, `hrrn`).
    ///
    /// `quantum` is required and must be positive for `rr`; it is
    /// ignored for the other policies.
    pub fn from_selector(selector: &str, quantum: Option<i64>) -> Result<Self, SimulationError> {
        match selector {
            "rr" => match quantum {
                Some(q) if q > 0 => Ok(Self::RoundRobin { quantum: q }),
                Some(q) => Err(SimulationError::InvalidParameter(format!(
                    "quantum must be positive, got {q}"
                ))),
                None => Err(SimulationError::InvalidParameter(
                    "round robin requires a quantum".to_string(),
                )),
            },
            "srt" => Ok(Self::Srt),
            "hrrn" => Ok(Self::Hrrn),
            other => Err(SimulationError::InvalidParameter(format!(
                "unknown algorithm selector '{other}'"
            ))),
        }
    }

    /// Policy name as used by the external selector.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RoundRobin { .. } => "rr",
            Self::Srt => "srt",
            Self::Hrrn => "hrrn",
        }
    }

    /// Whether the policy may interrupt a running process.
    pub fn is_preemptive(&self) -> bool {
        match self {
            Self::RoundRobin { .. } | Self::Srt => true,
            Self::Hrrn => false,
        }
    }
}

/// Errors detected before a simulation starts.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// No processes were supplied.
    EmptyInput,
    /// Missing or out-of-range algorithm parameter.
    InvalidParameter(String),
    /// The process list failed validation.
    InvalidProcess(Vec<ValidationError>),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "no processes supplied"),
            Self::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
            Self::InvalidProcess(errors) => {
                let messages: Vec<&str> =
                    errors.iter().map(|e| e.message.as_str()).collect();
                write!(f, "invalid process list: {}", messages.join("; "))
            }
        }
    }
}

impl std::error::Error for SimulationError {}

/// Runs one simulation.
///
/// Validates the input, builds a private working copy (caller-supplied
/// processes are never mutated), dispatches to the selected policy, and
/// derives per-process metrics once the run completes. Deterministic:
/// identical inputs always produce identical output.
///
/// # Errors
/// - [`SimulationError::EmptyInput`] if `processes` is empty
/// - [`SimulationError::InvalidParameter`] for a non-positive RR quantum
/// - [`SimulationError::InvalidProcess`] if the process list fails validation
pub fn simulate(
    processes: &[Process],
    algorithm: &Algorithm,
) -> Result<SimulationResult, SimulationError> {
    if processes.is_empty() {
        return Err(SimulationError::EmptyInput);
    }
    if let Algorithm::RoundRobin { quantum } = algorithm {
        if *quantum <= 0 {
            return Err(SimulationError::InvalidParameter(format!(
                "quantum must be positive, got {quantum}"
            )));
        }
    }
    validate_processes(processes).map_err(SimulationError::InvalidProcess)?;

    let mut workload = Workload::new(processes);
    let timeline = match algorithm {
        Algorithm::RoundRobin { quantum } => round_robin::run(&mut workload, *quantum),
        Algorithm::Srt => srt::run(&mut workload),
        Algorithm::Hrrn => hrrn::run(&mut workload),
    };

    let mut completed = workload.into_completed();
    completed.sort_by_key(|p| p.id);

    Ok(SimulationResult {
        timeline,
        processes: completed,
    })
}
