//! Per-process metric derivation and run-level summary.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround time | finish - arrival |
//! | Waiting time | turnaround - burst |
//! | Normalized turnaround | turnaround / burst |
//!
//! The deriver is a pure function of (arrival, burst, finish): calling
//! it repeatedly on the same completed state yields identical results.
//!
//! # Reference
//! Stallings (2018), "Operating Systems", Ch. 9.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::CompletedProcess;

/// Derived performance metrics for one completed process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessMetrics {
    /// Time from arrival to completion.
    pub turnaround_time: i64,
    /// Time spent ready but not running.
    pub waiting_time: i64,
    /// Relative slowdown: turnaround / burst, rounded to 2 decimal
    /// places (display precision).
    pub normalized_turnaround: f64,
}

impl ProcessMetrics {
    /// Derives metrics from a completed process's times.
    pub fn derive(arrival: i64, burst: i64, finish_time: i64) -> Self {
        let turnaround_time = finish_time - arrival;
        let waiting_time = turnaround_time - burst;
        let normalized_turnaround = round2(turnaround_time as f64 / burst as f64);
        Self {
            turnaround_time,
            waiting_time,
            normalized_turnaround,
        }
    }
}

/// Rounds to 2 decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Averages of the per-process metrics across a completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean normalized turnaround.
    pub avg_normalized_turnaround: f64,
}

impl MetricsSummary {
    /// Computes summary averages over a completed process list.
    ///
    /// Returns zeros for an empty list.
    pub fn calculate(processes: &[CompletedProcess]) -> Self {
        if processes.is_empty() {
            return Self {
                avg_turnaround_time: 0.0,
                avg_waiting_time: 0.0,
                avg_normalized_turnaround: 0.0,
            };
        }

        let n = processes.len() as f64;
        let total_turnaround: i64 = processes.iter().map(|p| p.turnaround_time).sum();
        let total_waiting: i64 = processes.iter().map(|p| p.waiting_time).sum();
        let total_normalized: f64 = processes.iter().map(|p| p.normalized_turnaround).sum();

        Self {
            avg_turnaround_time: total_turnaround as f64 / n,
            avg_waiting_time: total_waiting as f64 / n,
            avg_normalized_turnaround: total_normalized / n,
        }
    }
}
