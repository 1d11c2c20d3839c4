//! Per-run working copy of the process set.
//!
//! Each simulation clones the caller's processes into a [`Workload`]
//! and mutates only that copy. Processes are held in arrival order
//! (stable with respect to input order) and addressed by index.

use crate::engine::stats::ProcessMetrics;
use crate::models::{CompletedProcess, Process};

/// Mutable simulation state for one process.
#[derive(Debug, Clone)]
pub(crate) struct ProcState {
    pub id: u32,
    pub name: String,
    pub arrival: i64,
    pub burst: i64,
    /// CPU time still required. Invariant: 0 <= remaining <= burst.
    pub remaining: i64,
    /// Set exactly once, when `remaining` reaches zero.
    pub finish_time: Option<i64>,
}

impl ProcState {
    /// Whether the process has run to completion.
    pub fn is_complete(&self) -> bool {
        self.finish_time.is_some()
    }

    /// Whether the process has arrived and still needs CPU at `now`.
    pub fn is_ready(&self, now: i64) -> bool {
        self.arrival <= now && self.remaining > 0
    }
}

/// The process set a single simulation run operates on.
#[derive(Debug)]
pub(crate) struct Workload {
    pub procs: Vec<ProcState>,
}

impl Workload {
    /// Builds a working copy sorted by arrival time.
    ///
    /// The sort is stable: processes arriving at the same time keep
    /// their input order.
    pub fn new(processes: &[Process]) -> Self {
        let mut procs: Vec<ProcState> = processes
            .iter()
            .map(|p| ProcState {
                id: p.id,
                name: p.name.clone(),
                arrival: p.arrival,
                burst: p.burst,
                remaining: p.burst,
                finish_time: None,
            })
            .collect();
        procs.sort_by_key(|p| p.arrival);
        Self { procs }
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.procs.len()
    }

    /// Whether every process has finished.
    pub fn all_complete(&self) -> bool {
        self.procs.iter().all(|p| p.is_complete())
    }

    /// Earliest arrival strictly after `now`, if any.
    pub fn next_arrival_after(&self, now: i64) -> Option<i64> {
        self.procs
            .iter()
            .filter(|p| p.arrival > now)
            .map(|p| p.arrival)
            .min()
    }

    /// Executes process `idx` for `span` time units ending at `end`,
    /// completing it when its remaining time reaches zero.
    pub fn execute(&mut self, idx: usize, span: i64, end: i64) {
        let p = &mut self.procs[idx];
        debug_assert!(span > 0 && span <= p.remaining);
        p.remaining -= span;
        if p.remaining == 0 {
            p.finish_time = Some(end);
        }
    }

    /// Converts the finished workload into the output metrics list.
    pub fn into_completed(self) -> Vec<CompletedProcess> {
        self.procs
            .into_iter()
            .map(|p| {
                let finish_time = p
                    .finish_time
                    .expect("process completed without a finish time");
                let metrics = ProcessMetrics::derive(p.arrival, p.burst, finish_time);
                CompletedProcess {
                    id: p.id,
                    name: p.name,
                    arrival: p.arrival,
                    burst: p.burst,
                    finish_time,
                    turnaround_time: metrics.turnaround_time,
                    waiting_time: metrics.waiting_time,
                    normalized_turnaround: metrics.normalized_turnaround,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workload_sorts_by_arrival() {
        let processes = vec![
            Process::new(1, "late", 5, 2),
            Process::new(2, "early", 1, 3),
            Process::new(3, "first", 0, 4),
        ];
        let w = Workload::new(&processes);
        assert_eq!(w.procs[0].name, "first");
        assert_eq!(w.procs[1].name, "early");
        assert_eq!(w.procs[2].name, "late");
    }

    #[test]
    fn test_workload_sort_is_stable() {
        // Equal arrivals keep input order.
        let processes = vec![
            Process::new(1, "a", 2, 1),
            Process::new(2, "b", 2, 1),
            Process::new(3, "c", 0, 1),
        ];
        let w = Workload::new(&processes);
        assert_eq!(w.procs[0].name, "c");
        assert_eq!(w.procs[1].name, "a");
        assert_eq!(w.procs[2].name, "b");
    }

    #[test]
    fn test_ready_and_next_arrival() {
        let processes = vec![Process::new(1, "P1", 0, 4), Process::new(2, "P2", 6, 2)];
        let w = Workload::new(&processes);
        assert!(w.procs[0].is_ready(0));
        assert!(!w.procs[1].is_ready(0));
        assert_eq!(w.next_arrival_after(0), Some(6));
        assert_eq!(w.next_arrival_after(6), None);
    }

    #[test]
    fn test_execute_decrements_and_completes() {
        let processes = vec![Process::new(1, "P1", 0, 5)];
        let mut w = Workload::new(&processes);

        w.execute(0, 3, 3);
        assert_eq!(w.procs[0].remaining, 2);
        assert!(!w.procs[0].is_complete());

        w.execute(0, 2, 5);
        assert_eq!(w.procs[0].remaining, 0);
        assert_eq!(w.procs[0].finish_time, Some(5));
        assert!(w.all_complete());
    }

    #[test]
    fn test_into_completed_derives_metrics() {
        let processes = vec![Process::new(1, "P1", 2, 4)];
        let mut w = Workload::new(&processes);
        w.execute(0, 4, 10);

        let completed = w.into_completed();
        assert_eq!(completed[0].finish_time, 10);
        assert_eq!(completed[0].turnaround_time, 8);
        assert_eq!(completed[0].waiting_time, 4);
        assert_eq!(completed[0].normalized_turnaround, 2.0);
    }
}
