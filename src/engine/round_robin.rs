//! Round Robin scheduling.
//!
//! Preemptive time-slicing over a FIFO ready queue with a fixed
//! quantum. A process that exhausts its slice returns to the tail of
//! the queue; processes that arrived during the slice are enqueued
//! first, so a new arrival takes queue priority over the preempted
//! process.
//!
//! Every slice is emitted as its own timeline entry, so no non-idle
//! entry is longer than the quantum.
//!
//! # Reference
//! Stallings (2018), "Operating Systems", Ch. 9.2: Round Robin

use std::collections::VecDeque;

use super::workload::Workload;
use crate::models::{GanttEntry, Timeline};

/// Runs the workload to completion under Round Robin.
///
/// `quantum` must be positive; the facade validates it before calling.
pub(crate) fn run(workload: &mut Workload, quantum: i64) -> Timeline {
    let mut entries: Vec<GanttEntry> = Vec::new();
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut now: i64 = 0;
    // procs[..admitted] are queued, running, or complete.
    let mut admitted = 0;

    while !workload.all_complete() {
        while admitted < workload.len() && workload.procs[admitted].arrival <= now {
            queue.push_back(admitted);
            admitted += 1;
        }

        let Some(idx) = queue.pop_front() else {
            // Nothing ready: idle until the next arrival.
            let next = workload.procs[admitted].arrival;
            entries.push(GanttEntry::idle(now, next));
            now = next;
            continue;
        };

        let span = quantum.min(workload.procs[idx].remaining);
        let end = now + span;
        entries.push(GanttEntry::run(
            workload.procs[idx].id,
            workload.procs[idx].name.as_str(),
            now,
            end,
        ));
        workload.execute(idx, span, end);
        now = end;

        // Arrivals during the slice enqueue ahead of the preempted process.
        while admitted < workload.len() && workload.procs[admitted].arrival <= now {
            queue.push_back(admitted);
            admitted += 1;
        }
        if workload.procs[idx].remaining > 0 {
            queue.push_back(idx);
        }
    }

    Timeline { entries }
}
