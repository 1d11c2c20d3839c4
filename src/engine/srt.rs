//! Shortest Remaining Time scheduling (preemptive SJF).
//!
//! At every arrival and completion event the ready process with the
//! least remaining time is selected, so an arriving process with a
//! shorter burst preempts the running one. Ties go to the
//! earliest-arrived process. Contiguous spans of the same process merge
//! into one timeline entry, so re-selection across a non-preempting
//! arrival leaves no seam in the output.
//!
//! # Reference
//! Stallings (2018), "Operating Systems", Ch. 9.2: Shortest Remaining Time

use super::workload::Workload;
use crate::models::{Timeline, TimelineBuilder};

/// Runs the workload to completion under SRT.
pub(crate) fn run(workload: &mut Workload) -> Timeline {
    let mut timeline = TimelineBuilder::new();
    let mut now: i64 = 0;

    while !workload.all_complete() {
        let Some(idx) = shortest_remaining(workload, now) else {
            match workload.next_arrival_after(now) {
                Some(next) => {
                    timeline.record_idle(now, next);
                    now = next;
                }
                None => break,
            }
            continue;
        };

        // Run until completion or the next arrival, whichever comes
        // first; the ready set is re-evaluated at every arrival.
        let completion = now + workload.procs[idx].remaining;
        let end = match workload.next_arrival_after(now) {
            Some(arrival) if arrival < completion => arrival,
            _ => completion,
        };

        timeline.record_run(workload.procs[idx].id, &workload.procs[idx].name, now, end);
        workload.execute(idx, end - now, end);
        now = end;
    }

    timeline.finish()
}

/// Ready process with the least remaining time.
///
/// Earlier position wins ties; the workload is arrival-sorted, so this
/// is earliest-arrival, then input order.
fn shortest_remaining(workload: &Workload, now: i64) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, p) in workload.procs.iter().enumerate() {
        if !p.is_ready(now) {
            continue;
        }
        if best.map_or(true, |b| p.remaining < workload.procs[b].remaining) {
            best = Some(i);
        }
    }
    best
}
