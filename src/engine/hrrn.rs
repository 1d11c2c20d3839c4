//! Highest Response Ratio Next scheduling.
//!
//! Non-preemptive: at each decision point the ready process with the
//! highest response ratio `(waiting + burst) / burst` runs to
//! completion. Waiting raises the ratio over time, so long processes
//! cannot starve short ones indefinitely and vice versa.
//!
//! # Reference
//! Stallings (2018), "Operating Systems", Ch. 9.2: HRRN

use super::workload::{ProcState, Workload};
use crate::models::{Timeline, TimelineBuilder};

/// Runs the workload to completion under HRRN.
pub(crate) fn run(workload: &mut Workload) -> Timeline {
    let mut timeline = TimelineBuilder::new();
    let mut now: i64 = 0;

    while !workload.all_complete() {
        let Some(idx) = highest_response_ratio(workload, now) else {
            match workload.next_arrival_after(now) {
                Some(next) => {
                    timeline.record_idle(now, next);
                    now = next;
                }
                None => break,
            }
            continue;
        };

        // Selected process runs its full burst uninterrupted.
        let burst = workload.procs[idx].burst;
        let end = now + burst;
        timeline.record_run(workload.procs[idx].id, &workload.procs[idx].name, now, end);
        workload.execute(idx, burst, end);
        now = end;
    }

    timeline.finish()
}

/// Ready process with the highest response ratio.
///
/// Earlier position wins ties; the workload is arrival-sorted, so this
/// is earliest-arrival, then input order.
fn highest_response_ratio(workload: &Workload, now: i64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, p) in workload.procs.iter().enumerate() {
        if !p.is_ready(now) {
            continue;
        }
        let ratio = response_ratio(p, now);
        if best.map_or(true, |(_, b)| ratio > b) {
            best = Some((i, ratio));
        }
    }
    best.map(|(i, _)| i)
}

/// `(waiting + burst) / burst` for a process ready at `now`.
fn response_ratio(p: &ProcState, now: i64) -> f64 {
    let waiting = now - p.arrival;
    (waiting + p.burst) as f64 / p.burst as f64
}
