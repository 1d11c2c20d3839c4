//! End-to-end scenario tests over the classic four-process workload
//! and the boundary error cases.

use sched_sim::engine::{simulate, Algorithm, MetricsSummary, SimulationError};
use sched_sim::models::{Process, SimulationResult};

fn classic_set() -> Vec<Process> {
    vec![
        Process::new(1, "P1", 0, 8),
        Process::new(2, "P2", 1, 4),
        Process::new(3, "P3", 2, 9),
        Process::new(4, "P4", 3, 5),
    ]
}

fn spans(result: &SimulationResult) -> Vec<(Option<u32>, i64, i64)> {
    result
        .timeline
        .entries
        .iter()
        .map(|e| (e.process_id, e.start, e.end))
        .collect()
}

#[test]
fn scenario_a_round_robin_quantum_3() {
    let result = simulate(&classic_set(), &Algorithm::RoundRobin { quantum: 3 }).unwrap();

    assert_eq!(result.makespan(), 26);
    assert_eq!(result.timeline.busy_time(), 26);

    let finish = |id: u32| result.process(id).unwrap().finish_time;
    assert_eq!(finish(2), 16);
    assert_eq!(finish(4), 21);
    assert_eq!(finish(1), 23);
    assert_eq!(finish(3), 26);
    assert!(finish(2) < finish(1));
}

#[test]
fn scenario_a_round_robin_averages() {
    let result = simulate(&classic_set(), &Algorithm::RoundRobin { quantum: 3 }).unwrap();
    let summary = MetricsSummary::calculate(&result.processes);

    // Turnarounds 23, 15, 24, 18; waits 15, 11, 15, 13.
    assert!((summary.avg_turnaround_time - 20.0).abs() < 1e-9);
    assert!((summary.avg_waiting_time - 13.5).abs() < 1e-9);
    // Normalized (2 d.p.): 2.88, 3.75, 2.67, 3.6.
    assert!((summary.avg_normalized_turnaround - 3.225).abs() < 1e-9);
}

#[test]
fn scenario_b_srt() {
    let result = simulate(&classic_set(), &Algorithm::Srt).unwrap();

    // P1 starts at 0 and is preempted at t=1 by P2 (4 < 7).
    assert_eq!(
        spans(&result),
        vec![
            (Some(1), 0, 1),
            (Some(2), 1, 5),
            (Some(4), 5, 10),
            (Some(1), 10, 17),
            (Some(3), 17, 26),
        ]
    );

    let finish = |id: u32| result.process(id).unwrap().finish_time;
    assert_eq!(finish(2), 5);
    assert_eq!(finish(4), 10);
    assert_eq!(finish(1), 17);
    assert_eq!(finish(3), 26);
}

#[test]
fn scenario_c_hrrn() {
    let result = simulate(&classic_set(), &Algorithm::Hrrn).unwrap();

    assert_eq!(
        spans(&result),
        vec![
            (Some(1), 0, 8),
            (Some(2), 8, 12),
            (Some(4), 12, 17),
            (Some(3), 17, 26),
        ]
    );

    // Non-preemptive: exactly one uninterrupted span per process.
    for p in &classic_set() {
        let entries = result.timeline.entries_for_process(p.id);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].duration(), p.burst);
    }
}

#[test]
fn scenario_d_idle_leading_block() {
    let processes = vec![Process::new(1, "P1", 5, 3)];

    for algorithm in [
        Algorithm::RoundRobin { quantum: 3 },
        Algorithm::Srt,
        Algorithm::Hrrn,
    ] {
        let result = simulate(&processes, &algorithm).unwrap();
        let entries = &result.timeline.entries;

        assert_eq!(entries.len(), 2, "policy {}", algorithm.name());
        assert!(entries[0].is_idle());
        assert_eq!((entries[0].start, entries[0].end), (0, 5));
        assert_eq!(entries[1].process_id, Some(1));
        assert_eq!((entries[1].start, entries[1].end), (5, 8));
    }
}

#[test]
fn error_invalid_quantum() {
    for quantum in [0, -1] {
        let err = simulate(&classic_set(), &Algorithm::RoundRobin { quantum }).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidParameter(_)));
    }
}

#[test]
fn error_empty_process_list() {
    for algorithm in [Algorithm::RoundRobin { quantum: 3 }, Algorithm::Srt, Algorithm::Hrrn] {
        let err = simulate(&[], &algorithm).unwrap_err();
        assert_eq!(err, SimulationError::EmptyInput);
    }
}

#[test]
fn selector_round_trip() {
    let rr = Algorithm::from_selector("rr", Some(4)).unwrap();
    let srt = Algorithm::from_selector("srt", None).unwrap();
    let hrrn = Algorithm::from_selector("hrrn", None).unwrap();

    assert_eq!(rr.name(), "rr");
    assert_eq!(srt.name(), "srt");
    assert_eq!(hrrn.name(), "hrrn");

    // All three run the same workload to the same makespan.
    for algorithm in [rr, srt, hrrn] {
        let result = simulate(&classic_set(), &algorithm).unwrap();
        assert_eq!(result.makespan(), 26);
    }
}

#[test]
fn stats_deriver_idempotent_across_reruns() {
    let processes = classic_set();
    let first = simulate(&processes, &Algorithm::Hrrn).unwrap();
    let second = simulate(&processes, &Algorithm::Hrrn).unwrap();
    assert_eq!(first.processes, second.processes);
}
