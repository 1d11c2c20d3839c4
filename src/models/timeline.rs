//! Execution timeline (Gantt chart) model.
//!
//! A timeline is an ordered sequence of contiguous, non-overlapping
//! segments. Each segment records either one process executing or the
//! CPU sitting idle. The timeline spans from the simulation start to
//! the last completion.

use serde::{Deserialize, Serialize};

/// Label used for idle segments.
pub const IDLE_LABEL: &str = "Idle";

/// One contiguous execution (or idle) segment.
///
/// `process_id` is `None` for idle segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttEntry {
    /// Executing process, or `None` when the CPU is idle.
    pub process_id: Option<u32>,
    /// Display label (process name, or "Idle").
    pub label: String,
    /// Segment start time (inclusive).
    pub start: i64,
    /// Segment end time (exclusive). Always > `start`.
    pub end: i64,
}

impl GanttEntry {
    /// Creates an execution segment for a process.
    pub fn run(process_id: u32, label: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            process_id: Some(process_id),
            label: label.into(),
            start,
            end,
        }
    }

    /// Creates an idle segment.
    pub fn idle(start: i64, end: i64) -> Self {
        Self {
            process_id: None,
            label: IDLE_LABEL.to_string(),
            start,
            end,
        }
    }

    /// Segment duration (end - start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether this segment is an idle block.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.process_id.is_none()
    }
}

/// An ordered sequence of contiguous segments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    /// Segments in time order.
    pub entries: Vec<GanttEntry>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start of the first segment (0 for an empty timeline).
    pub fn start(&self) -> i64 {
        self.entries.first().map(|e| e.start).unwrap_or(0)
    }

    /// End of the last segment (0 for an empty timeline).
    pub fn makespan(&self) -> i64 {
        self.entries.last().map(|e| e.end).unwrap_or(0)
    }

    /// Total time spent executing processes.
    pub fn busy_time(&self) -> i64 {
        self.entries
            .iter()
            .filter(|e| !e.is_idle())
            .map(|e| e.duration())
            .sum()
    }

    /// Total time spent idle.
    pub fn idle_time(&self) -> i64 {
        self.entries
            .iter()
            .filter(|e| e.is_idle())
            .map(|e| e.duration())
            .sum()
    }

    /// Whether every adjacent pair of segments meets exactly.
    pub fn is_contiguous(&self) -> bool {
        self.entries
            .windows(2)
            .all(|pair| pair[0].end == pair[1].start)
    }

    /// Returns all segments executing the given process.
    pub fn entries_for_process(&self, process_id: u32) -> Vec<&GanttEntry> {
        self.entries
            .iter()
            .filter(|e| e.process_id == Some(process_id))
            .collect()
    }

    /// Number of segments.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether the timeline has no segments.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds a timeline, merging adjacent segments of the same process
/// (and adjacent idle segments) into one entry.
#[derive(Debug, Default)]
pub struct TimelineBuilder {
    entries: Vec<GanttEntry>,
}

impl TimelineBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an execution segment, extending the previous entry when
    /// it belongs to the same process and meets it exactly.
    pub fn record_run(&mut self, process_id: u32, label: &str, start: i64, end: i64) {
        debug_assert!(end > start);
        if let Some(last) = self.entries.last_mut() {
            if last.process_id == Some(process_id) && last.end == start {
                last.end = end;
                return;
            }
        }
        self.entries.push(GanttEntry::run(process_id, label, start, end));
    }

    /// Appends an idle segment, extending a previous idle entry that
    /// meets it exactly.
    pub fn record_idle(&mut self, start: i64, end: i64) {
        debug_assert!(end > start);
        if let Some(last) = self.entries.last_mut() {
            if last.is_idle() && last.end == start {
                last.end = end;
                return;
            }
        }
        self.entries.push(GanttEntry::idle(start, end));
    }

    /// Finishes building and returns the timeline.
    pub fn finish(self) -> Timeline {
        Timeline {
            entries: self.entries,
        }
    }
}
