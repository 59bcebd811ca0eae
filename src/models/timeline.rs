//! Timeline (simulation output) model.
//!
//! A timeline is the ordered record of which process occupied the CPU
//! during which interval. Non-preemptive policies emit exactly one
//! segment per process; round-robin may emit several.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

/// One contiguous interval during which a single process occupies the CPU.
///
/// Invariant: `end > start` (zero-length segments are never emitted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Process that occupied the CPU.
    pub process_id: String,
    /// Interval start (ticks, inclusive).
    pub start: i64,
    /// Interval end (ticks, exclusive).
    pub end: i64,
}

impl Segment {
    /// Creates a new segment.
    pub fn new(process_id: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            process_id: process_id.into(),
            start,
            end,
        }
    }

    /// Segment length (end - start) in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// An ordered execution timeline.
///
/// Segments are stored in the order they were emitted, which is
/// non-decreasing `start` order because simulated time only moves
/// forward. This is the entire contract a rendering layer needs to
/// draw a Gantt chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Emitted segments, in execution order.
    pub segments: Vec<Segment>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the timeline has no segments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Makespan: latest end time across all segments.
    pub fn makespan(&self) -> i64 {
        self.segments.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// All segments belonging to a given process, in execution order.
    pub fn segments_for<'a>(&'a self, process_id: &'a str) -> impl Iterator<Item = &'a Segment> {
        self.segments
            .iter()
            .filter(move |s| s.process_id == process_id)
    }

    /// Completion time: end of the *last* segment for a process.
    ///
    /// Under round-robin a process owns several segments; the last one
    /// (in emission order) marks completion.
    pub fn completion_time(&self, process_id: &str) -> Option<i64> {
        self.segments_for(process_id).last().map(|s| s.end)
    }

    /// First time a process got the CPU: start of its earliest segment.
    pub fn first_start(&self, process_id: &str) -> Option<i64> {
        self.segments_for(process_id).next().map(|s| s.start)
    }

    /// Total CPU time a process received: sum of its segment durations.
    pub fn busy_time(&self, process_id: &str) -> i64 {
        self.segments_for(process_id).map(Segment::duration).sum()
    }
}
