//! Dispatching policies.
//!
//! Four runtime-selectable policies behind one closed dispatch:
//!
//! | Policy | Preemptive | Selection criterion |
//! |--------|-----------|---------------------|
//! | FCFS | no | earliest arrival |
//! | SJF | no | minimum burst among ready |
//! | Priority | no | minimum priority value among ready |
//! | Round-Robin | yes | FIFO, fixed quantum |
//!
//! Every policy is a pure function: it validates the batch, simulates to
//! completion, and returns the timeline with its derived metrics. The
//! caller's processes are never mutated, so independent runs (e.g. all
//! four policies over the same batch) need no coordination.
//!
//! # Tie-breaking
//!
//! The order processes are supplied in is semantically significant: SJF
//! and Priority resolve equal selection keys in favor of the process that
//! appears first in the input, and FCFS resolves equal arrivals the same
//! way.
//!
//! # Usage
//!
//! ```
//! use cpu_dispatch::models::Process;
//! use cpu_dispatch::policies::Policy;
//!
//! let processes = vec![Process::new("P1", 0, 4), Process::new("P2", 1, 3)];
//! let outcome = Policy::RoundRobin { quantum: 2 }.simulate(&processes).unwrap();
//! assert_eq!(outcome.timeline.len(), 4);
//! ```
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3

mod fcfs;
mod nonpreemptive;
mod round_robin;

use serde::{Deserialize, Serialize};

use crate::metrics::SimulationMetrics;
use crate::models::{Process, Timeline};
use crate::validation::{self, ValidationError};

/// Result of one simulation run.
///
/// The timeline plus the metrics derived from it: the entire contract a
/// rendering layer needs for a Gantt chart, a per-process table, and
/// aggregate averages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Execution timeline, in emission order.
    pub timeline: Timeline,
    /// Per-process metrics derived from the timeline.
    pub metrics: SimulationMetrics,
}

/// A dispatching policy.
///
/// Closed set: consumers select a variant by tag, not by matching on a
/// display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Policy {
    /// First-come-first-served.
    Fcfs,
    /// Shortest-job-first, non-preemptive.
    Sjf,
    /// Priority, non-preemptive (lower value = more urgent).
    Priority,
    /// Round-robin with a fixed positive quantum.
    RoundRobin {
        /// Maximum CPU time granted per slice (ticks).
        quantum: i64,
    },
}

impl Policy {
    /// Policy name (e.g. "FCFS").
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sjf => "SJF",
            Policy::Priority => "PRIORITY",
            Policy::RoundRobin { .. } => "RR",
        }
    }

    /// Policy description.
    pub fn description(&self) -> &'static str {
        match self {
            Policy::Fcfs => "First-Come-First-Served",
            Policy::Sjf => "Shortest-Job-First (Non-Preemptive)",
            Policy::Priority => "Priority (Non-Preemptive)",
            Policy::RoundRobin { .. } => "Round Robin",
        }
    }

    /// Whether the policy may interrupt a running process.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Policy::RoundRobin { .. })
    }

    /// All four policies, for side-by-side comparison runs.
    pub fn all(quantum: i64) -> [Policy; 4] {
        [
            Policy::Fcfs,
            Policy::Sjf,
            Policy::Priority,
            Policy::RoundRobin { quantum },
        ]
    }

    /// Validates the batch against this policy's requirements.
    ///
    /// Shared checks (empty batch, burst/arrival ranges, duplicate IDs)
    /// plus the variant-specific ones: priorities for `Priority`, a
    /// positive quantum for `RoundRobin`. All errors are collected.
    pub fn validate(&self, processes: &[Process]) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = validation::validate_processes(processes) {
            errors.extend(e);
        }
        match *self {
            Policy::Priority => {
                if let Err(e) = validation::validate_priorities(processes) {
                    errors.extend(e);
                }
            }
            Policy::RoundRobin { quantum } => {
                if let Err(e) = validation::validate_quantum(quantum) {
                    errors.extend(e);
                }
            }
            Policy::Fcfs | Policy::Sjf => {}
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validates the batch, then simulates it to completion.
    ///
    /// Returns the timeline and derived metrics, or every validation
    /// error found. On failure nothing has run and the caller's data is
    /// untouched.
    pub fn simulate(&self, processes: &[Process]) -> Result<SimulationOutcome, Vec<ValidationError>> {
        self.validate(processes)?;

        let timeline = match *self {
            Policy::Fcfs => fcfs::simulate(processes),
            Policy::Sjf => nonpreemptive::shortest_job_first(processes),
            Policy::Priority => nonpreemptive::highest_priority(processes),
            Policy::RoundRobin { quantum } => round_robin::simulate(processes, quantum),
        };
        let metrics = SimulationMetrics::from_timeline(&timeline, processes);

        Ok(SimulationOutcome { timeline, metrics })
    }
}
