//! Per-process performance metrics.
//!
//! Computes standard dispatching indicators from a finished timeline
//! and the input batch. Metrics are derived, never tracked during
//! simulation: every value follows from segment endpoints alone.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion − arrival |
//! | Waiting | turnaround − burst |
//! | Response | first CPU start − arrival |
//!
//! Completion is the end of the *last* segment a process owns; under
//! round-robin that is the final quantum slice.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{Process, Timeline};

/// Per-process dispatching metrics, keyed by process ID.
///
/// Holds one entry per input process in each map. All values are in
/// ticks and non-negative for validated input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationMetrics {
    /// Time spent ready but not running (turnaround − burst).
    pub waiting_time: HashMap<String, i64>,
    /// Total time from arrival to completion.
    pub turnaround_time: HashMap<String, i64>,
    /// Time from arrival to first CPU allocation.
    pub response_time: HashMap<String, i64>,
}

impl SimulationMetrics {
    /// Derives metrics from a finished timeline and its input batch.
    ///
    /// Processes without any segment are skipped; after a simulation run
    /// every input process owns at least one (burst times are positive).
    pub fn from_timeline(timeline: &Timeline, processes: &[Process]) -> Self {
        let mut metrics = Self::default();

        for p in processes {
            if let Some(completion) = timeline.completion_time(&p.id) {
                let turnaround = completion - p.arrival;
                metrics.waiting_time.insert(p.id.clone(), turnaround - p.burst);
                metrics.turnaround_time.insert(p.id.clone(), turnaround);
            }
            if let Some(first_start) = timeline.first_start(&p.id) {
                metrics
                    .response_time
                    .insert(p.id.clone(), first_start - p.arrival);
            }
        }

        metrics
    }

    /// Average waiting time across all processes.
    pub fn avg_waiting(&self) -> f64 {
        mean(&self.waiting_time)
    }

    /// Average turnaround time across all processes.
    pub fn avg_turnaround(&self) -> f64 {
        mean(&self.turnaround_time)
    }

    /// Average response time across all processes.
    pub fn avg_response(&self) -> f64 {
        mean(&self.response_time)
    }
}

fn mean(values: &HashMap<String, i64>) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.values().sum::<i64>() as f64 / values.len() as f64
    }
}
