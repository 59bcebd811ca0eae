//! Process (simulation input) model.
//!
//! A process is one unit of CPU demand: it arrives at a known instant,
//! needs a known total burst, and optionally carries a scheduling
//! priority. All fields are fixed before simulation starts.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.1

use serde::{Deserialize, Serialize};

/// A process to be dispatched.
///
/// Immutable once constructed; policies read it by shared reference and
/// keep their own working state (remaining burst, done flags) elsewhere.
///
/// # Priority
/// `priority` is required only by the priority policy; lower numeric value
/// means higher scheduling priority. Absence is detected at validation
/// time, not by a runtime lookup failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: String,
    /// Instant the process becomes eligible to run (ticks, ≥ 0).
    pub arrival: i64,
    /// Total CPU time the process requires (ticks, > 0).
    pub burst: i64,
    /// Scheduling priority (lower = more urgent). `None` = not supplied.
    pub priority: Option<i32>,
}

impl Process {
    /// Creates a new process with the given ID, arrival time, and burst.
    pub fn new(id: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            priority: None,
        }
    }

    /// Sets the scheduling priority (lower = more urgent).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Whether a priority was supplied.
    #[inline]
    pub fn has_priority(&self) -> bool {
        self.priority.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new("P1", 3, 7).with_priority(2);

        assert_eq!(p.id, "P1");
        assert_eq!(p.arrival, 3);
        assert_eq!(p.burst, 7);
        assert_eq!(p.priority, Some(2));
        assert!(p.has_priority());
    }

    #[test]
    fn test_process_without_priority() {
        let p = Process::new("P2", 0, 1);
        assert_eq!(p.priority, None);
        assert!(!p.has_priority());
    }
}
