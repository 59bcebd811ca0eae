//! Single-processor CPU dispatching simulation.
//!
//! Simulates classic dispatching policies over a finite batch of processes
//! whose arrival times, burst times, and priorities are known up front, and
//! derives per-process performance metrics from the resulting timeline.
//! There is no real clock and no I/O model: each policy is a pure function
//! from a process batch to an execution timeline.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `Segment`, `Timeline`
//! - **`policies`**: The four dispatching policies — FCFS, SJF, Priority,
//!   Round-Robin — behind the `Policy` tagged dispatch
//! - **`metrics`**: Waiting, turnaround, and response times derived from a
//!   finished timeline
//! - **`validation`**: Input integrity checks (duplicate IDs, burst/arrival
//!   ranges, missing priorities, quantum)
//! - **`workload`**: Random process batch generation for policy comparison
//!
//! # Usage
//!
//! ```
//! use cpu_dispatch::models::Process;
//! use cpu_dispatch::policies::Policy;
//!
//! let processes = vec![
//!     Process::new("P1", 0, 5),
//!     Process::new("P2", 1, 3),
//! ];
//! let outcome = Policy::Fcfs.simulate(&processes).unwrap();
//! assert_eq!(outcome.timeline.makespan(), 8);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod metrics;
pub mod models;
pub mod policies;
pub mod validation;
pub mod workload;
