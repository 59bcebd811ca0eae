//! First-come-first-served.
//!
//! Processes run once, to completion, in arrival order. The only state
//! is the simulated clock, which jumps over idle gaps.

use crate::models::{Process, Segment, Timeline};

/// Simulates the batch under FCFS.
///
/// Order is a stable sort of indices by arrival, so processes arriving
/// at the same instant keep their input order. Expects a validated batch.
pub(super) fn simulate(processes: &[Process]) -> Timeline {
    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by_key(|&i| processes[i].arrival);

    let mut timeline = Timeline::new();
    let mut clock: i64 = 0;

    for &i in &order {
        let p = &processes[i];
        if clock < p.arrival {
            clock = p.arrival;
        }
        let start = clock;
        clock += p.burst;
        timeline.push(Segment::new(&p.id, start, clock));
    }

    timeline
}
