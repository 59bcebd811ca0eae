//! Round-robin with a fixed quantum.
//!
//! The only preemptive policy: the head of a FIFO ready queue runs for
//! at most one quantum, then yields. A process may therefore own several
//! timeline segments; only its last segment marks completion.
//!
//! # Queue discipline
//!
//! Per iteration, in this order:
//! 1. admit every process that has arrived by the current clock;
//! 2. if the queue is empty, jump the clock to the next arrival;
//! 3. run the queue head for `min(quantum, remaining)`;
//! 4. admit processes that arrived during that slice;
//! 5. requeue the head if it still has burst left, else retire it.
//!
//! Step 4 before step 5 is the fairness contract: a process that arrived
//! while the slice ran queues ahead of the process that just yielded.
//! Every downstream metric depends on this interleaving.

use std::collections::VecDeque;

use crate::models::{Process, Segment, Timeline};

/// Simulates the batch under round-robin. Expects a validated batch and
/// a positive quantum.
pub(super) fn simulate(processes: &[Process], quantum: i64) -> Timeline {
    // Admission order: stable sort keeps input order on equal arrivals.
    let mut arrival_order: Vec<usize> = (0..processes.len()).collect();
    arrival_order.sort_by_key(|&i| processes[i].arrival);

    let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst).collect();
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut cursor = 0;
    let mut completed = 0;
    let mut clock: i64 = 0;
    let mut timeline = Timeline::new();

    while completed < processes.len() {
        while cursor < arrival_order.len() && processes[arrival_order[cursor]].arrival <= clock {
            queue.push_back(arrival_order[cursor]);
            cursor += 1;
        }

        let Some(i) = queue.pop_front() else {
            if cursor < arrival_order.len() {
                clock = processes[arrival_order[cursor]].arrival;
                continue;
            }
            break;
        };

        let exec = quantum.min(remaining[i]);
        let start = clock;
        clock += exec;
        remaining[i] -= exec;
        timeline.push(Segment::new(&processes[i].id, start, clock));

        // Arrivals during the slice go ahead of the requeued process.
        while cursor < arrival_order.len() && processes[arrival_order[cursor]].arrival <= clock {
            queue.push_back(arrival_order[cursor]);
            cursor += 1;
        }

        if remaining[i] > 0 {
            queue.push_back(i);
        } else {
            completed += 1;
        }
    }

    timeline
}
