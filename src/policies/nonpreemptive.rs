//! Shared engine for the non-preemptive selection policies.
//!
//! SJF and Priority have the same control structure and differ only in
//! the selection key: at each decision point, pick the ready process
//! with the minimum key and run it to completion. Lower key = scheduled
//! first, the same convention dispatching-rule literature uses.
//!
//! # Tie-breaking
//!
//! The ready scan walks the batch in input order and replaces the
//! candidate only on a strictly smaller key, so the first process
//! supplied wins ties. This is observable behavior, not an
//! implementation accident.

use crate::models::{Process, Segment, Timeline};

/// Simulates the batch under shortest-job-first (minimum burst).
pub(super) fn shortest_job_first(processes: &[Process]) -> Timeline {
    run(processes, |p| p.burst)
}

/// Simulates the batch under priority selection (minimum priority value).
pub(super) fn highest_priority(processes: &[Process]) -> Timeline {
    // Validation guarantees priorities are present; the fallback keeps
    // the key total without panicking.
    run(processes, |p| p.priority.map(i64::from).unwrap_or(i64::MAX))
}

/// The shared loop. Expects a validated batch.
///
/// The pending set is a done-flag array over the input slice, so the
/// tie-break order stays the input order no matter how many processes
/// have already finished.
fn run(processes: &[Process], key: impl Fn(&Process) -> i64) -> Timeline {
    let mut done = vec![false; processes.len()];
    let mut pending = processes.len();
    let mut timeline = Timeline::new();
    let mut clock: i64 = 0;

    while pending > 0 {
        // Ready set = pending processes that have arrived by now.
        let mut chosen: Option<usize> = None;
        for (i, p) in processes.iter().enumerate() {
            if done[i] || p.arrival > clock {
                continue;
            }
            match chosen {
                Some(c) if key(p) >= key(&processes[c]) => {}
                _ => chosen = Some(i),
            }
        }

        let Some(i) = chosen else {
            // Idle CPU: jump straight to the earliest pending arrival.
            if let Some(next_arrival) = processes
                .iter()
                .zip(&done)
                .filter(|(_, &d)| !d)
                .map(|(p, _)| p.arrival)
                .min()
            {
                clock = next_arrival;
            }
            continue;
        };

        let p = &processes[i];
        let start = clock;
        clock += p.burst;
        timeline.push(Segment::new(&p.id, start, clock));
        done[i] = true;
        pending -= 1;
    }

    timeline
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policies::Policy;

    #[test]
    fn test_sjf_prefers_shorter_burst() {
        // At t=0 only P1 is ready; by t=7 both P2 and P3 are, and the
        // shorter P3 overtakes P2.
        let processes = vec![
            Process::new("P1", 0, 7),
            Process::new("P2", 1, 5),
            Process::new("P3", 2, 3),
        ];
        let outcome = Policy::Sjf.simulate(&processes).unwrap();

        assert_eq!(
            outcome.timeline.segments,
            vec![
                Segment::new("P1", 0, 7),
                Segment::new("P3", 7, 10),
                Segment::new("P2", 10, 15),
            ]
        );
    }

    #[test]
    fn test_sjf_idle_until_first_arrival() {
        let processes = vec![Process::new("P1", 3, 2)];
        let outcome = Policy::Sjf.simulate(&processes).unwrap();

        assert_eq!(outcome.timeline.segments, vec![Segment::new("P1", 3, 5)]);
        assert_eq!(outcome.metrics.waiting_time["P1"], 0);
        assert_eq!(outcome.metrics.turnaround_time["P1"], 2);
    }

    #[test]
    fn test_sjf_equal_bursts_keep_input_order() {
        let processes = vec![
            Process::new("B", 0, 4),
            Process::new("A", 0, 4),
        ];
        let outcome = Policy::Sjf.simulate(&processes).unwrap();

        let ids: Vec<&str> = outcome
            .timeline
            .segments
            .iter()
            .map(|s| s.process_id.as_str())
            .collect();
        assert_eq!(ids, vec!["B", "A"]);
    }

    #[test]
    fn test_sjf_idle_gap_between_batches() {
        // P1 finishes at 2; nothing arrives until 10.
        let processes = vec![Process::new("P1", 0, 2), Process::new("P2", 10, 1)];
        let outcome = Policy::Sjf.simulate(&processes).unwrap();

        assert_eq!(
            outcome.timeline.segments,
            vec![Segment::new("P1", 0, 2), Segment::new("P2", 10, 11)]
        );
    }

    #[test]
    fn test_priority_selects_lowest_value() {
        let processes = vec![
            Process::new("P1", 0, 4).with_priority(3),
            Process::new("P2", 0, 4).with_priority(1),
            Process::new("P3", 0, 4).with_priority(2),
        ];
        let outcome = Policy::Priority.simulate(&processes).unwrap();

        let ids: Vec<&str> = outcome
            .timeline
            .segments
            .iter()
            .map(|s| s.process_id.as_str())
            .collect();
        assert_eq!(ids, vec!["P2", "P3", "P1"]);
    }

    #[test]
    fn test_priority_equal_values_keep_input_order() {
        let processes = vec![
            Process::new("P1", 0, 2).with_priority(1),
            Process::new("P2", 0, 2).with_priority(1),
        ];
        let outcome = Policy::Priority.simulate(&processes).unwrap();

        let ids: Vec<&str> = outcome
            .timeline
            .segments
            .iter()
            .map(|s| s.process_id.as_str())
            .collect();
        assert_eq!(ids, vec!["P1", "P2"]);
    }

    #[test]
    fn test_priority_ignores_later_urgent_arrival() {
        // Non-preemptive: P2's urgency cannot interrupt P1 once started.
        let processes = vec![
            Process::new("P1", 0, 6).with_priority(5),
            Process::new("P2", 1, 2).with_priority(0),
        ];
        let outcome = Policy::Priority.simulate(&processes).unwrap();

        assert_eq!(
            outcome.timeline.segments,
            vec![Segment::new("P1", 0, 6), Segment::new("P2", 6, 8)]
        );
    }
}
