//! Random workload generation.
//!
//! Produces process batches for side-by-side policy comparison and
//! property testing. Generated batches always satisfy the shared
//! validation checks: IDs are unique (`P1`..`Pn`), bursts are ≥ 1, and
//! arrivals are ≥ 0.

use rand::Rng;

use crate::models::Process;

/// Parameters for random batch generation.
///
/// # Example
///
/// ```
/// use cpu_dispatch::workload::WorkloadSpec;
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let batch = WorkloadSpec::new(5).with_priority_levels(3).generate(&mut rng);
/// assert_eq!(batch.len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadSpec {
    /// Number of processes to generate.
    pub process_count: usize,
    /// Largest possible arrival time (inclusive).
    pub max_arrival: i64,
    /// Largest possible burst time (inclusive, minimum draw is 1).
    pub max_burst: i64,
    /// Number of priority levels (drawn from `0..levels`). `None` =
    /// generate processes without priorities.
    pub priority_levels: Option<i32>,
}

impl WorkloadSpec {
    /// Creates a spec for the given batch size with default ranges.
    pub fn new(process_count: usize) -> Self {
        Self {
            process_count,
            max_arrival: 20,
            max_burst: 10,
            priority_levels: None,
        }
    }

    /// Sets the largest possible arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the largest possible burst time.
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst;
        self
    }

    /// Draws priorities from `0..levels` for every process.
    pub fn with_priority_levels(mut self, levels: i32) -> Self {
        self.priority_levels = Some(levels);
        self
    }

    /// Generates a batch in input order `P1..Pn`.
    pub fn generate(&self, rng: &mut impl Rng) -> Vec<Process> {
        (1..=self.process_count)
            .map(|n| {
                let arrival = rng.random_range(0..=self.max_arrival);
                let burst = rng.random_range(1..=self.max_burst);
                let mut p = Process::new(format!("P{n}"), arrival, burst);
                if let Some(levels) = self.priority_levels {
                    p = p.with_priority(rng.random_range(0..levels));
                }
                p
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_processes;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_batch_is_valid() {
        let mut rng = SmallRng::seed_from_u64(42);
        let batch = WorkloadSpec::new(20).generate(&mut rng);

        assert_eq!(batch.len(), 20);
        assert!(validate_processes(&batch).is_ok());
        assert!(batch.iter().all(|p| p.burst >= 1 && p.arrival >= 0));
        assert!(batch.iter().all(|p| !p.has_priority()));
    }

    #[test]
    fn test_priority_levels() {
        let mut rng = SmallRng::seed_from_u64(7);
        let batch = WorkloadSpec::new(15)
            .with_priority_levels(3)
            .generate(&mut rng);

        for p in &batch {
            let priority = p.priority.unwrap();
            assert!((0..3).contains(&priority));
        }
    }

    #[test]
    fn test_range_bounds() {
        let mut rng = SmallRng::seed_from_u64(0);
        let batch = WorkloadSpec::new(30)
            .with_max_arrival(5)
            .with_max_burst(2)
            .generate(&mut rng);

        assert!(batch.iter().all(|p| (0..=5).contains(&p.arrival)));
        assert!(batch.iter().all(|p| (1..=2).contains(&p.burst)));
    }

    #[test]
    fn test_same_seed_same_batch() {
        let spec = WorkloadSpec::new(10).with_priority_levels(4);
        let a = spec.generate(&mut SmallRng::seed_from_u64(99));
        let b = spec.generate(&mut SmallRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
