//! Seeded random workload generation.
//!
//! Produces reproducible process batches for demos, benchmarking the
//! disciplines against each other, and property tests. The same parameters
//! and seed always yield the same batch.

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Parameters for a generated batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadSpec {
    /// Number of processes.
    pub count: usize,
    /// RNG seed.
    pub seed: u64,
    /// Latest possible arrival tick (inclusive).
    pub max_arrival: i64,
    /// Shortest possible burst (clamped to at least 1).
    pub min_burst: i64,
    /// Longest possible burst (inclusive).
    pub max_burst: i64,
    /// Largest priority value; priorities are drawn from `1..=max_priority`.
    pub max_priority: i64,
}

impl Default for WorkloadSpec {
    fn default() -> Self {
        Self {
            count: 10,
            seed: 0,
            max_arrival: 20,
            min_burst: 1,
            max_burst: 10,
            max_priority: 5,
        }
    }
}

impl WorkloadSpec {
    /// A spec for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the latest arrival tick.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the longest burst.
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst;
        self
    }

    /// Sets the largest priority value.
    pub fn with_max_priority(mut self, max_priority: i64) -> Self {
        self.max_priority = max_priority;
        self
    }
}

/// Generates a valid batch, sorted by arrival, with ids `1..=count`.
pub fn generate(spec: &WorkloadSpec) -> Vec<Process> {
    let mut rng = StdRng::seed_from_u64(spec.seed);
    let max_arrival = spec.max_arrival.max(0);
    let min_burst = spec.min_burst.max(1);
    let max_burst = spec.max_burst.max(min_burst);
    let max_priority = spec.max_priority.max(1);

    let mut processes: Vec<Process> = (0..spec.count)
        .map(|_| {
            let arrival = rng.random_range(0..=max_arrival);
            let burst = rng.random_range(min_burst..=max_burst);
            let priority = rng.random_range(1..=max_priority);
            Process::new(0, arrival, burst).with_priority(priority)
        })
        .collect();

    processes.sort_by_key(|p| p.arrival);
    for (i, p) in processes.iter_mut().enumerate() {
        p.id = i as i64 + 1;
    }

    processes
}
