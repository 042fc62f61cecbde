//! Admission simulation and selection policies.
//!
//! SJF, priority and round-robin all share one simulation: processes move
//! from *not-arrived* to *ready* as the clock passes their arrival, a
//! [`SelectionPolicy`] picks the next ready process, and the process either
//! finishes or goes back to the tail of the ready queue. Only the policy
//! differs between those disciplines.
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::dispatching::{rules, AdmissionEngine};
//! use cpu_schedule::models::Process;
//!
//! let engine = AdmissionEngine::new(&rules::ShortestBurst);
//! let dispatch = engine.simulate(vec![
//!     Process::new(1, 0, 24),
//!     Process::new(2, 0, 3),
//! ]);
//! assert_eq!(dispatch.order[0].id, 2);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod engine;
mod queue;
pub mod rules;

pub use engine::AdmissionEngine;
pub use queue::{AdmissionQueue, ReadyEntry};

use crate::models::{Process, RunInterval};
use std::fmt::Debug;

/// Picks which ready process runs next and for how long.
///
/// # Selection Convention
/// `select` returns an index into the ready queue, which is always in
/// admission order (or rotation order, once processes have been requeued).
/// Policies break ties by taking the first candidate, so admission order is
/// the final tie-breaker for every discipline.
pub trait SelectionPolicy: Send + Sync + Debug {
    /// Policy name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Index of the ready entry to dispatch, or `None` if `ready` is empty.
    fn select(&self, ready: &[ReadyEntry]) -> Option<usize>;

    /// Ticks to run the selected entry for.
    ///
    /// Defaults to the whole remaining burst (non-preemptive). The engine
    /// never runs an entry past its remaining burst.
    fn time_slice(&self, entry: &ReadyEntry) -> i64 {
        entry.remaining
    }

    /// Hook applied to the entries still waiting after each dispatch.
    fn after_dispatch(&self, _ready: &mut [ReadyEntry]) {}
}

/// Outcome of a simulation: who finished when, and every CPU slice handed out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dispatch {
    /// Processes in the order they finished.
    pub order: Vec<Process>,
    /// Simulated finish tick of each entry in `order`.
    pub completions: Vec<i64>,
    /// Every slice dispatched, in dispatch order.
    pub slices: Vec<RunInterval>,
}

impl Dispatch {
    /// Total ticks dispatched to a process (by id).
    pub fn dispatched_time(&self, process_id: i64) -> i64 {
        self.slices
            .iter()
            .filter(|s| s.process_id == process_id)
            .map(|s| s.duration())
            .sum()
    }

    /// Process ids in finish order.
    pub fn finish_order(&self) -> Vec<i64> {
        self.order.iter().map(|p| p.id).collect()
    }
}
