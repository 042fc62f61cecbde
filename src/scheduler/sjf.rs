//! Shortest-Job-First (non-preemptive).
//!
//! # Algorithm
//! Admit everything that has arrived by the current tick, run the ready
//! process with the smallest burst to completion, advance the clock by its
//! burst, repeat. Ties go to the process admitted first.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.2

use super::Scheduler;
use crate::dispatching::{rules, AdmissionEngine, Dispatch};
use crate::models::{Discipline, Process};

/// Shortest-Job-First scheduler.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::{Scheduler, Sjf};
///
/// let processes = vec![
///     Process::new(1, 0, 24),
///     Process::new(2, 0, 3),
///     Process::new(3, 0, 3),
/// ];
/// let report = Sjf.schedule(&processes, "Shortest-job-first").unwrap();
/// assert_eq!(report.run_order(), vec![2, 3, 1]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl Scheduler for Sjf {
    fn discipline(&self) -> Discipline {
        Discipline::Sjf
    }

    fn dispatch(&self, processes: Vec<Process>) -> Dispatch {
        AdmissionEngine::new(&rules::ShortestBurst).simulate(processes)
    }
}
