//! First-Come-First-Served.
//!
//! Runs processes strictly in input order. Arrival times only affect the
//! timing figures, never the order.
//!
//! # Complexity
//! O(n).

use log::debug;

use super::Scheduler;
use crate::dispatching::Dispatch;
use crate::models::{Discipline, Process, RunInterval};

/// First-Come-First-Served scheduler.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::{Fcfs, Scheduler};
///
/// let processes = vec![
///     Process::new(1, 0, 24),
///     Process::new(2, 0, 3),
///     Process::new(3, 0, 3),
/// ];
/// let report = Fcfs.schedule(&processes, "First-come, first-serve").unwrap();
/// assert_eq!(report.run_order(), vec![1, 2, 3]);
/// assert!((report.averages.unwrap().wait - 17.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Scheduler for Fcfs {
    fn discipline(&self) -> Discipline {
        Discipline::Fcfs
    }

    fn dispatch(&self, processes: Vec<Process>) -> Dispatch {
        let mut clock: i64 = 0;
        let mut slices = Vec::with_capacity(processes.len());
        let mut completions = Vec::with_capacity(processes.len());

        for p in &processes {
            clock = clock.max(p.arrival);
            debug!("FCFS: t={clock} run process {} for {}", p.id, p.burst);
            slices.push(RunInterval::new(p.id, clock, clock + p.burst));
            clock += p.burst;
            completions.push(clock);
        }

        Dispatch {
            order: processes,
            completions,
            slices,
        }
    }
}
