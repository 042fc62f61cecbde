//! Round-Robin.
//!
//! # Algorithm
//! Ready processes form a FIFO rotation. The head runs for one quantum (or
//! its remaining burst, if smaller), then finishes or moves to the tail.
//! Processes that arrive during the slice join the tail after it.
//!
//! # Timing figures
//! With cumulative accounting the rows are computed over the finish order as
//! if every process ran in one piece. A process that is preempted repeatedly
//! actually waits longer than that; use exact accounting for figures derived
//! from the simulated slices.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.4

use super::Scheduler;
use crate::dispatching::{rules, AdmissionEngine, Dispatch};
use crate::models::{Discipline, Process};

/// Round-Robin scheduler.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::{RoundRobin, Scheduler, WaitAccounting};
///
/// let processes = vec![Process::new(1, 0, 3), Process::new(2, 0, 1)];
/// let report = RoundRobin::new()
///     .schedule_with(&processes, "Round-robin", WaitAccounting::Exact)
///     .unwrap();
/// assert_eq!(report.run_order(), vec![2, 1]);
/// assert_eq!(report.row_for(1).unwrap().wait, 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobin {
    rotation: rules::Rotation,
}

impl RoundRobin {
    /// Round-robin with a one-tick quantum.
    pub fn new() -> Self {
        Self::default()
    }

    /// Round-robin with a custom quantum (at least one tick).
    pub fn with_quantum(quantum: i64) -> Self {
        Self {
            rotation: rules::Rotation::new(quantum),
        }
    }

    /// Ticks granted per turn.
    pub fn quantum(&self) -> i64 {
        self.rotation.quantum()
    }
}

impl Scheduler for RoundRobin {
    fn discipline(&self) -> Discipline {
        Discipline::RoundRobin
    }

    fn dispatch(&self, processes: Vec<Process>) -> Dispatch {
        AdmissionEngine::new(&self.rotation).simulate(processes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RunInterval;
    use crate::scheduler::WaitAccounting;
    use crate::workload::{generate, WorkloadSpec};

    fn textbook() -> Vec<Process> {
        vec![
            Process::new(1, 0, 24),
            Process::new(2, 0, 3),
            Process::new(3, 0, 3),
        ]
    }

    #[test]
    fn test_rr_rotation_order() {
        let dispatch = RoundRobin::new().dispatch(textbook());
        let first: Vec<i64> = dispatch.slices[..6].iter().map(|s| s.process_id).collect();
        assert_eq!(first, vec![1, 2, 3, 1, 2, 3]);
        assert_eq!(dispatch.finish_order(), vec![2, 3, 1]);
        assert_eq!(dispatch.completions, vec![8, 9, 30]);
    }

    #[test]
    fn test_rr_cumulative_accounting() {
        let report = RoundRobin::new().schedule(&textbook(), "rr").unwrap();
        let waits: Vec<i64> = report.rows.iter().map(|r| r.wait).collect();
        assert_eq!(waits, vec![0, 3, 6]);
    }

    #[test]
    fn test_rr_exact_accounting() {
        let report = RoundRobin::new()
            .schedule_with(&textbook(), "rr", WaitAccounting::Exact)
            .unwrap();
        let waits: Vec<i64> = report.rows.iter().map(|r| r.wait).collect();
        assert_eq!(waits, vec![5, 6, 6]);
        // Process 1 runs alone from t=9 to t=30.
        assert_eq!(report.intervals.last(), Some(&RunInterval::new(1, 9, 30)));
    }

    #[test]
    fn test_rr_new_arrivals_join_after_requeue() {
        // t=0: [1]; run 1 → t=1, requeue 1, admit 2 → [1, 2]
        let dispatch =
            RoundRobin::new().dispatch(vec![Process::new(1, 0, 2), Process::new(2, 1, 1)]);
        let ids: Vec<i64> = dispatch.slices.iter().map(|s| s.process_id).collect();
        assert_eq!(ids, vec![1, 1, 2]);
    }

    #[test]
    fn test_rr_dispatched_time_equals_burst() {
        let processes = generate(&WorkloadSpec::new(20).with_seed(11).with_max_burst(9));
        let dispatch = RoundRobin::new().dispatch(processes.clone());
        assert_eq!(dispatch.order.len(), processes.len());
        for p in &processes {
            assert_eq!(dispatch.dispatched_time(p.id), p.burst);
            assert_eq!(dispatch.order.iter().filter(|q| q.id == p.id).count(), 1);
        }
        assert!(dispatch.slices.iter().all(|s| s.duration() == 1));
    }

    #[test]
    fn test_rr_custom_quantum() {
        let rr = RoundRobin::with_quantum(4);
        assert_eq!(rr.quantum(), 4);
        let dispatch = rr.dispatch(textbook());
        assert_eq!(dispatch.slices[0], RunInterval::new(1, 0, 4));
        assert_eq!(dispatch.slices[1], RunInterval::new(2, 4, 7));
        assert_eq!(dispatch.finish_order(), vec![2, 3, 1]);
    }
}
