//! Priority scheduling with aging (non-preemptive).
//!
//! # Algorithm
//! Same admission simulation as SJF, but the ready process with the
//! smallest *effective* priority runs next (lower value = higher
//! precedence). After every dispatch each process still waiting is aged:
//! its effective priority drops by one, stopping at 1.
//!
//! Aging only touches the per-run working copy; reports show the priority
//! from the input.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.3

use super::Scheduler;
use crate::dispatching::{rules, AdmissionEngine, Dispatch};
use crate::models::{Discipline, Process};

/// Priority scheduler with aging.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityAging;

impl Scheduler for PriorityAging {
    fn discipline(&self) -> Discipline {
        Discipline::Priority
    }

    fn dispatch(&self, processes: Vec<Process>) -> Dispatch {
        AdmissionEngine::new(&rules::AgedPriority).simulate(processes)
    }
}
