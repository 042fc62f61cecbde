//! Process record model.
//!
//! A process is the unit of work the simulator dispatches: it becomes
//! eligible at its arrival time and needs `burst` units of CPU time.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Records are read-only inputs. Schedulers take their own working copy
/// before simulating, so aging or remaining-burst bookkeeping never touches
/// the caller's slice.
///
/// # Time Representation
/// All times are abstract simulation ticks relative to t=0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier (informational; not required to be unique).
    pub id: i64,
    /// Tick at which the process becomes ready.
    pub arrival: i64,
    /// Total CPU time required.
    pub burst: i64,
    /// Scheduling priority (lower value = higher precedence).
    #[serde(default)]
    pub priority: i64,
}

impl Process {
    /// Creates a process with priority 0.
    pub fn new(id: i64, arrival: i64, burst: i64) -> Self {
        Self {
            id,
            arrival,
            burst,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival <= time
    }
}
