//! Built-in selection policies.
//!
//! # Categories
//!
//! - **Non-preemptive**: SJF (smallest burst), PRIORITY (smallest aged priority)
//! - **Time-sliced**: RR (FIFO rotation with a quantum)
//!
//! # Tie-breaking
//! Every policy returns the first qualifying entry in queue order, so
//! admission order decides ties.
//!
//! # References
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

use super::{ReadyEntry, SelectionPolicy};

/// Priority values at or below this are not aged further.
pub const AGING_FLOOR: i64 = 1;

/// Default round-robin quantum (ticks per dispatch).
pub const DEFAULT_QUANTUM: i64 = 1;

// ======================== Non-preemptive rules ========================

/// Shortest burst first.
///
/// Runs the ready process with the smallest total burst to completion.
///
/// # Reference
/// Optimal for mean waiting time among non-preemptive single-server orders
/// when all jobs are available together.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionPolicy for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn select(&self, ready: &[ReadyEntry]) -> Option<usize> {
        ready
            .iter()
            .enumerate()
            .min_by_key(|(_, e)| e.process.burst)
            .map(|(i, _)| i)
    }
}

/// Smallest priority value first, with aging.
///
/// After each dispatch every process left waiting has its effective
/// priority lowered by one, never below [`AGING_FLOOR`]. Values already at
/// or below the floor are left alone.
#[derive(Debug, Clone, Copy)]
pub struct AgedPriority;

impl AgedPriority {
    /// Effective priority after one aging step.
    #[inline]
    pub fn age(priority: i64) -> i64 {
        if priority > AGING_FLOOR {
            priority - 1
        } else {
            priority
        }
    }
}

impl SelectionPolicy for AgedPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn select(&self, ready: &[ReadyEntry]) -> Option<usize> {
        ready
            .iter()
            .enumerate()
            .min_by_key(|(_, e)| e.effective_priority)
            .map(|(i, _)| i)
    }

    fn after_dispatch(&self, ready: &mut [ReadyEntry]) {
        for entry in ready.iter_mut() {
            entry.effective_priority = Self::age(entry.effective_priority);
        }
    }
}

// ======================== Time-sliced rules ========================

/// FIFO rotation with a fixed quantum.
///
/// Always dispatches the head of the ready queue for at most `quantum`
/// ticks; unfinished processes go back to the tail.
#[derive(Debug, Clone, Copy)]
pub struct Rotation {
    quantum: i64,
}

impl Rotation {
    /// Creates a rotation; quanta below one tick are raised to one.
    pub fn new(quantum: i64) -> Self {
        Self {
            quantum: quantum.max(1),
        }
    }

    /// Ticks granted per dispatch.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::new(DEFAULT_QUANTUM)
    }
}

impl SelectionPolicy for Rotation {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn select(&self, ready: &[ReadyEntry]) -> Option<usize> {
        if ready.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    fn time_slice(&self, entry: &ReadyEntry) -> i64 {
        self.quantum.min(entry.remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;

    fn entries(specs: &[(i64, i64, i64)]) -> Vec<ReadyEntry> {
        specs
            .iter()
            .enumerate()
            .map(|(i, &(id, burst, priority))| {
                ReadyEntry::new(Process::new(id, 0, burst).with_priority(priority), i)
            })
            .collect()
    }

    #[test]
    fn test_shortest_burst() {
        let ready = entries(&[(1, 8, 0), (2, 3, 0), (3, 5, 0)]);
        assert_eq!(ShortestBurst.select(&ready), Some(1));
    }

    #[test]
    fn test_shortest_burst_tie_keeps_admission_order() {
        let ready = entries(&[(1, 8, 0), (2, 3, 0), (3, 3, 0)]);
        assert_eq!(ShortestBurst.select(&ready), Some(1));
    }

    #[test]
    fn test_aged_priority_select() {
        let ready = entries(&[(1, 1, 4), (2, 1, 2), (3, 1, 2)]);
        assert_eq!(AgedPriority.select(&ready), Some(1));
    }

    #[test]
    fn test_aging_floor() {
        let mut ready = entries(&[(1, 1, 5), (2, 1, 2), (3, 1, 1), (4, 1, 0), (5, 1, -3)]);
        let before: Vec<i64> = ready.iter().map(|e| e.effective_priority).collect();
        AgedPriority.after_dispatch(&mut ready);
        let after: Vec<i64> = ready.iter().map(|e| e.effective_priority).collect();
        assert_eq!(after, vec![4, 1, 1, 0, -3]);

        for (b, a) in before.iter().zip(&after) {
            assert!(b - a <= 1);
            assert!(*a >= AGING_FLOOR || a == b);
        }
        // Original record untouched.
        assert_eq!(ready[0].process.priority, 5);
    }

    #[test]
    fn test_rotation_takes_head() {
        let ready = entries(&[(7, 4, 0), (8, 1, 0)]);
        let rr = Rotation::default();
        assert_eq!(rr.select(&ready), Some(0));
        assert_eq!(rr.time_slice(&ready[0]), 1);
        assert_eq!(rr.select(&[]), None);
    }

    #[test]
    fn test_rotation_quantum_clamped() {
        assert_eq!(Rotation::new(0).quantum(), 1);
        let ready = entries(&[(1, 2, 0)]);
        assert_eq!(Rotation::new(5).time_slice(&ready[0]), 2);
    }

    #[test]
    fn test_empty_ready() {
        assert_eq!(ShortestBurst.select(&[]), None);
        assert_eq!(AgedPriority.select(&[]), None);
    }
}
