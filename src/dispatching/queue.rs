//! Per-run scheduling state.
//!
//! Three disjoint partitions of the working set: *not-arrived* (sorted by
//! arrival), *ready* and *finished*. Entries only ever move forward.

use std::collections::VecDeque;

use log::trace;

use crate::models::Process;

/// A ready process together with its per-run working state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadyEntry {
    /// The original record.
    pub process: Process,
    /// CPU time still owed to the process.
    pub remaining: i64,
    /// Priority after aging; starts at `process.priority`.
    pub effective_priority: i64,
    /// Admission sequence number (0 for the first admitted process).
    pub admitted: usize,
}

impl ReadyEntry {
    /// Creates an entry with a full remaining burst.
    pub fn new(process: Process, admitted: usize) -> Self {
        Self {
            process,
            remaining: process.burst,
            effective_priority: process.priority,
            admitted,
        }
    }
}

/// The not-arrived / ready / finished partitions of one run.
#[derive(Debug, Clone, Default)]
pub struct AdmissionQueue {
    not_arrived: VecDeque<Process>,
    ready: VecDeque<ReadyEntry>,
    finished: Vec<Process>,
    completions: Vec<i64>,
    admitted: usize,
}

impl AdmissionQueue {
    /// Creates the partitions for an owned working copy.
    ///
    /// Processes are ordered by arrival; the sort is stable so input order
    /// decides among equal arrivals.
    pub fn new(mut processes: Vec<Process>) -> Self {
        processes.sort_by_key(|p| p.arrival);
        Self {
            not_arrived: processes.into(),
            ready: VecDeque::new(),
            finished: Vec::new(),
            completions: Vec::new(),
            admitted: 0,
        }
    }

    /// Moves every process with `arrival <= clock` to the tail of ready.
    ///
    /// Returns the number of processes admitted.
    pub fn admit(&mut self, clock: i64) -> usize {
        let mut count = 0;
        while let Some(p) = self.not_arrived.front() {
            if !p.has_arrived(clock) {
                break;
            }
            if let Some(p) = self.not_arrived.pop_front() {
                trace!("t={clock} admit process {} (arrival {})", p.id, p.arrival);
                self.ready.push_back(ReadyEntry::new(p, self.admitted));
                self.admitted += 1;
                count += 1;
            }
        }
        count
    }

    /// Arrival tick of the next process not yet admitted.
    pub fn next_arrival(&self) -> Option<i64> {
        self.not_arrived.front().map(|p| p.arrival)
    }

    /// Whether every process has finished.
    pub fn is_drained(&self) -> bool {
        self.not_arrived.is_empty() && self.ready.is_empty()
    }

    /// Whether nothing is ready to run.
    pub fn ready_is_empty(&self) -> bool {
        self.ready.is_empty()
    }

    /// Ready entries in queue order.
    pub fn ready_mut(&mut self) -> &mut [ReadyEntry] {
        self.ready.make_contiguous()
    }

    /// Removes the ready entry at `index`.
    pub fn take(&mut self, index: usize) -> Option<ReadyEntry> {
        self.ready.remove(index)
    }

    /// Puts an unfinished entry back at the tail of ready.
    pub fn requeue(&mut self, entry: ReadyEntry) {
        self.ready.push_back(entry);
    }

    /// Records that an entry finished at `clock`.
    pub fn finish(&mut self, entry: ReadyEntry, clock: i64) {
        self.finished.push(entry.process);
        self.completions.push(clock);
    }

    /// Number of finished processes.
    pub fn finished_len(&self) -> usize {
        self.finished.len()
    }

    /// Consumes the queue, returning the finish order and finish ticks.
    pub fn into_finished(self) -> (Vec<Process>, Vec<i64>) {
        (self.finished, self.completions)
    }
}
