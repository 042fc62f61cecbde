//! Schedule report model.
//!
//! A report is the result of one scheduler invocation: the per-process
//! timing rows in run order, the Gantt chart as run intervals, and the
//! aggregate averages.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use super::Discipline;

/// A contiguous span during which one process holds the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunInterval {
    /// Process occupying the CPU.
    pub process_id: i64,
    /// First tick of the interval.
    pub start: i64,
    /// Tick at which the interval ends (exclusive).
    pub stop: i64,
}

impl RunInterval {
    /// Creates a new interval.
    pub fn new(process_id: i64, start: i64, stop: i64) -> Self {
        Self {
            process_id,
            start,
            stop,
        }
    }

    /// Length of the interval in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.stop - self.start
    }
}

/// Timing figures for a single process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Process identifier.
    pub id: i64,
    /// Priority as given in the input (aging is not reflected here).
    pub priority: i64,
    /// CPU time required.
    pub burst: i64,
    /// Arrival tick.
    pub arrival: i64,
    /// Ticks spent ready but not running.
    pub wait: i64,
    /// Ticks from arrival to completion.
    pub turnaround: i64,
    /// Completion (exit) tick.
    pub completion: i64,
}

/// Aggregate metrics over all rows of a report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Averages {
    /// Mean wait time.
    pub wait: f64,
    /// Mean turnaround time.
    pub turnaround: f64,
    /// Processes completed per tick: `n / last_completion`.
    pub throughput: f64,
}

impl Averages {
    /// Computes averages from rows in run order.
    ///
    /// Returns `None` for an empty slice: there is no meaningful mean or
    /// throughput without at least one completed process.
    pub fn from_rows(rows: &[ScheduleRow]) -> Option<Self> {
        let last = rows.last()?;
        let count = rows.len() as f64;
        let total_wait: f64 = rows.iter().map(|r| r.wait as f64).sum();
        let total_turnaround: f64 = rows.iter().map(|r| r.turnaround as f64).sum();

        let throughput = if last.completion > 0 {
            count / last.completion as f64
        } else {
            0.0
        };

        Some(Self {
            wait: total_wait / count,
            turnaround: total_turnaround / count,
            throughput,
        })
    }
}

/// The output of one scheduler run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleReport {
    /// Caller-supplied label, passed through for display.
    pub title: String,
    /// Discipline that produced this report.
    pub discipline: Discipline,
    /// Per-process rows in run order.
    pub rows: Vec<ScheduleRow>,
    /// Gantt chart entries in the order produced.
    pub intervals: Vec<RunInterval>,
    /// Aggregate metrics; `None` when there were no processes.
    pub averages: Option<Averages>,
}

impl ScheduleReport {
    /// Creates a report with no rows.
    pub fn empty(title: impl Into<String>, discipline: Discipline) -> Self {
        Self {
            title: title.into(),
            discipline,
            rows: Vec::new(),
            intervals: Vec::new(),
            averages: None,
        }
    }

    /// Whether the report carries no data.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Process ids in the order they completed.
    pub fn run_order(&self) -> Vec<i64> {
        self.rows.iter().map(|r| r.id).collect()
    }

    /// Finds the row for a process.
    pub fn row_for(&self, process_id: i64) -> Option<&ScheduleRow> {
        self.rows.iter().find(|r| r.id == process_id)
    }

    /// Returns all intervals for a given process.
    pub fn intervals_for(&self, process_id: i64) -> Vec<&RunInterval> {
        self.intervals
            .iter()
            .filter(|i| i.process_id == process_id)
            .collect()
    }

    /// Latest completion tick (0 for an empty report).
    pub fn makespan(&self) -> i64 {
        self.rows.iter().map(|r| r.completion).max().unwrap_or(0)
    }

    /// Sum of wait times, widened so large batches cannot overflow.
    pub fn total_wait(&self) -> i128 {
        self.rows.iter().map(|r| i128::from(r.wait)).sum()
    }

    /// Sum of turnaround times, widened like [`ScheduleReport::total_wait`].
    pub fn total_turnaround(&self) -> i128 {
        self.rows.iter().map(|r| i128::from(r.turnaround)).sum()
    }
}
