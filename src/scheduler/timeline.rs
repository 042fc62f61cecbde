//! Timeline accumulation: from a run order to timing rows and a Gantt chart.
//!
//! # Accounting
//!
//! | Mode | wait | completion | Gantt |
//! |------|------|------------|-------|
//! | Cumulative | max(0, Σ earlier − arrival) | arrival + wait + burst | one per process |
//! | Exact | completion − arrival − burst | end of last slice | simulated slices |
//!
//! Cumulative is the textbook formula shared by every discipline. It
//! treats the run order as if each process ran in one piece, so for
//! round-robin (and for batches with idle gaps) it is an approximation of
//! the simulated wait time. Exact uses the simulated slices instead.
//!
//! Cumulative intervals are not guaranteed to be disjoint. The service
//! counter ignores idle time, so after a gap a later process can start
//! inside an earlier one's interval: FCFS over `[(id 1, arrival 3, burst 5),
//! (id 2, arrival 0, burst 1)]` charts `[3, 8)` and `[5, 6)`. Exact intervals
//! never overlap.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::dispatching::Dispatch;
use crate::models::{Averages, Discipline, Process, RunInterval, ScheduleReport, ScheduleRow};

/// How wait and turnaround are derived from a dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaitAccounting {
    /// Cumulative service time minus arrival, over the run order.
    #[default]
    Cumulative,
    /// Completion minus arrival minus burst, from the simulated slices.
    Exact,
}

/// Builds reports from dispatch results.
#[derive(Debug, Clone, Copy, Default)]
pub struct Timeline {
    accounting: WaitAccounting,
}

impl Timeline {
    /// Creates a timeline with the given accounting mode.
    pub fn new(accounting: WaitAccounting) -> Self {
        Self { accounting }
    }

    /// Turns a dispatch into a finished report.
    pub fn build(
        &self,
        title: impl Into<String>,
        discipline: Discipline,
        dispatch: &Dispatch,
    ) -> ScheduleReport {
        let (rows, intervals) = match self.accounting {
            WaitAccounting::Cumulative => accumulate(&dispatch.order),
            WaitAccounting::Exact => (
                exact_rows(&dispatch.order, &dispatch.completions),
                merge_slices(&dispatch.slices),
            ),
        };
        let averages = Averages::from_rows(&rows);

        ScheduleReport {
            title: title.into(),
            discipline,
            rows,
            intervals,
            averages,
        }
    }
}

/// Walks a run order accumulating service time.
///
/// For each process: `wait = max(0, service − arrival)`,
/// `turnaround = burst + wait`, `completion = arrival + wait + burst`,
/// where `service` is the sum of bursts of the processes before it.
/// Each interval starts at `arrival + wait` and spans the burst.
pub fn accumulate(order: &[Process]) -> (Vec<ScheduleRow>, Vec<RunInterval>) {
    let mut service_time: i64 = 0;
    let mut rows = Vec::with_capacity(order.len());
    let mut intervals = Vec::with_capacity(order.len());

    for p in order {
        let wait = (service_time - p.arrival).max(0);
        let start = p.arrival + wait;
        let turnaround = p.burst + wait;
        let completion = p.burst + p.arrival + wait;

        rows.push(ScheduleRow {
            id: p.id,
            priority: p.priority,
            burst: p.burst,
            arrival: p.arrival,
            wait,
            turnaround,
            completion,
        });
        service_time += p.burst;
        intervals.push(RunInterval::new(p.id, start, completion));
    }

    (rows, intervals)
}

/// Rows from simulated finish ticks.
fn exact_rows(order: &[Process], completions: &[i64]) -> Vec<ScheduleRow> {
    order
        .iter()
        .zip(completions)
        .map(|(p, &completion)| {
            let turnaround = completion - p.arrival;
            ScheduleRow {
                id: p.id,
                priority: p.priority,
                burst: p.burst,
                arrival: p.arrival,
                wait: (turnaround - p.burst).max(0),
                turnaround,
                completion,
            }
        })
        .collect()
}

/// Joins back-to-back slices of the same process into one interval.
pub fn merge_slices(slices: &[RunInterval]) -> Vec<RunInterval> {
    let mut merged: Vec<RunInterval> = Vec::with_capacity(slices.len());
    for slice in slices {
        match merged.last_mut() {
            Some(last) if last.process_id == slice.process_id && last.stop == slice.start => {
                last.stop = slice.stop;
            }
            _ => merged.push(*slice),
        }
    }
    merged
}
