//! Discipline schedulers and timeline accumulation.
//!
//! Every discipline implements [`Scheduler`]: it decides a run order for an
//! owned copy of the batch, and the shared [`Timeline`] turns that order into
//! a [`ScheduleReport`].
//!
//! # Disciplines
//!
//! | Scheduler | Order | Preemptive |
//! |-----------|-------|------------|
//! | [`Fcfs`] | input order | no |
//! | [`Sjf`] | smallest burst among arrived | no |
//! | [`PriorityAging`] | smallest aged priority among arrived | no |
//! | [`RoundRobin`] | FIFO rotation, one quantum per turn | yes |
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod priority;
mod round_robin;
mod sjf;
mod timeline;

pub use fcfs::Fcfs;
pub use priority::PriorityAging;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;
pub use timeline::{accumulate, merge_slices, Timeline, WaitAccounting};

use log::{info, warn};
use std::fmt::Debug;

use crate::dispatching::Dispatch;
use crate::models::{Discipline, Process, ScheduleReport};
use crate::validation::{validate_processes, ValidationErrors};

/// A CPU scheduling discipline.
pub trait Scheduler: Send + Sync + Debug {
    /// Which discipline this is.
    fn discipline(&self) -> Discipline;

    /// Decides the run order for an owned working copy of the batch.
    ///
    /// The input is assumed valid; use [`Scheduler::schedule`] for the
    /// checked entry point.
    fn dispatch(&self, processes: Vec<Process>) -> Dispatch;

    /// Schedules a batch with cumulative wait accounting.
    fn schedule(
        &self,
        processes: &[Process],
        title: &str,
    ) -> Result<ScheduleReport, ValidationErrors> {
        self.schedule_with(processes, title, WaitAccounting::Cumulative)
    }

    /// Schedules a batch with the given wait accounting.
    ///
    /// Validates first; an invalid batch yields no report at all. The
    /// caller's slice is copied and never modified.
    fn schedule_with(
        &self,
        processes: &[Process],
        title: &str,
        accounting: WaitAccounting,
    ) -> Result<ScheduleReport, ValidationErrors> {
        validate_processes(processes)?;

        if processes.is_empty() {
            warn!("{}: empty process batch, no data to report", self.discipline());
            return Ok(ScheduleReport::empty(title, self.discipline()));
        }

        let dispatch = self.dispatch(processes.to_vec());
        let report = Timeline::new(accounting).build(title, self.discipline(), &dispatch);

        if let Some(avg) = &report.averages {
            info!(
                "{}: {} processes, avg wait {:.2}, avg turnaround {:.2}, throughput {:.2}/t",
                self.discipline(),
                report.rows.len(),
                avg.wait,
                avg.turnaround,
                avg.throughput
            );
        }

        Ok(report)
    }
}

/// Creates the scheduler for a discipline.
///
/// `quantum` is only used by round-robin.
pub fn scheduler_for(discipline: Discipline, quantum: i64) -> Box<dyn Scheduler> {
    match discipline {
        Discipline::Fcfs => Box::new(Fcfs),
        Discipline::Sjf => Box::new(Sjf),
        Discipline::Priority => Box::new(PriorityAging),
        Discipline::RoundRobin => Box::new(RoundRobin::with_quantum(quantum)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;
    use crate::workload::{generate, WorkloadSpec};

    fn textbook() -> Vec<Process> {
        vec![
            Process::new(1, 0, 24),
            Process::new(2, 0, 3),
            Process::new(3, 0, 3),
        ]
    }

    fn all_schedulers() -> Vec<Box<dyn Scheduler>> {
        Discipline::ALL
            .iter()
            .map(|&d| scheduler_for(d, 1))
            .collect()
    }

    #[test]
    fn test_invalid_input_produces_no_report() {
        let processes = vec![Process::new(1, 0, 5), Process::new(2, -2, 0)];
        for s in all_schedulers() {
            let errors = s.schedule(&processes, "bad").unwrap_err();
            assert!(errors.contains_kind(&ValidationErrorKind::NonPositiveBurst));
            assert!(errors.contains_kind(&ValidationErrorKind::NegativeArrival));
        }
    }

    #[test]
    fn test_empty_batch_is_no_data() {
        for s in all_schedulers() {
            let report = s.schedule(&[], "empty").unwrap();
            assert!(report.is_empty());
            assert!(report.intervals.is_empty());
            assert!(report.averages.is_none());
            assert_eq!(report.discipline, s.discipline());
        }
    }

    #[test]
    fn test_single_late_process_never_waits() {
        let processes = vec![Process::new(1, 5, 10)];
        for accounting in [WaitAccounting::Cumulative, WaitAccounting::Exact] {
            for s in all_schedulers() {
                let report = s.schedule_with(&processes, "one", accounting).unwrap();
                let row = report.rows[0];
                assert_eq!(row.wait, 0, "{}", s.discipline());
                assert_eq!(row.turnaround, 10);
                assert_eq!(row.completion, 15);
            }
        }
    }

    #[test]
    fn test_timing_identities_hold_for_all() {
        let batches = vec![
            textbook(),
            generate(&WorkloadSpec::new(25).with_seed(7)),
            generate(&WorkloadSpec::new(40).with_seed(99).with_max_arrival(200)),
        ];
        for processes in &batches {
            let total_burst: i128 = processes.iter().map(|p| i128::from(p.burst)).sum();
            for accounting in [WaitAccounting::Cumulative, WaitAccounting::Exact] {
                for s in all_schedulers() {
                    let report = s.schedule_with(processes, "props", accounting).unwrap();
                    assert_eq!(report.rows.len(), processes.len());
                    assert_eq!(
                        report.total_turnaround(),
                        report.total_wait() + total_burst,
                        "{}",
                        s.discipline()
                    );
                    for row in &report.rows {
                        assert!(row.wait >= 0);
                        assert_eq!(row.completion, row.arrival + row.wait + row.burst);
                    }
                    assert!(report.intervals.iter().all(|i| i.stop >= i.start));
                }
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let processes = generate(&WorkloadSpec::new(30).with_seed(3));
        for s in all_schedulers() {
            let a = s.schedule(&processes, "run").unwrap();
            let b = s.schedule(&processes, "run").unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_caller_records_untouched() {
        let processes = vec![
            Process::new(1, 0, 4).with_priority(9),
            Process::new(2, 0, 4).with_priority(1),
            Process::new(3, 0, 4).with_priority(9),
        ];
        let snapshot = processes.clone();
        for s in all_schedulers() {
            s.schedule(&processes, "aging").unwrap();
        }
        assert_eq!(processes, snapshot);
    }

    #[test]
    fn test_overflowing_timeline_is_rejected() {
        let half = i64::MAX / 2 + 1;
        let batches = vec![
            vec![Process::new(1, 0, half), Process::new(2, 0, half)],
            vec![Process::new(1, i64::MAX - 1, 5)],
        ];
        for processes in &batches {
            for accounting in [WaitAccounting::Cumulative, WaitAccounting::Exact] {
                for s in all_schedulers() {
                    let errors = s.schedule_with(processes, "huge", accounting).unwrap_err();
                    assert!(
                        errors.contains_kind(&ValidationErrorKind::TimeOverflow),
                        "{}",
                        s.discipline()
                    );
                }
            }
        }
    }

    #[test]
    fn test_timeline_ending_at_max_tick() {
        let processes = vec![Process::new(1, i64::MAX - 10, 4), Process::new(2, 0, 6)];
        for accounting in [WaitAccounting::Cumulative, WaitAccounting::Exact] {
            for s in all_schedulers() {
                let report = s.schedule_with(&processes, "edge", accounting).unwrap();
                assert_eq!(report.rows.len(), 2);
                assert!(report.rows.iter().all(|r| r.wait >= 0));
                assert_eq!(report.row_for(1).map(|r| r.turnaround), Some(4));
            }
        }
    }

    #[test]
    fn test_title_passthrough() {
        let report = Sjf.schedule(&textbook(), "my label").unwrap();
        assert_eq!(report.title, "my label");
        assert_eq!(report.discipline, Discipline::Sjf);
    }
}
