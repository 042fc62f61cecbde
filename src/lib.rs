//! Offline CPU scheduling simulator.
//!
//! Runs a fixed batch of processes through textbook dispatch disciplines and
//! reports, for each one, a Gantt chart plus per-process and average timing
//! figures (wait, turnaround, throughput). Everything is known up front and
//! the simulation is deterministic; nothing actually executes.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `RunInterval`, `ScheduleRow`,
//!   `ScheduleReport`, `Averages`, `Discipline`
//! - **`validation`**: Input checks (positive bursts, non-negative arrivals)
//! - **`dispatching`**: The shared not-arrived/ready/finished admission loop
//!   and its selection policies
//! - **`scheduler`**: FCFS, SJF, priority with aging and round-robin, plus the
//!   timeline accumulator that turns a run order into a report
//! - **`config`**: Which disciplines to run and how to account wait time
//! - **`loader`**, **`render`**, **`workload`**: Process files, text/JSON
//!   output and seeded random batches
//!
//! # Example
//!
//! ```
//! use cpu_schedule::models::Process;
//! use cpu_schedule::scheduler::{Scheduler, Sjf};
//!
//! let processes = vec![
//!     Process::new(1, 0, 24),
//!     Process::new(2, 0, 3),
//!     Process::new(3, 0, 3),
//! ];
//! let report = Sjf.schedule(&processes, "Shortest-job-first").unwrap();
//! assert_eq!(report.run_order(), vec![2, 3, 1]);
//! assert!((report.averages.unwrap().wait - 3.0).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod dispatching;
pub mod loader;
pub mod models;
pub mod render;
pub mod scheduler;
pub mod validation;
pub mod workload;
